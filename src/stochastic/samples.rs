//! Lazy iteration over the realized samples of a stochastic rotor

use std::iter::FusedIterator;

use super::StochasticRotor;
use crate::error::RotorResult;
use crate::rotor::Rotor;

/// Iterator yielding one deterministic rotor per sample, in index order
///
/// Created by [`StochasticRotor::samples`]. Rotors are assembled on demand.
#[derive(Debug, Clone)]
pub struct Samples<'a> {
    rotor: &'a StochasticRotor,
    next: usize,
    len: usize,
}

impl<'a> Samples<'a> {
    pub(crate) fn new(rotor: &'a StochasticRotor, len: usize) -> Self {
        Self {
            rotor,
            next: 0,
            len,
        }
    }
}

impl Iterator for Samples<'_> {
    type Item = RotorResult<Rotor>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.next >= self.len {
            return None;
        }
        let sample = self.rotor.build_sample(self.next);
        self.next += 1;
        Some(sample)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.len - self.next;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Samples<'_> {}

impl FusedIterator for Samples<'_> {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_samples_restart() {
        let rotor = StochasticRotor::example().unwrap();

        let first: Vec<Rotor> = rotor.samples().unwrap().map(Result::unwrap).collect();
        let second: Vec<Rotor> = rotor.samples().unwrap().map(Result::unwrap).collect();
        assert_eq!(first.len(), 2);
        assert_eq!(first, second);
        assert_eq!(first[1], rotor.realize(1).unwrap());
    }

    #[test]
    fn test_samples_exhaust() {
        let rotor = StochasticRotor::example().unwrap();
        let mut samples = rotor.samples().unwrap();
        assert_eq!(samples.len(), 2);
        samples.next();
        samples.next();
        assert!(samples.next().is_none());
        assert!(samples.next().is_none());
    }
}
