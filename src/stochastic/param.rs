//! Random parameter values and per-element parameter sets

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ElementCategory;
use crate::error::{RotorError, RotorResult};

/// A parameter that is either fixed or given as a sequence of samples
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RandomValue {
    Fixed(f64),
    Random(Vec<f64>),
}

impl RandomValue {
    pub fn is_random(&self) -> bool {
        matches!(self, Self::Random(_))
    }

    /// Number of samples, `None` for a fixed value
    pub fn sample_len(&self) -> Option<usize> {
        match self {
            Self::Fixed(_) => None,
            Self::Random(values) => Some(values.len()),
        }
    }

    /// Value used by sample `index`
    ///
    /// A fixed value is shared by every sample.
    pub fn value_at(&self, index: usize) -> Option<f64> {
        match self {
            Self::Fixed(value) => Some(*value),
            Self::Random(values) => values.get(index).copied(),
        }
    }

    pub fn as_fixed(&self) -> Option<f64> {
        match self {
            Self::Fixed(value) => Some(*value),
            Self::Random(_) => None,
        }
    }

    pub fn as_samples(&self) -> Option<&[f64]> {
        match self {
            Self::Fixed(_) => None,
            Self::Random(values) => Some(values),
        }
    }
}

impl From<f64> for RandomValue {
    fn from(value: f64) -> Self {
        Self::Fixed(value)
    }
}

impl From<Vec<f64>> for RandomValue {
    fn from(values: Vec<f64>) -> Self {
        Self::Random(values)
    }
}

impl From<&[f64]> for RandomValue {
    fn from(values: &[f64]) -> Self {
        Self::Random(values.to_vec())
    }
}

impl<const N: usize> From<[f64; N]> for RandomValue {
    fn from(values: [f64; N]) -> Self {
        Self::Random(values.to_vec())
    }
}

/// Named parameters of one element, in declaration order
///
/// All random entries share the same non-zero sample length.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RandomParameterSet {
    values: Vec<(String, RandomValue)>,
}

impl RandomParameterSet {
    /// Build a parameter set and check it against the declared random names
    ///
    /// Every name in `is_random` must hold a sequence and every sequence must
    /// be declared random.
    pub fn new<I, K>(values: I, is_random: &[&str]) -> RotorResult<Self>
    where
        I: IntoIterator<Item = (K, RandomValue)>,
        K: Into<String>,
    {
        let set = Self {
            values: values.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        };

        for &name in is_random {
            if !set.get(name)?.is_random() {
                return Err(RotorError::InvalidParameter(format!(
                    "'{name}' is declared random but holds a single value"
                )));
            }
        }
        for (name, value) in &set.values {
            if value.is_random() && !is_random.contains(&name.as_str()) {
                return Err(RotorError::InvalidParameter(format!(
                    "'{name}' holds a sequence but is not declared random"
                )));
            }
        }

        let mut expected = None;
        for (name, value) in &set.values {
            if let Some(found) = value.sample_len() {
                check_length(name, expected, found)?;
                expected.get_or_insert(found);
            }
        }
        Ok(set)
    }

    /// Build a parameter set holding only fixed values
    pub fn from_fixed<'a>(values: impl IntoIterator<Item = (&'a str, f64)>) -> Self {
        Self {
            values: values
                .into_iter()
                .map(|(k, v)| (k.to_string(), RandomValue::Fixed(v)))
                .collect(),
        }
    }

    pub fn get(&self, name: &str) -> RotorResult<&RandomValue> {
        self.values
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v)
            .ok_or_else(|| RotorError::UnknownParameter(name.to_string()))
    }

    /// Replace a parameter value
    ///
    /// A sequence must match the length of the other random parameters.
    /// Assigning a single value makes the parameter fixed.
    pub fn set(&mut self, name: &str, value: RandomValue) -> RotorResult<()> {
        self.get(name)?;
        if let Some(found) = value.sample_len() {
            let expected = self
                .values
                .iter()
                .filter(|(k, _)| k != name)
                .find_map(|(_, v)| v.sample_len());
            check_length(name, expected, found)?;
        }
        if let Some((_, slot)) = self.values.iter_mut().find(|(k, _)| k == name) {
            *slot = value;
        }
        Ok(())
    }

    /// Value of `name` for sample `index`
    pub fn value_at(&self, name: &str, index: usize) -> RotorResult<f64> {
        let value = self.get(name)?;
        value
            .value_at(index)
            .ok_or_else(|| RotorError::SampleOutOfRange {
                index,
                size: value.sample_len().unwrap_or(1),
            })
    }

    /// Sample length shared by the random parameters
    pub fn sample_len(&self) -> Option<usize> {
        self.values.iter().find_map(|(_, v)| v.sample_len())
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.values.iter().map(|(k, _)| k.as_str())
    }

    pub fn random_names(&self) -> impl Iterator<Item = &str> {
        self.values
            .iter()
            .filter(|(_, v)| v.is_random())
            .map(|(k, _)| k.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &RandomValue)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v))
    }
}

fn check_length(name: &str, expected: Option<usize>, found: usize) -> RotorResult<()> {
    if found == 0 {
        return Err(RotorError::InvalidParameter(format!(
            "'{name}' has an empty sample sequence"
        )));
    }
    match expected {
        Some(expected) if expected != found => Err(RotorError::ParameterLength {
            key: name.to_string(),
            expected,
            found,
        }),
        _ => Ok(()),
    }
}

/// Parameter address of the form `<category>[<index>].<name>`, e.g. `bearing[0].kxx`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ParameterKey {
    pub category: ElementCategory,
    pub index: usize,
    pub name: String,
}

impl ParameterKey {
    pub fn new(category: ElementCategory, index: usize, name: impl Into<String>) -> Self {
        Self {
            category,
            index,
            name: name.into(),
        }
    }
}

impl fmt::Display for ParameterKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}[{}].{}",
            self.category.key_prefix(),
            self.index,
            self.name
        )
    }
}

impl FromStr for ParameterKey {
    type Err = RotorError;

    fn from_str(key: &str) -> Result<Self, Self::Err> {
        let unknown = || RotorError::UnknownParameter(key.to_string());

        let (element, name) = key.split_once('.').ok_or_else(unknown)?;
        let (prefix, index) = element
            .strip_suffix(']')
            .and_then(|e| e.split_once('['))
            .ok_or_else(unknown)?;
        let category = ElementCategory::from_prefix(prefix).ok_or_else(unknown)?;
        let index = index.parse().map_err(|_| unknown())?;
        if name.is_empty() {
            return Err(unknown());
        }
        Ok(Self::new(category, index, name))
    }
}
