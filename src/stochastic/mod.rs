//! Stochastic rotor assemblies
//!
//! Elements whose parameters are given as sequences of already-sampled values
//! are realized into one deterministic [`Rotor`](crate::rotor::Rotor) per
//! sample index. Batch analyses run the deterministic analysis once per sample
//! and stack the outputs along a sample axis.
//!
//! The sample axis is not placed consistently across analyses; each result
//! type documents its own layout:
//! - Campbell: (modes, speeds, samples)
//! - frequency response: (frequencies, samples)
//! - unbalance response: (samples, DOFs, frequencies)
//! - time response: (samples, time points, DOFs)

mod assembly;
mod batch;
mod elements;
mod param;
mod results;
mod samples;
pub mod validate;

use serde::{Deserialize, Serialize};
use std::fmt;

pub use assembly::StochasticRotor;
pub use elements::{RandomBearing, RandomDisk, RandomElement, RandomPointMass, RandomShaftElement};
pub use param::{ParameterKey, RandomParameterSet, RandomValue};
pub use results::{
    StCampbellResults, StForcedResponseResults, StFrequencyResponseResults, StTimeResponseResults,
};
pub use samples::Samples;

/// Category of a rotor element
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ElementCategory {
    Shaft,
    Disk,
    Bearing,
    PointMass,
}

impl ElementCategory {
    /// All categories in validation order
    pub const ALL: [ElementCategory; 4] = [
        ElementCategory::Shaft,
        ElementCategory::Disk,
        ElementCategory::Bearing,
        ElementCategory::PointMass,
    ];

    /// Prefix used in parameter keys, e.g. `bearing[0].kxx`
    pub fn key_prefix(&self) -> &'static str {
        match self {
            Self::Shaft => "shaft",
            Self::Disk => "disk",
            Self::Bearing => "bearing",
            Self::PointMass => "point_mass",
        }
    }

    /// Wording used in sample length error messages
    pub(crate) fn list_label(&self) -> &'static str {
        match self {
            Self::Shaft => "shaft elements",
            Self::Disk => "disk elements",
            Self::Bearing => "bearing elements",
            Self::PointMass => "point mass",
        }
    }

    /// Parse a key prefix
    pub fn from_prefix(prefix: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.key_prefix() == prefix)
    }
}

impl fmt::Display for ElementCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Shaft => "shaft",
            Self::Disk => "disk",
            Self::Bearing => "bearing",
            Self::PointMass => "point mass",
        };
        f.write_str(name)
    }
}
