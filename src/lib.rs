//! Stochastic Rotor - Monte Carlo rotor dynamics in native Rust
//!
//! This library wraps a finite element rotor model so that element
//! parameters can be given as sequences of already-sampled values:
//! - Shaft, disk, bearing and point mass elements with random parameters
//! - Per-sample realization of deterministic rotors
//! - Campbell diagrams (damped natural frequencies, log decrement)
//! - Frequency, unbalance and time responses stacked over all samples
//!
//! ## Example
//! ```rust
//! use stochastic_rotor::prelude::*;
//!
//! let steel = Material::steel();
//!
//! // Six fixed shaft elements
//! let shafts = (0..6)
//!     .map(|_| RandomShaftElement::new(0.25, 0.0, 0.05, &steel, &[]))
//!     .collect::<RotorResult<Vec<_>>>()
//!     .unwrap();
//!
//! // Bearings with sampled stiffness and damping
//! let bearings = vec![
//!     RandomBearing::new(0, vec![1e6, 2e6], vec![1e3, 2e3], &["kxx", "cxx"]).unwrap(),
//!     RandomBearing::new(6, vec![1e6, 2e6], vec![1e3, 2e3], &["kxx", "cxx"]).unwrap(),
//! ];
//!
//! let rotor = StochasticRotor::new(shafts, Vec::new(), bearings, Vec::new()).unwrap();
//! assert_eq!(rotor.rv_size().unwrap(), Some(2));
//!
//! // Campbell diagram, shape (modes, speeds, samples)
//! let campbell = rotor.run_campbell(&[0.0, 100.0, 200.0]).unwrap();
//! assert_eq!(campbell.wd.dim(), (6, 3, 2));
//! ```

pub mod analysis;
pub mod elements;
pub mod error;
pub mod math;
pub mod results;
pub mod rotor;
pub mod stochastic;

// Re-export common types
pub mod prelude {
    pub use crate::analysis::{AnalysisOptions, AnalysisType};
    pub use crate::elements::{BearingElement, DiskElement, Material, PointMass, ShaftElement};
    pub use crate::error::{RotorError, RotorResult};
    pub use crate::results::{
        CampbellResults, ForcedResponseResults, FrequencyResponseResults, TimeResponseResults,
    };
    pub use crate::rotor::Rotor;
    pub use crate::stochastic::{
        ElementCategory, RandomBearing, RandomDisk, RandomElement, RandomPointMass,
        RandomShaftElement, RandomValue, StCampbellResults, StForcedResponseResults,
        StFrequencyResponseResults, StTimeResponseResults, StochasticRotor,
    };
}
