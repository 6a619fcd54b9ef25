//! Analysis kinds and options

use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of rotor dynamic analysis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AnalysisType {
    /// Damped natural frequencies and log decrement over a speed sweep
    Campbell,
    /// Transfer function between one input and one output DOF
    FrequencyResponse,
    /// Forced response to a rotating unbalance at all DOFs
    UnbalanceResponse,
    /// Time integration under an arbitrary forcing history
    TimeResponse,
}

impl fmt::Display for AnalysisType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Campbell => "campbell",
            Self::FrequencyResponse => "frequency response",
            Self::UnbalanceResponse => "unbalance response",
            Self::TimeResponse => "time response",
        };
        f.write_str(name)
    }
}

/// Options shared by the rotor analyses
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisOptions {
    /// Number of modes reported by a Campbell sweep
    pub num_modes: usize,
    /// Eigenvalues whose imaginary part is at or below this value (rad/s)
    /// are treated as non-oscillatory
    pub imag_tolerance: f64,
    /// Log every realized sample at info level instead of debug
    pub log: bool,
}

impl Default for AnalysisOptions {
    fn default() -> Self {
        Self {
            num_modes: 6,
            imag_tolerance: 1e-6,
            log: false,
        }
    }
}

impl AnalysisOptions {
    /// Create options reporting `num_modes` modes
    pub fn modal(num_modes: usize) -> Self {
        Self {
            num_modes,
            ..Self::default()
        }
    }

    /// Set the number of reported modes
    pub fn with_modes(mut self, num_modes: usize) -> Self {
        self.num_modes = num_modes;
        self
    }

    /// Set the oscillatory-mode threshold
    pub fn with_imag_tolerance(mut self, tol: f64) -> Self {
        self.imag_tolerance = tol;
        self
    }

    /// Enable per-sample logging
    pub fn with_logging(mut self) -> Self {
        self.log = true;
        self
    }

    /// Log level used for per-sample progress messages
    pub(crate) fn sample_level(&self) -> log::Level {
        if self.log {
            log::Level::Info
        } else {
            log::Level::Debug
        }
    }
}
