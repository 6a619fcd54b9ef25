//! Stacked results of batch analyses over all samples

use ndarray::{Array2, Array3};
use num_complex::Complex64;
use serde::{Deserialize, Serialize};

use crate::error::RotorResult;

/// Campbell diagram data for every sample
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StCampbellResults {
    /// Rotor speeds in rad/s
    pub speed_range: Vec<f64>,
    /// Damped natural frequencies (rad/s), shape (modes, speeds, samples)
    pub wd: Array3<f64>,
    /// Logarithmic decrement, shape (modes, speeds, samples)
    pub log_dec: Array3<f64>,
}

impl StCampbellResults {
    pub fn n_samples(&self) -> usize {
        self.wd.dim().2
    }

    pub fn to_json(&self) -> RotorResult<String> {
        Ok(serde_json::to_string(self)?)
    }
}

/// Transfer functions for every sample, shape (frequencies, samples)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StFrequencyResponseResults {
    /// Excitation frequencies in rad/s
    pub freq_range: Vec<f64>,
    pub freq_resp: Array2<Complex64>,
    pub velc_resp: Array2<Complex64>,
    pub accl_resp: Array2<Complex64>,
}

impl StFrequencyResponseResults {
    pub fn n_samples(&self) -> usize {
        self.freq_resp.ncols()
    }

    /// Magnitude of the displacement receptance, shape (frequencies, samples)
    pub fn magnitude(&self) -> Array2<f64> {
        self.freq_resp.mapv(|h| h.norm())
    }

    /// Phase of the displacement receptance in radians
    pub fn phase(&self) -> Array2<f64> {
        self.freq_resp.mapv(|h| h.arg())
    }

    pub fn to_json(&self) -> RotorResult<String> {
        Ok(serde_json::to_string(self)?)
    }
}

/// Unbalance response for every sample, shape (samples, ndof, frequencies)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StForcedResponseResults {
    /// Rotor speeds in rad/s
    pub freq_range: Vec<f64>,
    pub forced_resp: Array3<Complex64>,
    pub velc_resp: Array3<Complex64>,
    pub accl_resp: Array3<Complex64>,
}

impl StForcedResponseResults {
    pub fn n_samples(&self) -> usize {
        self.forced_resp.dim().0
    }

    pub fn to_json(&self) -> RotorResult<String> {
        Ok(serde_json::to_string(self)?)
    }
}

/// Time response for every sample
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StTimeResponseResults {
    /// Time points in s
    pub time: Vec<f64>,
    /// Displacements, shape (samples, time points, ndof)
    pub yout: Array3<f64>,
    /// Full state, shape (samples, time points, 2 * ndof)
    pub xout: Array3<f64>,
}

impl StTimeResponseResults {
    pub fn n_samples(&self) -> usize {
        self.yout.dim().0
    }

    pub fn to_json(&self) -> RotorResult<String> {
        Ok(serde_json::to_string(self)?)
    }
}
