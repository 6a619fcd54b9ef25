//! Result types for deterministic rotor analyses

use serde::{Deserialize, Serialize};

use crate::math::{CMat, CVector, Mat};

/// Damped natural frequencies and log decrement over a speed sweep
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CampbellResults {
    /// Rotor speeds in rad/s
    pub speed_range: Vec<f64>,
    /// Damped natural frequencies (rad/s), shape (speeds, modes)
    pub wd: Mat,
    /// Logarithmic decrement, shape (speeds, modes)
    pub log_dec: Mat,
}

impl CampbellResults {
    /// Number of reported modes
    pub fn num_modes(&self) -> usize {
        self.wd.ncols()
    }
}

/// Transfer function between one input and one output DOF
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrequencyResponseResults {
    /// Excitation frequencies in rad/s
    pub freq_range: Vec<f64>,
    /// Displacement receptance
    pub freq_resp: CVector,
    /// Velocity mobility
    pub velc_resp: CVector,
    /// Accelerance
    pub accl_resp: CVector,
}

impl FrequencyResponseResults {
    /// Magnitude of the displacement receptance
    pub fn magnitude(&self) -> Vec<f64> {
        self.freq_resp.iter().map(|h| h.norm()).collect()
    }

    /// Phase of the displacement receptance in radians
    pub fn phase(&self) -> Vec<f64> {
        self.freq_resp.iter().map(|h| h.arg()).collect()
    }
}

/// Forced response at every DOF over a frequency sweep
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForcedResponseResults {
    /// Excitation frequencies in rad/s
    pub freq_range: Vec<f64>,
    /// Displacement response, shape (ndof, frequencies)
    pub forced_resp: CMat,
    /// Velocity response, shape (ndof, frequencies)
    pub velc_resp: CMat,
    /// Acceleration response, shape (ndof, frequencies)
    pub accl_resp: CMat,
}

/// Time-domain response to a forcing history
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeResponseResults {
    /// Time points in s
    pub t: Vec<f64>,
    /// Displacements, shape (time points, ndof)
    pub yout: Mat,
    /// Full state [displacements, velocities], shape (time points, 2 * ndof)
    pub xout: Mat,
}
