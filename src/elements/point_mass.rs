//! Point mass on a link node

use serde::{Deserialize, Serialize};

use crate::error::{RotorError, RotorResult};

/// A translational point mass (used for bearing supports and foundations)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PointMass {
    /// Link node the mass sits on
    pub n: usize,
    /// Mass in x (kg)
    pub mx: f64,
    /// Mass in y (kg)
    pub my: f64,
}

impl PointMass {
    /// Create a point mass with equal mass in x and y
    pub fn new(n: usize, m: f64) -> RotorResult<Self> {
        Self::anisotropic(n, m, m)
    }

    /// Create a point mass with different mass in x and y
    pub fn anisotropic(n: usize, mx: f64, my: f64) -> RotorResult<Self> {
        if !(mx > 0.0) || !(my > 0.0) {
            return Err(RotorError::InvalidInput(format!(
                "point mass at node {n} must be positive (mx={mx}, my={my})"
            )));
        }
        Ok(Self { n, mx, my })
    }
}
