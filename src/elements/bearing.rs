//! Bearing element - linear spring/damper between a node and ground or a link node

use nalgebra::Matrix2;
use serde::{Deserialize, Serialize};

use crate::error::{RotorError, RotorResult};

/// A bearing with constant stiffness and damping coefficients
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BearingElement {
    /// Node the bearing acts on
    pub n: usize,
    /// Optional link node; the bearing connects `n` to ground when absent
    pub n_link: Option<usize>,
    /// Direct stiffness in x (N/m)
    pub kxx: f64,
    /// Direct stiffness in y (N/m)
    pub kyy: f64,
    /// Cross-coupled stiffness xy (N/m)
    pub kxy: f64,
    /// Cross-coupled stiffness yx (N/m)
    pub kyx: f64,
    /// Direct damping in x (N·s/m)
    pub cxx: f64,
    /// Direct damping in y (N·s/m)
    pub cyy: f64,
    /// Cross-coupled damping xy (N·s/m)
    pub cxy: f64,
    /// Cross-coupled damping yx (N·s/m)
    pub cyx: f64,
}

impl BearingElement {
    /// Create an isotropic bearing (kyy = kxx, cyy = cxx, no cross-coupling)
    pub fn new(n: usize, kxx: f64, cxx: f64) -> RotorResult<Self> {
        Self::with_coefficients(n, [kxx, kxx, 0.0, 0.0], [cxx, cxx, 0.0, 0.0])
    }

    /// Create a bearing from full coefficient sets
    ///
    /// # Arguments
    /// * `n` - Node number
    /// * `k` - Stiffness [kxx, kyy, kxy, kyx]
    /// * `c` - Damping [cxx, cyy, cxy, cyx]
    pub fn with_coefficients(n: usize, k: [f64; 4], c: [f64; 4]) -> RotorResult<Self> {
        if k.iter().chain(c.iter()).any(|v| !v.is_finite()) {
            return Err(RotorError::InvalidInput(format!(
                "bearing at node {n} has non-finite coefficients"
            )));
        }
        Ok(Self {
            n,
            n_link: None,
            kxx: k[0],
            kyy: k[1],
            kxy: k[2],
            kyx: k[3],
            cxx: c[0],
            cyy: c[1],
            cxy: c[2],
            cyx: c[3],
        })
    }

    /// Connect the bearing to a link node instead of ground
    pub fn with_link(mut self, n_link: usize) -> Self {
        self.n_link = Some(n_link);
        self
    }

    /// 2x2 stiffness block acting on [x, y]
    pub fn k(&self) -> Matrix2<f64> {
        Matrix2::new(self.kxx, self.kxy, self.kyx, self.kyy)
    }

    /// 2x2 damping block acting on [x, y]
    pub fn c(&self) -> Matrix2<f64> {
        Matrix2::new(self.cxx, self.cxy, self.cyx, self.cyy)
    }
}
