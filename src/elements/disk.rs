//! Disk element - rigid disk lumped at a shaft node

use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

use super::Material;
use crate::error::{RotorError, RotorResult};
use crate::math::{self, Mat4};

/// A rigid disk attached to a shaft node
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiskElement {
    /// Shaft node the disk sits on
    pub n: usize,
    /// Mass in kg
    pub m: f64,
    /// Diametral moment of inertia in kg·m²
    pub id: f64,
    /// Polar moment of inertia in kg·m²
    pub ip: f64,
}

impl DiskElement {
    /// Create a new disk from its inertia properties
    pub fn new(n: usize, m: f64, id: f64, ip: f64) -> RotorResult<Self> {
        if !(m > 0.0) || !(id >= 0.0) || !(ip >= 0.0) {
            return Err(RotorError::InvalidGeometry(format!(
                "disk at node {n} needs positive mass and non-negative inertia (m={m}, Id={id}, Ip={ip})"
            )));
        }
        Ok(Self { n, m, id, ip })
    }

    /// Create a disk from its geometry
    ///
    /// # Arguments
    /// * `n` - Shaft node
    /// * `material` - Disk material
    /// * `width` - Axial width in m
    /// * `i_d` - Inner diameter in m
    /// * `o_d` - Outer diameter in m
    pub fn from_geometry(
        n: usize,
        material: &Material,
        width: f64,
        i_d: f64,
        o_d: f64,
    ) -> RotorResult<Self> {
        if !(width > 0.0) || !(i_d >= 0.0) || !(o_d > i_d) {
            return Err(RotorError::InvalidGeometry(format!(
                "disk at node {n} needs width > 0 and 0 <= i_d < o_d"
            )));
        }
        let m = material.rho * PI * width * (o_d.powi(2) - i_d.powi(2)) / 4.0;
        let ip = m * (o_d.powi(2) + i_d.powi(2)) / 8.0;
        let id = ip / 2.0 + m * width.powi(2) / 12.0;
        Self::new(n, m, id, ip)
    }

    /// Element mass matrix [x, y, a, b]
    pub fn m(&self) -> Mat4 {
        math::disk_mass(self.m, self.id)
    }

    /// Element gyroscopic matrix
    pub fn g(&self) -> Mat4 {
        math::disk_gyroscopic(self.ip)
    }
}
