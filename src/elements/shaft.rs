//! Shaft element - Timoshenko beam segment of the rotor

use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

use super::Material;
use crate::error::{RotorError, RotorResult};
use crate::math::{self, Mat8};

/// A cylindrical shaft segment joining two consecutive shaft nodes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShaftElement {
    /// Element length in m
    pub l: f64,
    /// Inner diameter in m
    pub idl: f64,
    /// Outer diameter in m
    pub odl: f64,
    /// Element material
    pub material: Material,
    /// Include shear deformation in the stiffness, mass and gyroscopic matrices
    pub shear_effects: bool,
    /// Include rotary inertia in the mass matrix
    pub rotary_inertia: bool,
    /// Include the gyroscopic matrix
    pub gyroscopic: bool,
}

impl ShaftElement {
    /// Create a new shaft element
    pub fn new(l: f64, idl: f64, odl: f64, material: Material) -> RotorResult<Self> {
        if !(l > 0.0) {
            return Err(RotorError::InvalidGeometry(format!(
                "shaft element length must be positive, got {l}"
            )));
        }
        if !(idl >= 0.0) || !(odl > idl) {
            return Err(RotorError::InvalidGeometry(format!(
                "shaft element diameters must satisfy 0 <= idl < odl, got idl={idl}, odl={odl}"
            )));
        }
        Ok(Self {
            l,
            idl,
            odl,
            material,
            shear_effects: true,
            rotary_inertia: true,
            gyroscopic: true,
        })
    }

    /// Toggle shear deformation
    pub fn with_shear_effects(mut self, enabled: bool) -> Self {
        self.shear_effects = enabled;
        self
    }

    /// Toggle rotary inertia
    pub fn with_rotary_inertia(mut self, enabled: bool) -> Self {
        self.rotary_inertia = enabled;
        self
    }

    /// Toggle the gyroscopic effect
    pub fn with_gyroscopic(mut self, enabled: bool) -> Self {
        self.gyroscopic = enabled;
        self
    }

    /// Cross-sectional area in m²
    pub fn area(&self) -> f64 {
        PI * (self.odl.powi(2) - self.idl.powi(2)) / 4.0
    }

    /// Diametral area moment of inertia in m⁴
    pub fn inertia(&self) -> f64 {
        PI * (self.odl.powi(4) - self.idl.powi(4)) / 64.0
    }

    /// Element mass in kg
    pub fn mass(&self) -> f64 {
        self.material.rho * self.area() * self.l
    }

    /// Cowper shear coefficient for a hollow circular section
    pub fn shear_coefficient(&self) -> f64 {
        let nu = self.material.poisson();
        let r2 = (self.idl / self.odl).powi(2);
        let a = (1.0 + r2).powi(2);
        6.0 * (1.0 + nu) * a / ((7.0 + 6.0 * nu) * a + (20.0 + 12.0 * nu) * r2)
    }

    /// Shear deformation parameter phi (zero when shear effects are off)
    pub fn phi(&self) -> f64 {
        if !self.shear_effects {
            return 0.0;
        }
        12.0 * self.material.e * self.inertia()
            / (self.material.g_s * self.shear_coefficient() * self.area() * self.l.powi(2))
    }

    /// Element stiffness matrix [x0, y0, a0, b0, x1, y1, a1, b1]
    pub fn k(&self) -> Mat8 {
        math::shaft_stiffness(self.material.e, self.inertia(), self.l, self.phi())
    }

    /// Element mass matrix
    pub fn m(&self) -> Mat8 {
        let phi = self.phi();
        let mut m = math::shaft_translational_mass(self.material.rho, self.area(), self.l, phi);
        if self.rotary_inertia {
            m += math::shaft_rotary_mass(self.material.rho, self.inertia(), self.l, phi);
        }
        m
    }

    /// Element gyroscopic matrix (multiplied by the rotor speed)
    pub fn g(&self) -> Mat8 {
        if self.gyroscopic {
            math::shaft_gyroscopic(self.material.rho, self.inertia(), self.l, self.phi())
        } else {
            Mat8::zeros()
        }
    }
}
