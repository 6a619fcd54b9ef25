//! Material properties

use serde::{Deserialize, Serialize};

/// Isotropic material for shaft and disk elements
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Material {
    /// Material name
    pub name: String,
    /// Modulus of elasticity (Young's modulus) in Pa
    pub e: f64,
    /// Shear modulus in Pa
    pub g_s: f64,
    /// Density in kg/m³
    pub rho: f64,
}

impl Material {
    /// Create a new material with given properties
    pub fn new(name: &str, e: f64, g_s: f64, rho: f64) -> Self {
        Self {
            name: name.to_string(),
            e,
            g_s,
            rho,
        }
    }

    /// Create a material from E and Poisson's ratio
    /// G is calculated as E / (2 * (1 + nu))
    pub fn isotropic(name: &str, e: f64, nu: f64, rho: f64) -> Self {
        Self::new(name, e, e / (2.0 * (1.0 + nu)), rho)
    }

    /// Structural steel as used for rotor shafts
    pub fn steel() -> Self {
        Self::new("Steel", 211e9, 81.2e9, 7810.0)
    }

    /// Poisson's ratio implied by E and G
    pub fn poisson(&self) -> f64 {
        self.e / (2.0 * self.g_s) - 1.0
    }
}

impl Default for Material {
    fn default() -> Self {
        Self::steel()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_isotropic_material() {
        let mat = Material::isotropic("Al", 68.9e9, 0.33, 2700.0);
        assert_relative_eq!(mat.poisson(), 0.33, epsilon = 1e-12);
    }

    #[test]
    fn test_steel_properties() {
        let steel = Material::steel();
        assert_eq!(steel.e, 211e9);
        assert_relative_eq!(steel.poisson(), 0.29926, epsilon = 1e-5);
    }
}
