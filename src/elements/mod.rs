//! Deterministic rotor elements

mod bearing;
mod disk;
mod material;
mod point_mass;
mod shaft;

pub use bearing::BearingElement;
pub use disk::DiskElement;
pub use material::Material;
pub use point_mass::PointMass;
pub use shaft::ShaftElement;
