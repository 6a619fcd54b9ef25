//! Random counterparts of the deterministic rotor elements
//!
//! Each wrapper keeps its numeric parameters in a [`RandomParameterSet`] and
//! realizes a deterministic element for a given sample index. Topology
//! (node numbers, links) and modelling flags are never random.

use serde::{Deserialize, Serialize};

use super::param::{RandomParameterSet, RandomValue};
use super::ElementCategory;
use crate::elements::{BearingElement, DiskElement, Material, PointMass, ShaftElement};
use crate::error::RotorResult;

/// Common behaviour of the random element wrappers
pub trait RandomElement {
    /// Deterministic element produced for one sample
    type Output;

    const CATEGORY: ElementCategory;

    fn params(&self) -> &RandomParameterSet;

    fn params_mut(&mut self) -> &mut RandomParameterSet;

    /// Deterministic element for sample `index`
    fn realize(&self, index: usize) -> RotorResult<Self::Output>;

    /// Sample length of the random parameters, `None` if all are fixed
    fn sample_len(&self) -> Option<usize> {
        self.params().sample_len()
    }

    fn is_random(&self) -> bool {
        self.sample_len().is_some()
    }

    fn get(&self, name: &str) -> RotorResult<&RandomValue> {
        self.params().get(name)
    }

    fn set(&mut self, name: &str, value: RandomValue) -> RotorResult<()> {
        self.params_mut().set(name, value)
    }
}

/// Shaft element with random geometry and material properties
///
/// Parameters: `L`, `idl`, `odl`, `E`, `G_s`, `rho`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RandomShaftElement {
    params: RandomParameterSet,
    pub material_name: String,
    pub shear_effects: bool,
    pub rotary_inertia: bool,
    pub gyroscopic: bool,
}

impl RandomShaftElement {
    /// Create a shaft element; material properties start fixed
    pub fn new(
        l: impl Into<RandomValue>,
        idl: impl Into<RandomValue>,
        odl: impl Into<RandomValue>,
        material: &Material,
        is_random: &[&str],
    ) -> RotorResult<Self> {
        Self::with_material(
            l,
            idl,
            odl,
            material.e,
            material.g_s,
            material.rho,
            is_random,
        )
        .map(|shaft| Self {
            material_name: material.name.clone(),
            ..shaft
        })
    }

    /// Create a shaft element whose material properties may also be random
    pub fn with_material(
        l: impl Into<RandomValue>,
        idl: impl Into<RandomValue>,
        odl: impl Into<RandomValue>,
        e: impl Into<RandomValue>,
        g_s: impl Into<RandomValue>,
        rho: impl Into<RandomValue>,
        is_random: &[&str],
    ) -> RotorResult<Self> {
        let params = RandomParameterSet::new(
            [
                ("L", l.into()),
                ("idl", idl.into()),
                ("odl", odl.into()),
                ("E", e.into()),
                ("G_s", g_s.into()),
                ("rho", rho.into()),
            ],
            is_random,
        )?;
        Ok(Self {
            params,
            material_name: String::from("Material"),
            shear_effects: true,
            rotary_inertia: true,
            gyroscopic: true,
        })
    }

    pub fn with_shear_effects(mut self, enabled: bool) -> Self {
        self.shear_effects = enabled;
        self
    }

    pub fn with_rotary_inertia(mut self, enabled: bool) -> Self {
        self.rotary_inertia = enabled;
        self
    }

    pub fn with_gyroscopic(mut self, enabled: bool) -> Self {
        self.gyroscopic = enabled;
        self
    }
}

impl RandomElement for RandomShaftElement {
    type Output = ShaftElement;
    const CATEGORY: ElementCategory = ElementCategory::Shaft;

    fn params(&self) -> &RandomParameterSet {
        &self.params
    }

    fn params_mut(&mut self) -> &mut RandomParameterSet {
        &mut self.params
    }

    fn realize(&self, index: usize) -> RotorResult<ShaftElement> {
        let p = &self.params;
        let material = Material::new(
            &self.material_name,
            p.value_at("E", index)?,
            p.value_at("G_s", index)?,
            p.value_at("rho", index)?,
        );
        Ok(ShaftElement::new(
            p.value_at("L", index)?,
            p.value_at("idl", index)?,
            p.value_at("odl", index)?,
            material,
        )?
        .with_shear_effects(self.shear_effects)
        .with_rotary_inertia(self.rotary_inertia)
        .with_gyroscopic(self.gyroscopic))
    }
}

impl From<ShaftElement> for RandomShaftElement {
    fn from(shaft: ShaftElement) -> Self {
        let params = [
            ("L", shaft.l),
            ("idl", shaft.idl),
            ("odl", shaft.odl),
            ("E", shaft.material.e),
            ("G_s", shaft.material.g_s),
            ("rho", shaft.material.rho),
        ];
        Self {
            params: fixed_params(&params),
            material_name: shaft.material.name,
            shear_effects: shaft.shear_effects,
            rotary_inertia: shaft.rotary_inertia,
            gyroscopic: shaft.gyroscopic,
        }
    }
}

/// Disk with random inertia properties
///
/// Parameters: `m`, `Id`, `Ip`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RandomDisk {
    pub n: usize,
    params: RandomParameterSet,
}

impl RandomDisk {
    pub fn new(
        n: usize,
        m: impl Into<RandomValue>,
        id: impl Into<RandomValue>,
        ip: impl Into<RandomValue>,
        is_random: &[&str],
    ) -> RotorResult<Self> {
        let params = RandomParameterSet::new(
            [("m", m.into()), ("Id", id.into()), ("Ip", ip.into())],
            is_random,
        )?;
        Ok(Self { n, params })
    }
}

impl RandomElement for RandomDisk {
    type Output = DiskElement;
    const CATEGORY: ElementCategory = ElementCategory::Disk;

    fn params(&self) -> &RandomParameterSet {
        &self.params
    }

    fn params_mut(&mut self) -> &mut RandomParameterSet {
        &mut self.params
    }

    fn realize(&self, index: usize) -> RotorResult<DiskElement> {
        let p = &self.params;
        DiskElement::new(
            self.n,
            p.value_at("m", index)?,
            p.value_at("Id", index)?,
            p.value_at("Ip", index)?,
        )
    }
}

impl From<DiskElement> for RandomDisk {
    fn from(disk: DiskElement) -> Self {
        Self {
            n: disk.n,
            params: fixed_params(&[("m", disk.m), ("Id", disk.id), ("Ip", disk.ip)]),
        }
    }
}

/// Bearing with random stiffness and damping coefficients
///
/// Parameters: `kxx`, `kyy`, `kxy`, `kyx`, `cxx`, `cyy`, `cxy`, `cyx`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RandomBearing {
    pub n: usize,
    pub n_link: Option<usize>,
    params: RandomParameterSet,
}

impl RandomBearing {
    /// Create an isotropic bearing
    ///
    /// `kyy` and `cyy` take the values of `kxx` and `cxx`, and are random
    /// whenever those are.
    pub fn new(
        n: usize,
        kxx: impl Into<RandomValue>,
        cxx: impl Into<RandomValue>,
        is_random: &[&str],
    ) -> RotorResult<Self> {
        let kxx = kxx.into();
        let cxx = cxx.into();
        let mut random = is_random.to_vec();
        for (direct, mirror) in [("kxx", "kyy"), ("cxx", "cyy")] {
            if is_random.contains(&direct) && !random.contains(&mirror) {
                random.push(mirror);
            }
        }
        Self::with_coefficients(
            n,
            [kxx.clone(), kxx, 0.0.into(), 0.0.into()],
            [cxx.clone(), cxx, 0.0.into(), 0.0.into()],
            &random,
        )
    }

    /// Create a bearing from full coefficient sets
    ///
    /// # Arguments
    /// * `k` - Stiffness [kxx, kyy, kxy, kyx]
    /// * `c` - Damping [cxx, cyy, cxy, cyx]
    pub fn with_coefficients(
        n: usize,
        k: [RandomValue; 4],
        c: [RandomValue; 4],
        is_random: &[&str],
    ) -> RotorResult<Self> {
        let [kxx, kyy, kxy, kyx] = k;
        let [cxx, cyy, cxy, cyx] = c;
        let params = RandomParameterSet::new(
            [
                ("kxx", kxx),
                ("kyy", kyy),
                ("kxy", kxy),
                ("kyx", kyx),
                ("cxx", cxx),
                ("cyy", cyy),
                ("cxy", cxy),
                ("cyx", cyx),
            ],
            is_random,
        )?;
        Ok(Self {
            n,
            n_link: None,
            params,
        })
    }

    /// Connect the bearing to a link node instead of ground
    pub fn with_link(mut self, n_link: usize) -> Self {
        self.n_link = Some(n_link);
        self
    }
}

impl RandomElement for RandomBearing {
    type Output = BearingElement;
    const CATEGORY: ElementCategory = ElementCategory::Bearing;

    fn params(&self) -> &RandomParameterSet {
        &self.params
    }

    fn params_mut(&mut self) -> &mut RandomParameterSet {
        &mut self.params
    }

    fn realize(&self, index: usize) -> RotorResult<BearingElement> {
        let p = &self.params;
        let k = [
            p.value_at("kxx", index)?,
            p.value_at("kyy", index)?,
            p.value_at("kxy", index)?,
            p.value_at("kyx", index)?,
        ];
        let c = [
            p.value_at("cxx", index)?,
            p.value_at("cyy", index)?,
            p.value_at("cxy", index)?,
            p.value_at("cyx", index)?,
        ];
        let bearing = BearingElement::with_coefficients(self.n, k, c)?;
        Ok(match self.n_link {
            Some(link) => bearing.with_link(link),
            None => bearing,
        })
    }
}

impl From<BearingElement> for RandomBearing {
    fn from(b: BearingElement) -> Self {
        let params = [
            ("kxx", b.kxx),
            ("kyy", b.kyy),
            ("kxy", b.kxy),
            ("kyx", b.kyx),
            ("cxx", b.cxx),
            ("cyy", b.cyy),
            ("cxy", b.cxy),
            ("cyx", b.cyx),
        ];
        Self {
            n: b.n,
            n_link: b.n_link,
            params: fixed_params(&params),
        }
    }
}

/// Point mass with random mass
///
/// Parameters: `mx`, `my`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RandomPointMass {
    pub n: usize,
    params: RandomParameterSet,
}

impl RandomPointMass {
    /// Create a point mass with equal mass in x and y
    ///
    /// Declaring `m` random makes both `mx` and `my` random.
    pub fn new(n: usize, m: impl Into<RandomValue>, is_random: &[&str]) -> RotorResult<Self> {
        let m = m.into();
        let mut random: Vec<&str> = Vec::with_capacity(is_random.len() + 1);
        for &name in is_random {
            if name == "m" {
                random.extend(["mx", "my"]);
            } else {
                random.push(name);
            }
        }
        Self::anisotropic(n, m.clone(), m, &random)
    }

    pub fn anisotropic(
        n: usize,
        mx: impl Into<RandomValue>,
        my: impl Into<RandomValue>,
        is_random: &[&str],
    ) -> RotorResult<Self> {
        let params = RandomParameterSet::new([("mx", mx.into()), ("my", my.into())], is_random)?;
        Ok(Self { n, params })
    }
}

impl RandomElement for RandomPointMass {
    type Output = PointMass;
    const CATEGORY: ElementCategory = ElementCategory::PointMass;

    fn params(&self) -> &RandomParameterSet {
        &self.params
    }

    fn params_mut(&mut self) -> &mut RandomParameterSet {
        &mut self.params
    }

    fn realize(&self, index: usize) -> RotorResult<PointMass> {
        PointMass::anisotropic(
            self.n,
            self.params.value_at("mx", index)?,
            self.params.value_at("my", index)?,
        )
    }
}

impl From<PointMass> for RandomPointMass {
    fn from(pm: PointMass) -> Self {
        Self {
            n: pm.n,
            params: fixed_params(&[("mx", pm.mx), ("my", pm.my)]),
        }
    }
}

fn fixed_params(values: &[(&str, f64)]) -> RandomParameterSet {
    RandomParameterSet::from_fixed(values.iter().copied())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RotorError;

    #[test]
    fn test_random_shaft_realize() {
        let steel = Material::steel();
        let shaft =
            RandomShaftElement::new(vec![0.25, 0.30], 0.0, vec![0.05, 0.06], &steel, &["L", "odl"])
                .unwrap();
        assert_eq!(shaft.sample_len(), Some(2));

        let s1 = shaft.realize(1).unwrap();
        assert_eq!(s1.l, 0.30);
        assert_eq!(s1.odl, 0.06);
        assert_eq!(s1.material, steel);
        assert!(shaft.realize(2).is_err());
    }

    #[test]
    fn test_bearing_mirrors_direct_coefficients() {
        let bearing = RandomBearing::new(0, vec![1e6, 2e6], vec![1e3, 2e3], &["kxx", "cxx"])
            .unwrap()
            .with_link(7);
        let b = bearing.realize(1).unwrap();
        assert_eq!((b.kxx, b.kyy, b.kxy), (2e6, 2e6, 0.0));
        assert_eq!((b.cxx, b.cyy, b.cyx), (2e3, 2e3, 0.0));
        assert_eq!(b.n_link, Some(7));
        assert!(bearing.get("kyy").unwrap().is_random());
    }

    #[test]
    fn test_undeclared_sequence_rejected() {
        let result = RandomDisk::new(2, vec![30.0, 32.0], 0.2, 0.3, &[]);
        assert!(matches!(result, Err(RotorError::InvalidParameter(_))));
    }

    #[test]
    fn test_point_mass_m_expands() {
        let pm = RandomPointMass::new(7, vec![2.0, 3.0], &["m"]).unwrap();
        let realized = pm.realize(1).unwrap();
        assert_eq!((realized.mx, realized.my), (3.0, 3.0));
        assert_eq!(pm.params().random_names().count(), 2);
    }

    #[test]
    fn test_from_deterministic_is_fixed() {
        let disk = DiskElement::new(2, 30.0, 0.2, 0.3).unwrap();
        let random: RandomDisk = disk.clone().into();
        assert!(!random.is_random());
        assert_eq!(random.realize(5).unwrap(), disk);
    }

    #[test]
    fn test_element_set_get() {
        let mut disk = RandomDisk::new(2, 30.0, 0.2, 0.3, &[]).unwrap();
        disk.set("m", RandomValue::from(vec![30.0, 31.0])).unwrap();
        assert_eq!(disk.get("m").unwrap().sample_len(), Some(2));
        assert!(matches!(
            disk.set("mass", 1.0.into()),
            Err(RotorError::UnknownParameter(name)) if name == "mass"
        ));
    }
}
