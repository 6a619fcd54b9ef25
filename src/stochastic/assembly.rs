//! Stochastic rotor assembly and sample realization

use log::info;
use serde::{Deserialize, Serialize};

use super::elements::{
    RandomBearing, RandomDisk, RandomElement, RandomPointMass, RandomShaftElement,
};
use super::param::{ParameterKey, RandomParameterSet, RandomValue};
use super::samples::Samples;
use super::{validate, ElementCategory};
use crate::elements::{DiskElement, Material, ShaftElement};
use crate::error::{RotorError, RotorResult};
use crate::rotor::Rotor;

/// A rotor whose element parameters may be given as sample sequences
///
/// Sample `i` is the deterministic [`Rotor`] built from the `i`-th value of
/// every random parameter and the single value of every fixed one.
///
/// Deserialization goes through [`StochasticRotor::new`], so the stored DOF
/// count is recomputed and sample lengths are validated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "StochasticRotorData")]
pub struct StochasticRotor {
    shaft_elements: Vec<RandomShaftElement>,
    disk_elements: Vec<RandomDisk>,
    bearing_elements: Vec<RandomBearing>,
    point_mass_elements: Vec<RandomPointMass>,
    ndof: usize,
}

/// Serialized element lists of a [`StochasticRotor`]
#[derive(Deserialize)]
struct StochasticRotorData {
    shaft_elements: Vec<RandomShaftElement>,
    #[serde(default)]
    disk_elements: Vec<RandomDisk>,
    #[serde(default)]
    bearing_elements: Vec<RandomBearing>,
    #[serde(default)]
    point_mass_elements: Vec<RandomPointMass>,
}

impl TryFrom<StochasticRotorData> for StochasticRotor {
    type Error = RotorError;

    fn try_from(data: StochasticRotorData) -> RotorResult<Self> {
        Self::new(
            data.shaft_elements,
            data.disk_elements,
            data.bearing_elements,
            data.point_mass_elements,
        )
    }
}

impl StochasticRotor {
    /// Build a stochastic rotor
    ///
    /// Sample lengths are validated per category, then across categories,
    /// and the first sample is assembled to check the topology.
    pub fn new(
        shaft_elements: Vec<RandomShaftElement>,
        disk_elements: Vec<RandomDisk>,
        bearing_elements: Vec<RandomBearing>,
        point_mass_elements: Vec<RandomPointMass>,
    ) -> RotorResult<Self> {
        let size = validate::sample_size(
            &shaft_elements,
            &disk_elements,
            &bearing_elements,
            &point_mass_elements,
        )?;

        let mut rotor = Self {
            shaft_elements,
            disk_elements,
            bearing_elements,
            point_mass_elements,
            ndof: 0,
        };
        rotor.ndof = rotor.build_sample(0)?.ndof();

        info!(
            "Created stochastic rotor: {} DOFs, {} samples",
            rotor.ndof,
            size.unwrap_or(1)
        );
        Ok(rotor)
    }

    pub fn shaft_elements(&self) -> &[RandomShaftElement] {
        &self.shaft_elements
    }

    pub fn disk_elements(&self) -> &[RandomDisk] {
        &self.disk_elements
    }

    pub fn bearing_elements(&self) -> &[RandomBearing] {
        &self.bearing_elements
    }

    pub fn point_mass_elements(&self) -> &[RandomPointMass] {
        &self.point_mass_elements
    }

    /// Degrees of freedom of every sample
    pub fn ndof(&self) -> usize {
        self.ndof
    }

    /// Common sample length of the random parameters
    ///
    /// `None` when nothing is random. Re-validates, so parameter changes made
    /// through [`set`](Self::set) are picked up.
    pub fn rv_size(&self) -> RotorResult<Option<usize>> {
        validate::sample_size(
            &self.shaft_elements,
            &self.disk_elements,
            &self.bearing_elements,
            &self.point_mass_elements,
        )
    }

    /// Number of samples a batch analysis produces (1 when nothing is random)
    pub fn n_samples(&self) -> RotorResult<usize> {
        Ok(self.rv_size()?.unwrap_or(1))
    }

    /// Deterministic rotor for sample `index`
    pub fn realize(&self, index: usize) -> RotorResult<Rotor> {
        let size = self.n_samples()?;
        if index >= size {
            return Err(RotorError::SampleOutOfRange { index, size });
        }
        self.build_sample(index)
    }

    /// Lazy iterator over all samples
    ///
    /// Validates the sample count once; each call starts a fresh pass.
    pub fn samples(&self) -> RotorResult<Samples<'_>> {
        Ok(Samples::new(self, self.n_samples()?))
    }

    /// Assemble sample `index` without checking the sample count
    pub(crate) fn build_sample(&self, index: usize) -> RotorResult<Rotor> {
        Rotor::new(
            realize_all(&self.shaft_elements, index)?,
            realize_all(&self.disk_elements, index)?,
            realize_all(&self.bearing_elements, index)?,
            realize_all(&self.point_mass_elements, index)?,
        )
    }

    // ========================
    // Parameter access
    // ========================

    /// Read a parameter by key, e.g. `bearing[0].kxx`
    pub fn get(&self, key: &str) -> RotorResult<&RandomValue> {
        let parsed: ParameterKey = key.parse()?;
        self.params(&parsed)
            .and_then(|params| params.get(&parsed.name).ok())
            .ok_or_else(|| RotorError::UnknownParameter(key.to_string()))
    }

    /// Write a parameter by key
    ///
    /// A sequence must match the length of the element's other random
    /// parameters. Lengths across elements are checked again by the next
    /// batch analysis.
    pub fn set(&mut self, key: &str, value: impl Into<RandomValue>) -> RotorResult<()> {
        let parsed: ParameterKey = key.parse()?;
        let params = self
            .params_mut(&parsed)
            .ok_or_else(|| RotorError::UnknownParameter(key.to_string()))?;
        params
            .set(&parsed.name, value.into())
            .map_err(|err| match err {
                RotorError::UnknownParameter(_) => RotorError::UnknownParameter(key.to_string()),
                RotorError::InvalidParameter(msg) => RotorError::InvalidParameter(msg.replacen(
                    &format!("'{}'", parsed.name),
                    &format!("'{key}'"),
                    1,
                )),
                RotorError::ParameterLength {
                    expected, found, ..
                } => RotorError::ParameterLength {
                    key: key.to_string(),
                    expected,
                    found,
                },
                other => other,
            })
    }

    /// Keys of every element parameter in category and element order
    pub fn parameter_keys(&self) -> Vec<String> {
        self.keys(|params| params.names().map(str::to_string).collect())
    }

    /// Keys of the parameters currently holding sample sequences
    pub fn random_parameter_keys(&self) -> Vec<String> {
        self.keys(|params| params.random_names().map(str::to_string).collect())
    }

    fn keys(&self, names: impl Fn(&RandomParameterSet) -> Vec<String>) -> Vec<String> {
        ElementCategory::ALL
            .into_iter()
            .flat_map(|category| {
                self.category_params(category)
                    .into_iter()
                    .enumerate()
                    .flat_map(|(index, params)| {
                        names(params)
                            .into_iter()
                            .map(move |name| ParameterKey::new(category, index, name).to_string())
                    })
                    .collect::<Vec<_>>()
            })
            .collect()
    }

    fn category_params(&self, category: ElementCategory) -> Vec<&RandomParameterSet> {
        match category {
            ElementCategory::Shaft => self.shaft_elements.iter().map(|e| e.params()).collect(),
            ElementCategory::Disk => self.disk_elements.iter().map(|e| e.params()).collect(),
            ElementCategory::Bearing => self.bearing_elements.iter().map(|e| e.params()).collect(),
            ElementCategory::PointMass => self
                .point_mass_elements
                .iter()
                .map(|e| e.params())
                .collect(),
        }
    }

    fn params(&self, key: &ParameterKey) -> Option<&RandomParameterSet> {
        match key.category {
            ElementCategory::Shaft => self.shaft_elements.get(key.index).map(|e| e.params()),
            ElementCategory::Disk => self.disk_elements.get(key.index).map(|e| e.params()),
            ElementCategory::Bearing => self.bearing_elements.get(key.index).map(|e| e.params()),
            ElementCategory::PointMass => {
                self.point_mass_elements.get(key.index).map(|e| e.params())
            }
        }
    }

    fn params_mut(&mut self, key: &ParameterKey) -> Option<&mut RandomParameterSet> {
        match key.category {
            ElementCategory::Shaft => self
                .shaft_elements
                .get_mut(key.index)
                .map(|e| e.params_mut()),
            ElementCategory::Disk => self.disk_elements.get_mut(key.index).map(|e| e.params_mut()),
            ElementCategory::Bearing => self
                .bearing_elements
                .get_mut(key.index)
                .map(|e| e.params_mut()),
            ElementCategory::PointMass => self
                .point_mass_elements
                .get_mut(key.index)
                .map(|e| e.params_mut()),
        }
    }

    /// Six-element steel rotor with two disks and two random bearings
    ///
    /// Both bearings sample `kxx = [1e6, 2e6]` and `cxx = [1e3, 2e3]`.
    pub fn example() -> RotorResult<Self> {
        let steel = Material::steel();
        let shafts = (0..6)
            .map(|_| ShaftElement::new(0.25, 0.0, 0.05, steel.clone()).map(Into::into))
            .collect::<RotorResult<Vec<RandomShaftElement>>>()?;
        let disks = vec![
            DiskElement::from_geometry(2, &steel, 0.07, 0.05, 0.28)?.into(),
            DiskElement::from_geometry(4, &steel, 0.07, 0.05, 0.28)?.into(),
        ];
        let bearings = [0, 6]
            .into_iter()
            .map(|n| RandomBearing::new(n, vec![1e6, 2e6], vec![1e3, 2e3], &["kxx", "cxx"]))
            .collect::<RotorResult<Vec<_>>>()?;
        Self::new(shafts, disks, bearings, Vec::new())
    }
}

fn realize_all<E: RandomElement>(elements: &[E], index: usize) -> RotorResult<Vec<E::Output>> {
    elements.iter().map(|e| e.realize(index)).collect()
}
