//! Rotor - deterministic finite element rotor model

use log::{debug, warn};
use num_complex::Complex64;
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

use crate::analysis::AnalysisOptions;
use crate::elements::{BearingElement, DiskElement, Material, PointMass, ShaftElement};
use crate::error::{RotorError, RotorResult};
use crate::math::{self, CMat, CVector, Mat, Mat4};
use crate::results::{
    CampbellResults, ForcedResponseResults, FrequencyResponseResults, TimeResponseResults,
};

/// DOFs per shaft node: [x, y, alpha, beta]
pub const SHAFT_NODE_DOF: usize = 4;
/// DOFs per link node: [x, y]
pub const LINK_NODE_DOF: usize = 2;

/// A rotor assembled from shaft, disk, bearing and point mass elements
///
/// Shaft element `i` joins shaft nodes `i` and `i + 1`. Nodes numbered above
/// the last shaft node are link nodes (bearing supports, point masses); their
/// DOFs follow the shaft DOFs in ascending node order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rotor {
    /// Shaft elements in axial order
    pub shaft_elements: Vec<ShaftElement>,
    /// Disk elements
    pub disk_elements: Vec<DiskElement>,
    /// Bearing elements
    pub bearing_elements: Vec<BearingElement>,
    /// Point masses on link nodes
    pub point_mass_elements: Vec<PointMass>,

    link_nodes: Vec<usize>,
    m: Mat,
    k: Mat,
    c: Mat,
    g: Mat,
}

impl Rotor {
    /// Assemble a rotor from its elements
    pub fn new(
        shaft_elements: Vec<ShaftElement>,
        disk_elements: Vec<DiskElement>,
        bearing_elements: Vec<BearingElement>,
        point_mass_elements: Vec<PointMass>,
    ) -> RotorResult<Self> {
        if shaft_elements.is_empty() {
            return Err(RotorError::InvalidInput(
                "rotor needs at least one shaft element".to_string(),
            ));
        }
        let n_shaft_nodes = shaft_elements.len() + 1;

        for disk in &disk_elements {
            if disk.n >= n_shaft_nodes {
                return Err(RotorError::NodeOutOfRange {
                    node: disk.n,
                    n_nodes: n_shaft_nodes,
                });
            }
        }
        for pm in &point_mass_elements {
            if pm.n < n_shaft_nodes {
                return Err(RotorError::InvalidInput(format!(
                    "point mass at node {} must sit on a link node (>= {})",
                    pm.n, n_shaft_nodes
                )));
            }
        }

        let mut link_nodes: Vec<usize> = bearing_elements
            .iter()
            .flat_map(|b| std::iter::once(b.n).chain(b.n_link))
            .chain(point_mass_elements.iter().map(|p| p.n))
            .filter(|&n| n >= n_shaft_nodes)
            .collect();
        link_nodes.sort_unstable();
        link_nodes.dedup();

        let ndof = SHAFT_NODE_DOF * n_shaft_nodes + LINK_NODE_DOF * link_nodes.len();
        let mut rotor = Self {
            shaft_elements,
            disk_elements,
            bearing_elements,
            point_mass_elements,
            link_nodes,
            m: Mat::zeros(ndof, ndof),
            k: Mat::zeros(ndof, ndof),
            c: Mat::zeros(ndof, ndof),
            g: Mat::zeros(ndof, ndof),
        };
        rotor.assemble()?;

        debug!(
            "Assembled rotor: {} shaft elements, {} disks, {} bearings, {} point masses, {} DOFs",
            rotor.shaft_elements.len(),
            rotor.disk_elements.len(),
            rotor.bearing_elements.len(),
            rotor.point_mass_elements.len(),
            ndof
        );
        Ok(rotor)
    }

    /// Build the global mass, stiffness, damping and gyroscopic matrices
    fn assemble(&mut self) -> RotorResult<()> {
        let mut m = Mat::zeros(self.ndof(), self.ndof());
        let mut k = m.clone();
        let mut c = m.clone();
        let mut g = m.clone();

        for (i, shaft) in self.shaft_elements.iter().enumerate() {
            let base = SHAFT_NODE_DOF * i;
            let dofs: [usize; 8] = std::array::from_fn(|j| base + j);
            math::scatter(&mut k, &shaft.k(), &dofs);
            math::scatter(&mut m, &shaft.m(), &dofs);
            math::scatter(&mut g, &shaft.g(), &dofs);
        }

        for disk in &self.disk_elements {
            let base = SHAFT_NODE_DOF * disk.n;
            let dofs: [usize; 4] = std::array::from_fn(|j| base + j);
            math::scatter(&mut m, &disk.m(), &dofs);
            math::scatter(&mut g, &disk.g(), &dofs);
        }

        for bearing in &self.bearing_elements {
            let n = self.dof_index(bearing.n)?;
            match bearing.n_link {
                None => {
                    math::scatter(&mut k, &bearing.k(), &[n, n + 1]);
                    math::scatter(&mut c, &bearing.c(), &[n, n + 1]);
                }
                Some(link) => {
                    let l = self.dof_index(link)?;
                    let dofs = [n, n + 1, l, l + 1];
                    math::scatter(&mut k, &link_block(&bearing.k()), &dofs);
                    math::scatter(&mut c, &link_block(&bearing.c()), &dofs);
                }
            }
        }

        for pm in &self.point_mass_elements {
            let n = self.dof_index(pm.n)?;
            m[(n, n)] += pm.mx;
            m[(n + 1, n + 1)] += pm.my;
        }

        self.m = m;
        self.k = k;
        self.c = c;
        self.g = g;
        Ok(())
    }

    /// Number of shaft nodes
    pub fn n_shaft_nodes(&self) -> usize {
        self.shaft_elements.len() + 1
    }

    /// Total number of nodes (shaft and link)
    pub fn n_nodes(&self) -> usize {
        self.n_shaft_nodes() + self.link_nodes.len()
    }

    /// Total number of degrees of freedom
    pub fn ndof(&self) -> usize {
        SHAFT_NODE_DOF * self.n_shaft_nodes() + LINK_NODE_DOF * self.link_nodes.len()
    }

    /// Index of the first (x) DOF of a node
    pub fn dof_index(&self, node: usize) -> RotorResult<usize> {
        let n_shaft_nodes = self.n_shaft_nodes();
        if node < n_shaft_nodes {
            return Ok(SHAFT_NODE_DOF * node);
        }
        self.link_nodes
            .binary_search(&node)
            .map(|pos| SHAFT_NODE_DOF * n_shaft_nodes + LINK_NODE_DOF * pos)
            .map_err(|_| RotorError::NodeOutOfRange {
                node,
                n_nodes: self.n_nodes(),
            })
    }

    /// Global mass matrix
    pub fn m(&self) -> &Mat {
        &self.m
    }

    /// Global stiffness matrix
    pub fn k(&self) -> &Mat {
        &self.k
    }

    /// Global damping matrix
    pub fn c(&self) -> &Mat {
        &self.c
    }

    /// Global gyroscopic matrix (per unit speed)
    pub fn g(&self) -> &Mat {
        &self.g
    }

    /// Total rotor mass (shaft, disks and point masses)
    pub fn total_mass(&self) -> f64 {
        let shaft: f64 = self.shaft_elements.iter().map(|s| s.mass()).sum();
        let disks: f64 = self.disk_elements.iter().map(|d| d.m).sum();
        let points: f64 = self.point_mass_elements.iter().map(|p| p.mx).sum();
        shaft + disks + points
    }

    // ========================
    // Analysis Methods
    // ========================

    /// Damped natural frequencies and log decrement at one speed
    ///
    /// Returns at most `options.num_modes` oscillatory modes sorted by
    /// damped natural frequency. Eigenvalues come from the inverted state
    /// matrix (shift-invert about zero) unless the stiffness is singular.
    pub fn modes_at(&self, speed: f64, options: &AnalysisOptions) -> RotorResult<Vec<(f64, f64)>> {
        let damping = &self.c + &self.g * speed;
        let eigenvalues: Vec<Complex64> =
            match math::inverse_state_matrix(&self.m, &self.k, &damping) {
                Some(inv) => inv
                    .complex_eigenvalues()
                    .iter()
                    .filter(|mu| mu.norm() > 0.0)
                    .map(|mu| mu.inv())
                    .collect(),
                None => {
                    debug!("Stiffness matrix is singular, solving the direct eigenproblem");
                    math::state_matrix(&self.m, &self.k, &damping)?
                        .complex_eigenvalues()
                        .iter()
                        .copied()
                        .collect()
                }
            };
        let mut eigenvalues: Vec<Complex64> = eigenvalues
            .into_iter()
            .filter(|ev| ev.im > options.imag_tolerance)
            .collect();
        eigenvalues.sort_by(|a, b| a.im.total_cmp(&b.im));

        Ok(eigenvalues
            .into_iter()
            .take(options.num_modes)
            .map(|ev| {
                let zeta = -ev.re / ev.norm();
                let log_dec = 2.0 * PI * zeta / (1.0 - zeta * zeta).sqrt();
                (ev.im, log_dec)
            })
            .collect())
    }

    /// Run a Campbell sweep over rotor speeds (rad/s)
    pub fn run_campbell(
        &self,
        speed_range: &[f64],
        options: &AnalysisOptions,
    ) -> RotorResult<CampbellResults> {
        check_sweep("speed range", speed_range)?;
        if options.num_modes == 0 || options.num_modes > self.ndof() {
            return Err(RotorError::InvalidInput(format!(
                "number of modes must be in 1..={}, got {}",
                self.ndof(),
                options.num_modes
            )));
        }

        let mut wd = Mat::from_element(speed_range.len(), options.num_modes, f64::NAN);
        let mut log_dec = wd.clone();

        for (i, &speed) in speed_range.iter().enumerate() {
            let modes = self.modes_at(speed, options)?;
            if modes.len() < options.num_modes {
                warn!(
                    "Only {} of {} requested modes are oscillatory at {} rad/s",
                    modes.len(),
                    options.num_modes,
                    speed
                );
            }
            for (j, (w, d)) in modes.into_iter().enumerate() {
                wd[(i, j)] = w;
                log_dec[(i, j)] = d;
            }
        }

        Ok(CampbellResults {
            speed_range: speed_range.to_vec(),
            wd,
            log_dec,
        })
    }

    /// Transfer function between `inp` and `out` DOFs
    ///
    /// The rotor speed follows the excitation frequency.
    pub fn run_freq_response(
        &self,
        inp: usize,
        out: usize,
        freq_range: &[f64],
    ) -> RotorResult<FrequencyResponseResults> {
        check_sweep("frequency range", freq_range)?;
        let ndof = self.ndof();
        for dof in [inp, out] {
            if dof >= ndof {
                return Err(RotorError::DofOutOfRange { dof, ndof });
            }
        }

        let mut excitation = CVector::zeros(ndof);
        excitation[inp] = Complex64::new(1.0, 0.0);

        let mut freq_resp = CVector::zeros(freq_range.len());
        for (j, &omega) in freq_range.iter().enumerate() {
            let z = self.dynamic_stiffness(omega, omega);
            let x = solve_at(&z, &excitation, omega)?;
            freq_resp[j] = x[out];
        }
        let (velc_resp, accl_resp) = derivatives_vector(&freq_resp, freq_range);

        Ok(FrequencyResponseResults {
            freq_range: freq_range.to_vec(),
            freq_resp,
            velc_resp,
            accl_resp,
        })
    }

    /// Forced response to rotating unbalances
    ///
    /// # Arguments
    /// * `nodes` - Shaft nodes carrying an unbalance
    /// * `magnitudes` - Unbalance magnitudes in kg·m
    /// * `phases` - Unbalance phases in rad
    /// * `freq_range` - Rotor speeds (synchronous excitation) in rad/s
    pub fn run_unbalance_response(
        &self,
        nodes: &[usize],
        magnitudes: &[f64],
        phases: &[f64],
        freq_range: &[f64],
    ) -> RotorResult<ForcedResponseResults> {
        check_sweep("frequency range", freq_range)?;
        if nodes.len() != magnitudes.len() || nodes.len() != phases.len() {
            return Err(RotorError::InvalidInput(format!(
                "unbalance definition needs matching lengths (nodes {}, magnitudes {}, phases {})",
                nodes.len(),
                magnitudes.len(),
                phases.len()
            )));
        }
        for &node in nodes {
            if node >= self.n_shaft_nodes() {
                return Err(RotorError::NodeOutOfRange {
                    node,
                    n_nodes: self.n_shaft_nodes(),
                });
            }
        }

        let ndof = self.ndof();
        let mut forced_resp = CMat::zeros(ndof, freq_range.len());
        for (j, &omega) in freq_range.iter().enumerate() {
            let mut force = CVector::zeros(ndof);
            for ((&node, &magnitude), &phase) in nodes.iter().zip(magnitudes).zip(phases) {
                let fx = Complex64::from_polar(magnitude * omega * omega, phase);
                let dof = SHAFT_NODE_DOF * node;
                force[dof] += fx;
                force[dof + 1] += -Complex64::i() * fx;
            }
            // zero forcing keeps an exact zero response
            if force.iter().all(|f| f.norm() == 0.0) {
                continue;
            }
            let z = self.dynamic_stiffness(omega, omega);
            let x = solve_at(&z, &force, omega)?;
            forced_resp.set_column(j, &x);
        }
        let (velc_resp, accl_resp) = derivatives_matrix(&forced_resp, freq_range);

        Ok(ForcedResponseResults {
            freq_range: freq_range.to_vec(),
            forced_resp,
            velc_resp,
            accl_resp,
        })
    }

    /// Time response at constant speed under a forcing history
    ///
    /// # Arguments
    /// * `speed` - Rotor speed in rad/s
    /// * `force` - Forces at every DOF, shape (time points, ndof)
    /// * `t` - Equally spaced, strictly increasing time points in s
    pub fn run_time_response(
        &self,
        speed: f64,
        force: &Mat,
        t: &[f64],
    ) -> RotorResult<TimeResponseResults> {
        check_sweep("time vector", t)?;
        if !math::is_equally_spaced(t) {
            return Err(RotorError::InvalidInput(
                "time vector must be equally spaced".to_string(),
            ));
        }
        let ndof = self.ndof();
        if force.nrows() != t.len() || force.ncols() != ndof {
            return Err(RotorError::InvalidInput(format!(
                "force must have shape ({}, {}), got ({}, {})",
                t.len(),
                ndof,
                force.nrows(),
                force.ncols()
            )));
        }

        let mut xout = Mat::zeros(t.len(), 2 * ndof);
        if t.len() > 1 {
            let damping = &self.c + &self.g * speed;
            let a = math::state_matrix(&self.m, &self.k, &damping)?;
            let b = math::input_matrix(&self.m)?;
            let (ad, bd0, bd1) = math::first_order_hold(&a, &b, t[1] - t[0]);

            let mut x = math::Vector::zeros(2 * ndof);
            for i in 1..t.len() {
                let u_prev = force.row(i - 1).transpose();
                let u = force.row(i).transpose();
                x = &ad * &x + &bd0 * u_prev + &bd1 * u;
                xout.set_row(i, &x.transpose());
            }
        }
        let yout = xout.columns(0, ndof).into_owned();

        Ok(TimeResponseResults {
            t: t.to_vec(),
            yout,
            xout,
        })
    }

    fn dynamic_stiffness(&self, speed: f64, omega: f64) -> CMat {
        math::dynamic_stiffness(&self.m, &self.k, &self.c, &self.g, speed, omega)
    }

    /// Six-element steel rotor with two disks and two isotropic bearings
    pub fn example() -> RotorResult<Self> {
        let steel = Material::steel();
        let shafts = (0..6)
            .map(|_| ShaftElement::new(0.25, 0.0, 0.05, steel.clone()))
            .collect::<RotorResult<Vec<_>>>()?;
        let disks = vec![
            DiskElement::from_geometry(2, &steel, 0.07, 0.05, 0.28)?,
            DiskElement::from_geometry(4, &steel, 0.07, 0.05, 0.28)?,
        ];
        let bearings = vec![
            BearingElement::new(0, 1e6, 1e3)?,
            BearingElement::new(6, 1e6, 1e3)?,
        ];
        Self::new(shafts, disks, bearings, Vec::new())
    }
}

/// Stiffness/damping block of a bearing connecting two nodes
fn link_block(k: &nalgebra::Matrix2<f64>) -> Mat4 {
    let mut block = Mat4::zeros();
    block.fixed_view_mut::<2, 2>(0, 0).copy_from(k);
    block.fixed_view_mut::<2, 2>(0, 2).copy_from(&(-k));
    block.fixed_view_mut::<2, 2>(2, 0).copy_from(&(-k));
    block.fixed_view_mut::<2, 2>(2, 2).copy_from(k);
    block
}

fn check_sweep(what: &str, values: &[f64]) -> RotorResult<()> {
    if values.is_empty() {
        return Err(RotorError::InvalidInput(format!("{what} is empty")));
    }
    if !math::is_strictly_increasing(values) {
        return Err(RotorError::InvalidInput(format!(
            "{what} must be finite and strictly increasing"
        )));
    }
    Ok(())
}

fn solve_at(z: &CMat, rhs: &CVector, omega: f64) -> RotorResult<CVector> {
    math::solve_complex(z, rhs).ok_or_else(|| {
        RotorError::SingularMatrix(format!("dynamic stiffness is singular at {omega} rad/s"))
    })
}

fn derivatives_vector(resp: &CVector, freq_range: &[f64]) -> (CVector, CVector) {
    let velc = CVector::from_fn(resp.len(), |j, _| {
        resp[j] * Complex64::new(0.0, freq_range[j])
    });
    let accl = CVector::from_fn(resp.len(), |j, _| resp[j] * -(freq_range[j] * freq_range[j]));
    (velc, accl)
}

fn derivatives_matrix(resp: &CMat, freq_range: &[f64]) -> (CMat, CMat) {
    let velc = CMat::from_fn(resp.nrows(), resp.ncols(), |i, j| {
        resp[(i, j)] * Complex64::new(0.0, freq_range[j])
    });
    let accl = CMat::from_fn(resp.nrows(), resp.ncols(), |i, j| {
        resp[(i, j)] * -(freq_range[j] * freq_range[j])
    });
    (velc, accl)
}
