//! Mathematical utilities for rotor dynamics calculations

use nalgebra::{DMatrix, DVector, Matrix4, SMatrix};
use num_complex::Complex64;

use crate::error::{RotorError, RotorResult};

pub type Mat = DMatrix<f64>;
pub type Vector = DVector<f64>;
pub type CMat = DMatrix<Complex64>;
pub type CVector = DVector<Complex64>;
pub type Mat4 = Matrix4<f64>;

/// 8x8 matrix for a two-node shaft element
pub type Mat8 = SMatrix<f64, 8, 8>;

/// Timoshenko shaft stiffness matrix
///
/// DOF order is [x0, y0, alpha0, beta0, x1, y1, alpha1, beta1]; bending in the
/// x-z plane couples x with beta, bending in the y-z plane couples y with alpha.
///
/// # Arguments
/// * `e` - Modulus of elasticity
/// * `i` - Diametral area moment of inertia
/// * `l` - Element length
/// * `phi` - Shear deformation parameter (0 for Euler-Bernoulli)
pub fn shaft_stiffness(e: f64, i: f64, l: f64, phi: f64) -> Mat8 {
    let l2 = l * l;
    let c = e * i / ((1.0 + phi) * l2 * l);
    let a = (4.0 + phi) * l2;
    let b = (2.0 - phi) * l2;

    #[rustfmt::skip]
    let data = [
        12.0,     0.0,      0.0,      6.0 * l,  -12.0,    0.0,      0.0,      6.0 * l,
        0.0,      12.0,     -6.0 * l, 0.0,      0.0,      -12.0,    -6.0 * l, 0.0,
        0.0,      -6.0 * l, a,        0.0,      0.0,      6.0 * l,  b,        0.0,
        6.0 * l,  0.0,      0.0,      a,        -6.0 * l, 0.0,      0.0,      b,
        -12.0,    0.0,      0.0,      -6.0 * l, 12.0,     0.0,      0.0,      -6.0 * l,
        0.0,      -12.0,    6.0 * l,  0.0,      0.0,      12.0,     6.0 * l,  0.0,
        0.0,      -6.0 * l, b,        0.0,      0.0,      6.0 * l,  a,        0.0,
        6.0 * l,  0.0,      0.0,      b,        -6.0 * l, 0.0,      0.0,      a,
    ];

    Mat8::from_row_slice(&data) * c
}

/// Consistent translational mass matrix of a shaft element
///
/// `phi` couples shear deformation into the shape functions; at `phi = 0`
/// this reduces to the Euler-Bernoulli consistent mass.
pub fn shaft_translational_mass(rho: f64, a: f64, l: f64, phi: f64) -> Mat8 {
    let l2 = l * l;
    let p2 = phi * phi;
    let c = rho * a * l / (840.0 * (1.0 + phi).powi(2));

    let m01 = 312.0 + 588.0 * phi + 280.0 * p2;
    let m02 = (44.0 + 77.0 * phi + 35.0 * p2) * l;
    let m03 = 108.0 + 252.0 * phi + 140.0 * p2;
    let m04 = -(26.0 + 63.0 * phi + 35.0 * p2) * l;
    let m05 = (8.0 + 14.0 * phi + 7.0 * p2) * l2;
    let m06 = -(6.0 + 14.0 * phi + 7.0 * p2) * l2;

    #[rustfmt::skip]
    let data = [
        m01,  0.0,  0.0,  m02,  m03,  0.0,  0.0,  m04,
        0.0,  m01,  -m02, 0.0,  0.0,  m03,  -m04, 0.0,
        0.0,  -m02, m05,  0.0,  0.0,  m04,  m06,  0.0,
        m02,  0.0,  0.0,  m05,  -m04, 0.0,  0.0,  m06,
        m03,  0.0,  0.0,  -m04, m01,  0.0,  0.0,  -m02,
        0.0,  m03,  m04,  0.0,  0.0,  m01,  m02,  0.0,
        0.0,  -m04, m06,  0.0,  0.0,  m02,  m05,  0.0,
        m04,  0.0,  0.0,  m06,  -m02, 0.0,  0.0,  m05,
    ];

    Mat8::from_row_slice(&data) * c
}

/// Coefficients shared by the rotary mass and gyroscopic matrices
fn rotary_terms(l: f64, phi: f64) -> (f64, f64, f64, f64) {
    let l2 = l * l;
    let p2 = phi * phi;
    (
        36.0,
        (3.0 - 15.0 * phi) * l,
        (4.0 + 5.0 * phi + 10.0 * p2) * l2,
        (-1.0 - 5.0 * phi + 5.0 * p2) * l2,
    )
}

/// Rotary inertia contribution to the shaft mass matrix
pub fn shaft_rotary_mass(rho: f64, i: f64, l: f64, phi: f64) -> Mat8 {
    let c = rho * i / (30.0 * l * (1.0 + phi).powi(2));
    let (m07, m08, m09, m10) = rotary_terms(l, phi);

    #[rustfmt::skip]
    let data = [
        m07,  0.0,  0.0,  m08,  -m07, 0.0,  0.0,  m08,
        0.0,  m07,  -m08, 0.0,  0.0,  -m07, -m08, 0.0,
        0.0,  -m08, m09,  0.0,  0.0,  m08,  m10,  0.0,
        m08,  0.0,  0.0,  m09,  -m08, 0.0,  0.0,  m10,
        -m07, 0.0,  0.0,  -m08, m07,  0.0,  0.0,  -m08,
        0.0,  -m07, m08,  0.0,  0.0,  m07,  m08,  0.0,
        0.0,  -m08, m10,  0.0,  0.0,  m08,  m09,  0.0,
        m08,  0.0,  0.0,  m10,  -m08, 0.0,  0.0,  m09,
    ];

    Mat8::from_row_slice(&data) * c
}

/// Skew-symmetric gyroscopic matrix of a shaft element (per unit speed)
///
/// Uses the same sign convention as [`disk_gyroscopic`].
pub fn shaft_gyroscopic(rho: f64, i: f64, l: f64, phi: f64) -> Mat8 {
    let c = rho * i / (15.0 * l * (1.0 + phi).powi(2));
    let (g1, g2, g3, g4) = rotary_terms(l, phi);

    #[rustfmt::skip]
    let data = [
        0.0,  g1,   -g2,  0.0,  0.0,  -g1,  -g2,  0.0,
        -g1,  0.0,  0.0,  -g2,  g1,   0.0,  0.0,  -g2,
        g2,   0.0,  0.0,  g3,   -g2,  0.0,  0.0,  g4,
        0.0,  g2,   -g3,  0.0,  0.0,  -g2,  -g4,  0.0,
        0.0,  -g1,  g2,   0.0,  0.0,  g1,   g2,   0.0,
        g1,   0.0,  0.0,  g2,   -g1,  0.0,  0.0,  g2,
        g2,   0.0,  0.0,  g4,   -g2,  0.0,  0.0,  g3,
        0.0,  g2,   -g4,  0.0,  0.0,  -g2,  -g3,  0.0,
    ];

    Mat8::from_row_slice(&data) * c
}

/// Rigid disk mass matrix [x, y, alpha, beta]
pub fn disk_mass(m: f64, id: f64) -> Mat4 {
    Mat4::from_diagonal(&nalgebra::Vector4::new(m, m, id, id))
}

/// Rigid disk gyroscopic matrix (per unit speed)
pub fn disk_gyroscopic(ip: f64) -> Mat4 {
    let mut g = Mat4::zeros();
    g[(2, 3)] = ip;
    g[(3, 2)] = -ip;
    g
}

/// Add a local element matrix into a global matrix at the given DOFs
pub fn scatter<const N: usize>(global: &mut Mat, local: &SMatrix<f64, N, N>, dofs: &[usize; N]) {
    for (a, &ga) in dofs.iter().enumerate() {
        for (b, &gb) in dofs.iter().enumerate() {
            global[(ga, gb)] += local[(a, b)];
        }
    }
}

/// First-order state matrix A = [[0, I], [-M⁻¹K, -M⁻¹C]]
pub fn state_matrix(m: &Mat, k: &Mat, c: &Mat) -> RotorResult<Mat> {
    let n = m.nrows();
    let lu = m.clone().lu();
    let minv_k = lu
        .solve(k)
        .ok_or_else(|| RotorError::SingularMatrix("mass matrix is not invertible".to_string()))?;
    let minv_c = lu
        .solve(c)
        .ok_or_else(|| RotorError::SingularMatrix("mass matrix is not invertible".to_string()))?;

    let mut a = Mat::zeros(2 * n, 2 * n);
    a.view_mut((0, n), (n, n)).fill_with_identity();
    a.view_mut((n, 0), (n, n)).copy_from(&(-minv_k));
    a.view_mut((n, n), (n, n)).copy_from(&(-minv_c));
    Ok(a)
}

/// Inverse of the state matrix, A⁻¹ = [[-K⁻¹C, -K⁻¹M], [I, 0]]
///
/// Its eigenvalues are the reciprocals of those of A, with the lowest modes
/// largest in magnitude. Returns `None` when K is singular.
pub fn inverse_state_matrix(m: &Mat, k: &Mat, c: &Mat) -> Option<Mat> {
    let n = m.nrows();
    let lu = k.clone().lu();
    let kinv_c = lu.solve(c)?;
    let kinv_m = lu.solve(m)?;
    if !kinv_c.iter().chain(kinv_m.iter()).all(|v| v.is_finite()) {
        return None;
    }

    let mut inv = Mat::zeros(2 * n, 2 * n);
    inv.view_mut((0, 0), (n, n)).copy_from(&(-kinv_c));
    inv.view_mut((0, n), (n, n)).copy_from(&(-kinv_m));
    inv.view_mut((n, 0), (n, n)).fill_with_identity();
    Some(inv)
}

/// Input matrix B = [[0], [M⁻¹]] for forces applied at every DOF
pub fn input_matrix(m: &Mat) -> RotorResult<Mat> {
    let n = m.nrows();
    let minv = m
        .clone()
        .try_inverse()
        .ok_or_else(|| RotorError::SingularMatrix("mass matrix is not invertible".to_string()))?;

    let mut b = Mat::zeros(2 * n, n);
    b.view_mut((n, 0), (n, n)).copy_from(&minv);
    Ok(b)
}

/// Dynamic stiffness Z = K - ω²M + iω(C + Ω·G) at rotor speed Ω and frequency ω
pub fn dynamic_stiffness(m: &Mat, k: &Mat, c: &Mat, g: &Mat, speed: f64, omega: f64) -> CMat {
    let real = k - m * (omega * omega);
    let imag = (c + g * speed) * omega;
    real.zip_map(&imag, Complex64::new)
}

/// Solve a complex linear system using LU decomposition
pub fn solve_complex(a: &CMat, b: &CVector) -> Option<CVector> {
    a.clone().lu().solve(b)
}

/// Exact first-order-hold discretization of x' = A x + B u with step `dt`
///
/// Returns (Ad, Bd0, Bd1) so that x[k+1] = Ad x[k] + Bd0 u[k] + Bd1 u[k+1].
pub fn first_order_hold(a: &Mat, b: &Mat, dt: f64) -> (Mat, Mat, Mat) {
    let n = a.nrows();
    let m = b.ncols();
    let size = n + 2 * m;

    let mut big = Mat::zeros(size, size);
    big.view_mut((0, 0), (n, n)).copy_from(&(a * dt));
    big.view_mut((0, n), (n, m)).copy_from(&(b * dt));
    big.view_mut((n, n + m), (m, m)).fill_with_identity();

    let e = big.exp();
    let ad = e.view((0, 0), (n, n)).into_owned();
    let bd1 = e.view((0, n + m), (n, m)).into_owned();
    let bd0 = e.view((0, n), (n, m)).into_owned() - &bd1;
    (ad, bd0, bd1)
}

/// Check that values are strictly increasing
pub fn is_strictly_increasing(values: &[f64]) -> bool {
    values.iter().all(|v| v.is_finite()) && values.windows(2).all(|w| w[1] > w[0])
}

/// Check that consecutive differences are equal (relative tolerance 1e-6)
pub fn is_equally_spaced(values: &[f64]) -> bool {
    if values.len() < 3 {
        return true;
    }
    let dt = values[1] - values[0];
    values
        .windows(2)
        .all(|w| ((w[1] - w[0]) - dt).abs() <= 1e-6 * dt.abs())
}

/// Evenly spaced values over [start, stop], endpoints included
pub fn linspace(start: f64, stop: f64, num: usize) -> Vec<f64> {
    match num {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (stop - start) / (num - 1) as f64;
            (0..num).map(|i| start + step * i as f64).collect()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_shaft_matrices_symmetry() {
        let k = shaft_stiffness(211e9, 3.0e-7, 0.25, 0.05);
        let m = shaft_translational_mass(7810.0, 1.9e-3, 0.25, 0.05)
            + shaft_rotary_mass(7810.0, 3.0e-7, 0.25, 0.05);
        let g = shaft_gyroscopic(7810.0, 3.0e-7, 0.25, 0.05);

        for i in 0..8 {
            for j in 0..8 {
                assert_relative_eq!(k[(i, j)], k[(j, i)], epsilon = 1e-6);
                assert_relative_eq!(m[(i, j)], m[(j, i)], epsilon = 1e-12);
                assert_relative_eq!(g[(i, j)], -g[(j, i)], epsilon = 1e-12);
            }
        }
    }

    #[test]
    fn test_shear_mass_reduces_to_euler_bernoulli() {
        let (rho, a, l) = (7810.0, 1.9e-3, 0.25);
        let m = shaft_translational_mass(rho, a, l, 0.0);
        let c = rho * a * l / 420.0;
        assert_relative_eq!(m[(0, 0)], 156.0 * c, epsilon = 1e-12);
        assert_relative_eq!(m[(0, 3)], 22.0 * l * c, epsilon = 1e-12);
        assert_relative_eq!(m[(0, 7)], -13.0 * l * c, epsilon = 1e-12);
        assert_relative_eq!(m[(2, 6)], -3.0 * l * l * c, epsilon = 1e-12);

        // Rigid translation keeps the full element mass for any phi
        for phi in [0.0, 0.05, 0.4] {
            let m = shaft_translational_mass(rho, a, l, phi);
            let total = m[(0, 0)] + m[(0, 4)] + m[(4, 0)] + m[(4, 4)];
            assert_relative_eq!(total, rho * a * l, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_shaft_and_disk_gyroscopic_signs_agree() {
        let g = shaft_gyroscopic(7810.0, 3.0e-7, 0.25, 0.0);
        let d = disk_gyroscopic(1.0);
        assert!(g[(2, 3)] > 0.0 && d[(2, 3)] > 0.0);
        assert!(g[(3, 2)] < 0.0 && d[(3, 2)] < 0.0);
    }

    #[test]
    fn test_stiffness_rigid_body_modes() {
        // Rigid translation and rigid rotation produce no elastic forces
        let l = 0.5;
        let k = shaft_stiffness(211e9, 3.0e-7, l, 0.1);
        let translation = nalgebra::SVector::<f64, 8>::from_row_slice(&[1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0]);
        let rotation = nalgebra::SVector::<f64, 8>::from_row_slice(&[0.0, 0.0, 0.0, 1.0, l, 0.0, 0.0, 1.0]);
        assert!((k * translation).amax() < 1e-3);
        assert!((k * rotation).amax() < 1e-3);
    }

    #[test]
    fn test_inverse_state_matrix() {
        let m = Mat::from_row_slice(2, 2, &[2.0, 0.0, 0.0, 1.0]);
        let k = Mat::from_row_slice(2, 2, &[300.0, -100.0, -100.0, 100.0]);
        let c = Mat::from_row_slice(2, 2, &[0.5, 0.0, 0.0, 0.2]);
        let a = state_matrix(&m, &k, &c).unwrap();
        let inv = inverse_state_matrix(&m, &k, &c).unwrap();
        assert!((a * inv - Mat::identity(4, 4)).amax() < 1e-12);
        assert!(inverse_state_matrix(&m, &Mat::zeros(2, 2), &c).is_none());
    }

    #[test]
    fn test_scatter() {
        let mut global = Mat::zeros(6, 6);
        let local = disk_mass(2.0, 0.5);
        scatter(&mut global, &local, &[2, 3, 4, 5]);
        assert_eq!(global[(2, 2)], 2.0);
        assert_eq!(global[(5, 5)], 0.5);
        assert_eq!(global[(0, 0)], 0.0);
    }

    #[test]
    fn test_first_order_hold_scalar() {
        // x' = -x + u with constant unit input converges to exp solution
        let a = Mat::from_element(1, 1, -1.0);
        let b = Mat::from_element(1, 1, 1.0);
        let (ad, bd0, bd1) = first_order_hold(&a, &b, 0.1);
        assert_relative_eq!(ad[(0, 0)], (-0.1_f64).exp(), epsilon = 1e-12);
        assert_relative_eq!(bd0[(0, 0)] + bd1[(0, 0)], 1.0 - (-0.1_f64).exp(), epsilon = 1e-12);
    }

    #[test]
    fn test_sweep_checks() {
        assert!(is_strictly_increasing(&linspace(0.0, 300.0, 11)));
        assert!(!is_strictly_increasing(&[0.0, 2.0, 1.0]));
        assert!(is_equally_spaced(&linspace(0.0, 10.0, 5)));
        assert!(!is_equally_spaced(&[0.0, 1.0, 3.0]));
    }
}
