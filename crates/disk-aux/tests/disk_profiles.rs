//! Integration tests on protoplanetary disk profiles built from the CGS constants.
//!
//! A vertically isothermal power-law disk has
//!
//! - Σ ∝ r^(-p), T ∝ r^(-q)
//! - c_s² = k_B T / (μ m_p), h = c_s / Ω_K, ρ = Σ / (√(2π) h), P = ρ c_s²
//!
//! so the midplane pressure slope is d ln P / d ln r = -(p + (3 + q) / 2).

use approx::{assert_abs_diff_eq, assert_relative_eq};
use nalgebra::DMatrix;

use disk_aux::constants::{AU, GRAV, K_B, MU, M_P, M_SUN, PI};
use disk_aux::{dlydlx, dlydlx_rows, Boundary, LogDerivative};

/// Minimum-mass solar nebula surface density at 1 AU (g/cm²)
const SIGMA_0: f64 = 1700.0;
/// Temperature at 1 AU (K)
const TEMP_0: f64 = 280.0;

struct PowerLawDisk {
    sigma_exponent: f64,
    temp_exponent: f64,
    /// Exponential taper radius (cm); infinite for a pure power law
    r_c: f64,
}

impl PowerLawDisk {
    fn mmsn() -> Self {
        Self {
            sigma_exponent: 1.0,
            temp_exponent: 0.5,
            r_c: f64::INFINITY,
        }
    }

    fn tapered(r_c_au: f64) -> Self {
        Self {
            r_c: r_c_au * AU,
            ..Self::mmsn()
        }
    }

    fn surface_density(&self, r: f64) -> f64 {
        SIGMA_0 * (r / AU).powf(-self.sigma_exponent) * (-r / self.r_c).exp()
    }

    fn temperature(&self, r: f64) -> f64 {
        TEMP_0 * (r / AU).powf(-self.temp_exponent)
    }

    fn pressure(&self, r: f64) -> f64 {
        let c_s2 = K_B * self.temperature(r) / (MU * M_P);
        let omega = (GRAV * M_SUN / r.powi(3)).sqrt();
        let h = c_s2.sqrt() / omega;
        let rho = self.surface_density(r) / ((2.0 * PI).sqrt() * h);
        rho * c_s2
    }

    fn analytic_pressure_slope(&self, r: f64) -> f64 {
        -(self.sigma_exponent + (3.0 + self.temp_exponent) / 2.0) - r / self.r_c
    }
}

fn radial_grid(inner_au: f64, outer_au: f64, n: usize) -> Vec<f64> {
    let (a, b) = (inner_au.ln(), outer_au.ln());
    (0..n)
        .map(|i| (a + (b - a) * i as f64 / (n - 1) as f64).exp() * AU)
        .collect()
}

#[test]
fn mmsn_pressure_slope() {
    let disk = PowerLawDisk::mmsn();
    let r = radial_grid(0.1, 100.0, 50);
    let pressure: Vec<f64> = r.iter().map(|&ri| disk.pressure(ri)).collect();

    let slopes = dlydlx(&r, &pressure).unwrap();

    assert_eq!(slopes.len(), r.len());
    for s in slopes {
        assert_relative_eq!(s, -2.75, max_relative = 1e-3);
    }
}

#[test]
fn mmsn_profiles_as_matrix_rows() {
    let disk = PowerLawDisk::mmsn();
    let r = radial_grid(0.1, 100.0, 40);

    let profiles = DMatrix::from_fn(3, r.len(), |i, j| match i {
        0 => disk.surface_density(r[j]),
        1 => disk.temperature(r[j]),
        _ => disk.pressure(r[j]),
    });

    let slopes = LogDerivative::new().matrix(&r, &profiles).unwrap();

    assert_eq!(slopes.shape(), profiles.shape());
    for (row, expected) in [-1.0, -0.5, -2.75].into_iter().enumerate() {
        for j in 0..r.len() {
            assert_abs_diff_eq!(slopes[(row, j)], expected, epsilon = 2e-3);
        }
    }
}

#[test]
fn tapered_disk_steepens_outward() {
    let disk = PowerLawDisk::tapered(30.0);
    let r = radial_grid(0.1, 200.0, 300);
    let pressure: Vec<f64> = r.iter().map(|&ri| disk.pressure(ri)).collect();

    let slopes = dlydlx(&r, &pressure).unwrap();

    for (ri, s) in r.iter().zip(&slopes).skip(1).take(r.len() - 2) {
        assert_relative_eq!(*s, disk.analytic_pressure_slope(*ri), max_relative = 1e-2);
    }
    assert!(slopes.windows(2).all(|w| w[1] < w[0]));
}

#[test]
fn clamped_edges_match_reference_behaviour() {
    let disk = PowerLawDisk::mmsn();
    let r = radial_grid(1.0, 10.0, 20);
    let rows = vec![
        r.iter().map(|&ri| disk.surface_density(ri)).collect::<Vec<_>>(),
        r.iter().map(|&ri| disk.temperature(ri)).collect::<Vec<_>>(),
    ];

    let clamped = LogDerivative::new()
        .with_boundary(Boundary::Clamp)
        .rows(&r, &rows)
        .unwrap();
    let extrapolated = dlydlx_rows(&r, &rows).unwrap();

    let last = r.len() - 1;
    for (c, e) in clamped.iter().zip(&extrapolated) {
        // Interior knots never probe past the grid
        for j in 1..last {
            assert_relative_eq!(c[j], e[j], max_relative = 1e-12);
        }
        // Each edge sees only one half of the centered difference
        assert_relative_eq!(c[0], e[0] / 2.0, max_relative = 2e-2);
        assert_relative_eq!(c[last], e[last] / 2.0, max_relative = 2e-2);
    }
}

#[test]
fn midplane_slope_between_grid_points() {
    let disk = PowerLawDisk::mmsn();
    let r = radial_grid(0.5, 50.0, 12);
    let pressure: Vec<f64> = r.iter().map(|&ri| disk.pressure(ri)).collect();
    let points = [0.7 * AU, 3.3 * AU, 5.2 * AU, 30.0 * AU];

    let slopes = LogDerivative::new().at(&r, &pressure, &points).unwrap();

    for s in slopes {
        assert_relative_eq!(s, -2.75, max_relative = 1e-3);
    }
}
