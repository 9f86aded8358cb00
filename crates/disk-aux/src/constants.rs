//! Physical constants in CGS units.
//!
//! SI reference values (CODATA 2018, IAU 2012) live in [`si`]; the CGS
//! values below are fixed multiples of them. Everything is a compile-time
//! constant.

/// SI reference values the CGS constants are derived from.
pub mod si {
    /// Boltzmann constant (J/K), exact since the 2019 SI redefinition
    pub const BOLTZMANN: f64 = 1.380649e-23;

    /// Proton mass (kg)
    pub const PROTON_MASS: f64 = 1.672_621_923_69e-27;

    /// Newtonian constant of gravitation (m³/(kg·s²))
    pub const GRAVITATIONAL: f64 = 6.674_30e-11;

    /// Astronomical unit (m), exact by IAU 2012 Resolution B2
    pub const ASTRONOMICAL_UNIT: f64 = 149_597_870_700.0;

    /// Seconds per day
    pub const DAY: f64 = 86_400.0;

    /// Days per Julian year
    pub const JULIAN_YEAR_DAYS: f64 = 365.25;
}

/// Pi
pub const PI: f64 = std::f64::consts::PI;

/// Boltzmann constant (erg/K)
pub const K_B: f64 = si::BOLTZMANN * 1e7;

/// Proton mass (g)
pub const M_P: f64 = si::PROTON_MASS * 1e3;

/// Gravitational constant (cm³/(g·s²))
pub const GRAV: f64 = si::GRAVITATIONAL * 1e3;

/// Astronomical unit (cm)
pub const AU: f64 = si::ASTRONOMICAL_UNIT * 1e2;

/// Julian year (s)
pub const YEAR: f64 = si::JULIAN_YEAR_DAYS * si::DAY;

/// Mean molecular weight of the disk gas, in proton masses
pub const MU: f64 = 2.3;

/// Solar mass (g)
pub const M_SUN: f64 = 1.9891e33;

/// Collisional cross section of molecular hydrogen (cm²)
pub const SIGMA_H2: f64 = 2e-15;

/// Every constant under its symbolic name.
pub const TABLE: [(&str, f64); 9] = [
    ("pi", PI),
    ("k_b", K_B),
    ("m_p", M_P),
    ("Grav", GRAV),
    ("AU", AU),
    ("year", YEAR),
    ("mu", MU),
    ("M_sun", M_SUN),
    ("sigma_H2", SIGMA_H2),
];

/// Look up a constant by its symbolic name (case-sensitive).
///
/// ```rust
/// use disk_aux::constants::{lookup, AU};
///
/// assert_eq!(lookup("AU"), Some(AU));
/// assert_eq!(lookup("au"), None);
/// ```
pub fn lookup(name: &str) -> Option<f64> {
    TABLE
        .iter()
        .find(|(symbol, _)| *symbol == name)
        .map(|&(_, value)| value)
}
