//! Physical constants used by the transition formulas (CODATA values).

/// Planck constant, J·s.
pub const PLANCK: f64 = 6.62607015e-34;

/// Speed of light in vacuum, m/s.
pub const SPEED_OF_LIGHT: f64 = 2.99792458e8;

/// Elementary charge, C (also the J → eV conversion factor).
pub const ELEMENTARY_CHARGE: f64 = 1.602176634e-19;

/// Rydberg constant for hydrogen, m⁻¹.
///
/// This is R_H (nucleus of finite mass), not R∞; it is the value the
/// tabulated hydrogen lines were generated with.
pub const RYDBERG_CONSTANT: f64 = 1.09677576e7;

/// Hydrogen ground-state binding energy, eV. Used by the hydrogenic
/// level formula `E_n = 13.6 / n²`.
pub const HYDROGEN_GROUND_EV: f64 = 13.6;

/// The `hc` product expressed in eV·nm, so `λ_nm ≈ 1240 / E_eV`.
pub const EV_NM: f64 = 1240.0;

/// Reference temperature for thermal line broadening, K.
pub const REFERENCE_TEMPERATURE_K: f64 = 300.0;
