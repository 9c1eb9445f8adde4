use serde::{Deserialize, Serialize};

use crate::constants::{ELEMENTARY_CHARGE, HYDROGEN_GROUND_EV, PLANCK, SPEED_OF_LIGHT};
use crate::data::model::SpectralDomain;
use crate::error::SpectraError;

// ---------------------------------------------------------------------------
// Rydberg formula and derived photon quantities
// ---------------------------------------------------------------------------

/// All the scalar results of one transition computation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TransitionResult {
    pub wavelength_nm: f64,
    pub energy_ev: f64,
    pub frequency_hz: f64,
    pub domain: SpectralDomain,
}

/// Transition wavelength in nm from the Rydberg formula
/// `1/λ = R·Z²·(1/n1² − 1/n2²)`.
///
/// `n1` is the lower (final) level, `n2` the upper (initial) one. Rejects
/// `n1 < 1`, `n2 ≤ n1`, `z < 1`, and a non-positive Rydberg constant before
/// touching the formula, so no NaN/Infinity can escape.
pub fn rydberg_wavelength(n1: u32, n2: u32, z: u32, rydberg: f64) -> Result<f64, SpectraError> {
    if n1 < 1 {
        return Err(SpectraError::invalid(format!("n1 must be ≥ 1, got {n1}")));
    }
    if n2 <= n1 {
        return Err(SpectraError::invalid(format!(
            "n2 must be greater than n1, got n1={n1}, n2={n2}"
        )));
    }
    if z < 1 {
        return Err(SpectraError::invalid(format!("Z must be ≥ 1, got {z}")));
    }
    if rydberg <= 0.0 {
        return Err(SpectraError::invalid(format!(
            "Rydberg constant must be positive, got {rydberg}"
        )));
    }

    let n1 = f64::from(n1);
    let n2 = f64::from(n2);
    let z = f64::from(z);
    let inverse_wavelength_m = rydberg * z * z * (1.0 / (n1 * n1) - 1.0 / (n2 * n2));
    Ok(1e9 / inverse_wavelength_m)
}

/// Photon energy in eV for a wavelength in nm: `E = hc/(λ·e)`.
pub fn photon_energy_ev(wavelength_nm: f64) -> f64 {
    PLANCK * SPEED_OF_LIGHT / (wavelength_nm * 1e-9) / ELEMENTARY_CHARGE
}

/// Photon frequency in Hz for a wavelength in nm: `f = c/λ`.
pub fn photon_frequency_hz(wavelength_nm: f64) -> f64 {
    SPEED_OF_LIGHT / (wavelength_nm * 1e-9)
}

/// Full transition computation: wavelength, photon energy/frequency, and
/// spectral domain in one call.
pub fn compute_transition(
    n1: u32,
    n2: u32,
    z: u32,
    rydberg: f64,
) -> Result<TransitionResult, SpectraError> {
    let wavelength_nm = rydberg_wavelength(n1, n2, z, rydberg)?;
    Ok(TransitionResult {
        wavelength_nm,
        energy_ev: photon_energy_ev(wavelength_nm),
        frequency_hz: photon_frequency_hz(wavelength_nm),
        domain: SpectralDomain::classify(wavelength_nm),
    })
}

// ---------------------------------------------------------------------------
// Hydrogen series and heuristics
// ---------------------------------------------------------------------------

/// Name of the hydrogen series ending at level `n1`, or `None` for n1 ≥ 6
/// (unnamed).
pub fn hydrogen_series(n1: u32) -> Option<&'static str> {
    match n1 {
        1 => Some("Lyman"),
        2 => Some("Balmer"),
        3 => Some("Paschen"),
        4 => Some("Brackett"),
        5 => Some("Pfund"),
        _ => None,
    }
}

/// Relative intensity heuristic for generated hydrogen transitions:
/// `1/(n2 − n1)²`. A simplified falloff, kept verbatim for parity with the
/// tabulated data; not a transition-probability calculation.
pub fn relative_intensity(n1: u32, n2: u32) -> f64 {
    let gap = f64::from(n2) - f64::from(n1);
    1.0 / (gap * gap)
}

/// Hydrogenic binding energy of level `n` in eV: `E_n = 13.6/n²`.
pub fn bohr_level_ev(n: u32) -> f64 {
    let n = f64::from(n);
    HYDROGEN_GROUND_EV / (n * n)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::RYDBERG_CONSTANT;

    fn close(a: f64, b: f64, rel: f64) -> bool {
        (a - b).abs() <= rel * b.abs()
    }

    #[test]
    fn h_alpha_balmer_line() {
        // n1=2, n2=3, Z=1 → Hα at ≈ 656.3 nm, ≈ 1.89 eV.
        let r = compute_transition(2, 3, 1, RYDBERG_CONSTANT).unwrap();
        assert!(close(r.wavelength_nm, 656.3, 1e-3), "{}", r.wavelength_nm);
        assert!(close(r.energy_ev, 1.89, 1e-2), "{}", r.energy_ev);
        assert_eq!(r.domain, SpectralDomain::Visible);
    }

    #[test]
    fn lyman_alpha_is_uv() {
        let r = compute_transition(1, 2, 1, RYDBERG_CONSTANT).unwrap();
        assert!(close(r.wavelength_nm, 121.6, 1e-3), "{}", r.wavelength_nm);
        assert_eq!(r.domain, SpectralDomain::Ultraviolet);
    }

    #[test]
    fn wavelength_decreases_with_z() {
        let mut prev = f64::INFINITY;
        for z in 1..=10 {
            let w = rydberg_wavelength(1, 2, z, RYDBERG_CONSTANT).unwrap();
            assert!(w < prev, "λ not decreasing at Z={z}");
            prev = w;
        }
    }

    #[test]
    fn wavelength_decreases_with_n2() {
        let mut prev = f64::INFINITY;
        for n2 in 3..=12 {
            let w = rydberg_wavelength(2, n2, 1, RYDBERG_CONSTANT).unwrap();
            assert!(w < prev, "λ not decreasing at n2={n2}");
            prev = w;
        }
    }

    #[test]
    fn energy_wavelength_round_trip() {
        let wavelength = rydberg_wavelength(2, 3, 1, RYDBERG_CONSTANT).unwrap();
        let energy = photon_energy_ev(wavelength);
        let back = PLANCK * SPEED_OF_LIGHT / (energy * ELEMENTARY_CHARGE) * 1e9;
        assert!(close(back, wavelength, 1e-9));
    }

    #[test]
    fn invalid_orderings_are_rejected() {
        assert!(matches!(
            rydberg_wavelength(3, 3, 1, RYDBERG_CONSTANT),
            Err(SpectraError::InvalidInput(_))
        ));
        assert!(matches!(
            rydberg_wavelength(3, 2, 1, RYDBERG_CONSTANT),
            Err(SpectraError::InvalidInput(_))
        ));
        assert!(matches!(
            rydberg_wavelength(0, 2, 1, RYDBERG_CONSTANT),
            Err(SpectraError::InvalidInput(_))
        ));
        assert!(matches!(
            rydberg_wavelength(1, 2, 0, RYDBERG_CONSTANT),
            Err(SpectraError::InvalidInput(_))
        ));
        assert!(matches!(
            rydberg_wavelength(1, 2, 1, 0.0),
            Err(SpectraError::InvalidInput(_))
        ));
    }

    #[test]
    fn series_names() {
        assert_eq!(hydrogen_series(1), Some("Lyman"));
        assert_eq!(hydrogen_series(2), Some("Balmer"));
        assert_eq!(hydrogen_series(3), Some("Paschen"));
        assert_eq!(hydrogen_series(4), Some("Brackett"));
        assert_eq!(hydrogen_series(5), Some("Pfund"));
        assert_eq!(hydrogen_series(6), None);
    }

    #[test]
    fn intensity_falloff() {
        assert_eq!(relative_intensity(2, 3), 1.0);
        assert_eq!(relative_intensity(2, 4), 0.25);
        assert_eq!(relative_intensity(1, 4), 1.0 / 9.0);
    }

    #[test]
    fn bohr_levels() {
        assert!(close(bohr_level_ev(1), 13.6, 1e-12));
        assert!(close(bohr_level_ev(2), 3.4, 1e-12));
    }
}
