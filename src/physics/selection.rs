use serde::{Deserialize, Serialize};

use crate::constants::{EV_NM, HYDROGEN_GROUND_EV};
use crate::error::SpectraError;

// ---------------------------------------------------------------------------
// Electric-dipole selection rule (Δl = ±1)
// ---------------------------------------------------------------------------

/// Outcome of a selection-rule evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SelectionOutcome {
    /// Whether the transition is electric-dipole allowed (Δl = ±1).
    pub allowed: bool,
    /// Hydrogenic estimate `13.6·(1/n_f² − 1/n_i²)` in eV; `None` when the
    /// transition is forbidden.
    pub energy_ev: Option<f64>,
    /// `1240 / E_eV` in nm; `None` when forbidden or when the energy came
    /// out non-positive (degenerate ordering – never a division blowup).
    pub wavelength_nm: Option<f64>,
}

/// Evaluate the Δl = ±1 selection rule for a transition between
/// (n_initial, l_initial) and (n_final, l_final).
///
/// Δn is unconstrained and Δm is not modeled. Both levels must satisfy
/// `n ≥ 1` and `0 ≤ l < n`; violations are rejected as invalid input.
pub fn evaluate_transition(
    n_initial: u32,
    l_initial: u32,
    n_final: u32,
    l_final: u32,
) -> Result<SelectionOutcome, SpectraError> {
    check_level(n_initial, l_initial)?;
    check_level(n_final, l_final)?;

    let delta_l = l_initial.abs_diff(l_final);
    if delta_l != 1 {
        return Ok(SelectionOutcome {
            allowed: false,
            energy_ev: None,
            wavelength_nm: None,
        });
    }

    let ni = f64::from(n_initial);
    let nf = f64::from(n_final);
    let energy_ev = HYDROGEN_GROUND_EV * (1.0 / (nf * nf) - 1.0 / (ni * ni));

    // Emission requires n_final < n_initial; anything else leaves the
    // approximate wavelength undefined.
    let wavelength_nm = if energy_ev > 0.0 {
        Some(EV_NM / energy_ev)
    } else {
        None
    };

    Ok(SelectionOutcome {
        allowed: true,
        energy_ev: Some(energy_ev),
        wavelength_nm,
    })
}

fn check_level(n: u32, l: u32) -> Result<(), SpectraError> {
    if n < 1 {
        return Err(SpectraError::invalid(format!("n must be ≥ 1, got {n}")));
    }
    if l >= n {
        return Err(SpectraError::invalid(format!(
            "orbital quantum number l must satisfy 0 ≤ l < n, got n={n}, l={l}"
        )));
    }
    Ok(())
}

/// Spectroscopic letter for an orbital quantum number: s p d f g h i for
/// l = 0..=6; larger l renders as the numeral in parentheses.
pub fn orbital_letter(l: u32) -> String {
    const LETTERS: [&str; 7] = ["s", "p", "d", "f", "g", "h", "i"];
    match LETTERS.get(l as usize) {
        Some(s) => (*s).to_string(),
        None => format!("({l})"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn balmer_like_3p_to_2s_is_allowed() {
        // Δl = 1 → allowed; E = 13.6·(1/4 − 1/9) ≈ 1.889 eV, λ ≈ 656.4 nm.
        let out = evaluate_transition(3, 1, 2, 0).unwrap();
        assert!(out.allowed);
        let e = out.energy_ev.unwrap();
        assert!((e - 1.889).abs() < 1e-3, "{e}");
        let w = out.wavelength_nm.unwrap();
        assert!((w - 656.4).abs() < 0.5, "{w}");
    }

    #[test]
    fn delta_l_zero_is_forbidden() {
        for (ni, li, nf, lf) in [(3, 0, 2, 0), (4, 1, 2, 1), (5, 2, 3, 2)] {
            let out = evaluate_transition(ni, li, nf, lf).unwrap();
            assert!(!out.allowed);
            assert_eq!(out.energy_ev, None);
            assert_eq!(out.wavelength_nm, None);
        }
    }

    #[test]
    fn delta_l_two_is_forbidden() {
        let out = evaluate_transition(4, 2, 2, 0).unwrap();
        assert!(!out.allowed);
    }

    #[test]
    fn l_out_of_range_is_invalid() {
        assert!(matches!(
            evaluate_transition(2, 2, 1, 0),
            Err(SpectraError::InvalidInput(_))
        ));
        assert!(matches!(
            evaluate_transition(3, 1, 2, 3),
            Err(SpectraError::InvalidInput(_))
        ));
    }

    #[test]
    fn absorption_ordering_has_undefined_wavelength() {
        // n_final > n_initial → negative energy → no wavelength.
        let out = evaluate_transition(2, 1, 3, 0).unwrap();
        assert!(out.allowed);
        assert!(out.energy_ev.unwrap() < 0.0);
        assert_eq!(out.wavelength_nm, None);
    }

    #[test]
    fn orbital_letters() {
        assert_eq!(orbital_letter(0), "s");
        assert_eq!(orbital_letter(1), "p");
        assert_eq!(orbital_letter(6), "i");
        assert_eq!(orbital_letter(7), "(7)");
    }
}
