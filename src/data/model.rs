use std::fmt;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// SpectralDomain – UV / Visible / IR classification
// ---------------------------------------------------------------------------

/// Spectral domain of a wavelength, classified by fixed thresholds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SpectralDomain {
    Ultraviolet,
    Visible,
    Infrared,
}

impl SpectralDomain {
    /// Classify a wavelength in nm.
    ///
    /// The thresholds are exactly `< 400` → UV, `[400, 700)` → Visible,
    /// `≥ 700` → IR. Callers display these verbatim, so they must not drift.
    pub fn classify(wavelength_nm: f64) -> Self {
        if wavelength_nm < 400.0 {
            SpectralDomain::Ultraviolet
        } else if wavelength_nm < 700.0 {
            SpectralDomain::Visible
        } else {
            SpectralDomain::Infrared
        }
    }
}

impl fmt::Display for SpectralDomain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SpectralDomain::Ultraviolet => write!(f, "UV"),
            SpectralDomain::Visible => write!(f, "Visible"),
            SpectralDomain::Infrared => write!(f, "IR"),
        }
    }
}

// ---------------------------------------------------------------------------
// ElementCategory – periodic-table grouping
// ---------------------------------------------------------------------------

/// Periodic-table category; drives the default line-width model during
/// spectrum synthesis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ElementCategory {
    Nonmetal,
    NobleGas,
    AlkaliMetal,
    AlkalineEarthMetal,
    Metalloid,
    Halogen,
    PostTransitionMetal,
    TransitionMetal,
    Actinide,
}

impl fmt::Display for ElementCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ElementCategory::Nonmetal => "Non-metal",
            ElementCategory::NobleGas => "Noble gas",
            ElementCategory::AlkaliMetal => "Alkali metal",
            ElementCategory::AlkalineEarthMetal => "Alkaline-earth metal",
            ElementCategory::Metalloid => "Metalloid",
            ElementCategory::Halogen => "Halogen",
            ElementCategory::PostTransitionMetal => "Post-transition metal",
            ElementCategory::TransitionMetal => "Transition metal",
            ElementCategory::Actinide => "Actinide",
        };
        write!(f, "{name}")
    }
}

// ---------------------------------------------------------------------------
// Element – one row of the reference table
// ---------------------------------------------------------------------------

/// Immutable reference data for one element. Built once at catalog
/// construction, never mutated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Element {
    pub symbol: String,
    pub name: String,
    pub atomic_number: u32,
    /// Standard atomic mass, u.
    pub atomic_mass: f64,
    /// Ground-state electron configuration, e.g. `"[Ne] 3s¹"`.
    pub electron_configuration: String,
    pub period: u8,
    pub group: u8,
    pub category: ElementCategory,
    /// Tabulated ionization/excitation energies in eV, descending.
    /// Empty when no level data is tabulated for this element.
    pub energy_levels_ev: Vec<f64>,
    /// Display color as a `#rrggbb` hex string, for the external caller.
    pub color: String,
}

// ---------------------------------------------------------------------------
// SpectralSeries – hydrogen-like transition groups
// ---------------------------------------------------------------------------

/// A named group of hydrogen transitions sharing the same final level
/// (Lyman n=1, Balmer n=2, …).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpectralSeries {
    pub name: String,
    /// Final principal quantum number shared by the group.
    pub final_level: u32,
    pub domain: SpectralDomain,
    /// Nominal wavelength range of the series, nm.
    pub wavelength_min_nm: f64,
    pub wavelength_max_nm: f64,
    pub color: String,
}

// ---------------------------------------------------------------------------
// Transition – one catalogued or generated spectral line source
// ---------------------------------------------------------------------------

/// A single radiative transition belonging to one element.
///
/// Hydrogen transitions are generated analytically, so wavelength and
/// energy satisfy `E = hc/λ` to floating-point tolerance. Empirical lines
/// for other elements carry independently sourced measured values and an
/// `upper_level`/`lower_level` of 0, meaning the transition is not modeled
/// at quantum-number granularity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transition {
    pub element: String,
    /// Human-readable label, e.g. `"2→3"` or `"3p→3s"`.
    pub label: String,
    /// Initial (upper) principal quantum number; 0 = not modeled.
    #[serde(default)]
    pub upper_level: u32,
    /// Final (lower) principal quantum number; 0 = not modeled.
    #[serde(default)]
    pub lower_level: u32,
    pub wavelength_nm: f64,
    pub energy_ev: f64,
    /// Relative intensity in [0, 1].
    pub relative_intensity: f64,
    /// Series or family tag (`"Balmer"`, `"Doublet D"`, …).
    #[serde(default)]
    pub series: Option<String>,
}

impl Transition {
    /// Whether the transition carries real principal quantum numbers.
    pub fn has_quantum_levels(&self) -> bool {
        self.upper_level > 0 && self.lower_level > 0
    }

    /// Spectral domain of the transition wavelength.
    pub fn domain(&self) -> SpectralDomain {
        SpectralDomain::classify(self.wavelength_nm)
    }
}

// ---------------------------------------------------------------------------
// SpectralLine – rendering-ready line with a profile width
// ---------------------------------------------------------------------------

/// A [`Transition`] prepared for synthesis: same center and intensity plus a
/// Gaussian width parameter (Doppler/thermal broadening), derived per
/// request and discarded after use.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpectralLine {
    pub element: String,
    pub label: String,
    /// Line center, nm.
    pub wavelength_nm: f64,
    /// Relative intensity in [0, 1].
    pub intensity: f64,
    /// Gaussian width parameter, nm.
    pub width_nm: f64,
    pub series: Option<String>,
}

// ---------------------------------------------------------------------------
// SimulatedSpectrum – a sampled intensity-vs-wavelength curve
// ---------------------------------------------------------------------------

/// A sampled curve over a wavelength window, produced by summing Gaussian
/// line contributions. Not persisted; recomputed per request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulatedSpectrum {
    /// Wavelength grid, nm (evenly spaced, ascending).
    pub wavelength_nm: Vec<f64>,
    /// Summed intensity at each grid point – same length as `wavelength_nm`.
    /// Raw intensity sum, not normalized to [0, 1].
    pub intensity: Vec<f64>,
}

impl SimulatedSpectrum {
    /// Number of sample points.
    pub fn len(&self) -> usize {
        self.wavelength_nm.len()
    }

    /// Whether the curve holds no samples.
    pub fn is_empty(&self) -> bool {
        self.wavelength_nm.is_empty()
    }

    /// Iterate over `(λ, intensity)` pairs in grid order.
    pub fn points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.wavelength_nm
            .iter()
            .copied()
            .zip(self.intensity.iter().copied())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn domain_thresholds_are_exact() {
        assert_eq!(
            SpectralDomain::classify(399.999),
            SpectralDomain::Ultraviolet
        );
        assert_eq!(SpectralDomain::classify(400.0), SpectralDomain::Visible);
        assert_eq!(SpectralDomain::classify(699.999), SpectralDomain::Visible);
        assert_eq!(SpectralDomain::classify(700.0), SpectralDomain::Infrared);
    }

    #[test]
    fn domain_display_labels() {
        assert_eq!(SpectralDomain::Ultraviolet.to_string(), "UV");
        assert_eq!(SpectralDomain::Visible.to_string(), "Visible");
        assert_eq!(SpectralDomain::Infrared.to_string(), "IR");
    }

    #[test]
    fn empirical_transition_has_no_quantum_levels() {
        let t = Transition {
            element: "Na".into(),
            label: "3p→3s".into(),
            upper_level: 0,
            lower_level: 0,
            wavelength_nm: 589.0,
            energy_ev: 2.11,
            relative_intensity: 0.95,
            series: Some("Doublet D".into()),
        };
        assert!(!t.has_quantum_levels());
        assert_eq!(t.domain(), SpectralDomain::Visible);
    }
}
