use crate::constants::RYDBERG_CONSTANT;
use crate::data::catalog::SpectralCatalog;
use crate::data::model::{Element, SimulatedSpectrum, SpectralLine, Transition};
use crate::error::SpectraError;
use crate::physics::rydberg::{self, TransitionResult};
use crate::physics::selection::{self, SelectionOutcome};
use crate::physics::synth::{self, JitterRng};

// ---------------------------------------------------------------------------
// SpectraEngine – the function-call boundary for presentation layers
// ---------------------------------------------------------------------------

/// Facade over the catalog and the physics layer.
///
/// Holds only immutable data, so a single engine can serve concurrent
/// requests; every call derives its own lines and curves, with no state
/// leaking between requests.
pub struct SpectraEngine {
    catalog: SpectralCatalog,
    rydberg_constant: f64,
}

impl SpectraEngine {
    /// Engine over the built-in catalog with the default Rydberg constant.
    pub fn new() -> Self {
        Self::with_catalog(SpectralCatalog::builtin())
    }

    pub fn with_catalog(catalog: SpectralCatalog) -> Self {
        SpectraEngine {
            catalog,
            rydberg_constant: RYDBERG_CONSTANT,
        }
    }

    /// Override the Rydberg constant (m⁻¹), e.g. from a user control.
    pub fn with_rydberg_constant(mut self, rydberg: f64) -> Self {
        self.rydberg_constant = rydberg;
        self
    }

    pub fn catalog(&self) -> &SpectralCatalog {
        &self.catalog
    }

    /// Wavelength/energy/frequency/domain for a hydrogenic transition of the
    /// given element (its atomic number is used as the charge Z).
    pub fn compute_transition(
        &self,
        symbol: &str,
        n1: u32,
        n2: u32,
    ) -> Result<TransitionResult, SpectraError> {
        let z = self.catalog.element(symbol)?.atomic_number;
        rydberg::compute_transition(n1, n2, z, self.rydberg_constant)
    }

    /// Δl = ±1 selection-rule check with approximate hydrogenic energy and
    /// wavelength.
    pub fn evaluate_selection_rule(
        &self,
        n_initial: u32,
        l_initial: u32,
        n_final: u32,
        l_final: u32,
    ) -> Result<SelectionOutcome, SpectraError> {
        selection::evaluate_transition(n_initial, l_initial, n_final, l_final)
    }

    pub fn lookup_element(&self, symbol: &str) -> Result<&Element, SpectraError> {
        self.catalog.element(symbol)
    }

    pub fn lookup_transitions(&self, symbol: &str) -> Result<Vec<&Transition>, SpectraError> {
        self.catalog.transitions_for(symbol)
    }

    /// Rendering-ready lines for one element. `jitter_seed` randomizes the
    /// widths reproducibly; `None` keeps the deterministic base widths.
    pub fn lines_for(
        &self,
        symbol: &str,
        jitter_seed: Option<u64>,
    ) -> Result<Vec<SpectralLine>, SpectraError> {
        let element = self.catalog.element(symbol)?;
        let transitions = self.catalog.transitions_for(symbol)?;
        let mut rng = jitter_seed.map(JitterRng::new);
        Ok(synth::derive_lines(element, &transitions, rng.as_mut()))
    }

    /// Composite emission spectrum for a set of elements over a wavelength
    /// window, optionally thermally broadened.
    pub fn synthesize_spectrum(
        &self,
        symbols: &[&str],
        wavelength_range: (f64, f64),
        samples: usize,
        temperature_k: Option<f64>,
        jitter_seed: Option<u64>,
    ) -> Result<SimulatedSpectrum, SpectraError> {
        let mut rng = jitter_seed.map(JitterRng::new);
        let mut lines = Vec::new();
        for symbol in symbols {
            let element = self.catalog.element(symbol)?;
            let transitions = self.catalog.transitions_for(symbol)?;
            lines.extend(synth::derive_lines(element, &transitions, rng.as_mut()));
        }
        log::debug!(
            "synthesizing {} lines over {:?} at {} samples",
            lines.len(),
            wavelength_range,
            samples
        );
        Ok(synth::synthesize(
            &lines,
            wavelength_range,
            samples,
            temperature_k,
        ))
    }
}

impl Default for SpectraEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::SpectralDomain;

    #[test]
    fn transition_uses_catalog_atomic_number() {
        let engine = SpectraEngine::new();
        let h = engine.compute_transition("H", 1, 2).unwrap();
        let he = engine.compute_transition("He", 1, 2).unwrap();
        // Z² scaling: He⁺-like wavelength is a quarter of hydrogen's.
        assert!((he.wavelength_nm - h.wavelength_nm / 4.0).abs() < 1e-9);
        assert_eq!(h.domain, SpectralDomain::Ultraviolet);
    }

    #[test]
    fn unknown_element_is_a_lookup_failure() {
        let engine = SpectraEngine::new();
        assert!(matches!(
            engine.compute_transition("Xx", 1, 2),
            Err(SpectraError::UnknownElement(_))
        ));
        assert!(engine
            .synthesize_spectrum(&["H", "Xx"], (200.0, 800.0), 100, None, None)
            .is_err());
    }

    #[test]
    fn selection_rule_passthrough() {
        let engine = SpectraEngine::new();
        let out = engine.evaluate_selection_rule(3, 1, 2, 0).unwrap();
        assert!(out.allowed);
        let out = engine.evaluate_selection_rule(3, 1, 2, 1).unwrap();
        assert!(!out.allowed);
    }

    #[test]
    fn composite_spectrum_is_deterministic() {
        let engine = SpectraEngine::new();
        let a = engine
            .synthesize_spectrum(&["H", "Na", "Hg"], (200.0, 800.0), 2000, Some(5000.0), Some(42))
            .unwrap();
        let b = engine
            .synthesize_spectrum(&["H", "Na", "Hg"], (200.0, 800.0), 2000, Some(5000.0), Some(42))
            .unwrap();
        assert_eq!(a, b);
        assert_eq!(a.len(), 2000);
        assert!(a.intensity.iter().all(|&v| v >= 0.0));
        assert!(a.intensity.iter().any(|&v| v > 0.0));
    }

    #[test]
    fn jitter_seed_changes_widths_not_centers() {
        let engine = SpectraEngine::new();
        let base = engine.lines_for("Na", None).unwrap();
        let jittered = engine.lines_for("Na", Some(7)).unwrap();
        assert_eq!(base.len(), jittered.len());
        for (a, b) in base.iter().zip(&jittered) {
            assert_eq!(a.wavelength_nm, b.wavelength_nm);
            // Alkali metal band: base 0.10, jitter adds up to 0.05.
            assert!((0.10..0.15).contains(&b.width_nm));
            assert_eq!(a.width_nm, 0.10);
        }
    }
}
