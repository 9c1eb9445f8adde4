use super::catalog::SpectralCatalog;
use super::model::{SpectralDomain, Transition};

// ---------------------------------------------------------------------------
// Transition filter: element / domain / minimum intensity predicates
// ---------------------------------------------------------------------------

/// Line-database query: each field constrains the transition table when set.
/// `None` means "no constraint"; `min_intensity` defaults to 0.0 (show all).
#[derive(Debug, Clone, Default)]
pub struct TransitionFilter {
    /// Only transitions of this element symbol.
    pub element: Option<String>,
    /// Only transitions in this spectral domain.
    pub domain: Option<SpectralDomain>,
    /// Only transitions with at least this relative intensity.
    pub min_intensity: f64,
}

impl TransitionFilter {
    /// Whether a single transition passes all active predicates.
    pub fn matches(&self, transition: &Transition) -> bool {
        if let Some(symbol) = &self.element {
            if &transition.element != symbol {
                return false;
            }
        }
        if let Some(domain) = self.domain {
            if transition.domain() != domain {
                return false;
            }
        }
        transition.relative_intensity >= self.min_intensity
    }
}

/// Return references to all catalog transitions passing the filter, in
/// table order.
pub fn filtered_transitions<'a>(
    catalog: &'a SpectralCatalog,
    filter: &TransitionFilter,
) -> Vec<&'a Transition> {
    catalog
        .transitions()
        .iter()
        .filter(|t| filter.matches(t))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_filter_passes_everything() {
        let catalog = SpectralCatalog::builtin();
        let all = filtered_transitions(&catalog, &TransitionFilter::default());
        assert_eq!(all.len(), catalog.transitions().len());
    }

    #[test]
    fn element_filter_matches_lookup() {
        let catalog = SpectralCatalog::builtin();
        let filter = TransitionFilter {
            element: Some("Hg".into()),
            ..Default::default()
        };
        let mercury = filtered_transitions(&catalog, &filter);
        assert_eq!(mercury.len(), catalog.transitions_for("Hg").unwrap().len());
        assert!(mercury.iter().all(|t| t.element == "Hg"));
    }

    #[test]
    fn domain_and_intensity_combine() {
        let catalog = SpectralCatalog::builtin();
        let filter = TransitionFilter {
            element: None,
            domain: Some(SpectralDomain::Visible),
            min_intensity: 0.8,
        };
        let strong_visible = filtered_transitions(&catalog, &filter);
        assert!(!strong_visible.is_empty());
        for t in strong_visible {
            assert_eq!(t.domain(), SpectralDomain::Visible);
            assert!(t.relative_intensity >= 0.8);
        }
    }

    #[test]
    fn intensity_threshold_excludes_weak_hydrogen_lines() {
        let catalog = SpectralCatalog::builtin();
        let filter = TransitionFilter {
            element: Some("H".into()),
            domain: None,
            min_intensity: 0.9,
        };
        // Only the Δn = 1 hydrogen lines have intensity 1/(n2−n1)² = 1.
        let lines = filtered_transitions(&catalog, &filter);
        assert_eq!(lines.len(), 6);
        assert!(lines
            .iter()
            .all(|t| t.upper_level == t.lower_level + 1));
    }
}
