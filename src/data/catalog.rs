use std::collections::BTreeMap;

use crate::constants::RYDBERG_CONSTANT;
use crate::data::model::{Element, ElementCategory, SpectralDomain, SpectralSeries, Transition};
use crate::error::SpectraError;
use crate::physics::rydberg;

// ---------------------------------------------------------------------------
// SpectralCatalog – the static reference tables
// ---------------------------------------------------------------------------

/// The complete reference catalog: elements, hydrogen series, and the shared
/// transition table, with a pre-computed symbol index.
///
/// Built once (usually via [`SpectralCatalog::builtin`]) and read-only for
/// the process lifetime; concurrent reads need no locking. Tests rebuild it
/// from smaller fixture tables through [`SpectralCatalog::from_parts`].
#[derive(Debug, Clone)]
pub struct SpectralCatalog {
    elements: Vec<Element>,
    series: Vec<SpectralSeries>,
    transitions: Vec<Transition>,
    symbol_index: BTreeMap<String, usize>,
}

impl SpectralCatalog {
    /// Build a catalog from explicit tables, indexing elements by symbol.
    pub fn from_parts(
        elements: Vec<Element>,
        series: Vec<SpectralSeries>,
        transitions: Vec<Transition>,
    ) -> Self {
        let symbol_index = elements
            .iter()
            .enumerate()
            .map(|(i, e)| (e.symbol.clone(), i))
            .collect();
        log::debug!(
            "catalog: {} elements, {} series, {} transitions",
            elements.len(),
            series.len(),
            transitions.len()
        );
        SpectralCatalog {
            elements,
            series,
            transitions,
            symbol_index,
        }
    }

    /// The built-in catalog: the extended element set, the five named
    /// hydrogen series, the generated hydrogen transitions, and the
    /// tabulated empirical lines for the other elements.
    pub fn builtin() -> Self {
        Self::from_parts(
            builtin_elements(),
            builtin_series(),
            builtin_transitions(),
        )
    }

    /// Append user-supplied transitions (e.g. from a loaded line list),
    /// consuming the catalog so the result is again immutable.
    pub fn with_extra_transitions(mut self, extra: Vec<Transition>) -> Self {
        self.transitions.extend(extra);
        self
    }

    /// Look up an element by symbol.
    pub fn element(&self, symbol: &str) -> Result<&Element, SpectraError> {
        self.symbol_index
            .get(symbol)
            .map(|&i| &self.elements[i])
            .ok_or_else(|| SpectraError::UnknownElement(symbol.to_string()))
    }

    /// Look up a hydrogen series by name (`"Lyman"`, `"Balmer"`, …).
    pub fn series(&self, name: &str) -> Result<&SpectralSeries, SpectraError> {
        self.series
            .iter()
            .find(|s| s.name == name)
            .ok_or_else(|| SpectraError::UnknownSeries(name.to_string()))
    }

    /// All transitions belonging to one element, in table order.
    /// Fails when the symbol itself is unknown.
    pub fn transitions_for(&self, symbol: &str) -> Result<Vec<&Transition>, SpectraError> {
        self.element(symbol)?;
        Ok(self
            .transitions
            .iter()
            .filter(|t| t.element == symbol)
            .collect())
    }

    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    pub fn all_series(&self) -> &[SpectralSeries] {
        &self.series
    }

    pub fn transitions(&self) -> &[Transition] {
        &self.transitions
    }
}

// ---------------------------------------------------------------------------
// Built-in tables
// ---------------------------------------------------------------------------

#[allow(clippy::too_many_arguments)]
fn element(
    symbol: &str,
    name: &str,
    atomic_number: u32,
    atomic_mass: f64,
    configuration: &str,
    period: u8,
    group: u8,
    category: ElementCategory,
    energy_levels_ev: &[f64],
    color: &str,
) -> Element {
    Element {
        symbol: symbol.to_string(),
        name: name.to_string(),
        atomic_number,
        atomic_mass,
        electron_configuration: configuration.to_string(),
        period,
        group,
        category,
        energy_levels_ev: energy_levels_ev.to_vec(),
        color: color.to_string(),
    }
}

fn builtin_elements() -> Vec<Element> {
    use ElementCategory::*;

    // Energy-level sequences (eV, descending) are tabulated only for the
    // elements that have them; the rest carry an empty list.
    vec![
        // Period 1
        element("H", "Hydrogen", 1, 1.008, "1s¹", 1, 1, Nonmetal,
            &[13.6, 3.4, 1.51, 0.85, 0.54], "#FF6B6B"),
        element("He", "Helium", 2, 4.0026, "1s²", 1, 18, NobleGas,
            &[24.6, 4.8, 2.2, 1.3, 0.9], "#4ECDC4"),
        // Period 2
        element("Li", "Lithium", 3, 6.94, "[He] 2s¹", 2, 1, AlkaliMetal, &[], "#FFE66D"),
        element("Be", "Beryllium", 4, 9.0122, "[He] 2s²", 2, 2, AlkalineEarthMetal, &[], "#A8E6CF"),
        element("B", "Boron", 5, 10.81, "[He] 2s² 2p¹", 2, 13, Metalloid, &[], "#FF9A76"),
        element("C", "Carbon", 6, 12.011, "[He] 2s² 2p²", 2, 14, Nonmetal, &[], "#95E1D3"),
        element("N", "Nitrogen", 7, 14.007, "[He] 2s² 2p³", 2, 15, Nonmetal, &[], "#6A89CC"),
        element("O", "Oxygen", 8, 15.999, "[He] 2s² 2p⁴", 2, 16, Nonmetal, &[], "#4ECDC4"),
        element("F", "Fluorine", 9, 18.998, "[He] 2s² 2p⁵", 2, 17, Halogen, &[], "#FF6B6B"),
        element("Ne", "Neon", 10, 20.18, "[He] 2s² 2p⁶", 2, 18, NobleGas,
            &[21.6, 5.5, 3.2, 2.1, 1.5], "#FF9A76"),
        // Period 3
        element("Na", "Sodium", 11, 22.99, "[Ne] 3s¹", 3, 1, AlkaliMetal,
            &[5.14, 3.03, 1.95, 1.52, 1.26], "#FFE66D"),
        element("Mg", "Magnesium", 12, 24.305, "[Ne] 3s²", 3, 2, AlkalineEarthMetal, &[], "#A8E6CF"),
        element("Al", "Aluminium", 13, 26.982, "[Ne] 3s² 3p¹", 3, 13, PostTransitionMetal, &[], "#95E1D3"),
        element("Si", "Silicon", 14, 28.085, "[Ne] 3s² 3p²", 3, 14, Metalloid, &[], "#FF9A76"),
        element("P", "Phosphorus", 15, 30.974, "[Ne] 3s² 3p³", 3, 15, Nonmetal, &[], "#6A89CC"),
        element("S", "Sulfur", 16, 32.06, "[Ne] 3s² 3p⁴", 3, 16, Nonmetal, &[], "#FFE66D"),
        element("Cl", "Chlorine", 17, 35.45, "[Ne] 3s² 3p⁵", 3, 17, Halogen, &[], "#4ECDC4"),
        element("Ar", "Argon", 18, 39.948, "[Ne] 3s² 3p⁶", 3, 18, NobleGas, &[], "#FF6B6B"),
        // Period 4+
        element("K", "Potassium", 19, 39.098, "[Ar] 4s¹", 4, 1, AlkaliMetal, &[], "#FFE66D"),
        element("Ca", "Calcium", 20, 40.08, "[Ar] 4s²", 4, 2, AlkalineEarthMetal,
            &[6.11, 3.15, 2.52, 1.94, 1.57], "#A8E6CF"),
        element("Fe", "Iron", 26, 55.845, "[Ar] 4s² 3d⁶", 4, 8, TransitionMetal, &[], "#FF9A76"),
        element("Cu", "Copper", 29, 63.546, "[Ar] 4s¹ 3d¹⁰", 4, 11, TransitionMetal, &[], "#FFE66D"),
        element("Br", "Bromine", 35, 79.904, "[Ar] 4s² 3d¹⁰ 4p⁵", 4, 17, Halogen, &[], "#B33939"),
        element("Ag", "Silver", 47, 107.87, "[Kr] 5s¹ 4d¹⁰", 5, 11, TransitionMetal, &[], "#95E1D3"),
        element("Au", "Gold", 79, 196.97, "[Xe] 6s¹ 4f¹⁴ 5d¹⁰", 6, 11, TransitionMetal, &[], "#FFE66D"),
        element("Hg", "Mercury", 80, 200.59, "[Xe] 4f¹⁴ 5d¹⁰ 6s²", 6, 12, TransitionMetal,
            &[10.44, 6.7, 4.89, 3.71, 2.85], "#95E1D3"),
        element("Pb", "Lead", 82, 207.2, "[Xe] 4f¹⁴ 5d¹⁰ 6s² 6p²", 6, 14, PostTransitionMetal, &[], "#A8E6CF"),
        element("U", "Uranium", 92, 238.03, "[Rn] 7s² 5f³ 6d¹", 7, 3, Actinide, &[], "#FF6B6B"),
    ]
}

fn builtin_series() -> Vec<SpectralSeries> {
    fn series(
        name: &str,
        final_level: u32,
        domain: SpectralDomain,
        min: f64,
        max: f64,
        color: &str,
    ) -> SpectralSeries {
        SpectralSeries {
            name: name.to_string(),
            final_level,
            domain,
            wavelength_min_nm: min,
            wavelength_max_nm: max,
            color: color.to_string(),
        }
    }

    vec![
        series("Lyman", 1, SpectralDomain::Ultraviolet, 91.2, 121.6, "#9C27B0"),
        series("Balmer", 2, SpectralDomain::Visible, 365.0, 656.3, "#4CAF50"),
        series("Paschen", 3, SpectralDomain::Infrared, 820.4, 1875.1, "#FF9800"),
        series("Brackett", 4, SpectralDomain::Infrared, 1458.4, 4051.2, "#F44336"),
        series("Pfund", 5, SpectralDomain::Infrared, 2278.8, 7457.8, "#2196F3"),
    ]
}

fn builtin_transitions() -> Vec<Transition> {
    let mut transitions = Vec::new();

    // Hydrogen: generated analytically for n2 ∈ 2..=7, n1 ∈ 1..n2, so
    // wavelength and energy are consistent via E = hc/λ by construction.
    for n2 in 2..=7u32 {
        for n1 in 1..n2 {
            // Valid by construction, so the formula cannot fail here.
            let wavelength_nm = rydberg::rydberg_wavelength(n1, n2, 1, RYDBERG_CONSTANT)
                .unwrap_or_default();
            transitions.push(Transition {
                element: "H".to_string(),
                label: format!("{n1}→{n2}"),
                upper_level: n2,
                lower_level: n1,
                wavelength_nm,
                energy_ev: rydberg::photon_energy_ev(wavelength_nm),
                relative_intensity: rydberg::relative_intensity(n1, n2),
                series: rydberg::hydrogen_series(n1).map(str::to_string),
            });
        }
    }

    // Empirical lines for the other elements: measured wavelength/energy
    // pairs, quantum levels not modeled (0/0).
    let empirical: &[(&str, &str, f64, f64, f64, &str)] = &[
        // Alkali metals
        ("Li", "2p→2s", 670.8, 1.85, 0.9, "Principal"),
        ("Na", "3p→3s", 589.0, 2.11, 0.95, "Doublet D"),
        ("Na", "3p→3s", 589.6, 2.10, 0.9, "Doublet D"),
        ("K", "4p→4s", 766.5, 1.62, 0.8, "Doublet"),
        ("K", "4p→4s", 769.9, 1.61, 0.7, "Doublet"),
        // Noble gases
        ("He", "2¹P→1¹S", 58.4, 21.2, 0.6, "Resonance"),
        ("He", "3³D→2³P", 587.6, 2.11, 0.8, "Triplet"),
        ("Ne", "3s→2p", 640.2, 1.94, 0.7, "Visible"),
        ("Ar", "4p→4s", 750.4, 1.65, 0.6, "IR"),
        // Transition metals
        ("Fe", "Multiple", 358.1, 3.46, 0.8, "UV"),
        ("Fe", "Multiple", 438.4, 2.83, 0.7, "Visible"),
        ("Cu", "4p→4s", 324.8, 3.82, 0.9, "UV"),
        ("Cu", "4p→4s", 327.4, 3.79, 0.8, "UV"),
        ("Ag", "5p→5s", 328.1, 3.78, 0.9, "UV"),
        ("Ag", "5p→5s", 338.3, 3.66, 0.7, "UV"),
        // Halogens
        ("Cl", "Multiple", 134.7, 9.21, 0.6, "Far UV"),
        ("Br", "Multiple", 148.9, 8.33, 0.5, "Far UV"),
        // Alkaline-earth metals
        ("Ca", "4p→4s", 422.7, 2.93, 0.8, "Resonance"),
        ("Mg", "3p→3s", 285.2, 4.35, 0.9, "UV"),
        // Mercury lamp lines
        ("Hg", "6³P₁→6¹S₀", 253.7, 4.89, 0.95, "Resonance"),
        ("Hg", "7³S₁→6³P₀", 404.7, 3.06, 0.7, "Violet"),
        ("Hg", "6³P₁→6¹S₀", 435.8, 2.84, 0.8, "Blue"),
        // Astrophysically important nonmetals
        ("C", "Multiple", 165.7, 7.48, 0.6, "UV"),
        ("N", "Multiple", 149.3, 8.30, 0.5, "UV"),
        ("O", "Multiple", 130.2, 9.52, 0.7, "UV"),
    ];

    transitions.extend(empirical.iter().map(
        |&(symbol, label, wavelength_nm, energy_ev, intensity, series)| Transition {
            element: symbol.to_string(),
            label: label.to_string(),
            upper_level: 0,
            lower_level: 0,
            wavelength_nm,
            energy_ev,
            relative_intensity: intensity,
            series: Some(series.to_string()),
        },
    ));

    transitions
}
