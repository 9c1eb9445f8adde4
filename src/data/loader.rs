use std::path::Path;

use anyhow::{bail, Context, Result};

use super::model::Transition;

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load user-supplied spectral lines from a file. Dispatch by extension.
///
/// Supported formats:
/// * `.json` – `[{ "element": "Fe", "label": "Multiple", "wavelength_nm": …,
///   "energy_ev": …, "relative_intensity": …, "series": … }, …]`
/// * `.csv`  – header row with the same column names
///
/// The records come back as plain [`Transition`]s; append them to a catalog
/// with [`super::catalog::SpectralCatalog::with_extra_transitions`].
pub fn load_line_list(path: &Path) -> Result<Vec<Transition>> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    let transitions = match ext.as_str() {
        "json" => load_json(path)?,
        "csv" => load_csv(path)?,
        other => bail!("Unsupported file extension: .{other}"),
    };

    for (i, t) in transitions.iter().enumerate() {
        validate(t).with_context(|| format!("Record {i} ({}: {})", t.element, t.label))?;
    }
    log::info!(
        "loaded {} spectral lines from {}",
        transitions.len(),
        path.display()
    );
    Ok(transitions)
}

/// Reject records that would poison downstream formulas.
fn validate(t: &Transition) -> Result<()> {
    if t.element.is_empty() {
        bail!("missing element symbol");
    }
    if !t.wavelength_nm.is_finite() || t.wavelength_nm <= 0.0 {
        bail!("wavelength must be a positive number, got {}", t.wavelength_nm);
    }
    if !(0.0..=1.0).contains(&t.relative_intensity) {
        bail!(
            "relative intensity must lie in [0, 1], got {}",
            t.relative_intensity
        );
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// JSON loader
// ---------------------------------------------------------------------------

fn load_json(path: &Path) -> Result<Vec<Transition>> {
    let text = std::fs::read_to_string(path).context("reading JSON file")?;
    let transitions: Vec<Transition> =
        serde_json::from_str(&text).context("parsing JSON line list")?;
    Ok(transitions)
}

// ---------------------------------------------------------------------------
// CSV loader
// ---------------------------------------------------------------------------

fn load_csv(path: &Path) -> Result<Vec<Transition>> {
    let mut reader = csv::Reader::from_path(path).context("opening CSV")?;
    let mut transitions = Vec::new();
    for (row_no, result) in reader.deserialize::<Transition>().enumerate() {
        let t = result.with_context(|| format!("CSV row {row_no}"))?;
        transitions.push(t);
    }
    Ok(transitions)
}
