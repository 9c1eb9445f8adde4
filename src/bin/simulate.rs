use anyhow::{Context, Result};

use rydberg::SpectraEngine;

/// Synthesize the composite emission spectrum of a small plasma mixture and
/// write the sampled curve plus the contributing line list to disk.
///
/// Usage: `simulate [elements…]` (default: H Na Hg). Output lands in the
/// working directory as `spectrum.csv` and `lines.json`.
fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let symbols: Vec<&str> = if args.is_empty() {
        vec!["H", "Na", "Hg"]
    } else {
        args.iter().map(String::as_str).collect()
    };

    let engine = SpectraEngine::new();

    // Same window and sampling as a typical plasma-lamp view: 200–800 nm,
    // 2000 points, T = 5000 K, fixed jitter seed for reproducible widths.
    let spectrum = engine.synthesize_spectrum(&symbols, (200.0, 800.0), 2000, Some(5000.0), Some(42))?;

    let csv_path = "spectrum.csv";
    let mut writer = csv::Writer::from_path(csv_path).context("creating spectrum.csv")?;
    writer
        .write_record(["wavelength_nm", "intensity"])
        .context("writing CSV header")?;
    for (wavelength, intensity) in spectrum.points() {
        writer
            .write_record([format!("{wavelength:.4}"), format!("{intensity:.6}")])
            .context("writing CSV row")?;
    }
    writer.flush().context("flushing spectrum.csv")?;

    let json_path = "lines.json";
    let mut lines = Vec::new();
    for symbol in &symbols {
        lines.extend(engine.lookup_transitions(symbol)?.into_iter().cloned());
    }
    let json = serde_json::to_string_pretty(&lines).context("serializing line list")?;
    std::fs::write(json_path, json).context("writing lines.json")?;

    log::info!(
        "synthesized {} samples from {} lines ({})",
        spectrum.len(),
        lines.len(),
        symbols.join(", ")
    );
    println!(
        "Wrote {} samples to {csv_path} and {} lines to {json_path}",
        spectrum.len(),
        lines.len()
    );
    Ok(())
}
