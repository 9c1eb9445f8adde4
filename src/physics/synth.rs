use crate::constants::REFERENCE_TEMPERATURE_K;
use crate::data::model::{
    Element, ElementCategory, SimulatedSpectrum, SpectralLine, Transition,
};

// ---------------------------------------------------------------------------
// Line derivation: Transition → SpectralLine (width model)
// ---------------------------------------------------------------------------

/// Base Gaussian width and jitter span (nm) for an element category.
///
/// Noble gases get the narrowest profiles, alkali metals the widest; the
/// jitter span is the band a randomized width may add on top of the base.
fn width_model(category: ElementCategory) -> (f64, f64) {
    match category {
        ElementCategory::NobleGas => (0.05, 0.02),
        ElementCategory::AlkaliMetal => (0.10, 0.05),
        _ => (0.08, 0.03),
    }
}

/// Derive rendering-ready lines from an element's transitions.
///
/// With `jitter = None` every line gets the deterministic base width for
/// the element's category. With a seeded [`JitterRng`] the width is spread
/// uniformly over the jitter band, reproducibly for a given seed.
pub fn derive_lines(
    element: &Element,
    transitions: &[&Transition],
    mut jitter: Option<&mut JitterRng>,
) -> Vec<SpectralLine> {
    let (base, span) = width_model(element.category);
    transitions
        .iter()
        .map(|t| {
            let r = jitter.as_deref_mut().map_or(0.0, JitterRng::next_f64);
            SpectralLine {
                element: t.element.clone(),
                label: t.label.clone(),
                wavelength_nm: t.wavelength_nm,
                intensity: t.relative_intensity,
                width_nm: base + span * r,
                series: t.series.clone(),
            }
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Gaussian profile summation
// ---------------------------------------------------------------------------

fn gaussian(x: f64, mu: f64, sigma: f64, amplitude: f64) -> f64 {
    amplitude * (-0.5 * ((x - mu) / sigma).powi(2)).exp()
}

/// Synthesize an intensity-vs-wavelength curve over `[λ_min, λ_max]`.
///
/// Each line whose center lies inside the window contributes a Gaussian
/// `intensity · exp(−0.5·((λ − center)/w)²)`; lines centered outside the
/// window are skipped. When a temperature is supplied, every width is
/// scaled by `√(T / 300 K)` (thermal Doppler broadening). The output is not
/// normalized; intensities are the raw sum and may exceed 1.
///
/// Pure function: identical lines, window, sample count, and temperature
/// produce an identical curve.
pub fn synthesize(
    lines: &[SpectralLine],
    wavelength_range: (f64, f64),
    samples: usize,
    temperature_k: Option<f64>,
) -> SimulatedSpectrum {
    let (lambda_min, lambda_max) = wavelength_range;
    if samples == 0 {
        return SimulatedSpectrum {
            wavelength_nm: Vec::new(),
            intensity: Vec::new(),
        };
    }

    let step = if samples > 1 {
        (lambda_max - lambda_min) / (samples - 1) as f64
    } else {
        0.0
    };
    let grid: Vec<f64> = (0..samples).map(|i| lambda_min + i as f64 * step).collect();

    let thermal_scale = temperature_k
        .map(|t| (t / REFERENCE_TEMPERATURE_K).sqrt())
        .unwrap_or(1.0);

    let mut intensity = vec![0.0; samples];
    for line in lines {
        if line.wavelength_nm < lambda_min || line.wavelength_nm > lambda_max {
            continue;
        }
        let width = line.width_nm * thermal_scale;
        for (value, &lambda) in intensity.iter_mut().zip(&grid) {
            *value += gaussian(lambda, line.wavelength_nm, width, line.intensity);
        }
    }

    SimulatedSpectrum {
        wavelength_nm: grid,
        intensity,
    }
}

// ---------------------------------------------------------------------------
// JitterRng – seeded xoshiro256** for width jitter
// ---------------------------------------------------------------------------

/// Minimal deterministic PRNG (xoshiro256**) for line-width jitter.
///
/// Randomness lives here, injected per request, instead of being baked into
/// the static reference tables; a fixed seed makes synthesis reproducible.
pub struct JitterRng {
    state: [u64; 4],
}

impl JitterRng {
    pub fn new(seed: u64) -> Self {
        // SplitMix-style seeding so a small seed fills all four words.
        let mut s = [0u64; 4];
        let mut x = seed;
        for slot in &mut s {
            x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
            *slot = x;
        }
        JitterRng { state: s }
    }

    fn next_u64(&mut self) -> u64 {
        let result = (self.state[1].wrapping_mul(5))
            .rotate_left(7)
            .wrapping_mul(9);
        let t = self.state[1] << 17;
        self.state[2] ^= self.state[0];
        self.state[3] ^= self.state[1];
        self.state[1] ^= self.state[2];
        self.state[0] ^= self.state[3];
        self.state[2] ^= t;
        self.state[3] = self.state[3].rotate_left(45);
        result
    }

    /// Uniform sample in [0, 1).
    pub fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }
}
