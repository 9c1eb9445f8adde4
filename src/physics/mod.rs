/// Physics layer: closed-form transition formulas and spectrum synthesis.
///
/// Architecture:
/// ```text
///   (n1, n2, Z, R)          (n_i, l_i, n_f, l_f)
///        │                          │
///        ▼                          ▼
///   ┌──────────┐              ┌───────────┐
///   │ rydberg   │              │ selection  │
///   └──────────┘              └───────────┘
///   λ, E, f, domain           allowed?, ≈λ, ≈E
///
///   catalog transitions
///        │
///        ▼
///   ┌──────────┐
///   │  synth    │  derive widths → sum Gaussian profiles → curve
///   └──────────┘
/// ```
pub mod rydberg;
pub mod selection;
pub mod synth;
