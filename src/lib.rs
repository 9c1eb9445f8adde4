//! Atomic emission-spectrum core.
//!
//! Given an element and a pair of quantum levels, this crate computes
//! transition wavelengths and energies with the Rydberg formula, checks the
//! Δl = ±1 electric-dipole selection rule, and synthesizes simulated
//! emission spectra by summing Gaussian line profiles over a static
//! reference catalog of elements and known transitions.
//!
//! Everything is a pure computation over the inputs and an immutable
//! [`data::catalog::SpectralCatalog`]; there is no I/O apart from the
//! optional line-list loader, and no shared mutable state. Presentation
//! (plots, widgets) is left to the caller, which typically goes through the
//! [`engine::SpectraEngine`] facade.

pub mod constants;
pub mod data;
pub mod engine;
pub mod error;
pub mod physics;

pub use data::catalog::SpectralCatalog;
pub use data::model::{
    Element, ElementCategory, SimulatedSpectrum, SpectralDomain, SpectralLine, SpectralSeries,
    Transition,
};
pub use engine::SpectraEngine;
pub use error::SpectraError;
pub use physics::rydberg::TransitionResult;
pub use physics::selection::SelectionOutcome;
