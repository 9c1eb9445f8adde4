/// Data layer: core types, the reference catalog, loading, and filtering.
///
/// Architecture:
/// ```text
///   built-in tables        .json / .csv line lists
///        │                        │
///        ▼                        ▼
///   ┌──────────┐            ┌──────────┐
///   │ catalog   │ ◄──────── │  loader   │  parse file → Vec<Transition>
///   └──────────┘            └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  filter   │  element / domain / intensity predicates → matching rows
///   └──────────┘
/// ```
pub mod catalog;
pub mod filter;
pub mod loader;
pub mod model;
