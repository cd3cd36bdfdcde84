//! # Snapshot Testing Support
//!
//! Utilities for testing the parser via snapshot assertions and invariant checks.
//!
//! ## Modules
//!
//! - **`normalize`**: Converts parsed blocks to a stable, all-string `Snap` format
//!   for `insta` snapshot testing
//! - **`invariants`**: Runtime checks for parser correctness (repetitions of at
//!   least one, unique equipment, block equipment equal to the exercise union,
//!   no empty blocks)
//!
//! ## Testing Strategy
//!
//! Plan fixtures are the reference: parsing behaviour is pinned by snapshots of
//! real coach-written plans rather than by a formal grammar.

pub mod invariants;
pub mod normalize;

pub use invariants::check as invariants;
pub use normalize::{BlockSnap, Snap, normalize};
