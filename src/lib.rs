//! Outcomes that are either a value or one of an open set of failure kinds,
//! dispatched on their concrete kind in registration order.
//!
//! Re-exports `verdict-core` and the `Failure` derive. Deriving `Failure`
//! expands to paths under `::verdict_core`, so crates using the derive depend
//! on `verdict-core` as well.

pub mod extensions;

pub use verdict_core::*;
pub use verdict_macros::Failure;
