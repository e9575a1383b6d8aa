//! Outcomes that are either a value or one of an open set of failure kinds,
//! and dispatchers reacting on the concrete kind in registration order.

pub mod error;
pub mod failure;
pub mod outcome;
pub mod switch;
pub mod switch_async;
pub mod unwrap;
pub mod variant;

pub use error::{Error, Result};
pub use failure::Failure;
pub use outcome::{Outcome, Success};
pub use switch::Switch;
pub use switch_async::{Dispatched, SwitchAsync};
pub use unwrap::Unwrapped;
pub use variant::Variant;
