//! Bridges for synchronous callers holding a future that yields an outcome.

use futures_executor::block_on;
use std::future::Future;
use verdict_core::Outcome;

/// Runs `future` to completion on the current thread and returns its outcome,
/// ready to be dispatched with `switch`.
///
/// ```rust
/// use verdict::{extensions::block_on_outcome, Outcome, Success};
///
/// async fn fetch() -> Outcome<u32> {
///     Outcome::success(7)
/// }
///
/// let outcome = block_on_outcome(fetch());
/// let value = outcome
///     .switch()
///     .case::<Success<u32>>(|Success(v)| *v)
///     .default(|_| 0);
///
/// assert_eq!(value, 7);
/// ```
pub fn block_on_outcome<T, F>(future: F) -> Outcome<T>
where
    F: Future<Output = Outcome<T>>,
{
    block_on(future)
}

/// Method form of `block_on_outcome` for every future producing an outcome.
pub trait OutcomeFutureExt<T>: Future<Output = Outcome<T>> + Sized {
    /// Blocks current thread until the outcome is available.
    fn wait(self) -> Outcome<T> {
        block_on_outcome(self)
    }
}

impl<T, F> OutcomeFutureExt<T> for F where F: Future<Output = Outcome<T>> {}
