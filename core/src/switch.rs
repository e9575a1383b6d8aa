use crate::{
    error::{Error, Result},
    outcome::Outcome,
    unwrap::{unwrap, Unwrapped},
    variant::Variant,
};
use log::{debug, trace};
use std::any::type_name;

/// Synchronous dispatcher over an outcome's concrete variant.
///
/// Handlers are tested in the order they are registered and the first one
/// whose variant matches runs, right away. Every later `case` is skipped,
/// even when it would match as well, so register specific failure kinds
/// before the general kinds they extend.
///
/// ```rust
/// use verdict_core::{Failure, Outcome, Success};
///
/// #[derive(Debug)]
/// struct Timeout(String);
///
/// impl Failure for Timeout {
///     fn message(&self) -> &str {
///         &self.0
///     }
/// }
///
/// let outcome: Outcome<String> = Timeout("t".into()).into();
/// let message = outcome
///     .switch()
///     .case::<Success<String>>(|Success(s)| s.clone())
///     .default(|subject| subject.failure().map(|f| f.to_string()).unwrap_or_default());
///
/// assert_eq!(message, "t");
/// ```
///
/// `R` is the value every handler returns, `()` when handlers only run side effects.
#[must_use = "handlers are not resolved until `default` is called"]
pub struct Switch<'a, T, R = ()> {
    subject: Unwrapped<'a, T>,

    /// Value returned by the matched case. `Some` means later cases are skipped.
    resolved: Option<R>,
}

impl<'a, T, R> Switch<'a, T, R> {
    pub fn new(outcome: &'a Outcome<T>) -> Self {
        Self {
            subject: unwrap(outcome),
            resolved: None,
        }
    }

    /// Creates switch over outcome that may be absent, which is a caller bug.
    pub fn try_new(outcome: Option<&'a Outcome<T>>) -> Result<Self> {
        outcome
            .map(Self::new)
            .ok_or(Error::InvalidArgument { name: "outcome" })
    }

    /// Registers handler for variant `V`.
    ///
    /// Handler runs immediately when nothing has matched yet and the subject
    /// is a `V`, otherwise it is dropped without being called.
    pub fn case<V>(mut self, handler: impl FnOnce(&'a V) -> R) -> Self
    where
        V: Variant<T> + ?Sized + 'a,
    {
        if self.resolved.is_some() {
            trace!("Switch::case - skipping {}, already matched", type_name::<V>());
            return self;
        }

        match V::select(self.subject) {
            Some(item) => {
                debug!("Switch::case - matched {}", type_name::<V>());
                self.resolved = Some(handler(item));
            }
            None => trace!("Switch::case - {} does not match", type_name::<V>()),
        }
        self
    }

    /// Finishes the chain. Returns what the matched case returned, or calls
    /// `fallback` with the unwrapped subject when no case matched.
    pub fn default(self, fallback: impl FnOnce(Unwrapped<'a, T>) -> R) -> R {
        match self.resolved {
            Some(resolved) => resolved,
            None => {
                debug!("Switch::default - no case matched, running fallback");
                fallback(self.subject)
            }
        }
    }

    /// Same as `default`.
    pub fn otherwise(self, fallback: impl FnOnce(Unwrapped<'a, T>) -> R) -> R {
        self.default(fallback)
    }
}
