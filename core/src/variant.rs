use crate::{failure::Failure, outcome::Success, unwrap::Unwrapped};

/// Types a dispatcher can register handlers for.
///
/// `select` is the "is instance of" test: it returns the subject viewed as
/// `Self` when the subject is one. Failure kinds are instances of every kind
/// on their `base` chain, so a handler for a general kind also fires for the
/// more specific ones.
pub trait Variant<T> {
    fn select<'a>(subject: Unwrapped<'a, T>) -> Option<&'a Self>;
}

/// Success variant, matches every successful outcome.
impl<T> Variant<T> for Success<T> {
    fn select<'a>(subject: Unwrapped<'a, T>) -> Option<&'a Self> {
        subject.success()
    }
}

/// Concrete failure kinds.
impl<T, F> Variant<T> for F
where
    F: Failure,
{
    fn select<'a>(subject: Unwrapped<'a, T>) -> Option<&'a Self> {
        subject.failure()?.downcast_ref::<F>()
    }
}

/// Any failure at all.
impl<T> Variant<T> for dyn Failure {
    fn select<'a>(subject: Unwrapped<'a, T>) -> Option<&'a Self> {
        subject.failure()
    }
}
