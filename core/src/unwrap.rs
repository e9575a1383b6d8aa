use crate::{
    failure::Failure,
    outcome::{Outcome, Success},
};
use std::any::Any;

/// Object a dispatcher matches against.
///
/// For failed outcomes it is the inner failure, so its concrete kind can be
/// tested, and not the `Outcome` wrapping it. For successful outcomes it is the
/// `Success` wrapper itself.
///
/// It is also the general view fallbacks receive, offering the same queries
/// as the outcome it came from.
#[derive(Debug)]
pub enum Unwrapped<'a, T> {
    Success(&'a Success<T>),
    Failure(&'a dyn Failure),
}

// Derive would require `T: Clone`.
impl<'a, T> Clone for Unwrapped<'a, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<'a, T> Copy for Unwrapped<'a, T> {}

impl<'a, T> Unwrapped<'a, T> {
    pub fn is_success(&self) -> bool {
        matches!(self, Unwrapped::Success(_))
    }

    /// Failure subject always reports fail.
    pub fn is_fail(&self) -> bool {
        !self.is_success()
    }

    pub fn success(&self) -> Option<&'a Success<T>> {
        match *self {
            Unwrapped::Success(success) => Some(success),
            Unwrapped::Failure(_) => None,
        }
    }

    pub fn failure(&self) -> Option<&'a dyn Failure> {
        match *self {
            Unwrapped::Success(_) => None,
            Unwrapped::Failure(failure) => Some(failure),
        }
    }
}

impl<'a, T> Unwrapped<'a, T>
where
    T: Any,
{
    /// Returns payload if subject is a success holding exactly `U`.
    pub fn try_get_value<U>(&self) -> Option<&'a U>
    where
        U: Any,
    {
        let success = self.success()?;
        let value: &'a dyn Any = &success.0;
        value.downcast_ref::<U>()
    }
}

/// Resolves outcome into the object handlers should be matched against.
pub fn unwrap<T>(outcome: &Outcome<T>) -> Unwrapped<'_, T> {
    match outcome {
        Outcome::Success(success) => Unwrapped::Success(success),
        Outcome::Failure(failure) => Unwrapped::Failure(&**failure),
    }
}
