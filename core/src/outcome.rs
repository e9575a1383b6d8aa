use crate::{
    error::{Error, Result},
    failure::Failure,
    switch::Switch,
    switch_async::SwitchAsync,
    unwrap::{unwrap, Unwrapped},
};
use std::{any::Any, ops::Deref};

/// Wrapper for a successfully produced value.
///
/// It is the variant handlers register against to react on success:
///
/// ```rust
/// use verdict_core::{Outcome, Success};
///
/// let outcome = Outcome::success(String::from("hi"));
/// let upper = outcome
///     .switch()
///     .case::<Success<String>>(|Success(s)| s.to_uppercase())
///     .default(|_| "?".to_string());
///
/// assert_eq!(upper, "HI");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Success<T>(pub T);

impl<T> Success<T> {
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T> Deref for Success<T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

/// Either a value of type `T` or a failure.
///
/// Outcomes are immutable once built. Use `switch` or `switch_async` to react
/// on the concrete variant.
#[derive(Debug)]
pub enum Outcome<T> {
    Success(Success<T>),
    Failure(Box<dyn Failure>),
}

impl<T> Outcome<T> {
    pub fn success(value: T) -> Self {
        Outcome::Success(Success(value))
    }

    /// Wraps concrete failure, its type stays matchable by a dispatcher.
    pub fn failure<F>(failure: F) -> Self
    where
        F: Failure,
    {
        Outcome::Failure(Box::new(failure))
    }

    /// Creates failed outcome from a failure that may be absent.
    /// Absent failure is a caller bug and no outcome is produced.
    pub fn from_failure(failure: Option<Box<dyn Failure>>) -> Result<Self> {
        failure
            .map(Outcome::Failure)
            .ok_or(Error::InvalidArgument { name: "failure" })
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Success(_))
    }

    pub fn is_fail(&self) -> bool {
        !self.is_success()
    }

    /// Returns success payload, `None` for failures.
    pub fn value(&self) -> Option<&T> {
        match self {
            Outcome::Success(Success(value)) => Some(value),
            Outcome::Failure(_) => None,
        }
    }

    pub fn into_value(self) -> Option<T> {
        match self {
            Outcome::Success(Success(value)) => Some(value),
            Outcome::Failure(_) => None,
        }
    }

    /// Returns wrapped failure, `None` for successes.
    pub fn as_failure(&self) -> Option<&dyn Failure> {
        match self {
            Outcome::Success(_) => None,
            Outcome::Failure(failure) => Some(&**failure),
        }
    }

    pub fn into_result(self) -> std::result::Result<T, Box<dyn Failure>> {
        self.into()
    }

    /// Returns object that dispatchers match against.
    pub fn unwrapped(&self) -> Unwrapped<'_, T> {
        unwrap(self)
    }

    /// Starts synchronous dispatch over this outcome.
    ///
    /// `R` is what every handler returns, `()` for side-effect only chains.
    pub fn switch<R>(&self) -> Switch<'_, T, R> {
        Switch::new(self)
    }

    /// Starts asynchronous dispatch over this outcome.
    pub fn switch_async<R>(&self) -> SwitchAsync<'_, T, R> {
        SwitchAsync::new(self)
    }
}

impl<T> Outcome<T>
where
    T: Any,
{
    /// Returns payload if the outcome succeeded with exactly `U`.
    /// Failures never expose anything here, their message included.
    pub fn try_get_value<U>(&self) -> Option<&U>
    where
        U: Any,
    {
        self.unwrapped().try_get_value::<U>()
    }
}

impl<T> From<Success<T>> for Outcome<T> {
    fn from(success: Success<T>) -> Self {
        Outcome::Success(success)
    }
}

impl<T, F> From<F> for Outcome<T>
where
    F: Failure,
{
    fn from(failure: F) -> Self {
        Outcome::failure(failure)
    }
}

impl<T> From<Outcome<T>> for std::result::Result<T, Box<dyn Failure>> {
    fn from(outcome: Outcome<T>) -> Self {
        match outcome {
            Outcome::Success(Success(value)) => Ok(value),
            Outcome::Failure(failure) => Err(failure),
        }
    }
}
