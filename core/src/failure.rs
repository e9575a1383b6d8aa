use std::{
    any::Any,
    fmt::{Debug, Display},
};

/// Splitting AsAny into its own trait allows a blanket implementation for
/// every sized 'static type, so failure kinds never have to write the
/// `as_any` boilerplate themselves. `dyn Failure` still reaches the concrete
/// type's implementation through the vtable.
pub trait AsAny: Any {
    fn as_any(&self) -> &dyn Any;
}

impl<T> AsAny for T
where
    T: Any,
{
    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// Root of every failure kind that can flow through an `Outcome`.
///
/// The set of failures is open: any crate can define its own kinds. A kind
/// that "extends" a more general one embeds it and returns it from `base`,
/// which makes the general kind matchable as well.
///
/// ```rust
/// use verdict_core::Failure;
///
/// #[derive(Debug)]
/// struct Timeout {
///     message: String,
/// }
///
/// impl Failure for Timeout {
///     fn message(&self) -> &str {
///         &self.message
///     }
/// }
/// ```
///
/// Most kinds should use `#[derive(Failure)]` from `verdict-macros` instead.
pub trait Failure: AsAny + Debug + Send + Sync + 'static {
    /// Human readable description of what went wrong.
    fn message(&self) -> &str;

    /// The more general failure kind this one extends, if any.
    fn base(&self) -> Option<&dyn Failure> {
        None
    }
}

impl dyn Failure {
    /// Indicates if self is an `F`, either exactly or through its `base` chain.
    pub fn is<F: Failure>(&self) -> bool {
        self.downcast_ref::<F>().is_some()
    }

    /// Returns the first `F` found walking from self down the `base` chain.
    ///
    /// For a derived kind asked for its base kind this returns the embedded
    /// base, not the derived value.
    pub fn downcast_ref<F: Failure>(&self) -> Option<&F> {
        let mut current: Option<&dyn Failure> = Some(self);
        while let Some(failure) = current {
            if let Some(found) = AsAny::as_any(failure).downcast_ref::<F>() {
                return Some(found);
            }
            current = failure.base();
        }
        None
    }
}

impl Display for dyn Failure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.message())
    }
}
