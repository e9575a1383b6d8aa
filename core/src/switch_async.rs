use crate::{
    error::{Error, Result},
    outcome::Outcome,
    unwrap::{unwrap, Unwrapped},
    variant::Variant,
};
use futures_util::future::{FutureExt, LocalBoxFuture, Shared};
use log::{debug, trace};
use std::{
    any::type_name,
    future::Future,
    pin::Pin,
    task::{Context, Poll},
};

/// Asynchronous dispatcher over an outcome's concrete variant.
///
/// Matching follows the same rules as `Switch`: registration order decides
/// and only the first matching handler is called. The handler is called at
/// the moment its `case` matches and the future it returns is the one
/// `default` hands back, no other handler future is ever created.
///
/// ```rust
/// use futures_executor::block_on;
/// use verdict_core::{Outcome, Success};
///
/// let outcome = Outcome::success(21);
/// let doubled = block_on(
///     outcome
///         .switch_async()
///         .case::<Success<i32>, _>(|Success(v)| async move { v * 2 })
///         .default(|_| async { 0 }),
/// );
///
/// assert_eq!(doubled, 42);
/// ```
#[must_use = "handlers are not resolved until `default` is called"]
pub struct SwitchAsync<'a, T, R = ()> {
    subject: Unwrapped<'a, T>,

    /// Future created by the matched case.
    pending: Option<LocalBoxFuture<'a, R>>,
}

impl<'a, T, R> SwitchAsync<'a, T, R> {
    pub fn new(outcome: &'a Outcome<T>) -> Self {
        Self {
            subject: unwrap(outcome),
            pending: None,
        }
    }

    /// Creates switch over outcome that may be absent, which is a caller bug.
    pub fn try_new(outcome: Option<&'a Outcome<T>>) -> Result<Self> {
        outcome
            .map(Self::new)
            .ok_or(Error::InvalidArgument { name: "outcome" })
    }

    /// Registers asynchronous handler for variant `V`.
    ///
    /// When nothing has matched yet and the subject is a `V` the handler is
    /// called and its future stored. Otherwise the handler is dropped.
    pub fn case<V, Fut>(mut self, handler: impl FnOnce(&'a V) -> Fut) -> Self
    where
        V: Variant<T> + ?Sized + 'a,
        Fut: Future<Output = R> + 'a,
    {
        if self.pending.is_some() {
            trace!(
                "SwitchAsync::case - skipping {}, already matched",
                type_name::<V>()
            );
            return self;
        }

        match V::select(self.subject) {
            Some(item) => {
                debug!("SwitchAsync::case - matched {}", type_name::<V>());
                self.pending = Some(handler(item).boxed_local());
            }
            None => trace!("SwitchAsync::case - {} does not match", type_name::<V>()),
        }
        self
    }

    /// Finishes the chain. Returns the matched case's future, or the future
    /// of `fallback` called with the unwrapped subject when no case matched.
    pub fn default<Fut>(
        self,
        fallback: impl FnOnce(Unwrapped<'a, T>) -> Fut,
    ) -> Dispatched<'a, R>
    where
        Fut: Future<Output = R> + 'a,
    {
        let inner = match self.pending {
            Some(pending) => pending,
            None => {
                debug!("SwitchAsync::default - no case matched, running fallback");
                fallback(self.subject).boxed_local()
            }
        };
        Dispatched { inner }
    }

    /// Same as `default`.
    pub fn otherwise<Fut>(
        self,
        fallback: impl FnOnce(Unwrapped<'a, T>) -> Fut,
    ) -> Dispatched<'a, R>
    where
        Fut: Future<Output = R> + 'a,
    {
        self.default(fallback)
    }
}

/// Result of an asynchronous dispatch: the single future created by the
/// matched case or by the fallback.
#[must_use = "futures do nothing unless you `.await` or poll them"]
pub struct Dispatched<'a, R> {
    inner: LocalBoxFuture<'a, R>,
}

impl<'a, R> Dispatched<'a, R>
where
    R: Clone,
{
    /// Turns dispatch into a cloneable future. Every clone observes the same
    /// completion of the one underlying handler future.
    pub fn shared(self) -> Shared<Self> {
        FutureExt::shared(self)
    }
}

impl<'a, R> Future for Dispatched<'a, R> {
    type Output = R;

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        self.inner.poll_unpin(cx)
    }
}
