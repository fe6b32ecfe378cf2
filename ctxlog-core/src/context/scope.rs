//! Ambient "current context" for code that can't take a `&Context`.
//!
//! Uses `tokio::task_local!`, so a scope survives `.await` points on a
//! multi-thread runtime. Synchronous code gets the same storage through
//! [`Context::sync_scope`].

use std::future::Future;

use super::Context;

tokio::task_local! {
    static CURRENT: Context;
}

impl Context {
    /// Run `f` with `self` as the current context.
    pub async fn scope<F: Future>(self, f: F) -> F::Output {
        CURRENT.scope(self, f).await
    }

    /// Run the closure with `self` as the current context.
    pub fn sync_scope<R>(self, f: impl FnOnce() -> R) -> R {
        CURRENT.sync_scope(self, f)
    }

    /// The innermost scoped context, or [`Context::background`] outside
    /// of any scope.
    #[inline]
    pub fn current() -> Self {
        CURRENT.try_with(Context::clone).unwrap_or_default()
    }
}
