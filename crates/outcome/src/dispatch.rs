//! Async dispatch over [`Outcome`].
//!
//! Only the handler for the held side is called, so only its future is ever
//! created and awaited. When the chosen handler is synchronous the returned
//! future completes on its first poll.

use std::future::Future;

use crate::outcome::{Inner, Outcome};

impl<G, B> Outcome<G, B> {
    pub async fn match_async<R, FG, FB>(
        self,
        on_good: impl FnOnce(G) -> FG,
        on_bad: impl FnOnce(B) -> FB,
    ) -> R
    where
        FG: Future<Output = R>,
        FB: Future<Output = R>,
    {
        match self.inner {
            Inner::Good(g) => on_good(g).await,
            Inner::Bad(b) => on_bad(b).await,
        }
    }

    /// Async good handler, sync bad handler.
    pub async fn match_good_async<R, FG>(
        self,
        on_good: impl FnOnce(G) -> FG,
        on_bad: impl FnOnce(B) -> R,
    ) -> R
    where
        FG: Future<Output = R>,
    {
        match self.inner {
            Inner::Good(g) => on_good(g).await,
            Inner::Bad(b) => on_bad(b),
        }
    }

    /// Sync good handler, async bad handler.
    pub async fn match_bad_async<R, FB>(
        self,
        on_good: impl FnOnce(G) -> R,
        on_bad: impl FnOnce(B) -> FB,
    ) -> R
    where
        FB: Future<Output = R>,
    {
        match self.inner {
            Inner::Good(g) => on_good(g),
            Inner::Bad(b) => on_bad(b).await,
        }
    }

    pub async fn switch_async<FG, FB>(
        self,
        on_good: impl FnOnce(G) -> FG,
        on_bad: impl FnOnce(B) -> FB,
    ) where
        FG: Future<Output = ()>,
        FB: Future<Output = ()>,
    {
        self.match_async(on_good, on_bad).await;
    }

    pub async fn switch_good_async<FG>(self, on_good: impl FnOnce(G) -> FG, on_bad: impl FnOnce(B))
    where
        FG: Future<Output = ()>,
    {
        self.match_good_async(on_good, on_bad).await;
    }

    pub async fn switch_bad_async<FB>(self, on_good: impl FnOnce(G), on_bad: impl FnOnce(B) -> FB)
    where
        FB: Future<Output = ()>,
    {
        self.match_bad_async(on_good, on_bad).await;
    }
}
