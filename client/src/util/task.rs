//! Fire-and-forget tasks for event handlers.

use std::future::Future;

/// Run `fut` on the browser event loop. Native builds have no loop, so the
/// future is dropped unpolled.
pub fn spawn<F>(fut: F)
where
    F: Future<Output = ()> + 'static,
{
    #[cfg(feature = "csr")]
    leptos::task::spawn_local(fut);
    #[cfg(not(feature = "csr"))]
    drop(fut);
}
