//! Leptos signal adapter for the `feed` store seam.
//!
//! Controller writes go through `try_update`, so a write that lands after the
//! owning scope is disposed is dropped instead of panicking.

use feed::Store;
use leptos::prelude::*;

/// An `RwSignal` the `feed` controllers can read and write.
pub struct SignalStore<S: 'static>(pub RwSignal<S>);

impl<S: 'static> Clone for SignalStore<S> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<S: 'static> Copy for SignalStore<S> {}

impl<S> Store<S> for SignalStore<S>
where
    S: Send + Sync + 'static,
{
    fn read<R>(&self, f: impl FnOnce(&S) -> R) -> R {
        self.0.with_untracked(f)
    }

    fn write(&self, f: impl FnOnce(&mut S)) {
        let _ = self.0.try_update(f);
    }
}
