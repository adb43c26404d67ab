//! Observable state container seam.
//!
//! Controllers never hold a borrow across an `.await`; every access is a short
//! closure so reactive stores can notify subscribers after each write.

use std::cell::RefCell;
use std::rc::Rc;

/// A mutable state cell the controllers read and write through.
pub trait Store<S> {
    /// Run `f` against the current state.
    fn read<R>(&self, f: impl FnOnce(&S) -> R) -> R;

    /// Mutate the state in place.
    fn write(&self, f: impl FnOnce(&mut S));
}

impl<S> Store<S> for Rc<RefCell<S>> {
    fn read<R>(&self, f: impl FnOnce(&S) -> R) -> R {
        f(&self.borrow())
    }

    fn write(&self, f: impl FnOnce(&mut S)) {
        f(&mut self.borrow_mut());
    }
}

/// Runs `clear` on drop so loading flags reset on every exit path.
pub(crate) struct PendingGuard<'a, St, S, F>
where
    St: Store<S>,
    F: FnMut(&mut S),
{
    store: &'a St,
    clear: F,
    _state: std::marker::PhantomData<fn(&mut S)>,
}

impl<'a, St, S, F> PendingGuard<'a, St, S, F>
where
    St: Store<S>,
    F: FnMut(&mut S),
{
    pub fn new(store: &'a St, clear: F) -> Self {
        Self {
            store,
            clear,
            _state: std::marker::PhantomData,
        }
    }
}

impl<St, S, F> Drop for PendingGuard<'_, St, S, F>
where
    St: Store<S>,
    F: FnMut(&mut S),
{
    fn drop(&mut self) {
        let clear = &mut self.clear;
        self.store.write(|state| clear(state));
    }
}
