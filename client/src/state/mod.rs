//! Browser-side state modules.
//!
//! DESIGN
//! ======
//! Session and feed state are defined in `feed` and held here in signals.
//! Only the toast stack is browser-specific. Views read state through the
//! memoized slices in `selectors`.

pub mod selectors;
pub mod signal_store;
pub mod toast;
