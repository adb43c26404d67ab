//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! The app has a single page; it owns layout and delegates rendering details
//! to `components`.

pub mod home;
