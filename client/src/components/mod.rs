//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components read state signals and controllers from Leptos context provided
//! by `App`; none of them talk to the network directly.

pub mod auth_panel;
pub mod comment_composer;
pub mod comment_list;
pub mod site_header;
pub mod toaster;
