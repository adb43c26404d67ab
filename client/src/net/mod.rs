//! Networking for the browser build.
//!
//! SYSTEM CONTEXT
//! ==============
//! `config` resolves the API endpoint captured at build time and `fetch`
//! implements the `feed` transport seam on top of `gloo-net`.

pub mod config;
pub mod fetch;
