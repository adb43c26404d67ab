//! Session and comment-feed workflow shared by the browser and CLI front ends.
//!
//! This crate owns the wire representation of the comment API, the HTTP
//! seam ([`Transport`]), and the two controllers that drive presentation
//! state: [`SessionManager`] and [`CommentFeed`]. It has no opinion about how
//! state is rendered; callers plug in a [`Store`] (a Leptos signal in the
//! browser, an `Rc<RefCell<_>>` on the command line).
//!
//! ERROR HANDLING
//! ==============
//! Every network operation resolves to a `Result`. Failures fall into two
//! classes, rejected (non-2xx) and unreachable (transport), plus local
//! validation errors that short-circuit before any request is issued. The
//! [`notice`] module turns each outcome into toast text.

pub mod api;
pub mod comments;
pub mod config;
pub mod http;
pub mod notice;
pub mod session;
pub mod store;
pub mod types;

#[cfg(test)]
mod mock;

pub use api::{ApiClient, ApiError};
pub use comments::{CommentFeed, FeedError, FeedState};
pub use config::ApiConfig;
pub use http::{Method, Request, Response, Transport, TransportError};
pub use notice::{Notice, Tone};
pub use session::{AuthForm, AuthState, Session, SessionError, SessionManager};
pub use store::Store;
pub use types::{Comment, CreatedAccount, User};
