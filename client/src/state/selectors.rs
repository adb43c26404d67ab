//! Memoized slices of the shared state signals.
//!
//! `AuthState` and `FeedState` also hold form input, so a view that reads the
//! whole signal re-renders on every keystroke. Views read these slices
//! instead; a memo only notifies when its own value changes.

#[cfg(test)]
#[path = "selectors_test.rs"]
mod selectors_test;

use feed::comments::can_delete;
use feed::{AuthForm, AuthState, Comment, FeedState};
use leptos::prelude::*;

pub fn comments(feed: RwSignal<FeedState>) -> Memo<Vec<Comment>> {
    Memo::new(move |_| feed.with(|s| s.comments.clone()))
}

pub fn posting(feed: RwSignal<FeedState>) -> Memo<bool> {
    Memo::new(move |_| feed.with(|s| s.posting))
}

pub fn is_deleting(feed: RwSignal<FeedState>, id: String) -> Memo<bool> {
    Memo::new(move |_| feed.with(|s| s.is_deleting(&id)))
}

pub fn authenticated(auth: RwSignal<AuthState>) -> Memo<bool> {
    Memo::new(move |_| auth.with(|a| a.session.is_authenticated()))
}

pub fn auth_form(auth: RwSignal<AuthState>) -> Memo<AuthForm> {
    Memo::new(move |_| auth.with(|a| a.form))
}

pub fn auth_loading(auth: RwSignal<AuthState>) -> Memo<bool> {
    Memo::new(move |_| auth.with(|a| a.loading))
}

/// Whether the signed-in user may delete `comment`.
pub fn owns(auth: RwSignal<AuthState>, comment: Comment) -> Memo<bool> {
    Memo::new(move |_| auth.with(|a| can_delete(&comment, &a.session)))
}
