//! Comment Feed Controller: cached feed plus post/delete mutations.
//!
//! DESIGN
//! ======
//! The cached list is only ever replaced wholesale by a successful fetch, in
//! the order the server returned it. Mutations never touch the cache directly;
//! they trigger a single refresh once the server has accepted them. Concurrent
//! refreshes are not ordered: whichever resolves last wins.

#[cfg(test)]
#[path = "comments_test.rs"]
mod comments_test;

use std::collections::BTreeMap;

use crate::api::{ApiClient, ApiError};
use crate::http::Transport;
use crate::session::Session;
use crate::store::{PendingGuard, Store};
use crate::types::Comment;

/// Feed cache and composer state.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FeedState {
    /// Last successful fetch, server order.
    pub comments: Vec<Comment>,
    /// Composer input.
    pub draft: String,
    pub posting: bool,
    /// Comment ids with a delete in flight, and how many.
    pub deleting: BTreeMap<String, usize>,
}

impl FeedState {
    #[must_use]
    pub fn is_deleting(&self, id: &str) -> bool {
        self.deleting.contains_key(id)
    }
}

/// Whether the delete action should be offered for `comment`.
///
/// This is a presentation gate only; the server decides ownership.
#[must_use]
pub fn can_delete(comment: &Comment, session: &Session) -> bool {
    session.email() == Some(comment.email.as_str())
}

/// Why a post or delete did not reach the server or was refused.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum FeedError {
    #[error("comment is empty")]
    EmptyContent,
    #[error("not logged in")]
    NotAuthenticated,
    #[error("no user email in session")]
    MissingUserEmail,
    #[error(transparent)]
    Api(#[from] ApiError),
}

/// Drives [`FeedState`] against the comment endpoints.
#[derive(Clone, Debug)]
pub struct CommentFeed<T, S> {
    api: ApiClient<T>,
    store: S,
}

impl<T, S> CommentFeed<T, S>
where
    T: Transport,
    S: Store<FeedState>,
{
    pub fn new(api: ApiClient<T>, store: S) -> Self {
        Self { api, store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Replace the cache with the server's current list.
    ///
    /// Best effort: failures are logged and the previous cache is kept.
    ///
    /// # Errors
    ///
    /// Returns the [`ApiError`] for callers that want it; the browser ignores it.
    pub async fn refresh(&self) -> Result<usize, ApiError> {
        match self.api.list_comments().await {
            Ok(comments) => {
                let count = comments.len();
                self.store.write(|s| s.comments = comments);
                log::debug!("comment feed refreshed ({count} comments)");
                Ok(count)
            }
            Err(e) => {
                log::error!("failed to fetch comments: {e}");
                Err(e)
            }
        }
    }

    /// Post `content` as the session user, then refresh once.
    ///
    /// Blank content and anonymous sessions are refused before any request.
    /// On failure the draft is left as typed.
    ///
    /// # Errors
    ///
    /// [`FeedError::EmptyContent`], [`FeedError::NotAuthenticated`], or the
    /// request's [`ApiError`].
    pub async fn post_comment(&self, content: &str, session: &Session) -> Result<(), FeedError> {
        if content.trim().is_empty() {
            return Err(FeedError::EmptyContent);
        }
        let token = session.token().ok_or(FeedError::NotAuthenticated)?;

        self.store.write(|s| s.posting = true);
        let _pending = PendingGuard::new(&self.store, |s: &mut FeedState| s.posting = false);

        if let Err(e) = self.api.post_comment(token, content).await {
            log::error!("comment post error: {e}");
            return Err(e.into());
        }
        self.store.write(|s| s.draft.clear());
        let _ = self.refresh().await;
        Ok(())
    }

    /// Delete comment `id` as the session user, then refresh once.
    ///
    /// Only this id's pending count is touched, so other comments stay
    /// interactive while the request is in flight. Overlapping deletes of the
    /// same id keep it pending until the last one settles.
    ///
    /// # Errors
    ///
    /// [`FeedError::MissingUserEmail`], [`FeedError::NotAuthenticated`], or the
    /// request's [`ApiError`].
    pub async fn delete_comment(&self, id: &str, session: &Session) -> Result<(), FeedError> {
        let email = session.email().ok_or(FeedError::MissingUserEmail)?;
        let token = session.token().ok_or(FeedError::NotAuthenticated)?;

        let pending_id = id.to_owned();
        self.store.write(|s| *s.deleting.entry(pending_id.clone()).or_default() += 1);
        let _pending = PendingGuard::new(&self.store, move |s: &mut FeedState| {
            if let Some(count) = s.deleting.get_mut(&pending_id) {
                *count -= 1;
                if *count == 0 {
                    s.deleting.remove(&pending_id);
                }
            }
        });

        if let Err(e) = self.api.delete_comment(token, id, email).await {
            log::error!("comment delete error: {e}");
            return Err(e.into());
        }
        let _ = self.refresh().await;
        Ok(())
    }
}
