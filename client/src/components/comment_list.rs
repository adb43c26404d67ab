//! Comment feed card with per-comment delete actions.
//!
//! The delete button is rendered only next to the signed-in user's own
//! comments, and each button tracks its own pending state.

use feed::{AuthState, Comment, FeedState, notice};
use leptos::prelude::*;

use crate::app::Feed;
use crate::components::toaster::notify;
use crate::state::selectors;
use crate::state::toast::ToastState;
use crate::util::format::comment_date;
use crate::util::task::spawn;

#[component]
pub fn CommentList() -> impl IntoView {
    let feed_state = expect_context::<RwSignal<FeedState>>();
    let auth = expect_context::<RwSignal<AuthState>>();
    let feed = expect_context::<StoredValue<Feed>>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let comments = selectors::comments(feed_state);

    let on_delete = Callback::new(move |id: String| {
        let session = auth.with_untracked(|a| a.session.clone());
        let feed = feed.get_value();
        spawn(async move {
            let result = feed.delete_comment(&id, &session).await;
            notify(toasts, notice::delete(&result));
        });
    });

    view! {
        <section class="card">
            <header class="card__header">
                <h2 class="card__title">"Comments"</h2>
                <p class="card__description">"Recent comments some users have posted"</p>
            </header>
            <div class="card__content comment-list">
                {move || {
                    let comments = comments.get();
                    if comments.is_empty() {
                        view! { <p class="comment-list__empty">"No comments yet"</p> }.into_any()
                    } else {
                        comments
                            .into_iter()
                            .map(|comment| view! { <CommentItem comment=comment on_delete=on_delete/> })
                            .collect_view()
                            .into_any()
                    }
                }}
            </div>
        </section>
    }
}

#[component]
fn CommentItem(comment: Comment, on_delete: Callback<String>) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let feed_state = expect_context::<RwSignal<FeedState>>();

    let date = comment_date(&comment.created_at);
    let id = StoredValue::new(comment.id.clone());
    let deleting = selectors::is_deleting(feed_state, comment.id.clone());
    let owned = selectors::owns(auth, comment.clone());

    view! {
        <article class="comment">
            <div class="comment__meta">
                <span class="comment__email">{comment.email}</span>
                <span class="comment__date">{date}</span>
            </div>
            <p class="comment__content">{comment.content}</p>
            {move || {
                owned
                    .get()
                    .then(|| {
                        view! {
                            <button
                                class="btn btn--ghost comment__delete"
                                disabled=move || deleting.get()
                                on:click=move |_| on_delete.run(id.get_value())
                            >
                                {move || if deleting.get() { "Deleting..." } else { "Delete" }}
                            </button>
                        }
                    })
            }}
        </article>
    }
}
