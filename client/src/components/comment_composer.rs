//! Comment input for signed-in users.

use feed::{AuthState, FeedState, notice};
use leptos::prelude::*;

use crate::app::Feed;
use crate::components::toaster::notify;
use crate::state::selectors;
use crate::state::toast::ToastState;
use crate::util::format::busy_label;
use crate::util::task::spawn;

#[component]
pub fn CommentComposer() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let feed_state = expect_context::<RwSignal<FeedState>>();
    let feed = expect_context::<StoredValue<Feed>>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let posting = selectors::posting(feed_state);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if posting.get_untracked() {
            return;
        }
        let content = feed_state.with_untracked(|s| s.draft.clone());
        let session = auth.with_untracked(|a| a.session.clone());
        let feed = feed.get_value();
        spawn(async move {
            let result = feed.post_comment(&content, &session).await;
            notify(toasts, notice::post(&result));
        });
    };

    view! {
        <section class="card">
            <header class="card__header">
                <h2 class="card__title">"Post a Comment"</h2>
                <p class="card__description">"Share your thoughts"</p>
            </header>
            <form class="card__content form" on:submit=on_submit>
                <div class="form__field">
                    <label for="comment-content">"Your Comment"</label>
                    <input
                        id="comment-content"
                        class="input"
                        placeholder="Write something..."
                        required=true
                        prop:value=move || feed_state.with(|s| s.draft.clone())
                        on:input=move |ev| feed_state.update(|s| s.draft = event_target_value(&ev))
                    />
                </div>
                <button class="btn btn--primary" type="submit" disabled=move || posting.get()>
                    <span aria-hidden="true">"➤ "</span>
                    {move || busy_label(posting.get(), "Post Comment", "Posting...")}
                </button>
            </form>
        </section>
    }
}
