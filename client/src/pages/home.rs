//! The single page: feed, auth controls, composer, and toasts.

use feed::{ApiConfig, AuthState, notice};
use leptos::prelude::*;

use crate::components::auth_panel::AuthPanel;
use crate::components::comment_composer::CommentComposer;
use crate::components::comment_list::CommentList;
use crate::components::site_header::SiteHeader;
use crate::components::toaster::Toaster;
use crate::state::selectors;

#[component]
pub fn HomePage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let enabled = expect_context::<ApiConfig>().is_enabled();
    let authenticated = selectors::authenticated(auth);
    let disabled_notice = notice::api_disabled();

    view! {
        <div class="page">
            <main class="page__container">
                <SiteHeader/>
                {(!enabled).then(|| {
                    view! {
                        <div class="banner banner--error" role="alert">
                            <strong>{disabled_notice.title}</strong>
                            " "
                            {disabled_notice.description}
                        </div>
                    }
                })}
                <CommentList/>
                <AuthPanel/>
                <Show when=move || authenticated.get()>
                    <CommentComposer/>
                </Show>
            </main>
            <Toaster/>
        </div>
    }
}
