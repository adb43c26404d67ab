//! Root application component and context providers.

use feed::{ApiClient, ApiConfig, AuthState, CommentFeed, FeedState, SessionManager};
use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};

use crate::net::config::api_config;
use crate::components::site_header::SITE_TITLE;
use crate::net::fetch::FetchTransport;
use crate::pages::home::HomePage;
use crate::state::signal_store::SignalStore;
use crate::state::toast::ToastState;
use crate::util::task::spawn;

/// Session Manager bound to the `AuthState` signal.
pub type Sessions = SessionManager<FetchTransport, SignalStore<AuthState>>;
/// Comment Feed Controller bound to the `FeedState` signal.
pub type Feed = CommentFeed<FetchTransport, SignalStore<FeedState>>;

/// Root application component.
///
/// Provides state signals, the API config, and both controllers as context,
/// then loads the feed once if an API URL is configured.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = api_config();
    let api = ApiClient::new(config.clone(), FetchTransport);

    let auth = RwSignal::new(AuthState::default());
    let feed_state = RwSignal::new(FeedState::default());
    let toasts = RwSignal::new(ToastState::default());

    let sessions: Sessions = SessionManager::new(api.clone(), SignalStore(auth));
    let feed: Feed = CommentFeed::new(api, SignalStore(feed_state));

    if config.is_enabled() {
        let feed = feed.clone();
        spawn(async move {
            let _ = feed.refresh().await;
        });
    } else {
        log::warn!("API_URL is not set; network actions are disabled");
    }

    provide_context::<ApiConfig>(config);
    provide_context(auth);
    provide_context(feed_state);
    provide_context(toasts);
    provide_context(StoredValue::new(sessions));
    provide_context(StoredValue::new(feed));

    view! {
        <Title text=SITE_TITLE/>
        <HomePage/>
    }
}
