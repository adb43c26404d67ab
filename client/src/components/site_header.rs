//! Page title and links to the API's own resources.

#[cfg(test)]
#[path = "site_header_test.rs"]
mod site_header_test;

use feed::ApiConfig;
use leptos::prelude::*;

pub const SITE_TITLE: &str = "Go API Demo";
const SOURCE_URL: &str = "https://github.com/HWCronicus/go-api-demo";

/// Header links: the API host's resources when configured, then the source
/// repository.
fn header_links(config: &ApiConfig) -> Vec<(&'static str, String)> {
    [("Resume", "/resume"), ("Swagger", "/swagger")]
        .into_iter()
        .filter_map(|(label, path)| config.endpoint(path).map(|url| (label, url)))
        .chain([("GitHub", SOURCE_URL.to_owned())])
        .collect()
}

#[component]
pub fn SiteHeader() -> impl IntoView {
    let config = expect_context::<ApiConfig>();
    let links = header_links(&config);

    view! {
        <header class="site-header">
            <h1 class="site-header__title">{SITE_TITLE}</h1>
            <nav class="site-header__links">
                {links
                    .into_iter()
                    .map(|(label, url)| {
                        view! {
                            <a class="btn btn--outline" href=url target="_blank" rel="noopener noreferrer">
                                {label}
                                <span aria-hidden="true">" ↗"</span>
                            </a>
                        }
                    })
                    .collect_view()}
            </nav>
        </header>
    }
}
