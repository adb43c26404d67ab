//! Login/signup controls and the signed-in banner.
//!
//! SYSTEM CONTEXT
//! ==============
//! Anonymous visitors see Log In / Sign Up buttons that open one credential
//! form at a time. Once a session exists the controls are replaced by the
//! signed-in email and a Log Out button.

#[cfg(test)]
#[path = "auth_panel_test.rs"]
mod auth_panel_test;

use feed::{ApiConfig, AuthForm, AuthState, notice};
use leptos::prelude::*;

use crate::app::Sessions;
use crate::components::toaster::notify;
use crate::state::selectors;
use crate::state::toast::ToastState;
use crate::util::format::busy_label;
use crate::util::task::spawn;

/// Static copy for one credential form.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct FormCopy {
    title: &'static str,
    description: &'static str,
    submit: &'static str,
    submitting: &'static str,
    id_prefix: &'static str,
}

fn form_copy(form: AuthForm) -> Option<FormCopy> {
    match form {
        AuthForm::Hidden => None,
        AuthForm::Login => Some(FormCopy {
            title: "Log In",
            description: "Enter your credentials to log in",
            submit: "Log In",
            submitting: "Logging in...",
            id_prefix: "login",
        }),
        AuthForm::Signup => Some(FormCopy {
            title: "Sign Up",
            description: "Create a new account",
            submit: "Sign Up",
            submitting: "Creating account...",
            id_prefix: "signup",
        }),
    }
}

#[component]
pub fn AuthPanel() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let authenticated = selectors::authenticated(auth);
    let form = selectors::auth_form(auth);

    view! {
        {move || {
            if authenticated.get() {
                view! { <SignedIn/> }.into_any()
            } else {
                view! { <SignedOut/> }.into_any()
            }
        }}
        {move || {
            if authenticated.get() {
                return None;
            }
            form_copy(form.get()).map(|copy| view! { <CredentialsForm copy=copy/> })
        }}
    }
}

#[component]
fn SignedOut() -> impl IntoView {
    let sessions = expect_context::<StoredValue<Sessions>>();
    let enabled = expect_context::<ApiConfig>().is_enabled();

    view! {
        <div class="auth-actions">
            <button
                class="btn btn--primary btn--lg"
                disabled={!enabled}
                on:click=move |_| sessions.with_value(Sessions::show_login)
            >
                "Log In"
            </button>
            <button
                class="btn btn--outline btn--lg"
                disabled={!enabled}
                on:click=move |_| sessions.with_value(Sessions::show_signup)
            >
                "Sign Up"
            </button>
        </div>
    }
}

#[component]
fn SignedIn() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let sessions = expect_context::<StoredValue<Sessions>>();
    let toasts = expect_context::<RwSignal<ToastState>>();

    let email = move || auth.with(|a| a.session.email().unwrap_or_default().to_owned());
    let on_logout = move |_| {
        sessions.with_value(Sessions::logout);
        notify(toasts, notice::logout());
    };

    view! {
        <div class="auth-status">
            <p class="auth-status__line">
                "Logged in as "
                <span class="auth-status__email">{email}</span>
            </p>
            <button class="btn btn--outline" on:click=on_logout>
                "Log Out"
            </button>
        </div>
    }
}

#[component]
fn CredentialsForm(copy: FormCopy) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let sessions = expect_context::<StoredValue<Sessions>>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let loading = selectors::auth_loading(auth);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let (busy, form, email, password) =
            auth.with_untracked(|a| (a.loading, a.form, a.email.clone(), a.password.clone()));
        if busy {
            return;
        }
        let sessions = sessions.get_value();
        spawn(async move {
            let notice = if form == AuthForm::Signup {
                notice::signup(&sessions.signup(&email, &password).await)
            } else {
                notice::login(&sessions.login(&email, &password).await)
            };
            notify(toasts, notice);
        });
    };

    let email_id = format!("{}-email", copy.id_prefix);
    let password_id = format!("{}-password", copy.id_prefix);

    view! {
        <section class="card">
            <header class="card__header">
                <h2 class="card__title">{copy.title}</h2>
                <p class="card__description">{copy.description}</p>
            </header>
            <form class="card__content form" on:submit=on_submit>
                <div class="form__field">
                    <label for=email_id.clone()>"Email"</label>
                    <input
                        id=email_id
                        class="input"
                        type="email"
                        placeholder="person@example.com"
                        required=true
                        prop:value=move || auth.with(|a| a.email.clone())
                        on:input=move |ev| auth.update(|a| a.email = event_target_value(&ev))
                    />
                </div>
                <div class="form__field">
                    <label for=password_id.clone()>"Password"</label>
                    <input
                        id=password_id
                        class="input"
                        type="password"
                        placeholder="••••••••"
                        required=true
                        prop:value=move || auth.with(|a| a.password.clone())
                        on:input=move |ev| auth.update(|a| a.password = event_target_value(&ev))
                    />
                </div>
                <div class="form__actions">
                    <button class="btn btn--primary" type="submit" disabled=move || loading.get()>
                        {move || busy_label(loading.get(), copy.submit, copy.submitting)}
                    </button>
                    <button
                        class="btn btn--ghost"
                        type="button"
                        on:click=move |_| sessions.with_value(Sessions::hide_forms)
                    >
                        "Cancel"
                    </button>
                </div>
            </form>
        </section>
    }
}
