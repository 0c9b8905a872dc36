//! Login page: username/password/faculty form against `/auth/login`.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::net::api;
use crate::net::http::ApiError;
use crate::net::types::LoginRequest;
use crate::state::session::{self, SessionState};

/// Map a login failure to the message shown under the form.
fn login_error_message(err: &ApiError) -> String {
    match err.status() {
        Some(401) => "Invalid username or password. Please try again.".to_owned(),
        Some(404) => "User not found. Please check your username and faculty.".to_owned(),
        _ => err.message(),
    }
}

/// Login page.
#[component]
pub fn LoginPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let navigate = use_navigate();

    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let tenant = RwSignal::new("engineering".to_owned());
    let error = RwSignal::new(None::<String>);
    let pending = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if pending.get() {
            return;
        }
        error.set(None);
        pending.set(true);

        let request = LoginRequest {
            username: username.get(),
            password: password.get(),
            tenant_id: tenant.get(),
        };
        let tenant_id = request.tenant_id.clone();
        let navigate = navigate.clone();

        leptos::task::spawn_local(async move {
            match api::login(&request).await {
                Ok(response) => {
                    match session::login(session, &response.token, Some(&tenant_id)) {
                        Ok(()) => {
                            navigate("/", NavigateOptions { replace: true, ..Default::default() });
                        }
                        Err(_) => {
                            error.set(Some(
                                "Sign-in returned an unusable token. Please try again.".to_owned(),
                            ));
                        }
                    }
                }
                Err(err) => error.set(Some(login_error_message(&err))),
            }
            pending.set(false);
        });
    };

    view! {
        <div class="login-page">
            <div class="login-page__card">
                <h1>"Welcome back"</h1>
                <p class="login-page__subtitle">
                    "Sign in to manage bookings, exams, and campus activity."
                </p>

                <form class="login-page__form" on:submit=on_submit>
                    <label class="form-field">
                        <span class="form-field__label">"Username"</span>
                        <input
                            class="form-field__input"
                            autocomplete="username"
                            placeholder="Enter your username"
                            required
                            prop:value=username
                            on:input=move |ev| username.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="form-field">
                        <span class="form-field__label">"Password"</span>
                        <input
                            class="form-field__input"
                            type="password"
                            autocomplete="current-password"
                            placeholder="Enter your password"
                            required
                            prop:value=password
                            on:input=move |ev| password.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="form-field">
                        <span class="form-field__label">"Faculty / Department"</span>
                        <input
                            class="form-field__input"
                            placeholder="e.g. engineering"
                            required
                            prop:value=tenant
                            on:input=move |ev| tenant.set(event_target_value(&ev))
                        />
                    </label>

                    <Show when=move || error.get().is_some()>
                        <div class="login-page__error">{move || error.get()}</div>
                    </Show>

                    <button class="btn btn--primary" type="submit" disabled=move || pending.get()>
                        {move || if pending.get() { "Signing in\u{2026}" } else { "Sign in" }}
                    </button>
                </form>

                <a class="login-page__link" href="/register">
                    "New here? Create account"
                </a>
            </div>
        </div>
    }
}
