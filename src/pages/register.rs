//! Registration page: account creation with client-side password checks.

#[cfg(test)]
#[path = "register_test.rs"]
mod register_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::net::api;
use crate::net::types::RegisterRequest;
use crate::state::session::{self, SessionState};

/// Client-side checks run before the request goes out.
fn validate_registration(password: &str, confirm: &str) -> Result<(), String> {
    if password != confirm {
        return Err("Passwords do not match".to_owned());
    }
    if password.len() < 4 {
        return Err("Password must be at least 4 characters".to_owned());
    }
    Ok(())
}

/// Registration page.
#[component]
pub fn RegisterPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let navigate = use_navigate();

    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let confirm = RwSignal::new(String::new());
    let tenant = RwSignal::new("engineering".to_owned());
    let role = RwSignal::new("STUDENT".to_owned());
    let error = RwSignal::new(None::<String>);
    let pending = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if pending.get() {
            return;
        }
        error.set(None);

        if let Err(message) = validate_registration(&password.get(), &confirm.get()) {
            error.set(Some(message));
            return;
        }
        pending.set(true);

        let request = RegisterRequest {
            username: username.get(),
            password: password.get(),
            tenant_id: tenant.get(),
            role: role.get(),
        };
        let tenant_id = request.tenant_id.clone();
        let navigate = navigate.clone();

        leptos::task::spawn_local(async move {
            match api::register(&request).await {
                Ok(response) => {
                    match session::login(session, &response.token, Some(&tenant_id)) {
                        Ok(()) => {
                            navigate("/", NavigateOptions { replace: true, ..Default::default() });
                        }
                        Err(_) => {
                            error.set(Some(
                                "Registration returned an unusable token. Please sign in."
                                    .to_owned(),
                            ));
                        }
                    }
                }
                Err(err) => error.set(Some(err.message())),
            }
            pending.set(false);
        });
    };

    view! {
        <div class="register-page">
            <div class="register-page__card">
                <h1>"Create account"</h1>
                <p class="register-page__subtitle">
                    "Join your faculty to book rooms, sit exams, and follow campus life."
                </p>

                <form class="register-page__form" on:submit=on_submit>
                    <label class="form-field">
                        <span class="form-field__label">"Username"</span>
                        <input
                            class="form-field__input"
                            autocomplete="username"
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
                            autocomplete="new-password"
                            required
                            prop:value=password
                            on:input=move |ev| password.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="form-field">
                        <span class="form-field__label">"Confirm password"</span>
                        <input
                            class="form-field__input"
                            type="password"
                            autocomplete="new-password"
                            required
                            prop:value=confirm
                            on:input=move |ev| confirm.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="form-field">
                        <span class="form-field__label">"Faculty / Department"</span>
                        <input
                            class="form-field__input"
                            required
                            prop:value=tenant
                            on:input=move |ev| tenant.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="form-field">
                        <span class="form-field__label">"Role"</span>
                        <select
                            class="form-field__input"
                            on:change=move |ev| role.set(event_target_value(&ev))
                        >
                            <option value="STUDENT" selected=true>"Student"</option>
                            <option value="TEACHER">"Teacher"</option>
                        </select>
                    </label>

                    <Show when=move || error.get().is_some()>
                        <div class="register-page__error">{move || error.get()}</div>
                    </Show>

                    <button class="btn btn--primary" type="submit" disabled=move || pending.get()>
                        {move || if pending.get() { "Creating\u{2026}" } else { "Create account" }}
                    </button>
                </form>

                <a class="register-page__link" href="/login">
                    "Already registered? Sign in"
                </a>
            </div>
        </div>
    }
}
