//! Top navigation bar with identity display and sign-out.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::session::{self, Role, SessionState};

/// App-wide navbar. Hidden entirely while the session is anonymous.
#[component]
pub fn Navbar() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let navigate = use_navigate();

    let on_logout = move |_| {
        session::logout(session);
        navigate("/login", NavigateOptions::default());
    };

    let username = move || {
        session
            .get()
            .username
            .unwrap_or_else(|| "Account".to_owned())
    };
    let role = move || session.get().role.map(Role::as_str);
    let tenant = move || session.get().tenant_id;

    view! {
        <Show when=move || session.get().is_authenticated()>
            <header class="navbar">
                <a class="navbar__brand" href="/">
                    "Campus"
                </a>
                <nav class="navbar__links">
                    <a href="/">"Dashboard"</a>
                    <a href="/exams">"Exams"</a>
                </nav>
                <div class="navbar__identity">
                    <span class="navbar__username">{username}</span>
                    <Show when=move || role().is_some()>
                        <span class="navbar__chip navbar__chip--role">{role}</span>
                    </Show>
                    <Show when=move || tenant().is_some()>
                        <span class="navbar__chip navbar__chip--tenant">{tenant}</span>
                    </Show>
                    <button class="navbar__logout" on:click=on_logout.clone()>
                        "Sign out"
                    </button>
                </div>
            </header>
        </Show>
    }
}
