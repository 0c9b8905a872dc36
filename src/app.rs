//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::navbar::Navbar;
use crate::components::toast_host::ToastHost;
use crate::pages::{
    dashboard::DashboardPage, exams::ExamsPage, login::LoginPage, register::RegisterPage,
};
use crate::state::session::{self, SessionPhase, SessionState};
use crate::state::toast::ToastState;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the session and toast contexts, restores the persisted session
/// once on startup, and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = RwSignal::new(SessionState::default());
    let toasts = RwSignal::new(ToastState::default());

    provide_context(session);
    provide_context(toasts);

    // Restore the persisted session exactly once, client-side.
    Effect::new(move || {
        if session.get_untracked().phase == SessionPhase::Uninitialized {
            session::initialize(session);
        }
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/campus-client.css"/>
        <Title text="Campus"/>

        <Router>
            <Navbar/>
            <main class="app-main">
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("login") view=LoginPage/>
                    <Route path=StaticSegment("register") view=RegisterPage/>
                    <Route path=StaticSegment("exams") view=ExamsPage/>
                    <Route path=StaticSegment("") view=DashboardPage/>
                </Routes>
            </main>
            <ToastHost/>
        </Router>
    }
}
