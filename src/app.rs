//! Root application component with routing and context providers.

use std::rc::Rc;

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    NavigateOptions, StaticSegment,
    components::{Route, Router, Routes},
    hooks::{use_location, use_navigate},
};

use crate::components::nav_bar::NavBar;
use crate::net::session::{AuthSession, SessionContext};
use crate::pages::{
    admin::AdminPage, home::HomePage, leaderboard::LeaderboardPage, other::OtherPage,
    solve::SolvePage,
};
use crate::state::auth::AuthState;
use crate::util::return_path::is_login_success;

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
/// Owns the one [`AuthSession`] instance for the tab and sets up
/// client-side routing over the declared route table.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session: SessionContext = StoredValue::new_local(Rc::new(AuthSession::browser()));
    provide_context(session);

    let auth = RwSignal::new(AuthState::default());
    provide_context(auth);

    view! {
        <Stylesheet id="leptos" href="/pkg/arena-ui.css"/>
        <Title text="Arena"/>

        <Router>
            <SessionBootstrap/>
            <NavBar/>
            <main>
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("") view=HomePage/>
                    <Route path=StaticSegment("leaderboard") view=LeaderboardPage/>
                    <Route path=StaticSegment("solve") view=SolvePage/>
                    <Route path=StaticSegment("admin") view=AdminPage/>
                    <Route path=StaticSegment("other") view=OtherPage/>
                </Routes>
            </main>
        </Router>
    }
}

/// Initial auth load plus the login-completion return flow.
///
/// When the OAuth callback lands the user back on the app with
/// `login=success`, the pre-login cache is dropped and the persisted
/// return destination is replayed as an in-app navigation.
#[component]
fn SessionBootstrap() -> impl IntoView {
    let session = expect_context::<SessionContext>();
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();
    let location = use_location();

    let started = RwSignal::new(false);
    Effect::new(move || {
        if started.get() {
            return;
        }
        started.set(true);
        let session = session.get_value();
        let navigate = navigate.clone();
        let search = location.search.get_untracked();
        auth.set(AuthState { user: None, loading: true });
        leptos::task::spawn_local(async move {
            if is_login_success(&search) {
                session.clear_cache();
                if let Some(target) = session.take_return_path() {
                    navigate(&target, NavigateOptions::default());
                }
            }
            let status = session.check_auth(false).await;
            auth.set(AuthState { user: status.user, loading: false });
        });
    });
}
