//! Landing page with the sign-in entry point.

use leptos::prelude::*;

use crate::net::session::SessionContext;
use crate::state::auth::AuthState;

#[component]
pub fn HomePage() -> impl IntoView {
    let session = expect_context::<SessionContext>();
    let auth = expect_context::<RwSignal<AuthState>>();

    let on_login = move |_| session.get_value().login();
    let welcome = move || auth.get().display_name().map(str::to_owned).unwrap_or_default();

    view! {
        <div class="home-page">
            <h1>"Arena"</h1>
            <p>"Solve challenges, climb the leaderboard."</p>
            <Show
                when=move || auth.get().user.is_some()
                fallback=move || {
                    view! {
                        <button class="btn btn--primary" on:click=on_login>
                            "Sign in"
                        </button>
                    }
                }
            >
                <p class="home-page__welcome">"Welcome back, " {welcome} "."</p>
            </Show>
        </div>
    }
}
