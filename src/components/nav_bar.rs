//! Top navigation bar with route links and session controls.
//!
//! The Admin link is only offered to allow-listed users; the route guard
//! still enforces the same check server-of-truth-side, so hiding the link
//! is presentation, not protection.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::net::session::SessionContext;
use crate::routes;
use crate::state::auth::AuthState;

#[component]
pub fn NavBar() -> impl IntoView {
    let session = expect_context::<SessionContext>();
    let auth = expect_context::<RwSignal<AuthState>>();

    let show_admin = move || auth.get().username().is_some_and(routes::is_elevated);
    let self_label = move || auth.get().display_name().map(str::to_owned).unwrap_or_default();

    let on_login = move |_| session.get_value().login();
    let on_logout = move |_| {
        let session = session.get_value();
        leptos::task::spawn_local(async move {
            let _ = session.logout().await;
            auth.update(|a| a.user = None);
        });
    };

    view! {
        <nav class="nav-bar">
            <A href=routes::HOME.path>"Home"</A>
            <A href=routes::LEADERBOARD.path>"Leaderboard"</A>
            <A href=routes::SOLVE.path>"Solve"</A>
            <Show when=show_admin>
                <A href=routes::ADMIN.path>"Admin"</A>
            </Show>
            <A href=routes::OTHER.path>"About"</A>

            <span class="nav-bar__spacer"></span>

            <Show
                when=move || auth.get().user.is_some()
                fallback=move || {
                    view! {
                        <button class="btn nav-bar__login" on:click=on_login>
                            "Sign in"
                        </button>
                    }
                }
            >
                <span class="nav-bar__self">{self_label}</span>
                <button class="btn nav-bar__logout" on:click=on_logout>
                    "Logout"
                </button>
            </Show>
        </nav>
    }
}
