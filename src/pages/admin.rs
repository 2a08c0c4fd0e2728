//! Admin page, reachable only by allow-listed users.

use leptos::prelude::*;

use crate::net::session::SessionContext;
use crate::net::types::User;
use crate::routes;
use crate::routes::guard::install_route_guard;

#[component]
pub fn AdminPage() -> impl IntoView {
    let allowed = RwSignal::new(false);
    install_route_guard(&routes::ADMIN, allowed);

    let session = expect_context::<SessionContext>();
    let profile = RwSignal::new(None::<User>);

    // Load the full profile once the guard has let us in.
    let fetched = RwSignal::new(false);
    Effect::new(move || {
        if !allowed.get() || fetched.get() {
            return;
        }
        fetched.set(true);
        let session = session.get_value();
        leptos::task::spawn_local(async move {
            profile.set(session.profile().await);
        });
    });

    view! {
        <Show
            when=move || allowed.get()
            fallback=|| view! { <p class="page-checking">"Checking access..."</p> }
        >
            <div class="admin-page">
                <h1>"Admin"</h1>
                <Show
                    when=move || profile.get().is_some()
                    fallback=|| view! { <p>"Loading profile..."</p> }
                >
                    <dl class="admin-page__profile">
                        <dt>"Username"</dt>
                        <dd>{move || profile.get().map(|u| u.username).unwrap_or_default()}</dd>
                        <dt>"Email"</dt>
                        <dd>
                            {move || {
                                profile.get().and_then(|u| u.email).unwrap_or_else(|| "(none)".to_owned())
                            }}
                        </dd>
                    </dl>
                </Show>
                <p class="admin-page__hint">
                    "Problem and leaderboard maintenance runs through the backend management commands."
                </p>
            </div>
        </Show>
    }
}
