//! Leaderboard page listing entrants by rank.

use leptos::prelude::*;

use crate::net::api;
use crate::net::session::SessionContext;
use crate::net::types::LeaderboardRow;

#[component]
pub fn LeaderboardPage() -> impl IntoView {
    let session = expect_context::<SessionContext>();
    let rows = RwSignal::new(Vec::<LeaderboardRow>::new());
    let loading = RwSignal::new(true);
    let error = RwSignal::new(None::<String>);

    let started = RwSignal::new(false);
    Effect::new(move || {
        if started.get() {
            return;
        }
        started.set(true);
        let session = session.get_value();
        leptos::task::spawn_local(async move {
            match api::fetch_leaderboard(&session).await {
                Ok(fetched) => rows.set(fetched),
                Err(err) => error.set(Some(format!("Failed to load leaderboard: {err}"))),
            }
            loading.set(false);
        });
    });

    view! {
        <div class="leaderboard-page">
            <h1>"Leaderboard"</h1>
            <Show when=move || error.get().is_some()>
                <p class="leaderboard-page__error">{move || error.get().unwrap_or_default()}</p>
            </Show>
            <Show
                when=move || !loading.get()
                fallback=move || view! { <p>"Loading leaderboard..."</p> }
            >
                <table class="leaderboard-page__table">
                    <thead>
                        <tr>
                            <th>"Rank"</th>
                            <th>"Name"</th>
                            <th>"Score"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            rows.get()
                                .into_iter()
                                .map(|row| {
                                    view! {
                                        <tr>
                                            <td>{row.rank}</td>
                                            <td>
                                                {row.avatar.unwrap_or_default()} " " {row.name}
                                            </td>
                                            <td>{row.score}</td>
                                        </tr>
                                    }
                                })
                                .collect::<Vec<_>>()
                        }}
                    </tbody>
                </table>
            </Show>
        </div>
    }
}
