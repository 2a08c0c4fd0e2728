//! Solve page: submit solution text for processing and scoring.
//!
//! SYSTEM CONTEXT
//! ==============
//! This route requires a login. The guard redirects anonymous visitors
//! into the OAuth flow and brings them back here afterwards; a session
//! that expires between page load and submission surfaces as a 401 on
//! the submit call, which re-enters the same flow.

use leptos::prelude::*;

use crate::net::api;
use crate::net::session::{ApiError, SessionContext};
use crate::routes;
use crate::routes::guard::install_route_guard;

#[component]
pub fn SolvePage() -> impl IntoView {
    let allowed = RwSignal::new(false);
    install_route_guard(&routes::SOLVE, allowed);

    let session = expect_context::<SessionContext>();
    let text = RwSignal::new(String::new());
    let output = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let submission = text.get();
        if submission.trim().is_empty() {
            output.set(Some("Enter a solution first.".to_owned()));
            return;
        }
        busy.set(true);
        let session = session.get_value();
        leptos::task::spawn_local(async move {
            match api::submit_text(&session, &submission).await {
                Ok(resp) => output.set(Some(resp.processed_text)),
                // Login redirect is already in flight; leave the page as is.
                Err(ApiError::Unauthorized) => {}
                Err(err) => output.set(Some(format!("Submission failed: {err}"))),
            }
            busy.set(false);
        });
    };

    view! {
        <Show
            when=move || allowed.get()
            fallback=|| view! { <p class="page-checking">"Checking access..."</p> }
        >
            <div class="solve-page">
                <h1>"Solve"</h1>
                <form class="solve-page__form" on:submit=on_submit>
                    <textarea
                        class="solve-page__input"
                        placeholder="Paste your solution here"
                        prop:value=move || text.get()
                        on:input=move |ev| text.set(event_target_value(&ev))
                    ></textarea>
                    <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                        "Submit"
                    </button>
                </form>
                <Show when=move || output.get().is_some()>
                    <pre class="solve-page__output">{move || output.get().unwrap_or_default()}</pre>
                </Show>
            </div>
        </Show>
    }
}
