//! Catch-all informational page.

use leptos::prelude::*;

#[component]
pub fn OtherPage() -> impl IntoView {
    view! {
        <div class="other-page">
            <h1>"About"</h1>
            <p>"Arena is a coding-challenge platform. Sign in to submit solutions."</p>
        </div>
    }
}
