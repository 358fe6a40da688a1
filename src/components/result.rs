//! Execution output panel.
//!
//! Output arrives from the run pipeline, which is not wired into this screen,
//! so the panel renders its empty state.

use leptos::prelude::*;

#[component]
pub fn ResultPanel() -> impl IntoView {
    view! {
        <section class="result">
            <h2 class="result__title">"Output"</h2>
            <pre class="result__output"></pre>
        </section>
    }
}
