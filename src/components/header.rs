//! Page header.

use leptos::prelude::*;

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header class="header toolbar">
            <span class="header__title">"Wandbox"</span>
            <span class="toolbar__divider" aria-hidden="true"></span>
            <span class="header__subtitle">"Online compiler"</span>
            <span class="toolbar__spacer"></span>
            <a class="header__link" href="https://wandbox.org" target="_blank" rel="noopener">
                "wandbox.org"
            </a>
        </header>
    }
}
