//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::config::ClientConfig;
use crate::pages::wandbox::WandboxPage;
use crate::state::error::{provide_error_channel, use_error_channel};

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
/// Provides the error channel and client config, then routes to the compiler
/// screen.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    provide_error_channel();
    provide_context(ClientConfig::from_build_env());

    view! {
        <Stylesheet id="leptos" href="/pkg/canine.css"/>
        <Title text="Wandbox"/>

        <ErrorBanner/>
        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=WandboxPage/>
            </Routes>
        </Router>
    }
}

/// Dismissable banner for the current error channel value.
#[component]
fn ErrorBanner() -> impl IntoView {
    let errors = use_error_channel();

    view! {
        <Show when=move || errors.read().is_some()>
            <div class="error-banner" role="alert">
                <span class="error-banner__message">
                    {move || errors.read().map(|e| e.summary()).unwrap_or_default()}
                </span>
                <button class="btn error-banner__dismiss" on:click=move |_| errors.clear()>
                    "Dismiss"
                </button>
            </div>
        </Show>
    }
}
