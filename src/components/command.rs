//! Command bar showing the compile command for the current selection.

use leptos::prelude::*;

use crate::state::catalog::CompilerCatalog;
use crate::state::selection::{SelectionState, command_line};

#[component]
pub fn Command(catalog: CompilerCatalog) -> impl IntoView {
    let selection = expect_context::<RwSignal<SelectionState>>();

    let preview = move || {
        selection.with(|s| s.compiler_info(&catalog).map(|info| command_line(info, s)).unwrap_or_default())
    };

    view! {
        <div class="command">
            <span class="command__prompt" aria-hidden="true">"$"</span>
            <code class="command__line">{preview}</code>
        </div>
    }
}
