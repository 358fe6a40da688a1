//! Source editor for the selected compiler.
//!
//! DESIGN
//! ======
//! A plain textarea bound to the shared selection so the command bar and a
//! future run action see the same source text.

use leptos::prelude::*;

use crate::state::catalog::CompilerCatalog;
use crate::state::selection::SelectionState;

#[component]
pub fn Editor(catalog: CompilerCatalog) -> impl IntoView {
    let selection = expect_context::<RwSignal<SelectionState>>();

    let title = move || {
        selection.with(|s| match s.compiler_info(&catalog) {
            Some(info) if info.language.is_empty() => info.label().to_owned(),
            Some(info) => format!("{} ({})", info.label(), info.language),
            None => "No compiler selected".to_owned(),
        })
    };

    view! {
        <section class="editor">
            <div class="editor__title">{title}</div>
            <textarea
                class="editor__source"
                spellcheck="false"
                prop:value=move || selection.with(|s| s.source.clone())
                on:input=move |ev| {
                    let text = event_target_value(&ev);
                    selection.update(|s| s.source = text);
                }
            ></textarea>
        </section>
    }
}
