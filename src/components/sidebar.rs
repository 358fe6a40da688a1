//! Toolchain sidebar: language, compiler, and switch selection.
//!
//! SYSTEM CONTEXT
//! ==============
//! Reads the shared catalog and writes the selection signal that the editor
//! and command bar render from. Lists shown here are derived views; the
//! catalog itself is never modified.
//!
//! Each `<option>` carries its own `selected` binding. Element props are
//! applied before children mount, so a `prop:value` on the `<select>` alone
//! lands on an empty list and the first option shows instead.

#[cfg(test)]
#[path = "sidebar_test.rs"]
mod sidebar_test;

use leptos::prelude::*;
use leptos::tachys::view::any_view::{AnyView, IntoAny};

use crate::net::types::{SelectSwitch, SingleSwitch, Switch};
use crate::state::catalog::CompilerCatalog;
use crate::state::selection::SelectionState;

#[component]
pub fn Sidebar(catalog: CompilerCatalog) -> impl IntoView {
    let selection = expect_context::<RwSignal<SelectionState>>();

    let language_options = catalog
        .languages()
        .into_iter()
        .map(|language| {
            let label = language.clone();
            let current = language.clone();
            view! {
                <option
                    value=language
                    selected=move || selection.with(|s| s.language.as_deref() == Some(current.as_str()))
                >
                    {label}
                </option>
            }
        })
        .collect::<Vec<_>>();

    let language_catalog = catalog.clone();
    let on_language = move |ev: leptos::ev::Event| {
        let language = event_target_value(&ev);
        selection.update(|s| s.select_language(&language_catalog, &language));
    };

    let compiler_catalog = catalog.clone();
    let on_compiler = move |ev: leptos::ev::Event| {
        let name = event_target_value(&ev);
        selection.update(|s| s.select_compiler(&compiler_catalog, &name));
    };

    let options_catalog = catalog.clone();
    let compiler_options = move || {
        let language = selection.with(|s| s.language.clone()).unwrap_or_default();
        options_catalog
            .compilers_for(&language)
            .map(|c| {
                let name = c.name.clone();
                let current = c.name.clone();
                let label = c.label().to_owned();
                view! {
                    <option
                        value=name
                        selected=move || selection.with(|s| s.compiler.as_deref() == Some(current.as_str()))
                    >
                        {label}
                    </option>
                }
            })
            .collect::<Vec<_>>()
    };

    let switches = move || {
        selection
            .with(|s| s.compiler_info(&catalog).map(|info| info.switches.clone()))
            .unwrap_or_default()
            .into_iter()
            .map(|switch| render_switch(switch, selection))
            .collect::<Vec<_>>()
    };

    view! {
        <aside class="sidebar">
            <label class="sidebar__label">
                "Language"
                <select
                    class="sidebar__select"
                    prop:value=move || selection.with(|s| s.language.clone()).unwrap_or_default()
                    on:change=on_language
                >
                    {language_options}
                </select>
            </label>
            <label class="sidebar__label">
                "Compiler"
                <select
                    class="sidebar__select"
                    prop:value=move || selection.with(|s| s.compiler.clone()).unwrap_or_default()
                    on:change=on_compiler
                >
                    {compiler_options}
                </select>
            </label>
            <div class="sidebar__switches">{switches}</div>
        </aside>
    }
}

fn render_switch(switch: Switch, selection: RwSignal<SelectionState>) -> AnyView {
    match switch {
        Switch::Single(single) => render_single(single, selection),
        Switch::Select(select) => render_select(select, selection),
    }
}

fn render_single(single: SingleSwitch, selection: RwSignal<SelectionState>) -> AnyView {
    let label = if single.display_name.is_empty() { single.name.clone() } else { single.display_name.clone() };
    let name = single.name;
    let checked_name = name.clone();

    view! {
        <label class="sidebar__switch" title=single.display_flags>
            <input
                type="checkbox"
                prop:checked=move || selection.with(|s| s.flags.get(&checked_name).copied().unwrap_or(false))
                on:change=move |ev| {
                    let enabled = event_target_checked(&ev);
                    selection.update(|s| s.set_flag(&name, enabled));
                }
            />
            {label}
        </label>
    }
    .into_any()
}

fn render_select(select: SelectSwitch, selection: RwSignal<SelectionState>) -> AnyView {
    let key = select.key().to_owned();
    let value_key = key.clone();
    let options = select
        .options
        .into_iter()
        .map(|option| {
            let label = if option.display_name.is_empty() { option.name.clone() } else { option.display_name };
            let group = key.clone();
            let current = option.name.clone();
            view! {
                <option
                    value=option.name
                    selected=move || selection.with(|s| s.choices.get(&group) == Some(&current))
                >
                    {label}
                </option>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <select
            class="sidebar__select sidebar__switch-select"
            prop:value=move || selection.with(|s| s.choices.get(&value_key).cloned()).unwrap_or_default()
            on:change=move |ev| {
                let chosen = event_target_value(&ev);
                selection.update(|s| s.set_choice(&key, &chosen));
            }
        >
            {options}
        </select>
    }
    .into_any()
}
