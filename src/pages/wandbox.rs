//! Compiler screen: loads the compiler list, then composes the regions.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the only route. It fetches the catalog once per mount, renders
//! nothing until it arrives, and then hands the same catalog instance to the
//! sidebar, editor, and command bar. Load failures go to the error channel;
//! the page itself keeps rendering nothing.

#[cfg(test)]
#[path = "wandbox_test.rs"]
mod wandbox_test;

use leptos::prelude::*;
use leptos::tachys::view::any_view::{AnyView, IntoAny};

use crate::components::command::Command;
use crate::components::editor::Editor;
use crate::components::header::Header;
use crate::components::result::ResultPanel;
use crate::components::sidebar::Sidebar;
use crate::config::ClientConfig;
use crate::net::catalog::CatalogError;
use crate::state::catalog::CompilerCatalog;
use crate::state::error::{ErrorChannel, use_error_channel};
use crate::state::readiness::Readiness;
use crate::state::selection::SelectionState;
use crate::util::mount::{MountTask, Settled};

/// Screen regions in render order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RegionKind {
    Header,
    Sidebar,
    Editor,
    Command,
    Result,
}

/// One composed region and the data it is handed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Region {
    Header,
    Sidebar(CompilerCatalog),
    Editor(CompilerCatalog),
    Command(CompilerCatalog),
    Result,
}

impl Region {
    pub fn kind(&self) -> RegionKind {
        match self {
            Self::Header => RegionKind::Header,
            Self::Sidebar(_) => RegionKind::Sidebar,
            Self::Editor(_) => RegionKind::Editor,
            Self::Command(_) => RegionKind::Command,
            Self::Result => RegionKind::Result,
        }
    }

    pub fn catalog(&self) -> Option<&CompilerCatalog> {
        match self {
            Self::Sidebar(catalog) | Self::Editor(catalog) | Self::Command(catalog) => Some(catalog),
            Self::Header | Self::Result => None,
        }
    }
}

/// Lay out the screen for a loaded catalog. Order is fixed; the three
/// catalog consumers share one instance.
pub fn compose(catalog: &CompilerCatalog) -> [Region; 5] {
    [
        Region::Header,
        Region::Sidebar(catalog.clone()),
        Region::Editor(catalog.clone()),
        Region::Command(catalog.clone()),
        Region::Result,
    ]
}

fn render_region(region: Region) -> AnyView {
    match region {
        Region::Header => view! { <Header/> }.into_any(),
        Region::Sidebar(catalog) => view! { <Sidebar catalog=catalog/> }.into_any(),
        Region::Editor(catalog) => view! { <Editor catalog=catalog/> }.into_any(),
        Region::Command(catalog) => view! { <Command catalog=catalog/> }.into_any(),
        Region::Result => view! { <ResultPanel/> }.into_any(),
    }
}

/// Start the catalog fetch for this mount and expose the gate state.
///
/// The fetch is spawned once, in the browser only. Failures are reported to
/// `errors` and leave the gate `Loading`. Results that arrive after the page
/// unmounts are dropped without touching either signal.
pub fn use_compiler_catalog(endpoint: String, errors: ErrorChannel) -> ReadSignal<Readiness> {
    let (readiness, task) = mount_catalog_state();

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        load_catalog(task, crate::net::catalog::fetch_catalog(&endpoint), readiness, errors).await;
    });
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (task, endpoint, errors);
    }

    readiness.read_only()
}

/// Gate signal plus the mount's fetch task, cancelled when the owner cleans up.
fn mount_catalog_state() -> (RwSignal<Readiness>, MountTask) {
    let readiness = RwSignal::new(Readiness::Loading);
    let task = MountTask::new();

    let cleanup_task = task.clone();
    on_cleanup(move || cleanup_task.cancel());

    (readiness, task)
}

#[cfg_attr(not(feature = "hydrate"), allow(dead_code))]
/// Await `work` once for `task` and apply its result to the gate or the
/// error channel.
async fn load_catalog<F>(task: MountTask, work: F, readiness: RwSignal<Readiness>, errors: ErrorChannel) -> Settled
where
    F: Future<Output = Result<CompilerCatalog, CatalogError>>,
{
    let settled = task
        .run(
            work,
            |catalog: CompilerCatalog| {
                leptos::logging::log!("compiler list loaded: {} compilers", catalog.len());
                readiness.update(|r| {
                    r.observe(Some(catalog));
                });
            },
            |err: CatalogError| {
                leptos::logging::warn!("compiler list failed: {err}");
                errors.report(err.into());
            },
        )
        .await;
    if settled == Settled::Discarded {
        leptos::logging::log!("compiler list result dropped after unmount");
    }
    settled
}

/// Compiler screen. Renders nothing until the compiler list is loaded.
#[component]
pub fn WandboxPage() -> impl IntoView {
    let config = expect_context::<ClientConfig>();
    let errors = use_error_channel();
    let readiness = use_compiler_catalog(config.catalog_url, errors);

    move || render_gate(readiness.get())
}

/// Empty while loading, the composed screen once ready.
fn render_gate(readiness: Readiness) -> AnyView {
    match readiness {
        Readiness::Loading => ().into_any(),
        Readiness::Ready(catalog) => view! { <Screen catalog=catalog/> }.into_any(),
    }
}

/// Composed screen for a loaded catalog.
#[component]
fn Screen(catalog: CompilerCatalog) -> impl IntoView {
    provide_context(RwSignal::new(SelectionState::initial(&catalog)));
    let regions = compose(&catalog).into_iter().map(render_region).collect::<Vec<_>>();

    view! { <div class="wandbox">{regions}</div> }
}
