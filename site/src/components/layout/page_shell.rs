use dioxus::logger::tracing;
use dioxus::prelude::*;
use gloo_timers::future::TimeoutFuture;

use crate::components::layout::{Header, Sidebar};
use crate::config::SiteConfig;
use crate::fragment_client::{Fragment, FragmentClient, FragmentStatus};
use crate::hooks::use_menu::use_menu;
use crate::nav::{apply_active_link, page_for_path, Page};

/// Shell every page renders into.
///
/// Loads the shared fragments in a fixed sequence: header first, then a
/// short settle delay before the injected markup is queried for nav-link
/// marking and the menu picks up the viewport, then the sidebar. Each step
/// logs its own failure and the rest still run, so the page degrades
/// fragment-by-fragment instead of atomically.
#[component]
pub fn PageShell(page: Option<Page>, children: Element) -> Element {
    let config = use_context_provider(SiteConfig::default);
    let menu = use_menu();
    use_context_provider(|| menu);

    let mut header = use_signal(|| FragmentStatus::Loading);
    let mut sidebar = use_signal(|| FragmentStatus::Loading);

    let settle_ms = config.settle_delay_ms;
    let fragment_base = config.fragment_base.clone();
    use_future(move || {
        let fragment_base = fragment_base.clone();
        let mut menu = menu;
        async move {
            let client = FragmentClient::new(fragment_base);

            match client.fetch(Fragment::Header).await {
                Ok(html) => header.set(FragmentStatus::Loaded(html)),
                Err(err) => {
                    tracing::warn!("failed to load header fragment: {err}");
                    header.set(FragmentStatus::Unavailable);
                }
            }

            // let the injected markup settle before querying it
            TimeoutFuture::new(settle_ms).await;

            // pages without a declared nav identity fall back to the URL
            let resolved = page.or_else(|| {
                web_sys::window()
                    .and_then(|window| window.location().pathname().ok())
                    .and_then(|path| page_for_path(&path))
            });
            if let Some(document) = web_sys::window().and_then(|window| window.document()) {
                apply_active_link(&document, resolved);
            }
            menu.resize_to_viewport();

            match client.fetch(Fragment::Sidebar).await {
                Ok(html) => sidebar.set(FragmentStatus::Loaded(html)),
                Err(err) => {
                    tracing::warn!("failed to load sidebar fragment: {err}");
                    sidebar.set(FragmentStatus::Unavailable);
                }
            }
        }
    });

    rsx! {
        div { class: "page-container",
            Header { status: header }
            div { class: "page-body",
                Sidebar { status: sidebar }
                main { class: "page-content", {children} }
            }
        }
    }
}
