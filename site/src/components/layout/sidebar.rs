use dioxus::prelude::*;
use wasm_bindgen::JsCast;

use crate::components::layout::FragmentPane;
use crate::fragment_client::{Fragment, FragmentStatus};
use crate::hooks::use_menu::MenuHandle;

/// Sidebar pane plus the overlay menu triggers for narrow viewports.
///
/// Trigger clicks stop propagation so they cannot re-trigger the
/// outside-click close in the same dispatch.
#[component]
pub fn Sidebar(status: ReadOnlySignal<FragmentStatus>) -> Element {
    let mut menu = use_context::<MenuHandle>();
    let state = (menu.state)();
    let triggers = state.triggers();

    rsx! {
        if triggers.open_trigger {
            button {
                class: "menu-trigger menu-open-trigger",
                aria_label: "Open menu",
                onclick: move |evt| {
                    evt.stop_propagation();
                    menu.open();
                },
                "☰"
            }
        }
        if triggers.close_trigger {
            button {
                class: "menu-trigger menu-close-trigger",
                aria_label: "Close menu",
                onclick: move |evt| {
                    evt.stop_propagation();
                    menu.close();
                },
                "✕"
            }
        }
        if state.is_open() {
            // any click outside the sidebar while open closes it
            div {
                class: "sidebar-overlay",
                onclick: move |_| menu.close(),
            }
        }
        aside {
            id: "sidebar-container",
            class: if state.is_open() { "sidebar open" } else { "sidebar" },
            onclick: move |evt| {
                evt.stop_propagation();
                // navigating from a sidebar link closes the overlay menu
                if clicked_a_nav_link(&evt) {
                    menu.close();
                }
            },
            FragmentPane { fragment: Fragment::Sidebar, status }
        }
    }
}

fn clicked_a_nav_link(evt: &Event<MouseData>) -> bool {
    let data = evt.data();
    let Some(native) = data.downcast::<web_sys::MouseEvent>() else {
        return false;
    };
    let Some(target) = native
        .target()
        .and_then(|target| target.dyn_into::<web_sys::Element>().ok())
    else {
        return false;
    };
    matches!(target.closest("a"), Ok(Some(_)))
}
