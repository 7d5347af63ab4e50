use dioxus::prelude::*;

use crate::hooks::use_sections::SectionState;

/// Aggregate control for every expandable section. Label and style class
/// are derived from the registry on every render, never from a remembered
/// previous value.
#[component]
pub fn ExpandAllButton() -> Element {
    let mut sections = use_context::<SectionState>();
    let (label, class) = {
        let registry = sections.registry.read();
        (registry.aggregate_label(), registry.aggregate_class())
    };

    rsx! {
        button {
            id: "expandAllBtn",
            class: "{class}",
            onclick: move |_| sections.toggle_all(),
            "{label}"
        }
    }
}
