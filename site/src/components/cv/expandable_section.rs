use dioxus::prelude::*;

use crate::hooks::use_sections::SectionState;

/// One collapsible CV section. Header and content render from the same
/// registry entry, so their active states flip in lockstep.
#[component]
pub fn ExpandableSection(section_id: String, title: String, children: Element) -> Element {
    let mut sections = use_context::<SectionState>();
    let expanded = sections.registry.read().is_expanded(&section_id);
    let toggle_id = section_id.clone();

    rsx! {
        div { class: "cv-section",
            div {
                class: if expanded { "expandable-header active" } else { "expandable-header" },
                "data-section": "{section_id}",
                onclick: move |_| sections.toggle(&toggle_id),
                h3 { class: "expandable-title", "{title}" }
                span { class: "expandable-toggle", "▼" }
            }
            div {
                id: "{section_id}",
                class: if expanded { "expandable-content active" } else { "expandable-content" },
                {children}
            }
        }
    }
}
