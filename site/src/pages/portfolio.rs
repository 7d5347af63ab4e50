use dioxus::prelude::*;

use crate::components::layout::PageShell;
use crate::nav::Page;

#[component]
pub fn Portfolio() -> Element {
    rsx! {
        PageShell { page: Page::Portfolio,
            section { class: "portfolio",
                h2 { "Selected work" }
                div { class: "portfolio-grid",
                    ProjectCard {
                        title: "Atlas booking portal",
                        summary: "Rebuilt a travel agency's booking flow; halved the time to first interaction.",
                    }
                    ProjectCard {
                        title: "Fern icon set",
                        summary: "A 300-glyph open-source icon set with a small build pipeline.",
                    }
                    ProjectCard {
                        title: "Kastanie customer portal",
                        summary: "Account management frontend serving ~40k monthly users.",
                    }
                }
            }
        }
    }
}

#[component]
fn ProjectCard(title: String, summary: String) -> Element {
    rsx! {
        div { class: "portfolio-card",
            h3 { "{title}" }
            p { "{summary}" }
        }
    }
}
