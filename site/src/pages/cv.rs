use dioxus::prelude::*;

use crate::components::cv::{CopyEmailButton, ExpandAllButton, ExpandableSection, PrintButton};
use crate::components::layout::PageShell;
use crate::config::SiteConfig;
use crate::hooks::use_sections::use_sections;
use crate::nav::Page;

/// Content element ids for the CV's expandable sections.
const SECTION_IDS: [&str; 4] = ["experience", "education", "skills", "projects"];

#[component]
pub fn Cv() -> Element {
    let sections = use_sections(&SECTION_IDS);
    use_context_provider(|| sections);
    let contact_email = SiteConfig::default().contact_email;

    rsx! {
        PageShell { page: Page::Cv,
            section { class: "cv",
                div { class: "cv-toolbar",
                    // the aggregate control only appears on the CV page
                    ExpandAllButton {}
                    PrintButton {}
                    CopyEmailButton { email: contact_email }
                }

                ExpandableSection { section_id: "experience", title: "Experience",
                    ul {
                        li {
                            strong { "Senior frontend engineer, Nordlicht Studio" }
                            " — 2021 to present. Design-system work and a pile of "
                            "small product sites."
                        }
                        li {
                            strong { "Frontend engineer, Kastanie GmbH" }
                            " — 2017 to 2021. Shipped the customer portal rewrite."
                        }
                    }
                }
                ExpandableSection { section_id: "education", title: "Education",
                    ul {
                        li { "MSc Human-Computer Interaction, 2017" }
                        li { "BSc Computer Science, 2015" }
                    }
                }
                ExpandableSection { section_id: "skills", title: "Skills",
                    ul {
                        li { "Rust, TypeScript, HTML/CSS" }
                        li { "Accessibility audits and performance budgets" }
                        li { "Design tooling: Figma, Penpot" }
                    }
                }
                ExpandableSection { section_id: "projects", title: "Projects",
                    ul {
                        li { "This site, obviously" }
                        li { "An open-source icon set used by a few thousand projects" }
                    }
                }
            }
        }
    }
}
