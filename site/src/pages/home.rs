use dioxus::prelude::*;

use crate::components::layout::PageShell;
use crate::nav::Page;

#[component]
pub fn Home() -> Element {
    rsx! {
        PageShell { page: Page::Home,
            section { class: "hero",
                h1 { "Elena Martin" }
                p { class: "hero-tagline", "Frontend engineer & designer" }
                p {
                    "I build small, fast websites and care about the details. "
                    "Have a look at my "
                    a { href: "/cv.html", "CV" }
                    " or some "
                    a { href: "/portfolio.html", "recent work" }
                    "."
                }
            }
        }
    }
}
