use dioxus::prelude::*;

use crate::fragment_client::{Fragment, FragmentStatus};

/// Renders one injected fragment. Loaded markup replaces the pane's content
/// wholesale; a failed load shows the fragment's fixed placeholder text.
#[component]
pub fn FragmentPane(fragment: Fragment, status: ReadOnlySignal<FragmentStatus>) -> Element {
    match status() {
        FragmentStatus::Loading => rsx! {
            div { class: "fragment-loading" }
        },
        FragmentStatus::Loaded(html) => rsx! {
            div { class: "fragment", dangerous_inner_html: html }
        },
        FragmentStatus::Unavailable => rsx! {
            p { class: "fragment-fallback", {fragment.unavailable_text()} }
        },
    }
}
