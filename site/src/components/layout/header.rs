use dioxus::prelude::*;

use crate::components::layout::FragmentPane;
use crate::fragment_client::{Fragment, FragmentStatus};

#[component]
pub fn Header(status: ReadOnlySignal<FragmentStatus>) -> Element {
    rsx! {
        header { id: "header-container",
            FragmentPane { fragment: Fragment::Header, status }
        }
    }
}
