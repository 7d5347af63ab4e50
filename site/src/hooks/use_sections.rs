use dioxus::prelude::*;

use crate::sections::SectionRegistry;

/// Handle to the expandable-section registry shared through context.
#[derive(Clone, Copy)]
pub struct SectionState {
    pub registry: Signal<SectionRegistry>,
}

impl SectionState {
    pub fn toggle(&mut self, id: &str) {
        self.registry.write().toggle(id);
    }

    pub fn toggle_all(&mut self) {
        self.registry.write().toggle_all();
    }
}

/// Section registry rebuilt from the page's section list on every load.
pub fn use_sections(ids: &[&str]) -> SectionState {
    let ids: Vec<String> = ids.iter().map(|id| id.to_string()).collect();
    let registry = use_signal(move || SectionRegistry::new(ids));
    SectionState { registry }
}
