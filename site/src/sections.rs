//! Expand/collapse state for the CV's expandable sections.
//!
//! The aggregate "all expanded" state is recomputed from the entries on
//! every query, never cached; the aggregate button label can therefore not
//! drift from the true state no matter how individual sections change.

/// One expandable section, identified by the id of its content element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub id: String,
    pub expanded: bool,
}

/// Keyed registry of section states, collapsed by default. Rebuilt on every
/// page load; nothing here persists.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SectionRegistry {
    sections: Vec<Section>,
}

impl SectionRegistry {
    pub fn new(ids: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            sections: ids
                .into_iter()
                .map(|id| Section {
                    id: id.into(),
                    expanded: false,
                })
                .collect(),
        }
    }

    pub fn is_expanded(&self, id: &str) -> bool {
        self.sections
            .iter()
            .any(|section| section.id == id && section.expanded)
    }

    /// Flip one section. Unknown ids are ignored: a header with no matching
    /// content element is a no-op click.
    pub fn toggle(&mut self, id: &str) {
        if let Some(section) = self.sections.iter_mut().find(|section| section.id == id) {
            section.expanded = !section.expanded;
        }
    }

    /// True when the expanded count equals the total count. An empty
    /// registry counts as collapsed, so the aggregate control always offers
    /// "Expand All" on pages without sections.
    pub fn all_expanded(&self) -> bool {
        !self.sections.is_empty() && self.sections.iter().all(|section| section.expanded)
    }

    /// Collapse everything when everything is expanded, otherwise expand
    /// everything. Decided from current state on each call, so expand wins
    /// over partially expanded registries.
    pub fn toggle_all(&mut self) {
        let expand = !self.all_expanded();
        for section in &mut self.sections {
            section.expanded = expand;
        }
    }

    /// Label for the aggregate control.
    pub fn aggregate_label(&self) -> &'static str {
        if self.all_expanded() {
            "Collapse All"
        } else {
            "Expand All"
        }
    }

    /// Style class for the aggregate control.
    pub fn aggregate_class(&self) -> &'static str {
        if self.all_expanded() {
            "expand-all-btn expanded"
        } else {
            "expand-all-btn collapsed"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registry() -> SectionRegistry {
        SectionRegistry::new(["experience", "education", "skills"])
    }

    #[test]
    fn test_sections_start_collapsed() {
        let reg = registry();
        assert!(!reg.all_expanded());
        assert!(!reg.is_expanded("experience"));
        assert_eq!(reg.aggregate_label(), "Expand All");
    }

    #[test]
    fn test_toggling_every_header_expands_all() {
        let mut reg = registry();
        for id in ["experience", "education", "skills"] {
            reg.toggle(id);
        }
        assert!(reg.all_expanded());
        assert_eq!(reg.aggregate_label(), "Collapse All");
        assert_eq!(reg.aggregate_class(), "expand-all-btn expanded");
    }

    #[test]
    fn test_toggle_all_twice_returns_to_collapsed() {
        let mut reg = registry();
        reg.toggle_all();
        assert!(reg.all_expanded());
        reg.toggle_all();
        assert!(!reg.all_expanded());
        assert!(!reg.is_expanded("skills"));
    }

    #[test]
    fn test_expand_wins_over_partial_state() {
        let mut reg = registry();
        reg.toggle("education");
        reg.toggle_all();
        assert!(reg.all_expanded());
    }

    #[test]
    fn test_individual_collapse_flips_aggregate() {
        let mut reg = registry();
        reg.toggle_all();
        reg.toggle("education");
        assert!(!reg.all_expanded());
        assert_eq!(reg.aggregate_label(), "Expand All");
    }

    #[test]
    fn test_unknown_id_is_a_no_op() {
        let mut reg = registry();
        reg.toggle("missing");
        assert_eq!(reg, registry());
    }

    #[test]
    fn test_empty_registry_is_deterministically_collapsed() {
        let mut reg = SectionRegistry::new(Vec::<String>::new());
        assert!(!reg.all_expanded());
        assert_eq!(reg.aggregate_label(), "Expand All");
        reg.toggle_all();
        assert!(!reg.all_expanded());
    }
}
