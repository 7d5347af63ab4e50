pub mod actions;
pub mod expand_all_button;
pub mod expandable_section;

pub use actions::{CopyEmailButton, PrintButton};
pub use expand_all_button::ExpandAllButton;
pub use expandable_section::ExpandableSection;
