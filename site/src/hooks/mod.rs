pub mod use_menu;
pub mod use_sections;
