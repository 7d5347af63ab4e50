pub mod fragment_pane;
pub mod header;
pub mod page_shell;
pub mod sidebar;

pub use fragment_pane::FragmentPane;
pub use header::Header;
pub use page_shell::PageShell;
pub use sidebar::Sidebar;
