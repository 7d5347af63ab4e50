pub mod cv;
pub mod layout;
