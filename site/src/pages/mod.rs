pub mod cv;
pub mod home;
pub mod portfolio;

pub use cv::Cv;
pub use home::Home;
pub use portfolio::Portfolio;
