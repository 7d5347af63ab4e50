//! Client for the shared header/sidebar fragment files.

use thiserror::Error;

/// Named HTML fragments the page shell can inject.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fragment {
    Header,
    Sidebar,
}

impl Fragment {
    pub fn file_name(self) -> &'static str {
        match self {
            Fragment::Header => "header.html",
            Fragment::Sidebar => "sidebar.html",
        }
    }

    /// Placeholder text shown when the fragment cannot be loaded.
    pub fn unavailable_text(self) -> &'static str {
        match self {
            Fragment::Header => "Header unavailable",
            Fragment::Sidebar => "Sidebar unavailable",
        }
    }
}

/// Lifecycle of one injected fragment during the current page view.
#[derive(Debug, Clone, PartialEq)]
pub enum FragmentStatus {
    Loading,
    Loaded(String),
    Unavailable,
}

/// Fetches fragment markup from an explicit base path. One attempt per page
/// view: no retry, no cache, no timeout.
pub struct FragmentClient {
    base_path: String,
    client: reqwest::Client,
}

impl FragmentClient {
    pub fn new(base_path: impl Into<String>) -> Self {
        Self {
            base_path: base_path.into(),
            client: reqwest::Client::new(),
        }
    }

    pub fn base_path(&self) -> &str {
        &self.base_path
    }

    /// Fetch the markup for one fragment. A failure is terminal for this
    /// page view; the caller decides how it is presented.
    pub async fn fetch(&self, fragment: Fragment) -> Result<String, FragmentError> {
        let url = format!("{}/{}", self.base_path, fragment.file_name());
        let response = self.client.get(&url).send().await?;
        if !response.status().is_success() {
            return Err(FragmentError::Status(response.status().as_u16()));
        }
        Ok(response.text().await?)
    }
}

#[derive(Debug, Error)]
pub enum FragmentError {
    #[error("HTTP request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("fragment request returned status {0}")]
    Status(u16),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fragment_file_names() {
        assert_eq!(Fragment::Header.file_name(), "header.html");
        assert_eq!(Fragment::Sidebar.file_name(), "sidebar.html");
    }

    #[test]
    fn test_fallback_text_per_fragment() {
        assert_eq!(Fragment::Header.unavailable_text(), "Header unavailable");
        assert_eq!(Fragment::Sidebar.unavailable_text(), "Sidebar unavailable");
    }

    #[test]
    fn test_client_keeps_injected_base_path() {
        let client = FragmentClient::new("/assets/fragments");
        assert_eq!(client.base_path(), "/assets/fragments");
    }
}
