/// Site-wide settings injected at initialization, so nothing needs to infer
/// paths from the current URL at runtime.
#[derive(Debug, Clone, PartialEq)]
pub struct SiteConfig {
    /// Base path the shared HTML fragments are fetched from.
    pub fragment_base: String,
    /// Pause after header injection before the injected markup is queried.
    pub settle_delay_ms: u32,
    /// Contact e-mail shown (and copied) on the CV page.
    pub contact_email: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            fragment_base: "/assets/fragments".to_string(),
            settle_delay_ms: 100,
            contact_email: "elena@example.com".to_string(),
        }
    }
}
