//! REST endpoints the UI reads from.

/// Current user profile; any non-success status means nobody is signed in.
pub const SESSION_PATH: &str = "/api/accounts/me/";
/// Sublet listing collection.
pub const PROPERTIES_PATH: &str = "/api/sublet/properties/";

/// Absolute endpoint URLs for one API origin.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Endpoints {
    base_url: String,
}

impl Endpoints {
    /// Endpoints served from `base_url`; a trailing slash is ignored.
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        let trimmed = base_url.trim_end_matches('/').len();
        base_url.truncate(trimmed);
        Self { base_url }
    }

    /// Origin the endpoints resolve against.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// URL for an API path.
    #[must_use]
    pub fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// Current-user endpoint.
    #[must_use]
    pub fn session(&self) -> String {
        self.url(SESSION_PATH)
    }

    /// Listing endpoint.
    #[must_use]
    pub fn properties(&self) -> String {
        self.url(PROPERTIES_PATH)
    }
}
