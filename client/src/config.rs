//! Backend location for REST calls.
//!
//! The host injects `API_BASE_URL` into the HTML shell as a meta tag and, for
//! server rendering, into the reactive context. Browser builds read the tag
//! once at startup.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8080";

/// `name` of the `<meta>` tag carrying the backend base URL.
pub const API_BASE_META_NAME: &str = "api-base-url";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiConfig {
    base_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_BASE_URL)
    }
}

impl ApiConfig {
    /// Trailing slashes are trimmed; blank input falls back to the default.
    #[must_use]
    pub fn new(base_url: &str) -> Self {
        let trimmed = base_url.trim().trim_end_matches('/');
        let base_url = if trimmed.is_empty() { DEFAULT_API_BASE_URL } else { trimmed };
        Self { base_url: base_url.to_owned() }
    }

    /// Read the base URL from the shell's meta tag.
    #[must_use]
    pub fn from_document() -> Self {
        #[cfg(feature = "hydrate")]
        {
            let selector = format!("meta[name=\"{API_BASE_META_NAME}\"]");
            web_sys::window()
                .and_then(|w| w.document())
                .and_then(|doc| doc.query_selector(&selector).ok().flatten())
                .and_then(|el| el.get_attribute("content"))
                .map_or_else(Self::default, |content| Self::new(&content))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Self::default()
        }
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Absolute URL for an API path such as `/events`.
    #[must_use]
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}
