//! Host page reader
//!
//! The builder needs three things from the page embedding the form: its
//! title, its URL, and whether it already renders an `h1`. In a browser these
//! come from `document`; everywhere else from [`StaticHostPage`].

use url::Url;

use crate::options::DEFAULT_SOURCE;

/// Read-only view of the page hosting the embed
pub trait HostPage {
    /// Document title
    fn title(&self) -> String;

    /// Full URL of the current page
    fn url(&self) -> String;

    /// Whether the page already contains at least one top-level heading
    fn has_heading(&self) -> bool;

    /// Hostname of the current page, without port
    fn host(&self) -> String {
        Url::parse(&self.url())
            .ok()
            .and_then(|url| url.host_str().map(str::to_string))
            .unwrap_or_else(|| DEFAULT_SOURCE.to_string())
    }

    /// Value of a query parameter in the current page URL
    fn query_param(&self, key: &str) -> Option<String> {
        let url = Url::parse(&self.url()).ok()?;
        let value = url
            .query_pairs()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.into_owned());
        value
    }
}

/// Host page described by plain values
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaticHostPage {
    pub title: String,
    pub url: String,
    pub heading_count: usize,
}

impl Default for StaticHostPage {
    fn default() -> Self {
        Self {
            title: String::new(),
            url: "http://localhost/".to_string(),
            heading_count: 0,
        }
    }
}

impl StaticHostPage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }

    pub fn with_headings(mut self, count: usize) -> Self {
        self.heading_count = count;
        self
    }
}

impl HostPage for StaticHostPage {
    fn title(&self) -> String {
        self.title.clone()
    }

    fn url(&self) -> String {
        self.url.clone()
    }

    fn has_heading(&self) -> bool {
        self.heading_count > 0
    }
}
