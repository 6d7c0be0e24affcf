//! Embed options - the configuration bag passed by the host page
//!
//! Every field is optional. Absent strings fall back to the defaults below,
//! absent or `false` flags leave their parameter out of the URL.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Domain forms are served from when neither the form id nor the caller names one
pub const DEFAULT_DOMAIN: &str = "form.typeform.com";

/// `typeform-source` when the host page reports no host
pub const DEFAULT_SOURCE: &str = "localhost";

pub const DEFAULT_MEDIUM: &str = "embed-sdk";

pub const DEFAULT_MEDIUM_VERSION: &str = "next";

/// Options understood by the iframe source builder
///
/// Field names follow the SDK's camelCase option names when loaded from JSON.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EmbedOptions {
    pub source: Option<String>,
    pub medium: Option<String>,
    pub medium_version: Option<String>,
    pub hide_footer: Option<bool>,
    pub hide_headers: Option<bool>,
    pub opacity: Option<f64>,
    pub disable_tracking: Option<bool>,
    pub enable_sandbox: Option<bool>,
    pub hubspot: Option<bool>,
    pub auto_resize: Option<bool>,
    pub force_touch: Option<bool>,
    pub disable_scroll: Option<bool>,
    pub redirect_target: Option<String>,

    /// Only presence matters: the form then hands ending-button clicks to the host
    pub on_ending_button_click: Option<bool>,

    /// Pre-filled hidden fields, sent in the URL fragment
    pub hidden: IndexMap<String, String>,

    /// Extra query parameters, e.g. UTM values
    pub tracking: IndexMap<String, String>,

    /// Host page query keys forwarded to the form
    pub transitive_search_params: Vec<String>,

    /// Custom domain serving the form
    pub domain: Option<String>,
}

impl EmbedOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load options from a JSON object, unknown keys are ignored
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn source(&self) -> Option<&str> {
        self.source.as_deref()
    }

    pub fn medium(&self) -> &str {
        self.medium.as_deref().unwrap_or(DEFAULT_MEDIUM)
    }

    pub fn medium_version(&self) -> &str {
        self.medium_version
            .as_deref()
            .unwrap_or(DEFAULT_MEDIUM_VERSION)
    }

    /// Sandbox mode implies tracking is off, whatever `disable_tracking` says
    pub fn tracking_disabled(&self) -> bool {
        is_set(self.disable_tracking) || is_set(self.enable_sandbox)
    }
}

/// `Some(true)` is the only value that turns a flag on
pub(crate) fn is_set(flag: Option<bool>) -> bool {
    flag == Some(true)
}
