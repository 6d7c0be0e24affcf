//! Core type definitions for embedded forms
//!
//! Key design principles:
//! 1. A form reference is either an id or a full URL, decided once
//! 2. Embed types are a closed enum, not free-form strings
//! 3. Embed ids are opaque, an empty id is still an id

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// How the form is presented on the host page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EmbedType {
    Widget,
    Popup,
    Slider,
    Popover,
    SideTab,
    Live,
}

impl EmbedType {
    pub fn as_str(&self) -> &'static str {
        match self {
            EmbedType::Widget => "widget",
            EmbedType::Popup => "popup",
            EmbedType::Slider => "slider",
            EmbedType::Popover => "popover",
            EmbedType::SideTab => "side-tab",
            EmbedType::Live => "live",
        }
    }

    /// Value of the `typeform-embed` query parameter
    pub fn param_value(&self) -> String {
        format!("embed-{}", self.as_str())
    }
}

impl fmt::Display for EmbedType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownEmbedType(pub String);

impl fmt::Display for UnknownEmbedType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown embed type: {}", self.0)
    }
}

impl std::error::Error for UnknownEmbedType {}

impl FromStr for EmbedType {
    type Err = UnknownEmbedType;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "widget" => Ok(EmbedType::Widget),
            "popup" => Ok(EmbedType::Popup),
            "slider" => Ok(EmbedType::Slider),
            "popover" => Ok(EmbedType::Popover),
            "side-tab" => Ok(EmbedType::SideTab),
            "live" => Ok(EmbedType::Live),
            other => Err(UnknownEmbedType(other.to_string())),
        }
    }
}

/// Identifier of one embed instance on the host page
///
/// Messages coming back from the iframe carry this id so that several
/// embeds on one page don't see each other's events.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EmbedId(String);

impl EmbedId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Fresh random id for a new embed
    pub fn generate() -> Self {
        Self(Uuid::now_v7().simple().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for EmbedId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for EmbedId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for EmbedId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// Form to embed: a bare form id or a fully qualified URL
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormReference {
    Id(String),
    /// Kept verbatim, `url::Url` would normalize it
    Url(String),
}

impl FormReference {
    /// Classify a raw form identifier
    ///
    /// Anything that parses as an absolute URL with a host counts as a URL.
    /// `url` would accept `foo:bar` as well, which is a valid form id.
    pub fn parse(raw: &str) -> Self {
        match url::Url::parse(raw) {
            Ok(url) if url.has_host() => FormReference::Url(raw.to_string()),
            _ => FormReference::Id(raw.to_string()),
        }
    }

    pub fn is_url(&self) -> bool {
        matches!(self, FormReference::Url(_))
    }
}

impl From<&str> for FormReference {
    fn from(raw: &str) -> Self {
        Self::parse(raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embed_type_param_value() {
        assert_eq!(EmbedType::Widget.param_value(), "embed-widget");
        assert_eq!(EmbedType::SideTab.param_value(), "embed-side-tab");
    }

    #[test]
    fn test_embed_type_from_str() {
        assert_eq!("popover".parse::<EmbedType>(), Ok(EmbedType::Popover));
        assert_eq!("side-tab".parse::<EmbedType>(), Ok(EmbedType::SideTab));
        assert!("banner".parse::<EmbedType>().is_err());
    }

    #[test]
    fn test_embed_type_serde_names() {
        let json = serde_json::to_string(&EmbedType::SideTab).unwrap();
        assert_eq!(json, "\"side-tab\"");
    }

    #[test]
    fn test_generated_embed_ids_differ() {
        let a = EmbedId::generate();
        let b = EmbedId::generate();
        assert!(!a.is_empty());
        assert_ne!(a, b);
    }

    #[test]
    fn test_form_reference_parse() {
        assert_eq!(
            FormReference::parse("some-id"),
            FormReference::Id("some-id".to_string())
        );
        assert!(FormReference::parse("https://custom.example.com/form-id").is_url());
        assert!(!FormReference::parse("abc:def").is_url());
    }
}
