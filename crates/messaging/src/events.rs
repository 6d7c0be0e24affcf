//! Form events - the names the form iframe posts

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Events the form iframe can emit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FormEventKind {
    FormReady,
    FormStarted,
    FormScreenChanged,
    FormHeightChanged,
    FormSubmit,
    WelcomeScreenHidden,
    FormTheme,
    ThankYouScreenButtonClick,
}

impl FormEventKind {
    pub const ALL: [FormEventKind; 8] = [
        FormEventKind::FormReady,
        FormEventKind::FormStarted,
        FormEventKind::FormScreenChanged,
        FormEventKind::FormHeightChanged,
        FormEventKind::FormSubmit,
        FormEventKind::WelcomeScreenHidden,
        FormEventKind::FormTheme,
        FormEventKind::ThankYouScreenButtonClick,
    ];

    /// Wire name, the `type` field of the message
    pub fn as_str(&self) -> &'static str {
        match self {
            FormEventKind::FormReady => "form-ready",
            FormEventKind::FormStarted => "form-started",
            FormEventKind::FormScreenChanged => "form-screen-changed",
            FormEventKind::FormHeightChanged => "form-height-changed",
            FormEventKind::FormSubmit => "form-submit",
            FormEventKind::WelcomeScreenHidden => "welcome-screen-hidden",
            FormEventKind::FormTheme => "form-theme",
            FormEventKind::ThankYouScreenButtonClick => "thank-you-screen-button-click",
        }
    }
}

impl fmt::Display for FormEventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownEventKind(pub String);

impl fmt::Display for UnknownEventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown form event: {}", self.0)
    }
}

impl std::error::Error for UnknownEventKind {}

impl FromStr for FormEventKind {
    type Err = UnknownEventKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| UnknownEventKind(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_round_trip() {
        for kind in FormEventKind::ALL {
            assert_eq!(kind.as_str().parse::<FormEventKind>(), Ok(kind));
        }
        assert_eq!(
            "form-closed".parse::<FormEventKind>(),
            Err(UnknownEventKind("form-closed".to_string()))
        );
    }

    #[test]
    fn test_serde_uses_wire_names() {
        let json = serde_json::to_string(&FormEventKind::ThankYouScreenButtonClick).unwrap();
        assert_eq!(json, "\"thank-you-screen-button-click\"");
    }
}
