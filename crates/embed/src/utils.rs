//! Utility functions for URL assembly

use indexmap::IndexMap;
use url::form_urlencoded;

/// Serialize pairs as `application/x-www-form-urlencoded`
///
/// Space becomes `+`, everything outside `*-._` and alphanumerics is
/// percent-escaped. The form parses its parameters strictly, so this must
/// stay identical to what a browser's `URLSearchParams` produces.
pub fn encode_pairs(pairs: &IndexMap<String, String>) -> String {
    let mut serializer = form_urlencoded::Serializer::new(String::new());
    for (key, value) in pairs {
        serializer.append_pair(key, value);
    }
    serializer.finish()
}

/// Render a number the way the browser stringifies it
///
/// Integral values have no fractional part (`50`, not `50.0`). Magnitudes
/// from 1e21 up and below 1e-6 switch to exponent form (`1e+21`, `1e-7`).
pub fn format_number(value: f64) -> String {
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    // -0 prints as "-0" otherwise
    if value == 0.0 {
        return "0".to_string();
    }

    let magnitude = value.abs();
    if magnitude >= 1e21 || magnitude < 1e-6 {
        // `{:e}` has the same shortest digits, only the exponent sign differs
        let formatted = format!("{:e}", value);
        return match formatted.split_once('e') {
            Some((mantissa, exponent)) if !exponent.starts_with('-') => {
                format!("{}e+{}", mantissa, exponent)
            }
            _ => formatted,
        };
    }

    value.to_string()
}
