//! Form input handling. Validation is deliberately absent: the service is the
//! authority on what it accepts, so malformed values are coerced and sent on.

use serde::{Serialize, Serializer};
use tracing::warn;

use crate::models::NewCredential;

/// Largest integer an `f64` represents exactly.
const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;

/// A numeric form field after coercion. May be NaN or infinite, in which case
/// it is serialized as JSON `null`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoercedNumber(pub f64);

impl CoercedNumber {
    #[must_use]
    pub fn is_malformed(self) -> bool {
        !self.0.is_finite()
    }

    #[must_use]
    pub const fn value(self) -> f64 {
        self.0
    }
}

impl Serialize for CoercedNumber {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let value = self.0;
        if !value.is_finite() {
            serializer.serialize_none()
        } else if value.fract() == 0.0 && value.abs() <= MAX_SAFE_INTEGER {
            serializer.serialize_i64(value as i64)
        } else {
            serializer.serialize_f64(value)
        }
    }
}

impl std::fmt::Display for CoercedNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.0.is_nan() {
            f.write_str("NaN")
        } else {
            write!(f, "{}", self.0)
        }
    }
}

/// Coerces free text the way a loosely typed form would: surrounding
/// whitespace is ignored, blank text is zero, decimal, exponent, `0x`/`0o`/`0b`
/// and `Infinity` literals are accepted, and anything else is NaN.
#[must_use]
pub fn coerce_number(raw: &str) -> CoercedNumber {
    let text = raw.trim();
    if text.is_empty() {
        return CoercedNumber(0.0);
    }
    CoercedNumber(parse_prefixed(text).unwrap_or_else(|| parse_decimal(text)))
}

fn parse_prefixed(text: &str) -> Option<f64> {
    let lower = text.get(..2)?.to_ascii_lowercase();
    let radix = match lower.as_str() {
        "0x" => 16,
        "0o" => 8,
        "0b" => 2,
        _ => return None,
    };
    let digits = &text[2..];
    if digits.is_empty() {
        return Some(f64::NAN);
    }
    let value = digits.chars().try_fold(0f64, |acc, ch| {
        ch.to_digit(radix)
            .map(|digit| acc * f64::from(radix) + f64::from(digit))
    });
    Some(value.unwrap_or(f64::NAN))
}

fn parse_decimal(text: &str) -> f64 {
    let unsigned = text.strip_prefix(['+', '-']).unwrap_or(text);
    if unsigned == "Infinity" {
        return if text.starts_with('-') {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        };
    }
    // `f64::from_str` also accepts "inf" and "nan" spellings; only plain
    // numeric literals count here.
    let numeric = unsigned
        .chars()
        .all(|ch| ch.is_ascii_digit() || matches!(ch, '.' | 'e' | 'E' | '+' | '-'));
    if !numeric || !unsigned.starts_with(|ch: char| ch.is_ascii_digit() || ch == '.') {
        return f64::NAN;
    }
    text.parse::<f64>().unwrap_or(f64::NAN)
}

/// Splits the comma-separated scope field. Order and duplicates are kept and
/// entries are not trimmed; an empty field yields one empty scope.
#[must_use]
pub fn parse_scopes(raw: &str) -> Vec<String> {
    raw.split(',').map(str::to_string).collect()
}

/// Raw values of the create form, exactly as the operator typed them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CreateForm {
    pub principal: String,
    pub scopes: String,
    pub ttl_seconds: String,
    pub length: String,
    pub kind: Option<String>,
}

impl CreateForm {
    #[must_use]
    pub fn into_request(self) -> NewCredential {
        let ttl_seconds = coerce_number(&self.ttl_seconds);
        let length = coerce_number(&self.length);
        if ttl_seconds.is_malformed() {
            warn!(raw = %self.ttl_seconds, "ttl_seconds is not a number; forwarding as null");
        }
        if length.is_malformed() {
            warn!(raw = %self.length, "length is not a number; forwarding as null");
        }
        NewCredential {
            principal: self.principal,
            scopes: parse_scopes(&self.scopes),
            ttl_seconds,
            length,
            kind: self.kind,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn coerces_plain_and_padded_numbers() {
        assert_eq!(coerce_number("3600").value(), 3600.0);
        assert_eq!(coerce_number("  32 ").value(), 32.0);
        assert_eq!(coerce_number("").value(), 0.0);
        assert_eq!(coerce_number("   ").value(), 0.0);
        assert_eq!(coerce_number("1.5").value(), 1.5);
        assert_eq!(coerce_number(".5").value(), 0.5);
        assert_eq!(coerce_number("-12").value(), -12.0);
        assert_eq!(coerce_number("1e3").value(), 1000.0);
        assert_eq!(coerce_number("0x20").value(), 32.0);
        assert_eq!(coerce_number("0b101").value(), 5.0);
        assert_eq!(coerce_number("-Infinity").value(), f64::NEG_INFINITY);
    }

    #[test]
    fn non_numeric_text_becomes_nan() {
        for raw in ["abc", "12abc", "inf", "nan", "NaN", "0x", "0xZZ", "1_000", ".", "e5"] {
            assert!(coerce_number(raw).value().is_nan(), "{raw} should be NaN");
            assert!(coerce_number(raw).is_malformed());
        }
    }

    #[test]
    fn malformed_numbers_serialize_as_null() {
        let body = serde_json::to_value(NewCredential {
            principal: "svc-a".to_string(),
            scopes: parse_scopes("read"),
            ttl_seconds: coerce_number("soon"),
            length: coerce_number("32"),
            kind: None,
        })
        .expect("serialize");
        assert_eq!(
            body,
            json!({
                "principal": "svc-a",
                "scopes": ["read"],
                "ttl_seconds": null,
                "length": 32
            })
        );
    }

    #[test]
    fn fractional_numbers_stay_fractional() {
        let value = serde_json::to_value(coerce_number("2.5")).expect("serialize");
        assert_eq!(value, json!(2.5));
    }

    #[test]
    fn scopes_keep_order_and_duplicates() {
        assert_eq!(parse_scopes("read,write,read"), vec!["read", "write", "read"]);
        assert_eq!(parse_scopes("read, write"), vec!["read", " write"]);
        assert_eq!(parse_scopes(""), vec![""]);
    }

    #[test]
    fn create_form_builds_request_body() {
        let request = CreateForm {
            principal: "svc-a".to_string(),
            scopes: "read,write".to_string(),
            ttl_seconds: "3600".to_string(),
            length: "32".to_string(),
            kind: Some("api_key".to_string()),
        }
        .into_request();
        assert_eq!(
            serde_json::to_value(&request).expect("serialize"),
            json!({
                "principal": "svc-a",
                "scopes": ["read", "write"],
                "ttl_seconds": 3600,
                "length": 32,
                "type": "api_key"
            })
        );
    }
}
