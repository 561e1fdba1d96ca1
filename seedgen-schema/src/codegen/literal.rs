//! C# literal serialization for raw CSV cells
//!
//! Serialization never fails: unparsable numbers become `0`, anything that
//! is not `true` becomes `false`, and unknown types are emitted as strings.

use crate::FieldKind;
use once_cell::sync::Lazy;
use regex::Regex;

static GUID_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9a-fA-F-]{36}$").expect("valid guid pattern"));

/// Serialize a raw cell for a declared type
pub fn serialize_value(raw: &str, declared_type: &str) -> String {
    serialize_kind(raw, FieldKind::classify(declared_type))
}

/// Serialize a raw cell for an already classified type
pub fn serialize_kind(raw: &str, kind: FieldKind) -> String {
    match kind {
        FieldKind::Int => parse_leading_int(raw).unwrap_or(0).to_string(),
        FieldKind::Bool => raw.eq_ignore_ascii_case("true").to_string(),
        FieldKind::Guid => guid_literal(raw),
        FieldKind::StringArray => string_array_literal(raw),
        // Embedded quotes are emitted as-is
        FieldKind::String | FieldKind::Other => format!("\"{}\"", raw),
    }
}

/// Integer prefix of `raw`: optional sign, then digits; trailing text is ignored
fn parse_leading_int(raw: &str) -> Option<i64> {
    let s = raw.trim_start();
    let sign_len = usize::from(s.starts_with(['+', '-']));
    let digits = s[sign_len..]
        .bytes()
        .take_while(u8::is_ascii_digit)
        .count();

    if digits == 0 {
        return None;
    }
    s[..sign_len + digits].parse().ok()
}

fn guid_literal(raw: &str) -> String {
    let value = raw.trim();

    if value.is_empty() {
        "Guid.NewGuid()".to_string()
    } else if value.to_ascii_lowercase().starts_with("new guid") {
        value.to_string()
    } else {
        if !is_guid_like(value) {
            log::debug!("'{}' does not look like a guid", value);
        }
        format!("new Guid(\"{}\")", value)
    }
}

fn string_array_literal(raw: &str) -> String {
    let parts: Vec<String> = raw
        .split('|')
        .map(|part| format!("\"{}\"", part.trim()))
        .collect();

    format!("new string[] {{ {} }}", parts.join(", "))
}

/// Whether `value` has the 36-character guid shape
pub fn is_guid_like(value: &str) -> bool {
    GUID_PATTERN.is_match(value.trim())
}
