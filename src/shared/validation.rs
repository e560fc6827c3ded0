//! Input Normalization
//!
//! Small pure helpers used by every handler to turn loosely-typed request
//! fields into the values stored in the `user` table.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Trim a text field, treating blank input as absent
pub fn required_text(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

/// Optional text such as the avatar URL; blank becomes `None`
pub fn optional_text(value: Option<&str>) -> Option<String> {
    required_text(value)
}

/// Trim and lower-case an email; blank becomes `None`
pub fn normalize_email(value: Option<&str>) -> Option<String> {
    required_text(value).map(|v| v.to_lowercase())
}

/// Password fields are kept verbatim, but whitespace-only counts as missing
pub fn required_password(value: Option<&str>) -> Option<String> {
    value
        .filter(|v| !v.trim().is_empty())
        .map(str::to_string)
}

/// True when a search keyword is made of ASCII digits only
pub fn is_numeric_keyword(keyword: &str) -> bool {
    !keyword.is_empty() && keyword.bytes().all(|b| b.is_ascii_digit())
}

/// Parse a user id given as text; rejects anything that is not a positive integer
pub fn parse_id(value: &str) -> Option<i64> {
    let value = value.trim();
    if !is_numeric_keyword(value) {
        return None;
    }
    value.parse::<i64>().ok().filter(|id| *id > 0)
}

/// Escape `%`, `_` and `\` so a keyword matches literally inside `LIKE ... ESCAPE '\'`
pub fn escape_like(keyword: &str) -> String {
    let mut escaped = String::with_capacity(keyword.len());
    for c in keyword.chars() {
        if matches!(c, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

/// Deserialize an id that clients send either as a JSON number or a numeric string
///
/// Anything unusable (null, negative, fractional, non-numeric) yields `None`
/// so handlers can answer `missing_fields`.
pub fn deserialize_id<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::Number(n)) => n.as_i64().filter(|id| *id > 0),
        Some(Value::String(s)) => parse_id(&s),
        _ => None,
    })
}
