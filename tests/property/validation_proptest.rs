//! Property-based tests for input normalization
//!
//! Uses proptest to check the normalization helpers over arbitrary input.

use proptest::prelude::*;

use userdesk::shared::validation::{
    escape_like, is_numeric_keyword, normalize_email, parse_id, required_password, required_text,
};

/// Undo `escape_like`: drop each escaping backslash
fn unescape(escaped: &str) -> String {
    let mut out = String::new();
    let mut chars = escaped.chars();
    while let Some(c) = chars.next() {
        if c == '\\' {
            if let Some(next) = chars.next() {
                out.push(next);
            }
        } else {
            out.push(c);
        }
    }
    out
}

proptest! {
    #[test]
    fn test_normalized_email_is_idempotent(raw in "\\PC{0,40}") {
        if let Some(once) = normalize_email(Some(&raw)) {
            prop_assert_eq!(normalize_email(Some(&once)), Some(once.clone()));
            prop_assert_eq!(once.trim(), once.as_str());
        }
    }

    #[test]
    fn test_email_case_does_not_matter(local in "[a-zA-Z]{1,12}", domain in "[a-zA-Z]{1,12}") {
        let lower = normalize_email(Some(&format!("{}@{}.com", local, domain)));
        let upper = normalize_email(Some(&format!("  {}@{}.COM ", local.to_uppercase(), domain.to_uppercase())));
        prop_assert_eq!(lower, upper);
    }

    #[test]
    fn test_required_text_never_blank(raw in "\\PC{0,30}") {
        match required_text(Some(&raw)) {
            Some(value) => {
                prop_assert!(!value.is_empty());
                prop_assert_eq!(value.as_str(), raw.trim());
            }
            None => prop_assert!(raw.trim().is_empty()),
        }
    }

    #[test]
    fn test_password_kept_verbatim(raw in "\\PC{1,30}") {
        match required_password(Some(&raw)) {
            Some(value) => prop_assert_eq!(value, raw),
            None => prop_assert!(raw.trim().is_empty()),
        }
    }

    #[test]
    fn test_positive_ids_parse(id in 1i64..i64::MAX) {
        prop_assert_eq!(parse_id(&id.to_string()), Some(id));
        prop_assert!(is_numeric_keyword(&id.to_string()));
    }

    #[test]
    fn test_non_numeric_ids_rejected(raw in "[^0-9]{1,10}") {
        prop_assert_eq!(parse_id(&raw), None);
    }

    #[test]
    fn test_escape_like_round_trips(keyword in "[a-z%_\\\\]{0,20}") {
        let escaped = escape_like(&keyword);
        prop_assert_eq!(unescape(&escaped), keyword);
    }
}
