//! Property-based tests for the role tag

use proptest::prelude::*;

use userdesk::shared::Role;

fn any_role() -> impl Strategy<Value = Role> {
    prop_oneof![Just(Role::User), Just(Role::Admin)]
}

proptest! {
    #[test]
    fn test_role_text_round_trip(role in any_role()) {
        prop_assert_eq!(role.as_str().parse::<Role>().ok(), Some(role));
        prop_assert_eq!(role.to_string(), role.as_str());
    }

    #[test]
    fn test_role_json_is_lowercase_tag(role in any_role()) {
        let json = serde_json::to_string(&role).unwrap();
        prop_assert_eq!(json, format!("\"{}\"", role.as_str()));
    }

    #[test]
    fn test_unknown_tags_rejected(tag in "[a-z]{1,10}") {
        prop_assume!(tag != "user" && tag != "admin");
        prop_assert!(tag.parse::<Role>().is_err());
    }

    #[test]
    fn test_only_admin_is_admin(role in any_role()) {
        prop_assert_eq!(role.is_admin(), role == Role::Admin);
    }
}
