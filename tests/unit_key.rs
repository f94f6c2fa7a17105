//! Unit tests for binding identity keys.

use anvil_di_codegen::{BindingKey, TypePath};

#[test]
fn test_plain_key_display_name() {
    let key = BindingKey::Type(TypePath::parse("crate::db::Pool"));
    assert_eq!(key.display_name(), "crate::db::Pool");
    assert_eq!(key.qualifier(), None);
    assert_eq!(key.type_path().name(), "Pool");
}

#[test]
fn test_qualified_key_carries_its_annotation() {
    let key = BindingKey::Qualified(TypePath::parse("crate::db::Pool"), "replica".to_string());
    assert_eq!(key.display_name(), "@replica crate::db::Pool");
    assert_eq!(key.qualifier(), Some("replica"));
    assert_eq!(key.type_path().name(), "Pool");
}

#[test]
fn test_members_injection_key_display_name() {
    let key = BindingKey::MembersInjection(TypePath::parse("crate::app::AuditLog"));
    assert_eq!(key.display_name(), "members injection of crate::app::AuditLog");
    assert_eq!(key.qualifier(), None);
}

#[test]
fn test_keys_over_one_type_are_distinct() {
    let path = TypePath::parse("crate::db::Pool");
    let plain = BindingKey::Type(path.clone());
    let qualified = BindingKey::Qualified(path.clone(), "replica".to_string());
    let injection = BindingKey::MembersInjection(path);

    assert_ne!(plain, qualified);
    assert_ne!(plain, injection);
    assert_ne!(qualified, injection);
}

#[test]
fn test_key_ordering_is_stable_and_total() {
    let mut keys = vec![
        BindingKey::Qualified(TypePath::parse("crate::b::B"), "x".to_string()),
        BindingKey::Type(TypePath::parse("crate::a::A")),
        BindingKey::MembersInjection(TypePath::parse("crate::c::C")),
        BindingKey::Type(TypePath::parse("crate::a::A")),
    ];
    keys.sort();
    let again = {
        let mut k = keys.clone();
        k.sort();
        k
    };
    assert_eq!(keys, again);
    assert_eq!(keys[0], keys[1]); // duplicates sort adjacently
}
