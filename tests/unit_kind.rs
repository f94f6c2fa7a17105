//! Unit tests for the wrapper and request kind enumerations.

use anvil_di_codegen::{NativeWrapperKind, RequestKind, TypeDescriptor, TypePath};

const ALL_NATIVE: [NativeWrapperKind; 3] = [
    NativeWrapperKind::Provider,
    NativeWrapperKind::Producer,
    NativeWrapperKind::MembersInjector,
];

#[test]
fn test_matching_request_shapes() {
    assert_eq!(
        NativeWrapperKind::Provider.matching_request(),
        RequestKind::Provider
    );
    assert_eq!(
        NativeWrapperKind::Producer.matching_request(),
        RequestKind::Producer
    );
    assert_eq!(
        NativeWrapperKind::MembersInjector.matching_request(),
        RequestKind::MembersInjector
    );
}

#[test]
fn test_wrapper_names_are_distinct() {
    let mut names: Vec<_> = ALL_NATIVE.iter().map(|k| k.wrapper_name()).collect();
    names.sort_unstable();
    names.dedup();
    assert_eq!(names.len(), 3);

    for kind in ALL_NATIVE {
        assert_eq!(kind.raw_wrapper_name(), format!("Dyn{}", kind.wrapper_name()));
    }
}

#[test]
fn test_wrapper_type_parameterizes_the_contributed_type() {
    let pool = TypeDescriptor::simple(TypePath::parse("crate::db::Pool"));
    assert_eq!(
        NativeWrapperKind::Provider.wrapper_type(pool.clone()).render(),
        "anvil_di::Provider<crate::db::Pool>"
    );
    assert_eq!(
        NativeWrapperKind::Producer.wrapper_type(pool.clone()).render(),
        "anvil_di::Producer<crate::db::Pool>"
    );
    assert_eq!(
        NativeWrapperKind::MembersInjector.wrapper_type(pool).render(),
        "anvil_di::MembersInjector<crate::db::Pool>"
    );
}

#[test]
fn test_raw_wrapper_type_names_only_the_kind() {
    for kind in ALL_NATIVE {
        let raw = kind.raw_wrapper_type();
        assert!(raw.args().is_empty());
        assert_eq!(raw.type_arg(), None);
    }
    assert_eq!(
        NativeWrapperKind::Provider.raw_wrapper_type().render(),
        "anvil_di::DynProvider"
    );
}

#[test]
fn test_field_suffixes() {
    assert_eq!(NativeWrapperKind::Provider.field_suffix(), "provider");
    assert_eq!(NativeWrapperKind::Producer.field_suffix(), "producer");
    assert_eq!(
        NativeWrapperKind::MembersInjector.field_suffix(),
        "members_injector"
    );
}

#[test]
fn test_display_forms() {
    assert_eq!(NativeWrapperKind::Provider.to_string(), "Provider");
    assert_eq!(RequestKind::Produced.to_string(), "Produced");
    assert_eq!(RequestKind::MembersInjector.to_string(), "MembersInjector");
    assert_eq!(RequestKind::Instance.to_string(), "Instance");
}
