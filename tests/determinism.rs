//! Emitted field and initializer order must be byte-identical across
//! repeated runs over the same graph with the same request order.

use anvil_di_codegen::{
    AllVisible, Binding, BindingKey, ComponentBindings, CreationExpressions, Expression,
    GeneratedArtifact, ModulePath, NativeWrapperKind, RequestKind, TypeDescriptor, TypePath,
};
use proptest::prelude::*;
use std::sync::Arc;

const TYPES: [&str; 5] = [
    "crate::app::Config",
    "crate::app::Pool",
    "crate::app::Cache",
    "crate::app::Mailer",
    "crate::app::Clock",
];

fn factory_creations() -> Arc<dyn CreationExpressions> {
    Arc::new(
        |binding: &Binding, _adapted: bool, _component: &ComponentBindings| {
            Expression::new(
                binding
                    .native_kind()
                    .wrapper_type(binding.contributed_type().clone()),
                format!("{}::new()", binding.factory_path()),
            )
        },
    )
}

fn build_component(ns: &ModulePath) -> ComponentBindings {
    let mut component = ComponentBindings::new(
        "AppComponent",
        ns.clone(),
        Arc::new(AllVisible),
        factory_creations(),
    );
    for path in TYPES {
        let path = TypePath::parse(path);
        component.add_binding(
            Binding::new(
                BindingKey::Type(path.clone()),
                TypeDescriptor::simple(path),
                NativeWrapperKind::Provider,
            )
            .scoped(),
        );
    }
    component
}

fn run(ns: &ModulePath, requests: &[(usize, RequestKind)]) -> GeneratedArtifact {
    let component = build_component(ns);
    for (index, requested) in requests {
        let key = BindingKey::Type(TypePath::parse(TYPES[index % TYPES.len()]));
        component.expression(&key, *requested, ns);
    }
    component.finish()
}

#[test]
fn test_identical_runs_emit_identical_artifacts() {
    let ns = ModulePath::parse("crate::app");
    let requests = [
        (1, RequestKind::Lazy),
        (0, RequestKind::Instance),
        (3, RequestKind::Provider),
        (1, RequestKind::Provider),
        (4, RequestKind::Instance),
        (2, RequestKind::Lazy),
        (0, RequestKind::Provider),
    ];
    let first = run(&ns, &requests);
    let second = run(&ns, &requests);
    assert_eq!(first, second);

    let names: Vec<_> = first.fields().iter().map(|f| f.name()).collect();
    // First-request order, not registration order.
    assert_eq!(
        names,
        [
            "pool_provider",
            "config_provider",
            "mailer_provider",
            "clock_provider",
            "cache_provider",
        ]
    );
}

#[test]
fn test_request_order_decides_emission_order() {
    let ns = ModulePath::parse("crate::app");
    let forward = run(&ns, &[(0, RequestKind::Provider), (1, RequestKind::Provider)]);
    let reverse = run(&ns, &[(1, RequestKind::Provider), (0, RequestKind::Provider)]);

    let forward_names: Vec<_> = forward.fields().iter().map(|f| f.name()).collect();
    let reverse_names: Vec<_> = reverse.fields().iter().map(|f| f.name()).collect();
    assert_eq!(forward_names, ["config_provider", "pool_provider"]);
    assert_eq!(reverse_names, ["pool_provider", "config_provider"]);
}

proptest! {
    // Any request sequence is reproducible, and no binding is ever
    // materialized more than once.
    #[test]
    fn prop_runs_are_reproducible(
        requests in proptest::collection::vec(
            (0usize..TYPES.len(), prop_oneof![
                Just(RequestKind::Provider),
                Just(RequestKind::Instance),
                Just(RequestKind::Lazy),
            ]),
            0..40,
        )
    ) {
        let ns = ModulePath::parse("crate::app");
        let first = run(&ns, &requests);
        let second = run(&ns, &requests);
        prop_assert_eq!(&first, &second);

        prop_assert!(first.fields().len() <= TYPES.len());
        prop_assert_eq!(first.fields().len(), first.initializations().len());

        let mut names: Vec<_> = first.fields().iter().map(|f| f.name()).collect();
        names.sort_unstable();
        names.dedup();
        prop_assert_eq!(names.len(), first.fields().len());
    }
}
