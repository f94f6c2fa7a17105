#![no_main]

use anvil_di_codegen::{
    catch_internal_errors, AllVisible, Binding, BindingKey, ComponentBindings,
    CreationExpressions, Expression, ModulePath, NativeWrapperKind, RequestKind, TypeDescriptor,
    TypePath,
};
use libfuzzer_sys::fuzz_target;
use std::sync::Arc;

const TYPES: [&str; 4] = [
    "crate::app::Config",
    "crate::app::Pool",
    "crate::app::Cache",
    "crate::app::Clock",
];

const KINDS: [RequestKind; 6] = [
    RequestKind::Instance,
    RequestKind::Provider,
    RequestKind::Lazy,
    RequestKind::Producer,
    RequestKind::Produced,
    RequestKind::MembersInjector,
];

fn build_component(ns: &ModulePath) -> ComponentBindings {
    let creations: Arc<dyn CreationExpressions> = Arc::new(
        |binding: &Binding, _adapted: bool, _component: &ComponentBindings| {
            Expression::new(
                binding
                    .native_kind()
                    .wrapper_type(binding.contributed_type().clone()),
                format!("{}::new()", binding.factory_path()),
            )
        },
    );
    let mut component =
        ComponentBindings::new("AppComponent", ns.clone(), Arc::new(AllVisible), creations);
    for (i, path) in TYPES.iter().enumerate() {
        let path = TypePath::parse(path);
        let kind = match i % 3 {
            0 => NativeWrapperKind::Provider,
            1 => NativeWrapperKind::Producer,
            _ => NativeWrapperKind::MembersInjector,
        };
        component.add_binding(
            Binding::new(BindingKey::Type(path.clone()), TypeDescriptor::simple(path), kind)
                .scoped(),
        );
    }
    component
}

// Arbitrary request sequences may hit undefined conversions (a diagnostic,
// not a crash), but must never materialize a binding twice or emit fields
// without initializers.
fuzz_target!(|data: &[u8]| {
    let ns = ModulePath::parse("crate::app");
    let component = build_component(&ns);

    for chunk in data.chunks(2) {
        let key = BindingKey::Type(TypePath::parse(TYPES[chunk[0] as usize % TYPES.len()]));
        let requested = KINDS[chunk.get(1).copied().unwrap_or(0) as usize % KINDS.len()];
        let _ = catch_internal_errors(|| component.expression(&key, requested, &ns));
    }

    let artifact = component.finish();
    assert!(artifact.fields().len() <= TYPES.len());
    assert_eq!(artifact.fields().len(), artifact.initializations().len());

    let mut names: Vec<&str> = artifact.fields().iter().map(|f| f.name()).collect();
    names.sort_unstable();
    names.dedup();
    assert_eq!(names.len(), artifact.fields().len());
});
