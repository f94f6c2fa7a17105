use anvil_di_codegen::*;
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use std::sync::Arc;

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

fn build_component(ns: &ModulePath, bindings: usize) -> ComponentBindings {
    let mut component = ComponentBindings::new(
        "AppComponent",
        ns.clone(),
        Arc::new(AllVisible),
        factory_creations(),
    );
    for i in 0..bindings {
        let path = TypePath::parse(&format!("crate::app::Service{}", i));
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

// ===== Micro Benchmarks =====

fn bench_memoized_hit(c: &mut Criterion) {
    let ns = ModulePath::parse("crate::app");
    let component = build_component(&ns, 1);
    let key = BindingKey::Type(TypePath::parse("crate::app::Service0"));

    // Prime the field.
    let _ = component.expression(&key, RequestKind::Provider, &ns);

    c.bench_function("memoized_provider_hit", |b| {
        b.iter(|| {
            let expr = component.expression(&key, RequestKind::Provider, &ns);
            black_box(expr);
        })
    });
}

fn bench_lazy_composite(c: &mut Criterion) {
    let ns = ModulePath::parse("crate::app");
    let component = build_component(&ns, 1);
    let key = BindingKey::Type(TypePath::parse("crate::app::Service0"));
    let _ = component.expression(&key, RequestKind::Provider, &ns);

    c.bench_function("lazy_composite_expression", |b| {
        b.iter(|| {
            let expr = component.expression(&key, RequestKind::Lazy, &ns);
            black_box(expr);
        })
    });
}

fn bench_cold_unit(c: &mut Criterion) {
    let ns = ModulePath::parse("crate::app");

    c.bench_function("cold_unit_32_bindings", |b| {
        b.iter_batched(
            || build_component(&ns, 32),
            |component| {
                for i in 0..32 {
                    let key = BindingKey::Type(TypePath::parse(&format!(
                        "crate::app::Service{}",
                        i
                    )));
                    let expr = component.expression(&key, RequestKind::Provider, &ns);
                    black_box(expr);
                }
                black_box(component.finish())
            },
            criterion::BatchSize::SmallInput,
        )
    });
}

criterion_group!(benches, bench_memoized_hit, bench_lazy_composite, bench_cold_unit);
criterion_main!(benches);
