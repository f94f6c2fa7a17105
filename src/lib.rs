//! # anvil-di-codegen
//!
//! Binding-expression synthesis for compile-time dependency injection code
//! generation, inspired by annotation-processor component generators on
//! other platforms.
//!
//! Given a resolved dependency graph, this crate decides, for every place a
//! dependency is requested, what generated code expression produces the
//! required value, in what wrapped form, and whether that value must be
//! computed once and cached behind a generated component field or may be
//! recomputed inline. Any given binding is materialized into generated
//! storage **at most once** per generated unit, regardless of how many times
//! or in how many different requested forms it is referenced.
//!
//! ## Features
//!
//! - **At-most-once materialization**: one field and one initializer per
//!   binding per generated unit, guaranteed by a per-binding memoizer
//! - **Request-kind conversion**: instance, lazy, producer, and produced
//!   expressions derived from a binding's native wrapper form
//! - **Static bypass**: bindings with no per-instance state are served
//!   through static creator calls, allocating no field at all
//! - **Visibility-aware emission**: precise parameterized wrapper types
//!   where the contributed type is nameable, erased wrappers elsewhere
//! - **Deterministic output**: emitted field order is first-request order,
//!   byte-identical across repeated runs
//!
//! ## Quick Start
//!
//! ```rust
//! use anvil_di_codegen::{
//!     AllVisible, Binding, BindingKey, ComponentBindings, Expression,
//!     ModulePath, NativeWrapperKind, RequestKind, TypeDescriptor, TypePath,
//! };
//! use std::sync::Arc;
//!
//! let ns = ModulePath::parse("crate::app");
//! let database = TypePath::parse("crate::app::Database");
//! let key = BindingKey::Type(database.clone());
//!
//! // The surrounding generator supplies construction code for each binding.
//! let creations = Arc::new(
//!     |binding: &Binding, _adapted: bool, _component: &ComponentBindings| {
//!         Expression::new(
//!             binding.native_kind().wrapper_type(binding.contributed_type().clone()),
//!             format!("{}::new()", binding.factory_path()),
//!         )
//!     },
//! );
//!
//! let mut component =
//!     ComponentBindings::new("AppComponent", ns.clone(), Arc::new(AllVisible), creations);
//! component.add_binding(
//!     Binding::new(key.clone(), TypeDescriptor::simple(database), NativeWrapperKind::Provider)
//!         .scoped(),
//! );
//!
//! // However many shapes the binding is requested in ...
//! let provider = component.expression(&key, RequestKind::Provider, &ns);
//! let lazy = component.expression(&key, RequestKind::Lazy, &ns);
//! assert_eq!(provider.code(), "self.database_provider");
//! assert_eq!(
//!     lazy.code(),
//!     "anvil_di::Lazy::from_provider(self.database_provider)"
//! );
//!
//! // ... exactly one field and one initializer are emitted.
//! let artifact = component.finish();
//! assert_eq!(artifact.fields().len(), 1);
//! assert_eq!(artifact.initializations().len(), 1);
//! ```
//!
//! ## Scope
//!
//! Graph construction and validation, cycle detection, subcomponent naming,
//! and textual emission of the final generated source all live in the
//! surrounding generator. This crate consumes them through narrow seams:
//! [`TypeVisibility`] answers accessibility queries and
//! [`CreationExpressions`] supplies construction code, invoked exactly once
//! per memoized field. Failures at this layer are internal defects, never
//! user errors; [`catch_internal_errors`] converts them into
//! [`CodegenError`] diagnostics at the generation-run boundary.

// Module declarations
pub mod artifact;
pub mod binding;
pub mod component;
pub mod convert;
pub mod error;
pub mod expression;
pub mod key;
pub mod kind;
pub mod member;
pub mod observer;
pub mod options;
pub mod traits;
pub mod types;

// Internal modules
mod internal;
mod memoizer;

// Re-export core types
pub use artifact::{FieldSpec, GeneratedArtifact};
pub use binding::{Binding, BindingScope};
pub use component::{BindingDescriptor, ComponentBindings};
pub use error::{catch_internal_errors, CodegenError, CodegenResult};
pub use expression::Expression;
pub use internal::{IceKind, IcePayload};
pub use key::BindingKey;
pub use kind::{NativeWrapperKind, RequestKind};
pub use member::MemberReference;
pub use observer::{CodegenObserver, LoggingObserver};
pub use options::CodegenOptions;
pub use traits::{AllVisible, BindingExpression, CreationExpressions, TypeVisibility};
pub use types::{ModulePath, TypeDescriptor, TypePath};

#[cfg(feature = "artifact-export")]
pub use artifact::{ArtifactDump, FieldDump};

#[cfg(test)]
mod tests {
    use super::*;
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

    #[test]
    fn test_scoped_binding_materializes_once() {
        let ns = ModulePath::parse("crate::app");
        let pool = TypePath::parse("crate::app::Pool");
        let key = BindingKey::Type(pool.clone());

        let mut component = ComponentBindings::new(
            "AppComponent",
            ns.clone(),
            Arc::new(AllVisible),
            factory_creations(),
        );
        component.add_binding(
            Binding::new(key.clone(), TypeDescriptor::simple(pool), NativeWrapperKind::Provider)
                .scoped(),
        );

        let first = component.expression(&key, RequestKind::Provider, &ns);
        let second = component.expression(&key, RequestKind::Provider, &ns);
        assert_eq!(first, second);
        assert_eq!(component.artifact().fields().len(), 1);
    }

    #[test]
    fn test_static_binding_allocates_nothing() {
        let ns = ModulePath::parse("crate::app");
        let clock = TypePath::parse("crate::app::Clock");
        let key = BindingKey::Type(clock.clone());

        let mut component = ComponentBindings::new(
            "AppComponent",
            ns.clone(),
            Arc::new(AllVisible),
            factory_creations(),
        );
        component.add_binding(Binding::new(
            key.clone(),
            TypeDescriptor::simple(clock),
            NativeWrapperKind::Provider,
        ));

        let provider = component.expression(&key, RequestKind::Provider, &ns);
        assert_eq!(provider.code(), "crate::app::ClockFactory::create()");
        assert!(component.artifact().fields().is_empty());
        assert!(component.artifact().initializations().is_empty());
    }
}
