//! Resolved binding model.

use crate::key::BindingKey;
use crate::kind::NativeWrapperKind;
use crate::types::{TypeDescriptor, TypePath};

/// Whether a binding's value is cached per component instance.
///
/// Scoped bindings are materialized behind a memoizing wrapper in the
/// generated component and therefore always require per-instance state;
/// unscoped bindings create a fresh value on every access and may qualify
/// for a static creator reference instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BindingScope {
    /// Fresh value per access; no per-instance state required by the scope.
    Unscoped,
    /// One value per component instance, cached behind the generated field.
    Scoped,
}

/// A resolved node in the dependency graph representing one producible
/// value.
///
/// Bindings are produced by upstream graph resolution and queried read-only
/// here; their identity is stable for the lifetime of one compilation unit.
///
/// # Examples
///
/// ```rust
/// use anvil_di_codegen::{Binding, BindingKey, BindingScope, NativeWrapperKind};
/// use anvil_di_codegen::{TypeDescriptor, TypePath};
///
/// let pool = TypePath::parse("crate::db::Pool");
/// let binding = Binding::new(
///     BindingKey::Type(pool.clone()),
///     TypeDescriptor::simple(pool),
///     NativeWrapperKind::Provider,
/// );
/// // No dependencies and unscoped: a static creator reference suffices.
/// assert!(binding.is_static_eligible());
/// assert_eq!(binding.factory_path().to_string(), "crate::db::PoolFactory");
///
/// let scoped = binding.scoped();
/// assert_eq!(scoped.scope(), BindingScope::Scoped);
/// assert!(!scoped.is_static_eligible());
/// ```
#[derive(Debug, Clone)]
pub struct Binding {
    key: BindingKey,
    contributed: TypeDescriptor,
    native_kind: NativeWrapperKind,
    scope: BindingScope,
    dependencies: Vec<BindingKey>,
}

impl Binding {
    /// Creates an unscoped binding with no dependencies.
    pub fn new(
        key: BindingKey,
        contributed: TypeDescriptor,
        native_kind: NativeWrapperKind,
    ) -> Self {
        Self {
            key,
            contributed,
            native_kind,
            scope: BindingScope::Unscoped,
            dependencies: Vec::new(),
        }
    }

    /// Marks the binding as scoped to the component instance.
    pub fn scoped(mut self) -> Self {
        self.scope = BindingScope::Scoped;
        self
    }

    /// Records the binding's dependency keys.
    pub fn with_dependencies(mut self, dependencies: Vec<BindingKey>) -> Self {
        self.dependencies = dependencies;
        self
    }

    /// The binding's identity key.
    pub fn key(&self) -> &BindingKey {
        &self.key
    }

    /// The concrete value type this binding contributes.
    pub fn contributed_type(&self) -> &TypeDescriptor {
        &self.contributed
    }

    /// The wrapper form the binding is natively expressed as.
    pub fn native_kind(&self) -> NativeWrapperKind {
        self.native_kind
    }

    /// The binding's scope.
    pub fn scope(&self) -> BindingScope {
        self.scope
    }

    /// Keys of the bindings this one depends on.
    pub fn dependencies(&self) -> &[BindingKey] {
        &self.dependencies
    }

    /// True when the binding can be referenced through a static creator
    /// call with no per-instance state: no dependencies and unscoped.
    pub fn is_static_eligible(&self) -> bool {
        self.dependencies.is_empty() && self.scope == BindingScope::Unscoped
    }

    /// Path of the synthesized factory type for this binding, declared next
    /// to the contributed type.
    pub fn factory_path(&self) -> TypePath {
        let path = self.contributed.path();
        TypePath::new(path.module().clone(), format!("{}Factory", path.name()))
    }
}
