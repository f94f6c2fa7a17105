//! Member references: access paths to materialized bindings.

use crate::binding::Binding;
use crate::options::CodegenOptions;
use crate::types::{TypeDescriptor, TypePath};

/// An access path to a binding's materialized framework value, unique per
/// binding per generated unit.
///
/// Either a reference to a static, side-effect-free creator usable from
/// anywhere, or a reference to a field owned by the generated unit,
/// requiring the unit instance to dereference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MemberReference {
    /// A static creator call, re-invoked at every use site.
    Static {
        /// Path of the factory type exposing the creator.
        creator: TypePath,
        /// The wrapper type the creator returns.
        ty: TypeDescriptor,
    },
    /// A field on the generated unit instance.
    Field {
        /// The generated field's name.
        name: String,
        /// The field's declared type.
        ty: TypeDescriptor,
    },
}

impl MemberReference {
    /// Renders the access path as generated code.
    pub fn expression(&self) -> String {
        match self {
            MemberReference::Static { creator, .. } => format!("{}::create()", creator),
            MemberReference::Field { name, .. } => format!("self.{}", name),
        }
    }

    /// True for static creator references. A static reference is an inline
    /// creation: the compiler can infer its precise return type transitively
    /// even when the contributed type cannot be named at the use site.
    pub fn is_static(&self) -> bool {
        matches!(self, MemberReference::Static { .. })
    }

    /// The wrapper type this reference materializes.
    pub fn ty(&self) -> &TypeDescriptor {
        match self {
            MemberReference::Static { ty, .. } => ty,
            MemberReference::Field { ty, .. } => ty,
        }
    }
}

/// Returns a static creator reference for a binding with no per-instance
/// state, bypassing field allocation entirely.
///
/// This trades code size for speed: no field or initializer is emitted, at
/// the cost of re-invoking the creator at every use site. Only bindings with
/// no dependencies and no scope qualify, and the optimization can be turned
/// off wholesale through [`CodegenOptions`].
pub(crate) fn static_member_reference(
    binding: &Binding,
    options: &CodegenOptions,
) -> Option<MemberReference> {
    if !options.static_inlining() || !binding.is_static_eligible() {
        return None;
    }
    Some(MemberReference::Static {
        creator: binding.factory_path(),
        ty: binding
            .native_kind()
            .wrapper_type(binding.contributed_type().clone()),
    })
}
