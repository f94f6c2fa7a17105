//! Type visibility oracle.

use crate::types::{ModulePath, TypePath};

/// Reports whether a type's declaration is visible from a namespace.
///
/// A pure query over the symbol table held by the surrounding generator; no
/// side effects, no caching required here. Visibility only decides
/// emitted-type *precision*; it never rejects a binding.
///
/// Any `Fn(&TypePath, &ModulePath) -> bool` closure is an oracle:
///
/// ```rust
/// use anvil_di_codegen::{ModulePath, TypePath, TypeVisibility};
///
/// let crate_private = |ty: &TypePath, from: &ModulePath| ty.module() == from;
/// let pool = TypePath::parse("crate::db::Pool");
/// assert!(crate_private.is_accessible(&pool, &ModulePath::parse("crate::db")));
/// assert!(!crate_private.is_accessible(&pool, &ModulePath::parse("crate::web")));
/// ```
pub trait TypeVisibility: Send + Sync {
    /// True when `ty`'s declaration can be named from `from`.
    fn is_accessible(&self, ty: &TypePath, from: &ModulePath) -> bool;
}

impl<F> TypeVisibility for F
where
    F: Fn(&TypePath, &ModulePath) -> bool + Send + Sync,
{
    fn is_accessible(&self, ty: &TypePath, from: &ModulePath) -> bool {
        self(ty, from)
    }
}

/// Oracle reporting every type visible from everywhere; all emitted types
/// come out precise.
pub struct AllVisible;

impl TypeVisibility for AllVisible {
    fn is_accessible(&self, _ty: &TypePath, _from: &ModulePath) -> bool {
        true
    }
}
