//! Emitted expressions.

use std::fmt;

use crate::types::TypeDescriptor;

/// A code expression paired with its emitted static type.
///
/// Expressions are ephemeral: they are recomputed on every resolver call,
/// even when the member reference they dereference is cached. The type is
/// the *emitted* type, what generated source will declare, which may be the
/// erased wrapper form when the precise parameter is not nameable from the
/// requesting namespace.
///
/// # Examples
///
/// ```rust
/// use anvil_di_codegen::{Expression, TypeDescriptor, TypePath};
///
/// let ty = TypeDescriptor::simple(TypePath::parse("crate::db::Pool"));
/// let expr = Expression::new(ty.clone(), "self.pool_provider.get()");
/// assert_eq!(expr.ty(), &ty);
/// assert_eq!(expr.code(), "self.pool_provider.get()");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Expression {
    ty: TypeDescriptor,
    code: String,
}

impl Expression {
    /// Pairs a code fragment with its emitted type.
    pub fn new(ty: TypeDescriptor, code: impl Into<String>) -> Self {
        Self { ty, code: code.into() }
    }

    /// The emitted static type of the value.
    pub fn ty(&self) -> &TypeDescriptor {
        &self.ty
    }

    /// The code fragment producing the value.
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Splits the expression into its type and code parts.
    pub fn into_parts(self) -> (TypeDescriptor, String) {
        (self.ty, self.code)
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code, self.ty)
    }
}
