//! Binding expression strategy seam.

use crate::expression::Expression;
use crate::kind::RequestKind;
use crate::types::ModulePath;

/// A strategy producing the expression for one binding.
///
/// The framework-instance strategy implemented in this crate is one of
/// several siblings behind this seam; the surrounding generator dispatches
/// each binding to whichever strategy owns it.
pub trait BindingExpression {
    /// The expression satisfying a request for this binding's value, in the
    /// requested kind, from the requesting namespace.
    fn dependency_expression(&self, requested: RequestKind, namespace: &ModulePath) -> Expression;
}
