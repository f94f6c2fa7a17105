//! Creation expression collaborator.

use crate::binding::Binding;
use crate::component::ComponentBindings;
use crate::expression::Expression;

/// Supplies the code that constructs a binding's framework value.
///
/// Implemented by the surrounding generator and invoked exactly once per
/// memoized field. The implementation resolves the binding's dependency
/// sub-expressions through `component`, which materializes any fields those
/// dependencies need before the returned initializer runs; special-cased
/// collaborators (optional wrapping, released references, subcomponent
/// factories) are folded into the returned expression the same way.
///
/// `producer_from_provider` is set when the field being initialized holds
/// the producer adaptation of a provider binding, so the construction must
/// wrap the provider form accordingly.
pub trait CreationExpressions: Send + Sync {
    /// The initializer expression constructing `binding`'s framework value.
    fn creation_expression(
        &self,
        binding: &Binding,
        producer_from_provider: bool,
        component: &ComponentBindings,
    ) -> Expression;
}

impl<F> CreationExpressions for F
where
    F: Fn(&Binding, bool, &ComponentBindings) -> Expression + Send + Sync,
{
    fn creation_expression(
        &self,
        binding: &Binding,
        producer_from_provider: bool,
        component: &ComponentBindings,
    ) -> Expression {
        self(binding, producer_from_provider, component)
    }
}
