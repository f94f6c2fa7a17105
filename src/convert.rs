//! Request-kind conversion lattice.
//!
//! Converts an expression of a binding's native wrapper kind into any
//! requested kind. The lattice is a small fixed table: each defined entry is
//! a pure expression transformation that wraps or unwraps the native
//! expression, and every undefined (native, requested) pair is an
//! exhaustiveness violation that aborts generation.

use crate::expression::Expression;
use crate::internal::ice;
use crate::kind::{runtime_type, NativeWrapperKind, RequestKind};
use crate::types::TypeDescriptor;

/// Converts a native-kind expression into the requested kind.
///
/// Type precision follows the native expression: wrapping or unwrapping an
/// erased expression yields the erased form of the result.
///
/// Never triggers field memoization; that already happened, if needed, when
/// the native expression was obtained.
///
/// # Examples
///
/// ```rust
/// use anvil_di_codegen::convert::convert;
/// use anvil_di_codegen::{Expression, NativeWrapperKind, RequestKind};
/// use anvil_di_codegen::{TypeDescriptor, TypePath};
///
/// let pool = TypeDescriptor::simple(TypePath::parse("crate::db::Pool"));
/// let provider = Expression::new(
///     NativeWrapperKind::Provider.wrapper_type(pool.clone()),
///     "self.pool_provider",
/// );
///
/// let instance = convert(
///     provider.clone(),
///     NativeWrapperKind::Provider,
///     RequestKind::Instance,
/// );
/// assert_eq!(instance.code(), "self.pool_provider.get()");
/// assert_eq!(instance.ty(), &pool);
///
/// let lazy = convert(provider, NativeWrapperKind::Provider, RequestKind::Lazy);
/// assert_eq!(lazy.code(), "anvil_di::Lazy::from_provider(self.pool_provider)");
/// assert_eq!(lazy.ty().render(), "anvil_di::Lazy<crate::db::Pool>");
/// ```
pub fn convert(
    native: Expression,
    native_kind: NativeWrapperKind,
    requested: RequestKind,
) -> Expression {
    use NativeWrapperKind as Native;

    match (native_kind, requested) {
        // Matching request shapes need no conversion. The resolver
        // short-circuits these before reaching the lattice, but the table
        // stays total over defined pairs.
        (Native::Provider, RequestKind::Provider)
        | (Native::Producer, RequestKind::Producer)
        | (Native::MembersInjector, RequestKind::MembersInjector) => native,

        // Unwrap by invoking the wrapper's accessor.
        (Native::Provider, RequestKind::Instance) | (Native::Producer, RequestKind::Instance) => {
            let ty = native
                .ty()
                .type_arg()
                .cloned()
                .unwrap_or_else(TypeDescriptor::erased_value);
            let code = format!("{}.get()", native.code());
            Expression::new(ty, code)
        }

        // Memoizing-on-first-access wrapper around a provider.
        (Native::Provider, RequestKind::Lazy) => {
            let ty = wrapped_result(&native, "Lazy", "DynLazy");
            let code = format!("anvil_di::Lazy::from_provider({})", native.code());
            Expression::new(ty, code)
        }

        // Asynchronous result projection of a producer.
        (Native::Producer, RequestKind::Produced) => {
            let ty = wrapped_result(&native, "Produced", "DynProduced");
            let code = format!("anvil_di::Produced::from_future({}.get())", native.code());
            Expression::new(ty, code)
        }

        (native_kind, requested) => ice::unreachable_kind(format!(
            "no conversion from native kind {} to requested kind {}",
            native_kind, requested,
        )),
    }
}

/// Result wrapper type at the precision of the native expression: precise
/// when the native wrapper names its parameter, erased otherwise.
fn wrapped_result(native: &Expression, precise: &str, raw: &str) -> TypeDescriptor {
    match native.ty().type_arg() {
        Some(arg) => TypeDescriptor::parameterized(runtime_type(precise), vec![arg.clone()]),
        None => TypeDescriptor::simple(runtime_type(raw)),
    }
}
