//! Wrapper and request kind enumerations.
//!
//! Every binding is natively expressed as exactly one of three framework
//! wrapper forms, and every call site asks for a value in exactly one of six
//! request shapes. Both enumerations are closed: a kind outside them is an
//! exhaustiveness bug, never a recoverable condition.

use std::fmt;

use once_cell::sync::Lazy;

use crate::types::{ModulePath, TypeDescriptor, TypePath};

static RUNTIME_MODULE: Lazy<ModulePath> = Lazy::new(|| ModulePath::parse("anvil_di"));

/// Path of a type in the runtime support crate that generated code links
/// against.
pub(crate) fn runtime_type(name: &str) -> TypePath {
    TypePath::new(RUNTIME_MODULE.clone(), name)
}

/// The form a binding is intrinsically expressed as.
///
/// A binding's native kind is fixed by upstream graph resolution. A
/// `Provider` binding may additionally be *adapted* to behave as a `Producer`
/// when consumed from an async context; the adaptation is requested per
/// resolution call and is legal in that direction only.
///
/// # Examples
///
/// ```rust
/// use anvil_di_codegen::{NativeWrapperKind, RequestKind, TypeDescriptor, TypePath};
///
/// let kind = NativeWrapperKind::Provider;
/// assert_eq!(kind.matching_request(), RequestKind::Provider);
///
/// let pool = TypeDescriptor::simple(TypePath::parse("crate::db::Pool"));
/// assert_eq!(
///     kind.wrapper_type(pool).render(),
///     "anvil_di::Provider<crate::db::Pool>"
/// );
/// assert_eq!(kind.raw_wrapper_type().render(), "anvil_di::DynProvider");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NativeWrapperKind {
    /// A synchronous factory: `anvil_di::Provider<T>`, accessor `get()`.
    Provider,
    /// An asynchronous factory: `anvil_di::Producer<T>`, accessor `get()`
    /// yielding a future of the value.
    Producer,
    /// A members injector: `anvil_di::MembersInjector<T>`, injecting into an
    /// already-constructed instance.
    MembersInjector,
}

impl NativeWrapperKind {
    /// The request shape this kind satisfies without any conversion.
    pub fn matching_request(self) -> RequestKind {
        match self {
            NativeWrapperKind::Provider => RequestKind::Provider,
            NativeWrapperKind::Producer => RequestKind::Producer,
            NativeWrapperKind::MembersInjector => RequestKind::MembersInjector,
        }
    }

    /// Name of the precise wrapper type in the runtime crate.
    pub fn wrapper_name(self) -> &'static str {
        match self {
            NativeWrapperKind::Provider => "Provider",
            NativeWrapperKind::Producer => "Producer",
            NativeWrapperKind::MembersInjector => "MembersInjector",
        }
    }

    /// Name of the type-erased wrapper, which names the wrapper kind but not
    /// its parameter.
    pub fn raw_wrapper_name(self) -> &'static str {
        match self {
            NativeWrapperKind::Provider => "DynProvider",
            NativeWrapperKind::Producer => "DynProducer",
            NativeWrapperKind::MembersInjector => "DynMembersInjector",
        }
    }

    /// The precise parameterized wrapper descriptor for a contributed type.
    pub fn wrapper_type(self, contributed: TypeDescriptor) -> TypeDescriptor {
        TypeDescriptor::parameterized(runtime_type(self.wrapper_name()), vec![contributed])
    }

    /// The erased wrapper descriptor, used when the contributed type cannot
    /// be named from the requesting namespace.
    pub fn raw_wrapper_type(self) -> TypeDescriptor {
        TypeDescriptor::simple(runtime_type(self.raw_wrapper_name()))
    }

    /// Suffix of the generated component field backing this kind.
    pub fn field_suffix(self) -> &'static str {
        match self {
            NativeWrapperKind::Provider => "provider",
            NativeWrapperKind::Producer => "producer",
            NativeWrapperKind::MembersInjector => "members_injector",
        }
    }
}

impl fmt::Display for NativeWrapperKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.wrapper_name())
    }
}

/// The shape a specific call site asks a dependency in.
///
/// Chosen by the call site, not by the binding; any request shape may be
/// asked of any binding, though only the combinations with a defined
/// conversion succeed (see [`convert`](crate::convert::convert)).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RequestKind {
    /// The raw value itself, unwrapped from its framework wrapper.
    Instance,
    /// The provider wrapper, matching `Provider`-native bindings.
    Provider,
    /// A memoizing-on-first-access wrapper around a provider.
    Lazy,
    /// The producer wrapper, matching `Producer`-native bindings (or
    /// `Provider` bindings under producer-from-provider adaptation).
    Producer,
    /// The asynchronous result projection of a producer.
    Produced,
    /// The members-injector wrapper.
    MembersInjector,
}

impl fmt::Display for RequestKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            RequestKind::Instance => "Instance",
            RequestKind::Provider => "Provider",
            RequestKind::Lazy => "Lazy",
            RequestKind::Producer => "Producer",
            RequestKind::Produced => "Produced",
            RequestKind::MembersInjector => "MembersInjector",
        };
        f.write_str(name)
    }
}
