//! Binding identity keys.

use std::fmt;

use crate::types::TypePath;

/// Identity of a binding within one resolved dependency graph.
///
/// Keys are supplied by upstream graph resolution and are stable for the
/// lifetime of one compilation unit. Ordering and hashing are derived from
/// the path text, so keyed lookups never depend on pointer identity or
/// insertion accidents.
///
/// # Key Types
///
/// - **Type**: a plain contributed type
/// - **Qualified**: a contributed type distinguished by a qualifier
///   annotation, for graphs binding one type several ways
/// - **MembersInjection**: the members-injector binding for a type
///
/// # Examples
///
/// ```rust
/// use anvil_di_codegen::{BindingKey, TypePath};
///
/// let plain = BindingKey::Type(TypePath::parse("crate::db::Pool"));
/// assert_eq!(plain.display_name(), "crate::db::Pool");
/// assert_eq!(plain.qualifier(), None);
///
/// let qualified = BindingKey::Qualified(
///     TypePath::parse("crate::db::Pool"),
///     "replica".to_string(),
/// );
/// assert_eq!(qualified.display_name(), "@replica crate::db::Pool");
/// assert_eq!(qualified.qualifier(), Some("replica"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum BindingKey {
    /// A plain contributed type.
    Type(TypePath),
    /// A contributed type plus a qualifier annotation.
    Qualified(TypePath, String),
    /// The members-injection binding for a type.
    MembersInjection(TypePath),
}

impl BindingKey {
    /// The contributed (or injected) type's path.
    pub fn type_path(&self) -> &TypePath {
        match self {
            BindingKey::Type(path) => path,
            BindingKey::Qualified(path, _) => path,
            BindingKey::MembersInjection(path) => path,
        }
    }

    /// The qualifier annotation for qualified keys, `None` otherwise.
    pub fn qualifier(&self) -> Option<&str> {
        match self {
            BindingKey::Qualified(_, qualifier) => Some(qualifier),
            BindingKey::Type(_) | BindingKey::MembersInjection(_) => None,
        }
    }

    /// Human-readable form for diagnostics.
    pub fn display_name(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for BindingKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BindingKey::Type(path) => write!(f, "{}", path),
            BindingKey::Qualified(path, qualifier) => write!(f, "@{} {}", qualifier, path),
            BindingKey::MembersInjection(path) => write!(f, "members injection of {}", path),
        }
    }
}
