//! Namespace and type descriptors for emitted code.
//!
//! The generator never holds live Rust types; it works on *descriptors* of
//! the types that will appear in generated source. A [`ModulePath`] names the
//! namespace a request comes from, a [`TypePath`] names a single type, and a
//! [`TypeDescriptor`] is a possibly-parameterized type as it will be written
//! into the output (`anvil_di::Provider<crate::db::Pool>`).

use std::fmt;

#[cfg(feature = "smallvec")]
use smallvec::SmallVec;

// Wrapper descriptors carry at most one parameter, so the argument list is a
// prime candidate for inline storage.
#[cfg(feature = "smallvec")]
pub(crate) type ArgList = SmallVec<[TypeDescriptor; 2]>;
#[cfg(not(feature = "smallvec"))]
pub(crate) type ArgList = Vec<TypeDescriptor>;

/// A `::`-separated module namespace, such as `crate::db`.
///
/// Used both as the location a dependency request is made from and as the
/// namespace a generated unit lives in. Purely syntactic; whether a type is
/// visible from a namespace is answered by the
/// [`TypeVisibility`](crate::TypeVisibility) oracle.
///
/// # Examples
///
/// ```rust
/// use anvil_di_codegen::ModulePath;
///
/// let ns = ModulePath::parse("crate::db");
/// assert_eq!(ns.segments(), ["crate", "db"]);
/// assert_eq!(ns.to_string(), "crate::db");
/// assert_eq!(ns, ModulePath::new(["crate", "db"]));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ModulePath {
    segments: Vec<String>,
}

impl ModulePath {
    /// Builds a path from individual segments.
    pub fn new<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            segments: segments.into_iter().map(Into::into).collect(),
        }
    }

    /// Parses a `::`-separated path. An empty string yields the root path.
    pub fn parse(path: &str) -> Self {
        if path.is_empty() {
            return Self { segments: Vec::new() };
        }
        Self::new(path.split("::"))
    }

    /// The path segments in order.
    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// True for the root (empty) path.
    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }
}

impl fmt::Display for ModulePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.segments.join("::"))
    }
}

/// A fully-qualified type name: a [`ModulePath`] plus the type's own name.
///
/// # Examples
///
/// ```rust
/// use anvil_di_codegen::{ModulePath, TypePath};
///
/// let pool = TypePath::parse("crate::db::Pool");
/// assert_eq!(pool.name(), "Pool");
/// assert_eq!(pool.module(), &ModulePath::parse("crate::db"));
/// assert_eq!(pool.to_string(), "crate::db::Pool");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TypePath {
    module: ModulePath,
    name: String,
}

impl TypePath {
    /// Builds a type path from a module and a type name.
    pub fn new(module: ModulePath, name: impl Into<String>) -> Self {
        Self { module, name: name.into() }
    }

    /// Parses a `::`-separated path; the final segment is the type name.
    pub fn parse(path: &str) -> Self {
        let mut segments: Vec<&str> = path.split("::").collect();
        let name = segments.pop().unwrap_or_default().to_string();
        Self {
            module: ModulePath::new(segments),
            name,
        }
    }

    /// The module the type is declared in.
    pub fn module(&self) -> &ModulePath {
        &self.module
    }

    /// The type's own name, without the module prefix.
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for TypePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.module.is_root() {
            write!(f, "{}", self.name)
        } else {
            write!(f, "{}::{}", self.module, self.name)
        }
    }
}

/// A type as it will be written into generated source, with any generic
/// arguments.
///
/// Wrapper descriptors produced by this crate carry either exactly one
/// argument (the *precise* parameterized form, `anvil_di::Provider<T>`) or
/// none (the *erased* form, `anvil_di::DynProvider`, used when the parameter
/// cannot be named from the requesting namespace).
///
/// # Examples
///
/// ```rust
/// use anvil_di_codegen::{TypeDescriptor, TypePath};
///
/// let pool = TypeDescriptor::simple(TypePath::parse("crate::db::Pool"));
/// let provider = TypeDescriptor::parameterized(
///     TypePath::parse("anvil_di::Provider"),
///     vec![pool.clone()],
/// );
/// assert_eq!(provider.render(), "anvil_di::Provider<crate::db::Pool>");
/// assert_eq!(provider.type_arg(), Some(&pool));
/// assert_eq!(pool.type_arg(), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TypeDescriptor {
    path: TypePath,
    args: ArgList,
}

impl TypeDescriptor {
    /// A type with no generic arguments.
    pub fn simple(path: TypePath) -> Self {
        Self { path, args: ArgList::new() }
    }

    /// A type applied to the given generic arguments.
    pub fn parameterized(path: TypePath, args: Vec<TypeDescriptor>) -> Self {
        Self {
            path,
            args: args.into_iter().collect(),
        }
    }

    /// The emitted type of a value unwrapped from an erased wrapper, which
    /// cannot name the contributed type.
    pub fn erased_value() -> Self {
        Self::simple(TypePath::parse("anvil_di::DynValue"))
    }

    /// The type's path, without arguments.
    pub fn path(&self) -> &TypePath {
        &self.path
    }

    /// The generic arguments in order.
    pub fn args(&self) -> &[TypeDescriptor] {
        &self.args
    }

    /// The single wrapper parameter, when there is exactly one argument.
    pub fn type_arg(&self) -> Option<&TypeDescriptor> {
        match self.args.as_slice() {
            [arg] => Some(arg),
            _ => None,
        }
    }

    /// Renders the type as it will appear in generated source.
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for TypeDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.path)?;
        if !self.args.is_empty() {
            write!(f, "<")?;
            for (i, arg) in self.args.iter().enumerate() {
                if i > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{}", arg)?;
            }
            write!(f, ">")?;
        }
        Ok(())
    }
}
