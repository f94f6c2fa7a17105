//! Error types for the code generation core.

use std::fmt;
use std::panic::{self, AssertUnwindSafe};

use crate::internal::{IceKind, IcePayload};

/// Internal compiler diagnostics produced when a generation run aborts.
///
/// Both classes of failure at this layer are defects (in upstream graph
/// construction or in this crate's own enumeration handling), never user
/// input validation. There is no recoverable path and no retry: resolution
/// is a pure function of already-validated graph state.
///
/// # Examples
///
/// ```rust
/// use anvil_di_codegen::CodegenError;
///
/// let error = CodegenError::UnknownBinding("crate::db::Pool".to_string());
/// assert_eq!(
///     error.to_string(),
///     "internal error: unknown binding: crate::db::Pool"
/// );
/// ```
#[derive(Debug, Clone)]
pub enum CodegenError {
    /// A caller broke a documented contract before resolution began.
    Precondition(String),
    /// A kind combination with no defined handling was reached.
    UnreachableKind(String),
    /// A binding key outside the resolved graph was requested.
    UnknownBinding(String),
    /// A binding's initializer re-requested its own framework field.
    ReentrantInitialization(String),
}

impl fmt::Display for CodegenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CodegenError::Precondition(msg) => {
                write!(f, "internal error: precondition violated: {}", msg)
            }
            CodegenError::UnreachableKind(msg) => {
                write!(f, "internal error: unreachable kind state: {}", msg)
            }
            CodegenError::UnknownBinding(msg) => {
                write!(f, "internal error: unknown binding: {}", msg)
            }
            CodegenError::ReentrantInitialization(msg) => {
                write!(f, "internal error: re-entrant initialization: {}", msg)
            }
        }
    }
}

impl std::error::Error for CodegenError {}

impl From<IcePayload> for CodegenError {
    fn from(payload: IcePayload) -> Self {
        match payload.kind {
            IceKind::Precondition => CodegenError::Precondition(payload.message),
            IceKind::Unreachable => CodegenError::UnreachableKind(payload.message),
            IceKind::UnknownBinding => CodegenError::UnknownBinding(payload.message),
            IceKind::ReentrantInitialization => {
                CodegenError::ReentrantInitialization(payload.message)
            }
        }
    }
}

/// Result type for generation-run boundaries.
pub type CodegenResult<T> = Result<T, CodegenError>;

/// Runs a generation closure, converting an internal-compiler abort into a
/// [`CodegenError`] diagnostic.
///
/// Only this crate's typed abort payloads are caught; any other panic is
/// resumed untouched.
///
/// # Examples
///
/// ```rust
/// use anvil_di_codegen::catch_internal_errors;
///
/// let ok = catch_internal_errors(|| 21 * 2);
/// assert_eq!(ok.unwrap(), 42);
/// ```
pub fn catch_internal_errors<T, F>(f: F) -> CodegenResult<T>
where
    F: FnOnce() -> T,
{
    match panic::catch_unwind(AssertUnwindSafe(f)) {
        Ok(value) => Ok(value),
        Err(payload) => match payload.downcast::<IcePayload>() {
            Ok(ice) => Err(CodegenError::from(*ice)),
            Err(payload) => panic::resume_unwind(payload),
        },
    }
}
