//! Diagnostic observers for generation traceability.
//!
//! Hooks for observing resolution and field-allocation events during a
//! generation pass, useful for debugging which request first materialized a
//! binding and which bindings were served statically.

use std::sync::Arc;

use crate::key::BindingKey;
use crate::kind::RequestKind;

/// Observer of code generation events.
///
/// All hooks default to no-ops, so implementors override only the events
/// they care about.
///
/// # Examples
///
/// ```rust
/// use anvil_di_codegen::{BindingKey, CodegenObserver, RequestKind};
/// use std::sync::{Arc, Mutex};
///
/// #[derive(Default)]
/// struct FieldRecorder(Mutex<Vec<String>>);
///
/// impl CodegenObserver for FieldRecorder {
///     fn field_allocated(&self, _key: &BindingKey, field: &str) {
///         self.0.lock().unwrap().push(field.to_string());
///     }
/// }
/// ```
pub trait CodegenObserver: Send + Sync {
    /// A framework field and its initializer were appended for a binding.
    fn field_allocated(&self, _key: &BindingKey, _field: &str) {}

    /// A dependency expression was resolved for a request.
    fn expression_resolved(&self, _key: &BindingKey, _requested: RequestKind) {}

    /// A binding was served through a static creator reference, bypassing
    /// field allocation.
    fn static_bypass(&self, _key: &BindingKey) {}
}

/// Observer that prints generation events to stdout.
pub struct LoggingObserver {
    prefix: String,
}

impl LoggingObserver {
    /// Creates a logging observer with the default `[anvil-di]` prefix.
    pub fn new() -> Self {
        Self::with_prefix("[anvil-di]")
    }

    /// Creates a logging observer with a custom line prefix.
    pub fn with_prefix(prefix: impl Into<String>) -> Self {
        Self { prefix: prefix.into() }
    }
}

impl Default for LoggingObserver {
    fn default() -> Self {
        Self::new()
    }
}

impl CodegenObserver for LoggingObserver {
    fn field_allocated(&self, key: &BindingKey, field: &str) {
        println!("{} Field allocated: {} for {}", self.prefix, field, key);
    }

    fn expression_resolved(&self, key: &BindingKey, requested: RequestKind) {
        println!("{} Resolved: {} as {}", self.prefix, key, requested);
    }

    fn static_bypass(&self, key: &BindingKey) {
        println!("{} Static bypass: {}", self.prefix, key);
    }
}

/// Fan-out collection of observers.
pub(crate) struct Observers {
    observers: Vec<Arc<dyn CodegenObserver>>,
}

impl Observers {
    pub(crate) fn new() -> Self {
        Self { observers: Vec::new() }
    }

    pub(crate) fn add(&mut self, observer: Arc<dyn CodegenObserver>) {
        self.observers.push(observer);
    }

    #[inline]
    pub(crate) fn field_allocated(&self, key: &BindingKey, field: &str) {
        for observer in &self.observers {
            observer.field_allocated(key, field);
        }
    }

    #[inline]
    pub(crate) fn expression_resolved(&self, key: &BindingKey, requested: RequestKind) {
        for observer in &self.observers {
            observer.expression_resolved(key, requested);
        }
    }

    #[inline]
    pub(crate) fn static_bypass(&self, key: &BindingKey) {
        for observer in &self.observers {
            observer.static_bypass(key);
        }
    }
}
