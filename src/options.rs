//! Feature-flag configuration for the generator.

/// Options controlling optional code-size optimizations.
///
/// Options are an immutable snapshot fixed before a generation pass starts;
/// they never change resolution *semantics*, only which equivalent code
/// shape is emitted.
///
/// # Examples
///
/// ```rust
/// use anvil_di_codegen::CodegenOptions;
///
/// let options = CodegenOptions::new();
/// assert!(options.static_inlining());
///
/// let options = CodegenOptions::new().with_static_inlining(false);
/// assert!(!options.static_inlining());
/// ```
#[derive(Debug, Clone)]
pub struct CodegenOptions {
    static_inlining: bool,
}

impl CodegenOptions {
    /// Default options: static inlining enabled.
    pub fn new() -> Self {
        Self { static_inlining: true }
    }

    /// Enables or disables static creator references. When disabled, every
    /// binding is materialized behind a component field even if a static
    /// reference would suffice.
    pub fn with_static_inlining(mut self, enabled: bool) -> Self {
        self.static_inlining = enabled;
        self
    }

    /// Whether bindings with no per-instance state may be referenced through
    /// a static creator call instead of a generated field.
    pub fn static_inlining(&self) -> bool {
        self.static_inlining
    }
}

impl Default for CodegenOptions {
    fn default() -> Self {
        Self::new()
    }
}
