//! Generated unit accumulator.

use std::collections::HashSet;

use crate::internal::names;
use crate::types::{ModulePath, TypeDescriptor};

/// A field declaration in the generated unit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldSpec {
    name: String,
    ty: TypeDescriptor,
}

impl FieldSpec {
    /// The field's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The field's declared type.
    pub fn ty(&self) -> &TypeDescriptor {
        &self.ty
    }
}

/// Append-only accumulator of field declarations and initialization
/// statements for one generated unit.
///
/// The artifact has a single logical owner, the generation pass for its
/// unit, and is mutated only by the field memoizer, only via append.
/// Mutations are order-preserving and never retracted: the order in which
/// distinct bindings first request memoization is the order fields and
/// initializers are emitted in, and it is reproducible across runs over the
/// same graph with the same request order.
///
/// # Examples
///
/// ```rust
/// use anvil_di_codegen::{GeneratedArtifact, ModulePath};
///
/// let artifact = GeneratedArtifact::new("AppComponent", ModulePath::parse("crate::app"));
/// assert_eq!(artifact.unit_name(), "AppComponent");
/// assert!(artifact.fields().is_empty());
/// assert!(artifact.initializations().is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedArtifact {
    unit_name: String,
    namespace: ModulePath,
    fields: Vec<FieldSpec>,
    initializations: Vec<String>,
    used_names: HashSet<String>,
}

impl GeneratedArtifact {
    /// Creates an empty artifact for a generated unit living in the given
    /// namespace.
    pub fn new(unit_name: impl Into<String>, namespace: ModulePath) -> Self {
        Self {
            unit_name: unit_name.into(),
            namespace,
            fields: Vec::new(),
            initializations: Vec::new(),
            used_names: HashSet::new(),
        }
    }

    /// The generated unit's type name.
    pub fn unit_name(&self) -> &str {
        &self.unit_name
    }

    /// The namespace the generated unit lives in.
    pub fn namespace(&self) -> &ModulePath {
        &self.namespace
    }

    /// Field declarations in first-request order.
    pub fn fields(&self) -> &[FieldSpec] {
        &self.fields
    }

    /// Initialization statements in first-request order.
    pub fn initializations(&self) -> &[String] {
        &self.initializations
    }

    /// Claims a unique field name derived from `base`, appending a numeric
    /// suffix on collision (`pool_provider`, `pool_provider2`, ...).
    pub(crate) fn unique_field_name(&mut self, base: &str) -> String {
        let mut candidate = base.to_string();
        let mut n = 1usize;
        while self.used_names.contains(&candidate) {
            n += 1;
            candidate = format!("{}{}", base, n);
        }
        self.used_names.insert(candidate.clone());
        candidate
    }

    pub(crate) fn field_name_for(&mut self, type_name: &str, suffix: &str) -> String {
        let base = names::field_base_name(type_name, suffix);
        self.unique_field_name(&base)
    }

    pub(crate) fn add_field(&mut self, name: impl Into<String>, ty: TypeDescriptor) {
        let name = name.into();
        self.used_names.insert(name.clone());
        self.fields.push(FieldSpec { name, ty });
    }

    pub(crate) fn add_initialization(&mut self, statement: impl Into<String>) {
        self.initializations.push(statement.into());
    }

    /// Plain-text preview of the accumulated fields and initializers.
    #[cfg(feature = "diagnostics")]
    pub fn render_preview(&self) -> String {
        use std::fmt::Write as _;

        let mut out = String::new();
        let _ = writeln!(out, "// {} ({})", self.unit_name, self.namespace);
        for field in &self.fields {
            let _ = writeln!(out, "{}: {},", field.name, field.ty);
        }
        for statement in &self.initializations {
            let _ = writeln!(out, "{}", statement);
        }
        out
    }
}

#[cfg(feature = "artifact-export")]
mod export {
    use serde::Serialize;

    use super::GeneratedArtifact;

    /// Serializable snapshot of a [`GeneratedArtifact`] for tooling.
    #[derive(Debug, Clone, Serialize)]
    pub struct ArtifactDump {
        /// The generated unit's type name.
        pub unit_name: String,
        /// The namespace the unit lives in.
        pub namespace: String,
        /// Field declarations as `(name, rendered type)` records.
        pub fields: Vec<FieldDump>,
        /// Initialization statements in emission order.
        pub initializations: Vec<String>,
    }

    /// One field declaration in an [`ArtifactDump`].
    #[derive(Debug, Clone, Serialize)]
    pub struct FieldDump {
        /// The field's name.
        pub name: String,
        /// The rendered field type.
        pub ty: String,
    }

    impl GeneratedArtifact {
        /// Snapshot of the artifact with all types rendered to strings.
        pub fn dump(&self) -> ArtifactDump {
            ArtifactDump {
                unit_name: self.unit_name.clone(),
                namespace: self.namespace.to_string(),
                fields: self
                    .fields
                    .iter()
                    .map(|f| FieldDump {
                        name: f.name.clone(),
                        ty: f.ty.render(),
                    })
                    .collect(),
                initializations: self.initializations.clone(),
            }
        }

        /// Serializes the artifact snapshot as JSON.
        pub fn to_json(&self) -> serde_json::Result<String> {
            serde_json::to_string_pretty(&self.dump())
        }
    }
}

#[cfg(feature = "artifact-export")]
pub use export::{ArtifactDump, FieldDump};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::TypePath;

    #[test]
    fn unique_field_name_appends_numeric_suffix() {
        let mut artifact = GeneratedArtifact::new("C", ModulePath::parse("crate"));
        assert_eq!(artifact.unique_field_name("pool_provider"), "pool_provider");
        assert_eq!(artifact.unique_field_name("pool_provider"), "pool_provider2");
        assert_eq!(artifact.unique_field_name("pool_provider"), "pool_provider3");
    }

    #[test]
    fn appends_preserve_order() {
        let mut artifact = GeneratedArtifact::new("C", ModulePath::parse("crate"));
        let ty = TypeDescriptor::simple(TypePath::parse("anvil_di::DynProvider"));
        artifact.add_field("a_provider", ty.clone());
        artifact.add_field("b_provider", ty);
        artifact.add_initialization("self.a_provider = A;");
        artifact.add_initialization("self.b_provider = B;");
        let names: Vec<_> = artifact.fields().iter().map(FieldSpec::name).collect();
        assert_eq!(names, ["a_provider", "b_provider"]);
        assert_eq!(
            artifact.initializations(),
            ["self.a_provider = A;", "self.b_provider = B;"]
        );
    }
}
