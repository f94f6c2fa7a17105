//! Binding expression resolution for one generated unit.
//!
//! [`ComponentBindings`] is the entry point of the synthesis core: it owns
//! the unit's binding registry, artifact, and per-binding field memoizers,
//! and answers "give me an expression for binding B as requested kind K from
//! namespace N".

use std::cell::{Ref, RefCell};
use std::sync::Arc;

use crate::artifact::GeneratedArtifact;
use crate::binding::{Binding, BindingScope};
use crate::convert::convert;
use crate::expression::Expression;
use crate::internal::ice;
use crate::key::BindingKey;
use crate::kind::{NativeWrapperKind, RequestKind};
use crate::member::{static_member_reference, MemberReference};
use crate::memoizer::{FieldInitContext, FrameworkFieldMemoizer};
use crate::observer::{CodegenObserver, Observers};
use crate::options::CodegenOptions;
use crate::traits::{BindingExpression, CreationExpressions, TypeVisibility};
use crate::types::ModulePath;

#[cfg(feature = "ahash")]
type LookupMap<K, V> = ahash::AHashMap<K, V>;
#[cfg(not(feature = "ahash"))]
type LookupMap<K, V> = std::collections::HashMap<K, V>;

// Linear search through a Vec beats hashing for small graphs.
const SMALL_THRESHOLD: usize = 16;

struct BindingEntry {
    binding: Binding,
    memoizer: FrameworkFieldMemoizer,
}

impl BindingEntry {
    fn new(binding: Binding) -> Self {
        Self {
            binding,
            memoizer: FrameworkFieldMemoizer::new(),
        }
    }
}

/// Hybrid binding storage: Vec for the first registrations, HashMap
/// fallback beyond that. Used for keyed lookup only; nothing that reaches
/// the emitted artifact ever iterates it.
struct BindingRegistry {
    one_small: Vec<(BindingKey, BindingEntry)>,
    one_large: LookupMap<BindingKey, BindingEntry>,
}

impl BindingRegistry {
    fn new() -> Self {
        Self {
            one_small: Vec::new(),
            one_large: LookupMap::default(),
        }
    }

    fn insert(&mut self, key: BindingKey, entry: BindingEntry) {
        if let Some(pos) = self.one_small.iter().position(|(k, _)| k == &key) {
            self.one_small[pos] = (key, entry);
        } else if self.one_small.len() < SMALL_THRESHOLD && !self.one_large.contains_key(&key) {
            self.one_small.push((key, entry));
        } else {
            self.one_large.insert(key, entry);
        }
    }

    fn get(&self, key: &BindingKey) -> Option<&BindingEntry> {
        for (k, entry) in &self.one_small {
            if k == key {
                return Some(entry);
            }
        }
        self.one_large.get(key)
    }

    fn iter(&self) -> impl Iterator<Item = &BindingEntry> {
        self.one_small
            .iter()
            .map(|(_, entry)| entry)
            .chain(self.one_large.values())
    }
}

/// Read-only metadata about a registered binding, for diagnostics.
#[derive(Debug, Clone)]
pub struct BindingDescriptor {
    /// The binding's identity key.
    pub key: BindingKey,
    /// The binding's native wrapper kind.
    pub native_kind: NativeWrapperKind,
    /// The binding's scope.
    pub scope: BindingScope,
    /// Whether the binding qualifies for a static creator reference.
    pub static_eligible: bool,
    /// Whether a field has been materialized for the binding so far.
    pub materialized: bool,
}

/// Binding expression resolver for one generated unit.
///
/// Bindings are registered up front from the resolved graph; resolution then
/// runs single-threaded over the unit, appending to the artifact through the
/// per-binding memoizers. The order in which distinct bindings are first
/// memoized fixes the emitted field order and is reproducible across runs.
///
/// # Examples
///
/// ```rust
/// use anvil_di_codegen::{
///     AllVisible, Binding, BindingKey, ComponentBindings, Expression,
///     ModulePath, NativeWrapperKind, RequestKind, TypeDescriptor, TypePath,
/// };
/// use std::sync::Arc;
///
/// let ns = ModulePath::parse("crate::app");
/// let pool = TypePath::parse("crate::app::Pool");
/// let key = BindingKey::Type(pool.clone());
///
/// let creations = Arc::new(
///     |binding: &Binding, _adapted: bool, _component: &ComponentBindings| {
///         Expression::new(
///             binding.native_kind().wrapper_type(binding.contributed_type().clone()),
///             format!("{}::new()", binding.factory_path()),
///         )
///     },
/// );
///
/// let mut component =
///     ComponentBindings::new("AppComponent", ns.clone(), Arc::new(AllVisible), creations);
/// component.add_binding(
///     Binding::new(key.clone(), TypeDescriptor::simple(pool), NativeWrapperKind::Provider)
///         .scoped(),
/// );
///
/// let provider = component.expression(&key, RequestKind::Provider, &ns);
/// assert_eq!(provider.code(), "self.pool_provider");
///
/// let instance = component.expression(&key, RequestKind::Instance, &ns);
/// assert_eq!(instance.code(), "self.pool_provider.get()");
/// assert_eq!(instance.ty().render(), "crate::app::Pool");
///
/// // Two requests, one field, one initializer.
/// let artifact = component.finish();
/// assert_eq!(artifact.fields().len(), 1);
/// assert_eq!(
///     artifact.initializations(),
///     ["self.pool_provider = crate::app::PoolFactory::new();"]
/// );
/// ```
pub struct ComponentBindings {
    registry: BindingRegistry,
    artifact: RefCell<GeneratedArtifact>,
    oracle: Arc<dyn TypeVisibility>,
    creations: Arc<dyn CreationExpressions>,
    options: CodegenOptions,
    observers: Observers,
}

impl ComponentBindings {
    /// Creates a resolver for a generated unit living in `namespace`.
    pub fn new(
        unit_name: impl Into<String>,
        namespace: ModulePath,
        oracle: Arc<dyn TypeVisibility>,
        creations: Arc<dyn CreationExpressions>,
    ) -> Self {
        Self {
            registry: BindingRegistry::new(),
            artifact: RefCell::new(GeneratedArtifact::new(unit_name, namespace)),
            oracle,
            creations,
            options: CodegenOptions::new(),
            observers: Observers::new(),
        }
    }

    /// Replaces the generation options.
    pub fn with_options(mut self, options: CodegenOptions) -> Self {
        self.options = options;
        self
    }

    /// Registers an observer of generation events.
    pub fn add_observer(&mut self, observer: Arc<dyn CodegenObserver>) {
        self.observers.add(observer);
    }

    /// Registers a resolved binding. Re-registering a key replaces the
    /// earlier binding.
    pub fn add_binding(&mut self, binding: Binding) {
        let key = binding.key().clone();
        self.registry.insert(key, BindingEntry::new(binding));
    }

    /// The expression satisfying a request for `key`'s value as `requested`
    /// from `namespace`.
    pub fn expression(
        &self,
        key: &BindingKey,
        requested: RequestKind,
        namespace: &ModulePath,
    ) -> Expression {
        self.expression_internal(key, requested, namespace, false)
    }

    /// Like [`expression`](Self::expression), with the binding adapted to
    /// behave as a producer for consumption from an async context.
    ///
    /// Legal only for `Provider`-native bindings; anything else is a caller
    /// contract violation and aborts generation before any artifact
    /// mutation.
    pub fn producer_expression_from_provider(
        &self,
        key: &BindingKey,
        requested: RequestKind,
        namespace: &ModulePath,
    ) -> Expression {
        self.expression_internal(key, requested, namespace, true)
    }

    fn expression_internal(
        &self,
        key: &BindingKey,
        requested: RequestKind,
        namespace: &ModulePath,
        producer_from_provider: bool,
    ) -> Expression {
        let entry = self.registry.get(key).unwrap_or_else(|| {
            ice::unknown_binding(format!("{} is not part of the resolved graph", key))
        });
        let strategy = FrameworkInstanceBindings::create(self, entry, producer_from_provider);
        let expression = strategy.dependency_expression(requested, namespace);
        self.observers.expression_resolved(key, requested);
        expression
    }

    /// Read-only metadata for every registered binding, ordered by key.
    pub fn descriptors(&self) -> Vec<BindingDescriptor> {
        let mut descriptors: Vec<BindingDescriptor> = self
            .registry
            .iter()
            .map(|entry| BindingDescriptor {
                key: entry.binding.key().clone(),
                native_kind: entry.binding.native_kind(),
                scope: entry.binding.scope(),
                static_eligible: entry.binding.is_static_eligible(),
                materialized: entry.memoizer.is_initialized(),
            })
            .collect();
        descriptors.sort_by(|a, b| a.key.cmp(&b.key));
        descriptors
    }

    /// Read view of the artifact accumulated so far.
    pub fn artifact(&self) -> Ref<'_, GeneratedArtifact> {
        self.artifact.borrow()
    }

    /// Consumes the resolver, yielding the accumulated artifact for textual
    /// serialization by the surrounding emitter.
    pub fn finish(self) -> GeneratedArtifact {
        self.artifact.into_inner()
    }

    pub(crate) fn artifact_cell(&self) -> &RefCell<GeneratedArtifact> {
        &self.artifact
    }

    pub(crate) fn oracle(&self) -> &dyn TypeVisibility {
        &*self.oracle
    }

    pub(crate) fn creations(&self) -> &dyn CreationExpressions {
        &*self.creations
    }

    pub(crate) fn observers(&self) -> &Observers {
        &self.observers
    }
}

/// Strategy for bindings backed by a framework wrapper instance.
struct FrameworkInstanceBindings<'a> {
    component: &'a ComponentBindings,
    entry: &'a BindingEntry,
    producer_from_provider: bool,
    effective_kind: NativeWrapperKind,
}

impl<'a> FrameworkInstanceBindings<'a> {
    fn create(
        component: &'a ComponentBindings,
        entry: &'a BindingEntry,
        producer_from_provider: bool,
    ) -> Self {
        let native_kind = entry.binding.native_kind();
        if producer_from_provider && native_kind != NativeWrapperKind::Provider {
            ice::precondition(format!(
                "producer-from-provider adaptation requested for the {}-native binding {}",
                native_kind,
                entry.binding.key(),
            ));
        }
        let effective_kind = if producer_from_provider {
            NativeWrapperKind::Producer
        } else {
            native_kind
        };
        Self {
            component,
            entry,
            producer_from_provider,
            effective_kind,
        }
    }

    /// The access path to the framework instance: a static creator when the
    /// binding has no per-instance state and no adaptation is in force, the
    /// memoized field otherwise.
    fn member_reference(&self) -> MemberReference {
        if !self.producer_from_provider {
            if let Some(member) =
                static_member_reference(&self.entry.binding, &self.component.options)
            {
                self.component
                    .observers
                    .static_bypass(self.entry.binding.key());
                return member;
            }
        }
        self.entry.memoizer.get_or_create(FieldInitContext {
            binding: &self.entry.binding,
            effective_kind: self.effective_kind,
            adapted: self.producer_from_provider,
            component: self.component,
        })
    }
}

impl BindingExpression for FrameworkInstanceBindings<'_> {
    fn dependency_expression(&self, requested: RequestKind, namespace: &ModulePath) -> Expression {
        let binding = &self.entry.binding;
        if requested == self.effective_kind.matching_request() {
            let member = self.member_reference();
            let contributed = binding.contributed_type();
            // The precise parameterized wrapper is emitted when the
            // contributed type can be named at the use site, or when the
            // reference is an inline static creation whose return type the
            // compiler infers transitively.
            let ty = if self.component.oracle.is_accessible(contributed.path(), namespace)
                || member.is_static()
            {
                self.effective_kind.wrapper_type(contributed.clone())
            } else {
                self.effective_kind.raw_wrapper_type()
            };
            return Expression::new(ty, member.expression());
        }

        // Composite request: obtain the expression for the native shape
        // first, then wrap it. A Lazy expression, for example, is a
        // memoizing wrapper around the Provider expression.
        let native = self.component.expression_internal(
            binding.key(),
            self.effective_kind.matching_request(),
            namespace,
            self.producer_from_provider,
        );
        convert(native, self.effective_kind, requested)
    }
}
