//! Framework field memoizer.
//!
//! One memoizer exists per (binding, generated unit). The first expression
//! request for a binding allocates its field and initialization statement in
//! the unit's artifact; every later request returns the same reference with
//! no artifact mutation, regardless of the requested kind.

use std::cell::RefCell;

use crate::binding::Binding;
use crate::component::ComponentBindings;
use crate::internal::ice;
use crate::kind::NativeWrapperKind;
use crate::member::MemberReference;

/// Everything the memoizer needs to materialize a field on first request.
pub(crate) struct FieldInitContext<'a> {
    pub(crate) binding: &'a Binding,
    pub(crate) effective_kind: NativeWrapperKind,
    pub(crate) adapted: bool,
    pub(crate) component: &'a ComponentBindings,
}

enum FieldState {
    Uninitialized,
    // Transient guard: the initializer for this binding is currently being
    // computed. Reaching it again means the initializer re-requested its own
    // field, a cycle the upstream graph should have rejected.
    Initializing,
    Initialized {
        member: MemberReference,
        adapted: bool,
    },
}

/// Get-or-create cache for one binding's framework field.
///
/// Lifecycle: `Uninitialized` transitions to `Initialized` exactly once, on
/// the first request; re-filling is disallowed by construction. The cached
/// [`MemberReference`] is stable for the lifetime of generation.
pub(crate) struct FrameworkFieldMemoizer {
    state: RefCell<FieldState>,
}

impl FrameworkFieldMemoizer {
    pub(crate) fn new() -> Self {
        Self {
            state: RefCell::new(FieldState::Uninitialized),
        }
    }

    pub(crate) fn is_initialized(&self) -> bool {
        matches!(&*self.state.borrow(), FieldState::Initialized { .. })
    }

    /// Returns the cached member reference, materializing the field on the
    /// first request.
    ///
    /// The producer-from-provider adaptation in force at first request fixes
    /// the field's wrapper form; a later request for the other form is a
    /// caller contract violation and aborts generation.
    pub(crate) fn get_or_create(&self, ctx: FieldInitContext<'_>) -> MemberReference {
        {
            let state = self.state.borrow();
            match &*state {
                FieldState::Initialized { member, adapted } => {
                    if *adapted != ctx.adapted {
                        ice::precondition(format!(
                            "binding {} was materialized {} producer-from-provider adaptation \
                             and is now requested {} it",
                            ctx.binding.key(),
                            if *adapted { "with" } else { "without" },
                            if ctx.adapted { "with" } else { "without" },
                        ));
                    }
                    return member.clone();
                }
                FieldState::Initializing => ice::reentrant_initialization(format!(
                    "binding {} requested its own framework field while its initializer \
                     was being computed",
                    ctx.binding.key(),
                )),
                FieldState::Uninitialized => {}
            }
        }

        *self.state.borrow_mut() = FieldState::Initializing;
        let member = initialize(&ctx);
        *self.state.borrow_mut() = FieldState::Initialized {
            member: member.clone(),
            adapted: ctx.adapted,
        };
        member
    }
}

/// Appends exactly one field declaration and one initialization statement to
/// the artifact and returns the field-backed reference.
fn initialize(ctx: &FieldInitContext<'_>) -> MemberReference {
    let binding = ctx.binding;
    let contributed = binding.contributed_type();
    let artifact = ctx.component.artifact_cell();

    // The field's declared type is resolved against the unit's own
    // namespace; per-request precision is decided later by the resolver.
    let ty = {
        let artifact = artifact.borrow();
        if ctx
            .component
            .oracle()
            .is_accessible(contributed.path(), artifact.namespace())
        {
            ctx.effective_kind.wrapper_type(contributed.clone())
        } else {
            ctx.effective_kind.raw_wrapper_type()
        }
    };

    let name = artifact
        .borrow_mut()
        .field_name_for(contributed.path().name(), ctx.effective_kind.field_suffix());

    // No artifact borrow may be live here: the creation expression resolves
    // the binding's dependencies, which can materialize other fields.
    let creation = ctx
        .component
        .creations()
        .creation_expression(binding, ctx.adapted, ctx.component);

    {
        let mut artifact = artifact.borrow_mut();
        artifact.add_field(name.clone(), ty.clone());
        artifact.add_initialization(format!("self.{} = {};", name, creation.code()));
    }
    ctx.component.observers().field_allocated(binding.key(), &name);

    MemberReference::Field { name, ty }
}
