use crate::{
    inspect::MemberInspector,
    synth::{
        Outcome,
        field::{CREATED, UPDATED},
        markers::Lifecycle,
        naming::hook_name,
    },
    trace::SkipReason,
};
use stamp_config::{HookShape, MemberNaming};
use stamp_schema::node::{MetadataId, MethodDecl, Statement};

///
/// HookSpec
///
/// One lifecycle hook to synthesize: its name, the events it runs on and the
/// body that populates the timestamp fields.
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct HookSpec {
    pub name: String,
    pub lifecycle: Vec<Lifecycle>,
    pub body: Vec<Statement>,
}

impl HookSpec {
    /// The hooks of one shape, in emission order.
    #[must_use]
    pub fn for_shape(shape: HookShape, naming: MemberNaming) -> Vec<Self> {
        match shape {
            HookShape::Combined => vec![Self {
                name: hook_name(naming, "update"),
                lifecycle: vec![Lifecycle::PrePersist, Lifecycle::PreUpdate],
                body: vec![
                    Statement::AssignNowIfUnset {
                        field: CREATED.to_string(),
                    },
                    Statement::AssignNow {
                        field: UPDATED.to_string(),
                    },
                ],
            }],
            HookShape::Split => vec![
                Self {
                    name: hook_name(naming, "create"),
                    lifecycle: vec![Lifecycle::PrePersist],
                    body: vec![Statement::AssignNow {
                        field: CREATED.to_string(),
                    }],
                },
                Self {
                    name: hook_name(naming, "update"),
                    lifecycle: vec![Lifecycle::PreUpdate],
                    body: vec![Statement::AssignNow {
                        field: UPDATED.to_string(),
                    }],
                },
            ],
        }
    }
}

/// A public, parameterless, void hook, or `None` when any declared method
/// already has the name. Parameters are not compared.
#[must_use]
pub fn synthesize_hook(
    id: &MetadataId,
    hook: &HookSpec,
    inspector: &MemberInspector<'_>,
) -> Option<MethodDecl> {
    plan_hook(id, hook, inspector).into_emitted()
}

pub(crate) fn plan_hook(id: &MetadataId, hook: &HookSpec, inspector: &MemberInspector<'_>) -> Outcome {
    if inspector.has_method(&hook.name) {
        return Outcome::Skip {
            name: hook.name.clone(),
            reason: SkipReason::AlreadyDeclared,
        };
    }

    let mut method = MethodDecl::new(&hook.name);
    method.origin = Some(id.clone());
    method.annotations = hook.lifecycle.iter().copied().map(Lifecycle::marker).collect();
    method.body.clone_from(&hook.body);

    Outcome::Emit(method)
}
