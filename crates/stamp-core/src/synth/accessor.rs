use crate::{
    inspect::MemberInspector,
    synth::{
        Outcome,
        naming::{getter_name, setter_name},
    },
    trace::{MemberKind, SkipReason},
};
use stamp_config::MemberNaming;
use stamp_schema::node::{FieldDecl, Modifiers, MetadataId, MethodDecl, Statement};

///
/// AccessorKind
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum AccessorKind {
    Getter,
    Setter,
}

impl AccessorKind {
    /// The derived method name for `field`.
    #[must_use]
    pub fn method_name(self, naming: MemberNaming, field: &str) -> String {
        match self {
            Self::Getter => getter_name(naming, field),
            Self::Setter => setter_name(naming, field),
        }
    }

    pub(crate) const fn member_kind(self) -> MemberKind {
        match self {
            Self::Getter => MemberKind::Getter,
            Self::Setter => MemberKind::Setter,
        }
    }

    const fn allowed_by(self, modifiers: Modifiers) -> bool {
        match self {
            Self::Getter => modifiers.allows_getter(),
            Self::Setter => modifiers.allows_setter(),
        }
    }
}

/// A getter or setter for `field`, or `None` when the user already declared it
/// or the field's modifiers rule it out.
///
/// Getters match declared methods by name alone; setters match name plus a
/// single parameter of the field's type.
#[must_use]
pub fn synthesize_accessor(
    id: &MetadataId,
    field: &FieldDecl,
    kind: AccessorKind,
    naming: MemberNaming,
    inspector: &MemberInspector<'_>,
) -> Option<MethodDecl> {
    plan_accessor(id, field, kind, naming, inspector).into_emitted()
}

pub(crate) fn plan_accessor(
    id: &MetadataId,
    field: &FieldDecl,
    kind: AccessorKind,
    naming: MemberNaming,
    inspector: &MemberInspector<'_>,
) -> Outcome {
    let name = kind.method_name(naming, &field.name);

    if !kind.allowed_by(field.modifiers) {
        return Outcome::Skip {
            name,
            reason: SkipReason::Modifiers,
        };
    }

    let declared = match kind {
        AccessorKind::Getter => inspector.has_method(&name),
        AccessorKind::Setter => inspector.has_method_with(&name, std::slice::from_ref(&field.ty)),
    };
    if declared {
        return Outcome::Skip {
            name,
            reason: SkipReason::AlreadyDeclared,
        };
    }

    let mut method = match kind {
        AccessorKind::Getter => {
            let mut m = MethodDecl::new(&name).returning(field.ty.clone());
            m.body.push(Statement::ReturnField {
                field: field.name.clone(),
            });
            m
        }
        AccessorKind::Setter => {
            let mut m = MethodDecl::new(&name).with_param(&field.name, field.ty.clone());
            m.body.push(Statement::AssignParam {
                field: field.name.clone(),
                param: field.name.clone(),
            });
            m
        }
    };
    method.origin = Some(id.clone());

    Outcome::Emit(method)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::synth::TIMESTAMP;
    use stamp_schema::node::{LogicalPath, TypeDetails, TypePath};

    fn ty(path: &str) -> TypePath {
        TypePath::try_from_str(path).expect("valid path")
    }

    fn target(methods: Vec<MethodDecl>) -> (TypeDetails, MetadataId) {
        let mut details = TypeDetails::new(ty("app::Order"), LogicalPath::default());
        details.methods = methods;
        let id = TIMESTAMP.create_identifier(&details.name, &details.path);

        (details, id)
    }

    fn created() -> FieldDecl {
        FieldDecl::new("created", ty("stamp::types::Timestamp"))
    }

    #[test]
    fn getter_returns_field_and_setter_assigns_param() {
        let (details, id) = target(Vec::new());
        let inspector = MemberInspector::new(&details, &id);
        let field = created();

        let getter =
            synthesize_accessor(&id, &field, AccessorKind::Getter, MemberNaming::Bean, &inspector)
                .expect("getter emitted");
        assert_eq!(getter.name, "getCreated");
        assert_eq!(getter.return_type.as_ref(), Some(&field.ty));
        assert!(getter.params.is_empty());

        let setter =
            synthesize_accessor(&id, &field, AccessorKind::Setter, MemberNaming::Bean, &inspector)
                .expect("setter emitted");
        assert_eq!(setter.name, "setCreated");
        assert!(setter.is_void());
        assert!(setter.matches_signature("setCreated", &[field.ty.clone()]));
        assert_eq!(
            setter.body,
            vec![Statement::AssignParam {
                field: "created".to_string(),
                param: "created".to_string(),
            }]
        );
    }

    #[test]
    fn getter_skip_is_name_only() {
        let (details, id) = target(vec![MethodDecl::new("getCreated").with_param("x", ty("u8"))]);
        let inspector = MemberInspector::new(&details, &id);

        assert!(
            synthesize_accessor(&id, &created(), AccessorKind::Getter, MemberNaming::Bean, &inspector)
                .is_none()
        );
    }

    #[test]
    fn setter_skip_requires_matching_parameter_type() {
        let field = created();
        let (details, id) =
            target(vec![MethodDecl::new("setCreated").with_param("raw", ty("String"))]);
        let inspector = MemberInspector::new(&details, &id);
        assert!(
            synthesize_accessor(&id, &field, AccessorKind::Setter, MemberNaming::Bean, &inspector)
                .is_some()
        );

        let (details, id) =
            target(vec![MethodDecl::new("setCreated").with_param("value", field.ty.clone())]);
        let inspector = MemberInspector::new(&details, &id);
        assert!(
            synthesize_accessor(&id, &field, AccessorKind::Setter, MemberNaming::Bean, &inspector)
                .is_none()
        );
    }

    #[test]
    fn modifiers_rule_out_accessors() {
        let (details, id) = target(Vec::new());
        let inspector = MemberInspector::new(&details, &id);

        let mut fixed = created();
        fixed.modifiers.is_final = true;
        assert!(
            synthesize_accessor(&id, &fixed, AccessorKind::Getter, MemberNaming::Bean, &inspector)
                .is_some()
        );
        assert!(
            synthesize_accessor(&id, &fixed, AccessorKind::Setter, MemberNaming::Bean, &inspector)
                .is_none()
        );

        let mut transient = created();
        transient.modifiers.is_transient = true;
        assert!(
            synthesize_accessor(&id, &transient, AccessorKind::Getter, MemberNaming::Bean, &inspector)
                .is_none()
        );
    }
}
