use crate::{prelude::*, validate::naming::validate_ident};

///
/// Modifiers
///

#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct Modifiers {
    #[serde(default)]
    pub visibility: Visibility,

    #[serde(default)]
    pub is_static: bool,

    #[serde(default)]
    pub is_final: bool,

    #[serde(default)]
    pub is_transient: bool,
}

impl Modifiers {
    pub const PRIVATE: Self = Self::with_visibility(Visibility::Private);
    pub const PUBLIC: Self = Self::with_visibility(Visibility::Public);

    #[must_use]
    pub const fn with_visibility(visibility: Visibility) -> Self {
        Self {
            visibility,
            is_static: false,
            is_final: false,
            is_transient: false,
        }
    }

    /// Readable through a generated accessor.
    #[must_use]
    pub const fn allows_getter(self) -> bool {
        !self.is_transient && !self.is_static
    }

    /// Writable through a generated mutator.
    #[must_use]
    pub const fn allows_setter(self) -> bool {
        self.allows_getter() && !self.is_final
    }
}

///
/// FieldDecl
///
/// A field on a type, either hand-written (`origin` is `None`) or produced
/// by a synthesizer whose identifier is recorded in `origin`.
///

#[derive(Clone, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct FieldDecl {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub origin: Option<MetadataId>,

    #[serde(default)]
    pub modifiers: Modifiers,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub annotations: Vec<Annotation>,

    pub name: String,
    pub ty: TypePath,
}

impl FieldDecl {
    #[must_use]
    pub fn new(name: &str, ty: TypePath) -> Self {
        Self {
            origin: None,
            modifiers: Modifiers::PRIVATE,
            annotations: Vec::new(),
            name: name.to_string(),
            ty,
        }
    }

    #[must_use]
    pub const fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }

    #[must_use]
    pub fn has_annotation(&self, ty: &TypePath) -> bool {
        find_annotation(&self.annotations, ty).is_some()
    }
}

impl ValidateNode for FieldDecl {
    fn validate(&self) -> Result<(), ErrorTree> {
        let mut errs = ErrorTree::new();

        if let Err(e) = validate_ident(&self.name) {
            errs.add(e);
        }
        for ann in &self.annotations {
            if let Err(tree) = ann.validate() {
                errs.merge_for(ann.ty.to_string(), tree);
            }
        }

        errs.result()
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accessor_rules_follow_modifiers() {
        let plain = Modifiers::PRIVATE;
        assert!(plain.allows_getter());
        assert!(plain.allows_setter());

        let final_field = Modifiers {
            is_final: true,
            ..Modifiers::PRIVATE
        };
        assert!(final_field.allows_getter());
        assert!(!final_field.allows_setter());

        let transient = Modifiers {
            is_transient: true,
            ..Modifiers::PRIVATE
        };
        assert!(!transient.allows_getter());
        assert!(!transient.allows_setter());

        let shared = Modifiers {
            is_static: true,
            ..Modifiers::PUBLIC
        };
        assert!(!shared.allows_getter());
    }

    #[test]
    fn invalid_field_name_is_reported() {
        let ty = TypePath::try_from_str("stamp::types::Timestamp").expect("valid path");
        let field = FieldDecl::new("created at", ty);

        assert!(field.validate().is_err());
    }
}
