use crate::{prelude::*, validate::naming::validate_ident};

///
/// Param
///

#[derive(Clone, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct Param {
    pub name: String,
    pub ty: TypePath,
}

impl Param {
    #[must_use]
    pub fn new(name: &str, ty: TypePath) -> Self {
        Self {
            name: name.to_string(),
            ty,
        }
    }
}

///
/// Statement
///
/// One line of a synthesized method body. Bodies are kept structured so the
/// renderer decides the concrete syntax; "now" and "unset" are the date
/// type's current value and zero value respectively.
///

#[derive(Clone, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Statement {
    /// `field = now`
    AssignNow { field: String },

    /// `if field is unset { field = now }`
    AssignNowIfUnset { field: String },

    /// `return field`
    ReturnField { field: String },

    /// `field = param`
    AssignParam { field: String, param: String },
}

impl Statement {
    /// The field this statement reads or writes.
    #[must_use]
    pub fn field(&self) -> &str {
        match self {
            Self::AssignNow { field }
            | Self::AssignNowIfUnset { field }
            | Self::ReturnField { field }
            | Self::AssignParam { field, .. } => field,
        }
    }
}

///
/// MethodDecl
///

#[derive(Clone, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct MethodDecl {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub origin: Option<MetadataId>,

    #[serde(default)]
    pub modifiers: Modifiers,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub annotations: Vec<Annotation>,

    pub name: String,

    /// `None` is a method returning nothing.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub return_type: Option<TypePath>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub params: Vec<Param>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub body: Vec<Statement>,
}

impl MethodDecl {
    /// A public, parameterless method returning nothing.
    #[must_use]
    pub fn new(name: &str) -> Self {
        Self {
            origin: None,
            modifiers: Modifiers::PUBLIC,
            annotations: Vec::new(),
            name: name.to_string(),
            return_type: None,
            params: Vec::new(),
            body: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_param(mut self, name: &str, ty: TypePath) -> Self {
        self.params.push(Param::new(name, ty));
        self
    }

    #[must_use]
    pub fn returning(mut self, ty: TypePath) -> Self {
        self.return_type = Some(ty);
        self
    }

    #[must_use]
    pub const fn is_void(&self) -> bool {
        self.return_type.is_none()
    }

    pub fn param_types(&self) -> impl Iterator<Item = &TypePath> {
        self.params.iter().map(|p| &p.ty)
    }

    /// Name plus exact parameter types.
    #[must_use]
    pub fn matches_signature(&self, name: &str, param_types: &[TypePath]) -> bool {
        self.name == name && self.param_types().eq(param_types.iter())
    }

    #[must_use]
    pub fn has_annotation(&self, ty: &TypePath) -> bool {
        find_annotation(&self.annotations, ty).is_some()
    }
}

impl ValidateNode for MethodDecl {
    fn validate(&self) -> Result<(), ErrorTree> {
        let mut errs = ErrorTree::new();

        if let Err(e) = validate_ident(&self.name) {
            errs.add(e);
        }

        for (i, param) in self.params.iter().enumerate() {
            if let Err(e) = validate_ident(&param.name) {
                errs.add_for(param.name.clone(), e);
            }
            if self.params[..i].iter().any(|p| p.name == param.name) {
                err!(errs, "duplicate parameter '{}'", param.name);
            }
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
