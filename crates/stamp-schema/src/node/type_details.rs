use crate::prelude::*;
use std::collections::BTreeSet;

///
/// TypeDetails
///
/// Snapshot of a type's declaration: its markers and every declared field and
/// method. Synthesis treats a snapshot as read-only input for one pass.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct TypeDetails {
    pub name: TypePath,

    #[serde(default)]
    pub path: LogicalPath,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub annotations: Vec<Annotation>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub fields: Vec<FieldDecl>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub methods: Vec<MethodDecl>,
}

impl TypeDetails {
    #[must_use]
    pub const fn new(name: TypePath, path: LogicalPath) -> Self {
        Self {
            name,
            path,
            annotations: Vec::new(),
            fields: Vec::new(),
            methods: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_annotation(mut self, annotation: Annotation) -> Self {
        self.annotations.push(annotation);
        self
    }

    #[must_use]
    pub fn with_field(mut self, field: FieldDecl) -> Self {
        self.fields.push(field);
        self
    }

    #[must_use]
    pub fn with_method(mut self, method: MethodDecl) -> Self {
        self.methods.push(method);
        self
    }

    /// The identifier of this type's physical declaration.
    #[must_use]
    pub fn physical_id(&self) -> MetadataId {
        PHYSICAL_TYPE.create_identifier(&self.name, &self.path)
    }

    #[must_use]
    pub fn annotation(&self, ty: &TypePath) -> Option<&Annotation> {
        find_annotation(&self.annotations, ty)
    }

    #[must_use]
    pub fn has_annotation(&self, ty: &TypePath) -> bool {
        self.annotation(ty).is_some()
    }

    /// Attach a marker; returns `false` if it was already present.
    pub fn add_annotation(&mut self, annotation: Annotation) -> bool {
        if self.has_annotation(&annotation.ty) {
            return false;
        }
        self.annotations.push(annotation);

        true
    }

    /// Detach every marker of the given type; returns `false` if none was present.
    pub fn remove_annotation(&mut self, ty: &TypePath) -> bool {
        let before = self.annotations.len();
        self.annotations.retain(|a| a.ty != *ty);

        self.annotations.len() != before
    }

    #[must_use]
    pub fn field(&self, name: &str) -> Option<&FieldDecl> {
        self.fields.iter().find(|f| f.name == name)
    }
}

impl ValidateNode for TypeDetails {
    fn validate(&self) -> Result<(), ErrorTree> {
        let mut errs = ErrorTree::new();

        // fields
        let mut seen = BTreeSet::new();
        for field in &self.fields {
            if !seen.insert(field.name.as_str()) {
                errs.add_for(field.name.clone(), "duplicate field");
            }
            if let Err(tree) = field.validate() {
                errs.merge_for(field.name.clone(), tree);
            }
        }

        // methods
        for (i, method) in self.methods.iter().enumerate() {
            let param_types = method.param_types().cloned().collect::<Vec<_>>();
            if self.methods[..i]
                .iter()
                .any(|m| m.matches_signature(&method.name, &param_types))
            {
                errs.add_for(method.name.clone(), "duplicate method signature");
            }
            if let Err(tree) = method.validate() {
                errs.merge_for(method.name.clone(), tree);
            }
        }

        // annotations
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
