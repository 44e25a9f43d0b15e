use crate::prelude::*;

///
/// Annotation
///
/// An inert marker attached to a type or member: a marker type plus named
/// attribute values. The host interprets markers; nothing here gives them
/// behavior.
///

#[derive(Clone, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct Annotation {
    pub ty: TypePath,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub attributes: Vec<AnnotationAttr>,
}

impl Annotation {
    #[must_use]
    pub const fn new(ty: TypePath) -> Self {
        Self {
            ty,
            attributes: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_str(mut self, name: &str, value: impl Into<String>) -> Self {
        self.attributes.push(AnnotationAttr {
            name: name.to_string(),
            value: AttrValue::Str(value.into()),
        });
        self
    }

    #[must_use]
    pub fn with_enum(mut self, name: &str, ty: TypePath, constant: &str) -> Self {
        self.attributes.push(AnnotationAttr {
            name: name.to_string(),
            value: AttrValue::Enum {
                ty,
                constant: constant.to_string(),
            },
        });
        self
    }

    #[must_use]
    pub fn attribute(&self, name: &str) -> Option<&AttrValue> {
        self.attributes
            .iter()
            .find(|a| a.name == name)
            .map(|a| &a.value)
    }
}

///
/// AnnotationAttr
///

#[derive(Clone, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct AnnotationAttr {
    pub name: String,
    pub value: AttrValue,
}

///
/// AttrValue
///

#[derive(Clone, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AttrValue {
    Str(String),
    Enum { ty: TypePath, constant: String },
}

impl AttrValue {
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Str(s) => Some(s),
            Self::Enum { .. } => None,
        }
    }
}

/// Find the first annotation of the given marker type.
#[must_use]
pub fn find_annotation<'a>(annotations: &'a [Annotation], ty: &TypePath) -> Option<&'a Annotation> {
    annotations.iter().find(|a| a.ty == *ty)
}

impl ValidateNode for Annotation {
    fn validate(&self) -> Result<(), ErrorTree> {
        let mut errs = ErrorTree::new();

        for (i, attr) in self.attributes.iter().enumerate() {
            if self.attributes[..i].iter().any(|a| a.name == attr.name) {
                err!(errs, "duplicate attribute '{}' on '{}'", attr.name, self.ty);
            }
            if let Err(e) = crate::validate::naming::validate_ident(&attr.name) {
                errs.add(e);
            }
        }

        errs.result()
    }
}

///
/// TESTS
///
