use serde::{Deserialize, Serialize};
use stamp_schema::node::{FieldDecl, MetadataId, MethodDecl, TypeDetails, TypePath};

///
/// Addition
///
/// One synthetic member in an addition list.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Addition {
    Field(FieldDecl),
    Method(MethodDecl),
}

impl Addition {
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Field(field) => &field.name,
            Self::Method(method) => &method.name,
        }
    }

    #[must_use]
    pub const fn origin(&self) -> Option<&MetadataId> {
        match self {
            Self::Field(field) => field.origin.as_ref(),
            Self::Method(method) => method.origin.as_ref(),
        }
    }

    #[must_use]
    pub const fn as_field(&self) -> Option<&FieldDecl> {
        match self {
            Self::Field(field) => Some(field),
            Self::Method(_) => None,
        }
    }

    #[must_use]
    pub const fn as_method(&self) -> Option<&MethodDecl> {
        match self {
            Self::Method(method) => Some(method),
            Self::Field(_) => None,
        }
    }

    /// Whether the snapshot already holds this member under the same origin.
    fn is_merged_into(&self, details: &TypeDetails) -> bool {
        match self {
            Self::Field(field) => details
                .fields
                .iter()
                .any(|f| f.name == field.name && f.origin == field.origin),
            Self::Method(method) => {
                let params: Vec<TypePath> = method.param_types().cloned().collect();

                details.methods.iter().any(|m| {
                    m.matches_signature(&method.name, &params) && m.origin == method.origin
                })
            }
        }
    }
}

///
/// Additions
///
/// Immutable, ordered output of one synthesis pass. The host merge is the
/// only consumer allowed to turn it into declarations.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Additions {
    origin: MetadataId,
    items: Vec<Addition>,
}

impl Additions {
    pub(crate) const fn new(origin: MetadataId, items: Vec<Addition>) -> Self {
        Self { origin, items }
    }

    /// The identifier every member of this list was produced for.
    #[must_use]
    pub const fn origin(&self) -> &MetadataId {
        &self.origin
    }

    /// The type the list belongs to.
    #[must_use]
    pub const fn type_path(&self) -> &TypePath {
        self.origin.type_path()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[Addition] {
        &self.items
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Addition> {
        self.items.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn fields(&self) -> impl Iterator<Item = &FieldDecl> {
        self.items.iter().filter_map(Addition::as_field)
    }

    pub fn methods(&self) -> impl Iterator<Item = &MethodDecl> {
        self.items.iter().filter_map(Addition::as_method)
    }

    /// Member names in emission order.
    #[must_use]
    pub fn names(&self) -> Vec<&str> {
        self.items.iter().map(Addition::name).collect()
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.items.iter().any(|item| item.name() == name)
    }

    /// The merge delta: additions the snapshot does not already carry under
    /// this list's origin. Empty once the list has been merged.
    #[must_use]
    pub fn pending(&self, details: &TypeDetails) -> Vec<&Addition> {
        self.items
            .iter()
            .filter(|item| !item.is_merged_into(details))
            .collect()
    }
}

impl<'a> IntoIterator for &'a Additions {
    type Item = &'a Addition;
    type IntoIter = std::slice::Iter<'a, Addition>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
