use stamp_schema::node::{FieldDecl, MetadataId, MethodDecl, TypeDetails, TypePath};

///
/// MemberInspector
///
/// Read-only lookups over a declared-member snapshot. Members whose origin is
/// the identifier currently being synthesized are that pass's own earlier
/// output and stay invisible, so re-synthesis does not skip its own members.
///

#[derive(Clone, Copy, Debug)]
pub struct MemberInspector<'a> {
    details: &'a TypeDetails,
    own: &'a MetadataId,
}

impl<'a> MemberInspector<'a> {
    #[must_use]
    pub const fn new(details: &'a TypeDetails, own: &'a MetadataId) -> Self {
        Self { details, own }
    }

    fn methods(&self) -> impl Iterator<Item = &'a MethodDecl> {
        let own = self.own;
        self.details
            .methods
            .iter()
            .filter(move |m| m.origin.as_ref() != Some(own))
    }

    fn fields(&self) -> impl Iterator<Item = &'a FieldDecl> {
        let own = self.own;
        self.details
            .fields
            .iter()
            .filter(move |f| f.origin.as_ref() != Some(own))
    }

    /// First declared method with this name, whatever its parameters.
    #[must_use]
    pub fn find_method(&self, name: &str) -> Option<&'a MethodDecl> {
        self.methods().find(|m| m.name == name)
    }

    #[must_use]
    pub fn has_method(&self, name: &str) -> bool {
        self.find_method(name).is_some()
    }

    /// Name plus exact parameter types.
    #[must_use]
    pub fn has_method_with(&self, name: &str, param_types: &[TypePath]) -> bool {
        self.methods()
            .any(|m| m.matches_signature(name, param_types))
    }

    #[must_use]
    pub fn has_field(&self, name: &str) -> bool {
        self.fields().any(|f| f.name == name)
    }
}

///
/// TESTS
///
