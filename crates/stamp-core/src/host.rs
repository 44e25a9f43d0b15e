//! Ports the host development environment implements.
//!
//! Synthesis only reads through these; mutation stays on the host side.

use crate::error::Error;
use stamp_config::{Dependency, Repository};
use stamp_schema::node::{MetadataId, TypeDetails, TypePath};

///
/// MemberSource
///

pub trait MemberSource {
    /// Latest known declaration of the type the identifier names, including
    /// synthetic members merged by earlier passes.
    fn declared(&self, id: &MetadataId) -> Option<TypeDetails>;
}

///
/// DependencyRegistry
///
/// Upstream/downstream links between metadata classes; a change to an
/// upstream item re-triggers every registered downstream provider.
///

pub trait DependencyRegistry {
    /// Returns `false` if the link already existed.
    fn register_dependency(&mut self, upstream: &str, downstream: &str) -> bool;

    /// Returns `false` if there was no such link.
    fn deregister_dependency(&mut self, upstream: &str, downstream: &str) -> bool;
}

///
/// TypeLocator
///

pub trait TypeLocator {
    fn type_details(&self, ty: &TypePath) -> Option<TypeDetails>;

    /// Every type carrying the marker, in a stable order.
    fn types_with_annotation(&self, marker: &TypePath) -> Vec<TypePath>;
}

///
/// TypeManager
///

pub trait TypeManager {
    /// Replace the stored declaration of `details.name`.
    fn save_type(&mut self, details: TypeDetails) -> Result<(), Error>;
}

///
/// ProjectOperations
///
/// Project configuration edits; `module` is the empty string for the root module.
///

pub trait ProjectOperations {
    fn is_focused_project_available(&self) -> bool;

    fn add_repository(&mut self, module: &str, repository: &Repository) -> Result<(), Error>;

    fn remove_repository(&mut self, module: &str, repository: &Repository) -> Result<(), Error>;

    fn add_dependencies(&mut self, module: &str, dependencies: &[Dependency]) -> Result<(), Error>;

    fn remove_dependency(&mut self, module: &str, dependency: &Dependency) -> Result<(), Error>;
}
