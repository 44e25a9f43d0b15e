use crate::{
    addition::{Addition, Additions},
    error::Error,
    host::{DependencyRegistry, MemberSource, ProjectOperations, TypeLocator, TypeManager},
    provider::TimestampProvider,
};
use serde::{Deserialize, Serialize};
use stamp_config::{Dependency, Repository};
use stamp_schema::{
    node::{MetadataId, TypeDetails, TypePath},
    validate::ValidateNode,
};
use std::collections::{BTreeMap, BTreeSet};

///
/// ProjectRepository
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct ProjectRepository {
    pub module: String,
    pub repository: Repository,
}

///
/// ProjectDependency
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct ProjectDependency {
    pub module: String,
    pub dependency: Dependency,
}

///
/// MemoryProject
///
/// Reference host: declared types, merged synthetic groups keyed by their
/// origin, and the project's repositories and dependencies. The merge in
/// [`MemoryProject::refresh`] is the only place synthetic members are
/// written.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(default)]
pub struct MemoryProject {
    pub focused: bool,
    pub types: Vec<TypeDetails>,

    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub generated: BTreeMap<MetadataId, Additions>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub repositories: Vec<ProjectRepository>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub dependencies: Vec<ProjectDependency>,

    #[serde(skip)]
    links: BTreeSet<(String, String)>,
}

impl MemoryProject {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_type(mut self, details: TypeDetails) -> Self {
        self.put_type(details);
        self
    }

    /// Validate and store a declaration, replacing one of the same name.
    pub fn insert_type(&mut self, details: TypeDetails) -> Result<(), Error> {
        details.validate().map_err(|tree| {
            Error::host(format!("invalid declaration of '{}': {tree}", details.name))
        })?;
        self.put_type(details);

        Ok(())
    }

    fn put_type(&mut self, details: TypeDetails) {
        match self.types.iter_mut().find(|t| t.name == details.name) {
            Some(slot) => *slot = details,
            None => self.types.push(details),
        }
    }

    fn find_type(&self, ty: &TypePath) -> Option<&TypeDetails> {
        self.types.iter().find(|t| t.name == *ty)
    }

    /// Run the provider for one type and merge or retract its group.
    pub fn refresh(
        &mut self,
        provider: &TimestampProvider,
        ty: &TypePath,
    ) -> Result<Option<&Additions>, Error> {
        let Some(path) = self.find_type(ty).map(|t| t.path.clone()) else {
            self.generated.retain(|id, _| id.type_path() != ty);
            return Ok(None);
        };

        let local_id = provider.local_id(ty, &path);
        let before = self.generated.len();
        self.generated
            .retain(|id, _| id.type_path() != ty || *id == local_id);
        if self.generated.len() < before {
            tracing::info!(%ty, path = %path, "retracted synthetic group from previous path");
        }

        match provider.metadata_from(&*self, &local_id)? {
            Some(additions) => {
                tracing::debug!(id = %local_id, members = additions.len(), "merged synthetic group");
                self.generated.insert(local_id.clone(), additions);

                Ok(self.generated.get(&local_id))
            }
            None => {
                if self.generated.remove(&local_id).is_some() {
                    tracing::info!(id = %local_id, "retracted synthetic group");
                }

                Ok(None)
            }
        }
    }

    /// Refresh every type; returns how many carry a group afterwards.
    pub fn refresh_all(&mut self, provider: &TimestampProvider) -> Result<usize, Error> {
        let names: Vec<TypePath> = self.types.iter().map(|t| t.name.clone()).collect();

        let mut merged = 0;
        for ty in &names {
            if self.refresh(provider, ty)?.is_some() {
                merged += 1;
            }
        }

        Ok(merged)
    }

    /// The merged group for a type, if any.
    #[must_use]
    pub fn generated(&self, ty: &TypePath) -> Option<&Additions> {
        self.generated.values().find(|a| a.type_path() == ty)
    }

    #[must_use]
    pub fn is_linked(&self, upstream: &str, downstream: &str) -> bool {
        self.links
            .contains(&(upstream.to_string(), downstream.to_string()))
    }
}

impl Default for MemoryProject {
    fn default() -> Self {
        Self {
            focused: true,
            types: Vec::new(),
            generated: BTreeMap::new(),
            repositories: Vec::new(),
            dependencies: Vec::new(),
            links: BTreeSet::new(),
        }
    }
}

impl MemberSource for MemoryProject {
    fn declared(&self, id: &MetadataId) -> Option<TypeDetails> {
        let mut details = self
            .find_type(id.type_path())
            .filter(|t| t.path == *id.logical_path())?
            .clone();

        let groups = self.generated.iter().filter(|(origin, _)| {
            origin.type_path() == id.type_path() && origin.logical_path() == id.logical_path()
        });
        for (_, additions) in groups {
            for item in additions {
                match item {
                    Addition::Field(field) => details.fields.push(field.clone()),
                    Addition::Method(method) => details.methods.push(method.clone()),
                }
            }
        }

        Some(details)
    }
}

impl DependencyRegistry for MemoryProject {
    fn register_dependency(&mut self, upstream: &str, downstream: &str) -> bool {
        self.links
            .insert((upstream.to_string(), downstream.to_string()))
    }

    fn deregister_dependency(&mut self, upstream: &str, downstream: &str) -> bool {
        self.links
            .remove(&(upstream.to_string(), downstream.to_string()))
    }
}

impl TypeLocator for MemoryProject {
    fn type_details(&self, ty: &TypePath) -> Option<TypeDetails> {
        self.find_type(ty).cloned()
    }

    fn types_with_annotation(&self, marker: &TypePath) -> Vec<TypePath> {
        let mut found: Vec<TypePath> = self
            .types
            .iter()
            .filter(|t| t.has_annotation(marker))
            .map(|t| t.name.clone())
            .collect();
        found.sort();

        found
    }
}

impl TypeManager for MemoryProject {
    fn save_type(&mut self, details: TypeDetails) -> Result<(), Error> {
        self.insert_type(details)
    }
}

impl ProjectOperations for MemoryProject {
    fn is_focused_project_available(&self) -> bool {
        self.focused
    }

    fn add_repository(&mut self, module: &str, repository: &Repository) -> Result<(), Error> {
        let exists = self
            .repositories
            .iter()
            .any(|r| r.module == module && r.repository.id == repository.id);
        if !exists {
            self.repositories.push(ProjectRepository {
                module: module.to_string(),
                repository: repository.clone(),
            });
        }

        Ok(())
    }

    fn remove_repository(&mut self, module: &str, repository: &Repository) -> Result<(), Error> {
        self.repositories
            .retain(|r| !(r.module == module && r.repository.id == repository.id));

        Ok(())
    }

    fn add_dependencies(&mut self, module: &str, dependencies: &[Dependency]) -> Result<(), Error> {
        for dependency in dependencies {
            let existing = self.dependencies.iter_mut().find(|d| {
                d.module == module
                    && d.dependency.group_id == dependency.group_id
                    && d.dependency.artifact_id == dependency.artifact_id
            });

            match existing {
                Some(slot) => slot.dependency = dependency.clone(),
                None => self.dependencies.push(ProjectDependency {
                    module: module.to_string(),
                    dependency: dependency.clone(),
                }),
            }
        }

        Ok(())
    }

    fn remove_dependency(&mut self, module: &str, dependency: &Dependency) -> Result<(), Error> {
        self.dependencies.retain(|d| {
            !(d.module == module
                && d.dependency.group_id == dependency.group_id
                && d.dependency.artifact_id == dependency.artifact_id)
        });

        Ok(())
    }
}
