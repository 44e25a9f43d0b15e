use serde::{Deserialize, Serialize};
use stamp_schema::error::ErrorTree;

/// Add-on version the setup coordinates default to.
pub const ADDON_VERSION: &str = env!("CARGO_PKG_VERSION");

///
/// Repository
///
/// A package repository the project configuration can reference.
///

#[derive(Clone, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct Repository {
    pub id: String,
    pub name: String,
    pub url: String,
}

impl Repository {
    fn validate(&self, errs: &mut ErrorTree) {
        if self.id.trim().is_empty() {
            errs.add("repository id is empty");
        }
        if !(self.url.starts_with("https://") || self.url.starts_with("http://")) {
            errs.add(format!("repository url '{}' must be http(s)", self.url));
        }
    }
}

///
/// DependencyScope
///

#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DependencyScope {
    Compile,
    #[default]
    Provided,
    Runtime,
    Test,
}

///
/// Dependency
///

#[derive(Clone, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct Dependency {
    pub group_id: String,
    pub artifact_id: String,
    pub version: String,

    #[serde(default)]
    pub scope: DependencyScope,
}

impl Dependency {
    fn validate(&self, errs: &mut ErrorTree) {
        if self.group_id.trim().is_empty() || self.artifact_id.trim().is_empty() {
            errs.add("dependency coordinates must name a group and an artifact");
        }
        if self.version.trim().is_empty() {
            errs.add(format!(
                "dependency '{}:{}' has no version",
                self.group_id, self.artifact_id
            ));
        }
    }
}

///
/// SetupConfig
///
/// Coordinates installed into (and removed from) the project configuration
/// by the setup and remove commands.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct SetupConfig {
    pub version: String,
    pub dependency: Dependency,
    pub release_repository: Repository,
    pub snapshot_repository: Repository,
    pub extra_dependencies: Vec<Dependency>,
}

impl SetupConfig {
    /// Pre-release builds resolve from the snapshot repository.
    #[must_use]
    pub fn is_snapshot(&self) -> bool {
        self.version.to_lowercase().contains("snapshot")
    }

    /// The repository matching the configured version.
    #[must_use]
    pub fn repository(&self) -> &Repository {
        if self.is_snapshot() {
            &self.snapshot_repository
        } else {
            &self.release_repository
        }
    }

    /// The add-on dependency followed by any extra dependencies.
    #[must_use]
    pub fn dependencies(&self) -> Vec<Dependency> {
        let mut deps = vec![self.dependency.clone()];
        deps.extend(self.extra_dependencies.iter().cloned());
        deps
    }

    pub(crate) fn validate(&self, errs: &mut ErrorTree) {
        if self.version.trim().is_empty() {
            errs.add_for("version", "version is empty");
        }

        let mut tree = ErrorTree::new();
        self.dependency.validate(&mut tree);
        errs.merge_for("dependency", tree);

        let mut tree = ErrorTree::new();
        self.release_repository.validate(&mut tree);
        errs.merge_for("release_repository", tree);

        let mut tree = ErrorTree::new();
        self.snapshot_repository.validate(&mut tree);
        errs.merge_for("snapshot_repository", tree);

        for (i, dep) in self.extra_dependencies.iter().enumerate() {
            let mut tree = ErrorTree::new();
            dep.validate(&mut tree);
            errs.merge_for(format!("extra_dependencies[{i}]"), tree);
        }
    }
}

impl Default for SetupConfig {
    fn default() -> Self {
        Self {
            version: ADDON_VERSION.to_string(),
            dependency: Dependency {
                group_id: "stamp".to_string(),
                artifact_id: "stamp".to_string(),
                version: ADDON_VERSION.to_string(),
                scope: DependencyScope::Provided,
            },
            release_repository: Repository {
                id: "stamp-releases".to_string(),
                name: "Stamp release repository".to_string(),
                url: "https://raw.githubusercontent.com/dragginzgame/stamp-repo/main/releases"
                    .to_string(),
            },
            snapshot_repository: Repository {
                id: "stamp-snapshots".to_string(),
                name: "Stamp snapshot repository".to_string(),
                url: "https://raw.githubusercontent.com/dragginzgame/stamp-repo/main/snapshots"
                    .to_string(),
            },
            extra_dependencies: Vec::new(),
        }
    }
}

///
/// TESTS
///
