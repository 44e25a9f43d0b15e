use crate::{
    error::{Error, ErrorOrigin},
    host::{ProjectOperations, TypeLocator, TypeManager},
};
use stamp_config::StampConfig;
use stamp_schema::node::{Annotation, TypePath};

/// Module argument addressing the project root.
pub const ROOT_MODULE: &str = "";

/// Resolve a user-supplied type argument.
pub fn require_type(raw: Option<&str>) -> Result<TypePath, Error> {
    let raw = raw.map(str::trim).filter(|s| !s.is_empty());
    let raw = raw.ok_or_else(|| Error::missing_argument("type"))?;

    TypePath::try_from_str(raw)
        .map_err(|e| Error::invalid_identifier(ErrorOrigin::Operations, e.to_string()))
}

///
/// TimestampOperations
///
/// The user-facing commands: opt types in and out of timestamp synthesis and
/// install or remove the add-on from the project configuration.
///

pub struct TimestampOperations<'a, H> {
    host: &'a mut H,
    config: &'a StampConfig,
}

impl<'a, H> TimestampOperations<'a, H>
where
    H: TypeLocator + TypeManager + ProjectOperations,
{
    pub const fn new(host: &'a mut H, config: &'a StampConfig) -> Self {
        Self { host, config }
    }

    /// Commands only apply to a focused project.
    #[must_use]
    pub fn is_command_available(&self) -> bool {
        self.host.is_focused_project_available()
    }

    fn ensure_available(&self) -> Result<(), Error> {
        if self.is_command_available() {
            Ok(())
        } else {
            Err(Error::unavailable("no focused project"))
        }
    }

    /// Add the trigger marker; `Ok(false)` when the type is unknown or
    /// already opted in.
    pub fn annotate_type(&mut self, ty: &TypePath) -> Result<bool, Error> {
        self.ensure_available()?;

        let Some(mut details) = self.host.type_details(ty) else {
            tracing::warn!(%ty, "type not found; not annotated");
            return Ok(false);
        };

        let trigger = &self.config.markers.trigger;
        if !details.add_annotation(Annotation::new(trigger.clone())) {
            tracing::debug!(%ty, "already annotated");
            return Ok(false);
        }
        self.host.save_type(details)?;
        tracing::info!(%ty, %trigger, "annotated type");

        Ok(true)
    }

    /// Annotate every record type; returns how many changed.
    pub fn annotate_all(&mut self) -> Result<usize, Error> {
        self.ensure_available()?;

        let mut changed = 0;
        for ty in self.host.types_with_annotation(&self.config.markers.record) {
            if self.annotate_type(&ty)? {
                changed += 1;
            }
        }

        Ok(changed)
    }

    /// Drop the trigger marker; `Ok(false)` when the type is unknown or not
    /// opted in.
    pub fn remove_annotation(&mut self, ty: &TypePath) -> Result<bool, Error> {
        self.ensure_available()?;

        let Some(mut details) = self.host.type_details(ty) else {
            tracing::warn!(%ty, "type not found; nothing removed");
            return Ok(false);
        };

        if !details.remove_annotation(&self.config.markers.trigger) {
            return Ok(false);
        }
        self.host.save_type(details)?;
        tracing::info!(%ty, "removed timestamp annotation");

        Ok(true)
    }

    pub fn remove_all_annotations(&mut self) -> Result<usize, Error> {
        self.ensure_available()?;

        let mut changed = 0;
        for ty in self.host.types_with_annotation(&self.config.markers.trigger) {
            if self.remove_annotation(&ty)? {
                changed += 1;
            }
        }

        Ok(changed)
    }

    /// Install the repository matching the configured version and the add-on
    /// dependencies.
    pub fn setup(&mut self) -> Result<(), Error> {
        self.ensure_available()?;

        let setup = &self.config.setup;
        let repository = setup.repository();
        self.host.add_repository(ROOT_MODULE, repository)?;
        self.host.add_dependencies(ROOT_MODULE, &setup.dependencies())?;

        tracing::info!(
            version = %setup.version,
            repository = %repository.id,
            "timestamp add-on set up"
        );

        Ok(())
    }

    /// Opt every type out, then remove the repository and the add-on
    /// dependency. Extra dependencies are kept.
    pub fn remove(&mut self) -> Result<(), Error> {
        let removed = self.remove_all_annotations()?;

        let setup = &self.config.setup;
        self.host.remove_repository(ROOT_MODULE, setup.repository())?;
        self.host.remove_dependency(ROOT_MODULE, &setup.dependency)?;

        tracing::info!(annotations = removed, "timestamp add-on removed");

        Ok(())
    }
}
