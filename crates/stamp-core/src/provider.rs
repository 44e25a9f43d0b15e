use crate::{
    addition::Additions,
    error::{Error, ErrorOrigin},
    host::{DependencyRegistry, MemberSource},
    synth::{Synthesizer, TIMESTAMP},
    trace::SynthesisTraceSink,
};
use stamp_config::{StampConfig, SynthesisConfig};
use stamp_schema::node::{LogicalPath, MetadataClass, MetadataId, PHYSICAL_TYPE, TypeDetails, TypePath};
use std::collections::BTreeSet;

/// Suffix of the companion every triggered type receives.
pub const ITD_SUFFIX: &str = "Timestamp";

/// Add-on segment of generated file names.
pub const PROVIDER_PREFIX: &str = "Stamp";

/// `Order` → `Order_Stamp_Timestamp.rs`
#[must_use]
pub fn companion_file_name(ty: &TypePath) -> String {
    format!("{}_{PROVIDER_PREFIX}_{ITD_SUFFIX}.rs", ty.simple_name())
}

///
/// TimestampProvider
///
/// Maps physical-type changes to timestamp synthesis. While active, a type
/// carrying a trigger marker gets its addition list; a type without one gets
/// nothing, which tells the host to retract any earlier group.
///

#[derive(Clone, Debug)]
pub struct TimestampProvider {
    config: SynthesisConfig,
    trigger: TypePath,
    triggers: BTreeSet<TypePath>,
}

impl TimestampProvider {
    #[must_use]
    pub fn new(config: &StampConfig) -> Self {
        Self {
            config: config.synthesis.clone(),
            trigger: config.markers.trigger.clone(),
            triggers: BTreeSet::new(),
        }
    }

    /// Register physical type → timestamp and start honouring the trigger marker.
    pub fn activate(&mut self, registry: &mut impl DependencyRegistry) {
        registry.register_dependency(&PHYSICAL_TYPE.class_id(), &TIMESTAMP.class_id());
        self.triggers.insert(self.trigger.clone());

        tracing::info!(trigger = %self.trigger, "timestamp provider activated");
    }

    pub fn deactivate(&mut self, registry: &mut impl DependencyRegistry) {
        registry.deregister_dependency(&PHYSICAL_TYPE.class_id(), &TIMESTAMP.class_id());
        self.triggers.remove(&self.trigger);

        tracing::info!(trigger = %self.trigger, "timestamp provider deactivated");
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        !self.triggers.is_empty()
    }

    pub fn triggers(&self) -> impl Iterator<Item = &TypePath> {
        self.triggers.iter()
    }

    #[must_use]
    pub const fn provides_type(&self) -> MetadataClass {
        TIMESTAMP
    }

    #[must_use]
    pub const fn itd_suffix(&self) -> &'static str {
        ITD_SUFFIX
    }

    #[must_use]
    pub fn local_id(&self, ty: &TypePath, path: &LogicalPath) -> MetadataId {
        TIMESTAMP.create_identifier(ty, path)
    }

    /// The physical-type identifier of the type a timestamp identifier names.
    pub fn governor_id(&self, local_id: &MetadataId) -> Result<MetadataId, Error> {
        if !local_id.is_class(TIMESTAMP) {
            return Err(Error::invalid_identifier(
                ErrorOrigin::Provider,
                format!("'{local_id}' is not a {} identifier", TIMESTAMP.name()),
            ));
        }

        Ok(local_id.with_class(PHYSICAL_TYPE))
    }

    #[must_use]
    pub fn companion_file_name(&self, ty: &TypePath) -> String {
        companion_file_name(ty)
    }

    #[must_use]
    pub fn is_triggered(&self, details: &TypeDetails) -> bool {
        self.triggers.iter().any(|t| details.has_annotation(t))
    }

    pub fn metadata(
        &self,
        local_id: &MetadataId,
        governor: Option<&TypeDetails>,
    ) -> Result<Option<Additions>, Error> {
        self.metadata_traced(local_id, governor, None)
    }

    /// `None` when the governor is gone or no longer triggered.
    pub fn metadata_traced(
        &self,
        local_id: &MetadataId,
        governor: Option<&TypeDetails>,
        sink: Option<&dyn SynthesisTraceSink>,
    ) -> Result<Option<Additions>, Error> {
        let governor_id = self.governor_id(local_id)?;

        let Some(details) = governor else {
            tracing::debug!(governor = %governor_id, "governor not found");
            return Ok(None);
        };
        if !self.is_triggered(details) {
            tracing::debug!(governor = %governor_id, "governor not triggered");
            return Ok(None);
        }

        let mut synthesizer = Synthesizer::new(self.config.clone());
        if let Some(sink) = sink {
            synthesizer = synthesizer.with_sink(sink);
        }

        synthesizer.synthesize(local_id, details).map(Some)
    }

    /// Look the governor up through the host, then produce its metadata.
    pub fn metadata_from(
        &self,
        source: &impl MemberSource,
        local_id: &MetadataId,
    ) -> Result<Option<Additions>, Error> {
        let governor_id = self.governor_id(local_id)?;
        let governor = source.declared(&governor_id);

        self.metadata(local_id, governor.as_ref())
    }
}

///
/// TESTS
///
