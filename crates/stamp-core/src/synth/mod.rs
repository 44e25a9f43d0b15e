//! The synthesis pass: fields, lifecycle hooks and accessors for one target.

pub mod accessor;
pub mod field;
pub mod hook;
pub mod markers;
pub mod naming;

use crate::{
    addition::{Addition, Additions},
    error::{Error, ErrorOrigin},
    inspect::MemberInspector,
    trace::{MemberKind, SkipReason, SynthesisTraceSink, TraceScope, trace_error},
};
use stamp_config::SynthesisConfig;
use stamp_schema::node::{MetadataClass, MetadataId, MethodDecl, TypeDetails};

pub use accessor::{AccessorKind, synthesize_accessor};
pub use field::synthesize_fields;
pub use hook::{HookSpec, synthesize_hook};

///
/// TIMESTAMP
/// the class of identifiers naming a type's timestamp companion
///

pub const TIMESTAMP: MetadataClass = MetadataClass::new("stamp.timestamp.TimestampMetadata");

///
/// Outcome
///

#[derive(Debug)]
pub(crate) enum Outcome {
    Emit(MethodDecl),
    Skip { name: String, reason: SkipReason },
}

impl Outcome {
    pub(crate) fn into_emitted(self) -> Option<MethodDecl> {
        match self {
            Self::Emit(method) => Some(method),
            Self::Skip { .. } => None,
        }
    }
}

///
/// Synthesizer
///
/// Computes the ordered addition list for one target:
/// `created`, `updated`, hook(s), then getter/setter per field.
///

#[derive(Clone)]
pub struct Synthesizer<'a> {
    config: SynthesisConfig,
    sink: Option<&'a dyn SynthesisTraceSink>,
}

impl<'a> Synthesizer<'a> {
    #[must_use]
    pub const fn new(config: SynthesisConfig) -> Self {
        Self { config, sink: None }
    }

    #[must_use]
    pub fn with_sink(mut self, sink: &'a dyn SynthesisTraceSink) -> Self {
        self.sink = Some(sink);
        self
    }

    #[must_use]
    pub const fn config(&self) -> &SynthesisConfig {
        &self.config
    }

    /// Parse `id` as a timestamp identifier, then synthesize.
    pub fn synthesize_str(&self, id: &str, details: &TypeDetails) -> Result<Additions, Error> {
        let id = TIMESTAMP.parse(id).map_err(|e| {
            let err = Error::from(e);
            trace_error(self.sink, &err);
            err
        })?;

        self.synthesize(&id, details)
    }

    /// Fails without partial output when `id` is not a timestamp identifier
    /// or `details` describes another type.
    pub fn synthesize(&self, id: &MetadataId, details: &TypeDetails) -> Result<Additions, Error> {
        if let Err(err) = check_target(id, details) {
            trace_error(self.sink, &err);
            return Err(err);
        }

        let scope = TraceScope::start(self.sink, id);
        let inspector = MemberInspector::new(details, id);
        let naming = self.config.naming;

        let fields = synthesize_fields(id, &self.config);
        let mut items: Vec<Addition> = Vec::with_capacity(8);
        for field in &fields {
            scope.emitted(MemberKind::Field, &field.name);
            items.push(Addition::Field(field.clone()));
        }

        for spec in HookSpec::for_shape(self.config.hook_shape, naming) {
            let outcome = hook::plan_hook(id, &spec, &inspector);
            push_method(&scope, MemberKind::Hook, outcome, &mut items);
        }

        for field in &fields {
            for kind in [AccessorKind::Getter, AccessorKind::Setter] {
                let outcome = accessor::plan_accessor(id, field, kind, naming, &inspector);
                push_method(&scope, kind.member_kind(), outcome, &mut items);
            }
        }

        let methods = items.len() - fields.len();
        scope.finish(fields.len(), methods);

        Ok(Additions::new(id.clone(), items))
    }
}

impl Default for Synthesizer<'_> {
    fn default() -> Self {
        Self::new(SynthesisConfig::default())
    }
}

fn push_method(scope: &TraceScope<'_>, kind: MemberKind, outcome: Outcome, items: &mut Vec<Addition>) {
    match outcome {
        Outcome::Emit(method) => {
            scope.emitted(kind, &method.name);
            items.push(Addition::Method(method));
        }
        Outcome::Skip { name, reason } => scope.skipped(kind, &name, reason),
    }
}

fn check_target(id: &MetadataId, details: &TypeDetails) -> Result<(), Error> {
    if !id.is_class(TIMESTAMP) {
        return Err(Error::invalid_identifier(
            ErrorOrigin::Synthesis,
            format!("'{id}' is not a {} identifier", TIMESTAMP.name()),
        ));
    }
    if details.name != *id.type_path() || details.path != *id.logical_path() {
        return Err(Error::invalid_identifier(
            ErrorOrigin::Synthesis,
            format!(
                "declared members of '{}' ({}) do not belong to '{id}'",
                details.name, details.path
            ),
        ));
    }

    Ok(())
}
