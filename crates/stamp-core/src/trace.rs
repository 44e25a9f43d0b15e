//! Synthesis tracing boundary.
//!
//! Tracing is optional, injected by the caller, and must not affect synthesis output.

use crate::error::{Error, ErrorClass, ErrorOrigin};
use stamp_schema::node::MetadataId;

///
/// SynthesisTraceSink
///

pub trait SynthesisTraceSink: Send + Sync {
    fn on_event(&self, event: SynthesisTraceEvent<'_>);
}

///
/// MemberKind
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum MemberKind {
    Field,
    Hook,
    Getter,
    Setter,
}

///
/// SkipReason
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SkipReason {
    /// The user already declared a method the synthetic one would collide with.
    AlreadyDeclared,

    /// The field's modifiers exclude this accessor.
    Modifiers,
}

///
/// SynthesisTraceEvent
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SynthesisTraceEvent<'a> {
    Start {
        id: &'a MetadataId,
    },
    Emitted {
        id: &'a MetadataId,
        kind: MemberKind,
        name: &'a str,
    },
    Skipped {
        id: &'a MetadataId,
        kind: MemberKind,
        name: &'a str,
        reason: SkipReason,
    },
    Finish {
        id: &'a MetadataId,
        fields: u32,
        methods: u32,
    },
    Error {
        class: ErrorClass,
        origin: ErrorOrigin,
    },
}

///
/// TraceScope
///
/// Per-pass emitter; every call is a no-op without a sink.
///

#[derive(Clone, Copy)]
pub(crate) struct TraceScope<'a> {
    sink: Option<&'a dyn SynthesisTraceSink>,
    id: &'a MetadataId,
}

impl<'a> TraceScope<'a> {
    pub(crate) fn start(sink: Option<&'a dyn SynthesisTraceSink>, id: &'a MetadataId) -> Self {
        if let Some(sink) = sink {
            sink.on_event(SynthesisTraceEvent::Start { id });
        }

        Self { sink, id }
    }

    pub(crate) fn emitted(&self, kind: MemberKind, name: &str) {
        tracing::debug!(id = %self.id, ?kind, member = name, "synthesized member");

        if let Some(sink) = self.sink {
            sink.on_event(SynthesisTraceEvent::Emitted {
                id: self.id,
                kind,
                name,
            });
        }
    }

    pub(crate) fn skipped(&self, kind: MemberKind, name: &str, reason: SkipReason) {
        tracing::debug!(id = %self.id, ?kind, member = name, ?reason, "skipped member");

        if let Some(sink) = self.sink {
            sink.on_event(SynthesisTraceEvent::Skipped {
                id: self.id,
                kind,
                name,
                reason,
            });
        }
    }

    pub(crate) fn finish(self, fields: usize, methods: usize) {
        if let Some(sink) = self.sink {
            sink.on_event(SynthesisTraceEvent::Finish {
                id: self.id,
                fields: u32::try_from(fields).unwrap_or(u32::MAX),
                methods: u32::try_from(methods).unwrap_or(u32::MAX),
            });
        }
    }
}

/// Report a pass that failed before a scope could be opened.
pub(crate) fn trace_error(sink: Option<&dyn SynthesisTraceSink>, err: &Error) {
    tracing::warn!(class = %err.class, origin = %err.origin, "synthesis failed: {}", err.message);

    if let Some(sink) = sink {
        sink.on_event(SynthesisTraceEvent::Error {
            class: err.class,
            origin: err.origin,
        });
    }
}
