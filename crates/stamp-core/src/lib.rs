//! Timestamp synthesis: inspects a type's declared members and computes the
//! `created`/`updated` fields, lifecycle hooks and accessors to merge into
//! its generated companion.
//!
//! Synthesis itself is pure. Hosts supply declared-member snapshots through
//! the ports in [`host`] and own the merge step; [`memory::MemoryProject`] is
//! the reference host.

pub mod addition;
pub mod error;
pub mod host;
pub mod inspect;
pub mod memory;
pub mod ops;
pub mod provider;
pub mod synth;
pub mod trace;

pub use error::{Error, ErrorClass, ErrorOrigin};

///
/// Prelude
///

pub mod prelude {
    pub use crate::{
        addition::{Addition, Additions},
        error::{Error, ErrorClass, ErrorOrigin},
        host::{DependencyRegistry, MemberSource, ProjectOperations, TypeLocator, TypeManager},
        inspect::MemberInspector,
        memory::MemoryProject,
        ops::TimestampOperations,
        provider::TimestampProvider,
        synth::{Synthesizer, TIMESTAMP},
        trace::{SynthesisTraceEvent, SynthesisTraceSink},
    };
    pub use stamp_config::{HookShape, MemberNaming, StampConfig, SynthesisConfig};
    pub use stamp_schema::node::{
        FieldDecl, LogicalPath, MetadataId, MethodDecl, Statement, TypeDetails, TypePath,
    };
}
