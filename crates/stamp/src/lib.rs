//! ## Crate layout
//! - `build`: renders synthesized members into companion source.
//! - `config`: `stamp.toml` loading.
//! - `core`: synthesis, provider, host ports and command operations.
//! - `schema`: the declaration model synthesis reads and writes.
//! - `types`: runtime support the generated code calls into.
//!
//! Generated companions implement [`PrePersist`] and [`PreUpdate`]; the host
//! calls them before a record is first stored and before every later write.

pub use stamp_build as build;
pub use stamp_config as config;
pub use stamp_core as core;
pub use stamp_schema as schema;

pub mod lifecycle;
pub mod types;

pub use lifecycle::{PrePersist, PreUpdate};

/// Workspace version re-export for downstream tooling/tests.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

///
/// Prelude
///

pub mod prelude {
    pub use crate::{
        lifecycle::{PrePersist, PreUpdate},
        types::{DatePattern, Timestamp},
    };
}
