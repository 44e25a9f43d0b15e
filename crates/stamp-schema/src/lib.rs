pub mod error;
pub mod node;
pub mod types;
pub mod validate;

/// Maximum length for a fully-qualified type path.
pub const MAX_TYPE_PATH_LEN: usize = 256;

/// Maximum length for a single identifier (path segment, field or method name).
pub const MAX_IDENT_LEN: usize = 64;

/// Prefix shared by every metadata identifier.
pub const MID_PREFIX: &str = "MID:";

use crate::node::{LogicalPathError, MetadataIdError, TypePathError};
use thiserror::Error as ThisError;

///
/// Prelude
///

pub mod prelude {
    pub use crate::{
        err,
        error::ErrorTree,
        node::*,
        types::{PathKind, Visibility},
        validate::ValidateNode,
    };
    pub use serde::{Deserialize, Serialize};
}

///
/// Error
///

#[derive(Debug, ThisError)]
pub enum Error {
    #[error(transparent)]
    TypePath(#[from] TypePathError),

    #[error(transparent)]
    LogicalPath(#[from] LogicalPathError),

    #[error(transparent)]
    MetadataId(#[from] MetadataIdError),

    #[error("validation failed: {0}")]
    Validation(error::ErrorTree),
}
