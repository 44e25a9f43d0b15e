use stamp_build::BuildError;
use stamp_config::ConfigError;
use stamp_schema::node::TypePath;
use std::path::PathBuf;
use thiserror::Error as ThisError;

///
/// CliError
///

#[derive(Debug, ThisError)]
pub enum CliError {
    #[error(transparent)]
    Usage(#[from] clap::Error),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("{}", .0.display_with_class())]
    Core(#[from] stamp_core::Error),

    #[error("render error: {0}")]
    Build(#[from] BuildError),

    #[error("project file '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("project file '{path}' is not valid: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("type '{0}' is not declared in the project")]
    UnknownType(TypePath),

    #[error("type '{0}' is not annotated for timestamps")]
    NotTriggered(TypePath),
}

impl CliError {
    /// Process exit status for this error.
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Usage(e) => e.exit_code(),
            _ => 1,
        }
    }
}

/// CLI result type
pub type CliResult<T> = Result<T, CliError>;
