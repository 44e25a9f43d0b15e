use crate::{
    prelude::*,
    validate::naming::{IdentError, validate_module_name},
};
use std::{fmt, str::FromStr};
use thiserror::Error as ThisError;

/// Separator between the module name and the path kind.
pub const MODULE_SEPARATOR: char = '|';

///
/// LogicalPathError
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum LogicalPathError {
    #[error("logical path is empty")]
    Empty,

    #[error("unknown path kind '{kind}'")]
    UnknownKind { kind: String },

    #[error("invalid module name: {0}")]
    Module(#[from] IdentError),
}

///
/// LogicalPath
///
/// A source set within a (possibly nested) project module. Renders as
/// `KIND` for the root module and `module|KIND` otherwise.
///

#[derive(Clone, Debug, Default, Deserialize, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
#[serde(try_from = "String", into = "String")]
pub struct LogicalPath {
    module: String,
    kind: PathKind,
}

impl LogicalPath {
    /// Path in the root module.
    #[must_use]
    pub const fn root(kind: PathKind) -> Self {
        Self {
            module: String::new(),
            kind,
        }
    }

    pub fn new(module: impl Into<String>, kind: PathKind) -> Result<Self, LogicalPathError> {
        let module = module.into();
        if !module.is_empty() {
            validate_module_name(&module)?;
        }

        Ok(Self { module, kind })
    }

    #[must_use]
    pub fn module(&self) -> &str {
        &self.module
    }

    #[must_use]
    pub const fn kind(&self) -> PathKind {
        self.kind
    }

    #[must_use]
    pub const fn is_root_module(&self) -> bool {
        self.module.is_empty()
    }
}

impl fmt::Display for LogicalPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.module.is_empty() {
            write!(f, "{}", self.kind)
        } else {
            write!(f, "{}{MODULE_SEPARATOR}{}", self.module, self.kind)
        }
    }
}

impl FromStr for LogicalPath {
    type Err = LogicalPathError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(LogicalPathError::Empty);
        }

        let (module, kind) = s.rsplit_once(MODULE_SEPARATOR).unwrap_or(("", s));
        let kind = kind
            .parse::<PathKind>()
            .map_err(|_| LogicalPathError::UnknownKind {
                kind: kind.to_string(),
            })?;

        Self::new(module, kind)
    }
}

impl TryFrom<String> for LogicalPath {
    type Error = LogicalPathError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<LogicalPath> for String {
    fn from(path: LogicalPath) -> Self {
        path.to_string()
    }
}

///
/// TESTS
///
