use crate::{
    MAX_TYPE_PATH_LEN,
    prelude::*,
    validate::naming::{IdentError, validate_ident},
};
use std::{fmt, str::FromStr};
use thiserror::Error as ThisError;

/// Separator between type path segments.
pub const PATH_SEPARATOR: &str = "::";

///
/// TypePathError
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum TypePathError {
    #[error("type path is empty")]
    Empty,

    #[error("type path length {len} exceeds max {max}")]
    TooLong { len: usize, max: usize },

    #[error("type path '{path}' has an invalid segment: {source}")]
    Segment {
        path: String,
        #[source]
        source: IdentError,
    },
}

///
/// TypePath
///
/// Fully-qualified type name, e.g. `app::model::Order`. Every construction
/// path validates, so a `TypePath` in hand is always well-formed.
///

#[derive(Clone, Debug, Deserialize, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
#[serde(try_from = "String", into = "String")]
pub struct TypePath(String);

impl TypePath {
    pub fn try_from_str(path: &str) -> Result<Self, TypePathError> {
        let path = path.trim();

        if path.is_empty() {
            return Err(TypePathError::Empty);
        }
        if path.len() > MAX_TYPE_PATH_LEN {
            return Err(TypePathError::TooLong {
                len: path.len(),
                max: MAX_TYPE_PATH_LEN,
            });
        }

        for segment in path.split(PATH_SEPARATOR) {
            validate_ident(segment).map_err(|source| TypePathError::Segment {
                path: path.to_string(),
                source,
            })?;
        }

        Ok(Self(path.to_string()))
    }

    /// Construct a path the crate itself ships (marker and date types).
    ///
    /// Panics if the literal is malformed; built-in paths are covered by tests.
    #[must_use]
    pub fn builtin(path: &'static str) -> Self {
        Self::try_from_str(path)
            .unwrap_or_else(|e| panic!("invalid built-in type path '{path}': {e}"))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.0.split(PATH_SEPARATOR)
    }

    /// Last segment of the path.
    #[must_use]
    pub fn simple_name(&self) -> &str {
        self.0
            .rsplit_once(PATH_SEPARATOR)
            .map_or(self.0.as_str(), |(_, name)| name)
    }

    /// Everything before the last segment, if the path is qualified.
    #[must_use]
    pub fn module(&self) -> Option<&str> {
        self.0.rsplit_once(PATH_SEPARATOR).map(|(module, _)| module)
    }
}

impl fmt::Display for TypePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for TypePath {
    type Err = TypePathError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::try_from_str(s)
    }
}

impl TryFrom<String> for TypePath {
    type Error = TypePathError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::try_from_str(&value)
    }
}

impl From<TypePath> for String {
    fn from(path: TypePath) -> Self {
        path.0
    }
}

///
/// TESTS
///
