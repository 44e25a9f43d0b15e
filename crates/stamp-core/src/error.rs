use stamp_schema::node::MetadataIdError;
use std::fmt;
use thiserror::Error as ThisError;

///
/// Error
///
/// Structured synthesis/host error with a stable classification.
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
#[error("{message}")]
pub struct Error {
    pub class: ErrorClass,
    pub origin: ErrorOrigin,
    pub message: String,
}

impl Error {
    pub fn new(class: ErrorClass, origin: ErrorOrigin, message: impl Into<String>) -> Self {
        Self {
            class,
            origin,
            message: message.into(),
        }
    }

    /// Construct an invalid-identifier error for a specific origin.
    pub fn invalid_identifier(origin: ErrorOrigin, message: impl Into<String>) -> Self {
        Self::new(ErrorClass::InvalidIdentifier, origin, message)
    }

    /// Construct an operations-origin missing-argument error.
    pub fn missing_argument(name: &str) -> Self {
        Self::new(
            ErrorClass::MissingArgument,
            ErrorOrigin::Operations,
            format!("missing required argument: {name}"),
        )
    }

    /// Construct an operations-origin unavailable error.
    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::new(ErrorClass::Unavailable, ErrorOrigin::Operations, message)
    }

    /// Construct a host-origin failure.
    pub fn host(message: impl Into<String>) -> Self {
        Self::new(ErrorClass::Host, ErrorOrigin::Host, message)
    }

    #[must_use]
    pub fn display_with_class(&self) -> String {
        format!("{}:{}: {}", self.origin, self.class, self.message)
    }
}

impl From<MetadataIdError> for Error {
    fn from(err: MetadataIdError) -> Self {
        Self::invalid_identifier(ErrorOrigin::Synthesis, err.to_string())
    }
}

///
/// ErrorClass
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ErrorClass {
    InvalidIdentifier,
    MissingArgument,
    Unavailable,
    Host,
}

impl fmt::Display for ErrorClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::InvalidIdentifier => "invalid_identifier",
            Self::MissingArgument => "missing_argument",
            Self::Unavailable => "unavailable",
            Self::Host => "host",
        };
        write!(f, "{label}")
    }
}

///
/// ErrorOrigin
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ErrorOrigin {
    Synthesis,
    Provider,
    Operations,
    Host,
}

impl fmt::Display for ErrorOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Synthesis => "synthesis",
            Self::Provider => "provider",
            Self::Operations => "operations",
            Self::Host => "host",
        };
        write!(f, "{label}")
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;
    use stamp_schema::node::MetadataId;

    #[test]
    fn display_with_class_prefixes_origin_and_class() {
        let err = Error::missing_argument("type");

        assert_eq!(
            err.display_with_class(),
            "operations:missing_argument: missing required argument: type"
        );
    }

    #[test]
    fn identifier_errors_map_to_invalid_identifier() {
        let err: Error = MetadataId::parse("").expect_err("empty id").into();

        assert_eq!(err.class, ErrorClass::InvalidIdentifier);
        assert_eq!(err.origin, ErrorOrigin::Synthesis);
    }
}
