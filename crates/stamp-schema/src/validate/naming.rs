use crate::{MAX_IDENT_LEN, validate::reserved::is_reserved_word};
use thiserror::Error as ThisError;

///
/// IdentError
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum IdentError {
    #[error("ident is empty")]
    Empty,

    #[error("ident '{ident}' exceeds max length {max}")]
    TooLong { ident: String, max: usize },

    #[error("ident '{ident}' must be ASCII")]
    NonAscii { ident: String },

    #[error("ident '{ident}' must start with a letter or underscore")]
    InvalidStart { ident: String },

    #[error("ident '{ident}' contains invalid character '{ch}'")]
    InvalidChar { ident: String, ch: char },

    #[error("the word '{ident}' is reserved")]
    Reserved { ident: String },
}

/// Ensure an identifier is non-empty, ASCII, well-formed and not reserved.
pub fn validate_ident(ident: &str) -> Result<(), IdentError> {
    let Some(first) = ident.chars().next() else {
        return Err(IdentError::Empty);
    };

    if ident.len() > MAX_IDENT_LEN {
        return Err(IdentError::TooLong {
            ident: ident.to_string(),
            max: MAX_IDENT_LEN,
        });
    }
    if !ident.is_ascii() {
        return Err(IdentError::NonAscii {
            ident: ident.to_string(),
        });
    }
    if !(first.is_ascii_alphabetic() || first == '_') {
        return Err(IdentError::InvalidStart {
            ident: ident.to_string(),
        });
    }
    if let Some(ch) = ident
        .chars()
        .find(|c| !(c.is_ascii_alphanumeric() || *c == '_'))
    {
        return Err(IdentError::InvalidChar {
            ident: ident.to_string(),
            ch,
        });
    }

    // reserved?
    if is_reserved_word(ident) {
        return Err(IdentError::Reserved {
            ident: ident.to_string(),
        });
    }

    Ok(())
}

/// Module names follow crate naming, so `-` is allowed as well.
pub fn validate_module_name(name: &str) -> Result<(), IdentError> {
    validate_ident(&name.replace('-', "_"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_empty_and_reserved_words() {
        assert_eq!(validate_ident(""), Err(IdentError::Empty));
        assert!(
            matches!(validate_ident("struct"), Err(IdentError::Reserved { .. })),
            "reserved keywords should be rejected"
        );
    }

    #[test]
    fn rejects_malformed_identifiers() {
        assert!(matches!(
            validate_ident("9lives"),
            Err(IdentError::InvalidStart { .. })
        ));
        assert_eq!(
            validate_ident("on-update"),
            Err(IdentError::InvalidChar {
                ident: "on-update".to_string(),
                ch: '-',
            })
        );
        assert!(matches!(
            validate_ident("créé"),
            Err(IdentError::NonAscii { .. })
        ));
        assert!(matches!(
            validate_ident(&"a".repeat(MAX_IDENT_LEN + 1)),
            Err(IdentError::TooLong { .. })
        ));
    }

    #[test]
    fn accepts_bean_and_snake_names() {
        assert!(validate_ident("getCreated").is_ok());
        assert!(validate_ident("set_updated").is_ok());
        assert!(validate_ident("_private").is_ok());
    }

    #[test]
    fn module_names_may_contain_dashes() {
        assert!(validate_module_name("billing-core").is_ok());
        assert!(validate_module_name("billing core").is_err());
    }
}
