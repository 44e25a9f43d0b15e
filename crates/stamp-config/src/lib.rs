//! `stamp.toml` loading and validation.
//!
//! Every section is optional; a missing file, section or key falls back to the
//! built-in defaults.

mod markers;
mod setup;
mod synthesis;

pub use markers::*;
pub use setup::*;
pub use synthesis::*;

use serde::{Deserialize, Serialize};
use stamp_schema::error::ErrorTree;
use std::{
    fs,
    path::{Path, PathBuf},
};
use thiserror::Error as ThisError;

/// File name looked up in the project root when no path is given.
pub const CONFIG_FILE_NAME: &str = "stamp.toml";

///
/// ConfigError
///

#[derive(Debug, ThisError)]
pub enum ConfigError {
    #[error("failed to read config '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid config: {0}")]
    Invalid(ErrorTree),
}

///
/// StampConfig
///

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct StampConfig {
    pub synthesis: SynthesisConfig,
    pub markers: MarkerConfig,
    pub setup: SetupConfig,
}

impl StampConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(s)?;
        config.validate()?;

        Ok(config)
    }

    /// Load a config file that must exist.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        Self::from_toml_str(&contents)
    }

    /// Load a config file if present, otherwise the defaults.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut errs = ErrorTree::new();

        let mut tree = ErrorTree::new();
        self.synthesis.validate(&mut tree);
        errs.merge_for("synthesis", tree);

        let mut tree = ErrorTree::new();
        self.markers.validate(&mut tree);
        errs.merge_for("markers", tree);

        let mut tree = ErrorTree::new();
        self.setup.validate(&mut tree);
        errs.merge_for("setup", tree);

        errs.result().map_err(ConfigError::Invalid)
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn empty_document_yields_defaults() {
        let config = StampConfig::from_toml_str("").expect("empty config parses");

        assert_eq!(config, StampConfig::default());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn sections_override_defaults() {
        let config = StampConfig::from_toml_str(
            r#"
            [synthesis]
            hook_shape = "split"
            naming = "snake"
            date_pattern = "dd/MM/yyyy"

            [markers]
            trigger = "app::meta::Audited"

            [setup]
            version = "1.2.0-snapshot"
            "#,
        )
        .expect("config parses");

        assert_eq!(config.synthesis.hook_shape, HookShape::Split);
        assert_eq!(config.synthesis.naming, MemberNaming::Snake);
        assert_eq!(config.synthesis.date_pattern, "dd/MM/yyyy");
        assert_eq!(config.synthesis.date_type.as_str(), DEFAULT_DATE_TYPE);
        assert_eq!(config.markers.trigger.as_str(), "app::meta::Audited");
        assert_eq!(config.markers.record.as_str(), DEFAULT_RECORD_MARKER);
        assert!(config.setup.is_snapshot());
    }

    #[test]
    fn unknown_keys_and_bad_paths_fail_to_parse() {
        assert!(matches!(
            StampConfig::from_toml_str("[synthesis]\nshape = \"split\"\n"),
            Err(ConfigError::Parse(_))
        ));
        assert!(matches!(
            StampConfig::from_toml_str("[markers]\ntrigger = \"not a path\"\n"),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn semantic_errors_are_collected() {
        let err = StampConfig::from_toml_str(
            r#"
            [synthesis]
            date_pattern = ""

            [markers]
            trigger = "stamp::Record"
            "#,
        )
        .expect_err("config should be rejected");

        let ConfigError::Invalid(tree) = err else {
            panic!("expected validation error, got {err:?}");
        };
        assert_eq!(tree.len(), 2);
    }

    #[test]
    fn load_reads_file_and_missing_file_defaults() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        writeln!(file, "[synthesis]\nnaming = \"snake\"").expect("write config");

        let config = StampConfig::load(file.path()).expect("config loads");
        assert_eq!(config.synthesis.naming, MemberNaming::Snake);

        let dir = tempfile::tempdir().expect("temp dir");
        let missing = dir.path().join(CONFIG_FILE_NAME);
        assert!(matches!(
            StampConfig::load(&missing),
            Err(ConfigError::Io { .. })
        ));
        assert_eq!(
            StampConfig::load_or_default(&missing).expect("defaults"),
            StampConfig::default()
        );
    }
}
