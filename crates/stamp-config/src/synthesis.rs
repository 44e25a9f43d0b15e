use serde::{Deserialize, Serialize};
use stamp_schema::{error::ErrorTree, node::TypePath};

/// Display pattern used when none is configured.
pub const DEFAULT_DATE_PATTERN: &str = "yyyy-MM-dd HH:mm:ss";

/// Date type used for the synthesized fields when none is configured.
pub const DEFAULT_DATE_TYPE: &str = "stamp::types::Timestamp";

/// Tokens a display pattern must draw from at least once.
const PATTERN_TOKENS: &[&str] = &["yyyy", "MM", "dd", "HH", "mm", "ss"];

///
/// HookShape
///
/// How lifecycle hooks populate the timestamps. One shape is applied per
/// synthesis pass, never a mix.
///

#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum HookShape {
    /// One update hook on insert and update; sets `created` only while unset.
    #[default]
    Combined,

    /// Separate create and update hooks, each setting its own field.
    Split,
}

///
/// MemberNaming
///
/// The fixed convention that derives hook and accessor names.
///

#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MemberNaming {
    /// `getCreated`, `setCreated`, `onUpdate`
    #[default]
    Bean,

    /// `created`, `set_created`, `on_update`
    Snake,
}

///
/// SynthesisConfig
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct SynthesisConfig {
    pub hook_shape: HookShape,
    pub naming: MemberNaming,
    pub date_pattern: String,
    pub date_type: TypePath,
}

impl SynthesisConfig {
    pub(crate) fn validate(&self, errs: &mut ErrorTree) {
        if self.date_pattern.trim().is_empty() {
            errs.add_for("date_pattern", "date pattern is empty");
        } else if !PATTERN_TOKENS
            .iter()
            .any(|token| self.date_pattern.contains(token))
        {
            errs.add_for(
                "date_pattern",
                format!(
                    "date pattern '{}' contains none of {PATTERN_TOKENS:?}",
                    self.date_pattern
                ),
            );
        }
    }
}

impl Default for SynthesisConfig {
    fn default() -> Self {
        Self {
            hook_shape: HookShape::default(),
            naming: MemberNaming::default(),
            date_pattern: DEFAULT_DATE_PATTERN.to_string(),
            date_type: TypePath::builtin(DEFAULT_DATE_TYPE),
        }
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_use_combined_bean_and_explicit_pattern() {
        let cfg = SynthesisConfig::default();

        assert_eq!(cfg.hook_shape, HookShape::Combined);
        assert_eq!(cfg.naming, MemberNaming::Bean);
        assert_eq!(cfg.date_pattern, DEFAULT_DATE_PATTERN);
        assert_eq!(cfg.date_type.as_str(), DEFAULT_DATE_TYPE);
    }

    #[test]
    fn pattern_without_tokens_is_invalid() {
        let cfg = SynthesisConfig {
            date_pattern: "short".to_string(),
            ..SynthesisConfig::default()
        };
        let mut errs = ErrorTree::new();
        cfg.validate(&mut errs);

        assert_eq!(errs.len(), 1);
    }
}
