use serde::{Deserialize, Serialize};
use stamp_schema::{error::ErrorTree, node::TypePath};

pub const DEFAULT_TRIGGER_MARKER: &str = "stamp::Timestamped";
pub const DEFAULT_RECORD_MARKER: &str = "stamp::Record";

///
/// MarkerConfig
///
/// `trigger` opts a type into timestamp synthesis; `record` identifies the
/// plain data types that the `all` command opts in.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct MarkerConfig {
    pub trigger: TypePath,
    pub record: TypePath,
}

impl MarkerConfig {
    pub(crate) fn validate(&self, errs: &mut ErrorTree) {
        if self.trigger == self.record {
            errs.add_for(
                "trigger",
                format!("trigger marker '{}' must differ from the record marker", self.trigger),
            );
        }
    }
}

impl Default for MarkerConfig {
    fn default() -> Self {
        Self {
            trigger: TypePath::builtin(DEFAULT_TRIGGER_MARKER),
            record: TypePath::builtin(DEFAULT_RECORD_MARKER),
        }
    }
}
