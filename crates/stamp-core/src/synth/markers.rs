//! Marker types attached to synthesized members. They are inert data; the host
//! decides what they mean at build time.

use stamp_schema::node::{Annotation, TypePath};

pub const TEMPORAL: &str = "stamp::Temporal";
pub const TEMPORAL_TYPE: &str = "stamp::TemporalType";
pub const TEMPORAL_TIMESTAMP: &str = "TIMESTAMP";
pub const DATE_TIME_FORMAT: &str = "stamp::DateTimeFormat";
pub const PRE_PERSIST: &str = "stamp::PrePersist";
pub const PRE_UPDATE: &str = "stamp::PreUpdate";

/// `stamp::Temporal(value = stamp::TemporalType::TIMESTAMP)`
#[must_use]
pub fn temporal() -> Annotation {
    Annotation::new(TypePath::builtin(TEMPORAL)).with_enum(
        "value",
        TypePath::builtin(TEMPORAL_TYPE),
        TEMPORAL_TIMESTAMP,
    )
}

/// `stamp::DateTimeFormat(pattern = "<pattern>")`
#[must_use]
pub fn date_time_format(pattern: &str) -> Annotation {
    Annotation::new(TypePath::builtin(DATE_TIME_FORMAT)).with_str("pattern", pattern)
}

///
/// Lifecycle
///
/// The persistence events a hook runs on.
///

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Lifecycle {
    PrePersist,
    PreUpdate,
}

impl Lifecycle {
    #[must_use]
    pub const fn marker_path(self) -> &'static str {
        match self {
            Self::PrePersist => PRE_PERSIST,
            Self::PreUpdate => PRE_UPDATE,
        }
    }

    #[must_use]
    pub fn marker(self) -> Annotation {
        Annotation::new(TypePath::builtin(self.marker_path()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stamp_schema::node::AttrValue;

    #[test]
    fn built_in_markers_are_well_formed() {
        let temporal = temporal();
        assert_eq!(temporal.ty.as_str(), TEMPORAL);
        assert!(matches!(
            temporal.attribute("value"),
            Some(AttrValue::Enum { constant, .. }) if constant == TEMPORAL_TIMESTAMP
        ));

        let format = date_time_format("dd/MM/yyyy");
        assert_eq!(
            format.attribute("pattern").and_then(AttrValue::as_str),
            Some("dd/MM/yyyy")
        );

        assert_eq!(Lifecycle::PrePersist.marker().ty.as_str(), PRE_PERSIST);
        assert_eq!(Lifecycle::PreUpdate.marker().ty.as_str(), PRE_UPDATE);
    }
}
