use crate::synth::markers;
use stamp_config::SynthesisConfig;
use stamp_schema::node::{FieldDecl, MetadataId};

pub const CREATED: &str = "created";
pub const UPDATED: &str = "updated";

/// The synthetic field names, in emission order.
pub const TIMESTAMP_FIELDS: [&str; 2] = [CREATED, UPDATED];

/// `created` then `updated`: private, of the configured date type, carrying
/// the temporal and display-format markers. Never skipped.
#[must_use]
pub fn synthesize_fields(id: &MetadataId, config: &SynthesisConfig) -> [FieldDecl; 2] {
    TIMESTAMP_FIELDS.map(|name| timestamp_field(id, name, config))
}

fn timestamp_field(id: &MetadataId, name: &str, config: &SynthesisConfig) -> FieldDecl {
    let mut field = FieldDecl::new(name, config.date_type.clone());
    field.origin = Some(id.clone());
    field.annotations = vec![
        markers::temporal(),
        markers::date_time_format(&config.date_pattern),
    ];

    field
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::synth::TIMESTAMP;
    use stamp_schema::{
        node::{AttrValue, LogicalPath, TypePath},
        types::Visibility,
    };

    #[test]
    fn fields_are_private_and_annotated() {
        let ty = TypePath::try_from_str("app::Order").expect("valid path");
        let id = TIMESTAMP.create_identifier(&ty, &LogicalPath::default());
        let config = SynthesisConfig {
            date_pattern: "dd.MM.yyyy".to_string(),
            ..SynthesisConfig::default()
        };

        let [created, updated] = synthesize_fields(&id, &config);

        assert_eq!(created.name, CREATED);
        assert_eq!(updated.name, UPDATED);
        for field in [&created, &updated] {
            assert_eq!(field.origin.as_ref(), Some(&id));
            assert_eq!(field.modifiers.visibility, Visibility::Private);
            assert_eq!(field.ty, config.date_type);
            assert_eq!(field.annotations.len(), 2);
            assert_eq!(field.annotations[0].ty.as_str(), markers::TEMPORAL);
            assert_eq!(
                field.annotations[1]
                    .attribute("pattern")
                    .and_then(AttrValue::as_str),
                Some("dd.MM.yyyy")
            );
        }
    }
}
