use stamp_core::{
    prelude::*,
    synth::markers::{PRE_PERSIST, PRE_UPDATE},
};
use std::sync::Mutex;

fn ty(path: &str) -> TypePath {
    TypePath::try_from_str(path).expect("valid path")
}

fn order() -> TypeDetails {
    TypeDetails::new(ty("app::model::Order"), LogicalPath::default())
}

fn id_for(details: &TypeDetails) -> MetadataId {
    TIMESTAMP.create_identifier(&details.name, &details.path)
}

fn split() -> Synthesizer<'static> {
    Synthesizer::new(SynthesisConfig {
        hook_shape: HookShape::Split,
        ..SynthesisConfig::default()
    })
}

#[derive(Default)]
struct Recorder(Mutex<Vec<String>>);

impl SynthesisTraceSink for Recorder {
    fn on_event(&self, event: SynthesisTraceEvent<'_>) {
        let line = match event {
            SynthesisTraceEvent::Start { .. } => "start".to_string(),
            SynthesisTraceEvent::Emitted { kind, name, .. } => format!("emit {kind:?} {name}"),
            SynthesisTraceEvent::Skipped {
                kind, name, reason, ..
            } => format!("skip {kind:?} {name} {reason:?}"),
            SynthesisTraceEvent::Finish {
                fields, methods, ..
            } => format!("finish {fields}/{methods}"),
            SynthesisTraceEvent::Error { class, .. } => format!("error {class}"),
        };
        self.0.lock().expect("recorder lock").push(line);
    }
}

impl Recorder {
    fn lines(&self) -> Vec<String> {
        self.0.lock().expect("recorder lock").clone()
    }
}

#[test]
fn empty_target_gets_full_combined_group() {
    let details = order();
    let id = id_for(&details);

    let additions = Synthesizer::default()
        .synthesize(&id, &details)
        .expect("synthesis succeeds");

    assert_eq!(
        additions.names(),
        vec![
            "created",
            "updated",
            "onUpdate",
            "getCreated",
            "setCreated",
            "getUpdated",
            "setUpdated",
        ]
    );
    assert!(additions.iter().all(|a| a.origin() == Some(&id)));

    let hook = additions.methods().next().expect("hook");
    let markers: Vec<_> = hook.annotations.iter().map(|a| a.ty.as_str()).collect();
    assert_eq!(markers, vec![PRE_PERSIST, PRE_UPDATE]);
    assert_eq!(
        hook.body,
        vec![
            Statement::AssignNowIfUnset {
                field: "created".to_string()
            },
            Statement::AssignNow {
                field: "updated".to_string()
            },
        ]
    );
}

#[test]
fn empty_target_gets_both_hooks_when_split() {
    let details = order();
    let additions = split()
        .synthesize(&id_for(&details), &details)
        .expect("synthesis succeeds");

    assert_eq!(
        additions.names(),
        vec![
            "created",
            "updated",
            "onCreate",
            "onUpdate",
            "getCreated",
            "setCreated",
            "getUpdated",
            "setUpdated",
        ]
    );
}

#[test]
fn declared_update_hook_is_respected() {
    let details = order().with_method(MethodDecl::new("onUpdate"));
    let id = id_for(&details);

    let combined = Synthesizer::default()
        .synthesize(&id, &details)
        .expect("synthesis succeeds");
    assert!(!combined.contains("onUpdate"));
    assert_eq!(combined.len(), 6);

    let split = split().synthesize(&id, &details).expect("synthesis succeeds");
    assert!(split.contains("onCreate"));
    assert!(!split.contains("onUpdate"));
}

#[test]
fn empty_identifier_fails_without_output() {
    let recorder = Recorder::default();
    let err = Synthesizer::default()
        .with_sink(&recorder)
        .synthesize_str("", &order())
        .expect_err("empty identifier is rejected");

    assert_eq!(err.class, ErrorClass::InvalidIdentifier);
    assert_eq!(recorder.lines(), vec!["error invalid_identifier"]);
}

#[test]
fn wrong_class_or_foreign_snapshot_is_rejected() {
    let details = order();

    let physical = details.physical_id();
    let err = Synthesizer::default()
        .synthesize(&physical, &details)
        .expect_err("physical id is rejected");
    assert_eq!(err.class, ErrorClass::InvalidIdentifier);

    let other = TypeDetails::new(ty("app::model::Invoice"), LogicalPath::default());
    let err = Synthesizer::default()
        .synthesize(&id_for(&details), &other)
        .expect_err("snapshot of another type is rejected");
    assert_eq!(err.class, ErrorClass::InvalidIdentifier);
}

#[test]
fn string_identifier_round_trips() {
    let details = order();
    let id = id_for(&details);

    let from_str = Synthesizer::default()
        .synthesize_str(&id.to_string(), &details)
        .expect("synthesis succeeds");

    assert_eq!(from_str.origin(), &id);
}

#[test]
fn declared_accessors_are_skipped_and_traced() {
    let stamp = ty("stamp::types::Timestamp");
    let details = order()
        .with_method(MethodDecl::new("getCreated").returning(stamp.clone()))
        .with_method(MethodDecl::new("setUpdated").with_param("value", stamp));
    let recorder = Recorder::default();

    let additions = Synthesizer::default()
        .with_sink(&recorder)
        .synthesize(&id_for(&details), &details)
        .expect("synthesis succeeds");

    assert_eq!(
        additions.names(),
        vec!["created", "updated", "onUpdate", "setCreated", "getUpdated"]
    );
    assert_eq!(
        recorder.lines(),
        vec![
            "start",
            "emit Field created",
            "emit Field updated",
            "emit Hook onUpdate",
            "skip Getter getCreated AlreadyDeclared",
            "emit Setter setCreated",
            "emit Getter getUpdated",
            "skip Setter setUpdated AlreadyDeclared",
            "finish 2/3",
        ]
    );
}

#[test]
fn snake_naming_changes_every_method_name() {
    let details = order();
    let synthesizer = Synthesizer::new(SynthesisConfig {
        naming: MemberNaming::Snake,
        ..SynthesisConfig::default()
    });

    let additions = synthesizer
        .synthesize(&id_for(&details), &details)
        .expect("synthesis succeeds");

    assert_eq!(
        additions.names(),
        vec![
            "created",
            "updated",
            "on_update",
            "created",
            "set_created",
            "updated",
            "set_updated",
        ]
    );
}

#[test]
fn rerun_over_merged_output_is_stable() {
    let details = order();
    let id = id_for(&details);
    let synthesizer = Synthesizer::default();

    let first = synthesizer.synthesize(&id, &details).expect("first pass");
    assert_eq!(first.pending(&details).len(), first.len());

    let mut merged = details;
    for item in &first {
        match item {
            Addition::Field(f) => merged.fields.push(f.clone()),
            Addition::Method(m) => merged.methods.push(m.clone()),
        }
    }

    let second = synthesizer.synthesize(&id, &merged).expect("second pass");
    assert_eq!(second, first);
    assert!(second.pending(&merged).is_empty());
}
