use proptest::prelude::*;
use stamp_core::prelude::*;

const METHOD_NAMES: [&str; 8] = [
    "onCreate",
    "onUpdate",
    "getCreated",
    "setCreated",
    "getUpdated",
    "setUpdated",
    "save",
    "on_update",
];

const PARAM_TYPES: [&str; 3] = ["stamp::types::Timestamp", "String", "u64"];

fn ty(path: &str) -> TypePath {
    TypePath::try_from_str(path).expect("valid path")
}

fn arb_method() -> impl Strategy<Value = MethodDecl> {
    (
        prop::sample::select(METHOD_NAMES.to_vec()),
        prop::collection::vec(prop::sample::select(PARAM_TYPES.to_vec()), 0..3),
    )
        .prop_map(|(name, params)| {
            params
                .into_iter()
                .enumerate()
                .fold(MethodDecl::new(name), |m, (i, p)| {
                    m.with_param(&format!("p{i}"), ty(p))
                })
        })
}

fn arb_details() -> impl Strategy<Value = TypeDetails> {
    prop::collection::vec(arb_method(), 0..6).prop_map(|methods| {
        let mut details = TypeDetails::new(ty("app::Order"), LogicalPath::default());
        details.methods = methods;
        details
    })
}

fn arb_config() -> impl Strategy<Value = SynthesisConfig> {
    (
        prop_oneof![Just(HookShape::Combined), Just(HookShape::Split)],
        prop_oneof![Just(MemberNaming::Bean), Just(MemberNaming::Snake)],
    )
        .prop_map(|(hook_shape, naming)| SynthesisConfig {
            hook_shape,
            naming,
            ..SynthesisConfig::default()
        })
}

fn merge(details: &TypeDetails, additions: &Additions) -> TypeDetails {
    let mut merged = details.clone();
    for item in additions {
        match item {
            Addition::Field(f) => merged.fields.push(f.clone()),
            Addition::Method(m) => merged.methods.push(m.clone()),
        }
    }
    merged
}

proptest! {
    #[test]
    fn output_is_deterministic(details in arb_details(), config in arb_config()) {
        let id = TIMESTAMP.create_identifier(&details.name, &details.path);
        let synthesizer = Synthesizer::new(config);

        let a = synthesizer.synthesize(&id, &details).expect("synthesis succeeds");
        let b = synthesizer.synthesize(&id, &details).expect("synthesis succeeds");
        prop_assert_eq!(a, b);
    }

    #[test]
    fn fields_are_always_created_then_updated(details in arb_details(), config in arb_config()) {
        let id = TIMESTAMP.create_identifier(&details.name, &details.path);
        let additions = Synthesizer::new(config).synthesize(&id, &details).expect("synthesis succeeds");

        let fields: Vec<&str> = additions.fields().map(|f| f.name.as_str()).collect();
        prop_assert_eq!(fields, vec!["created", "updated"]);
        prop_assert!(additions.as_slice()[..2].iter().all(|a| a.as_field().is_some()));
    }

    #[test]
    fn hooks_follow_name_only_rule(details in arb_details(), config in arb_config()) {
        let id = TIMESTAMP.create_identifier(&details.name, &details.path);
        let additions = Synthesizer::new(config.clone()).synthesize(&id, &details).expect("synthesis succeeds");

        for spec in stamp_core::synth::HookSpec::for_shape(config.hook_shape, config.naming) {
            let declared = details.methods.iter().any(|m| m.name == spec.name);
            let emitted = additions.methods().any(|m| m.name == spec.name && !m.annotations.is_empty());
            prop_assert_eq!(emitted, !declared);
        }
    }

    #[test]
    fn setters_follow_signature_rule(details in arb_details()) {
        let id = TIMESTAMP.create_identifier(&details.name, &details.path);
        let additions = Synthesizer::default().synthesize(&id, &details).expect("synthesis succeeds");
        let stamp = ty("stamp::types::Timestamp");

        for name in ["setCreated", "setUpdated"] {
            let declared = details.methods.iter().any(|m| m.matches_signature(name, std::slice::from_ref(&stamp)));
            prop_assert_eq!(additions.contains(name), !declared);
        }
        for name in ["getCreated", "getUpdated"] {
            let declared = details.methods.iter().any(|m| m.name == name);
            prop_assert_eq!(additions.contains(name), !declared);
        }
    }

    #[test]
    fn rerun_after_merge_adds_nothing(details in arb_details(), config in arb_config()) {
        let id = TIMESTAMP.create_identifier(&details.name, &details.path);
        let synthesizer = Synthesizer::new(config);

        let first = synthesizer.synthesize(&id, &details).expect("first pass");
        let merged = merge(&details, &first);
        let second = synthesizer.synthesize(&id, &merged).expect("second pass");

        prop_assert!(second.pending(&merged).is_empty());
        prop_assert_eq!(second, first);
    }
}
