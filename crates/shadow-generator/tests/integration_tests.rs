//! Integration tests for shadow-generator
//!
//! These tests drive the public API the way the CLI does.

use serde_json::json;
use shadow_generator::files::{load_rules_from_yaml, rule_template, save_rules_to_yaml};
use shadow_generator::{
    extract_payload, normalize, Generated, GeneratorConfig, GeneratorError, MockData, ShadowAi,
    META_GENERATED_COUNT, META_MODEL_ID,
};
use shadow_llm::MockProvider;
use shadow_rules::{library, FieldSpec, RuleType};

#[test]
fn test_envelope_json_shape() {
    let ai = ShadowAi::new(
        MockProvider::new(r#"[{"company": "Initech"}, {"company": "Globex"}]"#)
            .with_model_id("gpt-4o-mini"),
    );

    let envelope = ai.generate_formatted(library::company_profile(), 2);
    let rendered = serde_json::to_value(&envelope).unwrap();

    assert_eq!(rendered["success"], true);
    assert_eq!(rendered["error"], serde_json::Value::Null);
    assert_eq!(rendered["data"][1]["company"], "Globex");
    assert_eq!(rendered["metadata"][META_MODEL_ID], "gpt-4o-mini");
    assert_eq!(rendered["metadata"][META_GENERATED_COUNT], 2);
}

#[test]
fn test_unsupported_input_in_both_modes() {
    let ai = ShadowAi::new(MockProvider::default());

    let err = ai.generate(json!(123), 1).unwrap_err();
    assert!(matches!(err, GeneratorError::InvalidInputKind(_)));

    match ai.generate_with(json!(123), 1, true).unwrap() {
        Generated::Envelope(envelope) => {
            assert!(!envelope.success);
            assert!(envelope.error.is_some_and(|e| !e.is_empty()));
        }
        other => panic!("Expected envelope, got {:?}", other),
    }
}

#[test]
fn test_extractor_contract() {
    assert_eq!(
        extract_payload(r#"{"email": "a@b.com"}"#, 1).unwrap(),
        MockData::Record(json!({"email": "a@b.com"}).as_object().unwrap().clone())
    );
    assert_eq!(extract_payload(r#"[{"a":1},{"a":2}]"#, 2).unwrap().len(), 2);
    assert!(matches!(
        extract_payload("no json here", 1),
        Err(GeneratorError::NoValidJsonFound)
    ));
}

#[test]
fn test_templates_survive_yaml() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("templates.yaml");

    let entries = normalize(json!([
        rule_template(RuleType::Record),
        rule_template(RuleType::Combination),
        rule_template(RuleType::Package),
    ]))
    .unwrap();
    save_rules_to_yaml(&entries, &path).unwrap();

    let loaded = load_rules_from_yaml(&path).unwrap();
    let kinds: Vec<RuleType> = loaded.iter().map(|e| e.rule_type()).collect();
    assert_eq!(kinds, [RuleType::Record, RuleType::Combination, RuleType::Package]);
}

#[test]
fn test_config_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("shadow.toml");
    std::fs::write(
        &path,
        "model_id = \"gpt-4o\"\napi_base = \"http://localhost:11434/v1\"\ntemperature = 0.3\n",
    )
    .unwrap();

    let config = GeneratorConfig::load(&path).unwrap();
    assert_eq!(config.model_id, "gpt-4o");
    assert_eq!(config.temperature, Some(0.3));
    assert_eq!(config.default_count, 1);
}
