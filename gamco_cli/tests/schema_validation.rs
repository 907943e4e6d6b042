use serde_json::Value;
use std::path::{Path, PathBuf};

fn workspace_root() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .expect("CLI crate should be inside workspace")
        .to_path_buf()
}

fn load_fixture_text(name: &str) -> String {
    let path = workspace_root().join("gamco_api/tests/fixtures").join(name);
    std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("read fixture {}: {}", path.display(), e))
}

fn load_fixture(name: &str) -> Value {
    serde_json::from_str(&load_fixture_text(name)).expect("fixture is valid JSON")
}

fn load_schema() -> Value {
    let path = workspace_root().join("schema/fund.schema.json");
    let text = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("read schema {}: {}", path.display(), e));
    serde_json::from_str(&text).expect("schema is valid JSON")
}

// ---------------------------------------------------------------------------
// Positive validation: fixtures and re-emitted JSON conform to the schema
// ---------------------------------------------------------------------------

#[test]
fn test_fixture_conforms_to_schema() {
    let schema = load_schema();
    let validator = jsonschema::draft202012::new(&schema).expect("fund schema compiles");

    for name in ["nav_closed_ends.json", "nav_closed_ends_duplicates.json"] {
        let data = load_fixture(name);
        if let Err(e) = validator.validate(&data) {
            panic!("{name} failed validation: {e}");
        }
    }
}

#[test]
fn test_json_output_conforms_to_schema() {
    let schema = load_schema();
    let validator = jsonschema::draft202012::new(&schema).expect("fund schema compiles");

    let funds = gamco_api::decode_funds(&load_fixture_text("nav_closed_ends.json"))
        .expect("fixture decodes");
    let data = serde_json::to_value(&funds).expect("funds serialize");
    if let Err(e) = validator.validate(&data) {
        panic!("serialized funds failed validation: {e}");
    }
}

#[test]
fn test_json_output_decodes_back_to_same_funds() {
    let funds = gamco_api::decode(&load_fixture_text("nav_closed_ends.json")).unwrap();
    let emitted = serde_json::to_string(&funds.clone().into_funds()).unwrap();
    assert_eq!(gamco_api::decode(&emitted).unwrap(), funds);
}

// ---------------------------------------------------------------------------
// Negative validation: schema rejects invalid data
// ---------------------------------------------------------------------------

#[test]
fn test_schema_rejects_missing_symbol() {
    let schema = load_schema();
    let mut data = load_fixture("nav_closed_ends.json");

    data[0]
        .as_object_mut()
        .expect("fund is an object")
        .remove("symbol");

    let validator = jsonschema::draft202012::new(&schema).expect("schema compiles");
    assert!(
        validator.validate(&data).is_err(),
        "schema should reject fund missing symbol"
    );
}

#[test]
fn test_schema_rejects_iso_period_end() {
    let schema = load_schema();
    let data = load_fixture("nav_closed_ends_bad_date.json");

    let validator = jsonschema::draft202012::new(&schema).expect("schema compiles");
    assert!(
        validator.validate(&data).is_err(),
        "schema should reject last_month_end in YYYY-MM-DD form"
    );
}

#[test]
fn test_schema_rejects_string_id() {
    let schema = load_schema();
    let mut data = load_fixture("nav_closed_ends.json");
    data[1]["id"] = Value::String("501".to_string());

    let validator = jsonschema::draft202012::new(&schema).expect("schema compiles");
    assert!(validator.validate(&data).is_err());
}
