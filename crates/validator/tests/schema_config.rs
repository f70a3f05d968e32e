//! Schemas as configuration: a rule set loaded from JSON drives the engine
//! exactly like one built in code.

use chartguard_validator::prelude::*;
use pretty_assertions::assert_eq;

const SIGNUP_RULES: &str = r#"
{
  "Handle": [
    { "check": { "type": "required" }, "message": "Handle should not be blank" },
    { "check": { "type": "matches", "pattern": "[a-z0-9_]{3,16}" }, "message": "Handle should be match" }
  ],
  "Homepage": [
    { "check": { "type": "url" }, "message": "Homepage should be match" }
  ],
  "Age": [
    { "check": { "type": "int_range", "lo": 13, "hi": 120 }, "message": "Age should be allowed" }
  ]
}
"#;

fn engine() -> ValidationEngine {
    let schema: Schema = serde_json::from_str(SIGNUP_RULES).unwrap();
    ValidationEngine::new(schema, PredicateRegistry::new()).unwrap()
}

#[test]
fn loaded_schema_round_trips() {
    let schema: Schema = serde_json::from_str(SIGNUP_RULES).unwrap();
    let back: Schema = serde_json::from_str(&serde_json::to_string(&schema).unwrap()).unwrap();
    assert_eq!(back, schema);
}

#[test]
fn loaded_schema_validates_records() {
    let e = engine();

    let good = Record::builder()
        .text("Handle", "teerasil_23")
        .text("Homepage", "www.example.com")
        .int("Age", 23)
        .build();
    assert!(e.is_valid(&good));

    let bad_handle = Record::builder()
        .text("Handle", "No Spaces Allowed")
        .text("Homepage", "www.example.com")
        .int("Age", 23)
        .build();
    assert_eq!(
        e.validate(&bad_handle).unwrap_err().to_string(),
        "Handle should be match"
    );
}

#[test]
fn loaded_schema_keeps_declaration_order() {
    let e = engine();

    // Both Handle and Age are spoiled; Handle is declared first in the JSON.
    let record = Record::builder()
        .text("Handle", "")
        .text("Homepage", "www.example.com")
        .int("Age", 7)
        .build();
    assert_eq!(
        e.validate(&record).unwrap_err().to_string(),
        "Handle should not be blank"
    );
}

#[test]
fn custom_checks_deserialize_and_dispatch() {
    let json = r#"
    {
      "Date": [
        { "check": { "type": "custom", "name": "past" }, "message": "Date should be past" }
      ]
    }
    "#;
    let schema: Schema = serde_json::from_str(json).unwrap();
    let e = ValidationEngine::new(schema, PredicateRegistry::with_time_predicates()).unwrap();

    let record = Record::builder()
        .timestamp("Date", chrono::DateTime::UNIX_EPOCH)
        .build();
    assert!(e.is_valid(&record));
}
