// JSON overrides for player-facing copy.

use station_escape::game::{GameSession, Rules, TextCatalog, TextError, TextProvider};
use std::fs;
use tempfile::tempdir;

#[test]
fn nested_overrides_replace_builtin_copy() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("texts.json");
    fs::write(
        &path,
        r#"{
  "ui": { "no_exit": "Bulkhead sealed." },
  "game": { "tool_taken": "Tool acquired (+{points})." }
}"#,
    )
    .unwrap();

    let mut texts = TextCatalog::new();
    let builtin = texts.len();
    assert_eq!(texts.load_overrides(&path).unwrap(), 2);
    assert_eq!(texts.len(), builtin);

    let mut s = GameSession::orbital_station(Rules::default(), Box::new(texts))
        .with_echo_status(false);
    assert_eq!(s.process("north").message, "Bulkhead sealed.");
    assert_eq!(s.process("pick up tool").message, "Tool acquired (+10).");
    // untouched keys keep the default wording
    assert_eq!(s.process("status").message, "(SCORE: 10 | HAZARDS: 0)");
}

#[test]
fn flat_keys_and_location_names() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("texts.json");
    fs::write(
        &path,
        r#"{ "locations.docking_bay.name": "Hangar 7" }"#,
    )
    .unwrap();

    let mut texts = TextCatalog::new();
    texts.load_overrides(&path).unwrap();
    let mut s = GameSession::orbital_station(Rules::default(), Box::new(texts));
    assert_eq!(
        s.process("win").message,
        "You can't win yet! The escape pod is in the Hangar 7."
    );
}

#[test]
fn malformed_files_are_rejected() {
    let dir = tempdir().unwrap();

    let bad_json = dir.path().join("broken.json");
    fs::write(&bad_json, "{ not json").unwrap();
    assert!(matches!(
        TextCatalog::new().load_overrides(&bad_json),
        Err(TextError::Json(_))
    ));

    let bad_leaf = dir.path().join("leaf.json");
    fs::write(&bad_leaf, r#"{ "ui": { "no_exit": 5 } }"#).unwrap();
    match TextCatalog::new().load_overrides(&bad_leaf) {
        Err(TextError::InvalidValue { key }) => assert_eq!(key, "ui.no_exit"),
        other => panic!("unexpected result: {:?}", other),
    }

    assert!(matches!(
        TextCatalog::new().load_overrides(dir.path().join("missing.json")),
        Err(TextError::Io(_))
    ));
}

#[test]
fn dump_loads_back_unchanged() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("dump.json");
    let original = TextCatalog::new();
    fs::write(&path, original.to_json_pretty().unwrap()).unwrap();

    let mut reloaded = TextCatalog::empty();
    assert_eq!(reloaded.load_overrides(&path).unwrap(), original.len());
    assert_eq!(
        reloaded.resolve("ui.status", &[("score", "1"), ("hazards", "2")]),
        "(SCORE: 1 | HAZARDS: 2)"
    );
}

#[test]
fn unknown_keys_resolve_to_themselves() {
    let texts = TextCatalog::empty();
    assert_eq!(texts.resolve("ui.missing", &[]), "ui.missing");
}
