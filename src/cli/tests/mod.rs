//! Unit tests for the console
//!
//! Tests line parsing, path operations, value formatting and command
//! execution against a settings store in a temporary directory.
//! No network access.

#![allow(clippy::unwrap_used)]

use std::sync::Arc;

use serde_json::json;
use tempfile::TempDir;
use tokio::sync::Mutex;

use crate::{
    cli::{
        CliError, CliService, CommandRegistry, ConsoleInput,
        formatting::format_json_value,
        path_ops::{coerce_value, navigate_path, set_value_at_path},
        split_words,
    },
    settings::{SettingsStore, SharedStore},
};

fn shared_store(temp: &TempDir) -> SharedStore {
    Arc::new(Mutex::new(SettingsStore::new(temp.path())))
}

fn args(words: &[&str]) -> Vec<String> {
    words.iter().map(|w| w.to_string()).collect()
}

#[test]
fn split_words_on_whitespace() {
    assert_eq!(
        split_words("  settings   get  debug ").unwrap(),
        vec!["settings", "get", "debug"]
    );
}

#[test]
fn split_words_keeps_quoted_runs() {
    assert_eq!(
        split_words(r#"settings set organize_options.dlc_folder "My DLC""#).unwrap(),
        vec!["settings", "set", "organize_options.dlc_folder", "My DLC"]
    );
    assert_eq!(
        split_words("set path '{TITLE_NAME} [{TITLE_ID}]'").unwrap(),
        vec!["set", "path", "{TITLE_NAME} [{TITLE_ID}]"]
    );
}

#[test]
fn split_words_empty_quotes_yield_empty_argument() {
    assert_eq!(split_words(r#"a """#).unwrap(), vec!["a", ""]);
}

#[test]
fn split_words_rejects_unterminated_quote() {
    assert!(split_words(r#"settings set x "oops"#).is_err());
}

#[test]
fn console_input_classification() {
    assert_eq!(ConsoleInput::parse("   "), ConsoleInput::Empty);
    assert_eq!(ConsoleInput::parse("help"), ConsoleInput::Help);
    assert_eq!(ConsoleInput::parse("exit"), ConsoleInput::Exit);
    assert_eq!(ConsoleInput::parse("quit"), ConsoleInput::Exit);
    assert_eq!(
        ConsoleInput::parse("settings"),
        ConsoleInput::Incomplete("settings".to_string())
    );
    assert_eq!(
        ConsoleInput::parse("catalog refresh titles"),
        ConsoleInput::Command {
            category: "catalog".to_string(),
            name: "refresh".to_string(),
            args: vec!["titles".to_string()],
        }
    );
    assert!(matches!(
        ConsoleInput::parse("settings set 'x"),
        ConsoleInput::Malformed(_)
    ));
}

#[test]
fn format_json_value_scalars() {
    assert_eq!(format_json_value(&json!("hello world")), "\"hello world\"");
    assert_eq!(format_json_value(&json!(100)), "100");
    assert_eq!(format_json_value(&json!(true)), "true");
}

#[test]
fn format_json_value_lists_and_sections() {
    assert_eq!(format_json_value(&json!([])), "[]");
    assert_eq!(
        format_json_value(&json!(["01007F600B135007"])),
        "[\"01007F600B135007\"]"
    );
    assert_eq!(format_json_value(&json!([1, 2, 3, 4, 5, 6])), "[6 items]");
    assert_eq!(format_json_value(&json!({"a": 1, "b": 2})), "{2 fields}");
}

#[test]
fn navigate_path_reaches_nested_fields() {
    let document = json!({
        "organize_options": {"dlc_folder": "DLC"},
        "ignore_dlc_title_ids": ["a", "b"],
    });

    assert_eq!(
        navigate_path(&document, "organize_options.dlc_folder").unwrap(),
        &json!("DLC")
    );
    assert_eq!(
        navigate_path(&document, "ignore_dlc_title_ids.1").unwrap(),
        &json!("b")
    );
}

#[test]
fn navigate_path_reports_missing_keys() {
    let document = json!({"debug": false});

    assert!(matches!(
        navigate_path(&document, "nope"),
        Err(CliError::InvalidArguments(_))
    ));
    assert!(matches!(
        navigate_path(&document, "debug.deeper"),
        Err(CliError::InvalidArguments(_))
    ));
}

#[test]
fn coerce_value_keeps_field_type() {
    assert_eq!(coerce_value(&json!(false), "true").unwrap(), json!(true));
    assert_eq!(coerce_value(&json!(100), "25").unwrap(), json!(25));
    assert_eq!(coerce_value(&json!(""), "25").unwrap(), json!("25"));

    assert!(coerce_value(&json!(false), "yes").is_err());
    assert!(coerce_value(&json!(100), "-1").is_err());
    assert!(coerce_value(&json!({}), "x").is_err());
}

#[test]
fn coerce_value_reads_lists() {
    assert_eq!(
        coerce_value(&json!([]), "a, b,,c").unwrap(),
        json!(["a", "b", "c"])
    );
    assert_eq!(coerce_value(&json!(["a"]), "").unwrap(), json!([]));
    assert_eq!(
        coerce_value(&json!([]), r#"["x", "y"]"#).unwrap(),
        json!(["x", "y"])
    );
    assert!(coerce_value(&json!([]), "[not json").is_err());
}

#[test]
fn set_value_at_path_only_replaces_existing_fields() {
    let mut document = json!({"organize_options": {"rename_files": false}});

    set_value_at_path(&mut document, "organize_options.rename_files", "true").unwrap();
    assert_eq!(document["organize_options"]["rename_files"], json!(true));

    assert!(set_value_at_path(&mut document, "organize_options.unknown", "1").is_err());
}

#[tokio::test]
async fn command_registry_categories() {
    let temp = TempDir::new().unwrap();
    let mut registry = CommandRegistry::new(shared_store(&temp));
    registry.register_all_commands();

    let categories = registry.list_commands();
    let names: Vec<&str> = categories.iter().map(|(c, _)| c.as_str()).collect();

    assert_eq!(names, vec!["catalog", "settings", "update"]);
    assert_eq!(
        categories[1].1,
        vec!["get", "reload", "schema", "set", "show"]
    );
}

#[tokio::test]
async fn unknown_command_is_not_found() {
    let temp = TempDir::new().unwrap();
    let service = CliService::new(shared_store(&temp));

    let result = service.execute_command("settings", "delete", &[]).await;
    assert!(matches!(result, Err(CliError::CommandNotFound(_))));

    let result = service.execute_command("library", "scan", &[]).await;
    assert!(matches!(result, Err(CliError::CommandNotFound(_))));
}

#[tokio::test]
async fn argument_count_is_validated() {
    let temp = TempDir::new().unwrap();
    let service = CliService::new(shared_store(&temp));

    let result = service.execute_command("settings", "get", &[]).await;
    assert!(matches!(result, Err(CliError::InvalidArguments(_))));

    let result = service
        .execute_command("settings", "show", &args(&["extra"]))
        .await;
    assert!(matches!(result, Err(CliError::InvalidArguments(_))));
}

#[tokio::test]
async fn settings_get_reads_defaults() {
    let temp = TempDir::new().unwrap();
    let service = CliService::new(shared_store(&temp));

    let output = service
        .execute_command("settings", "get", &args(&["gui_page_size"]))
        .await
        .unwrap();

    assert_eq!(output, "gui_page_size: 100");
}

#[tokio::test]
async fn settings_set_saves_to_disk() {
    let temp = TempDir::new().unwrap();
    let store = shared_store(&temp);
    let service = CliService::new(store.clone());

    service
        .execute_command("settings", "set", &args(&["organize_options.rename_files", "true"]))
        .await
        .unwrap();

    let mut fresh = SettingsStore::new(temp.path());
    assert!(fresh.load().organize_options.rename_files);
    assert!(store.lock().await.load().organize_options.rename_files);
}

#[tokio::test]
async fn settings_set_rejects_wrong_type() {
    let temp = TempDir::new().unwrap();
    let service = CliService::new(shared_store(&temp));

    let result = service
        .execute_command("settings", "set", &args(&["gui_page_size", "lots"]))
        .await;

    assert!(matches!(result, Err(CliError::InvalidArguments(_))));
}

#[tokio::test]
async fn settings_set_rejects_out_of_range_value() {
    let temp = TempDir::new().unwrap();
    let store = shared_store(&temp);
    let service = CliService::new(store.clone());

    let result = service
        .execute_command("settings", "set", &args(&["gui_page_size", "5000000000"]))
        .await;

    assert!(matches!(result, Err(CliError::InvalidArguments(_))));
    assert_eq!(store.lock().await.load().gui_page_size, 100);

    let mut fresh = SettingsStore::new(temp.path());
    assert_eq!(fresh.load().gui_page_size, 100);
}

#[tokio::test]
async fn settings_set_accepts_largest_page_size() {
    let temp = TempDir::new().unwrap();
    let store = shared_store(&temp);
    let service = CliService::new(store.clone());

    service
        .execute_command("settings", "set", &args(&["gui_page_size", "4294967295"]))
        .await
        .unwrap();

    assert_eq!(store.lock().await.load().gui_page_size, u32::MAX);
}

#[tokio::test]
async fn settings_reload_picks_up_external_edits() {
    let temp = TempDir::new().unwrap();
    let store = shared_store(&temp);
    let service = CliService::new(store.clone());

    store.lock().await.load();
    std::fs::write(
        temp.path().join("settings.json"),
        r#"{"gui_page_size": 42}"#,
    )
    .unwrap();

    service
        .execute_command("settings", "reload", &[])
        .await
        .unwrap();

    assert_eq!(store.lock().await.load().gui_page_size, 42);
}

#[tokio::test]
async fn settings_schema_is_json() {
    let temp = TempDir::new().unwrap();
    let service = CliService::new(shared_store(&temp));

    let output = service
        .execute_command("settings", "schema", &[])
        .await
        .unwrap();

    let schema: serde_json::Value = serde_json::from_str(&output).unwrap();
    assert!(schema["properties"]["titles_etag"].is_object());
}

#[tokio::test]
async fn catalog_refresh_rejects_unknown_feed() {
    let temp = TempDir::new().unwrap();
    let service = CliService::new(shared_store(&temp));

    let result = service
        .execute_command("catalog", "refresh", &args(&["games"]))
        .await;

    assert!(matches!(result, Err(CliError::InvalidArguments(_))));
}

#[tokio::test]
async fn catalog_status_reports_never_fetched() {
    let temp = TempDir::new().unwrap();
    let service = CliService::new(shared_store(&temp));

    let output = service
        .execute_command("catalog", "status", &[])
        .await
        .unwrap();

    assert!(output.contains("(never fetched)"));
    assert!(output.contains("missing"));
    assert!(output.contains("revalidate: false"));
}
