// SPDX-License-Identifier: MIT OR Apache-2.0

//! Integration tests for resolving and finalizing translations.

mod common;

use common::{helper_in, write_config, EnvGuard};
use mcp_translations::prelude::*;
use std::collections::BTreeMap;
use tempfile::tempdir;

fn read_dump(helper: &TranslationHelper) -> BTreeMap<String, String> {
    let content = std::fs::read_to_string(helper.output_path()).unwrap();
    serde_json::from_str(&content).unwrap()
}

#[test]
fn test_resolve_then_finalize_example() {
    let dir = tempdir().unwrap();
    let mut helper = helper_in(dir.path());

    assert_eq!(
        helper.resolve("tool-description", "Does a thing"),
        "Does a thing"
    );
    helper.finalize().unwrap();

    let dumped = read_dump(&helper);
    assert_eq!(dumped.len(), 1);
    assert_eq!(dumped.get("TOOL_DESCRIPTION").map(String::as_str), Some("Does a thing"));
}

#[test]
fn test_finalize_matches_cache() {
    let mut env_guard = EnvGuard::new();
    env_guard.set("GITHUB_MCP_INTEG_DUMP_ENV", "from env");

    let dir = tempdir().unwrap();
    write_config(dir.path(), r#"{"INTEG_DUMP_FILE": "from file"}"#);
    let mut helper = helper_in(dir.path());

    helper.resolve("integ-dump-env", "default one");
    helper.resolve("integ-dump-file", "default two");
    helper.resolve("Integ-Dump-Default", "default three");
    helper.finalize().unwrap();

    let content = std::fs::read_to_string(helper.output_path()).unwrap();
    let parsed: TranslationMap = serde_json::from_str(&content).unwrap();
    assert_eq!(&parsed, helper.translations());

    let dumped = read_dump(&helper);
    assert_eq!(dumped["INTEG_DUMP_ENV"], "from env");
    assert_eq!(dumped["INTEG_DUMP_FILE"], "from file");
    assert_eq!(dumped["INTEG_DUMP_DEFAULT"], "default three");
}

#[test]
fn test_finalize_only_contains_resolved_keys() {
    let dir = tempdir().unwrap();
    write_config(
        dir.path(),
        r#"{"INTEG_USED": "used", "INTEG_UNUSED": "never asked for"}"#,
    );
    let mut helper = helper_in(dir.path());

    helper.resolve("integ-used", "default");
    helper.finalize().unwrap();

    let dumped = read_dump(&helper);
    assert_eq!(dumped.len(), 1);
    assert!(!dumped.contains_key("INTEG_UNUSED"));
}

#[test]
fn test_finalize_output_is_reloaded_on_next_run() {
    let dir = tempdir().unwrap();

    let mut first = helper_in(dir.path());
    first.resolve("integ-roundtrip", "original default");
    first.finalize().unwrap();

    // Edit the exported file the way an operator would
    write_config(dir.path(), r#"{"INTEG_ROUNDTRIP": "edited"}"#);

    let mut second = helper_in(dir.path());
    assert_eq!(second.resolve("integ-roundtrip", "original default"), "edited");
}

#[test]
fn test_finalize_is_pretty_printed() {
    let dir = tempdir().unwrap();
    let mut helper = helper_in(dir.path());

    helper.resolve("integ-b", "2");
    helper.resolve("integ-a", "1");
    helper.finalize().unwrap();

    let content = std::fs::read_to_string(helper.output_path()).unwrap();
    assert_eq!(content, "{\n  \"INTEG_A\": \"1\",\n  \"INTEG_B\": \"2\"\n}");
}

#[test]
fn test_finalize_to_missing_directory_fails() {
    let dir = tempdir().unwrap();
    let mut helper = helper_in(&dir.path().join("does-not-exist"));
    helper.resolve("integ-missing-dir", "value");

    let result = helper.finalize();
    assert!(matches!(result, Err(TranslationError::DumpError { .. })));
}

#[test]
fn test_memory_backend_helper() {
    let dir = tempdir().unwrap();
    let backend = MemoryBackend::new().with_value("integ-memory", "in memory");
    let mut helper = TranslationHelper::with_backend(backend, dir.path().join("out.json"));

    assert_eq!(helper.resolve("integ-memory", "default"), "in memory");
    assert_eq!(helper.resolve("integ-memory-other", "default"), "default");
}

#[test]
fn test_translator_call_sites() {
    fn describe(t: &mut impl Translator) -> String {
        t.translate("integ-translator", "A default description")
    }

    let dir = tempdir().unwrap();
    let backend = MemoryBackend::new().with_value("integ-translator", "Overridden");
    let mut helper = TranslationHelper::with_backend(backend, dir.path().join("out.json"));

    assert_eq!(describe(&mut helper), "Overridden");
    assert_eq!(describe(&mut NullTranslationHelper), "A default description");

    let mut plain = null_translation_helper;
    assert_eq!(describe(&mut plain), "A default description");
}

#[test]
fn test_paired_functions() {
    // Reads the working directory; only resolve, never finalize here
    let (mut translate, _finalize) = translation_helper();

    assert_eq!(
        translate("integ-paired-fns-unique-key", "paired default"),
        "paired default"
    );
    assert_eq!(
        translate("INTEG_PAIRED_FNS_UNIQUE_KEY", "different default"),
        "paired default"
    );
}
