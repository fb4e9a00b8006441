//! Unit tests for release manifest upserts.

use super::*;
use camino::Utf8PathBuf;
use rstest::{fixture, rstest};
use serde_json::json;
use std::fs;
use tempfile::TempDir;

fn entry(version: &str, digest_char: &str, download_size: u64) -> VersionEntry {
    VersionEntry {
        version: version.to_owned(),
        status: "stable".to_owned(),
        kicad_version: "8.0".to_owned(),
        download_url: format!(
            "https://github.com/Alex-C-EE/PULSAR-KiCad-Lib/releases/download/v{version}/PULSAR-KiCad-Lib-{version}.zip"
        ),
        download_sha256: Sha256Digest::try_from(digest_char.repeat(64)).expect("valid digest"),
        download_size,
        install_size: download_size * 3,
    }
}

#[fixture]
fn manifest() -> Value {
    json!({
        "$schema": "https://go.kicad.org/pcm/schemas/v1",
        "packages": [{
            "name": "PULSAR KiCad Library",
            "identifier": "com.github.alex-c-ee.pulsar-kicad-lib",
            "type": "library",
            "versions": [
                entry("1.0.0", "a", 100).to_value(),
                entry("1.1.0", "b", 200).to_value(),
            ],
        }],
    })
}

fn versions(document: &Value) -> &Vec<Value> {
    document["packages"][0]["versions"]
        .as_array()
        .expect("versions array")
}

#[rstest]
fn existing_version_is_replaced_in_place(mut manifest: Value) {
    let before_b = versions(&manifest)[1].clone();
    let outcome = upsert_version(&mut manifest, &entry("1.0.0", "c", 999)).expect("upsert");

    assert_eq!(outcome, UpsertOutcome::Replaced(0));
    let list = versions(&manifest);
    assert_eq!(list.len(), 2);
    assert_eq!(list[0]["download_size"], 999);
    assert_eq!(list[0]["download_sha256"], "c".repeat(64));
    assert_eq!(list[1], before_b);
}

#[rstest]
fn new_version_is_appended(mut manifest: Value) {
    let outcome = upsert_version(&mut manifest, &entry("2.0.0", "d", 50)).expect("upsert");

    assert_eq!(outcome, UpsertOutcome::Appended(2));
    let list = versions(&manifest);
    assert_eq!(list.len(), 3);
    assert_eq!(list[2]["version"], "2.0.0");
    assert_eq!(list[0]["version"], "1.0.0");
}

#[rstest]
fn repeated_upserts_are_idempotent(mut manifest: Value) {
    let update = entry("1.1.0", "e", 7);
    upsert_version(&mut manifest, &update).expect("first upsert");
    let once = manifest.clone();
    upsert_version(&mut manifest, &update).expect("second upsert");
    assert_eq!(manifest, once);
}

#[rstest]
fn untouched_fields_are_preserved(mut manifest: Value) {
    upsert_version(&mut manifest, &entry("2.0.0", "f", 1)).expect("upsert");
    assert_eq!(manifest["$schema"], "https://go.kicad.org/pcm/schemas/v1");
    assert_eq!(manifest["packages"][0]["type"], "library");
}

#[test]
fn missing_versions_list_is_created() {
    let mut document = json!({"packages": [{"name": "PULSAR"}]});
    let outcome = upsert_version(&mut document, &entry("1.0.0", "a", 1)).expect("upsert");
    assert_eq!(outcome, UpsertOutcome::Appended(0));
    assert_eq!(versions(&document).len(), 1);
}

#[test]
fn entries_without_a_version_never_match() {
    let mut document = json!({"packages": [{"versions": [{"status": "stable"}]}]});
    let outcome = upsert_version(&mut document, &entry("1.0.0", "a", 1)).expect("upsert");
    assert_eq!(outcome, UpsertOutcome::Appended(1));
}

#[rstest]
#[case::not_object(json!([]), DocumentShapeError::NotAnObject)]
#[case::no_packages(json!({"name": "x"}), DocumentShapeError::MissingPackages)]
#[case::empty_packages(json!({"packages": []}), DocumentShapeError::NoPackages)]
#[case::package_not_object(json!({"packages": [1]}), DocumentShapeError::PackageNotAnObject)]
#[case::versions_not_array(
    json!({"packages": [{"versions": {}}]}),
    DocumentShapeError::VersionsNotAnArray
)]
fn malformed_manifests_are_rejected(
    #[case] document: Value,
    #[case] expected: DocumentShapeError,
) {
    let mut document = document;
    assert_eq!(
        upsert_version(&mut document, &entry("1.0.0", "a", 1)),
        Err(expected)
    );
}

#[test]
fn written_entries_use_the_manifest_field_order() {
    let value = entry("1.0.0", "a", 1).to_value();
    let keys: Vec<&str> = value
        .as_object()
        .expect("object")
        .keys()
        .map(String::as_str)
        .collect();
    assert_eq!(
        keys,
        [
            "version",
            "status",
            "kicad_version",
            "download_url",
            "download_sha256",
            "download_size",
            "install_size",
        ]
    );
}

#[rstest]
fn update_manifest_round_trips_through_disk(manifest: Value) {
    let dir = TempDir::new().expect("temp dir");
    let path =
        Utf8PathBuf::from_path_buf(dir.path().join("packages.json")).expect("utf-8 temp path");
    fs::write(&path, serde_json::to_string(&manifest).expect("encode")).expect("write");

    let outcome = update_manifest(&path, &entry("2.0.0", "9", 42)).expect("update succeeds");
    assert_eq!(outcome.index(), 2);

    let written = fs::read_to_string(&path).expect("read back");
    assert!(written.ends_with("}\n"), "missing trailing newline");
    assert!(written.contains("\n    \"packages\": ["), "not four-space indented");
    let parsed: Value = serde_json::from_str(&written).expect("valid JSON");
    let stored: VersionEntry =
        serde_json::from_value(versions(&parsed)[2].clone()).expect("typed entry");
    assert_eq!(stored, entry("2.0.0", "9", 42));
}

#[test]
fn shape_errors_name_the_manifest() {
    let dir = TempDir::new().expect("temp dir");
    let path =
        Utf8PathBuf::from_path_buf(dir.path().join("packages.json")).expect("utf-8 temp path");
    fs::write(&path, "{\"packages\": []}").expect("write");
    let err = update_manifest(&path, &entry("1.0.0", "a", 1)).expect_err("no packages");
    assert!(matches!(err, PackagerError::DocumentShape { .. }));
    assert!(err.to_string().contains("packages.json"));
}
