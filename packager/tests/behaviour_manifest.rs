//! Behaviour-driven tests for release manifest upserts.
//!
//! Scenarios live in `tests/features/manifest_upsert.feature`.

mod support;

use pulsar_pcm::artefact::manifest::{UpsertOutcome, VersionEntry, update_manifest};
use pulsar_pcm::artefact::sha256_digest::Sha256Digest;
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};
use serde_json::Value;
use support::LibraryTree;

#[derive(Default)]
struct ManifestWorld {
    library: Option<LibraryTree>,
    before: Option<Value>,
    outcome: Option<UpsertOutcome>,
}

#[fixture]
fn world() -> ManifestWorld {
    ManifestWorld::default()
}

fn library(world: &ManifestWorld) -> &LibraryTree {
    world.library.as_ref().expect("library set")
}

fn versions(world: &ManifestWorld) -> Vec<Value> {
    library(world).read_json("docs/packages.json")["packages"][0]["versions"]
        .as_array()
        .cloned()
        .expect("versions array")
}

#[given("a release manifest listing versions \"{first}\" and \"{second}\"")]
fn given_manifest(world: &mut ManifestWorld, first: String, second: String) {
    let tree = LibraryTree::empty();
    tree.write_manifest(&[first.as_str(), second.as_str()]);
    world.before = Some(tree.read_json("docs/packages.json"));
    world.library = Some(tree);
}

#[when("an entry for \"{version}\" with download size {size} is upserted")]
fn when_upserted(world: &mut ManifestWorld, version: String, size: u64) {
    let entry = VersionEntry {
        download_url: format!("https://example.com/releases/download/v{version}/Lib-{version}.zip"),
        version,
        status: "stable".to_owned(),
        kicad_version: "8.0".to_owned(),
        download_sha256: Sha256Digest::try_from("0".repeat(64)).expect("valid digest"),
        download_size: size,
        install_size: size * 2,
    };
    let path = library(world).root().join("docs/packages.json");
    world.outcome = Some(update_manifest(&path, &entry).expect("upsert succeeds"));
}

#[then("the manifest lists {count} versions")]
fn then_count(world: &mut ManifestWorld, count: usize) {
    assert_eq!(versions(world).len(), count);
}

#[then("version \"{version}\" is at position {index} with download size {size}")]
fn then_position(world: &mut ManifestWorld, version: String, index: usize, size: u64) {
    let list = versions(world);
    let entry = list.get(index).expect("entry at position");
    assert_eq!(entry["version"], version.as_str());
    assert_eq!(entry["download_size"], size);
    assert_eq!(world.outcome.map(UpsertOutcome::index), Some(index));
}

#[then("version \"{version}\" is unchanged")]
fn then_unchanged(world: &mut ManifestWorld, version: String) {
    let before = world.before.as_ref().expect("original manifest");
    let original = before["packages"][0]["versions"]
        .as_array()
        .expect("versions array")
        .iter()
        .find(|entry| entry["version"] == version.as_str())
        .expect("original entry");
    let current = versions(world)
        .into_iter()
        .find(|entry| entry["version"] == version.as_str())
        .expect("current entry");
    assert_eq!(&current, original);
}

#[scenario(
    path = "tests/features/manifest_upsert.feature",
    name = "Re-packaging an existing version replaces it in place"
)]
fn scenario_replace(world: ManifestWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/manifest_upsert.feature",
    name = "Packaging a new version appends it"
)]
fn scenario_append(world: ManifestWorld) {
    let _ = world;
}
