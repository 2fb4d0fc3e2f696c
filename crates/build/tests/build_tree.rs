#![cfg(unix)]

use ftools_build::*;

use rstest::{fixture, rstest};
use tempfile::TempDir;

#[fixture]
fn workspace() -> TempDir {
    let dir = TempDir::new().unwrap();
    std::fs::create_dir(dir.path().join("FRENSIE")).unwrap();
    std::fs::create_dir(dir.path().join("data")).unwrap();
    dir
}

#[rstest]
fn initialise_tree(workspace: TempDir) {
    let source = workspace.path().join("FRENSIE");
    let build = workspace.path().join("build");

    BuildTree::new(&source, &build, "/opt/frensie")
        .link("data", workspace.path().join("data"))
        .init()
        .unwrap();

    assert!(build.is_dir());
    assert_eq!(
        std::fs::read_link(build.join("src")).unwrap(),
        std::fs::canonicalize(&source).unwrap()
    );
    assert_eq!(
        std::fs::read_link(build.join("data")).unwrap(),
        workspace.path().join("data")
    );

    let script = std::fs::read_to_string(build.join(ENV_SCRIPT)).unwrap();
    assert!(script.starts_with("#!/bin/bash"));
    assert!(script.contains("export PATH=\"/opt/frensie/bin"));
    assert!(script.contains("export PYTHONPATH=\"/opt/frensie/lib/python"));
}

#[rstest]
fn init_twice_is_fine(workspace: TempDir) {
    let tree = BuildTree::new(
        workspace.path().join("FRENSIE"),
        workspace.path().join("build"),
        "/opt/frensie",
    );
    tree.init().unwrap();
    tree.init().unwrap();
}

#[rstest]
fn missing_source(workspace: TempDir) {
    let tree = BuildTree::new(
        workspace.path().join("missing"),
        workspace.path().join("build"),
        "/opt/frensie",
    );
    assert!(matches!(tree.init(), Err(Error::InvalidDirectory(_))));
    assert!(!workspace.path().join("build").exists());
}

#[rstest]
fn stale_and_occupied_links(workspace: TempDir) {
    let link = workspace.path().join("current");
    let first = workspace.path().join("FRENSIE");
    let second = workspace.path().join("data");

    assert_eq!(replace_link(&link, &first).unwrap(), LinkStatus::Created);
    assert_eq!(replace_link(&link, &first).unwrap(), LinkStatus::Unchanged);
    assert_eq!(replace_link(&link, &second).unwrap(), LinkStatus::Replaced);
    assert_eq!(std::fs::read_link(&link).unwrap(), second);

    // real directories are never replaced
    assert!(matches!(
        replace_link(&first, &second),
        Err(Error::PathOccupied(_))
    ));
    assert!(first.is_dir());
}

#[rstest]
fn build_src_occupied(workspace: TempDir) {
    let build = workspace.path().join("build");
    std::fs::create_dir_all(build.join("src")).unwrap();

    let tree = BuildTree::new(workspace.path().join("FRENSIE"), &build, "/opt/frensie");
    assert!(matches!(tree.init(), Err(Error::PathOccupied(_))));
}

#[rstest]
#[case("/a:/b:/a", "/a:/b")]
#[case("/a::/b::", "/a:/b")]
#[case("/b:/a:/b:/a", "/b:/a")]
fn dedup(#[case] value: &str, #[case] expected: &str) {
    assert_eq!(dedup_prefix(value, ':'), expected);
}
