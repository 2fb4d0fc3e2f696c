use ftools_cli::{run, CliError};

use rstest::rstest;
use tempfile::TempDir;

fn path_arg(dir: &TempDir, name: &str) -> String {
    dir.path().join(name).to_string_lossy().into_owned()
}

/// 2 generations of 3 samples, little endian
fn sab_bytes() -> Vec<u8> {
    let mut bytes = Vec::new();
    bytes.extend_from_slice(&2u32.to_le_bytes());
    bytes.extend_from_slice(&3u32.to_le_bytes());
    for value in [1.0f64, 2.0, 3.0, 4.0, 5.0, 6.0] {
        bytes.extend_from_slice(&value.to_le_bytes());
    }
    bytes
}

#[rstest]
fn sab_to_csv_with_histogram() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("dump.bin"), sab_bytes()).unwrap();

    let dump = path_arg(&dir, "dump.bin");
    let binned = path_arg(&dir, "binned.csv");
    run([
        "sab",
        dump.as_str(),
        "--stats",
        "--histogram",
        binned.as_str(),
        "--bins",
        "5",
        "--kt",
        "2.5",
    ])
    .unwrap();

    let csv = std::fs::read_to_string(dir.path().join("dump.csv")).unwrap();
    assert!(csv.starts_with("sample,generation_0,generation_1"));

    let binned = std::fs::read_to_string(dir.path().join("binned.csv")).unwrap();
    let lines: Vec<&str> = binned.lines().collect();
    assert_eq!(lines.len(), 6);
    assert!(lines[0].ends_with("maxwellian"));
}

#[rstest]
fn sab_truncated_file_fails() {
    let dir = TempDir::new().unwrap();
    let mut bytes = sab_bytes();
    bytes.truncate(20);
    std::fs::write(dir.path().join("short.bin"), bytes).unwrap();

    let short = path_arg(&dir, "short.bin");
    let error = run(["sab", short.as_str()]).unwrap_err();
    assert!(matches!(error, CliError::Sab(_)));
    assert_eq!(error.exit_code(), 1);
}

#[rstest]
fn compare_and_scaling_tables() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("mcnp.txt"),
        "E F R\n1.0 2.0 0.1\n2.0 4.0 0.1\n",
    )
    .unwrap();
    std::fs::write(
        dir.path().join("facemc.txt"),
        "E F R\n1.0 2.2 0.1\n2.0 4.0 0.1\n",
    )
    .unwrap();
    std::fs::write(dir.path().join("timings.txt"), "cores time\n1 10\n2 5\n").unwrap();

    let mcnp = path_arg(&dir, "mcnp.txt");
    let facemc = path_arg(&dir, "facemc.txt");
    let cmp = path_arg(&dir, "cmp.txt");
    run(["compare", mcnp.as_str(), facemc.as_str(), "-o", cmp.as_str()]).unwrap();

    let timings = path_arg(&dir, "timings.txt");
    let scaling = path_arg(&dir, "scaling.txt");
    run(["scaling", timings.as_str(), "-o", scaling.as_str()]).unwrap();

    let cmp = std::fs::read_to_string(dir.path().join("cmp.txt")).unwrap();
    assert_eq!(cmp.lines().count(), 3);
    let scaling = std::fs::read_to_string(dir.path().join("scaling.txt")).unwrap();
    assert_eq!(scaling.lines().count(), 3);
}

#[rstest]
fn endl_script() {
    let dir = TempDir::new().unwrap();
    let script = path_arg(&dir, "get.sh");
    run([
        "endl",
        "--base-url",
        "https://host/endl",
        "--elements",
        "1-3",
        "--libraries",
        "eadl,eedl",
        "--script",
        script.as_str(),
    ])
    .unwrap();

    let script = std::fs::read_to_string(dir.path().join("get.sh")).unwrap();
    assert_eq!(script.matches("wget").count(), 6);
    assert!(!script.contains("/epdl/"));
}

#[rstest]
#[case(&["endl", "--base-url", "x", "--libraries", "endf"])]
#[case(&["compare", "only_one.txt"])]
#[case(&["dedup-env"])]
#[case(&["init-build", "src", "build"])]
#[case(&["update-testdata", "--generator", "gen"])]
#[case(&["not-a-command"])]
fn usage_errors(#[case] args: &[&str]) {
    let error = run(args.iter().copied()).unwrap_err();
    assert!(matches!(error, CliError::Usage(_)));
    assert_eq!(error.exit_code(), 2);
}

#[rstest]
fn init_build_needs_real_source() {
    let dir = TempDir::new().unwrap();
    let missing = path_arg(&dir, "missing");
    let build = path_arg(&dir, "build");
    let error = run([
        "init-build",
        missing.as_str(),
        build.as_str(),
        "--prefix",
        "/opt/frensie",
    ])
    .unwrap_err();

    assert!(matches!(
        error,
        CliError::Build(ftools_build::Error::InvalidDirectory(_))
    ));
    assert_ne!(error.exit_code(), 0);
}

#[cfg(unix)]
#[rstest]
fn failed_generation_exits_one() {
    let dir = TempDir::new().unwrap();
    let xs = path_arg(&dir, "xs");
    let test_files = path_arg(&dir, "test_files");
    let error = run([
        "update-testdata",
        "--generator",
        "false",
        "--cross-sec-dir",
        xs.as_str(),
        "--file-prefix",
        "aepr",
        "--test-dir",
        test_files.as_str(),
    ])
    .unwrap_err();

    match &error {
        CliError::Testdata(ftools_testdata::Error::GenerationFailed { nuclide, .. }) => {
            assert_eq!(nuclide, "H")
        }
        other => panic!("unexpected error {other:?}"),
    }
    assert_eq!(error.exit_code(), 1);
}
