use ftools_columns::*;

use rstest::{fixture, rstest};
use std::io::Write;
use tempfile::NamedTempFile;

const MCNP: &str = "\
Energy(MeV)  Flux  RelErr
1.00000E-01  2.0000E-03  0.0100
1.00000E+00  4.0000E-03  0.0200
1.00000E+01  1.0000E-03  0.0500
";

const FACEMC: &str = "\
energy mean re
0.1  2.1e-3  0.01
1.0  4.0e-3  0.02
10.0 0.0     0.0
";

#[fixture]
fn mcnp_file() -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(MCNP.as_bytes()).unwrap();
    file
}

#[rstest]
fn read_spectrum_from_disk(mcnp_file: NamedTempFile) {
    let file = read_column_file(mcnp_file.path()).unwrap();
    assert_eq!(file.header, "Energy(MeV)  Flux  RelErr");
    assert_eq!(file.n_columns(), 3);

    let spectrum = file.spectrum().unwrap();
    assert_eq!(spectrum.len(), 3);
    assert_eq!(spectrum[2].energy, 10.0);
    assert_eq!(spectrum[2].value, 1.0e-3);
}

#[rstest]
fn missing_file_is_io_error() {
    assert!(matches!(
        read_column_file("./does/not/exist.txt"),
        Err(Error::Io(_))
    ));
}

#[rstest]
#[case("E F R\n1.00000E+00 2.50000-100 1.0E-01\n", 2)]
#[case("h\n1.02.0 5.0\n", 2)]
#[case("h\n1.0 2.0\n3.0 4.0e-01-02\n", 3)]
fn fused_values_rejected(#[case] text: &str, #[case] bad_line: usize) {
    match parse_columns(text) {
        Err(Error::Parse { line, .. }) => assert_eq!(line, bad_line),
        other => panic!("expected a parse error, got {other:?}"),
    }
}

#[rstest]
fn facemc_against_mcnp() {
    let mcnp = parse_columns(MCNP).unwrap().spectrum().unwrap();
    let facemc = parse_columns(FACEMC).unwrap().spectrum().unwrap();

    let rows = compare_spectra(&mcnp, &facemc, 1e-9).unwrap();
    assert_eq!(rows.len(), 3);
    assert!((rows[0].ratio - 1.05).abs() < 1e-12);
    assert_eq!(rows[1].ratio, 1.0);
    assert_eq!(rows[1].sigma, 0.0);
    assert_eq!(rows[2].ratio, 0.0);
}

#[rstest]
fn comparison_table(mcnp_file: NamedTempFile) {
    let spectrum = read_column_file(mcnp_file.path())
        .unwrap()
        .spectrum()
        .unwrap();
    let rows = compare_spectra(&spectrum, &spectrum, 0.0).unwrap();

    let out = NamedTempFile::new().unwrap();
    write_comparison(&rows, out.path()).unwrap();

    let text = std::fs::read_to_string(out.path()).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 4);
    assert!(lines[0].contains("ratio_error"));
    assert!(lines[1].contains("1.00000e-01"));
    assert!(lines[1].trim_end().ends_with("0.000"));
}

#[rstest]
#[case("cores time\n1 120.0\n2 60.0\n4 30.0\n", 4, 4.0, 1.0)]
#[case("cores time extra\n16 10.0 0\n8 16.0 0\n", 16, 1.6, 0.8)]
fn scaling_tables(
    #[case] text: &str,
    #[case] cores: u32,
    #[case] speedup: f64,
    #[case] efficiency: f64,
) {
    let summary = scaling_summary(&parse_columns(text).unwrap()).unwrap();
    let last = summary.last().unwrap();
    assert_eq!(last.cores, cores);
    assert!((last.speedup - speedup).abs() < 1e-12);
    assert!((last.efficiency - efficiency).abs() < 1e-12);
}

#[rstest]
fn scaling_rejects_fractional_cores() {
    let file = parse_columns("cores time\n1.5 10.0\n").unwrap();
    assert!(matches!(
        scaling_summary(&file),
        Err(Error::InvalidCoreCount(_))
    ));
}

#[rstest]
fn scaling_table_on_disk() {
    let summary = scaling_from_runs(&[(1, 100.0), (2, 50.0)]).unwrap();
    let out = NamedTempFile::new().unwrap();
    write_scaling(&summary, out.path()).unwrap();

    let text = std::fs::read_to_string(out.path()).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 3);
    assert_eq!(
        lines[2].split_whitespace().collect::<Vec<_>>(),
        vec!["2", "5.00000e+01", "2.0000", "1.0000"]
    );
}
