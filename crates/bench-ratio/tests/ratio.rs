//! End to end derivation over the fixtures in `tests/testdata`.
use bench_ratio::{
    load_benchmark_entries, render_ratio_source, write_ratio_source, CostTable, RatioCalculator,
    RatioError, RATIO_ROUNDING,
};
use std::{
    fs,
    path::{Path, PathBuf},
};

fn testdata(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests/testdata")
        .join(name)
}

fn generate(benches: &str, output: &Path) -> Result<u64, RatioError> {
    let entries = load_benchmark_entries(&testdata(benches))?;
    let costs = CostTable::load(&testdata("benches.json"))?;
    let summary = RatioCalculator::default().calculate(&entries, &costs)?;
    write_ratio_source(output, summary.ratio)?;
    Ok(summary.ratio)
}

#[test]
fn derives_ratio_from_fixtures() {
    let entries = load_benchmark_entries(&testdata("bench_results.json")).unwrap();
    let costs = CostTable::load(&testdata("benches.json")).unwrap();
    let summary = RatioCalculator::default().calculate(&entries, &costs).unwrap();

    let order: Vec<_> = summary
        .reports
        .iter()
        .map(|r| (r.name.as_str(), r.ratio))
        .collect();
    assert_eq!(
        order,
        [
            ("empty_deploy", 6474),
            ("ballot_vote", 6087),
            ("erc20_transfer", 5529),
            ("storage_store", 3425),
            ("erc20_approve", 3282),
            ("empty_noop", 1643),
            ("erc20_deploy", 1137),
        ]
    );
    assert_eq!(summary.reports[0].total_weight, 498_356_000);
    assert_eq!(summary.max_ratio, 6474);
    assert_eq!(summary.ratio, 7000);
    assert_eq!(summary.ratio % RATIO_ROUNDING, 0);
    assert!(summary.ratio - RATIO_ROUNDING < summary.max_ratio);
}

#[test]
fn generated_source_matches_snapshot() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("ratio.rs");
    assert_eq!(generate("bench_results.json", &output).unwrap(), 7000);

    let expected = fs::read_to_string(testdata("ratio.rs")).unwrap();
    assert_eq!(fs::read_to_string(&output).unwrap(), expected);
    assert_eq!(render_ratio_source(7000), expected);
}

#[test]
fn regeneration_is_byte_identical() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("ratio.rs");

    generate("bench_results.json", &output).unwrap();
    let first = fs::read(&output).unwrap();
    generate("bench_results.json", &output).unwrap();
    assert_eq!(fs::read(&output).unwrap(), first);
}

#[test]
fn missing_operation_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("ratio.rs");

    let err = generate("missing_operation.json", &output).unwrap_err();
    assert!(matches!(err, RatioError::Lookup { ref name } if name == "erc20_transfer_many"));
    assert!(!output.exists());
}

#[test]
fn empty_list_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("ratio.rs");

    let err = generate("empty.json", &output).unwrap_err();
    assert!(matches!(err, RatioError::Validation(_)));
    assert!(!output.exists());
}

#[test]
fn missing_input_file() {
    let err = load_benchmark_entries(&testdata("does_not_exist.json")).unwrap_err();
    assert!(matches!(err, RatioError::Io { .. }));
}
