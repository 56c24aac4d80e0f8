use super::*;

const SUITE: &str = "\
# shallow reference counts
rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - id \"startpos\"; D1 20; D2 400; D3 8902;
8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - D1 14; D2 191; D3 2812;
";

#[test]
fn test_records_pass_and_respect_node_limit() {
    let records = read_epd(SUITE).unwrap();
    let cases = run_records(&records, 1_000);

    assert_eq!(cases.len(), 2);
    assert_eq!(cases[0].name, "startpos");
    assert_eq!(cases[1].name, "case 002");
    assert!(cases.iter().all(CaseReport::passed));
    assert_eq!(cases[0].skipped, vec![3]);
    assert_eq!(cases[1].skipped, vec![3]);
    assert_eq!(
        cases[0].results,
        vec![
            DepthResult {
                depth: 1,
                expected: 20,
                actual: 20
            },
            DepthResult {
                depth: 2,
                expected: 400,
                actual: 400
            },
        ]
    );
}

#[test]
fn test_wrong_expectation_is_reported() {
    let records = read_epd(
        "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - D1 20; D2 401;",
    )
    .unwrap();
    let report = SuiteReport {
        source: "inline".to_string(),
        cases: run_records(&records, u64::MAX),
        elapsed_ms: 0,
    };
    assert_eq!(report.failures(), 1);
    assert_eq!(report.total_nodes(), 420);
    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["cases"][0]["results"][1]["actual"], 400);
}

#[test]
fn test_missing_suite_file() {
    let err = run_suite_file(Path::new("/nonexistent/suite.epd"), 10).unwrap_err();
    assert!(err.to_string().contains("failed to read suite"));
}
