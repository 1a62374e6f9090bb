use std::collections::BTreeSet;
use std::fs;
use std::path::PathBuf;

use yn00_core::{Method, ResultTable, StatValue, validate_table};
use yn00_parser::config::ReportConfig;
use yn00_parser::error::ReportError;
use yn00_parser::normalize::normalize_report;
use yn00_parser::parser::{parse_grouped, parse_ng86, parse_yn00};
use yn00_parser::sections::split_sections;
use yn00_parser::{parse_report, read_report};

#[test]
fn test_parse_primates_fixture_declares_sequences_in_row_order() {
    let report = parse_report(&fixture("yn00-primates.out"), &ReportConfig::default())
        .expect("fixture should parse");

    assert_eq!(
        report.sequences.iter().collect::<Vec<_>>(),
        vec!["Homo_sapie", "Pan_troglo", "Gorilla_go", "Pongo_pygm"]
    );
    assert_eq!(report.results.len(), 4);
    assert_eq!(report.results.pair_count(), 6);
}

#[test]
fn test_parse_primates_fixture_has_every_method_for_every_pair() {
    let report = parse_report(&fixture("yn00-primates.out"), &ReportConfig::default())
        .expect("fixture should parse");
    let all: BTreeSet<Method> = Method::ALL.into_iter().collect();

    for (a, b, pair) in report.results.entries() {
        let methods: BTreeSet<Method> = pair.methods().collect();
        assert_eq!(methods, all, "{a} -> {b}");
    }
    assert!(validate_table(&report.results).is_empty());
}

#[test]
fn test_parse_primates_fixture_values() {
    let report = parse_report(&fixture("yn00-primates.out"), &ReportConfig::default())
        .expect("fixture should parse");
    let results = &report.results;

    let ng86 = results
        .method_stats("Pongo_pygm", "Gorilla_go", Method::Ng86)
        .unwrap();
    assert_eq!(ng86.value("omega"), Some(0.0952));
    assert_eq!(ng86.value("dN"), Some(0.0057));
    assert_eq!(ng86.value("dS"), Some(0.0597));

    let yn00 = results
        .method_stats("Pan_troglo", "Homo_sapie", Method::Yn00)
        .unwrap();
    assert_eq!(yn00.value("S"), Some(67.3));
    assert_eq!(yn00.value("kappa"), Some(3.6564));
    assert_eq!(yn00.value("dS SE"), Some(0.0151));

    // Row "4 1" wraps its dS SE onto the next line in the fixture.
    let wrapped = results
        .method_stats("Homo_sapie", "Pongo_pygm", Method::Yn00)
        .unwrap();
    assert_eq!(wrapped.value("dS"), Some(0.059));
    assert_eq!(wrapped.value("dS SE"), Some(0.031));

    let lwl85m = results
        .method_stats("Homo_sapie", "Pan_troglo", Method::Lwl85m)
        .unwrap();
    assert!(lwl85m.is_all_undefined());
    assert_eq!(lwl85m.get("rho"), Some(StatValue::Undefined));

    let lwl85m = results
        .method_stats("Gorilla_go", "Pongo_pygm", Method::Lwl85m)
        .unwrap();
    assert_eq!(lwl85m.value("rho"), Some(0.626));
    assert_eq!(lwl85m.value("omega"), Some(0.1029));

    let lpb93 = results
        .method_stats("Pan_troglo", "Gorilla_go", Method::Lpb93)
        .unwrap();
    assert_eq!(lpb93.value("dS"), Some(0.0262));
    assert_eq!(lpb93.len(), 3);
}

#[test]
fn test_parsing_is_deterministic() {
    let text = fixture("yn00-primates.out");
    let first = parse_report(&text, &ReportConfig::default()).unwrap();
    let second = parse_report(&text, &ReportConfig::default()).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_sections_can_be_parsed_independently() {
    let text = fixture("yn00-primates.out");
    let lines = normalize_report(&text, true);
    let sections = split_sections(&lines, &ReportConfig::default().markers).unwrap();

    let mut results = ResultTable::new();
    let sequences = parse_ng86(sections.ng86, &mut results).unwrap();
    parse_grouped(sections.grouped, &mut results).unwrap();

    let pair = results.pair("Homo_sapie", "Pan_troglo").unwrap();
    assert_eq!(
        pair.methods().collect::<Vec<_>>(),
        vec![Method::Ng86, Method::Lwl85, Method::Lwl85m, Method::Lpb93]
    );

    parse_yn00(sections.yn00, &mut results, &sequences).unwrap();
    let pair = results.pair("Homo_sapie", "Pan_troglo").unwrap();
    assert_eq!(pair.len(), Method::ALL.len());
}

#[test]
fn test_without_row_joining_wrapped_row_is_incomplete() {
    let config = ReportConfig {
        join_wrapped_rows: false,
        ..ReportConfig::default()
    };
    let report = parse_report(&fixture("yn00-primates.out"), &config).unwrap();

    let wrapped = report
        .results
        .method_stats("Homo_sapie", "Pongo_pygm", Method::Yn00)
        .unwrap();
    assert_eq!(wrapped.value("dS"), Some(0.059));
    assert!(!wrapped.contains_key("dS SE"));
}

#[test]
fn test_report_without_grouped_section_is_rejected() {
    let text = fixture("yn00-primates.out");
    let truncated = text
        .split("(C) LWL85")
        .next()
        .expect("split always yields a first piece");
    let err = parse_report(truncated, &ReportConfig::default()).unwrap_err();
    assert!(matches!(err, ReportError::MissingSection { section: "LWL85/LPB93", .. }));
}

#[test]
fn test_report_with_empty_matrix_is_rejected() {
    let text = "\
(A) Nei-Gojobori (1986) method
(B) Yang & Nielsen (2000) method
(C) LWL85, LPB93 & LWLm methods
";
    let err = parse_report(text, &ReportConfig::default()).unwrap_err();
    assert!(matches!(err, ReportError::NoSequences));
}

#[test]
fn test_read_report_from_path() {
    let path = fixture_path("yn00-primates.out");
    let report = read_report(&path, &ReportConfig::default()).unwrap();
    assert_eq!(report.sequences.len(), 4);

    let err = read_report(&fixture_path("missing.out"), &ReportConfig::default()).unwrap_err();
    assert!(matches!(err, ReportError::Io { .. }));
}

fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

fn fixture(name: &str) -> String {
    fs::read_to_string(fixture_path(name)).expect("fixture file must be readable")
}
