use super::*;

fn report_with(errors: &[&str], warnings: &[&str]) -> Report {
    let mut report = Report::new("/bench/x.cnf");
    report.diagnostics.errors = errors.iter().map(ToString::to_string).collect();
    report.diagnostics.warnings = warnings.iter().map(ToString::to_string).collect();
    report
}

#[test]
fn empty_collection_is_nothing_to_report() {
    let err = Summary::from_reports(&[], DEFAULT_SIGNIFICANT_CHARS).unwrap_err();
    assert!(matches!(err, CheckerError::NothingToReport));
}

#[test]
fn counts_files_with_errors_and_warnings() {
    let reports = vec![
        report_with(&["Problem line is missing."], &["File type is missing."]),
        report_with(&[], &["File type is missing."]),
        report_with(&[], &[]),
    ];

    let summary = Summary::from_reports(&reports, DEFAULT_SIGNIFICANT_CHARS).unwrap();

    assert_eq!(summary.total_files, 3);
    assert_eq!(summary.files_with_errors, 1);
    assert_eq!(summary.files_with_warnings, 2);
    assert_eq!(summary.warning_types["File type is missing."], 2);
}

#[test]
fn messages_sharing_the_prefix_form_one_bucket() {
    // Both messages start with the same 30 characters.
    let first = "alpha-message-one-xxxxxxxxxxxx-tail-a";
    let second = "alpha-message-one-xxxxxxxxxxxx-tail-b";
    assert_eq!(first[..30], second[..30]);

    let reports = vec![report_with(&[first], &[]), report_with(&[second], &[])];
    let summary = Summary::from_reports(&reports, 30).unwrap();

    assert_eq!(summary.error_types.len(), 1);
    assert_eq!(summary.error_types["alpha-message-one-xxxxxxxxxxxx"], 2);
}

#[test]
fn difference_inside_the_prefix_splits_buckets() {
    // The messages differ at character 30 (index 29).
    let first = "alpha-message-one-xxxxxxxxxxxA";
    let second = "alpha-message-one-xxxxxxxxxxxB";

    let reports = vec![report_with(&[first], &[]), report_with(&[second], &[])];
    let summary = Summary::from_reports(&reports, 30).unwrap();

    assert_eq!(summary.error_types.len(), 2);
    assert!(summary.error_types.values().all(|count| *count == 1));
}

#[test]
fn buckets_keep_first_seen_order() {
    let reports = vec![
        report_with(&["zeta error"], &[]),
        report_with(&["alpha error", "zeta error"], &[]),
    ];

    let summary = Summary::from_reports(&reports, DEFAULT_SIGNIFICANT_CHARS).unwrap();
    let keys: Vec<&str> = summary.error_types.keys().map(String::as_str).collect();

    assert_eq!(keys, vec!["zeta error", "alpha error"]);
    assert_eq!(summary.error_types["zeta error"], 2);
}

#[test]
fn message_type_is_character_based() {
    assert_eq!(message_type("héllo wörld", 4), "héll");
    assert_eq!(message_type("short", 30), "short");
    assert_eq!(message_type("exact", 5), "exact");
}

#[test]
fn render_produces_expected_layout() {
    let reports = vec![
        report_with(&["More clauses than announced."], &["File type is missing."]),
        report_with(&[], &[]),
    ];
    let summary = Summary::from_reports(&reports, 10).unwrap();

    let expected = "\
Processed 2 files.
There are 1 files with errors.
There are 1 files with warnings.
--------------------
Summary of the errors:
--------------------
Error type: 'More claus...' Times found: 1
--------------------
Summary of the warnings:
--------------------
Warning type: 'File type ...' Times found: 1
--------------------
";
    assert_eq!(summary.render(), expected);
}

#[test]
fn render_without_findings_keeps_empty_sections() {
    let summary = Summary::from_reports(&[report_with(&[], &[])], 30).unwrap();
    let lines = summary.render_lines();

    assert_eq!(lines.len(), 10);
    assert_eq!(lines[4], "Summary of the errors:");
    assert_eq!(lines[7], "Summary of the warnings:");
}
