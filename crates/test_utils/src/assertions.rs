//! Custom Test Assertions
//!
//! Provides assertion helpers for validation verdicts that give more
//! meaningful failure messages than bare `assert_eq!`.

use domain_documents::{OverallStatus, RequiredDocument, ValidationVerdict};

/// Asserts that a verdict passed with no findings
///
/// # Panics
///
/// Panics if the status is FAIL or either finding list is non-empty
pub fn assert_verdict_pass(verdict: &ValidationVerdict) {
    assert_eq!(
        verdict.overall_status,
        OverallStatus::Pass,
        "Expected PASS, got FAIL: missing={:?}, issues={:?}",
        verdict.missing_labels(),
        verdict.document_issues
    );
    assert!(verdict.missing_documents.is_empty());
    assert!(verdict.document_issues.is_empty());
    assert_eq!(verdict.summary_note, "All required documents are present and valid.");
}

/// Asserts that a verdict failed
pub fn assert_verdict_fail(verdict: &ValidationVerdict) {
    assert_eq!(
        verdict.overall_status,
        OverallStatus::Fail,
        "Expected FAIL, got PASS with note {:?}",
        verdict.summary_note
    );
}

/// Asserts that exactly `expected` are missing, in order
pub fn assert_missing_exactly(verdict: &ValidationVerdict, expected: &[RequiredDocument]) {
    assert_eq!(
        verdict.missing_documents,
        expected,
        "Missing documents differ: actual={:?}, expected={:?}",
        verdict.missing_labels(),
        expected.iter().map(|doc| doc.label()).collect::<Vec<_>>()
    );
}

/// Asserts that `required` is not reported missing
pub fn assert_not_missing(verdict: &ValidationVerdict, required: RequiredDocument) {
    assert!(
        !verdict.missing_documents.contains(&required),
        "{} unexpectedly reported missing",
        required
    );
}

/// Asserts that an issue was reported for the named document
pub fn assert_issue_for(verdict: &ValidationVerdict, document_name: &str) {
    let prefix = format!("{} - ", document_name);
    assert!(
        verdict.document_issues.iter().any(|issue| issue.starts_with(&prefix)),
        "No issue reported for {}: issues={:?}",
        document_name,
        verdict.document_issues
    );
}

/// Asserts that the verdict's status agrees with its findings
pub fn assert_verdict_consistent(verdict: &ValidationVerdict) {
    let clean = verdict.missing_documents.is_empty() && verdict.document_issues.is_empty();
    assert_eq!(
        verdict.is_pass(),
        clean,
        "Status {:?} disagrees with findings: missing={}, issues={}",
        verdict.overall_status,
        verdict.missing_documents.len(),
        verdict.document_issues.len()
    );
}
