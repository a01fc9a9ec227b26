//! Validation verdict

use serde::{Deserialize, Serialize};

use crate::requirement::RequiredDocument;

/// Overall outcome of a document validation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum OverallStatus {
    Pass,
    Fail,
}

/// Result of validating a claim's uploaded documents
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationVerdict {
    /// Required documents not covered by any upload, in checking order
    pub missing_documents: Vec<RequiredDocument>,
    /// Quality issues, in upload order
    pub document_issues: Vec<String>,
    /// PASS iff nothing is missing and nothing has issues
    pub overall_status: OverallStatus,
    /// One-line human-readable summary
    pub summary_note: String,
}

impl ValidationVerdict {
    /// Builds a verdict, deriving the status and summary from the findings
    pub fn from_findings(missing_documents: Vec<RequiredDocument>, document_issues: Vec<String>) -> Self {
        let overall_status = if missing_documents.is_empty() && document_issues.is_empty() {
            OverallStatus::Pass
        } else {
            OverallStatus::Fail
        };
        let summary_note = summarize(missing_documents.len(), document_issues.len());

        Self {
            missing_documents,
            document_issues,
            overall_status,
            summary_note,
        }
    }

    /// Returns true if the claim passed
    pub fn is_pass(&self) -> bool {
        self.overall_status == OverallStatus::Pass
    }

    /// Labels of the missing documents
    pub fn missing_labels(&self) -> Vec<&'static str> {
        self.missing_documents.iter().map(|doc| doc.label()).collect()
    }
}

fn summarize(missing: usize, issues: usize) -> String {
    match (missing, issues) {
        (0, 0) => "All required documents are present and valid.".to_string(),
        (n, 0) => format!("{} required document(s) missing.", n),
        (0, m) => format!("{} document(s) have issues.", m),
        (n, m) => format!(
            "{} required document(s) missing and {} document(s) have issues.",
            n, m
        ),
    }
}
