//! Claim document completeness validation
//!
//! Checks uploaded documents against the fixed seven-item required list and
//! classifies the quality status of every upload.
//!
//! # Rules
//!
//! - A required document is missing unless an upload satisfies it
//! - Lab/diagnostic reports are waived for [`LAB_REPORT_EXEMPT_INSURERS`]
//! - Every upload without a `VALID` or `COMPLETE` status is reported as an issue
//!
//! This list is independent of the insurer-tiered checklist in
//! [`crate::checklist`]; the validator never consults it.

use tracing::debug;

use crate::document::UploadedDocument;
use crate::requirement::RequiredDocument;
use crate::verdict::ValidationVerdict;

/// Insurers that do not require lab/diagnostic reports (exact, case-sensitive)
pub const LAB_REPORT_EXEMPT_INSURERS: [&str; 3] = ["BasicCare", "MinimalCover", "EssentialHealth"];

/// Validator for claim documents
///
/// Stateless; safe to call from any number of threads.
///
/// # Examples
///
/// ```rust
/// use domain_documents::{DocumentValidator, DocumentType, UploadedDocument};
///
/// let documents = vec![UploadedDocument::new("bill.pdf", DocumentType::HospitalBill)];
/// let verdict = DocumentValidator::validate("Star Health", "Cashless Hospitalization", &documents);
///
/// assert_eq!(verdict.document_issues, vec!["bill.pdf - document status not provided"]);
/// ```
pub struct DocumentValidator;

impl DocumentValidator {
    /// Validates uploaded documents for a claim
    ///
    /// # Arguments
    ///
    /// * `insurer_name` - Insurer the claim is filed with
    /// * `claim_type` - Claim type, e.g. "Cashless Hospitalization"
    /// * `uploaded_documents` - Documents already uploaded for the claim
    ///
    /// # Returns
    ///
    /// A fresh `ValidationVerdict`. Malformed input (empty names, unknown
    /// codes) is not rejected here; it flows into the verdict as-is.
    pub fn validate(
        insurer_name: &str,
        claim_type: &str,
        uploaded_documents: &[UploadedDocument],
    ) -> ValidationVerdict {
        let missing = Self::missing_documents(insurer_name, claim_type, uploaded_documents);
        let issues = Self::document_issues(uploaded_documents);

        debug!(
            insurer = insurer_name,
            claim_type = claim_type,
            uploaded = uploaded_documents.len(),
            missing = missing.len(),
            issues = issues.len(),
            "Validated claim documents"
        );

        ValidationVerdict::from_findings(missing, issues)
    }

    /// Returns the required documents no upload satisfies, in checking order
    pub fn missing_documents(
        insurer_name: &str,
        claim_type: &str,
        uploaded_documents: &[UploadedDocument],
    ) -> Vec<RequiredDocument> {
        let satisfied: Vec<_> = uploaded_documents.iter().map(UploadedDocument::satisfies).collect();
        let lab_reports_required = is_lab_report_required(insurer_name, claim_type);

        RequiredDocument::ALL
            .into_iter()
            .filter(|required| {
                if *required == RequiredDocument::LabDiagnosticReports && !lab_reports_required {
                    return false;
                }
                !satisfied.iter().any(|s| s.matches(*required))
            })
            .collect()
    }

    /// Returns one issue message per defective upload, in upload order
    pub fn document_issues(uploaded_documents: &[UploadedDocument]) -> Vec<String> {
        uploaded_documents.iter().filter_map(UploadedDocument::issue).collect()
    }
}

/// Returns whether lab/diagnostic reports are required for a claim
///
/// `claim_type` is accepted but does not currently change the outcome.
pub fn is_lab_report_required(insurer_name: &str, _claim_type: &str) -> bool {
    !LAB_REPORT_EXEMPT_INSURERS.contains(&insurer_name)
}

/// Validates uploaded documents for a claim
///
/// Shorthand for [`DocumentValidator::validate`].
pub fn validate_claim_documents(
    insurer_name: &str,
    claim_type: &str,
    uploaded_documents: &[UploadedDocument],
) -> ValidationVerdict {
    DocumentValidator::validate(insurer_name, claim_type, uploaded_documents)
}
