//! Document validation DTOs

use serde::{Deserialize, Deserializer, Serialize};
use validator::Validate;

use domain_documents::{OverallStatus, QualityStatus, UploadedDocument, ValidationVerdict};

/// Body of `POST /validation/validate`
///
/// Absent fields deserialize as empty so they fail the length rules with a
/// 400 instead of a JSON rejection.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ValidateDocumentsRequest {
    #[serde(default)]
    #[validate(length(min = 1))]
    pub insurer_name: String,
    #[serde(default)]
    #[validate(length(min = 1))]
    pub claim_type: String,
    #[serde(default)]
    #[validate(length(min = 1))]
    pub uploaded_documents: Vec<DocumentInput>,
}

/// One uploaded document; a `null` name or type reads as empty
#[derive(Debug, Serialize, Deserialize, Validate)]
pub struct DocumentInput {
    #[serde(default, deserialize_with = "null_as_empty")]
    #[validate(length(min = 1))]
    pub name: String,
    #[serde(default, rename = "type", deserialize_with = "null_as_empty")]
    #[validate(length(min = 1))]
    pub document_type: String,
    pub status: Option<String>,
}

impl DocumentInput {
    /// Converts to the domain document. An empty status counts as absent.
    pub fn into_domain(self) -> UploadedDocument {
        let document = UploadedDocument::new(self.name, self.document_type.as_str());
        match self.status.filter(|status| !status.is_empty()) {
            Some(status) => document.with_status(QualityStatus::parse(&status)),
            None => document,
        }
    }
}

fn null_as_empty<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Debug, Serialize)]
pub struct ValidationResponse {
    pub missing: Vec<String>,
    pub issues: Vec<String>,
    pub status: OverallStatus,
    pub notes: String,
}

impl From<ValidationVerdict> for ValidationResponse {
    fn from(verdict: ValidationVerdict) -> Self {
        Self {
            missing: verdict
                .missing_documents
                .iter()
                .map(|doc| doc.label().to_string())
                .collect(),
            issues: verdict.document_issues,
            status: verdict.overall_status,
            notes: verdict.summary_note,
        }
    }
}
