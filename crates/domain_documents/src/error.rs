//! Document domain errors

use thiserror::Error;

use crate::checklist::ChecklistDocument;

/// Errors that can occur in the document domain
///
/// Validation itself never fails; these cover packet assembly.
#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("Cannot generate packet: missing required documents: {}", join_codes(.0))]
    MissingRequiredDocuments(Vec<ChecklistDocument>),
}

impl DocumentError {
    /// Checklist codes of the missing documents
    pub fn missing_codes(&self) -> Vec<String> {
        match self {
            DocumentError::MissingRequiredDocuments(missing) => {
                missing.iter().map(|doc| doc.code().to_string()).collect()
            }
        }
    }
}

fn join_codes(documents: &[ChecklistDocument]) -> String {
    documents
        .iter()
        .map(|doc| doc.code())
        .collect::<Vec<_>>()
        .join(", ")
}
