//! Uploaded documents as seen by the validator

use serde::{Deserialize, Serialize};

use crate::document_type::DocumentType;
use crate::quality::QualityStatus;
use crate::requirement::RequiredDocument;

/// A document the hospital has already uploaded for a claim
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadedDocument {
    /// File name, used verbatim in issue messages
    pub name: String,
    /// Declared type
    pub document_type: DocumentType,
    /// Quality status, if one was assessed
    pub quality_status: Option<QualityStatus>,
}

/// What an uploaded document counts towards
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Satisfaction<'a> {
    /// A recognized type mapped to its required document
    Requirement(RequiredDocument),
    /// An unrecognized type, matched by its file name against required labels
    LiteralName(&'a str),
}

impl Satisfaction<'_> {
    /// Returns true if this satisfies `required`
    ///
    /// A literal name only matches a label it equals exactly, so in practice
    /// unrecognized documents satisfy nothing.
    pub fn matches(&self, required: RequiredDocument) -> bool {
        match self {
            Satisfaction::Requirement(satisfied) => *satisfied == required,
            Satisfaction::LiteralName(name) => *name == required.label(),
        }
    }
}

impl UploadedDocument {
    /// Creates a document with no quality status
    pub fn new(name: impl Into<String>, document_type: impl Into<DocumentType>) -> Self {
        Self {
            name: name.into(),
            document_type: document_type.into(),
            quality_status: None,
        }
    }

    /// Sets the quality status
    pub fn with_status(mut self, status: impl Into<QualityStatus>) -> Self {
        self.quality_status = Some(status.into());
        self
    }

    /// Returns what this document counts towards
    pub fn satisfies(&self) -> Satisfaction<'_> {
        match self.document_type.requirement() {
            Some(required) => Satisfaction::Requirement(required),
            None => Satisfaction::LiteralName(&self.name),
        }
    }

    /// Returns the quality issue message for this document, if any
    pub fn issue(&self) -> Option<String> {
        let description = match &self.quality_status {
            None => "document status not provided",
            Some(status) => status.issue_description()?,
        };
        Some(format!("{} - {}", self.name, description))
    }
}
