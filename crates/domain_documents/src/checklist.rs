//! Insurer-tiered document checklist
//!
//! Drives the claim detail view and insurer packet assembly. Uses its own
//! lower-case vocabulary (`id_proof`, `admission_form`, ...) and is separate
//! from the validator's fixed seven-item list.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A document on the insurer checklist
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChecklistDocument {
    AdmissionForm,
    InsuranceCard,
    IdProof,
    DoctorPrescription,
    MedicalReports,
}

impl ChecklistDocument {
    /// Baseline checklist every insurer requires
    pub const BASELINE: [ChecklistDocument; 4] = [
        ChecklistDocument::AdmissionForm,
        ChecklistDocument::InsuranceCard,
        ChecklistDocument::IdProof,
        ChecklistDocument::DoctorPrescription,
    ];

    /// Returns the stored type code
    pub fn code(&self) -> &'static str {
        match self {
            ChecklistDocument::AdmissionForm => "admission_form",
            ChecklistDocument::InsuranceCard => "insurance_card",
            ChecklistDocument::IdProof => "id_proof",
            ChecklistDocument::DoctorPrescription => "doctor_prescription",
            ChecklistDocument::MedicalReports => "medical_reports",
        }
    }

    /// Returns the display label
    pub fn label(&self) -> &'static str {
        match self {
            ChecklistDocument::AdmissionForm => "Hospital Admission Form",
            ChecklistDocument::InsuranceCard => "Insurance Card",
            ChecklistDocument::IdProof => "ID Proof",
            ChecklistDocument::DoctorPrescription => "Doctor Prescription",
            ChecklistDocument::MedicalReports => "Medical Reports",
        }
    }

    /// Parses an exact lower-case type code
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "admission_form" => Some(ChecklistDocument::AdmissionForm),
            "insurance_card" => Some(ChecklistDocument::InsuranceCard),
            "id_proof" => Some(ChecklistDocument::IdProof),
            "doctor_prescription" => Some(ChecklistDocument::DoctorPrescription),
            "medical_reports" => Some(ChecklistDocument::MedicalReports),
            _ => None,
        }
    }
}

impl fmt::Display for ChecklistDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// A document persisted for a claim
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredDocument {
    pub id: Uuid,
    /// Stored type code, compared exactly against checklist codes
    pub document_type: String,
    pub file_name: String,
    /// Object storage key
    pub file_path: String,
}

impl StoredDocument {
    /// Creates a stored document with a fresh identifier
    pub fn new(
        document_type: impl Into<String>,
        file_name: impl Into<String>,
        file_path: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            document_type: document_type.into(),
            file_name: file_name.into(),
            file_path: file_path.into(),
        }
    }

    fn is_of(&self, document: ChecklistDocument) -> bool {
        self.document_type == document.code()
    }
}

/// One line of a claim's document checklist
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChecklistEntry {
    pub document: ChecklistDocument,
    pub label: String,
    pub uploaded: bool,
    /// First stored document of this type
    pub stored: Option<StoredDocument>,
}

/// Returns the checklist documents an insurer requires
///
/// Insurers whose name contains "premium" or "gold" (any case) need only the
/// baseline; everyone else also needs medical reports.
pub fn required_documents(insurer: &str) -> Vec<ChecklistDocument> {
    let insurer = insurer.to_lowercase();
    let mut documents = ChecklistDocument::BASELINE.to_vec();

    if !(insurer.contains("premium") || insurer.contains("gold")) {
        documents.push(ChecklistDocument::MedicalReports);
    }
    documents
}

/// Returns true if the stored type code is on the insurer's checklist
pub fn is_document_required(document_type: &str, insurer: &str) -> bool {
    ChecklistDocument::from_code(document_type)
        .map_or(false, |document| required_documents(insurer).contains(&document))
}

/// Builds the checklist for a claim's stored documents
pub fn build_checklist(insurer: &str, documents: &[StoredDocument]) -> Vec<ChecklistEntry> {
    required_documents(insurer)
        .into_iter()
        .map(|document| {
            let stored = documents.iter().find(|doc| doc.is_of(document)).cloned();
            ChecklistEntry {
                document,
                label: document.label().to_string(),
                uploaded: stored.is_some(),
                stored,
            }
        })
        .collect()
}

/// Returns the checklist documents with no stored counterpart, in checklist order
pub fn missing_for_packet(insurer: &str, documents: &[StoredDocument]) -> Vec<ChecklistDocument> {
    required_documents(insurer)
        .into_iter()
        .filter(|document| !documents.iter().any(|doc| doc.is_of(*document)))
        .collect()
}
