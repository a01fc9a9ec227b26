//! Pre-built Test Fixtures
//!
//! Provides ready-to-use insurers, claim types and document sets.
//! These fixtures are consistent and predictable for unit tests.

use domain_documents::{DocumentType, QualityStatus, StoredDocument, UploadedDocument};
use uuid::Uuid;

/// Fixture for insurer names
pub struct InsurerFixtures;

impl InsurerFixtures {
    /// Standard-tier insurer with no lab-report exemption
    pub fn standard() -> &'static str {
        "Star Health"
    }

    /// Premium-tier insurer for the checklist resolver
    pub fn premium() -> &'static str {
        "Premium Care Plus"
    }

    /// Gold-tier insurer for the checklist resolver
    pub fn gold() -> &'static str {
        "HDFC Gold Shield"
    }

    /// Insurer exempt from lab/diagnostic reports
    pub fn lab_exempt() -> &'static str {
        "BasicCare"
    }

    /// All insurers exempt from lab/diagnostic reports
    pub fn all_lab_exempt() -> [&'static str; 3] {
        ["BasicCare", "MinimalCover", "EssentialHealth"]
    }
}

/// Fixture for claim types
pub struct ClaimTypeFixtures;

impl ClaimTypeFixtures {
    /// Standard claim type
    pub fn cashless() -> &'static str {
        "Cashless Hospitalization"
    }

    /// Alternate claim type
    pub fn reimbursement() -> &'static str {
        "Reimbursement"
    }
}

/// Fixture for uploaded document sets
pub struct DocumentFixtures;

impl DocumentFixtures {
    /// File names used by [`DocumentFixtures::complete_set`], by type
    pub fn file_name(document_type: &DocumentType) -> String {
        format!("{}.pdf", document_type.code().to_lowercase())
    }

    /// One COMPLETE document for each of the seven recognized types
    pub fn complete_set() -> Vec<UploadedDocument> {
        Self::recognized_types()
            .into_iter()
            .map(|document_type| {
                UploadedDocument::new(Self::file_name(&document_type), document_type)
                    .with_status(QualityStatus::Complete)
            })
            .collect()
    }

    /// The complete set without any document of `excluded` type
    pub fn complete_set_without(excluded: DocumentType) -> Vec<UploadedDocument> {
        Self::complete_set()
            .into_iter()
            .filter(|doc| doc.document_type != excluded)
            .collect()
    }

    /// The two-document Star Health example: one clean ID, one unclear card
    pub fn star_health_example() -> Vec<UploadedDocument> {
        vec![
            UploadedDocument::new("id.pdf", DocumentType::IdProof).with_status(QualityStatus::Complete),
            UploadedDocument::new("ins.pdf", DocumentType::InsuranceCard).with_status(QualityStatus::Unclear),
        ]
    }

    /// The seven recognized document types in required-list order
    pub fn recognized_types() -> Vec<DocumentType> {
        vec![
            DocumentType::IdProof,
            DocumentType::InsuranceCard,
            DocumentType::DoctorPrescription,
            DocumentType::DischargeSummary,
            DocumentType::HospitalBill,
            DocumentType::PaymentReceipt,
            DocumentType::MedicalReports,
        ]
    }
}

/// Fixture for stored claim documents
pub struct StoredDocumentFixtures;

impl StoredDocumentFixtures {
    /// Deterministic document identifier
    pub fn document_id(n: u8) -> Uuid {
        Uuid::from_bytes([0x55, 0x0e, 0x84, 0x00, 0xe2, 0x9b, 0x41, 0xd4, 0xa7, 0x16, 0x44, 0x66, 0x55, 0x44, 0x00, n])
    }

    /// One stored document per checklist code, in checklist order
    pub fn full_checklist() -> Vec<StoredDocument> {
        ["admission_form", "insurance_card", "id_proof", "doctor_prescription", "medical_reports"]
            .into_iter()
            .enumerate()
            .map(|(i, code)| StoredDocument {
                id: Self::document_id(i as u8),
                document_type: code.to_string(),
                file_name: format!("{}.pdf", code),
                file_path: format!("documents/{}.pdf", code),
            })
            .collect()
    }
}
