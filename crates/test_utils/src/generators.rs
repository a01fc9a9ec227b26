//! Property-Based Test Generators
//!
//! Provides proptest strategies for insurer names, document types, quality
//! statuses and uploaded document lists.

use domain_documents::{DocumentType, QualityStatus, UploadedDocument};
use proptest::prelude::*;

/// Strategy for recognized document types
pub fn recognized_type_strategy() -> impl Strategy<Value = DocumentType> {
    prop_oneof![
        Just(DocumentType::IdProof),
        Just(DocumentType::InsuranceCard),
        Just(DocumentType::DoctorPrescription),
        Just(DocumentType::DischargeSummary),
        Just(DocumentType::HospitalBill),
        Just(DocumentType::PaymentReceipt),
        Just(DocumentType::MedicalReports),
    ]
}

/// Strategy for any document type, including unrecognized codes
pub fn document_type_strategy() -> impl Strategy<Value = DocumentType> {
    prop_oneof![
        4 => recognized_type_strategy(),
        1 => "[A-Z_]{3,12}".prop_map(|code| DocumentType::parse(&code)),
    ]
}

/// Strategy for acceptable statuses (VALID or COMPLETE)
pub fn acceptable_status_strategy() -> impl Strategy<Value = QualityStatus> {
    prop_oneof![Just(QualityStatus::Valid), Just(QualityStatus::Complete)]
}

/// Strategy for any quality status, including unrecognized text
pub fn quality_status_strategy() -> impl Strategy<Value = QualityStatus> {
    prop_oneof![
        Just(QualityStatus::Valid),
        Just(QualityStatus::Complete),
        Just(QualityStatus::Unclear),
        Just(QualityStatus::Incomplete),
        Just(QualityStatus::Mismatched),
        "[A-Z]{4,10}".prop_map(|code| QualityStatus::parse(&code)),
    ]
}

/// Strategy for file names
pub fn file_name_strategy() -> impl Strategy<Value = String> {
    "[a-z]{1,12}\\.(pdf|png|jpg)"
}

/// Strategy for a single uploaded document with an optional status
pub fn uploaded_document_strategy() -> impl Strategy<Value = UploadedDocument> {
    (
        file_name_strategy(),
        document_type_strategy(),
        proptest::option::of(quality_status_strategy()),
    )
        .prop_map(|(name, document_type, status)| UploadedDocument {
            name,
            document_type,
            quality_status: status,
        })
}

/// Strategy for non-empty uploaded document lists
pub fn uploaded_documents_strategy() -> impl Strategy<Value = Vec<UploadedDocument>> {
    proptest::collection::vec(uploaded_document_strategy(), 1..12)
}

/// Strategy for insurer names containing "premium" or "gold" in any case
pub fn premium_insurer_strategy() -> impl Strategy<Value = String> {
    (
        "[A-Za-z ]{0,8}",
        prop_oneof![
            Just("premium"),
            Just("Premium"),
            Just("PREMIUM"),
            Just("gold"),
            Just("Gold"),
            Just("GoLd"),
        ],
        "[A-Za-z ]{0,8}",
    )
        .prop_map(|(prefix, tier, suffix)| format!("{}{}{}", prefix, tier, suffix))
}

/// Strategy for insurer names that never contain "premium" or "gold"
pub fn standard_insurer_strategy() -> impl Strategy<Value = String> {
    "[A-Za-z ]{0,24}".prop_filter("must not name a premium or gold tier", |name| {
        let lower = name.to_lowercase();
        !lower.contains("premium") && !lower.contains("gold")
    })
}

/// Strategy for any insurer name
pub fn insurer_name_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("BasicCare".to_string()),
        Just("MinimalCover".to_string()),
        Just("EssentialHealth".to_string()),
        premium_insurer_strategy(),
        standard_insurer_strategy(),
    ]
}
