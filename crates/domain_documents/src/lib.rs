//! Claim Document Domain
//!
//! This crate decides whether the documents uploaded for a hospital
//! cashless-insurance claim are complete and usable.
//!
//! Two independent requirement lists live here:
//!
//! - **Validator list**: the fixed seven labels every claim is checked against
//!   by [`DocumentValidator`], with a lab-report exemption for a handful of
//!   insurers.
//! - **Checklist**: the insurer-tiered four/five item list used by the claim
//!   detail view and by insurer packet assembly ([`required_documents`]).
//!
//! The two lists differ in vocabulary, length and tiering. Neither is derived
//! from the other.
//!
//! # Example
//!
//! ```rust
//! use domain_documents::{DocumentValidator, DocumentType, QualityStatus, UploadedDocument};
//!
//! let documents = vec![
//!     UploadedDocument::new("id.pdf", DocumentType::IdProof).with_status(QualityStatus::Complete),
//!     UploadedDocument::new("ins.pdf", DocumentType::InsuranceCard).with_status(QualityStatus::Unclear),
//! ];
//!
//! let verdict = DocumentValidator::validate("Star Health", "Cashless Hospitalization", &documents);
//! assert!(!verdict.is_pass());
//! assert_eq!(verdict.missing_documents.len(), 5);
//! ```

pub mod document_type;
pub mod quality;
pub mod requirement;
pub mod document;
pub mod verdict;
pub mod validator;
pub mod checklist;
pub mod packet;
pub mod error;

pub use document_type::DocumentType;
pub use quality::QualityStatus;
pub use requirement::RequiredDocument;
pub use document::{Satisfaction, UploadedDocument};
pub use verdict::{OverallStatus, ValidationVerdict};
pub use validator::{
    is_lab_report_required, validate_claim_documents, DocumentValidator,
    LAB_REPORT_EXEMPT_INSURERS,
};
pub use checklist::{
    build_checklist, is_document_required, missing_for_packet, required_documents,
    ChecklistDocument, ChecklistEntry, StoredDocument,
};
pub use packet::{InsurerPacket, PacketEntry};
pub use error::DocumentError;
