//! Uploaded document type codes

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::requirement::RequiredDocument;

/// Declared kind of an uploaded document
///
/// Type codes arrive as upper-case strings (`ID_PROOF`, `HOSPITAL_BILL`, ...).
/// Anything outside the known set is kept verbatim in [`DocumentType::Other`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum DocumentType {
    /// Patient identity proof
    IdProof,
    /// Insurance card or policy copy
    InsuranceCard,
    /// Doctor's prescription / admission notes
    DoctorPrescription,
    /// Discharge summary
    DischargeSummary,
    /// Final itemized hospital bill
    HospitalBill,
    /// Payment receipt
    PaymentReceipt,
    /// Lab and diagnostic reports
    MedicalReports,
    /// Unrecognized type code
    Other(String),
}

impl DocumentType {
    /// Parses a wire type code. Matching is exact and case-sensitive.
    pub fn parse(code: &str) -> Self {
        match code {
            "ID_PROOF" => DocumentType::IdProof,
            "INSURANCE_CARD" => DocumentType::InsuranceCard,
            "DOCTOR_PRESCRIPTION" => DocumentType::DoctorPrescription,
            "DISCHARGE_SUMMARY" => DocumentType::DischargeSummary,
            "HOSPITAL_BILL" => DocumentType::HospitalBill,
            "PAYMENT_RECEIPT" => DocumentType::PaymentReceipt,
            "MEDICAL_REPORTS" => DocumentType::MedicalReports,
            other => DocumentType::Other(other.to_string()),
        }
    }

    /// Returns the wire type code
    pub fn code(&self) -> &str {
        match self {
            DocumentType::IdProof => "ID_PROOF",
            DocumentType::InsuranceCard => "INSURANCE_CARD",
            DocumentType::DoctorPrescription => "DOCTOR_PRESCRIPTION",
            DocumentType::DischargeSummary => "DISCHARGE_SUMMARY",
            DocumentType::HospitalBill => "HOSPITAL_BILL",
            DocumentType::PaymentReceipt => "PAYMENT_RECEIPT",
            DocumentType::MedicalReports => "MEDICAL_REPORTS",
            DocumentType::Other(code) => code,
        }
    }

    /// Returns the required document this type satisfies
    pub fn requirement(&self) -> Option<RequiredDocument> {
        match self {
            DocumentType::IdProof => Some(RequiredDocument::PatientIdProof),
            DocumentType::InsuranceCard => Some(RequiredDocument::InsurancePolicyCopy),
            DocumentType::DoctorPrescription => Some(RequiredDocument::DoctorsAdmissionNotes),
            DocumentType::DischargeSummary => Some(RequiredDocument::DischargeSummary),
            DocumentType::HospitalBill => Some(RequiredDocument::FinalHospitalBill),
            DocumentType::PaymentReceipt => Some(RequiredDocument::PaymentReceipts),
            DocumentType::MedicalReports => Some(RequiredDocument::LabDiagnosticReports),
            DocumentType::Other(_) => None,
        }
    }

    /// Returns true unless this is an unrecognized code
    pub fn is_recognized(&self) -> bool {
        !matches!(self, DocumentType::Other(_))
    }
}

impl From<&str> for DocumentType {
    fn from(code: &str) -> Self {
        DocumentType::parse(code)
    }
}

impl fmt::Display for DocumentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl Serialize for DocumentType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.code())
    }
}

impl<'de> Deserialize<'de> for DocumentType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let code = String::deserialize(deserializer)?;
        Ok(DocumentType::parse(&code))
    }
}
