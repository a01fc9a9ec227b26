//! Required documents checked by the claim validator

use std::fmt;

use serde::{Deserialize, Serialize};

/// A document every cashless hospitalization claim must carry
///
/// Serialized as its human-readable label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RequiredDocument {
    #[serde(rename = "Patient ID Proof")]
    PatientIdProof,
    #[serde(rename = "Insurance Policy Copy")]
    InsurancePolicyCopy,
    #[serde(rename = "Doctor's Admission Notes")]
    DoctorsAdmissionNotes,
    #[serde(rename = "Discharge Summary")]
    DischargeSummary,
    #[serde(rename = "Final Hospital Bill with Breakup")]
    FinalHospitalBill,
    #[serde(rename = "Payment Receipts")]
    PaymentReceipts,
    /// May be waived for some insurers, see [`crate::is_lab_report_required`]
    #[serde(rename = "Lab/Diagnostic Reports")]
    LabDiagnosticReports,
}

impl RequiredDocument {
    /// All required documents in checking order
    pub const ALL: [RequiredDocument; 7] = [
        RequiredDocument::PatientIdProof,
        RequiredDocument::InsurancePolicyCopy,
        RequiredDocument::DoctorsAdmissionNotes,
        RequiredDocument::DischargeSummary,
        RequiredDocument::FinalHospitalBill,
        RequiredDocument::PaymentReceipts,
        RequiredDocument::LabDiagnosticReports,
    ];

    /// Returns the label shown to hospital staff
    pub fn label(&self) -> &'static str {
        match self {
            RequiredDocument::PatientIdProof => "Patient ID Proof",
            RequiredDocument::InsurancePolicyCopy => "Insurance Policy Copy",
            RequiredDocument::DoctorsAdmissionNotes => "Doctor's Admission Notes",
            RequiredDocument::DischargeSummary => "Discharge Summary",
            RequiredDocument::FinalHospitalBill => "Final Hospital Bill with Breakup",
            RequiredDocument::PaymentReceipts => "Payment Receipts",
            RequiredDocument::LabDiagnosticReports => "Lab/Diagnostic Reports",
        }
    }

    /// Looks up a required document by its exact label
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|required| required.label() == label)
    }
}

impl fmt::Display for RequiredDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
