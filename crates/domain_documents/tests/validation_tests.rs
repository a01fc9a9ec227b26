//! Tests for claim document validation

use domain_documents::{
    validate_claim_documents, DocumentType, DocumentValidator, OverallStatus, QualityStatus,
    RequiredDocument, Satisfaction, UploadedDocument, ValidationVerdict,
};
use test_utils::{
    assert_issue_for, assert_missing_exactly, assert_not_missing, assert_verdict_fail,
    assert_verdict_pass, ClaimTypeFixtures, DocumentFixtures, InsurerFixtures,
    UploadedDocumentBuilder,
};

fn validate(insurer: &str, documents: &[UploadedDocument]) -> ValidationVerdict {
    DocumentValidator::validate(insurer, ClaimTypeFixtures::cashless(), documents)
}

// ============================================================================
// Type Mapping Tests
// ============================================================================

mod mapping_tests {
    use super::*;

    #[test]
    fn test_every_recognized_type_maps_to_a_distinct_requirement() {
        let mapped: Vec<RequiredDocument> = DocumentFixtures::recognized_types()
            .iter()
            .map(|t| t.requirement().expect("recognized type should map"))
            .collect();

        assert_eq!(mapped, RequiredDocument::ALL.to_vec());
    }

    #[test]
    fn test_mapping_labels() {
        let cases = [
            ("ID_PROOF", "Patient ID Proof"),
            ("INSURANCE_CARD", "Insurance Policy Copy"),
            ("DOCTOR_PRESCRIPTION", "Doctor's Admission Notes"),
            ("DISCHARGE_SUMMARY", "Discharge Summary"),
            ("HOSPITAL_BILL", "Final Hospital Bill with Breakup"),
            ("PAYMENT_RECEIPT", "Payment Receipts"),
            ("MEDICAL_REPORTS", "Lab/Diagnostic Reports"),
        ];

        for (code, label) in cases {
            let required = DocumentType::parse(code).requirement().unwrap();
            assert_eq!(required.label(), label);
            assert_eq!(RequiredDocument::from_label(label), Some(required));
        }
    }

    #[test]
    fn test_unrecognized_type_falls_back_to_literal_name() {
        let doc = UploadedDocument::new("scan.pdf", "XRAY");
        assert_eq!(doc.satisfies(), Satisfaction::LiteralName("scan.pdf"));
        assert!(RequiredDocument::ALL.iter().all(|r| !doc.satisfies().matches(*r)));
    }

    #[test]
    fn test_literal_name_equal_to_label_satisfies_requirement() {
        let doc = UploadedDocument::new("Discharge Summary", "SUMMARY_SCAN")
            .with_status(QualityStatus::Complete);

        assert!(doc.satisfies().matches(RequiredDocument::DischargeSummary));

        let verdict = validate(InsurerFixtures::standard(), &[doc]);
        assert_not_missing(&verdict, RequiredDocument::DischargeSummary);
    }

    #[test]
    fn test_lowercase_code_is_unrecognized() {
        let doc = UploadedDocument::new("id.pdf", "id_proof").with_status(QualityStatus::Complete);
        let verdict = validate(InsurerFixtures::standard(), &[doc]);

        assert!(verdict.missing_documents.contains(&RequiredDocument::PatientIdProof));
    }

    #[test]
    fn test_required_document_serializes_as_label() {
        let json = serde_json::to_string(&RequiredDocument::DoctorsAdmissionNotes).unwrap();
        assert_eq!(json, "\"Doctor's Admission Notes\"");
    }
}

// ============================================================================
// Missing Document Tests
// ============================================================================

mod missing_tests {
    use super::*;

    #[test]
    fn test_complete_set_passes() {
        let verdict = validate(InsurerFixtures::standard(), &DocumentFixtures::complete_set());
        assert_verdict_pass(&verdict);
    }

    #[test]
    fn test_valid_status_is_as_good_as_complete() {
        let documents: Vec<_> = DocumentFixtures::complete_set()
            .into_iter()
            .map(|doc| doc.with_status(QualityStatus::Valid))
            .collect();

        assert_verdict_pass(&validate(InsurerFixtures::standard(), &documents));
    }

    #[test]
    fn test_missing_documents_follow_required_order() {
        let documents = vec![
            UploadedDocumentBuilder::new().with_name("bill.pdf").with_type("HOSPITAL_BILL").build(),
            UploadedDocumentBuilder::new().with_name("ins.pdf").with_type("INSURANCE_CARD").build(),
        ];

        let verdict = validate(InsurerFixtures::standard(), &documents);

        assert_missing_exactly(
            &verdict,
            &[
                RequiredDocument::PatientIdProof,
                RequiredDocument::DoctorsAdmissionNotes,
                RequiredDocument::DischargeSummary,
                RequiredDocument::PaymentReceipts,
                RequiredDocument::LabDiagnosticReports,
            ],
        );
        assert_eq!(verdict.summary_note, "5 required document(s) missing.");
    }

    #[test]
    fn test_duplicate_uploads_count_once() {
        let mut documents = DocumentFixtures::complete_set();
        documents.push(
            UploadedDocument::new("id-copy.pdf", DocumentType::IdProof).with_status(QualityStatus::Complete),
        );

        assert_verdict_pass(&validate(InsurerFixtures::standard(), &documents));
    }

    #[test]
    fn test_defective_upload_still_satisfies_requirement() {
        let documents: Vec<_> = DocumentFixtures::complete_set()
            .into_iter()
            .map(|doc| {
                if doc.document_type == DocumentType::DischargeSummary {
                    doc.with_status(QualityStatus::Incomplete)
                } else {
                    doc
                }
            })
            .collect();

        let verdict = validate(InsurerFixtures::standard(), &documents);

        assert!(verdict.missing_documents.is_empty());
        assert_eq!(
            verdict.document_issues,
            vec!["discharge_summary.pdf - document is incomplete"]
        );
        assert_eq!(verdict.summary_note, "1 document(s) have issues.");
    }

    #[test]
    fn test_no_documents_misses_everything() {
        let verdict = validate(InsurerFixtures::standard(), &[]);

        assert_missing_exactly(&verdict, &RequiredDocument::ALL);
        assert!(verdict.document_issues.is_empty());
        assert_eq!(verdict.summary_note, "7 required document(s) missing.");
    }
}

// ============================================================================
// Lab Report Exemption Tests
// ============================================================================

mod exemption_tests {
    use super::*;

    #[test]
    fn test_basic_care_without_lab_reports_passes() {
        let documents = DocumentFixtures::complete_set_without(DocumentType::MedicalReports);
        let verdict = validate(InsurerFixtures::lab_exempt(), &documents);

        assert_not_missing(&verdict, RequiredDocument::LabDiagnosticReports);
        assert_verdict_pass(&verdict);
    }

    #[test]
    fn test_every_exempt_insurer_waives_lab_reports() {
        let documents = DocumentFixtures::complete_set_without(DocumentType::MedicalReports);

        for insurer in InsurerFixtures::all_lab_exempt() {
            assert_verdict_pass(&validate(insurer, &documents));
        }
    }

    #[test]
    fn test_exemption_requires_exact_name() {
        let documents = DocumentFixtures::complete_set_without(DocumentType::MedicalReports);

        for insurer in ["basiccare", "BASICCARE", "BasicCare Plus", " BasicCare"] {
            let verdict = validate(insurer, &documents);
            assert_missing_exactly(&verdict, &[RequiredDocument::LabDiagnosticReports]);
        }
    }

    #[test]
    fn test_standard_insurer_requires_lab_reports() {
        let documents = DocumentFixtures::complete_set_without(DocumentType::MedicalReports);
        let verdict = validate(InsurerFixtures::standard(), &documents);

        assert_missing_exactly(&verdict, &[RequiredDocument::LabDiagnosticReports]);
        assert_verdict_fail(&verdict);
    }

    #[test]
    fn test_claim_type_is_ignored() {
        let documents = DocumentFixtures::complete_set_without(DocumentType::MedicalReports);

        let cashless = DocumentValidator::validate("MinimalCover", ClaimTypeFixtures::cashless(), &documents);
        let reimbursement =
            DocumentValidator::validate("MinimalCover", ClaimTypeFixtures::reimbursement(), &documents);

        assert_eq!(cashless, reimbursement);
    }

    #[test]
    fn test_exempt_insurer_uploads_are_still_checked() {
        let mut documents = DocumentFixtures::complete_set();
        documents[6] = UploadedDocument::new("labs.pdf", DocumentType::MedicalReports)
            .with_status(QualityStatus::Unclear);

        let verdict = validate(InsurerFixtures::lab_exempt(), &documents);

        assert!(verdict.missing_documents.is_empty());
        assert_issue_for(&verdict, "labs.pdf");
    }
}

// ============================================================================
// Quality Issue Tests
// ============================================================================

mod issue_tests {
    use super::*;

    #[test]
    fn test_issue_messages_per_status() {
        let cases = [
            (None, Some("a.pdf - document status not provided")),
            (Some("UNCLEAR"), Some("a.pdf - document is unclear or illegible")),
            (Some("INCOMPLETE"), Some("a.pdf - document is incomplete")),
            (
                Some("MISMATCHED"),
                Some("a.pdf - document information does not match claim details"),
            ),
            (Some("MISSING"), Some("a.pdf - unknown issue")),
            (Some("COMPLETE"), None),
            (Some("VALID"), None),
        ];

        for (status, expected) in cases {
            let mut builder = UploadedDocumentBuilder::new().with_name("a.pdf");
            builder = match status {
                Some(status) => builder.with_status(status),
                None => builder.without_status(),
            };
            assert_eq!(builder.build().issue().as_deref(), expected, "status {:?}", status);
        }
    }

    #[test]
    fn test_issues_follow_upload_order() {
        let documents = vec![
            UploadedDocument::new("z.pdf", "OTHER").with_status("MISMATCHED"),
            UploadedDocument::new("a.pdf", DocumentType::IdProof),
            UploadedDocument::new("m.pdf", DocumentType::HospitalBill).with_status(QualityStatus::Complete),
            UploadedDocument::new("b.pdf", DocumentType::PaymentReceipt).with_status(QualityStatus::Unclear),
        ];

        let issues = DocumentValidator::document_issues(&documents);

        assert_eq!(
            issues,
            vec![
                "z.pdf - document information does not match claim details",
                "a.pdf - document status not provided",
                "b.pdf - document is unclear or illegible",
            ]
        );
    }

    #[test]
    fn test_unrecognized_documents_are_still_classified() {
        let mut documents = DocumentFixtures::complete_set();
        documents.push(UploadedDocument::new("extra.pdf", "XRAY").with_status(QualityStatus::Unclear));

        let verdict = validate(InsurerFixtures::standard(), &documents);

        assert!(verdict.missing_documents.is_empty());
        assert_eq!(verdict.document_issues, vec!["extra.pdf - document is unclear or illegible"]);
        assert_verdict_fail(&verdict);
    }

    #[test]
    fn test_empty_name_degrades_gracefully() {
        let verdict = validate(InsurerFixtures::standard(), &[UploadedDocument::new("", "ID_PROOF")]);
        assert_eq!(verdict.document_issues, vec![" - document status not provided"]);
    }
}

// ============================================================================
// End-to-End Verdict Tests
// ============================================================================

mod verdict_tests {
    use super::*;

    #[test]
    fn test_star_health_example() {
        let verdict = validate_claim_documents(
            "Star Health",
            "Cashless Hospitalization",
            &DocumentFixtures::star_health_example(),
        );

        assert_eq!(
            verdict.missing_labels(),
            vec![
                "Doctor's Admission Notes",
                "Discharge Summary",
                "Final Hospital Bill with Breakup",
                "Payment Receipts",
                "Lab/Diagnostic Reports",
            ]
        );
        assert_eq!(verdict.document_issues, vec!["ins.pdf - document is unclear or illegible"]);
        assert_eq!(verdict.overall_status, OverallStatus::Fail);
        assert_eq!(
            verdict.summary_note,
            "5 required document(s) missing and 1 document(s) have issues."
        );
    }

    #[test]
    fn test_validation_is_idempotent() {
        let documents = DocumentFixtures::star_health_example();

        let first = serde_json::to_vec(&validate(InsurerFixtures::standard(), &documents)).unwrap();
        let second = serde_json::to_vec(&validate(InsurerFixtures::standard(), &documents)).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn test_input_is_not_modified() {
        let documents = DocumentFixtures::star_health_example();
        let before = documents.clone();

        let _ = validate(InsurerFixtures::standard(), &documents);

        assert_eq!(documents, before);
    }

    #[test]
    fn test_verdict_serialization_shape() {
        let verdict = validate(InsurerFixtures::standard(), &DocumentFixtures::complete_set());
        let json = serde_json::to_value(&verdict).unwrap();

        assert_eq!(json["overall_status"], "PASS");
        assert_eq!(json["missing_documents"], serde_json::json!([]));
        assert_eq!(json["summary_note"], "All required documents are present and valid.");
    }
}
