//! Tests for the insurer checklist and packet assembly

use domain_documents::{
    build_checklist, is_document_required, missing_for_packet, required_documents,
    ChecklistDocument, DocumentError, InsurerPacket,
};
use test_utils::{InsurerFixtures, StoredDocumentBuilder, StoredDocumentFixtures};

// ============================================================================
// Resolver Tests
// ============================================================================

mod resolver_tests {
    use super::*;

    #[test]
    fn test_premium_insurer_gets_baseline() {
        assert_eq!(
            required_documents(InsurerFixtures::premium()),
            ChecklistDocument::BASELINE.to_vec()
        );
    }

    #[test]
    fn test_gold_insurer_gets_baseline() {
        assert_eq!(
            required_documents(InsurerFixtures::gold()),
            ChecklistDocument::BASELINE.to_vec()
        );
    }

    #[test]
    fn test_tier_match_ignores_case() {
        for insurer in ["PREMIUM", "premium", "Marigold Health", "GOLDEN Years"] {
            assert_eq!(required_documents(insurer).len(), 4, "insurer {}", insurer);
        }
    }

    #[test]
    fn test_standard_insurer_adds_medical_reports_last() {
        let documents = required_documents(InsurerFixtures::standard());

        assert_eq!(
            documents,
            vec![
                ChecklistDocument::AdmissionForm,
                ChecklistDocument::InsuranceCard,
                ChecklistDocument::IdProof,
                ChecklistDocument::DoctorPrescription,
                ChecklistDocument::MedicalReports,
            ]
        );
    }

    #[test]
    fn test_empty_insurer_falls_through_to_standard() {
        assert_eq!(required_documents("").len(), 5);
    }

    #[test]
    fn test_lab_exempt_insurer_is_not_a_checklist_tier() {
        // The validator's exemption list has no effect on the checklist
        assert_eq!(required_documents(InsurerFixtures::lab_exempt()).len(), 5);
    }

    #[test]
    fn test_checklist_codes_and_labels() {
        let cases = [
            (ChecklistDocument::AdmissionForm, "admission_form", "Hospital Admission Form"),
            (ChecklistDocument::InsuranceCard, "insurance_card", "Insurance Card"),
            (ChecklistDocument::IdProof, "id_proof", "ID Proof"),
            (ChecklistDocument::DoctorPrescription, "doctor_prescription", "Doctor Prescription"),
            (ChecklistDocument::MedicalReports, "medical_reports", "Medical Reports"),
        ];

        for (document, code, label) in cases {
            assert_eq!(document.code(), code);
            assert_eq!(document.label(), label);
            assert_eq!(ChecklistDocument::from_code(code), Some(document));
            assert_eq!(serde_json::to_string(&document).unwrap(), format!("\"{}\"", code));
        }
    }

    #[test]
    fn test_is_document_required() {
        assert!(is_document_required("medical_reports", InsurerFixtures::standard()));
        assert!(!is_document_required("medical_reports", InsurerFixtures::premium()));
        assert!(is_document_required("id_proof", InsurerFixtures::gold()));
        assert!(!is_document_required("ID_PROOF", InsurerFixtures::standard()));
        assert!(!is_document_required("discharge_summary", InsurerFixtures::standard()));
    }
}

// ============================================================================
// Checklist Tests
// ============================================================================

mod checklist_tests {
    use super::*;

    #[test]
    fn test_checklist_marks_uploaded_documents() {
        let documents = vec![
            StoredDocumentBuilder::new().with_type("insurance_card").with_file_name("card.png").build(),
            StoredDocumentBuilder::new().with_type("id_proof").build(),
        ];

        let checklist = build_checklist(InsurerFixtures::standard(), &documents);

        assert_eq!(checklist.len(), 5);
        let uploaded: Vec<bool> = checklist.iter().map(|entry| entry.uploaded).collect();
        assert_eq!(uploaded, vec![false, true, true, false, false]);
        assert_eq!(checklist[1].label, "Insurance Card");
        assert_eq!(checklist[1].stored.as_ref().unwrap().file_name, "card.png");
        assert!(checklist[0].stored.is_none());
    }

    #[test]
    fn test_checklist_uses_first_matching_document() {
        let first = StoredDocumentBuilder::new()
            .with_id(StoredDocumentFixtures::document_id(1))
            .with_file_name("first.pdf")
            .build();
        let second = StoredDocumentBuilder::new()
            .with_id(StoredDocumentFixtures::document_id(2))
            .with_file_name("second.pdf")
            .build();

        let checklist = build_checklist(InsurerFixtures::premium(), &[first.clone(), second]);

        let id_entry = checklist
            .iter()
            .find(|entry| entry.document == ChecklistDocument::IdProof)
            .unwrap();
        assert_eq!(id_entry.stored.as_ref(), Some(&first));
    }

    #[test]
    fn test_unrelated_documents_are_ignored() {
        let documents = vec![StoredDocumentBuilder::new().with_type("hospital_bill").build()];

        let checklist = build_checklist(InsurerFixtures::gold(), &documents);

        assert_eq!(checklist.len(), 4);
        assert!(checklist.iter().all(|entry| !entry.uploaded));
    }
}

// ============================================================================
// Packet Tests
// ============================================================================

mod packet_tests {
    use super::*;

    #[test]
    fn test_packet_with_full_checklist() {
        let documents = StoredDocumentFixtures::full_checklist();

        let packet = InsurerPacket::assemble(InsurerFixtures::standard(), &documents).unwrap();

        assert_eq!(packet.insurer, InsurerFixtures::standard());
        assert_eq!(packet.entries.len(), 5);
        assert_eq!(packet.entries[0].document_type, "admission_form");
        assert_eq!(packet.entries[4].file_path, "documents/medical_reports.pdf");
    }

    #[test]
    fn test_premium_packet_does_not_need_medical_reports() {
        let documents: Vec<_> = StoredDocumentFixtures::full_checklist()
            .into_iter()
            .filter(|doc| doc.document_type != "medical_reports")
            .collect();

        assert!(missing_for_packet(InsurerFixtures::premium(), &documents).is_empty());
        assert!(InsurerPacket::assemble(InsurerFixtures::premium(), &documents).is_ok());
    }

    #[test]
    fn test_packet_blocked_by_missing_documents() {
        let documents = vec![StoredDocumentBuilder::new().with_type("insurance_card").build()];

        let err = InsurerPacket::assemble(InsurerFixtures::standard(), &documents).unwrap_err();

        let DocumentError::MissingRequiredDocuments(missing) = &err;
        assert_eq!(
            missing,
            &vec![
                ChecklistDocument::AdmissionForm,
                ChecklistDocument::IdProof,
                ChecklistDocument::DoctorPrescription,
                ChecklistDocument::MedicalReports,
            ]
        );
        assert_eq!(
            err.missing_codes(),
            vec!["admission_form", "id_proof", "doctor_prescription", "medical_reports"]
        );
        assert!(err.to_string().starts_with("Cannot generate packet"));
    }

    #[test]
    fn test_packet_keeps_extra_documents_in_stored_order() {
        let mut documents = StoredDocumentFixtures::full_checklist();
        documents.insert(0, StoredDocumentBuilder::new().with_type("hospital_bill").with_file_name("bill.pdf").build());

        let packet = InsurerPacket::assemble(InsurerFixtures::standard(), &documents).unwrap();

        assert_eq!(packet.entries.len(), 6);
        assert_eq!(packet.entries[0].file_name, "bill.pdf");
    }
}
