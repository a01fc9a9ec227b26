//! Test Data Builders
//!
//! Provides builder patterns for constructing documents and HTTP request
//! bodies with sensible defaults. Tests specify only the fields they care
//! about.

use domain_documents::{QualityStatus, StoredDocument, UploadedDocument};
use serde_json::{json, Value};
use uuid::Uuid;

use crate::fixtures::{ClaimTypeFixtures, InsurerFixtures, StoredDocumentFixtures};

/// Builder for uploaded documents
pub struct UploadedDocumentBuilder {
    name: String,
    document_type: String,
    status: Option<String>,
}

impl Default for UploadedDocumentBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl UploadedDocumentBuilder {
    /// Creates a COMPLETE ID proof named `id.pdf`
    pub fn new() -> Self {
        Self {
            name: "id.pdf".to_string(),
            document_type: "ID_PROOF".to_string(),
            status: Some("COMPLETE".to_string()),
        }
    }

    /// Sets the file name
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the wire type code
    pub fn with_type(mut self, document_type: impl Into<String>) -> Self {
        self.document_type = document_type.into();
        self
    }

    /// Sets the wire status code
    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }

    /// Clears the status
    pub fn without_status(mut self) -> Self {
        self.status = None;
        self
    }

    /// Builds the domain document
    pub fn build(self) -> UploadedDocument {
        let document = UploadedDocument::new(self.name, self.document_type.as_str());
        match self.status {
            Some(status) => document.with_status(QualityStatus::parse(&status)),
            None => document,
        }
    }

    /// Builds the JSON request element
    pub fn build_json(self) -> Value {
        let mut value = json!({
            "name": self.name,
            "type": self.document_type,
        });
        if let Some(status) = self.status {
            value["status"] = Value::String(status);
        }
        value
    }
}

/// Builder for stored claim documents
pub struct StoredDocumentBuilder {
    id: Uuid,
    document_type: String,
    file_name: String,
    file_path: Option<String>,
}

impl Default for StoredDocumentBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl StoredDocumentBuilder {
    /// Creates a stored `id_proof` document
    pub fn new() -> Self {
        Self {
            id: StoredDocumentFixtures::document_id(0),
            document_type: "id_proof".to_string(),
            file_name: "id_proof.pdf".to_string(),
            file_path: None,
        }
    }

    /// Sets the document ID
    pub fn with_id(mut self, id: Uuid) -> Self {
        self.id = id;
        self
    }

    /// Sets the stored type code
    pub fn with_type(mut self, document_type: impl Into<String>) -> Self {
        self.document_type = document_type.into();
        self
    }

    /// Sets the file name
    pub fn with_file_name(mut self, file_name: impl Into<String>) -> Self {
        self.file_name = file_name.into();
        self
    }

    /// Sets the storage key
    pub fn with_file_path(mut self, file_path: impl Into<String>) -> Self {
        self.file_path = Some(file_path.into());
        self
    }

    /// Builds the stored document; the storage key defaults to `documents/<file name>`
    pub fn build(self) -> StoredDocument {
        let file_path = self
            .file_path
            .unwrap_or_else(|| format!("documents/{}", self.file_name));
        StoredDocument {
            id: self.id,
            document_type: self.document_type,
            file_name: self.file_name,
            file_path,
        }
    }
}

/// Builder for `POST /validation/validate` request bodies
pub struct ValidationRequestBuilder {
    insurer_name: String,
    claim_type: String,
    documents: Vec<Value>,
}

impl Default for ValidationRequestBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ValidationRequestBuilder {
    /// Creates a standard-insurer cashless request with no documents
    pub fn new() -> Self {
        Self {
            insurer_name: InsurerFixtures::standard().to_string(),
            claim_type: ClaimTypeFixtures::cashless().to_string(),
            documents: Vec::new(),
        }
    }

    /// Sets the insurer name
    pub fn with_insurer(mut self, insurer_name: impl Into<String>) -> Self {
        self.insurer_name = insurer_name.into();
        self
    }

    /// Sets the claim type
    pub fn with_claim_type(mut self, claim_type: impl Into<String>) -> Self {
        self.claim_type = claim_type.into();
        self
    }

    /// Adds a document
    pub fn add_document(mut self, document: UploadedDocumentBuilder) -> Self {
        self.documents.push(document.build_json());
        self
    }

    /// Builds the JSON body
    pub fn build(self) -> Value {
        json!({
            "insurerName": self.insurer_name,
            "claimType": self.claim_type,
            "uploadedDocuments": self.documents,
        })
    }
}
