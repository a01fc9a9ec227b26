//! Claim checklist and packet DTOs
//!
//! Stored documents cross the API in camelCase; the domain records keep
//! their storage field names.

use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use domain_documents::{ChecklistDocument, ChecklistEntry, InsurerPacket, PacketEntry, StoredDocument};

/// Body of `POST /claims/checklist` and `POST /claims/packet`
#[derive(Debug, Deserialize, Validate)]
pub struct ClaimDocumentsRequest {
    #[serde(default)]
    #[validate(length(min = 1))]
    pub insurer: String,
    #[serde(default)]
    pub documents: Vec<StoredDocumentBody>,
}

impl ClaimDocumentsRequest {
    pub fn stored_documents(&self) -> Vec<StoredDocument> {
        self.documents.iter().cloned().map(StoredDocument::from).collect()
    }
}

/// A stored claim document on the wire
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredDocumentBody {
    pub id: Uuid,
    pub document_type: String,
    pub file_name: String,
    pub file_path: String,
}

impl From<StoredDocument> for StoredDocumentBody {
    fn from(doc: StoredDocument) -> Self {
        Self {
            id: doc.id,
            document_type: doc.document_type,
            file_name: doc.file_name,
            file_path: doc.file_path,
        }
    }
}

impl From<StoredDocumentBody> for StoredDocument {
    fn from(body: StoredDocumentBody) -> Self {
        Self {
            id: body.id,
            document_type: body.document_type,
            file_name: body.file_name,
            file_path: body.file_path,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChecklistResponse {
    pub insurer: String,
    pub required_documents: Vec<ChecklistDocument>,
    pub checklist: Vec<ChecklistItem>,
}

#[derive(Debug, Serialize)]
pub struct ChecklistItem {
    #[serde(rename = "type")]
    pub document_type: ChecklistDocument,
    pub label: String,
    pub uploaded: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub document: Option<StoredDocumentBody>,
}

impl From<ChecklistEntry> for ChecklistItem {
    fn from(entry: ChecklistEntry) -> Self {
        Self {
            document_type: entry.document,
            label: entry.label,
            uploaded: entry.uploaded,
            document: entry.stored.map(StoredDocumentBody::from),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PacketDocument {
    pub document_type: String,
    pub file_name: String,
    pub file_path: String,
}

impl From<PacketEntry> for PacketDocument {
    fn from(entry: PacketEntry) -> Self {
        Self {
            document_type: entry.document_type,
            file_name: entry.file_name,
            file_path: entry.file_path,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct PacketResponse {
    pub insurer: String,
    pub documents: Vec<PacketDocument>,
}

impl From<InsurerPacket> for PacketResponse {
    fn from(packet: InsurerPacket) -> Self {
        Self {
            insurer: packet.insurer,
            documents: packet.entries.into_iter().map(PacketDocument::from).collect(),
        }
    }
}
