//! Insurer submission packet

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::checklist::{missing_for_packet, StoredDocument};
use crate::error::DocumentError;

/// A document included in an insurer packet
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PacketEntry {
    pub document_type: String,
    pub file_name: String,
    pub file_path: String,
}

/// The set of documents sent to an insurer for a claim
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InsurerPacket {
    pub insurer: String,
    pub entries: Vec<PacketEntry>,
}

impl InsurerPacket {
    /// Assembles a packet once every checklist document is stored
    ///
    /// # Errors
    ///
    /// Returns `DocumentError::MissingRequiredDocuments` listing the missing
    /// checklist documents in checklist order.
    pub fn assemble(insurer: &str, documents: &[StoredDocument]) -> Result<Self, DocumentError> {
        let missing = missing_for_packet(insurer, documents);
        if !missing.is_empty() {
            warn!(insurer, missing = missing.len(), "Insurer packet blocked by missing documents");
            return Err(DocumentError::MissingRequiredDocuments(missing));
        }

        let entries = documents
            .iter()
            .map(|doc| PacketEntry {
                document_type: doc.document_type.clone(),
                file_name: doc.file_name.clone(),
                file_path: doc.file_path.clone(),
            })
            .collect::<Vec<_>>();

        info!(insurer, documents = entries.len(), "Insurer packet assembled");

        Ok(Self {
            insurer: insurer.to_string(),
            entries,
        })
    }
}
