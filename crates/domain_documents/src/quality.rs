//! Per-document quality status

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Usability flag attached to an uploaded document
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum QualityStatus {
    /// Verified and usable
    Valid,
    /// All pages present and legible
    Complete,
    /// Scan is unclear or illegible
    Unclear,
    /// Pages or fields are missing
    Incomplete,
    /// Contents do not match the claim
    Mismatched,
    /// Any other status text
    Unrecognized(String),
}

impl QualityStatus {
    /// Parses a wire status code. Matching is exact and case-sensitive.
    pub fn parse(code: &str) -> Self {
        match code {
            "VALID" => QualityStatus::Valid,
            "COMPLETE" => QualityStatus::Complete,
            "UNCLEAR" => QualityStatus::Unclear,
            "INCOMPLETE" => QualityStatus::Incomplete,
            "MISMATCHED" => QualityStatus::Mismatched,
            other => QualityStatus::Unrecognized(other.to_string()),
        }
    }

    /// Returns the wire status code
    pub fn code(&self) -> &str {
        match self {
            QualityStatus::Valid => "VALID",
            QualityStatus::Complete => "COMPLETE",
            QualityStatus::Unclear => "UNCLEAR",
            QualityStatus::Incomplete => "INCOMPLETE",
            QualityStatus::Mismatched => "MISMATCHED",
            QualityStatus::Unrecognized(code) => code,
        }
    }

    /// Describes the defect, or `None` when the document is usable
    pub fn issue_description(&self) -> Option<&'static str> {
        match self {
            QualityStatus::Valid | QualityStatus::Complete => None,
            QualityStatus::Unclear => Some("document is unclear or illegible"),
            QualityStatus::Incomplete => Some("document is incomplete"),
            QualityStatus::Mismatched => Some("document information does not match claim details"),
            QualityStatus::Unrecognized(_) => Some("unknown issue"),
        }
    }

    /// Returns true for `VALID` and `COMPLETE`
    pub fn is_acceptable(&self) -> bool {
        self.issue_description().is_none()
    }
}

impl From<&str> for QualityStatus {
    fn from(code: &str) -> Self {
        QualityStatus::parse(code)
    }
}

impl fmt::Display for QualityStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl Serialize for QualityStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.code())
    }
}

impl<'de> Deserialize<'de> for QualityStatus {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let code = String::deserialize(deserializer)?;
        Ok(QualityStatus::parse(&code))
    }
}
