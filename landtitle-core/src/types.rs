//! Domain types for the land-title ledger.
//!
//! [`LandTitle`] is the only persisted entity. Its serialized field names
//! (`ID`, `Owner`, ...) are part of the storage format and must not change.

use std::fmt;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Newtypes
// ---------------------------------------------------------------------------

/// Unique key of a land title; immutable after creation.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TitleId(pub String);

impl TitleId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TitleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<String> for TitleId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for TitleId {
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}

/// Organization (MSP) identifier. Compared by exact, case-sensitive equality.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrgId(pub String);

impl OrgId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for OrgId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<String> for OrgId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for OrgId {
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}

// ---------------------------------------------------------------------------
// Records
// ---------------------------------------------------------------------------

/// A land title as stored in the ledger.
///
/// `organization` gates write access; `owner` is descriptive only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LandTitle {
    #[serde(rename = "ID")]
    pub id: TitleId,
    #[serde(rename = "Owner")]
    pub owner: String,
    #[serde(rename = "PropertyDescription")]
    pub property_description: String,
    #[serde(rename = "PropertyValue")]
    pub property_value: f64,
    /// Content identifier of the off-ledger supporting document.
    #[serde(rename = "DocumentHash")]
    pub document_hash: String,
    /// Caller-supplied record time; stored verbatim.
    #[serde(rename = "Timestamp")]
    pub timestamp: String,
    #[serde(rename = "Organization")]
    pub organization: OrgId,
}

/// Caller-supplied fields for a new title. The authorizing organization is
/// never part of the draft; it comes from the caller's credential.
#[derive(Debug, Clone, PartialEq)]
pub struct TitleDraft {
    pub id: TitleId,
    pub owner: String,
    pub property_description: String,
    pub property_value: f64,
    pub timestamp: String,
    pub document_hash: String,
}

impl TitleDraft {
    /// Binds the draft to the organization that creates it.
    pub fn into_title(self, organization: OrgId) -> LandTitle {
        LandTitle {
            id: self.id,
            owner: self.owner,
            property_description: self.property_description,
            property_value: self.property_value,
            document_hash: self.document_hash,
            timestamp: self.timestamp,
            organization,
        }
    }
}

/// Records written by [`crate::TitleRegistry::init_ledger`].
pub fn seed_titles() -> Vec<LandTitle> {
    vec![
        LandTitle {
            id: TitleId::from("1"),
            owner: "Alice".to_string(),
            property_description: "Villa bord de mer".to_string(),
            property_value: 500_000.0,
            document_hash: "Qm123".to_string(),
            timestamp: "2025-02-21".to_string(),
            organization: OrgId::from("Org1MSP"),
        },
        LandTitle {
            id: TitleId::from("2"),
            owner: "Bob".to_string(),
            property_description: "Appartement centre-ville".to_string(),
            property_value: 250_000.0,
            document_hash: "Qm456".to_string(),
            timestamp: "2025-02-21".to_string(),
            organization: OrgId::from("Org2MSP"),
        },
    ]
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
