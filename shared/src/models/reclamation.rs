//! Reclamation (customer complaint) Model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use super::UnknownVariant;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum ReclamationStatus {
    #[default]
    Open,
    InProgress,
    Resolved,
    Rejected,
}

impl ReclamationStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Open => "open",
            Self::InProgress => "in_progress",
            Self::Resolved => "resolved",
            Self::Rejected => "rejected",
        }
    }

    /// Resolved and rejected reclamations accept no further responses
    pub fn is_closed(&self) -> bool {
        matches!(self, Self::Resolved | Self::Rejected)
    }
}

impl FromStr for ReclamationStatus {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "open" => Ok(Self::Open),
            "in_progress" | "in-progress" => Ok(Self::InProgress),
            "resolved" => Ok(Self::Resolved),
            "rejected" => Ok(Self::Rejected),
            _ => Err(UnknownVariant {
                kind: "reclamation status",
                value: s.to_string(),
            }),
        }
    }
}

/// Reclamation entity
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reclamation {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    /// Order reference (String ID)
    #[serde(default)]
    pub order: Option<String>,
    pub subject: String,
    pub description: String,
    pub status: ReclamationStatus,
    /// Admin reply
    #[serde(default)]
    pub response: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// Reclamation list payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReclamationList {
    pub reclamations: Vec<Reclamation>,
}

/// Create reclamation payload
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReclamationCreate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_id: Option<String>,
    pub subject: String,
    pub description: String,
}

/// Admin reply payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReclamationReply {
    pub status: ReclamationStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response: Option<String>,
}
