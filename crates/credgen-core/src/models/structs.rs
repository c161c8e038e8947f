use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::enums::CredentialStatus;
use crate::input::CoercedNumber;

/// A credential as returned by the listing endpoint. The secret is never part
/// of this view; it is fetched separately through the reveal endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CredentialRequest {
    pub id: String,
    pub principal: String,
    pub status: CredentialStatus,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scopes: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<String>,
}

impl CredentialRequest {
    #[must_use]
    pub fn expires_at_utc(&self) -> Option<DateTime<Utc>> {
        self.expires_at.as_deref().and_then(parse_timestamp)
    }

    /// The service stores an expiry but does not enforce it; this only
    /// reports whether the stored instant has passed.
    #[must_use]
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        self.expires_at_utc().is_some_and(|expires| expires <= now)
    }
}

pub(crate) fn parse_timestamp(value: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(value)
        .ok()
        .map(|dt| dt.with_timezone(&Utc))
}

/// Body of `POST /credentials`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewCredential {
    pub principal: String,
    pub scopes: Vec<String>,
    pub ttl_seconds: CoercedNumber,
    pub length: CoercedNumber,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
}

/// Synchronous result of a creation request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum CreateOutcome {
    Issued {
        secret: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        credential_id: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        expires_at: Option<String>,
    },
    Pending {
        request_id: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        reason: Option<String>,
    },
}

impl CreateOutcome {
    #[must_use]
    pub const fn status(&self) -> &'static str {
        match self {
            Self::Issued { .. } => "issued",
            Self::Pending { .. } => "pending",
        }
    }
}

/// Opaque success body of approve and revoke calls.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ActionReceipt(pub serde_json::Value);

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RevealedSecret {
    pub secret_plaintext: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub credential_id: Option<String>,
}
