use serde::{Deserialize, Serialize};

/// Status of a credential as observed through the listing endpoint.
///
/// The service owns the state machine: `pending -> active -> revoked`, with
/// `revoked` terminal. Values the console does not know are kept verbatim so
/// they can be reported instead of being misread.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum CredentialStatus {
    Pending,
    Active,
    Revoked,
    Unknown(String),
}

impl CredentialStatus {
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Pending => "pending",
            Self::Active => "active",
            Self::Revoked => "revoked",
            Self::Unknown(value) => value.as_str(),
        }
    }

    #[cfg(test)]
    pub(crate) const fn is_terminal(&self) -> bool {
        matches!(self, Self::Revoked)
    }

    /// Rank along the lifecycle; `None` for statuses outside it.
    #[cfg(test)]
    const fn rank(&self) -> Option<u8> {
        match self {
            Self::Pending => Some(0),
            Self::Active => Some(1),
            Self::Revoked => Some(2),
            Self::Unknown(_) => None,
        }
    }

    /// Whether a later observation of `next` is consistent with having
    /// observed `self` first. Observations may skip states (a request can be
    /// approved and revoked between two listings) but never move backwards.
    #[cfg(test)]
    pub(crate) fn permits(&self, next: &Self) -> bool {
        match (self.rank(), next.rank()) {
            (Some(from), Some(to)) => to >= from,
            _ => false,
        }
    }
}

impl From<String> for CredentialStatus {
    fn from(value: String) -> Self {
        match value.as_str() {
            "pending" => Self::Pending,
            "active" => Self::Active,
            "revoked" => Self::Revoked,
            _ => Self::Unknown(value),
        }
    }
}

impl From<&str> for CredentialStatus {
    fn from(value: &str) -> Self {
        Self::from(value.to_string())
    }
}

impl From<CredentialStatus> for String {
    fn from(value: CredentialStatus) -> Self {
        match value {
            CredentialStatus::Unknown(value) => value,
            other => other.as_str().to_string(),
        }
    }
}

impl std::fmt::Display for CredentialStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
