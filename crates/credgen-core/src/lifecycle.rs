//! Status resolution for a request identifier.
//!
//! The console keeps no memory of requests between invocations. Every check
//! starts from the service's listing, decides from the observed status
//! whether a secret can be surfaced, and only then asks for it:
//!
//! ```text
//! [pending] --approve--> [active] --revoke--> [revoked]
//! [created, policy allows] ----> [active]  (reported as "issued")
//! ```

use serde::Serialize;
use tracing::info;

use crate::errors::ConsoleResult;
use crate::lookup::find_by_id;
use crate::models::CredentialStatus;
use crate::services::CredentialService;

/// What a status check tells the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum StatusOutcome {
    AwaitingApproval,
    Disabled,
    Ready { secret: String },
    UnrecognizedStatus { status: String },
}

/// The follow-up a listed status calls for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FollowUp {
    /// The status alone answers the check.
    Settled(StatusOutcome),
    /// The credential is active; its secret must be fetched.
    Reveal,
}

#[must_use]
pub fn follow_up(status: &CredentialStatus) -> FollowUp {
    match status {
        CredentialStatus::Pending => FollowUp::Settled(StatusOutcome::AwaitingApproval),
        CredentialStatus::Revoked => FollowUp::Settled(StatusOutcome::Disabled),
        CredentialStatus::Active => FollowUp::Reveal,
        CredentialStatus::Unknown(status) => {
            FollowUp::Settled(StatusOutcome::UnrecognizedStatus {
                status: status.clone(),
            })
        }
    }
}

/// Resolves `id` to a caller-visible outcome.
///
/// Issues the listing call, and a reveal call only after the listing shows
/// the credential as `active`. The listing never carries secrets, so the two
/// calls cannot be merged. Nothing is retried.
pub async fn check_status<S>(service: &S, id: &str) -> ConsoleResult<StatusOutcome>
where
    S: CredentialService + ?Sized,
{
    let collection = service.list_all().await?;
    let credential = find_by_id(&collection, id)?;
    info!(id = %id, status = %credential.status, "credential status resolved");
    match follow_up(&credential.status) {
        FollowUp::Settled(outcome) => Ok(outcome),
        FollowUp::Reveal => {
            let revealed = service.reveal_secret(id).await?;
            Ok(StatusOutcome::Ready {
                secret: revealed.secret_plaintext,
            })
        }
    }
}
