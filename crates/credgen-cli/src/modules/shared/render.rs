use chrono::Utc;
use serde_json::json;

use credgen_core::{
    CommandKind, ConsoleError, CreateOutcome, CredentialRequest, Outcome, StatusOutcome,
};

use super::format_list_table;
use crate::modules::system::OutputMode;

/// A command outcome ready for printing.
pub(crate) struct Rendered {
    pub body: String,
    pub failed: bool,
}

pub(crate) fn render_outcome(outcome: &Outcome, mode: OutputMode) -> Rendered {
    let body = match mode {
        OutputMode::Text => render_text(outcome),
        OutputMode::Json => pretty(&render_json(outcome)),
    };
    Rendered {
        body,
        failed: outcome.is_failure(),
    }
}

/// Bare JSON array for `list --format json`.
pub(crate) fn render_listing_json(items: &[CredentialRequest]) -> Rendered {
    Rendered {
        body: pretty(&json!(items)),
        failed: false,
    }
}

fn pretty(value: &serde_json::Value) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
}

pub(crate) fn render_text(outcome: &Outcome) -> String {
    match outcome {
        Outcome::Created(CreateOutcome::Issued { secret, .. }) => {
            format!("Success! Here is your new API secret:\n{secret}")
        }
        Outcome::Created(CreateOutcome::Pending { request_id, .. }) => format!(
            "Approval required. Copy this request ID to check your status later:\n{request_id}"
        ),
        Outcome::Status(StatusOutcome::AwaitingApproval) => {
            "Status: pending\nPlease ask an admin to approve this request.".to_string()
        }
        Outcome::Status(StatusOutcome::Disabled) => {
            "Status: revoked\nThis key has been disabled.".to_string()
        }
        Outcome::Status(StatusOutcome::Ready { secret }) => {
            format!("Approved! Here is your API key:\n{secret}")
        }
        Outcome::Status(StatusOutcome::UnrecognizedStatus { status }) => {
            format!("Status: {status}")
        }
        Outcome::Listing(items) => format_list_table(items, Utc::now()),
        Outcome::Approved(_) => "Approved! Key generated.".to_string(),
        Outcome::Revoked(_) => "Credential revoked.".to_string(),
        Outcome::Revealed(revealed) => format!("Secret: {}", revealed.secret_plaintext),
        Outcome::Failed { command, error } => render_failure(*command, error),
    }
}

fn render_failure(command: CommandKind, error: &ConsoleError) -> String {
    match (command, error) {
        // Only a failed listing lookup means the id is missing; a 404 from the
        // reveal call carries the service's own detail.
        (CommandKind::CheckStatus, ConsoleError::IdentifierUnknown { detail: None, .. }) => {
            "ID not found in system.".to_string()
        }
        (_, ConsoleError::TransportFailure(message)) => format!("Failed to connect: {message}"),
        (_, error) => format!("Error: {}", error.detail()),
    }
}

pub(crate) fn render_json(outcome: &Outcome) -> serde_json::Value {
    match outcome {
        Outcome::Created(result) => json!({ "outcome": "created", "result": result }),
        Outcome::Status(result) => json!({ "outcome": "status", "result": result }),
        Outcome::Listing(items) => json!({ "outcome": "listing", "result": items }),
        Outcome::Approved(receipt) => json!({ "outcome": "approved", "result": receipt }),
        Outcome::Revoked(receipt) => json!({ "outcome": "revoked", "result": receipt }),
        Outcome::Revealed(revealed) => json!({ "outcome": "revealed", "result": revealed }),
        Outcome::Failed { command, error } => json!({
            "outcome": "failed",
            "command": command.as_str(),
            "error": error.as_code(),
            "detail": error.detail(),
        }),
    }
}
