//! Console command dispatch. Every command maps its form inputs to a single
//! coordinator or client call and returns the outcome for rendering; nothing
//! chains into a follow-up command.

use tracing::debug;

use crate::errors::ConsoleError;
use crate::input::CreateForm;
use crate::lifecycle::{check_status, StatusOutcome};
use crate::models::{ActionReceipt, CreateOutcome, CredentialRequest, RevealedSecret};
use crate::services::CredentialService;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConsoleCommand {
    Create(CreateForm),
    CheckStatus { id: String },
    List,
    Approve { id: String },
    Revoke { id: String },
    DebugReveal { id: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandKind {
    Create,
    CheckStatus,
    List,
    Approve,
    Revoke,
    DebugReveal,
}

impl CommandKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Create => "create",
            Self::CheckStatus => "status",
            Self::List => "list",
            Self::Approve => "approve",
            Self::Revoke => "revoke",
            Self::DebugReveal => "reveal",
        }
    }
}

impl ConsoleCommand {
    #[must_use]
    pub const fn kind(&self) -> CommandKind {
        match self {
            Self::Create(_) => CommandKind::Create,
            Self::CheckStatus { .. } => CommandKind::CheckStatus,
            Self::List => CommandKind::List,
            Self::Approve { .. } => CommandKind::Approve,
            Self::Revoke { .. } => CommandKind::Revoke,
            Self::DebugReveal { .. } => CommandKind::DebugReveal,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Created(CreateOutcome),
    Status(StatusOutcome),
    Listing(Vec<CredentialRequest>),
    Approved(ActionReceipt),
    Revoked(ActionReceipt),
    Revealed(RevealedSecret),
    Failed {
        command: CommandKind,
        error: ConsoleError,
    },
}

impl Outcome {
    #[must_use]
    pub const fn is_failure(&self) -> bool {
        matches!(self, Self::Failed { .. })
    }
}

/// Runs one command against `service`.
pub async fn dispatch<S>(command: ConsoleCommand, service: &S) -> Outcome
where
    S: CredentialService + ?Sized,
{
    let kind = command.kind();
    debug!(command = kind.as_str(), "dispatching console command");
    let result = match command {
        ConsoleCommand::Create(form) => {
            let request = form.into_request();
            service.create_request(&request).await.map(Outcome::Created)
        }
        ConsoleCommand::CheckStatus { id } => {
            check_status(service, &id).await.map(Outcome::Status)
        }
        ConsoleCommand::List => service.list_all().await.map(Outcome::Listing),
        ConsoleCommand::Approve { id } => service.approve(&id).await.map(Outcome::Approved),
        ConsoleCommand::Revoke { id } => service.revoke(&id).await.map(Outcome::Revoked),
        ConsoleCommand::DebugReveal { id } => {
            service.reveal_secret(&id).await.map(Outcome::Revealed)
        }
    };
    result.unwrap_or_else(|error| Outcome::Failed {
        command: kind,
        error,
    })
}
