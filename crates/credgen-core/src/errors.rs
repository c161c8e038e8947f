/// Failures a console command can end with. None of them is recovered from
/// locally; each is reported to the operator and the command stops.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConsoleError {
    /// The service declined to create a credential (quota, validation).
    PolicyRejected { status: u16, detail: String },
    /// The identifier is not known to the service.
    IdentifierUnknown { id: String, detail: Option<String> },
    /// Approve was called on a request that is no longer pending.
    AlreadyResolved { id: String, detail: String },
    /// Any other non-success reply.
    ServiceRejected { status: u16, detail: String },
    /// No response was obtained.
    TransportFailure(String),
    /// A success reply whose body could not be decoded.
    MalformedResponse(String),
}

impl ConsoleError {
    #[must_use]
    pub fn identifier_unknown(id: impl Into<String>) -> Self {
        Self::IdentifierUnknown {
            id: id.into(),
            detail: None,
        }
    }

    #[must_use]
    pub const fn as_code(&self) -> &'static str {
        match self {
            Self::PolicyRejected { .. } => "policy_rejected",
            Self::IdentifierUnknown { .. } => "identifier_unknown",
            Self::AlreadyResolved { .. } => "already_resolved",
            Self::ServiceRejected { .. } => "service_rejected",
            Self::TransportFailure(_) => "transport_failure",
            Self::MalformedResponse(_) => "malformed_response",
        }
    }

    /// The text shown to the operator after "Error: ". Service-reported
    /// details are passed through verbatim.
    #[must_use]
    pub fn detail(&self) -> &str {
        match self {
            Self::PolicyRejected { detail, .. }
            | Self::AlreadyResolved { detail, .. }
            | Self::ServiceRejected { detail, .. } => detail.as_str(),
            Self::IdentifierUnknown { detail, .. } => detail.as_deref().unwrap_or("not_found"),
            Self::TransportFailure(message) | Self::MalformedResponse(message) => message.as_str(),
        }
    }

    /// True when no structured response was obtained at all.
    #[must_use]
    pub const fn is_transport(&self) -> bool {
        matches!(self, Self::TransportFailure(_))
    }
}

impl std::fmt::Display for ConsoleError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::PolicyRejected { status, detail } => {
                write!(f, "request rejected by policy ({status}): {detail}")
            }
            Self::IdentifierUnknown { id, .. } => write!(f, "identifier not found: {id}"),
            Self::AlreadyResolved { id, detail } => {
                write!(f, "request {id} already resolved: {detail}")
            }
            Self::ServiceRejected { status, detail } => {
                write!(f, "service rejected request ({status}): {detail}")
            }
            Self::TransportFailure(message) => write!(f, "failed to connect: {message}"),
            Self::MalformedResponse(message) => write!(f, "malformed response: {message}"),
        }
    }
}

impl std::error::Error for ConsoleError {}

pub type ConsoleResult<T> = Result<T, ConsoleError>;
