//! In-memory credential service used by the unit tests. It enforces the same
//! lifecycle rules as the remote service and records every call it receives.

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::json;

use crate::errors::{ConsoleError, ConsoleResult};
use crate::models::{
    ActionReceipt, CreateOutcome, CredentialRequest, CredentialStatus, NewCredential,
    RevealedSecret,
};
use crate::services::CredentialService;

const MIN_LENGTH: f64 = 32.0;
const APPROVAL_LENGTH: usize = 40;

struct Record {
    id: String,
    principal: String,
    status: CredentialStatus,
    secret: Option<String>,
}

#[derive(Default)]
struct FakeState {
    records: Vec<Record>,
    next_ids: VecDeque<String>,
    generated: usize,
    calls: Vec<String>,
    offline: bool,
}

pub(crate) struct FakeService {
    max_active_per_principal: usize,
    state: Mutex<FakeState>,
}

impl FakeService {
    pub(crate) fn new(max_active_per_principal: usize) -> Self {
        Self {
            max_active_per_principal,
            state: Mutex::new(FakeState::default()),
        }
    }

    pub(crate) fn with_next_ids(self, ids: &[&str]) -> Self {
        self.lock()
            .next_ids
            .extend(ids.iter().map(|id| id.to_string()));
        self
    }

    pub(crate) fn seed(&self, id: &str, principal: &str, status: CredentialStatus) {
        let secret = (status != CredentialStatus::Pending).then(|| make_secret(id, APPROVAL_LENGTH));
        self.lock().records.push(Record {
            id: id.to_string(),
            principal: principal.to_string(),
            status,
            secret,
        });
    }

    pub(crate) fn go_offline(&self) {
        self.lock().offline = true;
    }

    pub(crate) fn calls(&self) -> Vec<String> {
        self.lock().calls.clone()
    }

    pub(crate) fn clear_calls(&self) {
        self.lock().calls.clear();
    }

    pub(crate) fn status_of(&self, id: &str) -> Option<CredentialStatus> {
        self.lock()
            .records
            .iter()
            .find(|record| record.id == id)
            .map(|record| record.status.clone())
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, FakeState> {
        self.state.lock().expect("fake service state")
    }

    fn enter(&self, call: String) -> ConsoleResult<std::sync::MutexGuard<'_, FakeState>> {
        let mut state = self.lock();
        if state.offline {
            return Err(ConsoleError::TransportFailure(
                "connection refused".to_string(),
            ));
        }
        state.calls.push(call);
        Ok(state)
    }
}

fn make_secret(seed: &str, length: usize) -> String {
    seed.chars()
        .chain("0123456789abcdefghijklmnopqrstuvwxyz".chars())
        .cycle()
        .take(length)
        .collect()
}

fn needs_approval(scopes: &[String]) -> bool {
    scopes
        .iter()
        .any(|scope| scope == "admin" || scope.starts_with("write:"))
}

#[async_trait]
impl CredentialService for FakeService {
    async fn create_request(&self, request: &NewCredential) -> ConsoleResult<CreateOutcome> {
        let mut state = self.enter("create".to_string())?;
        if request.principal.is_empty() {
            return Err(ConsoleError::PolicyRejected {
                status: 400,
                detail: "principal_required".to_string(),
            });
        }
        let length = request.length.value();
        if !length.is_finite() || length < MIN_LENGTH {
            return Err(ConsoleError::PolicyRejected {
                status: 400,
                detail: "length_too_short".to_string(),
            });
        }
        state.generated += 1;
        let generated = state.generated;
        let id = state
            .next_ids
            .pop_front()
            .unwrap_or_else(|| format!("cred-{generated}"));
        let active = state
            .records
            .iter()
            .filter(|record| {
                record.principal == request.principal && record.status == CredentialStatus::Active
            })
            .count();
        if active >= self.max_active_per_principal || needs_approval(&request.scopes) {
            state.records.push(Record {
                id: id.clone(),
                principal: request.principal.clone(),
                status: CredentialStatus::Pending,
                secret: None,
            });
            return Ok(CreateOutcome::Pending {
                request_id: id,
                reason: None,
            });
        }
        let secret = make_secret(&id, length as usize);
        state.records.push(Record {
            id: id.clone(),
            principal: request.principal.clone(),
            status: CredentialStatus::Active,
            secret: Some(secret.clone()),
        });
        Ok(CreateOutcome::Issued {
            secret,
            credential_id: Some(id),
            expires_at: None,
        })
    }

    async fn list_all(&self) -> ConsoleResult<Vec<CredentialRequest>> {
        let state = self.enter("list".to_string())?;
        Ok(state
            .records
            .iter()
            .map(|record| CredentialRequest {
                id: record.id.clone(),
                principal: record.principal.clone(),
                status: record.status.clone(),
                kind: Some("api_key".to_string()),
                scopes: None,
                created_at: None,
                expires_at: None,
            })
            .collect())
    }

    async fn approve(&self, id: &str) -> ConsoleResult<ActionReceipt> {
        let mut state = self.enter(format!("approve:{id}"))?;
        let record = state
            .records
            .iter_mut()
            .find(|record| record.id == id)
            .ok_or_else(|| ConsoleError::IdentifierUnknown {
                id: id.to_string(),
                detail: Some("not_found".to_string()),
            })?;
        if record.status != CredentialStatus::Pending {
            return Err(ConsoleError::AlreadyResolved {
                id: id.to_string(),
                detail: "not_pending".to_string(),
            });
        }
        let secret = make_secret(id, APPROVAL_LENGTH);
        record.status = CredentialStatus::Active;
        record.secret = Some(secret.clone());
        Ok(ActionReceipt(json!({
            "status": "issued",
            "credential_id": id,
            "secret": secret,
        })))
    }

    async fn revoke(&self, id: &str) -> ConsoleResult<ActionReceipt> {
        let mut state = self.enter(format!("revoke:{id}"))?;
        let record = state
            .records
            .iter_mut()
            .find(|record| record.id == id)
            .ok_or_else(|| ConsoleError::IdentifierUnknown {
                id: id.to_string(),
                detail: Some("not_found".to_string()),
            })?;
        record.status = CredentialStatus::Revoked;
        Ok(ActionReceipt(json!({
            "status": "revoked",
            "credential_id": id,
        })))
    }

    async fn reveal_secret(&self, id: &str) -> ConsoleResult<RevealedSecret> {
        let state = self.enter(format!("reveal:{id}"))?;
        state
            .records
            .iter()
            .find(|record| record.id == id)
            .and_then(|record| record.secret.clone())
            .map(|secret| RevealedSecret {
                secret_plaintext: secret,
                credential_id: Some(id.to_string()),
            })
            .ok_or_else(|| ConsoleError::IdentifierUnknown {
                id: id.to_string(),
                detail: Some("not_found_or_no_secret".to_string()),
            })
    }
}
