use async_trait::async_trait;

use crate::errors::ConsoleResult;
use crate::models::{ActionReceipt, CreateOutcome, CredentialRequest, NewCredential, RevealedSecret};

/// The remote credential service. Each method is exactly one request and
/// response; implementations do not retry.
#[async_trait]
pub trait CredentialService: Send + Sync {
    /// `POST /credentials`. A non-success reply is `PolicyRejected`.
    async fn create_request(&self, request: &NewCredential) -> ConsoleResult<CreateOutcome>;

    /// `GET /credentials`. Never carries secrets.
    async fn list_all(&self) -> ConsoleResult<Vec<CredentialRequest>>;

    /// `POST /requests/{id}/approve`.
    async fn approve(&self, id: &str) -> ConsoleResult<ActionReceipt>;

    /// `POST /credentials/{id}/revoke`.
    async fn revoke(&self, id: &str) -> ConsoleResult<ActionReceipt>;

    /// `GET /_debug/decrypt/{id}`. Returns the plaintext for any id that has a
    /// secret, whatever its status.
    async fn reveal_secret(&self, id: &str) -> ConsoleResult<RevealedSecret>;
}
