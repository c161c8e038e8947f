use async_trait::async_trait;
use reqwest::{Method, StatusCode};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use credgen_core::paths::{CREDENTIALS, DEBUG_DECRYPT, REQUESTS};
use credgen_core::{
    ActionReceipt, ConsoleError, ConsoleResult, CreateOutcome, CredentialRequest,
    CredentialService, NewCredential, RevealedSecret,
};

use super::types::ErrorBody;
use crate::modules::system::{normalize_base_url, ServiceConfig};

/// Credential service reached over HTTP. The base address comes from the
/// injected [`ServiceConfig`] and changes only through [`Self::set_base_url`].
pub struct HttpCredentialService {
    client: reqwest::Client,
    config: ServiceConfig,
}

impl HttpCredentialService {
    pub fn new(config: ServiceConfig) -> anyhow::Result<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        Ok(Self {
            client: builder.build()?,
            config,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    pub fn set_base_url(&mut self, addr: &str) {
        self.config.base_url = normalize_base_url(addr);
        if !self.config.base_url.starts_with("http://")
            && !self.config.base_url.starts_with("https://")
        {
            warn!(addr = %self.config.base_url, "service address has no http(s) scheme");
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.config.base_url.trim_end_matches('/'), path)
    }

    fn id_url(&self, prefix: &str, id: &str, suffix: &str) -> String {
        self.url(&format!("{prefix}/{}{suffix}", urlencoding::encode(id)))
    }

    async fn send(
        &self,
        method: Method,
        url: &str,
        payload: Option<&NewCredential>,
    ) -> ConsoleResult<reqwest::Response> {
        let builder = self.client.request(method.clone(), url);
        let builder = match payload {
            Some(payload) => builder.json(payload),
            None => builder,
        };
        debug!(method = %method, url = %url, "http request");
        let start = std::time::Instant::now();
        let response = builder
            .send()
            .await
            .map_err(|err| ConsoleError::TransportFailure(err.to_string()))?;
        debug!(
            method = %method,
            url = %url,
            status = %response.status(),
            elapsed_ms = start.elapsed().as_millis(),
            "http response"
        );
        Ok(response)
    }
}

/// Reads a failure reply: the `detail` field when the body carries one, the
/// raw text otherwise, the status line when the body is empty.
pub(crate) async fn failure_detail(
    response: reqwest::Response,
) -> ConsoleResult<(StatusCode, String)> {
    let status = response.status();
    let body = response.text().await.map_err(|err| {
        debug!(status = %status, error = %err, "failed to read failure body");
        ConsoleError::TransportFailure(err.to_string())
    })?;
    let detail = match serde_json::from_str::<ErrorBody>(&body) {
        Ok(ErrorBody {
            detail: Some(detail),
        }) => detail.into_text(),
        _ if body.trim().is_empty() => status.to_string(),
        _ => body,
    };
    Ok((status, detail))
}

async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> ConsoleResult<T> {
    let body = response
        .text()
        .await
        .map_err(|err| ConsoleError::TransportFailure(err.to_string()))?;
    serde_json::from_str(&body).map_err(|err| ConsoleError::MalformedResponse(err.to_string()))
}

async fn decode_opaque(response: reqwest::Response) -> ConsoleResult<ActionReceipt> {
    let body = response
        .text()
        .await
        .map_err(|err| ConsoleError::TransportFailure(err.to_string()))?;
    let value = serde_json::from_str(&body).unwrap_or(serde_json::Value::String(body));
    Ok(ActionReceipt(value))
}

fn service_rejected(status: StatusCode, detail: String) -> ConsoleError {
    ConsoleError::ServiceRejected {
        status: status.as_u16(),
        detail,
    }
}

fn not_found(id: &str, detail: String) -> ConsoleError {
    ConsoleError::IdentifierUnknown {
        id: id.to_string(),
        detail: Some(detail),
    }
}

#[async_trait]
impl CredentialService for HttpCredentialService {
    async fn create_request(&self, request: &NewCredential) -> ConsoleResult<CreateOutcome> {
        let url = self.url(CREDENTIALS);
        let response = self.send(Method::POST, &url, Some(request)).await?;
        if !response.status().is_success() {
            let (status, detail) = failure_detail(response).await?;
            return Err(ConsoleError::PolicyRejected {
                status: status.as_u16(),
                detail,
            });
        }
        decode(response).await
    }

    async fn list_all(&self) -> ConsoleResult<Vec<CredentialRequest>> {
        let url = self.url(CREDENTIALS);
        let response = self.send(Method::GET, &url, None).await?;
        if !response.status().is_success() {
            let (status, detail) = failure_detail(response).await?;
            return Err(service_rejected(status, detail));
        }
        decode(response).await
    }

    async fn approve(&self, id: &str) -> ConsoleResult<ActionReceipt> {
        let url = self.id_url(REQUESTS, id, "/approve");
        let response = self.send(Method::POST, &url, None).await?;
        if !response.status().is_success() {
            let (status, detail) = failure_detail(response).await?;
            return Err(match status {
                StatusCode::NOT_FOUND => not_found(id, detail),
                StatusCode::BAD_REQUEST | StatusCode::CONFLICT => ConsoleError::AlreadyResolved {
                    id: id.to_string(),
                    detail,
                },
                status => service_rejected(status, detail),
            });
        }
        decode_opaque(response).await
    }

    async fn revoke(&self, id: &str) -> ConsoleResult<ActionReceipt> {
        let url = self.id_url(CREDENTIALS, id, "/revoke");
        let response = self.send(Method::POST, &url, None).await?;
        if !response.status().is_success() {
            let (status, detail) = failure_detail(response).await?;
            return Err(match status {
                StatusCode::NOT_FOUND => not_found(id, detail),
                status => service_rejected(status, detail),
            });
        }
        decode_opaque(response).await
    }

    async fn reveal_secret(&self, id: &str) -> ConsoleResult<RevealedSecret> {
        let url = self.id_url(DEBUG_DECRYPT, id, "");
        let response = self.send(Method::GET, &url, None).await?;
        if !response.status().is_success() {
            let (status, detail) = failure_detail(response).await?;
            return Err(match status {
                StatusCode::NOT_FOUND => not_found(id, detail),
                status => service_rejected(status, detail),
            });
        }
        decode(response).await
    }
}
