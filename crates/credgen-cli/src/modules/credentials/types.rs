use serde::Deserialize;

/// Failure body. Most endpoints send `{"detail": "..."}`; request validation
/// failures send a structured list instead.
#[derive(Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub detail: Option<ErrorDetail>,
}

#[derive(Deserialize)]
#[serde(untagged)]
pub enum ErrorDetail {
    Text(String),
    Structured(serde_json::Value),
}

impl ErrorDetail {
    pub fn into_text(self) -> String {
        match self {
            Self::Text(text) => text,
            Self::Structured(value) => value.to_string(),
        }
    }
}
