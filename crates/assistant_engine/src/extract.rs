use std::time::Duration;

use assistant_logging::assistant_debug;
use serde::{Deserialize, Serialize};

use crate::{ExtractError, FailureKind, RequestId};

/// Fixed relative path of the extraction endpoint.
const KEYWORD_PATH: &str = "/api/keyword";

#[derive(Debug, Clone)]
pub struct ClientSettings {
    pub base_url: String,
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:3000".to_string(),
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(30),
        }
    }
}

/// Wire body of one extraction request; `text` carries the query verbatim.
#[derive(Debug, Serialize)]
struct KeywordRequest<'a> {
    text: &'a str,
}

#[derive(Debug, Deserialize)]
struct KeywordResponse {
    keywords: Vec<String>,
}

#[async_trait::async_trait]
pub trait KeywordExtractor: Send + Sync {
    async fn extract(&self, request_id: RequestId, text: &str)
        -> Result<Vec<String>, ExtractError>;
}

pub struct HttpKeywordExtractor {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpKeywordExtractor {
    pub fn new(settings: ClientSettings) -> Result<Self, ExtractError> {
        let client = reqwest::Client::builder()
            .connect_timeout(settings.connect_timeout)
            .timeout(settings.request_timeout)
            .build()
            .map_err(|err| ExtractError::new(FailureKind::Network, err.to_string()))?;
        let endpoint = format!(
            "{}{}",
            settings.base_url.trim_end_matches('/'),
            KEYWORD_PATH
        );
        Ok(Self { client, endpoint })
    }
}

#[async_trait::async_trait]
impl KeywordExtractor for HttpKeywordExtractor {
    async fn extract(
        &self,
        request_id: RequestId,
        text: &str,
    ) -> Result<Vec<String>, ExtractError> {
        assistant_debug!("extract request_id={} text_len={}", request_id, text.len());

        let response = self
            .client
            .post(&self.endpoint)
            .json(&KeywordRequest { text })
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(ExtractError::new(
                FailureKind::HttpStatus(status.as_u16()),
                status.to_string(),
            ));
        }

        let body: KeywordResponse = response.json().await.map_err(|err| {
            if err.is_timeout() {
                ExtractError::new(FailureKind::Timeout, err.to_string())
            } else {
                // Anything the contract cannot decode counts as malformed,
                // including a missing or mistyped `keywords` field.
                ExtractError::new(FailureKind::MalformedResponse, err.to_string())
            }
        })?;

        Ok(body.keywords)
    }
}

fn map_reqwest_error(err: reqwest::Error) -> ExtractError {
    if err.is_timeout() {
        return ExtractError::new(FailureKind::Timeout, err.to_string());
    }
    ExtractError::new(FailureKind::Network, err.to_string())
}
