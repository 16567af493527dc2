//! Typed client over the three service endpoints.
//!
//! Each call is a single request/response with no retry or streaming; failures
//! surface once with the upstream `{error, details}` message when the body
//! carries one.

use anyhow::{bail, Context, Result};
use serde::Deserialize;
use std::path::Path;

use coverwise_core::{ApplicantProfile, RecommendationResponse, TransactionAnalysis};

pub const DEFAULT_BASE_URL: &str = "http://localhost:8080";

/// Error body the services return on non-2xx responses.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: String,
    #[serde(default)]
    details: Option<String>,
}

#[derive(Debug, Clone)]
pub struct ApiClient {
    base_url: String,
    http: reqwest::Client,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            http: reqwest::Client::new(),
        }
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Upload a transaction CSV to the analyze service and decode the result.
    pub async fn analyze_csv(&self, path: &Path) -> Result<TransactionAnalysis> {
        let bytes = tokio::fs::read(path)
            .await
            .with_context(|| format!("read {}", path.display()))?;
        let file_name = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("transactions.csv")
            .to_string();

        log::info!("uploading {} ({} bytes) for analysis", file_name, bytes.len());

        let part = reqwest::multipart::Part::bytes(bytes)
            .file_name(file_name)
            .mime_str("text/csv")?;
        let form = reqwest::multipart::Form::new().part("file", part);

        let resp = self
            .http
            .post(self.endpoint("/api/insurance/analyze"))
            .multipart(form)
            .send()
            .await
            .context("analyze request")?;
        Self::json_or_error(resp, "analyze").await
    }

    /// Post a questionnaire and get ranked plan recommendations.
    pub async fn recommend(&self, profile: &ApplicantProfile) -> Result<RecommendationResponse> {
        let resp = self
            .http
            .post(self.endpoint("/api/recommend"))
            .json(profile)
            .send()
            .await
            .context("recommend request")?;
        Self::json_or_error(resp, "recommend").await
    }

    /// Post recommendations for comparison; the service replies with raw JSON text.
    pub async fn compare(&self, plans: &RecommendationResponse) -> Result<String> {
        let resp = self
            .http
            .post(self.endpoint("/api/gemini/compare"))
            .json(plans)
            .send()
            .await
            .context("compare request")?;
        let resp = Self::check(resp, "compare").await?;
        resp.text().await.context("compare response body")
    }

    async fn json_or_error<T: serde::de::DeserializeOwned>(
        resp: reqwest::Response,
        what: &str,
    ) -> Result<T> {
        let resp = Self::check(resp, what).await?;
        resp.json::<T>()
            .await
            .with_context(|| format!("decode {what} response"))
    }

    async fn check(resp: reqwest::Response, what: &str) -> Result<reqwest::Response> {
        let status = resp.status();
        if status.is_success() {
            return Ok(resp);
        }
        let body = resp.text().await.unwrap_or_default();
        if let Ok(err) = serde_json::from_str::<ErrorBody>(&body) {
            match err.details {
                Some(details) => bail!("{what} failed ({status}): {}: {details}", err.error),
                None => bail!("{what} failed ({status}): {}", err.error),
            }
        }
        bail!("{what} failed ({status}): {body}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trailing_slash_is_trimmed() {
        let client = ApiClient::new("http://localhost:8080/");
        assert_eq!(
            client.endpoint("/api/recommend"),
            "http://localhost:8080/api/recommend"
        );
    }

    #[test]
    fn test_error_body_tolerates_missing_details() {
        let err: ErrorBody = serde_json::from_str(r#"{"error":"Analysis failed"}"#).unwrap();
        assert_eq!(err.error, "Analysis failed");
        assert!(err.details.is_none());
    }
}
