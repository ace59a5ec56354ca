//! Directory API client
//!
//! One operation: `GET <base-url>/employees?search=<query>`. Retries and
//! cancellation belong to the caller.

use crate::config::normalize_base_url;
use crate::employee::Employee;
use crate::error::SearchError;
use crate::{EmpDirError, Result};
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT};
use serde::Deserialize;

/// FastAPI error body: `{"detail": "..."}`. Validation errors carry a list.
#[derive(Deserialize)]
struct ErrorBody {
    detail: serde_json::Value,
}

/// HTTP client for the employee search endpoint
#[derive(Debug, Clone)]
pub struct EmployeeApi {
    http: reqwest::Client,
    base_url: String,
}

impl EmployeeApi {
    /// Create a client for `base_url`.
    pub fn new(base_url: &str) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let http = reqwest::Client::builder()
            .user_agent(concat!("empdir/", env!("CARGO_PKG_VERSION")))
            .default_headers(headers)
            .build()
            .map_err(EmpDirError::HttpClient)?;

        Ok(Self {
            http,
            base_url: normalize_base_url(base_url)?,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Full request URL for `query`, percent-encoded
    pub fn search_url(&self, query: &str) -> String {
        format!(
            "{}/employees?search={}",
            self.base_url,
            urlencoding::encode(query)
        )
    }

    /// Search the directory for `query`.
    ///
    /// # Errors
    ///
    /// [`SearchError::NetworkFailure`] when the request cannot complete,
    /// [`SearchError::BadResponse`] on a non-success status and
    /// [`SearchError::DecodeFailure`] when the body is not a list of employees.
    pub async fn search(&self, query: &str) -> std::result::Result<Vec<Employee>, SearchError> {
        let url = self.search_url(query);
        tracing::debug!(%url, "sending search request");

        let resp = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(SearchError::NetworkFailure)?;

        let status = resp.status();
        let body = resp.text().await.map_err(SearchError::NetworkFailure)?;

        if !status.is_success() {
            return Err(SearchError::BadResponse {
                status: status.as_u16(),
                message: error_detail(&body),
            });
        }

        let employees: Vec<Employee> =
            serde_json::from_str(&body).map_err(SearchError::DecodeFailure)?;
        tracing::debug!(query, count = employees.len(), "search response decoded");
        Ok(employees)
    }
}

/// Best-effort human message from an error body
fn error_detail(body: &str) -> String {
    match serde_json::from_str::<ErrorBody>(body) {
        Ok(ErrorBody {
            detail: serde_json::Value::String(detail),
        }) => detail,
        Ok(ErrorBody { detail }) => detail.to_string(),
        Err(_) => body.trim().chars().take(200).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn search_url_encodes_reserved_characters() {
        let api = EmployeeApi::new("http://localhost:8000/").unwrap();
        assert_eq!(
            api.search_url("R&D #1 50%"),
            "http://localhost:8000/employees?search=R%26D%20%231%2050%25"
        );
    }

    #[test]
    fn search_url_round_trips() {
        let api = EmployeeApi::new("http://localhost:8000").unwrap();
        for query in ["ali", "a b", "x&y=z", "#tag", "a+b", "über/café?", "100%"] {
            let url = api.search_url(query);
            let encoded = url.split_once("?search=").unwrap().1;
            assert!(!encoded.contains(['&', '#', ' ', '?', '/']));
            assert_eq!(urlencoding::decode(encoded).unwrap(), query);
        }
    }

    #[test]
    fn error_detail_prefers_fastapi_detail() {
        assert_eq!(
            error_detail(r#"{"detail":"Internal server error"}"#),
            "Internal server error"
        );
        assert_eq!(error_detail("<html>oops</html>\n"), "<html>oops</html>");
        assert!(error_detail(r#"{"detail":[{"msg":"too short"}]}"#).contains("too short"));
    }

    #[test]
    fn rejects_invalid_base_url() {
        assert!(EmployeeApi::new("nope").is_err());
    }
}
