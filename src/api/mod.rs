//! API access layer
//!
//! `BudgetApi` is the seam between the controller and the HTTP server.
//! `HttpApi` talks to a real server; tests use an in-memory fake.

pub mod http;
pub mod upload;

#[cfg(test)]
pub mod fake;

use serde::Deserialize;

use crate::error::ClientResult;
use crate::models::{Budget, BudgetPayload, Receipt};

pub use http::HttpApi;
pub use upload::UploadFile;

/// Raw answer to a request whose body the caller interprets itself
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    /// HTTP status code
    pub status: u16,
    /// Response body as text
    pub body: String,
}

impl Reply {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// True for 2xx statuses
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// The `detail` field of a JSON error body, if any
    pub fn detail(&self) -> Option<String> {
        detail_from_body(&self.body)
    }
}

#[derive(Deserialize)]
struct ErrorBody {
    detail: serde_json::Value,
}

/// Extract a non-empty string `detail` field from an error body
pub fn detail_from_body(body: &str) -> Option<String> {
    let parsed: ErrorBody = serde_json::from_str(body).ok()?;
    match parsed.detail {
        serde_json::Value::String(s) if !s.is_empty() => Some(s),
        _ => None,
    }
}

/// Health check answer
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Health {
    pub status: String,
}

impl Health {
    pub fn is_ok(&self) -> bool {
        self.status == "ok"
    }
}

/// Operations offered by the receipts/budgets API
pub trait BudgetApi {
    /// `GET /receipts`
    fn list_receipts(&self) -> ClientResult<Vec<Receipt>>;

    /// `GET /budgets`
    fn list_budgets(&self) -> ClientResult<Vec<Budget>>;

    /// `POST /receipts` as multipart with a `file` field
    ///
    /// `Err` means the request never completed; any HTTP answer, success or
    /// not, comes back as a `Reply`.
    fn upload_receipt(&self, file: &UploadFile) -> ClientResult<Reply>;

    /// `POST /budgets` with a JSON body; same error convention as uploads
    fn submit_budget(&self, payload: &BudgetPayload) -> ClientResult<Reply>;

    /// `GET /receipts/{id}`
    fn get_receipt(&self, id: i64) -> ClientResult<Receipt>;

    /// `GET /export`, CSV text
    fn export_csv(&self) -> ClientResult<String>;

    /// `GET /health`
    fn health(&self) -> ClientResult<Health>;
}
