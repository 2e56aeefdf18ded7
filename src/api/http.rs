//! HTTP implementation of `BudgetApi`
//!
//! Uses reqwest's blocking client: every operation is one request that runs
//! to completion before the caller continues.

use reqwest::blocking::{multipart, Client, Response};
use serde::de::DeserializeOwned;

use super::{detail_from_body, BudgetApi, Health, Reply, UploadFile};
use crate::config::Settings;
use crate::error::{ClientError, ClientResult};
use crate::models::{Budget, BudgetPayload, Receipt};

/// Client for a receipts/budgets server
#[derive(Debug, Clone)]
pub struct HttpApi {
    client: Client,
    base_url: String,
}

impl HttpApi {
    /// Build a client from settings
    ///
    /// No timeout is applied unless `request_timeout_secs` is set.
    pub fn new(settings: &Settings) -> ClientResult<Self> {
        let client = Client::builder()
            .timeout(settings.request_timeout())
            .user_agent(concat!("receiptbook/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| ClientError::Config(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: settings.api_url.trim_end_matches('/').to_string(),
        })
    }

    /// Base URL requests are sent to
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn get_json<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        tracing::debug!(path, "GET");
        let response = ensure_success(self.client.get(self.url(path)).send()?)?;
        Ok(response.json()?)
    }
}

/// Turn a non-2xx response into `ClientError::Status`
fn ensure_success(response: Response) -> ClientResult<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().unwrap_or_default();
    Err(ClientError::Status {
        status: status.as_u16(),
        detail: detail_from_body(&body),
    })
}

fn into_reply(response: Response) -> ClientResult<Reply> {
    let status = response.status().as_u16();
    let body = response.text()?;
    Ok(Reply::new(status, body))
}

impl BudgetApi for HttpApi {
    fn list_receipts(&self) -> ClientResult<Vec<Receipt>> {
        self.get_json("/receipts")
    }

    fn list_budgets(&self) -> ClientResult<Vec<Budget>> {
        self.get_json("/budgets")
    }

    fn upload_receipt(&self, file: &UploadFile) -> ClientResult<Reply> {
        tracing::debug!(file = %file.file_name, size = file.bytes.len(), "POST /receipts");
        let part = multipart::Part::bytes(file.bytes.clone())
            .file_name(file.file_name.clone())
            .mime_str(file.mime_type)?;
        let form = multipart::Form::new().part("file", part);

        let response = self
            .client
            .post(self.url("/receipts"))
            .multipart(form)
            .send()?;
        into_reply(response)
    }

    fn submit_budget(&self, payload: &BudgetPayload) -> ClientResult<Reply> {
        tracing::debug!(category = %payload.category, "POST /budgets");
        let response = self
            .client
            .post(self.url("/budgets"))
            .json(payload)
            .send()?;
        into_reply(response)
    }

    fn get_receipt(&self, id: i64) -> ClientResult<Receipt> {
        self.get_json(&format!("/receipts/{}", id))
            .map_err(|e| match e {
                ClientError::Status { status: 404, .. } => ClientError::receipt_not_found(id.to_string()),
                other => other,
            })
    }

    fn export_csv(&self) -> ClientResult<String> {
        tracing::debug!("GET /export");
        let response = ensure_success(self.client.get(self.url("/export")).send()?)?;
        Ok(response.text()?)
    }

    fn health(&self) -> ClientResult<Health> {
        self.get_json("/health")
    }
}
