//! The receipts/budgets controller
//!
//! `ReceiptsBudgetsClient` owns the API handle, the two list regions, the
//! upload status indicator and the two forms. Front ends (TUI, command line)
//! only translate user actions into calls on it and draw its state.
//!
//! Each operation is a single request/response round trip followed, where
//! applicable, by a re-fetch of the affected list. Nothing is cached between
//! fetches and no request is retried.

pub mod form;
pub mod region;

use std::path::Path;

use crate::api::{BudgetApi, UploadFile};
use crate::error::{ClientError, ClientResult};
use crate::models::BudgetPayload;

pub use form::{BudgetForm, TextField, UploadForm};
pub use region::{ListRegion, Row, NO_BUDGETS, NO_RECEIPTS};

/// Status shown while an upload is in flight
pub const STATUS_UPLOADING: &str = "Uploading...";

/// Status shown after a successful upload
pub const STATUS_UPLOADED: &str = "Receipt uploaded.";

/// Status shown when the server rejects an upload without a usable detail
pub const STATUS_REJECTED: &str = "Upload failed";

/// Status shown when the upload request never completed
pub const STATUS_FAILED: &str = "Upload failed.";

/// How an upload attempt ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UploadOutcome {
    /// No file selected; nothing was sent
    Skipped,
    /// Server accepted the file
    Uploaded,
    /// Server answered with a non-2xx status; carries the shown message
    Rejected(String),
    /// The request never completed
    Failed,
}

/// How a budget submission ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BudgetSubmission {
    /// Blank category; nothing was sent
    Skipped,
    Accepted,
    Rejected { status: u16, detail: Option<String> },
    Failed(String),
}

/// An upload whose status has been set but whose request has not been sent
#[derive(Debug)]
pub struct PendingUpload {
    file: ClientResult<UploadFile>,
}

/// Controller for the receipts and budgets screen
pub struct ReceiptsBudgetsClient<A: BudgetApi> {
    api: A,
    receipts: ListRegion,
    budgets: ListRegion,
    upload_status: Option<String>,
    pub upload_form: UploadForm,
    pub budget_form: BudgetForm,
}

impl<A: BudgetApi> ReceiptsBudgetsClient<A> {
    /// Create a controller with empty regions and forms
    pub fn new(api: A) -> Self {
        Self {
            api,
            receipts: ListRegion::new(),
            budgets: ListRegion::new(),
            upload_status: None,
            upload_form: UploadForm::default(),
            budget_form: BudgetForm::default(),
        }
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    pub fn receipts(&self) -> &ListRegion {
        &self.receipts
    }

    pub fn budgets(&self) -> &ListRegion {
        &self.budgets
    }

    /// Text of the upload status indicator, if anything has been shown yet
    pub fn upload_status(&self) -> Option<&str> {
        self.upload_status.as_deref()
    }

    /// Initial load: both lists, independently
    pub fn load(&mut self) {
        let _ = self.list_receipts();
        let _ = self.list_budgets();
    }

    /// Fetch receipts and re-render the receipts region
    ///
    /// On failure the region shows a single error row and the error is
    /// returned as well.
    pub fn list_receipts(&mut self) -> ClientResult<usize> {
        match self.api.list_receipts() {
            Ok(receipts) => {
                tracing::info!(count = receipts.len(), "loaded receipts");
                self.receipts.render(&receipts, NO_RECEIPTS, Row::receipt);
                Ok(receipts.len())
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to load receipts");
                self.receipts
                    .show_error(format!("Could not load receipts: {}", e));
                Err(e)
            }
        }
    }

    /// Fetch budgets and re-render the budgets region
    pub fn list_budgets(&mut self) -> ClientResult<usize> {
        match self.api.list_budgets() {
            Ok(budgets) => {
                tracing::info!(count = budgets.len(), "loaded budgets");
                self.budgets.render(&budgets, NO_BUDGETS, Row::budget);
                Ok(budgets.len())
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to load budgets");
                self.budgets
                    .show_error(format!("Could not load budgets: {}", e));
                Err(e)
            }
        }
    }

    /// Manual refresh of the receipts list
    pub fn refresh(&mut self) -> ClientResult<usize> {
        self.list_receipts()
    }

    /// Put a path in the upload form
    pub fn select_file(&mut self, path: impl AsRef<Path>) {
        self.upload_form.pick(path.as_ref().to_path_buf());
    }

    /// Upload the selected file and report the outcome in the status indicator
    pub fn upload_receipt(&mut self) -> UploadOutcome {
        match self.begin_upload() {
            Some(pending) => self.finish_upload(pending),
            None => UploadOutcome::Skipped,
        }
    }

    /// First half of an upload: check the precondition, set "Uploading..."
    /// and read the file
    ///
    /// Returns `None`, touching nothing, when no file is selected.
    pub fn begin_upload(&mut self) -> Option<PendingUpload> {
        let path = match self.upload_form.selected_file() {
            Some(path) => path,
            None => {
                tracing::debug!("upload skipped: no file selected");
                return None;
            }
        };

        self.upload_status = Some(STATUS_UPLOADING.to_string());
        Some(PendingUpload {
            file: UploadFile::read(&path),
        })
    }

    /// Second half of an upload: send the request and apply the outcome
    pub fn finish_upload(&mut self, pending: PendingUpload) -> UploadOutcome {
        let file = match pending.file {
            Ok(file) => file,
            Err(e) => {
                tracing::warn!(error = %e, "could not read receipt file");
                self.upload_status = Some(STATUS_FAILED.to_string());
                return UploadOutcome::Failed;
            }
        };

        match self.api.upload_receipt(&file) {
            Ok(reply) if reply.is_success() => {
                tracing::info!(file = %file.file_name, "receipt uploaded");
                self.upload_status = Some(STATUS_UPLOADED.to_string());
                self.upload_form.reset();
                let _ = self.list_receipts();
                UploadOutcome::Uploaded
            }
            Ok(reply) => {
                let message = reply
                    .detail()
                    .unwrap_or_else(|| STATUS_REJECTED.to_string());
                tracing::warn!(status = reply.status, %message, "receipt upload rejected");
                self.upload_status = Some(message.clone());
                UploadOutcome::Rejected(message)
            }
            Err(e) => {
                tracing::error!(error = %e, "receipt upload failed");
                self.upload_status = Some(STATUS_FAILED.to_string());
                UploadOutcome::Failed
            }
        }
    }

    /// Fill the budget form in one go
    pub fn fill_budget_form(&mut self, category: &str, monthly_limit: &str, spent: &str) {
        self.budget_form.category.set(category);
        self.budget_form.monthly_limit.set(monthly_limit);
        self.budget_form.spent.set(spent);
    }

    /// Submit the budget form
    ///
    /// A blank category is a no-op. Once the server has answered, whatever
    /// the status, the form is cleared and the budgets list re-fetched. A
    /// request that never completed leaves both untouched.
    pub fn submit_budget(&mut self) -> BudgetSubmission {
        let payload = match BudgetPayload::from_form(
            self.budget_form.category.value(),
            self.budget_form.monthly_limit.value(),
            self.budget_form.spent.value(),
        ) {
            Some(payload) => payload,
            None => {
                tracing::debug!("budget submission skipped: blank category");
                return BudgetSubmission::Skipped;
            }
        };

        let outcome = match self.api.submit_budget(&payload) {
            Ok(reply) if reply.is_success() => {
                tracing::info!(category = %payload.category, "budget saved");
                BudgetSubmission::Accepted
            }
            Ok(reply) => {
                let detail = reply.detail();
                tracing::warn!(
                    category = %payload.category,
                    status = reply.status,
                    detail = detail.as_deref().unwrap_or(""),
                    "budget rejected"
                );
                BudgetSubmission::Rejected {
                    status: reply.status,
                    detail,
                }
            }
            Err(e) => {
                // No response at all: keep what was typed and leave the list alone
                tracing::error!(category = %payload.category, error = %e, "budget submission failed");
                return BudgetSubmission::Failed(e.to_string());
            }
        };

        self.budget_form.reset();
        let _ = self.list_budgets();
        outcome
    }
}

impl BudgetSubmission {
    /// Convert a non-accepted submission into an error
    pub fn into_result(self) -> ClientResult<()> {
        match self {
            Self::Accepted => Ok(()),
            Self::Skipped => Err(ClientError::Validation("Category is required".into())),
            Self::Rejected { status, detail } => Err(ClientError::Status { status, detail }),
            Self::Failed(reason) => Err(ClientError::Http(reason)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::fake::{Call, FakeApi};
    use crate::api::Reply;
    use crate::models::{Amount, Budget, Receipt};
    use tempfile::TempDir;

    fn receipt(vendor: Option<&str>, total: Option<f64>, date: Option<&str>) -> Receipt {
        Receipt {
            vendor: vendor.map(String::from),
            total: total.map(Amount::new),
            date: date.map(String::from),
            ..Default::default()
        }
    }

    fn budget(category: &str, limit: f64, spent: f64) -> Budget {
        Budget {
            id: None,
            category: category.into(),
            monthly_limit: Amount::new(limit),
            spent: Amount::new(spent),
            prior_balance: None,
        }
    }

    fn image_file(dir: &TempDir) -> String {
        let path = dir.path().join("receipt.png");
        std::fs::write(&path, b"png-bytes").unwrap();
        path.to_string_lossy().into_owned()
    }

    #[test]
    fn test_empty_receipts_render_placeholder() {
        let mut client = ReceiptsBudgetsClient::new(FakeApi::new().with_receipts(vec![]));

        assert_eq!(client.list_receipts().unwrap(), 0);
        assert_eq!(
            client.receipts().rows(),
            &[Row::Placeholder(NO_RECEIPTS.into())]
        );
        assert_eq!(client.receipts().entry_count(), 0);
    }

    #[test]
    fn test_receipt_row_contents() {
        let api = FakeApi::new().with_receipts(vec![receipt(
            Some("Acme"),
            Some(12.5),
            Some("2024-01-01"),
        )]);
        let mut client = ReceiptsBudgetsClient::new(api);
        client.list_receipts().unwrap();

        let rows = client.receipts().rows();
        assert_eq!(rows.len(), 1);
        let text = rows[0].text();
        assert!(text.contains("Acme"));
        assert!(text.contains("12.5"));
        assert!(text.contains("2024-01-01"));
    }

    #[test]
    fn test_receipt_defaults() {
        let api = FakeApi::new().with_receipts(vec![receipt(None, None, None)]);
        let mut client = ReceiptsBudgetsClient::new(api);
        client.list_receipts().unwrap();

        assert_eq!(client.receipts().rows(), &[Row::entry("Unknown — 0", "")]);
    }

    #[test]
    fn test_receipts_keep_api_order() {
        let api = FakeApi::new().with_receipts(vec![
            receipt(Some("Zed"), Some(1.0), None),
            receipt(Some("Alpha"), Some(2.0), None),
        ]);
        let mut client = ReceiptsBudgetsClient::new(api);
        client.list_receipts().unwrap();

        let labels: Vec<String> = client.receipts().rows().iter().map(Row::text).collect();
        assert_eq!(labels, vec!["Zed — 1", "Alpha — 2"]);
    }

    #[test]
    fn test_each_render_replaces_previous_output() {
        let api = FakeApi::new()
            .with_receipts(vec![receipt(Some("A"), None, None), receipt(Some("B"), None, None)])
            .with_receipts(vec![receipt(Some("C"), None, None)]);
        let mut client = ReceiptsBudgetsClient::new(api);

        client.list_receipts().unwrap();
        client.refresh().unwrap();
        assert_eq!(client.receipts().rows(), &[Row::entry("C — 0", "")]);
    }

    #[test]
    fn test_list_failure_shows_error_row() {
        let api = FakeApi::new().with_receipts_error(ClientError::Http("connection refused".into()));
        let mut client = ReceiptsBudgetsClient::new(api);

        assert!(client.list_receipts().is_err());
        assert!(client.receipts().has_error());
        assert_eq!(client.receipts().rows().len(), 1);
        assert!(client.receipts().rows()[0]
            .text()
            .starts_with("Could not load receipts:"));
    }

    #[test]
    fn test_budgets_render() {
        let api = FakeApi::new().with_budgets(vec![budget("Food", 200.0, 50.0)]);
        let mut client = ReceiptsBudgetsClient::new(api);
        client.list_budgets().unwrap();

        assert_eq!(client.budgets().rows(), &[Row::entry("Food", "50 / 200")]);
    }

    #[test]
    fn test_empty_budgets_render_placeholder() {
        let mut client = ReceiptsBudgetsClient::new(FakeApi::new());
        client.list_budgets().unwrap();
        assert_eq!(client.budgets().rows(), &[Row::Placeholder(NO_BUDGETS.into())]);
    }

    #[test]
    fn test_load_fetches_both_lists_even_if_one_fails() {
        let api = FakeApi::new()
            .with_receipts_error(ClientError::Http("down".into()))
            .with_budgets(vec![budget("Rent", 1000.0, 0.0)]);
        let mut client = ReceiptsBudgetsClient::new(api);
        client.load();

        assert_eq!(client.api().calls(), vec![Call::ListReceipts, Call::ListBudgets]);
        assert!(client.receipts().has_error());
        assert_eq!(client.budgets().entry_count(), 1);
    }

    #[test]
    fn test_submit_budget_blank_category_is_noop() {
        let mut client = ReceiptsBudgetsClient::new(FakeApi::new());
        client.fill_budget_form("", "10", "5");

        assert_eq!(client.submit_budget(), BudgetSubmission::Skipped);
        assert!(client.api().calls().is_empty());
        // form left as typed
        assert_eq!(client.budget_form.monthly_limit.value(), "10");
    }

    #[test]
    fn test_submit_budget_posts_then_refreshes_and_clears() {
        let api = FakeApi::new().with_budgets(vec![budget("Food", 200.0, 50.0)]);
        let mut client = ReceiptsBudgetsClient::new(api);
        client.fill_budget_form("Food", "200", "50");

        assert_eq!(client.submit_budget(), BudgetSubmission::Accepted);

        let calls = client.api().calls();
        assert_eq!(calls.len(), 2);
        match &calls[0] {
            Call::SubmitBudget(payload) => {
                assert_eq!(
                    serde_json::to_value(payload).unwrap(),
                    serde_json::json!({"category": "Food", "monthly_limit": 200, "spent": 50})
                );
            }
            other => panic!("expected budget POST first, got {:?}", other),
        }
        assert_eq!(calls[1], Call::ListBudgets);
        assert_eq!(client.api().count(|c| matches!(c, Call::SubmitBudget(_))), 1);
        assert!(client.budget_form.is_empty());
        assert_eq!(client.budgets().entry_count(), 1);
    }

    #[test]
    fn test_submit_budget_rejected_still_clears_and_refreshes() {
        let api = FakeApi::new().with_submit_reply(Ok(Reply::new(
            400,
            r#"{"detail":"Category is required"}"#,
        )));
        let mut client = ReceiptsBudgetsClient::new(api);
        client.fill_budget_form("Travel", "abc", "");

        let outcome = client.submit_budget();
        assert_eq!(
            outcome,
            BudgetSubmission::Rejected {
                status: 400,
                detail: Some("Category is required".into())
            }
        );
        assert!(client.budget_form.is_empty());
        assert_eq!(client.api().count(|c| *c == Call::ListBudgets), 1);
        assert_eq!(client.upload_status(), None);
    }

    #[test]
    fn test_submit_budget_network_failure_keeps_form() {
        let api = FakeApi::new().with_submit_reply(Err(ClientError::Http("refused".into())));
        let mut client = ReceiptsBudgetsClient::new(api);
        client.fill_budget_form("Travel", "500", "125");

        assert_eq!(
            client.submit_budget(),
            BudgetSubmission::Failed("HTTP request failed: refused".into())
        );
        assert_eq!(client.budget_form.category.value(), "Travel");
        assert_eq!(client.budget_form.monthly_limit.value(), "500");
        assert_eq!(client.budget_form.spent.value(), "125");
        assert_eq!(client.api().count(|c| *c == Call::ListBudgets), 0);
    }

    #[test]
    fn test_submit_budget_sends_nan_for_unparseable_numbers() {
        let mut client = ReceiptsBudgetsClient::new(FakeApi::new());
        client.fill_budget_form("Gifts", "lots", "12abc");
        client.submit_budget();

        match &client.api().calls()[0] {
            Call::SubmitBudget(payload) => {
                assert!(payload.monthly_limit.is_nan());
                assert_eq!(payload.spent.value(), 12.0);
            }
            other => panic!("unexpected call {:?}", other),
        }
    }

    #[test]
    fn test_upload_without_file_is_noop() {
        let mut client = ReceiptsBudgetsClient::new(FakeApi::new());

        assert_eq!(client.upload_receipt(), UploadOutcome::Skipped);
        assert!(client.api().calls().is_empty());
        assert_eq!(client.upload_status(), None);
    }

    #[test]
    fn test_upload_without_file_keeps_previous_status() {
        let dir = TempDir::new().unwrap();
        let mut client = ReceiptsBudgetsClient::new(FakeApi::new());
        client.select_file(image_file(&dir));
        client.upload_receipt();
        let calls_before = client.api().calls().len();

        assert_eq!(client.upload_receipt(), UploadOutcome::Skipped);
        assert_eq!(client.upload_status(), Some(STATUS_UPLOADED));
        assert_eq!(client.api().calls().len(), calls_before);
    }

    #[test]
    fn test_begin_upload_sets_uploading_status() {
        let dir = TempDir::new().unwrap();
        let mut client = ReceiptsBudgetsClient::new(FakeApi::new());
        client.select_file(image_file(&dir));

        let pending = client.begin_upload().unwrap();
        assert_eq!(client.upload_status(), Some(STATUS_UPLOADING));
        assert!(client.api().calls().is_empty());

        client.finish_upload(pending);
        assert_eq!(client.upload_status(), Some(STATUS_UPLOADED));
    }

    #[test]
    fn test_successful_upload_clears_file_and_refreshes() {
        let dir = TempDir::new().unwrap();
        let api = FakeApi::new()
            .with_upload_reply(Ok(Reply::new(200, r#"{"id":1}"#)))
            .with_receipts(vec![receipt(Some("Acme"), Some(3.0), None)]);
        let mut client = ReceiptsBudgetsClient::new(api);
        client.select_file(image_file(&dir));

        assert_eq!(client.upload_receipt(), UploadOutcome::Uploaded);
        assert_eq!(client.upload_status(), Some("Receipt uploaded."));
        assert_eq!(client.upload_form.selected_path(), None);

        let calls = client.api().calls();
        match &calls[0] {
            Call::Upload(file) => {
                assert_eq!(file.file_name, "receipt.png");
                assert_eq!(file.mime_type, "image/png");
                assert_eq!(file.bytes, b"png-bytes");
            }
            other => panic!("expected upload first, got {:?}", other),
        }
        assert_eq!(calls[1], Call::ListReceipts);
        assert_eq!(client.receipts().entry_count(), 1);
    }

    #[test]
    fn test_rejected_upload_shows_server_detail() {
        let dir = TempDir::new().unwrap();
        let api = FakeApi::new().with_upload_reply(Ok(Reply::new(400, r#"{"detail":"too large"}"#)));
        let mut client = ReceiptsBudgetsClient::new(api);
        client.select_file(image_file(&dir));

        assert_eq!(
            client.upload_receipt(),
            UploadOutcome::Rejected("too large".into())
        );
        assert_eq!(client.upload_status(), Some("too large"));
        assert_eq!(client.api().count(|c| *c == Call::ListReceipts), 0);
        // file stays selected so the user can retry
        assert!(client.upload_form.selected_path().is_some());
    }

    #[test]
    fn test_rejected_upload_with_unparseable_body_falls_back() {
        let dir = TempDir::new().unwrap();
        let api = FakeApi::new().with_upload_reply(Ok(Reply::new(400, "<html>bad</html>")));
        let mut client = ReceiptsBudgetsClient::new(api);
        client.select_file(image_file(&dir));

        client.upload_receipt();
        assert_eq!(client.upload_status(), Some("Upload failed"));
    }

    #[test]
    fn test_network_failure_during_upload() {
        let dir = TempDir::new().unwrap();
        let api = FakeApi::new().with_upload_reply(Err(ClientError::Http("connection reset".into())));
        let mut client = ReceiptsBudgetsClient::new(api);
        client.select_file(image_file(&dir));

        assert_eq!(client.upload_receipt(), UploadOutcome::Failed);
        assert_eq!(client.upload_status(), Some("Upload failed."));
        assert_eq!(client.api().count(|c| *c == Call::ListReceipts), 0);
    }

    #[test]
    fn test_unreadable_file_fails_without_request() {
        let dir = TempDir::new().unwrap();
        let mut client = ReceiptsBudgetsClient::new(FakeApi::new());
        client.select_file(dir.path().join("missing.png"));

        assert_eq!(client.upload_receipt(), UploadOutcome::Failed);
        assert_eq!(client.upload_status(), Some(STATUS_FAILED));
        assert!(client.api().calls().is_empty());
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn test_upload_non_utf8_file_name() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let dir = TempDir::new().unwrap();
        let path = dir.path().join(OsStr::from_bytes(b"scan\xff.png"));
        std::fs::write(&path, b"png-bytes").unwrap();

        let mut client = ReceiptsBudgetsClient::new(FakeApi::new());
        client.select_file(&path);

        assert_eq!(client.upload_receipt(), UploadOutcome::Uploaded);
        match &client.api().calls()[0] {
            Call::Upload(file) => {
                assert_eq!(file.bytes, b"png-bytes");
                assert_eq!(file.mime_type, "image/png");
            }
            other => panic!("expected upload first, got {:?}", other),
        }
    }

    #[test]
    fn test_submission_into_result() {
        assert!(BudgetSubmission::Accepted.into_result().is_ok());
        assert!(matches!(
            BudgetSubmission::Skipped.into_result(),
            Err(ClientError::Validation(_))
        ));
        assert!(matches!(
            BudgetSubmission::Rejected { status: 500, detail: None }.into_result(),
            Err(ClientError::Status { status: 500, .. })
        ));
    }
}
