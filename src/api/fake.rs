//! In-memory `BudgetApi` for tests
//!
//! Responses are scripted up front and every call is recorded so tests can
//! assert on exactly which requests were made, in which order.

use std::cell::RefCell;
use std::collections::VecDeque;

use super::{BudgetApi, Health, Reply, UploadFile};
use crate::error::{ClientError, ClientResult};
use crate::models::{Budget, BudgetPayload, Receipt};

/// A recorded request
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    ListReceipts,
    ListBudgets,
    Upload(UploadFile),
    SubmitBudget(BudgetPayload),
    GetReceipt(i64),
    Export,
    Health,
}

#[derive(Default)]
pub struct FakeApi {
    pub calls: RefCell<Vec<Call>>,
    receipts: RefCell<VecDeque<ClientResult<Vec<Receipt>>>>,
    budgets: RefCell<VecDeque<ClientResult<Vec<Budget>>>>,
    uploads: RefCell<VecDeque<ClientResult<Reply>>>,
    submissions: RefCell<VecDeque<ClientResult<Reply>>>,
}

impl FakeApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_receipts(self, receipts: Vec<Receipt>) -> Self {
        self.receipts.borrow_mut().push_back(Ok(receipts));
        self
    }

    pub fn with_receipts_error(self, err: ClientError) -> Self {
        self.receipts.borrow_mut().push_back(Err(err));
        self
    }

    pub fn with_budgets(self, budgets: Vec<Budget>) -> Self {
        self.budgets.borrow_mut().push_back(Ok(budgets));
        self
    }

    pub fn with_budgets_error(self, err: ClientError) -> Self {
        self.budgets.borrow_mut().push_back(Err(err));
        self
    }

    pub fn with_upload_reply(self, reply: ClientResult<Reply>) -> Self {
        self.uploads.borrow_mut().push_back(reply);
        self
    }

    pub fn with_submit_reply(self, reply: ClientResult<Reply>) -> Self {
        self.submissions.borrow_mut().push_back(reply);
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    pub fn count(&self, matcher: impl Fn(&Call) -> bool) -> usize {
        self.calls.borrow().iter().filter(|c| matcher(c)).count()
    }

    fn record(&self, call: Call) {
        self.calls.borrow_mut().push(call);
    }
}

impl BudgetApi for FakeApi {
    fn list_receipts(&self) -> ClientResult<Vec<Receipt>> {
        self.record(Call::ListReceipts);
        self.receipts.borrow_mut().pop_front().unwrap_or_else(|| Ok(Vec::new()))
    }

    fn list_budgets(&self) -> ClientResult<Vec<Budget>> {
        self.record(Call::ListBudgets);
        self.budgets.borrow_mut().pop_front().unwrap_or_else(|| Ok(Vec::new()))
    }

    fn upload_receipt(&self, file: &UploadFile) -> ClientResult<Reply> {
        self.record(Call::Upload(file.clone()));
        self.uploads
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Ok(Reply::new(200, "{}")))
    }

    fn submit_budget(&self, payload: &BudgetPayload) -> ClientResult<Reply> {
        self.record(Call::SubmitBudget(payload.clone()));
        self.submissions
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Ok(Reply::new(200, "{}")))
    }

    fn get_receipt(&self, id: i64) -> ClientResult<Receipt> {
        self.record(Call::GetReceipt(id));
        Err(ClientError::receipt_not_found(id.to_string()))
    }

    fn export_csv(&self) -> ClientResult<String> {
        self.record(Call::Export);
        Ok("date,vendor,total,created_at\n".to_string())
    }

    fn health(&self) -> ClientResult<Health> {
        self.record(Call::Health);
        Ok(Health {
            status: "ok".to_string(),
        })
    }
}
