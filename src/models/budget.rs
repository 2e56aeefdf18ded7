//! Budget model
//!
//! A spending category with a monthly limit and the amount spent so far.

use serde::{Deserialize, Serialize};

use super::amount::Amount;

/// A budget as returned by `GET /budgets`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Budget {
    #[serde(default)]
    pub id: Option<i64>,

    /// Category name (unique on the server)
    pub category: String,

    /// Monthly spending limit
    pub monthly_limit: Amount,

    /// Amount spent so far this month
    pub spent: Amount,

    /// Balance carried over from the previous month
    #[serde(default)]
    pub prior_balance: Option<Amount>,
}

impl Budget {
    /// "spent / limit" as shown next to the category
    pub fn usage_label(&self) -> String {
        format!("{} / {}", self.spent, self.monthly_limit)
    }
}

/// Body of `POST /budgets` (create or update by category)
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BudgetPayload {
    pub category: String,
    pub monthly_limit: Amount,
    pub spent: Amount,
}

impl BudgetPayload {
    /// Build a payload from raw form input
    ///
    /// Returns `None` when the category is blank after trimming. The numbers
    /// are parsed leniently and may end up as NaN.
    pub fn from_form(category: &str, monthly_limit: &str, spent: &str) -> Option<Self> {
        let category = category.trim();
        if category.is_empty() {
            return None;
        }

        Some(Self {
            category: category.to_string(),
            monthly_limit: Amount::parse_lenient(monthly_limit),
            spent: Amount::parse_lenient(spent),
        })
    }
}
