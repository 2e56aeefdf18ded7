//! Receipt model
//!
//! Receipts are owned by the API; the client only reads them.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::amount::Amount;

/// Vendor shown when the receipt has none
pub const UNKNOWN_VENDOR: &str = "Unknown";

/// A purchase record as returned by `GET /receipts` and `GET /receipts/{id}`
///
/// Every field is optional: OCR may fail to find a vendor, total or date,
/// and the list endpoint omits the image path and OCR text.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Receipt {
    #[serde(default)]
    pub id: Option<i64>,

    #[serde(default)]
    pub vendor: Option<String>,

    #[serde(default)]
    pub total: Option<Amount>,

    #[serde(default)]
    pub date: Option<String>,

    #[serde(default)]
    pub created_at: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_path: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ocr_text: Option<String>,
}

impl Receipt {
    /// Vendor name, or "Unknown" when missing or empty
    pub fn vendor_label(&self) -> &str {
        match self.vendor.as_deref() {
            Some(v) if !v.is_empty() => v,
            _ => UNKNOWN_VENDOR,
        }
    }

    /// Total, or zero when missing
    pub fn total_or_zero(&self) -> Amount {
        match self.total {
            Some(total) if !total.is_falsy() => total,
            _ => Amount::zero(),
        }
    }

    /// Receipt date, or an empty string
    pub fn date_label(&self) -> &str {
        self.date.as_deref().unwrap_or("")
    }

    /// Creation timestamp formatted for display
    ///
    /// The server stores naive UTC ISO-8601 timestamps; anything that does
    /// not parse is shown verbatim.
    pub fn created_at_label(&self) -> String {
        match self.created_at.as_deref() {
            Some(raw) => NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
                .map(|dt| dt.format("%Y-%m-%d %H:%M").to_string())
                .unwrap_or_else(|_| raw.to_string()),
            None => String::new(),
        }
    }
}
