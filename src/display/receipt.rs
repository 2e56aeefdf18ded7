//! Receipt display formatting
//!
//! Formats a single receipt for the `receipts show` detail view.

use crate::models::Receipt;

/// Format a single receipt's details
pub fn format_receipt_details(receipt: &Receipt) -> String {
    let mut output = String::new();

    match receipt.id {
        Some(id) => output.push_str(&format!("Receipt #{}\n", id)),
        None => output.push_str("Receipt\n"),
    }
    output.push_str(&format!("  Vendor:     {}\n", receipt.vendor_label()));
    output.push_str(&format!("  Total:      {}\n", receipt.total_or_zero()));
    output.push_str(&format!("  Date:       {}\n", receipt.date_label()));
    output.push_str(&format!("  Created:    {}\n", receipt.created_at_label()));

    if let Some(ref image_path) = receipt.image_path {
        output.push_str(&format!("  Image:      {}\n", image_path));
    }

    if let Some(ref text) = receipt.ocr_text {
        let text = text.trim();
        if !text.is_empty() {
            output.push_str("\n  OCR text:\n");
            for line in text.lines() {
                output.push_str(&format!("    {}\n", line));
            }
        }
    }

    output
}
