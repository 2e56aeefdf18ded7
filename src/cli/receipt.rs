//! Receipt CLI commands
//!
//! Implements CLI commands for listing, uploading, inspecting and
//! exporting receipts.

use std::path::PathBuf;

use clap::Subcommand;

use crate::api::BudgetApi;
use crate::controller::{ReceiptsBudgetsClient, UploadOutcome};
use crate::display::{format_csv_table, format_receipt_details, format_receipts};
use crate::error::{ClientError, ClientResult};

/// Receipt subcommands
#[derive(Subcommand)]
pub enum ReceiptCommands {
    /// List all receipts
    #[command(alias = "ls")]
    List,

    /// Upload a receipt image
    Upload {
        /// Path to the image file
        file: PathBuf,
    },

    /// Show a single receipt, including its OCR text
    Show {
        /// Receipt ID
        id: i64,
    },

    /// Export all receipts as CSV
    Export {
        /// Write the CSV to this file instead of printing a table
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

/// Handle a receipt command
pub fn handle_receipt_command<A: BudgetApi>(
    client: &mut ReceiptsBudgetsClient<A>,
    cmd: ReceiptCommands,
) -> ClientResult<()> {
    match cmd {
        ReceiptCommands::List => {
            let result = client.list_receipts();
            print!("{}", format_receipts(client.receipts()));
            result?;
        }

        ReceiptCommands::Upload { file } => {
            client.select_file(&file);
            let outcome = client.upload_receipt();
            let status = client.upload_status().unwrap_or_default().to_string();

            match outcome {
                UploadOutcome::Uploaded => {
                    println!("{}", status);
                    println!();
                    print!("{}", format_receipts(client.receipts()));
                }
                UploadOutcome::Skipped => {
                    return Err(ClientError::Validation("No file selected".into()));
                }
                UploadOutcome::Rejected(_) | UploadOutcome::Failed => {
                    return Err(ClientError::Upload(status));
                }
            }
        }

        ReceiptCommands::Show { id } => {
            let receipt = client.api().get_receipt(id)?;
            print!("{}", format_receipt_details(&receipt));
        }

        ReceiptCommands::Export { output } => {
            let csv_text = client.api().export_csv()?;
            match output {
                Some(path) => {
                    std::fs::write(&path, &csv_text).map_err(|e| {
                        ClientError::Io(format!("Failed to write {}: {}", path.display(), e))
                    })?;
                    let rows = csv_text.lines().count().saturating_sub(1);
                    println!("Exported {} receipt(s) to {}", rows, path.display());
                }
                None => {
                    let (table, count) = format_csv_table(&csv_text)?;
                    print!("{}", table);
                    println!("{} receipt(s)", count);
                }
            }
        }
    }

    Ok(())
}
