//! Budget CLI commands
//!
//! Implements CLI commands for listing budgets and creating or updating one.

use clap::Subcommand;

use crate::api::BudgetApi;
use crate::controller::{BudgetSubmission, ReceiptsBudgetsClient};
use crate::display::format_budgets;
use crate::error::ClientResult;

/// Budget subcommands
#[derive(Subcommand)]
pub enum BudgetCommands {
    /// List all budgets
    #[command(alias = "ls")]
    List,

    /// Create a budget, or update the one with the same category
    Set {
        /// Category name
        category: String,
        /// Monthly limit (e.g., "200" or "200.50")
        #[arg(short, long, allow_hyphen_values = true)]
        limit: String,
        /// Amount spent so far
        #[arg(short, long, allow_hyphen_values = true)]
        spent: String,
    },
}

/// Handle a budget command
pub fn handle_budget_command<A: BudgetApi>(
    client: &mut ReceiptsBudgetsClient<A>,
    cmd: BudgetCommands,
) -> ClientResult<()> {
    match cmd {
        BudgetCommands::List => {
            let result = client.list_budgets();
            print!("{}", format_budgets(client.budgets()));
            result?;
        }

        BudgetCommands::Set {
            category,
            limit,
            spent,
        } => {
            client.fill_budget_form(&category, &limit, &spent);
            let outcome = client.submit_budget();

            match outcome {
                BudgetSubmission::Skipped => {
                    println!("Category is required; nothing sent.");
                }
                BudgetSubmission::Accepted => {
                    println!("Saved budget '{}'.", category.trim());
                    println!();
                    print!("{}", format_budgets(client.budgets()));
                }
                rejected @ BudgetSubmission::Rejected { .. } => {
                    print!("{}", format_budgets(client.budgets()));
                    rejected.into_result()?;
                }
                failed @ BudgetSubmission::Failed(_) => {
                    failed.into_result()?;
                }
            }
        }
    }

    Ok(())
}
