use anyhow::Result;
use clap::{Parser, Subcommand};

use receiptbook::api::{BudgetApi, HttpApi};
use receiptbook::cli::{handle_budget_command, handle_receipt_command};
use receiptbook::config::{paths::ClientPaths, settings::Settings};
use receiptbook::display::format_receipts;
use receiptbook::ReceiptsBudgetsClient;

#[derive(Parser)]
#[command(
    name = "receiptbook",
    version,
    about = "Terminal client for a receipts and budgets server",
    long_about = "receiptbook talks to a receipts/budgets HTTP server. It lists \
                  receipts and budgets, uploads receipt images for OCR and sets \
                  monthly budgets, either from the command line or from an \
                  interactive terminal screen."
)]
struct Cli {
    /// Base URL of the server (overrides the configured api_url)
    #[arg(long, global = true, env = "RECEIPTBOOK_API_URL")]
    api_url: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Launch the interactive TUI
    #[command(alias = "ui")]
    Tui,

    /// Receipt commands
    #[command(subcommand)]
    Receipts(receiptbook::cli::ReceiptCommands),

    /// Budget commands
    #[command(subcommand)]
    Budgets(receiptbook::cli::BudgetCommands),

    /// Re-fetch and print the receipts list
    Refresh,

    /// Check that the server is reachable
    Health,

    /// Write the default configuration file
    Init,

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize paths and settings
    let paths = ClientPaths::new()?;
    let mut settings = Settings::load_or_create(&paths)?;
    if let Some(url) = cli.api_url.as_deref() {
        settings.set_api_url(url)?;
    }

    let log_file = receiptbook::logging::init(&paths, &settings);
    tracing::debug!(api_url = %settings.api_url, "starting");

    let api = HttpApi::new(&settings)?;
    let mut client = ReceiptsBudgetsClient::new(api);

    match cli.command {
        Some(Commands::Tui) => {
            receiptbook::tui::run_tui(client)?;
        }
        Some(Commands::Receipts(cmd)) => {
            handle_receipt_command(&mut client, cmd)?;
        }
        Some(Commands::Budgets(cmd)) => {
            handle_budget_command(&mut client, cmd)?;
        }
        Some(Commands::Refresh) => {
            let result = client.refresh();
            print!("{}", format_receipts(client.receipts()));
            result?;
        }
        Some(Commands::Health) => {
            let health = client.api().health()?;
            println!("{}: {}", client.api().base_url(), health.status);
            if !health.is_ok() {
                anyhow::bail!("server reported status '{}'", health.status);
            }
        }
        Some(Commands::Init) => {
            println!("Initializing receiptbook at: {}", paths.base_dir().display());
            settings.save(&paths)?;
            println!("Initialization complete!");
            println!();
            println!("Server: {}", settings.api_url);
            println!("Edit {} to change it.", paths.settings_file().display());
        }
        Some(Commands::Config) => {
            println!("receiptbook Configuration");
            println!("=========================");
            println!("Base directory: {}", paths.base_dir().display());
            println!("Settings file:  {}", paths.settings_file().display());
            match &log_file {
                Some(path) => println!("Log file:       {}", path.display()),
                None => println!("Log file:       (unavailable, logging to stderr)"),
            }
            println!("Initialized:    {}", paths.is_initialized());
            println!();
            println!("Settings:");
            println!("  API URL:         {}", settings.api_url);
            match settings.request_timeout_secs {
                Some(secs) => println!("  Request timeout: {}s", secs),
                None => println!("  Request timeout: none"),
            }
            println!("  Log level:       {}", settings.log_level);
        }
        None => {
            println!("receiptbook - receipts and budgets from the terminal");
            println!();
            println!("Run 'receiptbook --help' for usage information.");
            println!("Run 'receiptbook tui' to launch the interactive interface.");
        }
    }

    Ok(())
}
