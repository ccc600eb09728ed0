//! steamsum CLI - Steam review summaries in the terminal
//!
//! The application logic is contained in lib.rs, and this file is responsible
//! for parsing arguments and handling top-level errors.

use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use colored::Colorize;
use steamsum::{logging, ui, ApiClient, AppId, Config, SummaryResult};

#[derive(Parser)]
#[command(name = "steamsum")]
#[command(author, version, about = "TUI for AI-generated Steam review summaries", long_about = None)]
struct Cli {
    /// Backend base URL (overrides config and STEAMSUM_API_URL)
    #[arg(long, global = true)]
    api_url: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Find games by name
    Search {
        /// Game name or part of it
        query: String,
    },
    /// Summarise the reviews of a game by Steam app id
    Summarize {
        /// Steam app id, e.g. 620
        app_id: String,
    },
    /// Generate shell completions
    Completions {
        shell: Shell,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = Config::load()?;
    if let Some(url) = cli.api_url {
        config.api.base_url = url;
    }

    match cli.command {
        Some(Commands::Search { query }) => {
            logging::init_stderr();
            let client = ApiClient::from_config(&config)?;
            let candidates = client.search(&query).await?;

            if candidates.is_empty() {
                println!("No games found for: {}", query);
            } else {
                for candidate in &candidates {
                    println!("{:>10}  {}", candidate.appid.to_string().dimmed(), candidate.name);
                }
            }
        }
        Some(Commands::Summarize { app_id }) => {
            logging::init_stderr();
            let client = ApiClient::from_config(&config)?;
            let app_id = AppId::from(app_id);

            eprintln!("Analyzing reviews for {}... this may take a moment", app_id);
            match client.summarize(&app_id).await {
                Ok(result) => print_summary(&result),
                Err(e) => anyhow::bail!(e.user_message()),
            }
        }
        Some(Commands::Completions { shell }) => {
            clap_complete::generate(shell, &mut Cli::command(), "steamsum", &mut std::io::stdout());
        }
        None => {
            // Default: Launch the TUI
            let log_path = logging::default_log_path();
            if let Err(e) = logging::init_file(&log_path) {
                eprintln!("Warning: Failed to open log file {}: {}", log_path.display(), e);
            }
            let client = ApiClient::from_config(&config)?;
            ui::run(&config, client).await?;
        }
    }

    Ok(())
}

fn print_summary(result: &SummaryResult) {
    println!("=== {} ===\n", result.game.bold());
    println!("🔗 {}", result.app_id.store_url());
    println!("🖼  {}\n", result.app_id.banner_url());

    println!("{}", "👍 Praised".green().bold());
    for point in &result.summary.praised {
        println!("  • {}", point);
    }

    println!("\n{}", "👎 Criticized".red().bold());
    for point in &result.summary.criticized {
        println!("  • {}", point);
    }
}
