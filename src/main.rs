mod cli_messages;
mod config;
mod consts;
mod dashboard;
mod environment;
mod error_classifier;
mod events;
mod food;
mod logging;
mod session;
mod store;
mod ui;
mod workers;

use crate::config::{Config, ENVIRONMENT_VAR, get_config_path};
use crate::food::{FoodDraft, parse_price};
use crate::session::headless_mode::FoodEdits;
use crate::session::{HeadlessCommand, run_headless_mode, run_tui_mode, setup_session};
use clap::{Parser, Subcommand};
use std::error::Error;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
/// Command-line arguments
struct Args {
    /// Base URL of the food API. Overrides the config file and environment.
    #[arg(long, global = true, value_name = "URL")]
    api_url: Option<String>,

    /// Command to execute
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Open the menu dashboard
    Start {
        /// Paint a background colour behind the dashboard
        #[arg(long, default_value_t = false)]
        with_background: bool,
    },
    /// Print every food on the menu
    List,
    /// Add a food to the menu
    Add {
        #[arg(long)]
        name: String,
        #[arg(long, default_value = "")]
        description: String,
        /// Price as typed, e.g. 12.5 or 12,50
        #[arg(long, value_parser = price_arg)]
        price: String,
        /// Image URL or path
        #[arg(long, default_value = "")]
        image: String,
    },
    /// Change fields of an existing food. Omitted fields keep their values.
    Edit {
        /// ID of the food to edit
        id: u64,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        description: Option<String>,
        #[arg(long, value_parser = price_arg)]
        price: Option<String>,
        #[arg(long)]
        image: Option<String>,
    },
    /// Remove a food from the menu
    Delete {
        /// ID of the food to delete
        id: u64,
    },
    /// Save the API URL and display settings to the config file
    Configure {
        #[arg(long, default_value_t = false)]
        with_background: bool,
    },
}

/// Keeps the price as typed once it is known to parse.
fn price_arg(value: &str) -> Result<String, String> {
    match parse_price(value) {
        Some(_) => Ok(value.trim().to_string()),
        None => Err(format!("'{}' is not a price (e.g. 12.50 or 12,50)", value)),
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();
    let config_path = get_config_path()?;
    let config = Config::load_or_default(&config_path)?;

    let env_value = std::env::var(ENVIRONMENT_VAR).ok();
    let environment = config.resolve_environment(args.api_url.as_deref(), env_value.as_deref());

    let headless = match args.command {
        Command::Start { with_background } => {
            let session = setup_session(environment)?;
            return run_tui_mode(session, with_background || config.with_background_color).await;
        }
        Command::Configure { with_background } => {
            let updated = Config::new(args.api_url.or(config.api_url), with_background);
            updated
                .save(&config_path)
                .map_err(|e| format!("Failed to save config: {}", e))?;
            print_cmd_info!("Config saved", "{}", config_path.display());
            return Ok(());
        }
        Command::List => HeadlessCommand::List,
        Command::Add {
            name,
            description,
            price,
            image,
        } => HeadlessCommand::Add(FoodDraft {
            image,
            name,
            price,
            description,
        }),
        Command::Edit {
            id,
            name,
            description,
            price,
            image,
        } => HeadlessCommand::Edit {
            id,
            edits: FoodEdits {
                name,
                description,
                price,
                image,
            },
        },
        Command::Delete { id } => HeadlessCommand::Delete(id),
    };

    let session = setup_session(environment)?;
    if let Err(e) = run_headless_mode(session, headless).await {
        // Already reported; returning the error would print it again.
        print_cmd_error!("Request failed", &e.to_string());
        std::process::exit(1);
    }
    Ok(())
}
