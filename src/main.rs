use clap::{ArgAction, Parser, Subcommand};
use serde_json::{json, Value};
use std::path::PathBuf;
use std::process::ExitCode;

use paywall_router::config::RouterConfig;
use paywall_router::error::{PaywallError, RuntimeError};
use paywall_router::input::{read_action, read_error};
use paywall_router::logging::{init_logging, LoggingConfig};
use paywall_router::upgrade::{TracingDispatcher, UpgradeRouter};

#[derive(Parser, Debug)]
#[command(name = "paywall-router")]
#[command(version)]
#[command(about = "Route failed low-code actions to quota upgrade prompts")]
struct Cli {
    /// Suppress all log output except errors
    #[arg(long, short, global = true)]
    quiet: bool,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(long, short, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Classify a failed action and report the routing outcome as JSON
    Classify {
        /// Path to the action record (JSON)
        #[arg(long, short)]
        action: PathBuf,

        /// Path to the error value (JSON); defaults to null
        #[arg(long, short)]
        error: Option<PathBuf>,

        /// Path to a router configuration file (TOML)
        #[arg(long, short)]
        config: Option<PathBuf>,
    },

    /// Show the backend API error carried by an error value, or null
    CheckError {
        /// Path to the error value (JSON)
        #[arg(long, short)]
        error: PathBuf,
    },
}

fn classify(
    action: PathBuf,
    error: Option<PathBuf>,
    config: Option<PathBuf>,
) -> Result<Value, PaywallError> {
    let action = read_action(&action)?;
    let error = match error {
        Some(path) => read_error(&path)?,
        None => RuntimeError::default(),
    };
    let config = match config {
        Some(path) => RouterConfig::load(path)?,
        None => RouterConfig::default(),
    };

    let router = UpgradeRouter::with_config(TracingDispatcher, config);
    let outcome = router.route(&action, &error);

    let mut report = serde_json::to_value(outcome)?;
    if let Value::Object(fields) = &mut report {
        fields.insert("actionType".to_string(), json!(action.action_type()));
    }
    Ok(report)
}

fn check_error(error: PathBuf) -> Result<Value, PaywallError> {
    let error = read_error(&error)?;
    Ok(serde_json::to_value(error.api_error())?)
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(LoggingConfig::from_flags(cli.verbose, cli.quiet));

    let result = match cli.command {
        Commands::Classify {
            action,
            error,
            config,
        } => classify(action, error, config),
        Commands::CheckError { error } => check_error(error),
    };

    match result {
        Ok(report) => {
            println!("{}", report);
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("error: {}", err);
            ExitCode::FAILURE
        }
    }
}
