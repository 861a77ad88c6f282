// src/main.rs
mod cli;
mod commands;
mod logging;

use clap::Parser;
use cli::{Args, is_config_only};
use espn_fantasy::config::Config;
use espn_fantasy::data_fetcher::league::FantasyLeague;
use espn_fantasy::error::AppError;
use std::process::ExitCode;
use tracing::{error, info};

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();

    match run(args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            // Details go to the log only; they may include league URLs
            error!("Command failed: {e}");
            eprintln!("{}", user_message(&e));
            ExitCode::FAILURE
        }
    }
}

async fn run(args: Args) -> Result<(), AppError> {
    let mut config = Config::load_unvalidated().await?;
    commands::apply_args(&mut config, &args);

    let (log_file_path, _guard) =
        logging::setup_logging(&args, config.log_file_path.as_deref()).await?;
    info!("Logs are being written to: {log_file_path}");

    if args.list_config {
        commands::handle_list_config_command().await?;
    }
    if args.save_config {
        commands::handle_save_config_command(&config).await?;
    }
    if is_config_only(&args) {
        return Ok(());
    }

    let Some(command) = &args.command else {
        return Err(AppError::config_error(
            "No command given, see --help for the available commands",
        ));
    };

    config.validate()?;
    let league = FantasyLeague::new(config.client_config()?, config.http_timeout_seconds)?;
    commands::run_command(&league, command).await
}

/// Generic message for stderr. Never includes cookie values or URLs.
fn user_message(error: &AppError) -> String {
    match error {
        AppError::InvalidSport { .. }
        | AppError::Config(_)
        | AppError::TomlDeserialize(_)
        | AppError::InvalidLeague { .. } => format!("Error: {error}"),
        AppError::AccessDenied { league_id, .. } => format!(
            "Error: league {league_id} is private or the credentials were rejected; check espn_s2 and SWID"
        ),
        AppError::NetworkTimeout { .. } | AppError::NetworkConnection { .. } => {
            "Error: could not reach ESPN, check your connection".to_string()
        }
        _ => "Error: failed to fetch league data, see the log file for details".to_string(),
    }
}
