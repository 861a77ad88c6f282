use crate::cli::{Args, Command};
use espn_fantasy::config::Config;
use espn_fantasy::data_fetcher::league::FantasyLeague;
use espn_fantasy::error::AppError;
use serde::Serialize;
use tracing::info;

/// Layers command line options over the loaded configuration.
pub fn apply_args(config: &mut Config, args: &Args) {
    if let Some(league_id) = args.league_id {
        config.league_id = league_id;
    }
    if let Some(year) = args.year {
        config.year = year;
    }
    if let Some(sport) = &args.sport {
        config.sport = sport.clone();
    }
    if let Some(espn_s2) = &args.espn_s2 {
        config.espn_s2 = Some(espn_s2.clone());
    }
    if let Some(swid) = &args.swid {
        config.swid = Some(swid.clone());
    }
    if let Some(log_file) = &args.log_file {
        config.log_file_path = Some(log_file.clone());
    }
}

/// Handles the --list-config command.
pub async fn handle_list_config_command() -> Result<(), AppError> {
    Config::display().await
}

/// Handles the --save-config command.
pub async fn handle_save_config_command(config: &Config) -> Result<(), AppError> {
    config.validate()?;
    config.save().await?;
    println!("Config saved to {}", Config::get_config_path());
    Ok(())
}

/// Rejects week numbers outside the sport's regular season.
pub fn validate_week(league: &FantasyLeague, week: u32) -> Result<(), AppError> {
    let max = league.sport().regular_season_weeks();
    if week == 0 || week > max {
        return Err(AppError::config_error(format!(
            "Week {week} is out of range for {} (1-{max})",
            league.sport()
        )));
    }
    Ok(())
}

/// Runs one league query and prints the result as pretty JSON on stdout.
pub async fn run_command(league: &FantasyLeague, command: &Command) -> Result<(), AppError> {
    info!("Running {:?}", command);
    match command {
        Command::League => print_json(&league.fetch_league().await?),
        Command::Matchups { week } => {
            if let Some(week) = week {
                validate_week(league, *week)?;
            }
            print_json(&league.get_matchups(*week).await?)
        }
        Command::Boxscore { matchup_id, week } => {
            validate_week(league, *week)?;
            print_json(&league.get_box_score(*matchup_id, *week).await?)
        }
        Command::FreeAgents => print_json(&league.get_free_agents().await?),
        Command::PlayerCard {
            player_ids,
            max_scoring_period,
            filters,
        } => print_json(
            &league
                .get_player_card(player_ids, *max_scoring_period, filters)
                .await?,
        ),
        Command::Activity => print_json(&league.get_recent_activity().await?),
        Command::Draft => print_json(&league.get_draft().await?),
        Command::News { player_ids } => match player_ids.as_slice() {
            [player_id] => print_json(&league.get_player_news(*player_id).await?),
            _ => print_json(&league.get_players_news(player_ids).await?),
        },
        Command::ProTeams => print_json(&league.get_pro_teams().await?),
    }
}

fn print_json<T: Serialize>(value: &T) -> Result<(), AppError> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
