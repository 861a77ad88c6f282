use clap::builder::styling::{AnsiColor, Effects, Styles};
use clap::{Parser, Subcommand};

fn get_styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
        .usage(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
        .literal(AnsiColor::Green.on_default())
        .placeholder(AnsiColor::Yellow.on_default())
        .error(AnsiColor::Red.on_default().effects(Effects::BOLD))
        .valid(AnsiColor::Green.on_default())
        .invalid(AnsiColor::Red.on_default())
}

/// ESPN Fantasy league reader
///
/// Reads league data from the ESPN fantasy API and prints it as JSON.
/// League id, season and credentials come from the config file, the
/// ESPN_* environment variables or the options below, in increasing
/// order of precedence.
///
/// Private leagues need both the espn_s2 and SWID cookies of a logged in
/// browser session.
#[derive(Parser, Debug)]
#[command(about, long_about = None, version)]
#[command(styles = get_styles())]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// League id
    #[arg(long = "league-id", global = true, help_heading = "League")]
    pub league_id: Option<u64>,

    /// Season year, e.g. 2024
    #[arg(long, global = true, help_heading = "League")]
    pub year: Option<u16>,

    /// Sport code: nfl, nba, nhl, mlb or wnba
    #[arg(long, global = true, help_heading = "League")]
    pub sport: Option<String>,

    /// espn_s2 cookie for private leagues
    #[arg(long = "espn-s2", global = true, help_heading = "Credentials")]
    pub espn_s2: Option<String>,

    /// SWID cookie for private leagues
    #[arg(long, global = true, help_heading = "Credentials")]
    pub swid: Option<String>,

    /// Save the league and credential options given on this run to the config file
    #[arg(long = "save-config", help_heading = "Configuration")]
    pub save_config: bool,

    /// List current configuration settings
    #[arg(long = "list-config", short = 'l', help_heading = "Configuration")]
    pub list_config: bool,

    /// Write debug logs to stderr as well as the log file.
    /// Stdout stays reserved for JSON output.
    #[arg(long = "debug", global = true, help_heading = "Debug")]
    pub debug: bool,

    /// Specify a custom log file path. If not provided, logs will be written to the default location.
    #[arg(long = "log-file", global = true, help_heading = "Debug")]
    pub log_file: Option<String>,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// League settings, members, teams and rosters
    League,
    /// Matchups for a scoring period, or the whole schedule
    Matchups {
        #[arg(long)]
        week: Option<u32>,
    },
    /// Box score of one matchup
    Boxscore { matchup_id: u64, week: u32 },
    /// Active players available in the player pool
    FreeAgents,
    /// Player cards for explicit player ids
    PlayerCard {
        #[arg(required = true)]
        player_ids: Vec<u64>,
        /// Number of most recent scoring periods to include stats for
        #[arg(long = "max-scoring-period", default_value_t = 17)]
        max_scoring_period: u32,
        /// Extra values for the top scoring period filter, e.g. 002024
        #[arg(long = "filter")]
        filters: Vec<String>,
    },
    /// Recent adds, drops and trades
    Activity,
    /// Draft picks
    Draft,
    /// News for one or more players
    News {
        #[arg(required = true)]
        player_ids: Vec<u64>,
    },
    /// Professional teams and bye weeks for the season
    ProTeams,
}

/// Commands that only touch configuration and need no league access.
pub fn is_config_only(args: &Args) -> bool {
    args.command.is_none() && (args.list_config || args.save_config)
}
