// src/cli.rs
//
// Terminal front end. Every prompt can be skipped with the matching flag,
// so the same code path serves interactive use and scripts.

use std::io::{self, BufRead, Write};

use chrono::NaiveDate;
use clap::Parser;

use crate::{
    config::Settings,
    core::StatsClient,
    error::{AppError, Result},
    matchups,
    model::{GameRecord, PlayEvent},
    progress::Progress,
    seasons::{self, Season},
    specs::play_by_play,
    teams,
};

/// Find the games two NBA teams played against each other in a season.
///
/// With no flags, asks for a season and two teams from numbered menus,
/// prints the matching games and offers the play-by-play of one of them.
#[derive(Parser, Debug, Default)]
#[command(name = "cli", about, long_about = None)]
pub struct Args {
    /// Season to search, e.g. 2022-23. Prompted for when omitted.
    #[arg(short, long, value_name = "YYYY-YY")]
    pub season: Option<String>,

    /// First team abbreviation, e.g. GSW. Prompted for when omitted.
    #[arg(long, value_name = "ABBR")]
    pub team1: Option<String>,

    /// Second team abbreviation, e.g. BOS. Prompted for when omitted.
    #[arg(long, value_name = "ABBR")]
    pub team2: Option<String>,

    /// Print the play-by-play of this game. On its own, skips the search.
    #[arg(short, long, value_name = "GAME_ID")]
    pub game: Option<String>,

    /// Print the team roster and exit.
    #[arg(long)]
    pub list_teams: bool,

    /// Print every valid season and exit.
    #[arg(long)]
    pub list_seasons: bool,

    /// Roster cut-off: keep franchises still active in this season's start year.
    #[arg(long, value_name = "YEAR")]
    pub since: Option<i32>,

    /// Also log to stderr.
    #[arg(short, long)]
    pub verbose: bool,
}

/// Progress lines on stderr, so stdout stays clean for the tables.
struct CliProgress;

impl Progress for CliProgress {
    fn log(&mut self, msg: &str) {
        eprintln!("{msg}");
    }
}

pub fn run(args: &Args, settings: &Settings) -> Result<()> {
    let client = StatsClient::new(settings)?;
    let since = args.since.unwrap_or(settings.since_year);
    let stdin = io::stdin();
    let stdout = io::stdout();
    run_with(args, &client, since, seasons::today(), &mut stdin.lock(), &mut stdout.lock())
}

/// `run` with the client, clock and terminal supplied by the caller.
pub fn run_with<R: BufRead, W: Write>(
    args: &Args,
    client: &StatsClient,
    since: i32,
    today: NaiveDate,
    input: &mut R,
    out: &mut W,
) -> Result<()> {
    if args.list_seasons {
        for s in seasons::valid_seasons(today) {
            writeln!(out, "{s}")?;
        }
        return Ok(());
    }

    // Play-by-play on its own needs neither roster nor search.
    let searching = args.season.is_some() || args.team1.is_some() || args.team2.is_some();
    if let (Some(game_id), false) = (&args.game, searching) {
        return show_play_by_play(client, game_id, out);
    }

    let roster = teams::load(client, since, Some(&mut CliProgress))?;
    writeln!(out, "Teams from {} to present ({} teams):", Season::new(since), roster.len())?;
    writeln!(out, "{}", roster.join(", "))?;
    if args.list_teams {
        return Ok(());
    }
    writeln!(out)?;

    let season = match &args.season {
        Some(text) => seasons::parse_valid(text, today)?,
        None => prompt_season(input, out, today)?,
    };
    let team1 = match &args.team1 {
        Some(abbr) => resolve_team(abbr, &roster)?,
        None => prompt_team(input, out, "Choose a team:", &roster)?,
    };
    let team2 = match &args.team2 {
        Some(abbr) => resolve_team(abbr, &roster)?,
        None => prompt_team(input, out, "Choose another team:", &roster)?,
    };

    logf!("CLI: search season={season} teams={team1} vs {team2}");
    let games = matchups::find_matchups(client, season, &team1, &team2, Some(&mut CliProgress))?;

    writeln!(out)?;
    print_matchups(out, &games)?;
    if games.is_empty() {
        return Ok(());
    }

    let game_id = match &args.game {
        Some(id) => Some(id.clone()),
        None => prompt_game(input, out, &games)?,
    };
    if let Some(id) = game_id {
        writeln!(out)?;
        show_play_by_play(client, &id, out)?;
    }
    Ok(())
}

/* ---------- prompts ---------- */

/// One trimmed line, or `None` at end of input.
fn read_line<R: BufRead>(input: &mut R) -> Result<Option<String>> {
    let mut line = s!();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(s!(line.trim())))
}

fn require_line<R: BufRead>(input: &mut R) -> Result<String> {
    read_line(input)?.ok_or_else(|| AppError::input_error("unexpected end of input"))
}

/// Ask until the answer is a valid season.
pub fn prompt_season<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    today: NaiveDate,
) -> Result<Season> {
    loop {
        write!(out, "Enter a season (e.g., 2022-23): ")?;
        out.flush()?;
        let text = require_line(input)?;
        match seasons::parse_valid(&text, today) {
            Ok(season) => return Ok(season),
            Err(_) => writeln!(out, "Invalid season format. Please try again.")?,
        }
    }
}

/// Numbered menu over `roster`; asks until a listed number is entered.
pub fn prompt_team<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    title: &str,
    roster: &[String],
) -> Result<String> {
    if roster.is_empty() {
        return Err(AppError::input_error("no teams to choose from"));
    }

    writeln!(out, "{title}")?;
    for (i, abbr) in roster.iter().enumerate() {
        writeln!(out, "{:>3}. {}", i + 1, abbr)?;
    }
    loop {
        write!(out, "Enter number: ")?;
        out.flush()?;
        let text = require_line(input)?;
        match text.parse::<usize>() {
            Ok(n) if (1..=roster.len()).contains(&n) => return Ok(roster[n - 1].clone()),
            _ => writeln!(out, "Invalid choice. Please enter a number from 1 to {}.", roster.len())?,
        }
    }
}

/// Optional pick of one listed game. Blank line or end of input skips.
pub fn prompt_game<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    games: &[GameRecord],
) -> Result<Option<String>> {
    loop {
        write!(out, "Enter a GAME_ID for play-by-play (blank to skip): ")?;
        out.flush()?;
        let Some(text) = read_line(input)? else { return Ok(None) };
        if text.is_empty() {
            return Ok(None);
        }
        if games.iter().any(|g| g.game_id == text) {
            return Ok(Some(text));
        }
        writeln!(out, "{text} is not one of the games above.")?;
    }
}

/// Case-insensitive lookup of a flag value in the roster.
pub fn resolve_team(abbr: &str, roster: &[String]) -> Result<String> {
    let abbr = abbr.trim();
    roster
        .iter()
        .find(|t| t.eq_ignore_ascii_case(abbr))
        .cloned()
        .ok_or_else(|| AppError::UnknownTeam(s!(abbr)))
}

/* ---------- output ---------- */

pub fn print_matchups<W: Write>(out: &mut W, games: &[GameRecord]) -> Result<()> {
    if games.is_empty() {
        writeln!(out, "No games found.")?;
        return Ok(());
    }
    writeln!(out, "{:<12} {:<10} {:<14} {}", "GAME_ID", "GAME_DATE", "MATCHUP", "WL")?;
    for g in games {
        writeln!(
            out,
            "{:<12} {:<10} {:<14} {}",
            g.game_id,
            g.game_date,
            g.matchup,
            g.outcome_letter()
        )?;
    }
    Ok(())
}

pub fn print_play_by_play<W: Write>(out: &mut W, game_id: &str, events: &[PlayEvent]) -> Result<()> {
    writeln!(out, "Play-by-play for game {game_id} ({} events):", events.len())?;
    for e in events {
        writeln!(out, "{e}")?;
    }
    Ok(())
}

fn show_play_by_play<W: Write>(client: &StatsClient, game_id: &str, out: &mut W) -> Result<()> {
    let events = play_by_play::fetch(client, game_id)?;
    print_play_by_play(out, game_id, &events)
}
