// src/model.rs
//
// Domain records. All transient: fetched per run, never stored.

use std::fmt;

/// A team from the static (embedded) team list.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Team {
    pub id: u64,
    pub abbreviation: &'static str,
    pub full_name: &'static str,
    pub nickname: &'static str,
    pub city: &'static str,
    pub state: &'static str,
    pub year_founded: i32,
}

/// One row of the franchise history result set.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FranchiseRecord {
    pub team_id: u64,
    pub team_city: String,
    pub team_name: String,
    pub start_year: i32,
    pub end_year: i32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    Win,
    Loss,
}

impl Outcome {
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim() {
            "W" | "w" => Some(Outcome::Win),
            "L" | "l" => Some(Outcome::Loss),
            _ => None,
        }
    }

    pub fn letter(self) -> &'static str {
        match self { Outcome::Win => "W", Outcome::Loss => "L" }
    }
}

/// One team's line for one game. A game between two teams shows up twice in
/// a season log: once as "AAA vs. BBB" (home) and once as "BBB @ AAA" (away).
#[derive(Clone, Debug, PartialEq)]
pub struct GameRecord {
    pub season_id: String,
    pub team_id: u64,
    pub team_abbreviation: String,
    pub team_name: String,
    pub game_id: String,
    pub game_date: String,
    pub matchup: String,
    pub outcome: Option<Outcome>,
    pub points: Option<i64>,
    pub plus_minus: Option<f64>,
}

impl GameRecord {
    /// Dropdown/menu label, e.g. "2023-01-19 - GSW vs. BOS".
    pub fn label(&self) -> String {
        format!("{} - {}", self.game_date, self.matchup)
    }

    pub fn outcome_letter(&self) -> &'static str {
        self.outcome.map(Outcome::letter).unwrap_or("")
    }
}

/// One play-by-play event.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PlayEvent {
    pub event_num: i64,
    pub period: i64,
    pub clock: String,
    pub score: Option<String>,
    pub home_description: Option<String>,
    pub neutral_description: Option<String>,
    pub visitor_description: Option<String>,
}

impl PlayEvent {
    /// Non-empty home/neutral/visitor descriptions joined with " | ".
    pub fn description(&self) -> String {
        [&self.home_description, &self.neutral_description, &self.visitor_description]
            .into_iter()
            .filter_map(|d| d.as_deref())
            .map(str::trim)
            .filter(|d| !d.is_empty())
            .collect::<Vec<_>>()
            .join(" | ")
    }
}

impl fmt::Display for PlayEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Q{} {:>5}  {:<9} {}",
            self.period,
            self.clock,
            self.score.as_deref().unwrap_or(""),
            self.description()
        )
    }
}
