// src/seasons.rs
//
// Season tokens ("2022-23"), their validation, and enumeration up to the
// current season. A season counts as current once August of its start year
// has begun; before that, the previous season is the latest one.

use std::{fmt, str::FromStr, sync::LazyLock};

use chrono::{Datelike, Local, NaiveDate};
use regex::Regex;

use crate::config::consts::{FIRST_LEAGUE_SEASON_YEAR, SEASON_ROLLOVER_MONTH};
use crate::error::AppError;

static SEASON_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([0-9]{4})-([0-9]{2})$").expect("season pattern compiles")
});

/// A season, identified by the calendar year it starts in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Season(i32);

impl Season {
    pub const fn new(start_year: i32) -> Self { Season(start_year) }

    #[inline]
    pub fn start_year(self) -> i32 { self.0 }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{:02}", self.0, (self.0 + 1).rem_euclid(100))
    }
}

impl FromStr for Season {
    type Err = AppError;

    /// Shape check only: `YYYY-YY` with `YY == (YYYY + 1) % 100`.
    /// Membership in the league's seasons is `is_valid_season`'s job.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let caps = SEASON_RE
            .captures(s)
            .ok_or_else(|| AppError::InvalidSeason(s!(s)))?;
        let start: i32 = caps[1].parse().map_err(|_| AppError::InvalidSeason(s!(s)))?;
        let end: i32 = caps[2].parse().map_err(|_| AppError::InvalidSeason(s!(s)))?;
        if end != (start + 1) % 100 {
            return Err(AppError::InvalidSeason(s!(s)));
        }
        Ok(Season(start))
    }
}

#[inline]
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// The latest season that has started as of `today`.
pub fn current_season(today: NaiveDate) -> Season {
    let year = today.year();
    if today.month() < SEASON_ROLLOVER_MONTH {
        Season(year - 1)
    } else {
        Season(year)
    }
}

/// Every season from `start_year` through the current season, ascending.
/// Empty when `start_year` is after the current season.
pub fn generate_seasons(start_year: i32, today: NaiveDate) -> Vec<Season> {
    let last = current_season(today).start_year();
    (start_year..=last).map(Season).collect()
}

/// The full set of seasons the data source knows about.
pub fn valid_seasons(today: NaiveDate) -> Vec<Season> {
    generate_seasons(FIRST_LEAGUE_SEASON_YEAR, today)
}

/// Shape check plus membership in `valid_seasons(today)`.
pub fn is_valid_season(text: &str, today: NaiveDate) -> bool {
    match text.parse::<Season>() {
        Ok(season) => {
            season.start_year() >= FIRST_LEAGUE_SEASON_YEAR
                && season <= current_season(today)
        }
        Err(_) => false,
    }
}

/// Parse and validate in one go, for front ends.
pub fn parse_valid(text: &str, today: NaiveDate) -> Result<Season, AppError> {
    let trimmed = text.trim();
    if is_valid_season(trimmed, today) {
        trimmed.parse()
    } else {
        Err(AppError::InvalidSeason(s!(trimmed)))
    }
}
