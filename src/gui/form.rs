// src/gui/form.rs
//
// The finder form as one value. Widgets read their enabled/disabled state
// from here; every user action is a transition that either succeeds or is
// rejected without touching the state.
//
//   ChooseYear → ChooseTeam1 → ChooseTeam2 → Ready → Searching → Results
//                                              ↑                     │
//                                              └──── team2 / find ───┘
//   Reset from anywhere goes back to ChooseYear.

use thiserror::Error;

use crate::model::GameRecord;
use crate::seasons::Season;

/// What a search was asked for. Also used to match a finished background
/// search against the state it was started from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Query {
    pub season: Season,
    pub team1: String,
    pub team2: String,
}

#[derive(Clone, Debug, PartialEq)]
pub enum SearchOutcome {
    Games {
        games: Vec<GameRecord>,
        selected: Option<usize>,
    },
    NoGames,
    Failed(String),
}

#[derive(Clone, Debug, Default, PartialEq)]
pub enum FormState {
    #[default]
    ChooseYear,
    ChooseTeam1 { season: Season },
    ChooseTeam2 { season: Season, team1: String },
    Ready(Query),
    Searching(Query),
    Results { query: Query, outcome: SearchOutcome },
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum FormError {
    #[error("cannot {action} while {state}")]
    Illegal { action: &'static str, state: &'static str },

    #[error("no game #{index} in the results")]
    NoSuchGame { index: usize },
}

impl FormState {
    pub fn name(&self) -> &'static str {
        match self {
            FormState::ChooseYear => "choosing a year",
            FormState::ChooseTeam1 { .. } => "choosing team 1",
            FormState::ChooseTeam2 { .. } => "choosing team 2",
            FormState::Ready(_) => "ready to search",
            FormState::Searching(_) => "searching",
            FormState::Results { .. } => "showing results",
        }
    }

    fn illegal(&self, action: &'static str) -> FormError {
        FormError::Illegal { action, state: self.name() }
    }

    /* ---------- derived widget state ---------- */

    /// Year is editable until Team 1 is chosen.
    pub fn year_enabled(&self) -> bool {
        matches!(self, FormState::ChooseYear | FormState::ChooseTeam1 { .. })
    }

    /// Team 1 unlocks with the year and locks once a search starts.
    pub fn team1_enabled(&self) -> bool {
        matches!(
            self,
            FormState::ChooseTeam1 { .. } | FormState::ChooseTeam2 { .. } | FormState::Ready(_)
        )
    }

    /// Team 2 unlocks with Team 1 and stays open after results come in.
    pub fn team2_enabled(&self) -> bool {
        matches!(
            self,
            FormState::ChooseTeam2 { .. } | FormState::Ready(_) | FormState::Results { .. }
        )
    }

    pub fn find_enabled(&self) -> bool {
        matches!(self, FormState::Ready(_) | FormState::Results { .. })
    }

    pub fn is_searching(&self) -> bool {
        matches!(self, FormState::Searching(_))
    }

    /* ---------- current selections ---------- */

    pub fn season(&self) -> Option<Season> {
        match self {
            FormState::ChooseYear => None,
            FormState::ChooseTeam1 { season } | FormState::ChooseTeam2 { season, .. } => Some(*season),
            FormState::Ready(q) | FormState::Searching(q) | FormState::Results { query: q, .. } => {
                Some(q.season)
            }
        }
    }

    pub fn team1(&self) -> Option<&str> {
        match self {
            FormState::ChooseTeam2 { team1, .. } => Some(team1),
            FormState::Ready(q) | FormState::Searching(q) | FormState::Results { query: q, .. } => {
                Some(&q.team1)
            }
            _ => None,
        }
    }

    pub fn team2(&self) -> Option<&str> {
        match self {
            FormState::Ready(q) | FormState::Searching(q) | FormState::Results { query: q, .. } => {
                Some(&q.team2)
            }
            _ => None,
        }
    }

    pub fn outcome(&self) -> Option<&SearchOutcome> {
        match self {
            FormState::Results { outcome, .. } => Some(outcome),
            _ => None,
        }
    }

    /// The game currently picked in the results dropdown.
    pub fn selected_game(&self) -> Option<&GameRecord> {
        match self.outcome()? {
            SearchOutcome::Games { games, selected: Some(i) } => games.get(*i),
            _ => None,
        }
    }

    /* ---------- transitions ---------- */

    pub fn select_season(&mut self, season: Season) -> Result<(), FormError> {
        match self {
            FormState::ChooseYear | FormState::ChooseTeam1 { .. } => {
                *self = FormState::ChooseTeam1 { season };
                Ok(())
            }
            _ => Err(self.illegal("change the year")),
        }
    }

    pub fn select_team1(&mut self, team: &str) -> Result<(), FormError> {
        let next = match self {
            FormState::ChooseTeam1 { season } | FormState::ChooseTeam2 { season, .. } => {
                FormState::ChooseTeam2 { season: *season, team1: s!(team) }
            }
            FormState::Ready(q) => FormState::Ready(Query { team1: s!(team), ..q.clone() }),
            _ => return Err(self.illegal("choose team 1")),
        };
        *self = next;
        Ok(())
    }

    pub fn select_team2(&mut self, team: &str) -> Result<(), FormError> {
        let next = match self {
            FormState::ChooseTeam2 { season, team1 } => FormState::Ready(Query {
                season: *season,
                team1: team1.clone(),
                team2: s!(team),
            }),
            FormState::Ready(q) | FormState::Results { query: q, .. } => {
                FormState::Ready(Query { team2: s!(team), ..q.clone() })
            }
            _ => return Err(self.illegal("choose team 2")),
        };
        *self = next;
        Ok(())
    }

    /// Ready/Results → Searching. Returns the query to run.
    pub fn begin_search(&mut self) -> Result<Query, FormError> {
        let query = match self {
            FormState::Ready(q) | FormState::Results { query: q, .. } => q.clone(),
            _ => return Err(self.illegal("search")),
        };
        *self = FormState::Searching(query.clone());
        Ok(query)
    }

    /// Searching(query) → Results. A result for any other query (or arriving
    /// after a reset) is rejected and the state is left alone.
    pub fn finish_search(
        &mut self,
        query: &Query,
        result: Result<Vec<GameRecord>, String>,
    ) -> Result<(), FormError> {
        match self {
            FormState::Searching(q) if q == query => {
                let outcome = match result {
                    Ok(games) if games.is_empty() => SearchOutcome::NoGames,
                    Ok(games) => SearchOutcome::Games { games, selected: None },
                    Err(msg) => SearchOutcome::Failed(msg),
                };
                *self = FormState::Results { query: query.clone(), outcome };
                Ok(())
            }
            _ => Err(self.illegal("accept search results")),
        }
    }

    pub fn select_game(&mut self, index: usize) -> Result<(), FormError> {
        match self {
            FormState::Results { outcome: SearchOutcome::Games { games, selected }, .. } => {
                if index >= games.len() {
                    return Err(FormError::NoSuchGame { index });
                }
                *selected = Some(index);
                Ok(())
            }
            _ => Err(self.illegal("pick a game")),
        }
    }

    /// Back to the initial state; results are dropped.
    pub fn reset(&mut self) {
        *self = FormState::ChooseYear;
    }
}
