// src/teams.rs
//
// Team roster: the embedded static team list joined with the live franchise
// history. A team makes the roster when its franchise is still around in the
// `since` season (end year >= since) and its id maps to an abbreviation.

use std::collections::BTreeSet;

use crate::{
    core::StatsClient,
    error::Result,
    model::{FranchiseRecord, Team},
    progress::Progress,
    specs::franchise_history,
};

macro_rules! team {
    ($id:expr, $abbr:expr, $full:expr, $nick:expr, $city:expr, $state:expr, $year:expr) => {
        Team {
            id: $id,
            abbreviation: $abbr,
            full_name: $full,
            nickname: $nick,
            city: $city,
            state: $state,
            year_founded: $year,
        }
    };
}

/// The league's current franchises, as the stats site publishes them.
pub static STATIC_TEAMS: [Team; 30] = [
    team!(1610612737, "ATL", "Atlanta Hawks", "Hawks", "Atlanta", "Georgia", 1949),
    team!(1610612738, "BOS", "Boston Celtics", "Celtics", "Boston", "Massachusetts", 1946),
    team!(1610612739, "CLE", "Cleveland Cavaliers", "Cavaliers", "Cleveland", "Ohio", 1970),
    team!(1610612740, "NOP", "New Orleans Pelicans", "Pelicans", "New Orleans", "Louisiana", 2002),
    team!(1610612741, "CHI", "Chicago Bulls", "Bulls", "Chicago", "Illinois", 1966),
    team!(1610612742, "DAL", "Dallas Mavericks", "Mavericks", "Dallas", "Texas", 1980),
    team!(1610612743, "DEN", "Denver Nuggets", "Nuggets", "Denver", "Colorado", 1976),
    team!(1610612744, "GSW", "Golden State Warriors", "Warriors", "Golden State", "California", 1946),
    team!(1610612745, "HOU", "Houston Rockets", "Rockets", "Houston", "Texas", 1967),
    team!(1610612746, "LAC", "Los Angeles Clippers", "Clippers", "Los Angeles", "California", 1970),
    team!(1610612747, "LAL", "Los Angeles Lakers", "Lakers", "Los Angeles", "California", 1948),
    team!(1610612748, "MIA", "Miami Heat", "Heat", "Miami", "Florida", 1988),
    team!(1610612749, "MIL", "Milwaukee Bucks", "Bucks", "Milwaukee", "Wisconsin", 1968),
    team!(1610612750, "MIN", "Minnesota Timberwolves", "Timberwolves", "Minnesota", "Minnesota", 1989),
    team!(1610612751, "BKN", "Brooklyn Nets", "Nets", "Brooklyn", "New York", 1976),
    team!(1610612752, "NYK", "New York Knicks", "Knicks", "New York", "New York", 1946),
    team!(1610612753, "ORL", "Orlando Magic", "Magic", "Orlando", "Florida", 1989),
    team!(1610612754, "IND", "Indiana Pacers", "Pacers", "Indiana", "Indiana", 1976),
    team!(1610612755, "PHI", "Philadelphia 76ers", "76ers", "Philadelphia", "Pennsylvania", 1949),
    team!(1610612756, "PHX", "Phoenix Suns", "Suns", "Phoenix", "Arizona", 1968),
    team!(1610612757, "POR", "Portland Trail Blazers", "Trail Blazers", "Portland", "Oregon", 1970),
    team!(1610612758, "SAC", "Sacramento Kings", "Kings", "Sacramento", "California", 1948),
    team!(1610612759, "SAS", "San Antonio Spurs", "Spurs", "San Antonio", "Texas", 1976),
    team!(1610612760, "OKC", "Oklahoma City Thunder", "Thunder", "Oklahoma City", "Oklahoma", 1967),
    team!(1610612761, "TOR", "Toronto Raptors", "Raptors", "Toronto", "Ontario", 1995),
    team!(1610612762, "UTA", "Utah Jazz", "Jazz", "Utah", "Utah", 1974),
    team!(1610612763, "MEM", "Memphis Grizzlies", "Grizzlies", "Memphis", "Tennessee", 1995),
    team!(1610612764, "WAS", "Washington Wizards", "Wizards", "Washington", "District of Columbia", 1961),
    team!(1610612765, "DET", "Detroit Pistons", "Pistons", "Detroit", "Michigan", 1948),
    team!(1610612766, "CHA", "Charlotte Hornets", "Hornets", "Charlotte", "North Carolina", 1988),
];

pub fn static_teams() -> &'static [Team] {
    &STATIC_TEAMS
}

/// Sorted abbreviations of the whole static list.
pub fn static_abbreviations() -> Vec<String> {
    let mut v: Vec<String> = STATIC_TEAMS.iter().map(|t| s!(t.abbreviation)).collect();
    v.sort();
    v
}

/// Pure roster rule: franchises with `end_year >= since`, joined to `teams`
/// by id; unresolved ids are dropped. Sorted, de-duplicated.
pub fn active_abbreviations(
    franchises: &[FranchiseRecord],
    teams: &[Team],
    since: i32,
) -> Vec<String> {
    let mut out: BTreeSet<String> = BTreeSet::new();
    for f in franchises.iter().filter(|f| f.end_year >= since) {
        match teams.iter().find(|t| t.id == f.team_id) {
            Some(t) => { out.insert(s!(t.abbreviation)); }
            None => logd!(
                "Roster: no abbreviation for team_id={} ({} {}), dropping",
                f.team_id, f.team_city, f.team_name
            ),
        }
    }
    out.into_iter().collect()
}

/// Fetch franchise history and build the roster.
pub fn load(
    client: &StatsClient,
    since: i32,
    mut progress: Option<&mut dyn Progress>,
) -> Result<Vec<String>> {
    if let Some(p) = progress.as_deref_mut() {
        p.begin(1);
        p.log("Fetching franchise history…");
    }

    let franchises = franchise_history::fetch(client);

    if let Some(p) = progress.as_deref_mut() {
        if franchises.is_ok() {
            p.step_done("franchise history");
        }
        p.finish();
    }

    let roster = active_abbreviations(&franchises?, static_teams(), since);
    logf!("Roster: {} teams active since {}", roster.len(), since);
    Ok(roster)
}

/// `load`, falling back to the static abbreviations when the API is down,
/// so a front end can still offer a team list.
pub fn load_or_fallback(
    client: &StatsClient,
    since: i32,
    progress: Option<&mut dyn Progress>,
) -> Vec<String> {
    match load(client, since, progress) {
        Ok(v) if !v.is_empty() => v,
        Ok(_) => {
            loge!("Roster: franchise history came back empty, using static team list");
            static_abbreviations()
        }
        Err(e) => {
            loge!("Roster: could not load franchise history ({e}), using static team list");
            static_abbreviations()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fr(id: u64, start: i32, end: i32) -> FranchiseRecord {
        FranchiseRecord {
            team_id: id,
            team_city: s!("City"),
            team_name: s!("Name"),
            start_year: start,
            end_year: end,
        }
    }

    #[test]
    fn static_list_is_unique() {
        let abbrs: BTreeSet<&str> = STATIC_TEAMS.iter().map(|t| t.abbreviation).collect();
        assert_eq!(abbrs.len(), STATIC_TEAMS.len());
        let ids: BTreeSet<u64> = STATIC_TEAMS.iter().map(|t| t.id).collect();
        assert_eq!(ids.len(), STATIC_TEAMS.len());
    }

    #[test]
    fn roster_filters_by_end_year_and_abbreviation() {
        let franchises = vec![
            fr(1610612744, 1946, 2024), // GSW
            fr(1610612744, 1962, 1970), // GSW, old name row
            fr(1610612738, 1946, 2024), // BOS
            fr(1610612760, 1967, 1995), // OKC franchise row ending before 1996
            fr(1610610024, 1949, 1954), // defunct, no abbreviation
            fr(1610612999, 1996, 2024), // unknown id
            fr(1610612737, 1949, 1996), // ATL, ends exactly at cut-off
        ];
        let roster = active_abbreviations(&franchises, static_teams(), 1996);
        assert_eq!(roster, vec!["ATL", "BOS", "GSW"]);
    }

    #[test]
    fn roster_is_sorted_and_deduplicated() {
        let franchises: Vec<_> = STATIC_TEAMS.iter().rev()
            .flat_map(|t| [fr(t.id, 1990, 2024), fr(t.id, 1990, 2024)])
            .collect();
        let roster = active_abbreviations(&franchises, static_teams(), 1996);
        assert_eq!(roster, static_abbreviations());
        assert!(roster.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn no_franchises_no_roster() {
        assert!(active_abbreviations(&[], static_teams(), 1996).is_empty());
    }
}
