//! Spec for `franchisehistory`.
//!
//! The first result set (`FranchiseHistory`) lists active franchises: one
//! summary row per franchise plus one row per historical city/name. The
//! second (`DefunctTeams`) is ignored. Years come back as strings.

use crate::core::{StatsClient, StatsResponse, table::{cell_i64, cell_str}};
use crate::error::Result;
use crate::model::FranchiseRecord;

pub const ENDPOINT: &str = "franchisehistory";
pub const RESULT_SET: &str = "FranchiseHistory";

pub fn params(client: &StatsClient) -> Vec<(&'static str, String)> {
    vec![("LeagueID", s!(client.league_id()))]
}

pub fn fetch(client: &StatsClient) -> Result<Vec<FranchiseRecord>> {
    let doc = client.get(ENDPOINT, &params(client))?;
    parse_doc(&doc)
}

pub fn parse_doc(doc: &StatsResponse) -> Result<Vec<FranchiseRecord>> {
    let t = doc.table(RESULT_SET)?;
    let team_id = t.column("TEAM_ID")?;
    let start = t.column("START_YEAR")?;
    let end = t.column("END_YEAR")?;
    let city = t.optional_column("TEAM_CITY");
    let name = t.optional_column("TEAM_NAME");

    let mut out = Vec::with_capacity(t.row_count());
    for row in &t.rows {
        let (Some(id), Some(start_year), Some(end_year)) = (
            cell_i64(row, team_id).and_then(|v| u64::try_from(v).ok()),
            cell_i64(row, start).and_then(|v| i32::try_from(v).ok()),
            cell_i64(row, end).and_then(|v| i32::try_from(v).ok()),
        )
        else {
            logd!("Franchises: skipping row with unusable id/years: {:?}", row);
            continue;
        };
        out.push(FranchiseRecord {
            team_id: id,
            team_city: city.and_then(|c| cell_str(row, c)).unwrap_or_default(),
            team_name: name.and_then(|c| cell_str(row, c)).unwrap_or_default(),
            start_year,
            end_year,
        });
    }
    Ok(out)
}
