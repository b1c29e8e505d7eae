// src/core/table.rs
//
// The stats API answers every endpoint with the same tabular envelope:
//   { "resultSets": [ { "name": "...", "headers": [...], "rowSet": [[...], ...] } ] }
// Some endpoints use a single `resultSet` object instead of the array.

use serde::Deserialize;
use serde_json::Value;

use crate::error::{AppError, Result};

#[derive(Clone, Debug, Deserialize)]
pub struct StatsResponse {
    #[serde(default)]
    pub resource: Option<String>,
    #[serde(rename = "resultSets", alias = "resultSet")]
    result_sets: ResultSets,
}

#[derive(Clone, Debug, Deserialize)]
#[serde(untagged)]
enum ResultSets {
    Many(Vec<Table>),
    One(Table),
}

/// One named result set: headers + rows of loosely typed JSON cells.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
pub struct Table {
    pub name: String,
    pub headers: Vec<String>,
    #[serde(rename = "rowSet")]
    pub rows: Vec<Vec<Value>>,
}

impl StatsResponse {
    pub fn from_json(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    pub fn tables(&self) -> &[Table] {
        match &self.result_sets {
            ResultSets::Many(v) => v,
            ResultSets::One(t) => std::slice::from_ref(t),
        }
    }

    /// Look up a result set by name (case-insensitive).
    pub fn table(&self, name: &str) -> Result<&Table> {
        self.tables()
            .iter()
            .find(|t| t.name.eq_ignore_ascii_case(name))
            .ok_or_else(|| AppError::MissingResultSet { name: s!(name) })
    }
}

impl Table {
    #[inline]
    pub fn row_count(&self) -> usize { self.rows.len() }

    /// Column index by header name (case-insensitive).
    pub fn column(&self, name: &str) -> Result<usize> {
        self.headers
            .iter()
            .position(|h| h.eq_ignore_ascii_case(name))
            .ok_or_else(|| AppError::missing_column(name))
    }

    /// Like `column`, for fields we can live without.
    pub fn optional_column(&self, name: &str) -> Option<usize> {
        self.column(name).ok()
    }
}

/// Cell as text. Strings pass through, numbers/bools are formatted,
/// null and missing cells are `None`.
pub fn cell_str(row: &[Value], ix: usize) -> Option<String> {
    match row.get(ix)? {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        other => Some(other.to_string()),
    }
}

/// Cell as an integer. Accepts JSON numbers and numeric strings
/// (the API is inconsistent, e.g. franchise years come back as "1946").
pub fn cell_i64(row: &[Value], ix: usize) -> Option<i64> {
    match row.get(ix)? {
        Value::Number(n) => n.as_i64().or_else(|| n.as_f64().map(|f| f as i64)),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

pub fn cell_f64(row: &[Value], ix: usize) -> Option<f64> {
    match row.get(ix)? {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parses_result_sets_array_and_single() {
        let many = json!({
            "resource": "x",
            "resultSets": [
                { "name": "A", "headers": ["ID"], "rowSet": [[1], [2]] },
                { "name": "B", "headers": [], "rowSet": [] }
            ]
        });
        let r = StatsResponse::from_json(&many.to_string()).unwrap();
        assert_eq!(r.tables().len(), 2);
        assert_eq!(r.table("a").unwrap().row_count(), 2);
        assert!(matches!(r.table("C"), Err(AppError::MissingResultSet { .. })));

        let one = json!({ "resultSet": { "name": "Only", "headers": ["X"], "rowSet": [["y"]] } });
        let r = StatsResponse::from_json(&one.to_string()).unwrap();
        assert_eq!(r.tables().len(), 1);
        assert_eq!(r.table("Only").unwrap().headers, vec!["X"]);
    }

    #[test]
    fn cells_are_lenient() {
        let row = vec![json!("1996"), json!(2023), json!(null), json!("n/a"), json!(1.5)];
        assert_eq!(cell_i64(&row, 0), Some(1996));
        assert_eq!(cell_i64(&row, 1), Some(2023));
        assert_eq!(cell_i64(&row, 2), None);
        assert_eq!(cell_i64(&row, 3), None);
        assert_eq!(cell_i64(&row, 9), None);
        assert_eq!(cell_str(&row, 1).as_deref(), Some("2023"));
        assert_eq!(cell_str(&row, 2), None);
        assert_eq!(cell_f64(&row, 4), Some(1.5));
    }

    #[test]
    fn column_lookup_ignores_case() {
        let t = Table {
            name: s!("T"),
            headers: vec![s!("GAME_ID"), s!("MATCHUP")],
            rows: vec![],
        };
        assert_eq!(t.column("matchup").unwrap(), 1);
        assert!(t.optional_column("WL").is_none());
        assert!(matches!(t.column("WL"), Err(AppError::MissingColumn { .. })));
    }
}
