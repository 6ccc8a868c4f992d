use serde::Serialize;

use crate::ingest::RawResultRow;
use crate::scoring::{apply_bonuses, expand_row, ScoringRecord};
use crate::standings::{
    rank_entrants, rank_schools, tournament_columns, EntrantStanding, SchoolStanding,
};

/// Both standings tables plus the tournament column order they share.
#[derive(Debug, Clone, Serialize)]
pub struct Standings {
    /// Distinct tournament names in first-seen order; the per-tournament
    /// columns of both tables follow this order.
    pub tournaments: Vec<String>,
    pub entrants: Vec<EntrantStanding>,
    pub schools: Vec<SchoolStanding>,
}

/// Run the full pipeline: expand raw rows into per-entrant records, add
/// placement bonuses per tournament, then rank entrants and schools off
/// the same adjusted record set.
///
/// This function is called from main.rs after ingestion. It cannot fail:
/// rows with missing required fields are dropped during expansion, bad
/// numeric cells default to 0, and empty input produces empty tables.
pub fn compute_standings(rows: &[RawResultRow]) -> Standings {
    let records: Vec<ScoringRecord> = rows.iter().flat_map(expand_row).collect();
    // Bonuses need complete tournament groups, so expansion finishes first
    let records = apply_bonuses(records);

    let tournaments = tournament_columns(&records);
    let entrants = rank_entrants(&records);
    let schools = rank_schools(&records, &tournaments);

    Standings {
        tournaments,
        entrants,
        schools,
    }
}
