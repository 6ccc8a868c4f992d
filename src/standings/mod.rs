pub mod entrant;
pub mod school;

pub use entrant::{rank_entrants, EntrantStanding};
pub use school::{rank_schools, SchoolStanding};

use std::collections::HashSet;

use crate::scoring::ScoringRecord;

/// Distinct tournament names in first-seen order.
///
/// Computed once over the full bonus-adjusted record set and shared by
/// the school aggregator and both table renderers, so the
/// per-tournament columns always line up between tables.
pub fn tournament_columns(records: &[ScoringRecord]) -> Vec<String> {
    let mut seen = HashSet::new();
    records
        .iter()
        .filter(|r| seen.insert(r.tournament.as_str()))
        .map(|r| r.tournament.clone())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_record(tournament: &str) -> ScoringRecord {
        ScoringRecord {
            entrant_id: "Central:Alice".to_string(),
            school: "Central".to_string(),
            tournament: tournament.to_string(),
            year: "2024".to_string(),
            place: 1,
            elim_points: 0,
            points: 1,
        }
    }

    #[test]
    fn test_first_seen_order() {
        let records = vec![
            sample_record("Regionals"),
            sample_record("City Open"),
            sample_record("Regionals"),
            sample_record("State"),
            sample_record("City Open"),
        ];
        assert_eq!(
            tournament_columns(&records),
            ["Regionals", "City Open", "State"]
        );
    }

    #[test]
    fn test_empty_records() {
        assert!(tournament_columns(&[]).is_empty());
    }
}
