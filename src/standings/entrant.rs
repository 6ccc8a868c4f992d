use serde::Serialize;
use std::collections::HashMap;

use crate::scoring::ScoringRecord;

/// One row of the entrant standings table.
#[derive(Debug, Clone, Serialize)]
pub struct EntrantStanding {
    pub entrant_id: String,
    pub school: String,
    /// Count of distinct tournaments this entrant appeared in.
    pub tournaments_attended: usize,
    /// Points per tournament. Tournaments the entrant skipped are absent
    /// here; [`EntrantStanding::points_in`] reads those as 0.
    pub tournament_points: HashMap<String, u32>,
    pub total_points: u32,
}

impl EntrantStanding {
    /// Points scored in one tournament, 0 if the entrant never appeared.
    pub fn points_in(&self, tournament: &str) -> u32 {
        self.tournament_points.get(tournament).copied().unwrap_or(0)
    }
}

/// Group bonus-adjusted records by entrant and rank by total points.
///
/// An entrant normally has one record per tournament; per-tournament
/// cells sum anyway in case the source data doubles one up. Equal totals
/// sort ascending by entrant id so reruns always print the same order.
pub fn rank_entrants(records: &[ScoringRecord]) -> Vec<EntrantStanding> {
    let mut groups: HashMap<&str, Vec<&ScoringRecord>> = HashMap::new();
    for record in records {
        groups.entry(&record.entrant_id).or_default().push(record);
    }

    let mut standings: Vec<EntrantStanding> = groups
        .into_values()
        .map(|group| {
            let mut tournament_points: HashMap<String, u32> = HashMap::new();
            for record in &group {
                *tournament_points
                    .entry(record.tournament.clone())
                    .or_insert(0) += record.points;
            }
            EntrantStanding {
                entrant_id: group[0].entrant_id.clone(),
                school: group[0].school.clone(),
                tournaments_attended: tournament_points.len(),
                total_points: group.iter().map(|r| r.points).sum(),
                tournament_points,
            }
        })
        .collect();

    standings.sort_by(|a, b| {
        b.total_points
            .cmp(&a.total_points)
            .then_with(|| a.entrant_id.cmp(&b.entrant_id))
    });
    standings
}
