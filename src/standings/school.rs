use serde::Serialize;
use std::collections::HashMap;

use crate::scoring::ScoringRecord;

/// Number of records per (school, tournament) that count toward the
/// school's score.
pub const COUNTED_PER_TOURNAMENT: usize = 2;

/// One row of the school standings table.
#[derive(Debug, Clone, Serialize)]
pub struct SchoolStanding {
    pub school: String,
    /// Capped point sum per tournament, including 0 entries for
    /// tournaments the school skipped.
    pub tournament_points: HashMap<String, u32>,
    pub total_points: u32,
}

impl SchoolStanding {
    /// Capped points for one tournament, 0 if the school never appeared.
    pub fn points_in(&self, tournament: &str) -> u32 {
        self.tournament_points.get(tournament).copied().unwrap_or(0)
    }
}

/// Rank schools by the sum of their capped per-tournament scores.
///
/// A school's score for one tournament counts only its two
/// highest-scoring records there; one record counts alone and no records
/// count 0. The cap operates on records, not entrants, so an entrant
/// doubled up in the data could occupy both slots. Equal totals sort
/// ascending by school name - the source system never specified a
/// tie-break, this one is chosen for reproducible output.
pub fn rank_schools(records: &[ScoringRecord], tournaments: &[String]) -> Vec<SchoolStanding> {
    let mut by_school: HashMap<&str, Vec<&ScoringRecord>> = HashMap::new();
    for record in records {
        by_school.entry(&record.school).or_default().push(record);
    }

    let mut standings: Vec<SchoolStanding> = by_school
        .into_iter()
        .map(|(school, group)| {
            let mut tournament_points: HashMap<String, u32> = HashMap::new();
            for tournament in tournaments {
                let mut points: Vec<u32> = group
                    .iter()
                    .filter(|r| r.tournament == *tournament)
                    .map(|r| r.points)
                    .collect();
                points.sort_unstable_by(|a, b| b.cmp(a));
                let capped = points.iter().take(COUNTED_PER_TOURNAMENT).sum();
                tournament_points.insert(tournament.clone(), capped);
            }
            SchoolStanding {
                school: school.to_string(),
                total_points: tournament_points.values().sum(),
                tournament_points,
            }
        })
        .collect();

    standings.sort_by(|a, b| {
        b.total_points
            .cmp(&a.total_points)
            .then_with(|| a.school.cmp(&b.school))
    });
    standings
}
