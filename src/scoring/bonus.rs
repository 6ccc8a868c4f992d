use std::collections::HashMap;

use super::record::ScoringRecord;

/// Field size at or below which the top-half rule applies.
pub const SMALL_FIELD_MAX: usize = 12;
/// Bonus for winning a large field.
pub const CHAMPION_BONUS: u32 = 2;
/// Bonus for a top-half place in a small field, or places
/// 2..=FINALIST_PLACE_MAX in a large field.
pub const FINALIST_BONUS: u32 = 1;
/// Deepest place that still earns a bonus in a large field.
pub const FINALIST_PLACE_MAX: u32 = 8;

/// Placement bonus for one record in a field of `field_size` records.
///
/// Small fields (at most [`SMALL_FIELD_MAX`] records) award
/// [`FINALIST_BONUS`] to the top half, cutoff = ceil(n/2). An unknown
/// place is the sentinel 0 and always clears that cutoff, so it earns
/// the small-field bonus; in a large field the same sentinel earns
/// nothing. That asymmetry is inherited from the historical scoring run
/// and kept so old seasons re-score identically.
pub fn placement_bonus(place: u32, field_size: usize) -> u32 {
    if field_size <= SMALL_FIELD_MAX {
        let cutoff = (field_size as u32 + 1) / 2;
        if place <= cutoff {
            FINALIST_BONUS
        } else {
            0
        }
    } else if place == 1 {
        CHAMPION_BONUS
    } else if (2..=FINALIST_PLACE_MAX).contains(&place) {
        FINALIST_BONUS
    } else {
        0
    }
}

/// Add placement bonuses to a full record set.
///
/// The field size is the count of expanded records in each tournament,
/// so a two-person team counts twice. Tournaments score independently of
/// each other. Returns new records, in the same order as the input, with
/// the bonus added on top of the existing points.
pub fn apply_bonuses(records: Vec<ScoringRecord>) -> Vec<ScoringRecord> {
    let mut field_sizes: HashMap<String, usize> = HashMap::new();
    for record in &records {
        *field_sizes.entry(record.tournament.clone()).or_insert(0) += 1;
    }

    records
        .into_iter()
        .map(|record| {
            let bonus = placement_bonus(record.place, field_sizes[&record.tournament]);
            ScoringRecord {
                points: record.points + bonus,
                ..record
            }
        })
        .collect()
}
