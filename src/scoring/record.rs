use crate::ingest::RawResultRow;

/// One entrant's appearance at one tournament, with its point total.
///
/// Records are plain values. The expander produces them with base points
/// (participation + elimination points); the bonus pass returns new
/// records with the placement bonus folded in. Nothing mutates a record
/// after that.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoringRecord {
    /// `school:name` - unique per individual, shared across tournaments.
    pub entrant_id: String,
    pub school: String,
    pub tournament: String,
    pub year: String, // informational, not used in scoring
    /// Finishing place; 0 means the place was blank or unparsable.
    pub place: u32,
    pub elim_points: u32,
    pub points: u32,
}

/// Expand one raw row into per-entrant scoring records.
///
/// A row missing its tournament, year, entry, or school (after trimming)
/// is dropped and produces nothing. The entry field splits on `&` into
/// individual names, one record each, all sharing the row's place and
/// elimination points. An unparsable place or elimination-points cell
/// silently defaults to 0 - a bad number means "no information", not an
/// error.
pub fn expand_row(row: &RawResultRow) -> Vec<ScoringRecord> {
    let tournament = row.tournament.trim();
    let year = row.year.trim();
    let entry = row.entry.trim();
    let school = row.school.trim();

    if tournament.is_empty() || year.is_empty() || entry.is_empty() || school.is_empty() {
        return Vec::new();
    }

    let place = row.place.trim().parse::<u32>().unwrap_or(0);
    let elim_points = row.elim_points.trim().parse::<u32>().unwrap_or(0);

    entry
        .split('&')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(|name| ScoringRecord {
            entrant_id: format!("{}:{}", school, name),
            school: school.to_string(),
            tournament: tournament.to_string(),
            year: year.to_string(),
            place,
            elim_points,
            // Showing up is always worth 1 point on top of elim points
            points: 1 + elim_points,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_row(entry: &str) -> RawResultRow {
        RawResultRow {
            tournament: "City Open".to_string(),
            year: "2024".to_string(),
            place: "3".to_string(),
            entry: entry.to_string(),
            school: "Central".to_string(),
            elim_points: "2".to_string(),
        }
    }

    #[test]
    fn test_single_entrant() {
        let records = expand_row(&sample_row("Alice"));
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].entrant_id, "Central:Alice");
        assert_eq!(records[0].school, "Central");
        assert_eq!(records[0].tournament, "City Open");
        assert_eq!(records[0].place, 3);
        assert_eq!(records[0].elim_points, 2);
        assert_eq!(records[0].points, 3); // 1 participation + 2 elim
    }

    #[test]
    fn test_team_entry_expands_per_name() {
        let records = expand_row(&sample_row("Alice & Bob"));
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].entrant_id, "Central:Alice");
        assert_eq!(records[1].entrant_id, "Central:Bob");
        // Both carry identical tournament data and base points
        assert_eq!(records[0].place, records[1].place);
        assert_eq!(records[0].points, records[1].points);
    }

    #[test]
    fn test_empty_name_segments_skipped() {
        let records = expand_row(&sample_row("Alice & & Bob &"));
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].entrant_id, "Central:Alice");
        assert_eq!(records[1].entrant_id, "Central:Bob");
    }

    #[test]
    fn test_blank_required_field_drops_row() {
        for field in ["tournament", "year", "entry", "school"] {
            let mut row = sample_row("Alice");
            match field {
                "tournament" => row.tournament = "  ".to_string(),
                "year" => row.year = String::new(),
                "entry" => row.entry = " ".to_string(),
                _ => row.school = String::new(),
            }
            assert!(expand_row(&row).is_empty(), "blank {} should drop row", field);
        }
    }

    #[test]
    fn test_unparsable_place_defaults_to_sentinel() {
        let mut row = sample_row("Alice");
        row.place = "DNF".to_string();
        let records = expand_row(&row);
        assert_eq!(records[0].place, 0);
    }

    #[test]
    fn test_negative_place_defaults_to_sentinel() {
        let mut row = sample_row("Alice");
        row.place = "-2".to_string();
        assert_eq!(expand_row(&row)[0].place, 0);
    }

    #[test]
    fn test_unparsable_elim_points_default_to_zero() {
        let mut row = sample_row("Alice");
        row.elim_points = "n/a".to_string();
        let records = expand_row(&row);
        assert_eq!(records[0].elim_points, 0);
        assert_eq!(records[0].points, 1); // participation only
    }

    #[test]
    fn test_fields_trimmed() {
        let mut row = sample_row("  Alice  ");
        row.school = " Central ".to_string();
        let records = expand_row(&row);
        assert_eq!(records[0].entrant_id, "Central:Alice");
    }
}
