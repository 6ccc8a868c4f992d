use serde::Deserialize;

/// One row of the source results export, exactly as read.
///
/// Every field is kept as a string; numeric fields are parsed later by
/// the expander so a bad cell never fails ingestion.
#[derive(Debug, Clone, Deserialize)]
pub struct RawResultRow {
    pub tournament: String,
    pub year: String,
    #[serde(default)]
    pub place: String, // finishing place, possibly blank or unparsable
    pub entry: String, // one or more names joined by '&'
    pub school: String,
    #[serde(default)]
    pub elim_points: String, // elimination-round points, blank if none
}
