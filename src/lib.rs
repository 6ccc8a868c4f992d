pub mod compute;
pub mod ingest;
pub mod output;
pub mod scoring;
pub mod standings;

pub use compute::{compute_standings, Standings};
