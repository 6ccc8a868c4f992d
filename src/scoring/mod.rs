pub mod bonus;
pub mod record;

pub use bonus::{apply_bonuses, placement_bonus};
pub use record::{expand_row, ScoringRecord};
