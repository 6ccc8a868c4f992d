pub mod reader;
pub mod types;

pub use reader::read_rows;
pub use types::RawResultRow;
