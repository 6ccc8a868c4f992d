pub mod formatter;

pub use formatter::{
    format_entrant_table, format_entrant_tsv, format_json, format_school_table,
    format_school_tsv, should_use_colors,
};
