//! Terminal presentation: colors, status messages and candidate tables.

pub mod candidate_table;
pub mod output_format;
pub mod theme;
