//! Renders scraped profile rows as SQL for the talents table.
//!
//! The output is plain text: one `DELETE FROM <table>;` followed by either a
//! single multi-row `INSERT` or one `INSERT` per row. Values are embedded as
//! quoted literals with single quotes doubled and no other escaping, so the
//! input is assumed to carry no other SQL-significant characters.

mod input;
mod render;

pub use input::{read_records, read_records_file};
pub use render::{escape_sql_literal, render_sql, rows_from_records, SqlMode};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SqlError {
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
