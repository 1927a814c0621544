use std::io::{self, Write};

use talentdb_core::{ProfileRecord, TalentRow, TALENT_COLUMNS};
use uuid::Uuid;

/// How insert statements are laid out. Both modes share every field rule.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SqlMode {
    /// One `INSERT` carrying every row, tuples separated by `,\n`.
    #[default]
    Batch,
    /// One `INSERT` per row.
    PerRow,
}

/// Doubles every single quote. Applied exactly once per value, at render time.
#[must_use]
pub fn escape_sql_literal(value: &str) -> String {
    value.replace('\'', "''")
}

/// Maps records to destination rows, injecting the owner id and status.
#[must_use]
pub fn rows_from_records(owner_id: Uuid, records: Vec<ProfileRecord>) -> Vec<TalentRow> {
    records
        .into_iter()
        .map(|record| TalentRow::from_record(owner_id, record))
        .collect()
}

/// Writes the `DELETE` statement followed by the inserts for `rows`.
///
/// With no rows only the `DELETE` is written.
///
/// # Errors
///
/// Propagates write failures from `out`.
pub fn render_sql<W: Write>(
    mut out: W,
    table: &str,
    mode: SqlMode,
    rows: &[TalentRow],
) -> io::Result<()> {
    writeln!(out, "DELETE FROM {table};")?;
    if rows.is_empty() {
        return Ok(());
    }

    let columns = TALENT_COLUMNS.join(", ");
    match mode {
        SqlMode::Batch => {
            let tuples: Vec<String> = rows.iter().map(value_tuple).collect();
            writeln!(
                out,
                "INSERT INTO {table} ({columns}) VALUES {};",
                tuples.join(",\n")
            )?;
        }
        SqlMode::PerRow => {
            for row in rows {
                writeln!(
                    out,
                    "INSERT INTO {table} ({columns}) VALUES {};",
                    value_tuple(row)
                )?;
            }
        }
    }
    Ok(())
}

fn value_tuple(row: &TalentRow) -> String {
    let literals: Vec<String> = row
        .values()
        .iter()
        .map(|value| format!("'{}'", escape_sql_literal(value)))
        .collect();
    format!("({})", literals.join(", "))
}

#[cfg(test)]
#[path = "render_test.rs"]
mod tests;
