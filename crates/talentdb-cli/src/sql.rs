//! `sql` command handler.

use std::io::Write;
use std::path::Path;

use talentdb_sql::{read_records_file, render_sql, rows_from_records, SqlMode};

/// Reads the CSV at `path` and prints the replacement SQL to stdout.
///
/// # Errors
///
/// Returns an error if the file cannot be read, a row is missing a column, or
/// stdout cannot be written.
pub(crate) fn run_sql(
    config: &talentdb_core::AppConfig,
    path: &Path,
    mode: SqlMode,
) -> anyhow::Result<()> {
    let records = read_records_file(path)
        .map_err(|e| anyhow::anyhow!("failed to read {}: {e}", path.display()))?;
    let rows = rows_from_records(config.owner_id, records);
    tracing::info!(rows = rows.len(), ?mode, table = %config.table, "rendering SQL");

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    render_sql(&mut out, &config.table, mode, &rows)?;
    out.flush()?;
    Ok(())
}
