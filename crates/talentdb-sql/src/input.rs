use std::io::Read;
use std::path::Path;

use talentdb_core::ProfileRecord;

use crate::SqlError;

/// Reads profile records from CSV with a header row.
///
/// Columns are matched by header name, so order does not matter and extra
/// columns are ignored. A missing column fails the whole read.
///
/// # Errors
///
/// Returns [`SqlError::Csv`] for malformed CSV or a missing column.
pub fn read_records<R: Read>(reader: R) -> Result<Vec<ProfileRecord>, SqlError> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let records = csv_reader
        .deserialize::<ProfileRecord>()
        .collect::<Result<Vec<_>, _>>()?;
    tracing::debug!(records = records.len(), "read profile records");
    Ok(records)
}

/// Opens `path` and reads profile records from it.
///
/// # Errors
///
/// Returns [`SqlError::Io`] if the file cannot be opened, or
/// [`SqlError::Csv`] as for [`read_records`].
pub fn read_records_file(path: &Path) -> Result<Vec<ProfileRecord>, SqlError> {
    let file = std::fs::File::open(path)?;
    read_records(file)
}
