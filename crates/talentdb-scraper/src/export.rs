//! CSV output for scraped records.

use std::io::Write;
use std::path::Path;

use talentdb_core::{ProfileRecord, CSV_HEADERS};

use crate::error::ScraperError;

/// Writes the header row followed by one row per record.
///
/// The header is written even when `records` is empty so the file always
/// carries the column names the SQL generator expects.
///
/// # Errors
///
/// Returns [`ScraperError::Csv`] if a row cannot be written.
pub fn write_records_csv<W: Write>(
    writer: W,
    records: &[ProfileRecord],
) -> Result<(), ScraperError> {
    let mut csv_writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);
    csv_writer.write_record(CSV_HEADERS)?;
    for record in records {
        csv_writer.serialize(record)?;
    }
    csv_writer.flush()?;
    Ok(())
}

/// Creates (or truncates) `path` and writes the records to it.
///
/// # Errors
///
/// Returns [`ScraperError::Io`] if the file cannot be created, or
/// [`ScraperError::Csv`] if a row cannot be written.
pub fn write_records_csv_file(path: &Path, records: &[ProfileRecord]) -> Result<(), ScraperError> {
    let file = std::fs::File::create(path)?;
    write_records_csv(file, records)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writes_header_for_empty_input() {
        let mut buf = Vec::new();
        write_records_csv(&mut buf, &[]).unwrap();
        assert_eq!(
            String::from_utf8(buf).unwrap(),
            "Name,Page URL,Image URL,Bio,Instagram,Instagram Followers,TikTok,TikTok Followers\n"
        );
    }

    #[test]
    fn writes_rows_in_column_order_with_quoting() {
        let record = ProfileRecord {
            name: "Jane Doe".to_owned(),
            page_url: "https://example.com/talent/jane".to_owned(),
            image_url: "https://cdn.example.com/jane.jpg".to_owned(),
            bio: "Runner, baker".to_owned(),
            instagram_ref: "https://instagram.com/janedoe".to_owned(),
            instagram_followers: "12,345".to_owned(),
            tiktok_ref: String::new(),
            tiktok_followers: String::new(),
        };
        let mut buf = Vec::new();
        write_records_csv(&mut buf, &[record]).unwrap();
        let text = String::from_utf8(buf).unwrap();
        let second_line = text.lines().nth(1).unwrap();
        assert_eq!(
            second_line,
            "Jane Doe,https://example.com/talent/jane,https://cdn.example.com/jane.jpg,\"Runner, baker\",https://instagram.com/janedoe,\"12,345\",,"
        );
    }
}
