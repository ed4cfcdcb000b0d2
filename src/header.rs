//! CSV header row extraction.
//!
//! Reads only the first record of a comma-separated file, honouring
//! standard CSV quoting, and returns its fields trimmed of surrounding
//! whitespace. A blank first line means the file has no headers; later
//! lines are never promoted to the header row.

use crate::error::{AnalyzerError, Result};
use csv::{ReaderBuilder, StringRecord};
use std::fs::File;
use std::io::{BufRead, BufReader, ErrorKind, Read};
use std::path::Path;
use tracing::debug;

/// Read the header fields from the first row of a CSV file
pub fn read_csv_headers(file_path: &Path) -> Result<Vec<String>> {
    let file = File::open(file_path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => AnalyzerError::InputNotFound {
            path: file_path.to_path_buf(),
        },
        _ => AnalyzerError::Io(e),
    })?;

    let headers = parse_header_row(file)?.ok_or_else(|| AnalyzerError::NoHeaders {
        path: file_path.to_path_buf(),
    })?;

    if headers.iter().all(String::is_empty) {
        return Err(AnalyzerError::NoHeaders {
            path: file_path.to_path_buf(),
        });
    }

    debug!(
        "Read {} header fields from {}",
        headers.len(),
        file_path.display()
    );

    Ok(headers)
}

/// Parse the first record from a reader; `None` when the first line is blank
pub fn parse_header_row<R: Read>(reader: R) -> Result<Option<Vec<String>>> {
    let mut reader = BufReader::new(reader);
    let mut first_line = Vec::new();
    reader.read_until(b'\n', &mut first_line)?;

    // The csv reader skips blank lines, so check before handing it over
    if first_line.iter().all(|byte| matches!(byte, b'\r' | b'\n')) {
        return Ok(None);
    }

    // Remaining input stays chained so quoted fields may span lines
    let mut csv_reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(first_line.as_slice().chain(reader));

    let mut record = StringRecord::new();
    if !csv_reader.read_record(&mut record)? {
        return Ok(None);
    }

    Ok(Some(
        record.iter().map(|field| field.trim().to_string()).collect(),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_reads_only_first_row() {
        let mut temp_file = NamedTempFile::new().unwrap();
        writeln!(temp_file, "invoice_id,amount,payment_date,notes").unwrap();
        writeln!(temp_file, "INV-1,10.50,2024-01-01,first").unwrap();
        writeln!(temp_file, "INV-2,3.00,2024-01-02").unwrap();

        let headers = read_csv_headers(temp_file.path()).unwrap();
        assert_eq!(headers, vec!["invoice_id", "amount", "payment_date", "notes"]);
    }

    #[test]
    fn test_trims_and_honours_quotes() {
        let headers = parse_header_row(" order_id ,\"city, state\",qty \n".as_bytes())
            .unwrap()
            .unwrap();
        assert_eq!(headers, vec!["order_id", "city, state", "qty"]);
    }

    #[test]
    fn test_trailing_comma_gives_empty_field() {
        let headers = parse_header_row("amount,notes,\n".as_bytes())
            .unwrap()
            .unwrap();
        assert_eq!(headers, vec!["amount", "notes", ""]);
    }

    #[test]
    fn test_header_without_newline() {
        let headers = parse_header_row("email".as_bytes()).unwrap().unwrap();
        assert_eq!(headers, vec!["email"]);
    }

    #[test]
    fn test_empty_input_has_no_record() {
        assert!(parse_header_row("".as_bytes()).unwrap().is_none());
    }

    #[test]
    fn test_blank_first_line_has_no_record() {
        assert!(parse_header_row("\ninvoice_id,amount\n".as_bytes())
            .unwrap()
            .is_none());
        assert!(parse_header_row("\r\ninvoice_id,amount\r\n".as_bytes())
            .unwrap()
            .is_none());
    }

    #[test]
    fn test_quoted_header_spanning_lines() {
        let headers = parse_header_row("\"order\nnotes\",amount\n1,2\n".as_bytes())
            .unwrap()
            .unwrap();
        assert_eq!(headers, vec!["order\nnotes", "amount"]);
    }

    #[test]
    fn test_blank_first_line_file_has_no_headers() {
        let mut temp_file = NamedTempFile::new().unwrap();
        write!(temp_file, "\ninvoice_id,amount\n").unwrap();

        let err = read_csv_headers(temp_file.path()).unwrap_err();
        assert!(matches!(err, AnalyzerError::NoHeaders { .. }));
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.csv");

        let err = read_csv_headers(&missing).unwrap_err();
        assert!(matches!(err, AnalyzerError::InputNotFound { .. }));
    }

    #[test]
    fn test_empty_file_has_no_headers() {
        let temp_file = NamedTempFile::new().unwrap();

        let err = read_csv_headers(temp_file.path()).unwrap_err();
        assert!(matches!(err, AnalyzerError::NoHeaders { .. }));
    }

    #[test]
    fn test_invalid_utf8_is_a_read_error() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(b"name,\xff\xfe_bad\n").unwrap();

        let err = read_csv_headers(temp_file.path()).unwrap_err();
        assert!(matches!(err, AnalyzerError::Csv(_)));
    }
}
