use csv::ReaderBuilder;

use crate::error::RecordError;
use crate::file_type::RecordFileType;
use crate::record::Record;

/// Parse a whole document of delimited person records.
///
/// Rows are split with the delimiter of `file_type`. Quoted fields may
/// contain the delimiter or line breaks; blank lines between rows are
/// ignored. Every row must carry exactly [Record::ARITY] fields and a
/// parseable date of birth, otherwise the error names the offending row.
///
/// ```
/// use record_sort::file_type::RecordFileType;
/// use record_sort::parser::parse_records;
///
/// let records = parse_records("Smith,Ann,a@b.c,blue,01/02/1990\n", &RecordFileType::Comma)?;
/// assert_eq!(records.len(), 1);
/// assert_eq!(records[0].first_name(), "Ann");
/// # Ok::<(), record_sort::error::RecordError>(())
/// ```
pub fn parse_records(data: &str, file_type: &RecordFileType) -> Result<Vec<Record>, RecordError> {
    let rows = read_rows(data, file_type)?;
    let mut records = Vec::with_capacity(rows.len());
    for (index, fields) in rows.into_iter().enumerate() {
        let record = Record::from_fields(fields).map_err(|e| match e {
            RecordError::MalformedRecord { reason } => {
                RecordError::malformed(format!("row {}: {}", index + 1, reason))
            }
            other => other,
        })?;
        records.push(record);
    }
    Ok(records)
}

/// Parse exactly one delimited record.
///
/// Used where the input is a single record by contract, for example a record
/// submitted over the API. Empty input and input that splits into more than
/// one row are malformed.
pub fn parse_record(line: &str, file_type: &RecordFileType) -> Result<Record, RecordError> {
    let mut rows = read_rows(line, file_type)?;
    match rows.len() {
        0 => Err(RecordError::malformed("record is empty")),
        1 => Record::from_fields(rows.pop().unwrap_or_default()),
        n => Err(RecordError::malformed(format!(
            "expected a single record, got {} rows",
            n
        ))),
    }
}

fn read_rows(data: &str, file_type: &RecordFileType) -> Result<Vec<Vec<String>>, RecordError> {
    let mut reader = ReaderBuilder::new()
        .delimiter(file_type.delimiter() as u8)
        .has_headers(false)
        .flexible(true)
        .from_reader(data.as_bytes());
    let mut rows = Vec::new();
    for result in reader.records() {
        let row = result?;
        rows.push(row.iter().map(str::to_string).collect());
    }
    Ok(rows)
}
