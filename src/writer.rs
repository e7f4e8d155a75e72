use std::io::Write;

use csv::WriterBuilder;

use crate::error::RecordError;
use crate::file_type::RecordFileType;
use crate::record::Record;

/// Write records as delimited rows, one per line.
///
/// Rows end with `\n`. Field values that contain the delimiter, a quote, or
/// a line break are quoted so the parser reads them back unchanged.
pub fn write_records<W: Write>(
    output: &mut W,
    records: &[Record],
    file_type: &RecordFileType,
) -> Result<(), RecordError> {
    let mut writer = WriterBuilder::new()
        .delimiter(file_type.delimiter() as u8)
        .from_writer(output);
    for record in records {
        writer.write_record(&record.to_fields())?;
    }
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::birth_date::BirthDate;

    #[test]
    fn test_quotes_fields_holding_the_delimiter() {
        let record = Record::new(
            "Smith, Jr".to_string(),
            "Ann".to_string(),
            "a@b.c".to_string(),
            "blue".to_string(),
            BirthDate::parse("01/02/1990").unwrap(),
        );
        let mut buffer = Vec::new();
        write_records(&mut buffer, &[record], &RecordFileType::Comma).unwrap();
        assert_eq!(
            String::from_utf8(buffer).unwrap(),
            "\"Smith, Jr\",Ann,a@b.c,blue,01/02/1990\n"
        );
    }
}
