use record_sort::birth_date::BirthDate;
use record_sort::error::RecordError;
use record_sort::record::Record;
use record_sort::sort::sort_records;

fn record(last_name: &str, first_name: &str, email: &str, color: &str, date: &str) -> Record {
    Record::new(
        last_name.to_string(),
        first_name.to_string(),
        email.to_string(),
        color.to_string(),
        BirthDate::parse(date).unwrap(),
    )
}

fn last_names(records: &[Record]) -> Vec<&str> {
    records.iter().map(|record| record.last_name()).collect()
}

fn first_names(records: &[Record]) -> Vec<&str> {
    records.iter().map(|record| record.first_name()).collect()
}

#[test]
fn test_sorts_by_last_name_in_both_directions() -> Result<(), anyhow::Error> {
    let records = vec![
        record("alast", "first", "email", "pumice", "3-3-3333"),
        record("$last", "first", "email", "pumice", "3-3-3333"),
        record("Llast", "first", "email", "pumice", "3-3-3333"),
        record("zlast", "first", "email", "pumice", "3-3-3333"),
    ];

    let sorted = sort_records(&records, &["0,DESC".to_string()])?;
    assert_eq!(last_names(&sorted), vec!["zlast", "alast", "Llast", "$last"]);

    let sorted = sort_records(&records, &["0,ASC".to_string()])?;
    assert_eq!(last_names(&sorted), vec!["$last", "Llast", "alast", "zlast"]);
    Ok(())
}

#[test]
fn test_sorts_dates_as_calendar_values() -> Result<(), anyhow::Error> {
    let records = vec![
        record("smith", "first", "a@b.c", "pumice", "1-3-3001"),
        record("smith", "first", "i@b.c", "pumice", "3-9-2234"),
        record("smith", "first", "G@b.c", "pumice", "8-3-2323"),
    ];

    let sorted = sort_records(&records, &["4,ASC".to_string()])?;
    let dates: Vec<String> = sorted
        .iter()
        .map(|record| record.date_of_birth().to_string())
        .collect();
    // textual comparison of the rendered dates would put 01/03/3001 first
    assert_eq!(dates, vec!["03/09/2234", "08/03/2323", "01/03/3001"]);
    Ok(())
}

#[test]
fn test_three_column_sort() -> Result<(), anyhow::Error> {
    let records = vec![
        record("smith", "first", "email", "pumice", "3-3-2222"),
        record("smith", "first", "email", "pumice", "3-3-3333"),
        record("smith", "first", "zmail", "pumice", "3-3-3333"),
        record("smuth", "first", "email", "pumice", "3-3-3333"),
    ];
    let specs = vec![
        "0,ASC".to_string(),
        "2,DESC".to_string(),
        "4,ASC".to_string(),
    ];

    let sorted = sort_records(&records, &specs)?;
    let view: Vec<(&str, &str, String)> = sorted
        .iter()
        .map(|record| {
            (
                record.last_name(),
                record.email(),
                record.date_of_birth().to_string(),
            )
        })
        .collect();
    assert_eq!(
        view,
        vec![
            ("smith", "zmail", "03/03/3333".to_string()),
            ("smith", "email", "03/03/2222".to_string()),
            ("smith", "email", "03/03/3333".to_string()),
            ("smuth", "email", "03/03/3333".to_string()),
        ]
    );
    Ok(())
}

#[test]
fn test_ties_keep_insertion_order() -> Result<(), anyhow::Error> {
    let records = vec![
        record("smith", "ann", "x@y.z", "red", "1-1-1990"),
        record("smith", "bob", "w@y.z", "blue", "2-2-1991"),
        record("smith", "cid", "v@y.z", "teal", "3-3-1992"),
    ];

    let sorted = sort_records(&records, &["0,ASC".to_string()])?;
    assert_eq!(first_names(&sorted), vec!["ann", "bob", "cid"]);

    // a descending sort reverses comparisons, not the tied run itself
    let sorted = sort_records(&records, &["0,DESC".to_string()])?;
    assert_eq!(first_names(&sorted), vec!["ann", "bob", "cid"]);
    Ok(())
}

#[test]
fn test_direction_is_case_insensitive() -> Result<(), anyhow::Error> {
    let records = vec![
        record("b", "first", "email", "red", "1-1-1990"),
        record("a", "first", "email", "red", "1-1-1990"),
    ];

    for token in ["0,asc", "0,Asc", "0,ASC"] {
        let sorted = sort_records(&records, &[token.to_string()])?;
        assert_eq!(last_names(&sorted), vec!["a", "b"]);
    }
    Ok(())
}

#[test]
fn test_no_instructions_return_input_unchanged() -> Result<(), anyhow::Error> {
    let records = vec![
        record("b", "first", "email", "red", "1-1-1990"),
        record("a", "first", "email", "red", "1-1-1990"),
    ];

    let sorted = sort_records(&records, &[])?;
    assert_eq!(sorted, records);
    Ok(())
}

#[test]
fn test_empty_input_skips_instruction_validation() -> Result<(), anyhow::Error> {
    let sorted = sort_records(&[], &["0,ZESC".to_string()])?;
    assert_eq!(sorted.is_empty(), true);
    Ok(())
}

#[test]
fn test_rejects_invalid_instruction_token() {
    let records = vec![record("a", "first", "email", "red", "1-1-1990")];

    let error = sort_records(&records, &["0,ZESC".to_string()]).unwrap_err();
    assert!(matches!(error, RecordError::InvalidSortSpec { .. }));
    assert_eq!(error.to_string(), "invalid sort specification: 0,ZESC");
}

#[test]
fn test_rejects_out_of_range_column() {
    let records = vec![record("a", "first", "email", "red", "1-1-1990")];

    let error = sort_records(&records, &["5,ASC".to_string()]).unwrap_err();
    assert!(matches!(error, RecordError::ColumnOutOfRange { .. }));
    assert_eq!(
        error.to_string(),
        "sort column 5 is out of range for records with 5 fields"
    );
}

#[test]
fn test_validates_every_instruction_before_sorting() {
    let records = vec![
        record("b", "first", "email", "red", "1-1-1990"),
        record("a", "first", "email", "red", "1-1-1990"),
    ];

    let error =
        sort_records(&records, &["0,ASC".to_string(), "9,DESC".to_string()]).unwrap_err();
    assert!(matches!(error, RecordError::ColumnOutOfRange { .. }));
}

#[test]
fn test_input_is_not_mutated() -> Result<(), anyhow::Error> {
    let records = vec![
        record("b", "first", "email", "red", "1-1-1990"),
        record("a", "first", "email", "red", "1-1-1990"),
    ];
    let before = records.clone();

    let sorted = sort_records(&records, &["0,ASC".to_string()])?;
    assert_eq!(last_names(&sorted), vec!["a", "b"]);
    assert_eq!(records, before);
    Ok(())
}
