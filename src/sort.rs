use std::cmp::Ordering;
use std::io::Write;
use std::path::PathBuf;

use crate::error::RecordError;
use crate::file_type::RecordFileType;
use crate::order::Order;
use crate::reader::RecordReader;
use crate::record::Record;
use crate::sort_spec::SortSpec;
use crate::writer::write_records;

/// Sort records by a list of `column,order` instructions.
///
/// Instructions are applied with the leftmost one as the most significant
/// key. Columns 0 through 3 compare as text; column 4 compares as a calendar
/// date. Sorting is stable, so records that tie on every requested key keep
/// their input order. The input is never modified; the result is a sorted
/// copy.
///
/// When there are no instructions, or no records, the input comes back
/// unchanged and the instructions are not inspected further. Otherwise every
/// instruction is validated before any reordering happens, so a bad token
/// anywhere in the list leaves no partial work behind.
///
/// # Examples
/// ```
/// use record_sort::file_type::RecordFileType;
/// use record_sort::parser::parse_records;
/// use record_sort::sort::sort_records;
///
/// let records = parse_records(
///     "Smith,Ann,a@b.c,blue,01/02/1990\nJones,Bo,b@c.d,red,03/04/1985\n",
///     &RecordFileType::Comma,
/// )?;
/// let sorted = sort_records(&records, &["4,asc".to_string()])?;
/// assert_eq!(sorted[0].first_name(), "Bo");
/// # Ok::<(), record_sort::error::RecordError>(())
/// ```
pub fn sort_records(records: &[Record], specs: &[String]) -> Result<Vec<Record>, RecordError> {
    if records.is_empty() || specs.is_empty() {
        return Ok(records.to_vec());
    }

    let mut parsed = Vec::with_capacity(specs.len());
    for token in specs {
        parsed.push(token.parse::<SortSpec>()?);
    }
    for spec in &parsed {
        if spec.column() >= Record::ARITY {
            return Err(RecordError::ColumnOutOfRange {
                column: spec.column(),
            });
        }
    }

    let mut sorted = records.to_vec();
    for spec in parsed.iter().rev() {
        apply_pass(&mut sorted, spec);
    }
    Ok(sorted)
}

fn apply_pass(records: &mut [Record], spec: &SortSpec) {
    let column = spec.column();
    records.sort_by(|left, right| {
        let ordering = compare_column(left, right, column);
        match spec.order() {
            Order::Asc => ordering,
            Order::Desc => ordering.reverse(),
        }
    });
}

fn compare_column(left: &Record, right: &Record, column: usize) -> Ordering {
    match column {
        0 => left.last_name().cmp(right.last_name()),
        1 => left.first_name().cmp(right.first_name()),
        2 => left.email().cmp(right.email()),
        3 => left.favorite_color().cmp(right.favorite_color()),
        4 => left.date_of_birth().cmp(right.date_of_birth()),
        _ => unreachable!("column {} was checked against the record arity", column),
    }
}

/// Collect, sort, and write delimited person record files
///
/// # Examples
/// ```
/// use std::path::PathBuf;
/// use record_sort::file_type::RecordFileType;
/// use record_sort::sort::RecordSort;
///
/// // sort two record files by date of birth, oldest first, then by last name
/// fn sort_files(first: PathBuf, second: PathBuf) -> Result<(), anyhow::Error> {
///     let mut record_sort = RecordSort::new(vec![first, second]);
///     record_sort.with_sort_specs(vec!["4,asc".to_string(), "0,asc".to_string()]);
///     // write pipe delimited rows regardless of the input flavor
///     record_sort.with_output_format(RecordFileType::Pipe);
///     record_sort.run(&mut std::io::stdout())
/// }
/// ```
pub struct RecordSort {
    input_files: Vec<PathBuf>,
    sort_specs: Vec<String>,
    output_format: RecordFileType,
    tasks: usize,
}

impl RecordSort {
    /// Create a default RecordSort definition.
    ///
    /// * input files are parsed by their extension, `csv`, `psv`, or `ssv`
    /// * no sort instructions, records keep their collection order
    /// * the output is comma delimited
    /// * tasks is zero, which will use all system cores for reading
    pub fn new(input_files: Vec<PathBuf>) -> RecordSort {
        RecordSort {
            input_files,
            sort_specs: vec![],
            output_format: RecordFileType::Comma,
            tasks: 0,
        }
    }

    /// Replace all sort instructions with the `sort_specs` value.
    pub fn with_sort_specs(&mut self, sort_specs: Vec<String>) {
        self.sort_specs = sort_specs;
    }

    /// Add one `column,order` sort instruction after the existing ones.
    pub fn add_sort_spec(&mut self, sort_spec: String) {
        self.sort_specs.push(sort_spec);
    }

    /// Set the delimiter flavor for output rows. The default is comma
    pub fn with_output_format(&mut self, output_format: RecordFileType) {
        self.output_format = output_format;
    }

    /// Set the number of tasks. The default is zero which will result in using all system cores
    pub fn with_tasks(&mut self, tasks: usize) {
        self.tasks = tasks;
    }

    /// Collect records from the input files, sort them, and write the rows
    /// to `output`.
    pub fn run<W: Write>(&self, output: &mut W) -> Result<(), anyhow::Error> {
        log::info!("Start record sort, {} input files", self.input_files.len());
        let mut reader = RecordReader::new();
        reader.with_tasks(self.tasks);
        let records = reader.read_files(&self.input_files)?;
        log::info!("Collected {} records", records.len());
        let sorted = sort_records(&records, &self.sort_specs)?;
        write_records(output, &sorted, &self.output_format)?;
        log::info!("Finish record sort");
        Ok(())
    }
}
