//! This crate parses delimited person record files and sorts the records by
//! any combination of typed columns.
//!
//! A record is one line of five fields separated by a delimiter: last name,
//! first name, email, favorite color, and date of birth. Three delimiter
//! flavors are supported, comma (`csv`), pipe (`psv`), and space (`ssv`),
//! resolved from the file extension. Records collected from any mix of input
//! files can be sorted by a list of `column,order` instructions; the date of
//! birth column compares as a calendar date rather than as text.
//!
//! The same records can be served over a small REST interface that accepts
//! one delimited record per request and lists the stored records in a
//! handful of sort orders.
//!
//! # Examples
//! ```
//! use std::path::PathBuf;
//! use record_sort::sort::RecordSort;
//!
//! // parse a batch of record files and print the sorted rows
//! fn sort_record_files(files: Vec<PathBuf>) -> Result<(), anyhow::Error> {
//!     let mut record_sort = RecordSort::new(files);
//!
//!     // last name descending first, date of birth breaks ties
//!     record_sort.with_sort_specs(vec!["0,desc".to_string(), "4,asc".to_string()]);
//!
//!     record_sort.run(&mut std::io::stdout())
//! }
//! ```

pub(crate) mod parse_command;

pub mod birth_date;
pub mod error;
pub mod file_type;
pub mod order;
pub mod parser;
pub mod reader;
pub mod record;
pub mod server;
pub mod sort;
pub mod sort_spec;
pub mod writer;
