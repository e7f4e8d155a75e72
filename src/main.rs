//! Command line interface for sorting record files.

use std::io::stdout;
use std::path::PathBuf;

use clap::Parser;
use log::LevelFilter;
use simple_logger::SimpleLogger;

use record_sort::file_type::RecordFileType;
use record_sort::sort::RecordSort;

/// Accepts an arbitrary number of record files and sorts them.
#[derive(Debug, Parser)]
#[command(name = "record-sort", version)]
struct Args {
    /// Record files to be parsed, supports *.csv, *.psv, and *.ssv.
    #[arg(value_name = "FILE", required = true)]
    files: Vec<PathBuf>,

    /// Zero based sort column index and direction separated by a comma, for
    /// example `0,asc` or `4,desc`. Sort priority reflects the order sorts
    /// are provided.
    #[arg(long, short = 's', value_name = "SORT")]
    sort: Vec<String>,

    /// Format to output records in, accepts csv, psv, and ssv.
    #[arg(
        long,
        short = 'f',
        value_name = "FORMAT",
        default_value = "csv",
        value_parser = parse_format
    )]
    format: RecordFileType,

    /// Number of parallel reading tasks; zero uses all system cores.
    #[arg(long, default_value_t = 0)]
    tasks: usize,
}

fn parse_format(tag: &str) -> Result<RecordFileType, String> {
    RecordFileType::resolve(tag).map_err(|error| error.to_string())
}

fn main() -> Result<(), anyhow::Error> {
    SimpleLogger::new().with_level(LevelFilter::Warn).env().init()?;
    let args = Args::parse();
    let mut record_sort = RecordSort::new(args.files);
    record_sort.with_sort_specs(args.sort);
    record_sort.with_output_format(args.format);
    record_sort.with_tasks(args.tasks);
    record_sort.run(&mut stdout())
}
