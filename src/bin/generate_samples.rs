//! Generates example record files, one per supported format.

use std::fs::File;
use std::path::PathBuf;

use chrono::NaiveDate;
use clap::Parser;
use log::LevelFilter;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use simple_logger::SimpleLogger;

use record_sort::birth_date::BirthDate;
use record_sort::file_type::RecordFileType;
use record_sort::record::Record;
use record_sort::writer::write_records;

const LAST_NAMES: &[&str] = &[
    "Acosta", "Barnes", "Cole", "Dalton", "Everly", "Fischer", "Grant", "Huang", "Ibarra",
    "Jensen", "Kerr", "Lindqvist", "Moreau", "Novak", "Okafor", "Pratt", "Quinn", "Reyes",
    "Sorensen", "Thao", "Underwood", "Vance", "Whitfield", "Young", "Zamora",
];

const FIRST_NAMES: &[&str] = &[
    "Ada", "Bruno", "Celia", "Dmitri", "Elena", "Farid", "Greta", "Hugo", "Ines", "Jonas",
    "Kaya", "Leo", "Mara", "Nils", "Odette", "Pavel", "Rosa", "Stellan", "Tilda", "Umar",
    "Vera", "Wendell", "Yara", "Zeke",
];

const COLORS: &[&str] = &[
    "amber", "coral", "crimson", "indigo", "ivory", "mahogany", "maroon", "navy", "olive",
    "pumice", "sage", "slate", "teal", "umber",
];

const EMAIL_DOMAINS: &[&str] = &["example.com", "example.org", "mail.test", "records.test"];

/// Generate example record inputs, one file per supported format.
#[derive(Debug, Parser)]
#[command(name = "generate-samples", version)]
struct Args {
    /// Number of records to generate in each file.
    #[arg(short = 'n', default_value_t = 100, value_parser = clap::value_parser!(u16).range(1..=1000))]
    n: u16,

    /// Directory to write example.csv, example.psv, and example.ssv into.
    #[arg(short = 'o', long = "output", value_name = "DIR", default_value = "sample_inputs")]
    output: PathBuf,

    /// Seed for reproducible data.
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> Result<(), anyhow::Error> {
    SimpleLogger::new().with_level(LevelFilter::Info).env().init()?;
    let args = Args::parse();
    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let records: Vec<Record> = (0..args.n).map(|_| random_record(&mut rng)).collect();

    std::fs::create_dir_all(&args.output)?;
    for file_type in RecordFileType::all() {
        let path = args.output.join(format!("example.{}", file_type.tag()));
        let mut file = File::create(&path)?;
        write_records(&mut file, &records, &file_type)?;
        log::info!("Wrote {} records to {}", records.len(), path.display());
    }
    Ok(())
}

fn random_record<R: Rng>(rng: &mut R) -> Record {
    let last_name = LAST_NAMES[rng.gen_range(0..LAST_NAMES.len())];
    let first_name = FIRST_NAMES[rng.gen_range(0..FIRST_NAMES.len())];
    let color = COLORS[rng.gen_range(0..COLORS.len())];
    let domain = EMAIL_DOMAINS[rng.gen_range(0..EMAIL_DOMAINS.len())];
    let email = format!(
        "{}.{}@{}",
        first_name.to_lowercase(),
        last_name.to_lowercase(),
        domain
    );

    let year = rng.gen_range(1920..=2010);
    let month = rng.gen_range(1..=12);
    // capped so every month and year combination stays valid
    let day = rng.gen_range(1..=28);
    let date = NaiveDate::from_ymd_opt(year, month, day).unwrap();

    Record::new(
        last_name.to_string(),
        first_name.to_string(),
        email,
        color.to_string(),
        BirthDate::from(date),
    )
}
