use std::collections::BTreeMap;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use command_executor::command::Command;

use crate::error::RecordError;
use crate::file_type::RecordFileType;
use crate::parser::parse_records;
use crate::record::Record;

/// What became of one input file during collection.
pub(crate) enum FileOutcome {
    /// The file parsed fully.
    Parsed(Vec<Record>),
    /// The file was left out of the batch; the cause has been logged.
    Skipped,
    /// The file sinks the whole batch.
    Failed(RecordError),
}

/// Parse one input file, routing each failure to skip or fail.
///
/// Unsupported extensions, content that is not valid text, and rows that do
/// not form records drop the file with a warning while the rest of the batch
/// goes on. Files that cannot be opened or read are reported as failures.
pub(crate) fn parse_file(path: &Path) -> FileOutcome {
    let file_type = match RecordFileType::from_path(path) {
        Ok(file_type) => file_type,
        Err(error) => {
            log::warn!("Skipping {}: {}", path.display(), error);
            return FileOutcome::Skipped;
        }
    };
    let data = match std::fs::read_to_string(path) {
        Ok(data) => data,
        Err(error) if error.kind() == ErrorKind::InvalidData => {
            log::warn!("Skipping {}: {}", path.display(), error);
            return FileOutcome::Skipped;
        }
        Err(error) => return FileOutcome::Failed(RecordError::Io(error)),
    };
    match parse_records(&data, &file_type) {
        Ok(records) => {
            log::info!("Collected {} records from {}", records.len(), path.display());
            FileOutcome::Parsed(records)
        }
        Err(error @ RecordError::MalformedRecord { .. }) => {
            log::warn!("Skipping {}: {}", path.display(), error);
            FileOutcome::Skipped
        }
        Err(error) => FileOutcome::Failed(error),
    }
}

pub(crate) struct ParseFileCommand {
    index: usize,
    path: PathBuf,
    outcomes: Arc<Mutex<BTreeMap<usize, FileOutcome>>>,
}

impl ParseFileCommand {
    pub(crate) fn new(
        index: usize,
        path: PathBuf,
        outcomes: Arc<Mutex<BTreeMap<usize, FileOutcome>>>,
    ) -> ParseFileCommand {
        ParseFileCommand {
            index,
            path,
            outcomes,
        }
    }
}

impl Command for ParseFileCommand {
    fn execute(&self) -> Result<(), anyhow::Error> {
        let outcome = parse_file(&self.path);
        let mut outcomes_guard = self.outcomes.lock().unwrap();
        outcomes_guard.insert(self.index, outcome);
        Ok(())
    }
}
