use std::collections::BTreeMap;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use anyhow::Context;
use command_executor::shutdown_mode::ShutdownMode;
use command_executor::thread_pool_builder::ThreadPoolBuilder;

use crate::parse_command::{FileOutcome, ParseFileCommand};
use crate::record::Record;

/// Collect records from delimited files, one task per file.
///
/// Files are parsed concurrently and the collected records keep the order of
/// the input file list. Files the collection policy rules out are dropped
/// with a warning; a file that cannot be read fails the whole batch.
pub struct RecordReader {
    tasks: usize,
}

impl RecordReader {
    /// Create a default RecordReader definition.
    pub fn new() -> RecordReader {
        RecordReader { tasks: 0 }
    }

    /// Set the number of tasks. The default is zero which will result in using all system cores
    pub fn with_tasks(&mut self, tasks: usize) {
        self.tasks = tasks;
    }

    /// Read all `input_files` and merge their records in file list order.
    pub fn read_files(&self, input_files: &[PathBuf]) -> Result<Vec<Record>, anyhow::Error> {
        let mut tasks = self.tasks;
        if tasks == 0 {
            tasks = num_cpus::get();
        }
        let outcomes: Arc<Mutex<BTreeMap<usize, FileOutcome>>> =
            Arc::new(Mutex::new(BTreeMap::new()));

        let mut thread_pool_builder = ThreadPoolBuilder::new();
        let mut reading_pool = thread_pool_builder
            .with_name("reading".to_string())
            .with_tasks(tasks)
            .with_queue_size(tasks * 2)
            .with_shutdown_mode(ShutdownMode::CompletePending)
            .build()
            .unwrap();

        for (index, path) in input_files.iter().enumerate() {
            let command = Box::new(ParseFileCommand::new(index, path.clone(), outcomes.clone()));
            reading_pool.submit(command);
        }

        log::info!("Shutting down reading pool");
        reading_pool.shutdown();
        reading_pool.join()?;

        let mut outcomes_guard = outcomes.lock().unwrap();
        let outcomes = std::mem::take(&mut *outcomes_guard);
        let mut records = Vec::new();
        for (index, outcome) in outcomes {
            match outcome {
                FileOutcome::Parsed(mut parsed) => records.append(&mut parsed),
                FileOutcome::Skipped => {}
                FileOutcome::Failed(error) => {
                    return Err(error)
                        .with_context(|| format!("reading {}", input_files[index].display()));
                }
            }
        }
        Ok(records)
    }
}
