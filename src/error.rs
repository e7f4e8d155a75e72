use std::io;

use thiserror::Error;

/// Error type covering format resolution, record parsing, and sort
/// specification failures.
///
/// The display strings double as the client-facing messages of the record
/// service, so they stay stable.
#[derive(Debug, Error)]
pub enum RecordError {
    /// The format tag or file extension is not one of csv, psv, ssv.
    #[error("unsupported record format: {tag}")]
    UnsupportedFormat { tag: String },
    /// A raw row could not be turned into a record.
    #[error("record syntax invalid: {reason}")]
    MalformedRecord { reason: String },
    /// A sort token did not match `<column>,<asc|desc>`.
    #[error("invalid sort specification: {token}")]
    InvalidSortSpec { token: String },
    /// A sort column index is beyond the record arity.
    #[error("sort column {column} is out of range for records with 5 fields")]
    ColumnOutOfRange { column: usize },
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Csv(#[from] csv::Error),
}

impl RecordError {
    pub(crate) fn malformed(reason: impl Into<String>) -> RecordError {
        RecordError::MalformedRecord {
            reason: reason.into(),
        }
    }
}
