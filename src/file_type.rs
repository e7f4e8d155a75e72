use std::ffi::OsStr;
use std::path::Path;

use crate::error::RecordError;

/// Supported record file formats.
///
/// Each format is identified by a short tag that doubles as the file
/// extension and is bound to exactly one field delimiter.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RecordFileType {
    /// Comma separated values, tag `csv`
    Comma,
    /// Pipe separated values, tag `psv`
    Pipe,
    /// Space separated values, tag `ssv`
    Space,
}

impl RecordFileType {
    /// Resolve a format tag or file extension to its file type.
    ///
    /// The match is exact and case-sensitive; anything other than `csv`,
    /// `psv`, or `ssv` fails with [RecordError::UnsupportedFormat].
    ///
    /// # Examples
    /// ```
    /// use record_sort::file_type::RecordFileType;
    ///
    /// let file_type = RecordFileType::resolve("psv").unwrap();
    /// assert_eq!(file_type.delimiter(), '|');
    /// assert!(RecordFileType::resolve("xml").is_err());
    /// ```
    pub fn resolve(tag: &str) -> Result<RecordFileType, RecordError> {
        match tag {
            "csv" => Ok(RecordFileType::Comma),
            "psv" => Ok(RecordFileType::Pipe),
            "ssv" => Ok(RecordFileType::Space),
            _ => Err(RecordError::UnsupportedFormat {
                tag: tag.to_string(),
            }),
        }
    }

    /// Resolve the file type of a path from its extension.
    pub fn from_path(path: &Path) -> Result<RecordFileType, RecordError> {
        let extension = path.extension().and_then(OsStr::to_str).unwrap_or_default();
        RecordFileType::resolve(extension)
    }

    /// Get the textual tag for this file type.
    pub fn tag(&self) -> &'static str {
        match self {
            RecordFileType::Comma => "csv",
            RecordFileType::Pipe => "psv",
            RecordFileType::Space => "ssv",
        }
    }

    /// Get the field delimiter for this file type.
    pub fn delimiter(&self) -> char {
        match self {
            RecordFileType::Comma => ',',
            RecordFileType::Pipe => '|',
            RecordFileType::Space => ' ',
        }
    }

    /// All supported file types in declaration order.
    pub fn all() -> [RecordFileType; 3] {
        [
            RecordFileType::Comma,
            RecordFileType::Pipe,
            RecordFileType::Space,
        ]
    }
}
