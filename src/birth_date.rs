use std::fmt::{Display, Formatter};

use chrono::NaiveDate;

use crate::error::RecordError;

/// Date formats accepted for the date of birth column, tried in order.
/// Numeric forms are month-first; `%b` also matches full month names and is
/// case-insensitive, so `apr 2, 1991` and `April 2 1991` both parse.
const ACCEPTED_FORMATS: [&str; 6] = [
    "%m-%d-%Y",
    "%m/%d/%Y",
    "%Y-%m-%d",
    "%b %d, %Y",
    "%b %d %Y",
    "%d %b %Y",
];

/// Date of birth of one record.
///
/// The calendar value is derived once at construction and compared
/// temporally; the external rendering is the fixed `MM/DD/YYYY` form.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct BirthDate {
    date: NaiveDate,
}

impl BirthDate {
    /// Parse a free-form date of birth.
    ///
    /// # Examples
    /// ```
    /// use record_sort::birth_date::BirthDate;
    ///
    /// let date = BirthDate::parse("3-3-3333").unwrap();
    /// assert_eq!(date.to_string(), "03/03/3333");
    /// ```
    pub fn parse(text: &str) -> Result<BirthDate, RecordError> {
        let trimmed = text.trim();
        for format in ACCEPTED_FORMATS {
            if let Ok(date) = NaiveDate::parse_from_str(trimmed, format) {
                return Ok(BirthDate { date });
            }
        }
        Err(RecordError::malformed(format!(
            "'{text}' is not a recognizable date of birth"
        )))
    }

    /// Get the parsed calendar value.
    pub fn date(&self) -> NaiveDate {
        self.date
    }
}

impl From<NaiveDate> for BirthDate {
    fn from(date: NaiveDate) -> BirthDate {
        BirthDate { date }
    }
}

impl Display for BirthDate {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.date.format("%m/%d/%Y"))
    }
}
