use std::str::FromStr;

use crate::error::RecordError;

/// Sort direction applied by one sort pass.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Order {
    /// Ascending
    Asc,
    /// Descending
    Desc,
}

impl FromStr for Order {
    type Err = RecordError;

    /// Parse a direction keyword, matched case-insensitively.
    fn from_str(s: &str) -> Result<Order, RecordError> {
        if s.eq_ignore_ascii_case("asc") {
            Ok(Order::Asc)
        } else if s.eq_ignore_ascii_case("desc") {
            Ok(Order::Desc)
        } else {
            Err(RecordError::InvalidSortSpec {
                token: s.to_string(),
            })
        }
    }
}
