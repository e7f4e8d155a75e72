use std::str::FromStr;

use crate::error::RecordError;
use crate::order::Order;

/// One parsed sort instruction: a field column and a direction.
///
/// The textual form is `column,order`, for example `4,desc`. The column is a
/// zero based field index and the order is `asc` or `desc` in any letter
/// case. Whitespace around either part is tolerated. A token that does not
/// match the shape is rejected with the whole token in the error.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SortSpec {
    column: usize,
    order: Order,
}

impl SortSpec {
    pub fn new(column: usize, order: Order) -> SortSpec {
        SortSpec { column, order }
    }

    /// Get the zero based field column to sort by.
    pub fn column(&self) -> usize {
        self.column
    }

    /// Get the sort direction.
    pub fn order(&self) -> &Order {
        &self.order
    }
}

impl FromStr for SortSpec {
    type Err = RecordError;

    fn from_str(token: &str) -> Result<SortSpec, Self::Err> {
        let invalid = || RecordError::InvalidSortSpec {
            token: token.to_string(),
        };
        let (column_part, order_part) = token.split_once(',').ok_or_else(invalid)?;
        if order_part.contains(',') {
            return Err(invalid());
        }
        let column = column_part.trim().parse::<usize>().map_err(|_| invalid())?;
        let order = order_part.trim().parse::<Order>().map_err(|_| invalid())?;
        Ok(SortSpec::new(column, order))
    }
}
