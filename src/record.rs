use serde::ser::{Serialize, SerializeTuple, Serializer};

use crate::birth_date::BirthDate;
use crate::error::RecordError;

/// A single person record.
///
/// Field order is fixed and positionally addressable: index 0 through 4 map
/// to last name, first name, email, favorite color, and date of birth. All
/// fields are exposed as text; the date of birth is held as a parsed
/// [BirthDate] and rendered as `MM/DD/YYYY`. Records are immutable once
/// constructed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Record {
    last_name: String,
    first_name: String,
    email: String,
    favorite_color: String,
    date_of_birth: BirthDate,
}

impl Record {
    /// Number of fields in every record.
    pub const ARITY: usize = 5;

    /// Create a record from already validated parts.
    pub fn new(
        last_name: String,
        first_name: String,
        email: String,
        favorite_color: String,
        date_of_birth: BirthDate,
    ) -> Record {
        Record {
            last_name,
            first_name,
            email,
            favorite_color,
            date_of_birth,
        }
    }

    /// Build a record from one row of raw field values.
    ///
    /// Fails with [RecordError::MalformedRecord] when the row does not have
    /// exactly [Record::ARITY] fields or the date of birth does not parse.
    pub fn from_fields(fields: Vec<String>) -> Result<Record, RecordError> {
        let [last_name, first_name, email, favorite_color, date_text]: [String; Record::ARITY] =
            fields.try_into().map_err(|fields: Vec<String>| {
                RecordError::malformed(format!(
                    "expected {} fields, got {}",
                    Record::ARITY,
                    fields.len()
                ))
            })?;
        let date_of_birth = BirthDate::parse(&date_text)?;
        Ok(Record::new(
            last_name,
            first_name,
            email,
            favorite_color,
            date_of_birth,
        ))
    }

    /// Get the last name for this record.
    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    /// Get the first name for this record.
    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    /// Get the email for this record.
    pub fn email(&self) -> &str {
        &self.email
    }

    /// Get the favorite color for this record.
    pub fn favorite_color(&self) -> &str {
        &self.favorite_color
    }

    /// Get the date of birth for this record.
    pub fn date_of_birth(&self) -> &BirthDate {
        &self.date_of_birth
    }

    /// Positional field access for sort-by-column; the date column renders
    /// in its external form. Out of range indexes yield None.
    pub fn field(&self, index: usize) -> Option<String> {
        match index {
            0 => Some(self.last_name.clone()),
            1 => Some(self.first_name.clone()),
            2 => Some(self.email.clone()),
            3 => Some(self.favorite_color.clone()),
            4 => Some(self.date_of_birth.to_string()),
            _ => None,
        }
    }

    /// The external representation: five field values in record order, date
    /// rendered `MM/DD/YYYY`.
    pub fn to_fields(&self) -> [String; Record::ARITY] {
        [
            self.last_name.clone(),
            self.first_name.clone(),
            self.email.clone(),
            self.favorite_color.clone(),
            self.date_of_birth.to_string(),
        ]
    }
}

impl Serialize for Record {
    /// Records serialize in their external form, a 5-element list of field
    /// values.
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut row = serializer.serialize_tuple(Record::ARITY)?;
        row.serialize_element(&self.last_name)?;
        row.serialize_element(&self.first_name)?;
        row.serialize_element(&self.email)?;
        row.serialize_element(&self.favorite_color)?;
        row.serialize_element(&self.date_of_birth.to_string())?;
        row.end()
    }
}
