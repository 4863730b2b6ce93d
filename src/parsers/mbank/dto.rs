use crate::errors::{FieldError, RowField};
use csv::StringRecord;

const DATE_COLUMN: usize = 0;
const DESCRIPTION_COLUMN: usize = 1;
const CATEGORY_COLUMN: usize = 3;
const AMOUNT_COLUMN: usize = 4;

/// Raw text fields of one export row, before any value parsing.
///
/// Column 2 (the account) and anything after the amount are ignored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MbankRow {
    pub date: String,
    pub description: String,
    pub category: String,
    pub amount: String,
}

impl MbankRow {
    pub fn from_record(record: &StringRecord) -> Result<Self, FieldError> {
        let column = |index: usize, field: RowField| {
            record
                .get(index)
                .map(str::to_string)
                .ok_or_else(|| FieldError::missing(field))
        };

        Ok(MbankRow {
            date: column(DATE_COLUMN, RowField::Date)?,
            description: column(DESCRIPTION_COLUMN, RowField::Description)?,
            category: column(CATEGORY_COLUMN, RowField::Category)?,
            amount: column(AMOUNT_COLUMN, RowField::Amount)?,
        })
    }
}
