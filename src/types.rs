use crate::{errors::FieldError, parsers::prelude::*};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One entry of the account history.
///
/// Negative amounts are expenses, positive amounts are incomes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    pub date: NaiveDate,
    pub description: String,
    pub category: String,
    pub amount: Decimal,
    pub currency: Option<String>,
}

impl Transaction {
    pub fn new(date: NaiveDate, description: impl Into<String>, amount: Decimal) -> Self {
        Self {
            date,
            description: description.into(),
            category: String::new(),
            amount,
            currency: None,
        }
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    pub fn with_currency(mut self, currency: impl Into<String>) -> Self {
        self.currency = Some(currency.into());
        self
    }

    pub fn is_income(&self) -> bool {
        self.amount >= Decimal::ZERO
    }
}

impl TryFrom<MbankRow> for Transaction {
    type Error = FieldError;

    fn try_from(row: MbankRow) -> Result<Self, Self::Error> {
        let date = MbankDate::from(row.date).parse()?;
        let amount = MbankAmount::from(row.amount).parse()?;

        Ok(Transaction {
            date,
            description: row.description.trim().to_string(),
            category: row.category.trim().to_string(),
            amount: amount.value,
            currency: amount.currency,
        })
    }
}
