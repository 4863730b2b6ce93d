use num_traits::Zero;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{
    errors::{QueryError, QueryResult},
    types::Transaction,
};

/// Income and expense totals over a set of transactions.
///
/// `total_expense` keeps the export's sign, so it is never positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Summary {
    pub count: usize,
    pub total_income: Decimal,
    pub total_expense: Decimal,
}

impl Summary {
    /// Fails with [`QueryError::SummaryOverflow`] when a total leaves the
    /// range of `Decimal`.
    pub fn of(history: &[Transaction]) -> QueryResult<Self> {
        history.iter().try_fold(Summary::default(), |mut summary, txn| {
            let total = if txn.is_income() {
                &mut summary.total_income
            } else {
                &mut summary.total_expense
            };
            *total = total
                .checked_add(txn.amount)
                .ok_or(QueryError::SummaryOverflow)?;
            summary.count += 1;
            Ok(summary)
        })
    }

    /// Income plus expense. The totals have opposite signs, so this cannot
    /// overflow.
    pub fn balance(&self) -> Decimal {
        self.total_income + self.total_expense
    }
}

impl Default for Summary {
    fn default() -> Self {
        Self {
            count: 0,
            total_income: Decimal::zero(),
            total_expense: Decimal::zero(),
        }
    }
}
