use std::collections::HashMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::types::Transaction;

/// Transactions booked on the same day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateGroup {
    pub date: NaiveDate,
    pub entries: Vec<Transaction>,
}

/// Groups `history` by date. Groups come in the order their date first
/// appears, entries keep their relative order.
pub fn group_history_by_date(history: &[Transaction]) -> Vec<DateGroup> {
    let mut groups: Vec<DateGroup> = Vec::new();
    let mut index: HashMap<NaiveDate, usize> = HashMap::new();

    for txn in history {
        let position = *index.entry(txn.date).or_insert_with(|| {
            groups.push(DateGroup {
                date: txn.date,
                entries: Vec::new(),
            });
            groups.len() - 1
        });
        groups[position].entries.push(txn.clone());
    }

    groups
}
