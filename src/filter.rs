//! Selecting transactions by date, amount, description, category and currency.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::types::Transaction;

/// User-supplied bounds and substrings. Every field is optional and an unset
/// field does not restrict the result.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterCriteria {
    pub date_from: Option<NaiveDate>,
    pub date_to: Option<NaiveDate>,
    pub amount_from: Option<Decimal>,
    pub amount_to: Option<Decimal>,
    pub description: Option<String>,
    pub category: Option<String>,
    pub currency: Option<String>,
}

impl FilterCriteria {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn date_from(mut self, date: NaiveDate) -> Self {
        self.date_from = Some(date);
        self
    }

    pub fn date_to(mut self, date: NaiveDate) -> Self {
        self.date_to = Some(date);
        self
    }

    pub fn amount_from(mut self, amount: Decimal) -> Self {
        self.amount_from = Some(amount);
        self
    }

    pub fn amount_to(mut self, amount: Decimal) -> Self {
        self.amount_to = Some(amount);
        self
    }

    pub fn description(mut self, text: &str) -> Self {
        self.description = Some(text.to_string());
        self
    }

    pub fn category(mut self, text: &str) -> Self {
        self.category = Some(text.to_string());
        self
    }

    pub fn currency(mut self, code: &str) -> Self {
        self.currency = Some(code.to_string());
        self
    }

    /// One predicate per set field, combined with AND.
    ///
    /// Bounds that contradict each other are kept as they are and simply
    /// match nothing.
    pub fn predicate(&self) -> Matcher {
        let mut predicates = Vec::new();

        if let Some(date) = self.date_from {
            predicates.push(Predicate::DateFrom(date));
        }
        if let Some(date) = self.date_to {
            predicates.push(Predicate::DateTo(date));
        }
        if let Some(amount) = self.amount_from {
            predicates.push(Predicate::AmountFrom(amount));
        }
        if let Some(amount) = self.amount_to {
            predicates.push(Predicate::AmountTo(amount));
        }
        if let Some(text) = &self.description {
            predicates.push(Predicate::Description(text.to_lowercase()));
        }
        if let Some(text) = &self.category {
            predicates.push(Predicate::Category(text.to_lowercase()));
        }
        if let Some(code) = &self.currency {
            predicates.push(Predicate::Currency(code.to_lowercase()));
        }

        Matcher { predicates }
    }
}

/// A single test over one transaction. Text needles are stored lowercased.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Predicate {
    DateFrom(NaiveDate),
    DateTo(NaiveDate),
    AmountFrom(Decimal),
    AmountTo(Decimal),
    Description(String),
    Category(String),
    Currency(String),
}

impl Predicate {
    pub fn matches(&self, txn: &Transaction) -> bool {
        match self {
            Predicate::DateFrom(date) => *date <= txn.date,
            Predicate::DateTo(date) => txn.date <= *date,
            Predicate::AmountFrom(amount) => *amount <= txn.amount,
            Predicate::AmountTo(amount) => txn.amount <= *amount,
            Predicate::Description(needle) => contains_ignore_case(&txn.description, needle),
            Predicate::Category(needle) => contains_ignore_case(&txn.category, needle),
            Predicate::Currency(code) => txn
                .currency
                .as_deref()
                .is_some_and(|currency| currency.to_lowercase() == *code),
        }
    }
}

fn contains_ignore_case(haystack: &str, lowercase_needle: &str) -> bool {
    haystack.to_lowercase().contains(lowercase_needle)
}

/// Conjunction of predicates; an empty matcher accepts every transaction.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Matcher {
    predicates: Vec<Predicate>,
}

impl Matcher {
    pub fn predicates(&self) -> &[Predicate] {
        &self.predicates
    }

    pub fn matches(&self, txn: &Transaction) -> bool {
        self.predicates.iter().all(|predicate| predicate.matches(txn))
    }
}

/// Keeps the transactions accepted by `matcher`, in their original order.
pub fn filter_history(history: &[Transaction], matcher: &Matcher) -> Vec<Transaction> {
    let filtered: Vec<Transaction> = history
        .iter()
        .filter(|txn| matcher.matches(txn))
        .cloned()
        .collect();

    tracing::info!(
        total = history.len(),
        matched = filtered.len(),
        "filtered history"
    );
    filtered
}
