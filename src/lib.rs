//! Read and filter mBank account history exports.
//!
//! ```rust,ignore
//! use mquery::{FilterCriteria, ParserBuilder, Summary, filter_history};
//!
//! let history = ParserBuilder::new()
//!     .filename("history.csv")
//!     .parse()?;
//! let criteria = FilterCriteria::new().description("restaurant");
//! let matching = filter_history(&history, &criteria.predicate());
//! let summary = Summary::of(&matching)?;
//! ```

mod builder;
mod filter;
mod group;
mod summary;
mod types;

pub mod errors;
pub mod parsers;

pub use builder::ParserBuilder;
pub use errors::{FieldError, QueryError, QueryResult, RowField};
pub use filter::{FilterCriteria, Matcher, Predicate, filter_history};
pub use group::{DateGroup, group_history_by_date};
pub use parsers::prelude::*;
pub use summary::Summary;
pub use types::Transaction;
