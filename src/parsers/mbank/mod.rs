//! mBank account history export (`;`-separated, windows-1250 encoded).

mod dto;
mod parser;
mod types;

/// Text encoding mBank uses for its CSV exports.
pub const DEFAULT_ENCODING: &str = "windows-1250";

/// Prefix of the column header line that ends the export preamble.
pub const DEFAULT_HEADER_MARKER: &str = "#Data operacji";

pub mod prelude {
    pub use super::dto::MbankRow;
    pub use super::parser::MbankParser;
    pub use super::types::{Amount, MbankAmount, MbankDate};
    pub use super::{DEFAULT_ENCODING, DEFAULT_HEADER_MARKER};
}
