use super::dto::MbankRow;
use super::DEFAULT_HEADER_MARKER;
use crate::errors::{QueryError, QueryResult};
use crate::parsers::traits::Parser;
use crate::types::Transaction;
use csv::{ReaderBuilder, StringRecord};

/// Reads the data section of an mBank history export.
///
/// Everything up to and including the line that starts with the header
/// marker is preamble (account details, period, column names). Each
/// following line holds exactly one record.
pub struct MbankParser {
    header_marker: String,
}

impl MbankParser {
    pub fn new(header_marker: impl Into<String>) -> Self {
        Self {
            header_marker: header_marker.into(),
        }
    }

    pub fn header_marker(&self) -> &str {
        &self.header_marker
    }

    /// Splits `content` after the header marker line.
    ///
    /// Returns the number of lines consumed and the remaining data section.
    fn split_preamble<'a>(&self, content: &'a str) -> Option<(u64, &'a str)> {
        let mut offset = 0;

        for (index, line) in content.split_inclusive('\n').enumerate() {
            offset += line.len();
            if line.starts_with(&self.header_marker) {
                tracing::debug!(lines = index + 1, "skipped export preamble");
                return Some((index as u64 + 1, &content[offset..]));
            }
        }

        None
    }

    /// Parses the rows after the header marker line.
    ///
    /// `None` when no line starts with the marker, so callers can tell a
    /// foreign file from an export without operations.
    pub fn read(&self, content: &str) -> QueryResult<Option<Vec<Transaction>>> {
        let Some((preamble_lines, data)) = self.split_preamble(content) else {
            return Ok(None);
        };

        let mut builder = ReaderBuilder::new();
        builder.delimiter(b';').has_headers(false).flexible(true);

        let mut transactions = Vec::new();
        let mut record = StringRecord::new();

        for (index, row) in data.lines().enumerate() {
            let line = preamble_lines + index as u64 + 1;

            if row.trim().is_empty() {
                tracing::debug!(line, "skipped blank row");
                continue;
            }

            let has_record = builder
                .from_reader(row.as_bytes())
                .read_record(&mut record)
                .map_err(|source| QueryError::Csv { line, source })?;
            if !has_record {
                continue;
            }

            let txn = MbankRow::from_record(&record)
                .and_then(Transaction::try_from)
                .map_err(|source| QueryError::MalformedRow { line, source })?;
            transactions.push(txn);
        }

        Ok(Some(transactions))
    }
}

impl Default for MbankParser {
    fn default() -> Self {
        Self::new(DEFAULT_HEADER_MARKER)
    }
}

impl Parser for MbankParser {
    type Output = Transaction;

    fn is_supported(&self, content: &str) -> bool {
        content
            .lines()
            .any(|line| line.starts_with(&self.header_marker))
    }

    fn parse(&self, content: &str) -> QueryResult<Vec<Self::Output>> {
        self.read(content).map(Option::unwrap_or_default)
    }
}
