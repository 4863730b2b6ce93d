use std::fs;
use std::path::{Path, PathBuf};

use crate::{
    errors::{QueryError, QueryResult},
    parsers::prelude::*,
    types::Transaction,
};
use encoding_rs::Encoding;

/// Reads an mBank history export from memory or disk.
///
/// ```rust,ignore
/// let history = ParserBuilder::new()
///     .filename("history.csv")
///     .parse()?;
/// ```
#[derive(Default)]
pub struct ParserBuilder {
    input: Option<Input>,
    filepath: Option<PathBuf>,
    encoding: Option<String>,
    header_marker: Option<String>,
}

#[derive(Debug, PartialEq, Eq)]
enum Input {
    Text(String),
    Bytes(Vec<u8>),
}

impl ParserBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Already decoded text; the encoding setting does not apply to it.
    pub fn content(mut self, content: &str) -> Self {
        self.input = Some(Input::Text(content.to_string()));
        self
    }

    /// Raw export bytes, decoded with [`ParserBuilder::encoding`].
    pub fn bytes(mut self, bytes: &[u8]) -> Self {
        self.input = Some(Input::Bytes(bytes.to_vec()));
        self
    }

    pub fn filename(mut self, path: impl AsRef<Path>) -> Self {
        self.filepath = Some(path.as_ref().to_path_buf());
        self
    }

    /// WHATWG encoding label, `windows-1250` by default.
    pub fn encoding(mut self, label: &str) -> Self {
        self.encoding = Some(label.to_string());
        self
    }

    pub fn header_marker(mut self, marker: &str) -> Self {
        self.header_marker = Some(marker.to_string());
        self
    }

    pub fn parse(self) -> QueryResult<Vec<Transaction>> {
        let label = self.encoding.as_deref().unwrap_or(DEFAULT_ENCODING);
        let encoding = Encoding::for_label(label.trim().as_bytes())
            .ok_or_else(|| QueryError::UnknownEncoding(label.to_string()))?;

        let text = match self.input {
            Some(Input::Text(text)) => text,
            Some(Input::Bytes(bytes)) => decode(encoding, &bytes),
            None => {
                let path = self
                    .filepath
                    .ok_or(QueryError::MissingContentAndFilepath)?;
                let bytes =
                    fs::read(&path).map_err(|source| QueryError::FileAccess { path, source })?;
                decode(encoding, &bytes)
            }
        };

        let parser = self
            .header_marker
            .map(MbankParser::new)
            .unwrap_or_default();

        let Some(history) = parser.read(&text)? else {
            tracing::warn!(
                marker = parser.header_marker(),
                "header marker not found, history is empty"
            );
            return Ok(Vec::new());
        };

        tracing::info!(transactions = history.len(), "parsed history export");
        Ok(history)
    }
}

fn decode(encoding: &'static Encoding, bytes: &[u8]) -> String {
    let (text, _, had_errors) = encoding.decode(bytes);
    if had_errors {
        tracing::warn!(
            encoding = encoding.name(),
            "export contains bytes invalid in this encoding, replaced with U+FFFD"
        );
    }
    text.into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use rust_decimal::Decimal;
    use std::io::Write;
    use std::str::FromStr;

    const SAMPLE_EXPORT: &str = "#Klient;
JAN KOWALSKI;

#Data operacji;#Opis operacji;#Rachunek;#Kategoria;#Kwota;
2020-01-05;\"Restaurant ABC\";\"eKonto\";\"Jedzenie\";-45,50 PLN;
2020-01-10;\"Salary\";\"eKonto\";\"Wpływy\";3 000,00 PLN;
";

    #[test]
    fn test_builder_new() {
        let builder = ParserBuilder::new();
        assert!(builder.input.is_none());
        assert!(builder.filepath.is_none());
        assert!(builder.encoding.is_none());
        assert!(builder.header_marker.is_none());
    }

    #[test]
    fn test_builder_chaining() {
        let builder = ParserBuilder::new()
            .bytes(b"content")
            .filename("history.csv")
            .encoding("utf-8")
            .header_marker("# Last line");

        assert_eq!(builder.input, Some(Input::Bytes(b"content".to_vec())));
        assert_eq!(builder.filepath, Some(PathBuf::from("history.csv")));
        assert_eq!(builder.encoding.as_deref(), Some("utf-8"));
        assert_eq!(builder.header_marker.as_deref(), Some("# Last line"));
    }

    #[test]
    fn test_parse_content() {
        let history = ParserBuilder::new().content(SAMPLE_EXPORT).parse().unwrap();

        assert_eq!(history.len(), 2);
        assert_eq!(history[1].category, "Wpływy");
        assert_eq!(history[1].amount, Decimal::from_str("3000.00").unwrap());
    }

    #[test]
    fn test_content_is_not_decoded_again() {
        let history = ParserBuilder::new()
            .content("#Data operacji;\n2020-01-05;a;;Wpływy;1,00 PLN\n")
            .encoding("windows-1250")
            .parse()
            .unwrap();

        assert_eq!(history.len(), 1);
        assert_eq!(history[0].category, "Wpływy");
    }

    #[test]
    fn test_later_input_replaces_earlier() {
        let builder = ParserBuilder::new().bytes(b"raw").content("text");
        assert_eq!(builder.input, Some(Input::Text("text".to_string())));
    }

    #[test]
    fn test_parse_windows_1250_bytes() {
        let (bytes, _, _) = encoding_rs::WINDOWS_1250.encode(SAMPLE_EXPORT);

        let history = ParserBuilder::new().bytes(&bytes).parse().unwrap();

        assert_eq!(history.len(), 2);
        assert_eq!(history[1].category, "Wpływy");
    }

    #[test]
    fn test_parse_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        let (bytes, _, _) = encoding_rs::WINDOWS_1250.encode(SAMPLE_EXPORT);
        file.write_all(&bytes).unwrap();

        let history = ParserBuilder::new().filename(file.path()).parse().unwrap();

        assert_eq!(history.len(), 2);
        assert_eq!(history[0].date, NaiveDate::from_ymd_opt(2020, 1, 5).unwrap());
    }

    #[test]
    fn test_parse_missing_file() {
        let result = ParserBuilder::new()
            .filename("/definitely/not/here/history.csv")
            .parse();

        assert!(matches!(result, Err(QueryError::FileAccess { .. })));
    }

    #[test]
    fn test_parse_no_content_no_filepath() {
        let result = ParserBuilder::new().parse();
        assert!(matches!(result, Err(QueryError::MissingContentAndFilepath)));
    }

    #[test]
    fn test_parse_unknown_encoding() {
        let result = ParserBuilder::new()
            .bytes(SAMPLE_EXPORT.as_bytes())
            .encoding("klingon-1")
            .parse();

        assert!(matches!(result, Err(QueryError::UnknownEncoding(label)) if label == "klingon-1"));
    }

    #[test]
    fn test_parse_without_marker_is_empty() {
        let history = ParserBuilder::new()
            .content("2020-01-05;x;;;-1,00 PLN\n")
            .parse()
            .unwrap();

        assert!(history.is_empty());
    }

    #[test]
    fn test_parse_custom_marker() {
        let history = ParserBuilder::new()
            .content("# header\n# Last line of the header\n2020-01-05;x;;;-1,00 PLN\n")
            .header_marker("# Last line")
            .parse()
            .unwrap();

        assert_eq!(history.len(), 1);
    }

    #[test]
    fn test_parse_malformed_row_fails_whole_run() {
        let content = format!("{SAMPLE_EXPORT}2020-01-11;\"Bad\";\"eKonto\";\"\";lots PLN;\n");

        let result = ParserBuilder::new().content(&content).parse();

        assert!(matches!(result, Err(QueryError::MalformedRow { line: 7, .. })));
    }
}
