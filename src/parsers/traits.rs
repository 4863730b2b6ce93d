use crate::errors::QueryResult;

pub trait Parser {
    type Output;

    fn parse(&self, content: &str) -> QueryResult<Vec<Self::Output>>;

    fn is_supported(&self, content: &str) -> bool;
}
