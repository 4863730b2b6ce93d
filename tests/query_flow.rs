use chrono::NaiveDate;
use mquery::{
    FilterCriteria, ParserBuilder, QueryError, RowField, Summary, Transaction, filter_history,
};
use rstest::{fixture, rstest};
use rust_decimal::Decimal;
use std::str::FromStr;

const EXPORT: &str = "#Klient;
JAN KOWALSKI;

#Data operacji;#Opis operacji;#Rachunek;#Kategoria;#Kwota;
2020-01-05;\"Restaurant ABC\";\"eKonto 1234\";\"Jedzenie\";-45,50 PLN;
2020-01-10;\"Salary\";\"eKonto 1234\";\"Wpływy\";3 000,00 PLN;
2019-12-20;\"Restaurant XYZ\";\"eKonto 1234\";\"Jedzenie\";-12,00 PLN;
";

fn dec(s: &str) -> Decimal {
    Decimal::from_str(s).unwrap()
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[fixture]
fn history() -> Vec<Transaction> {
    ParserBuilder::new().content(EXPORT).parse().unwrap()
}

#[rstest]
fn parses_every_row_in_order(history: Vec<Transaction>) {
    let descriptions: Vec<&str> = history.iter().map(|t| t.description.as_str()).collect();
    assert_eq!(descriptions, vec!["Restaurant ABC", "Salary", "Restaurant XYZ"]);
}

#[rstest]
#[case(FilterCriteria::new().date_from(date(2020, 1, 1)).description("restaurant"), &["Restaurant ABC"])]
#[case(FilterCriteria::new().amount_from(dec("40")), &["Salary"])]
#[case(FilterCriteria::new().date_to(date(2019, 12, 31)), &["Restaurant XYZ"])]
#[case(FilterCriteria::new().category("JEDZENIE").amount_to(dec("-20")), &["Restaurant ABC"])]
#[case(FilterCriteria::new().currency("eur"), &[])]
#[case(FilterCriteria::new(), &["Restaurant ABC", "Salary", "Restaurant XYZ"])]
fn filters_parsed_history(
    history: Vec<Transaction>,
    #[case] criteria: FilterCriteria,
    #[case] expected: &[&str],
) {
    let matching = filter_history(&history, &criteria.predicate());

    let descriptions: Vec<&str> = matching.iter().map(|t| t.description.as_str()).collect();
    assert_eq!(descriptions, expected);
}

#[rstest]
fn summary_over_unfiltered_history(history: Vec<Transaction>) {
    let summary = Summary::of(&history).unwrap();

    assert_eq!(summary.total_income, dec("3000.00"));
    assert_eq!(summary.total_expense, dec("-57.50"));
}

#[rstest]
fn summary_over_empty_result(history: Vec<Transaction>) {
    let criteria = FilterCriteria::new().description("nothing like this");

    let matching = filter_history(&history, &criteria.predicate());
    let summary = Summary::of(&matching).unwrap();

    assert!(matching.is_empty());
    assert_eq!(summary.total_income, Decimal::ZERO);
    assert_eq!(summary.total_expense, Decimal::ZERO);
}

#[test]
fn malformed_amount_fails_whole_export() {
    let content = EXPORT.replace("-12,00 PLN", "twelve PLN");

    let err = ParserBuilder::new().content(&content).parse().unwrap_err();

    match err {
        QueryError::MalformedRow { line, source } => {
            assert_eq!(line, 7);
            assert_eq!(source.field, RowField::Amount);
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn oversized_totals_fail_instead_of_panicking() {
    let content = "#Data operacji;
2020-01-05;a;;;50000000000000000000000000000 PLN
2020-01-06;b;;;50000000000000000000000000000 PLN
";
    let history = ParserBuilder::new().content(content).parse().unwrap();

    let result = Summary::of(&history);

    assert_eq!(history.len(), 2);
    assert!(matches!(result, Err(QueryError::SummaryOverflow)));
}
