use grafico_core::connector::FundamentalsConnector;
use grafico_mock::{EMPTY_SYMBOL, FAIL_SYMBOL, MockConnector};
use grafico_types::{GraficoError, QuarterlyReport};

#[tokio::test]
async fn fixtures_are_deterministic_per_symbol() {
    let mock = MockConnector::new();
    let provider = mock
        .as_income_statement_provider()
        .expect("income capability");

    let first = provider.quarterly_income_statements("IBM").await.expect("ok");
    let second = provider.quarterly_income_statements("IBM").await.expect("ok");
    assert_eq!(first, second);
    assert_eq!(first.len(), 8);
    assert_eq!(first[0].fiscal_date_ending, "2023-12-31");

    let other = provider.quarterly_income_statements("MSFT").await.expect("ok");
    assert_ne!(first, other, "different symbols should chart differently");
}

#[tokio::test]
async fn income_and_balance_fixtures_cover_the_same_periods() {
    let mock = MockConnector::new();
    let income = mock
        .as_income_statement_provider()
        .expect("income capability")
        .quarterly_income_statements("IBM")
        .await
        .expect("ok");
    let balance = mock
        .as_balance_sheet_provider()
        .expect("balance capability")
        .quarterly_balance_sheets("IBM")
        .await
        .expect("ok");

    assert_eq!(income.len(), balance.len());
    for (i, b) in income.iter().zip(&balance) {
        assert_eq!(i.fiscal_date_ending, b.fiscal_date_ending);
    }
}

#[tokio::test]
async fn reserved_symbols_force_failure_modes() {
    let mock = MockConnector::new();
    let provider = mock
        .as_income_statement_provider()
        .expect("income capability");

    let err = provider
        .quarterly_income_statements(FAIL_SYMBOL)
        .await
        .expect_err("forced failure");
    assert!(matches!(err, GraficoError::Connector { .. }));

    let empty = provider
        .quarterly_income_statements(EMPTY_SYMBOL)
        .await
        .expect("ok");
    assert!(empty.is_empty());
}

#[tokio::test]
async fn builder_closures_override_a_capability() {
    let mock = MockConnector::builder()
        .name("custom-mock")
        .with_income_fn(|symbol| {
            Ok(vec![QuarterlyReport::income(
                "2024-03-31",
                "1",
                symbol.len().to_string(),
            )])
        })
        .build();

    assert_eq!(mock.name(), "custom-mock");
    let reports = mock
        .as_income_statement_provider()
        .expect("income capability")
        .quarterly_income_statements("IBM")
        .await
        .expect("ok");
    assert_eq!(reports.len(), 1);
    assert_eq!(reports[0].total_revenue_value(), 3.0);
}

#[tokio::test]
async fn withheld_capability_is_not_advertised() {
    let mock = MockConnector::builder().without_balance_sheets().build();
    assert!(mock.as_balance_sheet_provider().is_none());
    assert!(mock.as_income_statement_provider().is_some());
}
