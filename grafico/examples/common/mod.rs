use std::sync::Arc;

use grafico::FundamentalsConnector;
use grafico_alphavantage::{API_KEY_ENV, AvConnector};
use grafico_mock::MockConnector;

/// Pick the examples connector: live Alpha Vantage when a key is configured,
/// the deterministic mock otherwise (CI-safe default).
pub fn get_connector() -> Arc<dyn FundamentalsConnector> {
    match std::env::var(API_KEY_ENV) {
        Ok(key) if !key.is_empty() => Arc::new(AvConnector::builder().api_key(key).build()),
        _ => {
            eprintln!("{API_KEY_ENV} not set; using the deterministic mock connector");
            Arc::new(MockConnector::new())
        }
    }
}
