//! Integration Tests - Daily Fee Adapter against a Mocked Subgraph
//!
//! Tests the interaction between the use case, the registry and the
//! subgraph port. Uses mockall for trait mocking and tokio::test for
//! async tests.

mod common;

use std::sync::Arc;

use common::uniform_snapshot;
use mockall::mock;
use mockall::predicate::*;

use lyra_fees_adapter::adapters::metrics::AdapterMetrics;
use lyra_fees_adapter::config::EndpointTable;
use lyra_fees_adapter::domain::{Chain, FeeSnapshot};
use lyra_fees_adapter::error::{AdapterError, UpstreamFailure};
use lyra_fees_adapter::usecases::{AdapterRegistry, DailyFeeAdapter};

// ---- Mock Definitions ----

mock! {
    pub Subgraph {}

    #[async_trait::async_trait]
    impl lyra_fees_adapter::ports::SubgraphClient for Subgraph {
        async fn daily_fee_snapshots(
            &self,
            endpoint: &str,
            day_start: i64,
        ) -> Result<Vec<FeeSnapshot>, UpstreamFailure>;
    }
}

const OPTIMISM_URL: &str = "https://api.lyra.finance/subgraph/optimism/v1/api";
const ONE: &str = "1000000000000000000";

fn adapter(mock: MockSubgraph) -> DailyFeeAdapter<MockSubgraph> {
    DailyFeeAdapter::new(Arc::new(mock), EndpointTable::default())
}

// ---- Integration Tests ----

#[tokio::test]
async fn test_query_uses_day_start_and_summary_echoes_input() {
    let mut mock = MockSubgraph::new();
    mock.expect_daily_fee_snapshots()
        .with(eq(OPTIMISM_URL), eq(1_656_115_200))
        .times(1)
        .returning(|_, _| Ok(vec![uniform_snapshot(ONE)]));

    let summary = adapter(mock)
        .fetch(Chain::Optimism, 1_656_161_234)
        .await
        .unwrap();

    assert_eq!(summary.timestamp, 1_656_161_234);
    assert_eq!(summary.daily_fees, "7");
}

#[tokio::test]
async fn test_two_snapshots_of_one_unit_per_field() {
    let mut mock = MockSubgraph::new();
    mock.expect_daily_fee_snapshots()
        .returning(|_, _| Ok(vec![uniform_snapshot(ONE), uniform_snapshot(ONE)]));

    let summary = adapter(mock).fetch(Chain::Optimism, 1_656_115_200).await.unwrap();

    assert_eq!(summary.daily_fees, "14");
    assert_eq!(summary.daily_user_fees, "14");
    assert_eq!(summary.daily_supply_side_revenue, "14");
    assert_eq!(summary.daily_revenue, "0");
    assert_eq!(summary.daily_holders_revenue, "0");
    assert_eq!(summary.daily_protocol_revenue, "0");
}

#[tokio::test]
async fn test_empty_day_reports_zero() {
    let mut mock = MockSubgraph::new();
    mock.expect_daily_fee_snapshots()
        .returning(|_, _| Ok(Vec::new()));

    let summary = adapter(mock).fetch(Chain::Optimism, 1_656_115_200).await.unwrap();
    assert_eq!(summary.daily_fees, "0");
}

#[tokio::test]
async fn test_sub_unit_remainder_truncates() {
    let mut mock = MockSubgraph::new();
    mock.expect_daily_fee_snapshots().returning(|_, _| {
        Ok(vec![FeeSnapshot {
            option_price_fees: "1500000000000000000".to_string(),
            ..uniform_snapshot("0")
        }])
    });

    let summary = adapter(mock).fetch(Chain::Optimism, 1_656_115_200).await.unwrap();
    assert_eq!(summary.daily_fees, "1");
}

#[tokio::test]
async fn test_remainders_of_separate_markets_do_not_combine() {
    let mut mock = MockSubgraph::new();
    mock.expect_daily_fee_snapshots().returning(|_, _| {
        let market = FeeSnapshot {
            spot_price_fees: "600000000000000000".to_string(),
            ..uniform_snapshot("0")
        };
        Ok(vec![market.clone(), market])
    });

    let summary = adapter(mock).fetch(Chain::Optimism, 1_656_115_200).await.unwrap();
    assert_eq!(summary.daily_fees, "0");
    assert_eq!(summary.daily_supply_side_revenue, "0");
}

#[tokio::test]
async fn test_min_timestamp_rejected_before_query() {
    let mut mock = MockSubgraph::new();
    mock.expect_daily_fee_snapshots().never();

    let err = adapter(mock).fetch(Chain::Optimism, i64::MIN).await.unwrap_err();
    assert!(matches!(err, AdapterError::InvalidTimestamp(i64::MIN)));
}

#[tokio::test]
async fn test_upstream_failure_rejects_instead_of_zero() {
    let mut mock = MockSubgraph::new();
    mock.expect_daily_fee_snapshots()
        .times(1)
        .returning(|_, _| {
            Err(UpstreamFailure::Status {
                status: 503,
                body: "indexer unavailable".to_string(),
            })
        });

    let metrics = Arc::new(AdapterMetrics::new().unwrap());
    let adapter = adapter(mock).with_metrics(Arc::clone(&metrics));

    let err = adapter
        .fetch(Chain::Optimism, 1_656_161_234)
        .await
        .unwrap_err();

    match err {
        AdapterError::UpstreamQuery { chain, source } => {
            assert_eq!(chain, Chain::Optimism);
            assert!(matches!(source, UpstreamFailure::Status { status: 503, .. }));
        }
        other => panic!("expected UpstreamQuery, got {other:?}"),
    }

    let exposition = metrics.encode().unwrap();
    assert!(exposition.contains("outcome=\"upstream_error\""));
    assert!(!exposition.contains("outcome=\"ok\""));
}

#[tokio::test]
async fn test_graphql_errors_propagate() {
    let mut mock = MockSubgraph::new();
    mock.expect_daily_fee_snapshots()
        .returning(|_, _| Err(UpstreamFailure::GraphQl(vec!["bad query".to_string()])));

    let err = adapter(mock).fetch(Chain::Optimism, 0).await.unwrap_err();
    assert!(err.to_string().contains("bad query"));
}

#[tokio::test]
async fn test_endpoint_override_is_used() {
    let mut mock = MockSubgraph::new();
    mock.expect_daily_fee_snapshots()
        .with(eq("http://localhost:8000/graphql"), always())
        .times(1)
        .returning(|_, _| Ok(Vec::new()));

    let endpoints = EndpointTable::new([(
        Chain::Optimism,
        "http://localhost:8000/graphql".to_string(),
    )]);
    let adapter = DailyFeeAdapter::new(Arc::new(mock), endpoints);

    adapter.fetch(Chain::Optimism, 1_656_115_200).await.unwrap();
}

#[tokio::test]
async fn test_concurrent_fetches_are_independent() {
    let mut mock = MockSubgraph::new();
    mock.expect_daily_fee_snapshots()
        .times(2)
        .returning(|_, day_start| {
            // One unit per field on the first day, two on the next.
            let raw = if day_start == 1_656_115_200 {
                ONE
            } else {
                "2000000000000000000"
            };
            Ok(vec![uniform_snapshot(raw)])
        });

    let adapter = Arc::new(adapter(mock));
    let first = tokio::spawn({
        let adapter = Arc::clone(&adapter);
        async move { adapter.fetch(Chain::Optimism, 1_656_161_234).await }
    });
    let second = tokio::spawn({
        let adapter = Arc::clone(&adapter);
        async move { adapter.fetch(Chain::Optimism, 1_656_161_234 + 86_400).await }
    });

    let first = first.await.unwrap().unwrap();
    let second = second.await.unwrap().unwrap();
    assert_eq!(first.daily_fees, "7");
    assert_eq!(second.daily_fees, "14");
    assert_eq!(second.timestamp, 1_656_161_234 + 86_400);
}

#[tokio::test]
async fn test_registry_entry_round_trip() {
    let mut mock = MockSubgraph::new();
    mock.expect_daily_fee_snapshots()
        .returning(|_, _| Ok(vec![uniform_snapshot(ONE)]));

    let registry = AdapterRegistry::new(adapter(mock));
    let entry = registry.get(Chain::Optimism).unwrap();

    assert_eq!(entry.start(), 1_656_154_800);
    assert_eq!(
        entry.meta().methodology.fees,
        "All fees collected comes from user fees"
    );

    let summary = entry.fetch(1_656_154_800).await.unwrap();
    let json = serde_json::to_value(&summary).unwrap();
    assert_eq!(json["dailyFees"], "7");
    assert_eq!(json["timestamp"], 1_656_154_800);
}
