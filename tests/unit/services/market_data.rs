//! Unit tests for the mock snapshot source

use std::collections::HashSet;

use stocktrix::indicators::IndicatorCategory;
use stocktrix::services::{MockMarketData, SnapshotSource};
use stocktrix::signals::Screener;

#[test]
fn test_seeded_generation_is_reproducible() {
    let first = MockMarketData::seeded(42).generate(10);
    let second = MockMarketData::seeded(42).generate(10);

    let key = |s: &stocktrix::models::StockSnapshot| (s.symbol.clone(), s.price.to_bits(), s.rsi.map(f64::to_bits));
    assert_eq!(
        first.iter().map(key).collect::<Vec<_>>(),
        second.iter().map(key).collect::<Vec<_>>()
    );
}

#[test]
fn test_symbols_are_unique_and_capped() {
    let snapshots = MockMarketData::seeded(5).generate(100);
    assert_eq!(snapshots.len(), MockMarketData::universe_size());
    assert_eq!(snapshots.len(), 25);

    let unique: HashSet<_> = snapshots.iter().map(|s| s.symbol.as_str()).collect();
    assert_eq!(unique.len(), snapshots.len());
}

#[test]
fn test_generated_snapshots_are_complete() {
    let snapshots = MockMarketData::seeded(8).generate(25);
    let screener = Screener::default();
    for category in IndicatorCategory::ALL {
        let report = screener.screen_category(&snapshots, category);
        assert!(report.is_complete(), "{}: {:?}", category, report.failures);
        assert_eq!(report.results.len(), 25);
    }
}

#[test]
fn test_generated_values_are_plausible() {
    for snapshot in MockMarketData::seeded(13).generate(25) {
        assert!(snapshot.price >= 100.0 && snapshot.price <= 5100.0);
        assert!((-5.0..=5.0).contains(&snapshot.change));
        assert!(snapshot.bbands_upper.unwrap() > snapshot.bbands_lower.unwrap());
        assert!(snapshot.donchian_upper.unwrap() > snapshot.donchian_lower.unwrap());
        assert!(!(snapshot.is_golden_cross && snapshot.is_death_cross));
        assert_eq!(snapshot.exchange.as_deref(), Some("NSE"));
    }
}

#[test]
fn test_source_respects_limit() {
    let source = MockMarketData::seeded(1);
    let snapshots = source.fetch_snapshots(7).unwrap();
    assert_eq!(snapshots.len(), 7);
    assert!(source.fetch_snapshots(0).unwrap().is_empty());
}

#[test]
fn test_batch_shares_timestamp_and_carries_sector() {
    let snapshots = MockMarketData::seeded(21).generate(25);
    let first = snapshots[0].timestamp;
    assert!(snapshots.iter().all(|s| s.timestamp == first));
    assert!(snapshots.iter().all(|s| s.sector.as_deref().is_some_and(|sector| !sector.is_empty())));

    let tcs = snapshots.iter().find(|s| s.symbol == "TCS").unwrap();
    assert_eq!(tcs.sector.as_deref(), Some("IT"));
}
