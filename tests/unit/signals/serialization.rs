//! Wire format of screening results

use serde_json::json;
use stocktrix::indicators::{indicators_for_category, IndicatorCategory};
use stocktrix::models::{FinalSignal, ScreenerResult};
use stocktrix::signals::{Screener, SignalEvaluator};

use crate::common_fixtures::{bullish_trend_snapshot, neutral_snapshot};

#[test]
fn test_result_uses_dashboard_keys() {
    let result = SignalEvaluator::default()
        .evaluate(
            &bullish_trend_snapshot("HDFCBANK"),
            indicators_for_category(IndicatorCategory::Trend),
        )
        .unwrap();
    let value = serde_json::to_value(&result).unwrap();

    assert_eq!(value["id"], json!("HDFCBANK"));
    assert_eq!(value["stock"]["symbol"], json!("HDFCBANK"));
    assert_eq!(value["buySignals"], json!(4));
    assert_eq!(value["shortSignals"], json!(0));
    assert_eq!(value["totalScore"], json!(8));
    assert_eq!(value["finalSignal"], json!("Buy"));
    assert_eq!(value["strength"], json!(10));
    assert_eq!(value["indicators"][0], json!("SMA/EMA (Buy)"));
}

#[test]
fn test_result_survives_json_round_trip() {
    let result = SignalEvaluator::default()
        .evaluate(
            &bullish_trend_snapshot("MARUTI"),
            indicators_for_category(IndicatorCategory::Trend),
        )
        .unwrap();

    let encoded = serde_json::to_string(&result).unwrap();
    let decoded: ScreenerResult = serde_json::from_str(&encoded).unwrap();

    assert_eq!(decoded.final_signal, FinalSignal::Buy);
    assert_eq!(decoded.total_score, result.total_score);
    assert_eq!(decoded.strength, result.strength);
    assert_eq!(decoded, result);
}

#[test]
fn test_report_failures_expose_message_only() {
    let mut broken = neutral_snapshot("BAD");
    broken.rsi = None;
    let report = Screener::default().screen_category(&[broken], IndicatorCategory::Momentum);

    let value = serde_json::to_value(&report).unwrap();
    assert_eq!(value["results"], json!([]));
    assert_eq!(value["failures"][0]["symbol"], json!("BAD"));
    assert!(value["failures"][0]["message"].as_str().unwrap().contains("rsi"));
    assert!(value["failures"][0].get("error").is_none());
}
