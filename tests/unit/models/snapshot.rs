//! Unit tests for the stock snapshot model

use serde_json::json;
use stocktrix::error::ScreenerError;
use stocktrix::models::{IndicatorField, PriceActionPattern, StockSnapshot, SupertrendState};

use crate::common_fixtures::neutral_snapshot;

#[test]
fn test_value_reads_present_fields() {
    let snapshot = neutral_snapshot("TCS").with_rsi(42.5);
    assert_eq!(snapshot.value(IndicatorField::Rsi).unwrap(), 42.5);
    assert_eq!(snapshot.value(IndicatorField::Price).unwrap(), 100.0);
}

#[test]
fn test_missing_field_is_malformed() {
    let mut snapshot = neutral_snapshot("TCS");
    snapshot.rsi = None;

    let err = snapshot.value(IndicatorField::Rsi).unwrap_err();
    assert_eq!(
        err,
        ScreenerError::MalformedSnapshot {
            symbol: "TCS".to_string(),
            field: "rsi",
        }
    );
}

#[test]
fn test_non_finite_field_is_malformed() {
    let snapshot = neutral_snapshot("INFY").with_value(IndicatorField::Cmf, f64::NAN);
    assert!(matches!(
        snapshot.value(IndicatorField::Cmf),
        Err(ScreenerError::MalformedSnapshot { field: "cmf", .. })
    ));

    let snapshot = neutral_snapshot("INFY").with_value(IndicatorField::Price, f64::INFINITY);
    assert!(snapshot.value(IndicatorField::Price).is_err());
}

#[test]
fn test_missing_supertrend_is_malformed() {
    let snapshot = StockSnapshot::new("SBIN", "State Bank of India", 600.0, 1.0, 10_000.0);
    assert!(matches!(
        snapshot.supertrend(),
        Err(ScreenerError::MalformedSnapshot { field: "supertrend", .. })
    ));
}

#[test]
fn test_serializes_dashboard_field_names() {
    let snapshot = neutral_snapshot("ITC")
        .with_52_week(true, false)
        .with_pattern(PriceActionPattern::MorningStar);
    let value = serde_json::to_value(&snapshot).unwrap();

    assert_eq!(value["plusDI"], json!(20.0));
    assert_eq!(value["minusDI"], json!(20.0));
    assert_eq!(value["volumeMA20"], json!(1_000.0));
    assert_eq!(value["macdHistogram"], json!(0.0));
    assert_eq!(value["is52WeekHigh"], json!(true));
    assert_eq!(value["priceActionPattern"], json!("morning_star"));
    assert_eq!(value["supertrend"], json!("neutral"));
}

#[test]
fn test_deserialize_minimal_payload_uses_defaults() {
    let snapshot: StockSnapshot = serde_json::from_value(json!({
        "symbol": "LT",
        "name": "Larsen & Toubro",
        "price": 3500.0,
        "change": -0.4,
        "volume": 120000.0,
        "rsi": 28.0,
        "supertrend": "sell"
    }))
    .unwrap();

    assert_eq!(snapshot.rsi, Some(28.0));
    assert_eq!(snapshot.supertrend().unwrap(), SupertrendState::Sell);
    assert_eq!(snapshot.sma50, None);
    assert!(!snapshot.is_golden_cross);
    assert_eq!(snapshot.price_action_pattern, PriceActionPattern::None);
}

#[test]
fn test_pattern_classification_is_disjoint() {
    for pattern in PriceActionPattern::ALL {
        assert!(!(pattern.is_bullish() && pattern.is_bearish()), "{:?}", pattern);
    }
    assert_eq!(PriceActionPattern::ALL.iter().filter(|p| p.is_bullish()).count(), 4);
    assert_eq!(PriceActionPattern::ALL.iter().filter(|p| p.is_bearish()).count(), 4);
    assert!(!PriceActionPattern::Doji.is_bullish());
    assert!(!PriceActionPattern::Doji.is_bearish());
}

#[test]
fn test_from_json_decodes_valid_element() {
    let value = serde_json::to_value(neutral_snapshot("HDFCBANK")).unwrap();
    let snapshot = StockSnapshot::from_json(&value, 0).unwrap();
    assert_eq!(snapshot, neutral_snapshot("HDFCBANK").with_timestamp(snapshot.timestamp));
}

#[test]
fn test_from_json_names_non_numeric_field() {
    let mut value = serde_json::to_value(neutral_snapshot("TCS")).unwrap();
    value["adx"] = json!("abc");

    let err = StockSnapshot::from_json(&value, 3).unwrap_err();
    assert_eq!(err, ScreenerError::malformed("TCS", "adx"));
}

#[test]
fn test_from_json_names_missing_quote_field() {
    let mut value = serde_json::to_value(neutral_snapshot("WIPRO")).unwrap();
    value.as_object_mut().unwrap().remove("price");

    let err = StockSnapshot::from_json(&value, 1).unwrap_err();
    assert_eq!(err, ScreenerError::malformed("WIPRO", "price"));
}

#[test]
fn test_from_json_labels_element_without_symbol_by_position() {
    let err = StockSnapshot::from_json(&json!({ "name": "Nameless", "price": 10.0 }), 4).unwrap_err();
    assert_eq!(err, ScreenerError::malformed("#4", "symbol"));

    let err = StockSnapshot::from_json(&json!([1, 2, 3]), 0).unwrap_err();
    assert_eq!(err, ScreenerError::malformed("#0", "snapshot"));
}

#[test]
fn test_from_json_rejects_unknown_enum_labels() {
    let mut value = serde_json::to_value(neutral_snapshot("ITC")).unwrap();
    value["supertrend"] = json!("sideways");
    assert_eq!(
        StockSnapshot::from_json(&value, 0).unwrap_err(),
        ScreenerError::malformed("ITC", "supertrend")
    );

    let mut value = serde_json::to_value(neutral_snapshot("ITC")).unwrap();
    value["isGoldenCross"] = json!("yes");
    assert_eq!(
        StockSnapshot::from_json(&value, 0).unwrap_err(),
        ScreenerError::malformed("ITC", "isGoldenCross")
    );
}

#[test]
fn test_descriptive_fields_serialize_when_set() {
    let timestamp = chrono::DateTime::parse_from_rfc3339("2024-03-01T09:15:00Z")
        .unwrap()
        .with_timezone(&chrono::Utc);
    let snapshot = neutral_snapshot("NTPC")
        .with_exchange("NSE")
        .with_sector("Power")
        .with_timestamp(timestamp);
    let value = serde_json::to_value(&snapshot).unwrap();

    assert_eq!(value["sector"], json!("Power"));
    assert_eq!(value["exchange"], json!("NSE"));
    assert_eq!(value["timestamp"], json!("2024-03-01T09:15:00Z"));
    assert!(serde_json::to_value(neutral_snapshot("NTPC")).unwrap().get("sector").is_none());
}
