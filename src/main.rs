use dotenvy::dotenv;
use std::env;
use stocktrix::config::{get_environment, Config};
use stocktrix::indicators::{IndicatorCategory, IndicatorRegistry};
use stocktrix::logging;
use stocktrix::models::ScreenerResult;
use stocktrix::services::MockMarketData;
use stocktrix::signals::{Screener, SignalEvaluator};
use tracing::info;

/// Usage: `stocktrix [category] [count]`
fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv().ok();
    logging::init_logging(&get_environment());

    let config = Config::from_env();
    let mut args = env::args().skip(1);

    let category: IndicatorCategory = match args.next() {
        Some(raw) => raw.parse()?,
        None => config.default_category,
    };
    let count = match args.next() {
        Some(raw) => raw.parse()?,
        None => config.universe_size,
    };

    let source = match config.mock_seed {
        Some(seed) => MockMarketData::seeded(seed),
        None => MockMarketData::new(),
    };
    let snapshots = source.generate(count);

    info!(category = %category, snapshots = snapshots.len(), "Running screen");
    let screener = Screener::new(SignalEvaluator::new(config.thresholds));
    let report = screener.screen_category(&snapshots, category);

    println!("{} screen ({} stocks)", category, snapshots.len());
    for indicator in IndicatorRegistry::catalog(category) {
        println!("  - {}: {}", indicator.name, indicator.description);
    }
    println!();

    for (rank, result) in report.results.iter().enumerate() {
        print_result(rank + 1, result, config.thresholds.max_strength);
    }
    for failure in &report.failures {
        println!("  ! {}: {}", failure.symbol, failure.message);
    }

    Ok(())
}

fn print_result(rank: usize, result: &ScreenerResult, max_strength: u32) {
    let stock = &result.snapshot;
    println!(
        "{:>2}. {:<12} {:>9.2} {:>+6.2}%  {:<5} score {:>+3}  strength {:>2}/{}",
        rank,
        stock.symbol,
        stock.price,
        stock.change,
        result.final_signal,
        result.total_score,
        result.strength,
        max_strength
    );
    if !result.indicators.is_empty() {
        println!("      {}", result.indicators.join(", "));
    }
}
