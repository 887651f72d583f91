use marketpulse::config::FetchConfig;
use marketpulse::indicators::IndicatorEngine;
use marketpulse::logging::init_logging;
use marketpulse::models::granularity::Granularity;
use marketpulse::services::failover::FailoverFetcher;
use marketpulse::signals::SignalEngine;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    init_logging();

    let symbol = std::env::args().nth(1).unwrap_or_else(|| "BTCUSDT".to_string());
    let config = FetchConfig::from_env();
    let fetcher = FailoverFetcher::from_config(config)?;

    let outcome = fetcher.fetch(&symbol, Granularity::Day1, 200).await?;
    for warning in &outcome.warnings {
        println!("warning: {warning}");
    }

    let indicators = IndicatorEngine::compute(&outcome.series);
    let report = SignalEngine::evaluate(&outcome.series, &indicators);

    println!(
        "{} ({} bars via {})",
        outcome.series.symbol(),
        outcome.series.len(),
        outcome.provider
    );
    if let Some(last) = outcome.series.last() {
        println!("close: {:.4} @ {}", last.close, last.timestamp);
    }
    for signal in report.buy.iter().chain(&report.sell).chain(&report.neutral) {
        println!("  [{:?}] {} ({:+})", signal.category, signal.label, signal.weight);
    }
    println!("score: {}", report.score);
    // Banding is presentation only; the score itself stays unclamped.
    let verdict = match report.score {
        s if s >= 60 => "strong buy",
        s if s >= 30 => "buy",
        s if s <= -60 => "strong sell",
        s if s <= -30 => "sell",
        _ => "hold",
    };
    println!("verdict: {verdict}");

    Ok(())
}
