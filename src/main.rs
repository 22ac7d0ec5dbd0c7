use fairvalue::chain::{self, OptionQuote};
use fairvalue::config::AppConfig;
use fairvalue::contract::{OptionContract, OptionType};
use fairvalue::pricing::{AnalyticPricer, MonteCarloPricer, Pricer};

/// Demo entry point: prices a static sample chain with both engines and
/// logs the comparison rows. Stands in for the calling layer; the real
/// market-data and display collaborators live outside this crate.
fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let cfg = match AppConfig::from_env() {
        Ok(c) => c,
        Err(e) => {
            tracing::error!("config error: {e}");
            std::process::exit(1);
        }
    };

    tracing::info!(
        symbol = %cfg.symbol,
        rate = cfg.risk_free_rate,
        n_simulations = cfg.n_simulations,
        "fairvalue demo starting"
    );

    let analytic = AnalyticPricer::new();
    let simulation = match MonteCarloPricer::new(cfg.n_simulations) {
        Ok(p) => p,
        Err(e) => {
            tracing::error!("simulation setup error: {e}");
            std::process::exit(1);
        }
    };

    // Sample chain 30 days out, quotes spread around spot with a mild smile.
    let spot = 430.0;
    let now = chrono::Utc::now();
    let t = chain::time_to_expiry(now + chrono::Duration::days(30), now);

    // Cross-check one ATM contract through the Pricer seam, running every
    // engine side by side the way a chain loop would.
    match OptionContract::new(spot, 430.0, cfg.risk_free_rate, t, 0.18, OptionType::Call) {
        Ok(atm) => {
            let pricers: Vec<&dyn Pricer> = vec![&analytic, &simulation];
            for p in &pricers {
                match p.price(&atm) {
                    Ok(v) => tracing::info!(model = p.name(), price = v, "ATM cross-check"),
                    Err(e) => tracing::warn!(model = p.name(), error = %e, "ATM cross-check failed"),
                }
            }
            if let Some(seed) = cfg.mc_seed {
                match simulation.price_seeded(&atm, seed) {
                    Ok(v) => tracing::info!(seed, price = v, "seeded ATM estimate"),
                    Err(e) => tracing::warn!(seed, error = %e, "seeded estimate failed"),
                }
            }
        }
        Err(e) => tracing::warn!(error = %e, "ATM contract rejected"),
    }

    let rows = chain::price_chain(
        spot,
        cfg.risk_free_rate,
        t,
        &analytic,
        &simulation,
        &sample_chain(spot),
    );
    for row in &rows {
        match serde_json::to_string(row) {
            Ok(json) => tracing::info!("{json}"),
            Err(e) => tracing::warn!(error = %e, "row serialization failed"),
        }
    }
}

/// Static strikes around spot with implied vols rising away from the money.
fn sample_chain(spot: f64) -> Vec<OptionQuote> {
    let mut quotes = Vec::new();
    for pct in [-10.0_f64, -5.0, -2.5, 0.0, 2.5, 5.0, 10.0] {
        let strike = (spot * (1.0 + pct / 100.0)).round();
        let iv = 0.18 + 0.002 * pct.abs();
        for option_type in [OptionType::Call, OptionType::Put] {
            quotes.push(OptionQuote {
                strike,
                bid: None,
                ask: None,
                implied_volatility: iv,
                option_type,
            });
        }
    }
    quotes
}
