use crate::errors::{PricingError, PricingResult};

/// Bounds on the user-facing simulation count. The engine itself tolerates
/// more (see `pricing::MAX_SIMULATIONS`); these are the knobs the calling
/// layer exposes.
pub const MIN_CONFIG_SIMULATIONS: usize = 1_000;
pub const MAX_CONFIG_SIMULATIONS: usize = 100_000;

/// Calling-layer parameters threaded into every pricing call. None of these
/// belong to the pricers themselves.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub symbol: String,
    /// Continuously-compounded risk-free rate as a decimal, converted from
    /// the percentage the user sets.
    pub risk_free_rate: f64,
    pub n_simulations: usize,
    /// Optional fixed seed for a reproducible simulation column. Absent by
    /// default so production calls draw independently.
    pub mc_seed: Option<u64>,
}

impl AppConfig {
    pub fn from_env() -> PricingResult<Self> {
        dotenvy::dotenv().ok();

        let rate_pct = env_var_or("RISK_FREE_RATE_PCT", "5.0")
            .parse::<f64>()
            .map_err(|e| PricingError::Config(format!("RISK_FREE_RATE_PCT: {e}")))?;
        if !rate_pct.is_finite() {
            return Err(PricingError::Config(format!(
                "RISK_FREE_RATE_PCT must be finite, got {rate_pct}"
            )));
        }

        let n_simulations = env_var_or("N_SIMULATIONS", "10000")
            .parse::<usize>()
            .map_err(|e| PricingError::Config(format!("N_SIMULATIONS: {e}")))?;
        if !(MIN_CONFIG_SIMULATIONS..=MAX_CONFIG_SIMULATIONS).contains(&n_simulations) {
            return Err(PricingError::Config(format!(
                "N_SIMULATIONS must be in [{MIN_CONFIG_SIMULATIONS}, {MAX_CONFIG_SIMULATIONS}], got {n_simulations}"
            )));
        }

        let mc_seed = match std::env::var("MC_SEED") {
            Ok(v) => Some(
                v.parse::<u64>()
                    .map_err(|e| PricingError::Config(format!("MC_SEED: {e}")))?,
            ),
            Err(_) => None,
        };

        Ok(Self {
            symbol: env_var_or("SYMBOL", "SPY"),
            risk_free_rate: rate_pct / 100.0,
            n_simulations,
            mc_seed,
        })
    }
}

fn env_var_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
