use crate::contract::{OptionContract, OptionType};
use crate::errors::PricingResult;
use crate::pricing::Pricer;
use statrs::distribution::{ContinuousCDF, Normal};

/// Closed-form European option valuation under lognormal dynamics.
///
/// call = S * Phi(d1) - K * e^(-rT) * Phi(d2)
/// put  = K * e^(-rT) * Phi(-d2) - S * Phi(-d1)
///
/// where d1 = (ln(S/K) + (r + sigma^2/2) * T) / (sigma * sqrt(T))
/// and d2 = d1 - sigma * sqrt(T).
///
/// Phi is evaluated at full double precision; this price is the reference
/// the simulator is judged against.
pub struct AnalyticPricer {
    /// Standard normal distribution (created once, reused)
    normal: Normal,
}

impl AnalyticPricer {
    pub fn new() -> Self {
        // Normal::new(0, 1) only fails if std_dev <= 0; this is safe.
        let normal = Normal::new(0.0, 1.0).unwrap_or(Normal::standard());
        Self { normal }
    }
}

impl Default for AnalyticPricer {
    fn default() -> Self {
        Self::new()
    }
}

impl Pricer for AnalyticPricer {
    #[inline]
    fn name(&self) -> &'static str {
        "analytic"
    }

    /// Pure function: theoretical price from the contract inputs only.
    fn price(&self, contract: &OptionContract) -> PricingResult<f64> {
        contract.validate()?;

        let vol_sqrt_t = contract.volatility * contract.time_to_expiry.sqrt();
        let d1 = ((contract.spot / contract.strike).ln()
            + (contract.rate + 0.5 * contract.volatility * contract.volatility)
                * contract.time_to_expiry)
            / vol_sqrt_t;
        let d2 = d1 - vol_sqrt_t;

        let discounted_strike = contract.strike * contract.discount_factor();

        let price = match contract.option_type {
            OptionType::Call => {
                contract.spot * self.normal.cdf(d1) - discounted_strike * self.normal.cdf(d2)
            }
            OptionType::Put => {
                discounted_strike * self.normal.cdf(-d2) - contract.spot * self.normal.cdf(-d1)
            }
        };

        // The closed form is non-negative; clamp shields deep-OTM rounding.
        Ok(price.max(0.0))
    }
}
