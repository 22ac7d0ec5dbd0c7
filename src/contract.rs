use crate::errors::{PricingError, PricingResult};

/// Contract side. Serialized lowercase to match chain feeds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OptionType {
    Call,
    Put,
}

impl OptionType {
    /// Exercise value at a terminal underlying price.
    #[inline]
    pub fn payoff(&self, terminal: f64, strike: f64) -> f64 {
        match self {
            Self::Call => (terminal - strike).max(0.0),
            Self::Put => (strike - terminal).max(0.0),
        }
    }
}

impl std::fmt::Display for OptionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Call => write!(f, "call"),
            Self::Put => write!(f, "put"),
        }
    }
}

/// A single European option to value. Immutable once built; every pricing
/// call is a pure evaluation over this tuple.
///
/// `time_to_expiry` is in years and must be strictly positive. Flooring
/// near-expiry or already-expired rows is the data layer's job (see
/// `chain::time_to_expiry`); a non-positive value here is rejected, never
/// clamped.
#[derive(Debug, Clone, Copy, serde::Serialize)]
pub struct OptionContract {
    pub spot: f64,
    pub strike: f64,
    /// Continuously-compounded risk-free rate. May be negative.
    pub rate: f64,
    pub time_to_expiry: f64,
    /// Annualized volatility of log-returns. Strictly positive.
    pub volatility: f64,
    pub option_type: OptionType,
}

impl OptionContract {
    pub fn new(
        spot: f64,
        strike: f64,
        rate: f64,
        time_to_expiry: f64,
        volatility: f64,
        option_type: OptionType,
    ) -> PricingResult<Self> {
        let contract = Self {
            spot,
            strike,
            rate,
            time_to_expiry,
            volatility,
            option_type,
        };
        contract.validate()?;
        Ok(contract)
    }

    /// Check the domain preconditions. Both pricers call this before any
    /// computation, so a hand-built struct literal cannot produce NaN or
    /// infinite prices further down.
    pub fn validate(&self) -> PricingResult<()> {
        if !(self.spot.is_finite() && self.spot > 0.0) {
            return Err(PricingError::InvalidInput(format!(
                "spot must be positive and finite, got {}",
                self.spot
            )));
        }
        if !(self.strike.is_finite() && self.strike > 0.0) {
            return Err(PricingError::InvalidInput(format!(
                "strike must be positive and finite, got {}",
                self.strike
            )));
        }
        if !self.rate.is_finite() {
            return Err(PricingError::InvalidInput(format!(
                "rate must be finite, got {}",
                self.rate
            )));
        }
        if !(self.time_to_expiry.is_finite() && self.time_to_expiry > 0.0) {
            return Err(PricingError::InvalidInput(format!(
                "time_to_expiry must be positive and finite, got {}",
                self.time_to_expiry
            )));
        }
        if !(self.volatility.is_finite() && self.volatility > 0.0) {
            return Err(PricingError::InvalidInput(format!(
                "volatility must be positive and finite, got {}",
                self.volatility
            )));
        }
        Ok(())
    }

    /// Discount factor e^(-rT) shared by both pricers.
    #[inline]
    pub fn discount_factor(&self) -> f64 {
        (-self.rate * self.time_to_expiry).exp()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_contract_constructs() {
        let c = OptionContract::new(1000.0, 1010.0, 0.05, 1.0, 0.15, OptionType::Call);
        assert!(c.is_ok(), "typical contract should validate: {c:?}");
    }

    #[test]
    fn test_negative_rate_allowed() {
        let c = OptionContract::new(100.0, 100.0, -0.01, 1.0, 0.2, OptionType::Put);
        assert!(c.is_ok(), "negative rates are in-domain: {c:?}");
    }

    #[test]
    fn test_rejects_nonpositive_time() {
        for t in [0.0, -0.5] {
            let c = OptionContract::new(100.0, 100.0, 0.05, t, 0.2, OptionType::Call);
            assert!(
                matches!(c, Err(PricingError::InvalidInput(_))),
                "time_to_expiry={t} should be rejected"
            );
        }
    }

    #[test]
    fn test_rejects_nonpositive_volatility() {
        for vol in [0.0, -0.2] {
            let c = OptionContract::new(100.0, 100.0, 0.05, 1.0, vol, OptionType::Call);
            assert!(
                matches!(c, Err(PricingError::InvalidInput(_))),
                "volatility={vol} should be rejected"
            );
        }
    }

    #[test]
    fn test_rejects_nonpositive_spot_and_strike() {
        let c = OptionContract::new(0.0, 100.0, 0.05, 1.0, 0.2, OptionType::Call);
        assert!(matches!(c, Err(PricingError::InvalidInput(_))));

        let c = OptionContract::new(100.0, -10.0, 0.05, 1.0, 0.2, OptionType::Put);
        assert!(matches!(c, Err(PricingError::InvalidInput(_))));
    }

    #[test]
    fn test_rejects_non_finite_inputs() {
        let c = OptionContract::new(f64::NAN, 100.0, 0.05, 1.0, 0.2, OptionType::Call);
        assert!(matches!(c, Err(PricingError::InvalidInput(_))));

        let c = OptionContract::new(100.0, 100.0, f64::INFINITY, 1.0, 0.2, OptionType::Call);
        assert!(matches!(c, Err(PricingError::InvalidInput(_))));
    }

    #[test]
    fn test_payoff() {
        assert_eq!(OptionType::Call.payoff(110.0, 100.0), 10.0);
        assert_eq!(OptionType::Call.payoff(90.0, 100.0), 0.0);
        assert_eq!(OptionType::Put.payoff(90.0, 100.0), 10.0);
        assert_eq!(OptionType::Put.payoff(110.0, 100.0), 0.0);
    }
}
