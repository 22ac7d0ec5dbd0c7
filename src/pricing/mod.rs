pub mod analytic;
pub mod monte_carlo;

pub use analytic::AnalyticPricer;
pub use monte_carlo::{MonteCarloPricer, MAX_SIMULATIONS};

use crate::contract::OptionContract;
use crate::errors::PricingResult;

/// Both pricing engines implement this trait.
/// price() must be a pure evaluation: no I/O, no logging, no shared mutable
/// state. Send + Sync so callers can value chain rows from parallel tasks.
pub trait Pricer: Send + Sync {
    fn name(&self) -> &'static str;

    /// Value the contract. Fails with InvalidInput before any computation
    /// when a domain precondition is violated; never returns NaN or an
    /// infinite price.
    fn price(&self, contract: &OptionContract) -> PricingResult<f64>;
}
