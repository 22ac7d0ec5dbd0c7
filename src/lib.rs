//! Two-way European option valuation: a closed-form analytic model and a
//! Monte Carlo simulator over the same risk-neutral dynamics, evaluated
//! per option-chain row for comparison against market quotes.
//!
//! The pricers are pure, stateless functions of a validated
//! [`OptionContract`]; market-data retrieval and display are external
//! collaborators that talk to this crate through the seam types in
//! [`chain`].

pub mod chain;
pub mod config;
pub mod contract;
pub mod errors;
pub mod pricing;

pub use chain::{price_chain, OptionQuote, PricedQuote, MIN_TIME_TO_EXPIRY};
pub use contract::{OptionContract, OptionType};
pub use errors::{PricingError, PricingResult};
pub use pricing::{AnalyticPricer, MonteCarloPricer, Pricer, MAX_SIMULATIONS};
