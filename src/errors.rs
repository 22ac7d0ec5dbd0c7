/// Domain-specific error types for the pricing core.
/// The pricers never swallow or log failures internally; every error
/// propagates to the caller, which decides whether to skip the row,
/// show a missing-value marker, or abort.
#[derive(Debug, thiserror::Error)]
pub enum PricingError {
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("config error: {0}")]
    Config(String),
}

pub type PricingResult<T> = Result<T, PricingError>;
