use crate::contract::OptionContract;
use crate::errors::{PricingError, PricingResult};
use crate::pricing::Pricer;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::StandardNormal;

/// Hard cap on draws per call. Keeps a single pricing call bounded even
/// when the calling layer's configuration misbehaves.
pub const MAX_SIMULATIONS: usize = 10_000_000;

/// Monte Carlo European option valuation under risk-neutral GBM.
///
/// S_T = S * exp((r - sigma^2/2) * T + sigma * sqrt(T) * Z),  Z ~ N(0,1)
/// price = e^(-rT) * mean(payoff(S_T))
///
/// The estimate is random: unseeded calls draw fresh variates every time,
/// and the standard error shrinks as 1/sqrt(n_simulations). Seeding is
/// explicit and caller-owned via `price_seeded` or `price_with_rng`;
/// nothing here touches global RNG state.
#[derive(Debug)]
pub struct MonteCarloPricer {
    n_simulations: usize,
}

impl MonteCarloPricer {
    pub fn new(n_simulations: usize) -> PricingResult<Self> {
        if n_simulations == 0 {
            return Err(PricingError::InvalidInput(
                "n_simulations must be positive".into(),
            ));
        }
        if n_simulations > MAX_SIMULATIONS {
            return Err(PricingError::InvalidInput(format!(
                "n_simulations must be at most {MAX_SIMULATIONS}, got {n_simulations}"
            )));
        }
        Ok(Self { n_simulations })
    }

    #[inline]
    pub fn n_simulations(&self) -> usize {
        self.n_simulations
    }

    /// Reproducible estimate from a fixed seed. Two calls with the same
    /// seed and contract return identical prices.
    pub fn price_seeded(&self, contract: &OptionContract, seed: u64) -> PricingResult<f64> {
        self.price_with_rng(contract, &mut StdRng::seed_from_u64(seed))
    }

    /// Core sampler. The payoff is path-independent, so one exact GBM step
    /// per draw reaches the terminal distribution with no discretization
    /// error. A single fused pass (draw, evolve, payoff, accumulate) keeps
    /// cost linear in the draw count with no per-draw allocation.
    pub fn price_with_rng<R: Rng>(
        &self,
        contract: &OptionContract,
        rng: &mut R,
    ) -> PricingResult<f64> {
        contract.validate()?;

        let drift = (contract.rate - 0.5 * contract.volatility * contract.volatility)
            * contract.time_to_expiry;
        let vol_sqrt_t = contract.volatility * contract.time_to_expiry.sqrt();

        let mut payoff_sum = 0.0;
        for _ in 0..self.n_simulations {
            let z: f64 = rng.sample(StandardNormal);
            let terminal = contract.spot * (drift + vol_sqrt_t * z).exp();
            payoff_sum += contract.option_type.payoff(terminal, contract.strike);
        }

        Ok(contract.discount_factor() * payoff_sum / self.n_simulations as f64)
    }
}

impl Pricer for MonteCarloPricer {
    #[inline]
    fn name(&self) -> &'static str {
        "simulation"
    }

    /// Independent draws on every call via the thread-local RNG.
    fn price(&self, contract: &OptionContract) -> PricingResult<f64> {
        self.price_with_rng(contract, &mut rand::thread_rng())
    }
}
