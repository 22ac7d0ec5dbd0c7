use crate::contract::{OptionContract, OptionType};
use crate::pricing::{AnalyticPricer, MonteCarloPricer, Pricer};
use chrono::{DateTime, Utc};

/// Floor applied to near-expiry rows: one calendar day in years.
pub const MIN_TIME_TO_EXPIRY: f64 = 1.0 / 365.0;

const SECONDS_PER_YEAR: f64 = 365.0 * 24.0 * 3600.0;

// ── Seam types toward the market-data and display collaborators ──

/// One quoted row of an option chain, as the data layer hands it over.
/// `implied_volatility` comes from the quote source and feeds the pricers
/// as-is; this crate never solves for it.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct OptionQuote {
    pub strike: f64,
    pub bid: Option<f64>,
    pub ask: Option<f64>,
    pub implied_volatility: f64,
    pub option_type: OptionType,
}

/// One priced row for display. A row the core rejected keeps `None` so the
/// display layer shows a missing-value marker, never a zero or a fabricated
/// price.
#[derive(Debug, Clone, serde::Serialize)]
pub struct PricedQuote {
    pub strike: f64,
    pub option_type: OptionType,
    pub bid: Option<f64>,
    pub ask: Option<f64>,
    pub implied_volatility: f64,
    pub analytic_price: Option<f64>,
    pub simulation_price: Option<f64>,
}

/// Year fraction from `now` to `expiration`, floored to
/// [`MIN_TIME_TO_EXPIRY`]. Expired or same-day rows price as if one day
/// remains; excluding them entirely is the caller's decision. The flooring
/// lives here, on the data side of the seam. The pricers themselves reject
/// non-positive times instead of clamping.
pub fn time_to_expiry(expiration: DateTime<Utc>, now: DateTime<Utc>) -> f64 {
    let seconds = (expiration - now).num_seconds() as f64;
    (seconds / SECONDS_PER_YEAR).max(MIN_TIME_TO_EXPIRY)
}

/// Value every row of a chain with both engines. Rows the core rejects are
/// logged at this seam and surfaced as `None` markers; the pricers stay
/// silent and the market quotes pass through untouched.
pub fn price_chain(
    spot: f64,
    rate: f64,
    time_to_expiry: f64,
    analytic: &AnalyticPricer,
    simulation: &MonteCarloPricer,
    quotes: &[OptionQuote],
) -> Vec<PricedQuote> {
    quotes
        .iter()
        .map(|quote| {
            let (analytic_price, simulation_price) = match OptionContract::new(
                spot,
                quote.strike,
                rate,
                time_to_expiry,
                quote.implied_volatility,
                quote.option_type,
            ) {
                Ok(contract) => {
                    let a = match analytic.price(&contract) {
                        Ok(p) => Some(p),
                        Err(e) => {
                            tracing::warn!(
                                strike = quote.strike,
                                error = %e,
                                "analytic pricing failed, marking row missing"
                            );
                            None
                        }
                    };
                    let s = match simulation.price(&contract) {
                        Ok(p) => Some(p),
                        Err(e) => {
                            tracing::warn!(
                                strike = quote.strike,
                                error = %e,
                                "simulation pricing failed, marking row missing"
                            );
                            None
                        }
                    };
                    (a, s)
                }
                Err(e) => {
                    tracing::warn!(
                        strike = quote.strike,
                        iv = quote.implied_volatility,
                        error = %e,
                        "skipping unpriceable row"
                    );
                    (None, None)
                }
            };

            PricedQuote {
                strike: quote.strike,
                option_type: quote.option_type,
                bid: quote.bid,
                ask: quote.ask,
                implied_volatility: quote.implied_volatility,
                analytic_price,
                simulation_price,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_time_to_expiry_one_year() {
        let now = Utc.with_ymd_and_hms(2023, 1, 1, 0, 0, 0).unwrap();
        let expiration = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let t = time_to_expiry(expiration, now);
        assert!((t - 1.0).abs() < 1e-9, "365 days should be 1.0 years, got {t}");
    }

    #[test]
    fn test_time_to_expiry_floors_expired_rows() {
        let now = Utc.with_ymd_and_hms(2023, 6, 1, 12, 0, 0).unwrap();
        let expiration = Utc.with_ymd_and_hms(2023, 5, 1, 0, 0, 0).unwrap();
        let t = time_to_expiry(expiration, now);
        assert_eq!(t, MIN_TIME_TO_EXPIRY, "expired row should floor, got {t}");
    }

    #[test]
    fn test_time_to_expiry_floors_same_instant() {
        let now = Utc.with_ymd_and_hms(2023, 6, 1, 12, 0, 0).unwrap();
        assert_eq!(time_to_expiry(now, now), MIN_TIME_TO_EXPIRY);
    }

    #[test]
    fn test_price_chain_marks_bad_rows_missing() {
        let analytic = AnalyticPricer::new();
        let simulation = MonteCarloPricer::new(1_000).unwrap();
        let quotes = vec![
            OptionQuote {
                strike: 100.0,
                bid: Some(9.5),
                ask: Some(10.5),
                implied_volatility: 0.2,
                option_type: OptionType::Call,
            },
            OptionQuote {
                strike: 110.0,
                bid: None,
                ask: Some(4.0),
                implied_volatility: 0.0, // unpriceable: vol out of domain
                option_type: OptionType::Call,
            },
        ];

        let rows = price_chain(100.0, 0.05, 0.5, &analytic, &simulation, &quotes);
        assert_eq!(rows.len(), 2);

        assert!(rows[0].analytic_price.is_some(), "good row should price");
        assert!(rows[0].simulation_price.is_some());
        assert_eq!(rows[0].bid, Some(9.5), "market quotes pass through");
        assert_eq!(rows[0].ask, Some(10.5));

        assert!(rows[1].analytic_price.is_none(), "bad row must stay missing");
        assert!(rows[1].simulation_price.is_none());
        assert_eq!(rows[1].ask, Some(4.0), "market quote survives a skip");
    }

    #[test]
    fn test_price_chain_bad_spot_skips_everything() {
        let analytic = AnalyticPricer::new();
        let simulation = MonteCarloPricer::new(1_000).unwrap();
        let quotes = vec![OptionQuote {
            strike: 100.0,
            bid: None,
            ask: None,
            implied_volatility: 0.2,
            option_type: OptionType::Put,
        }];

        let rows = price_chain(0.0, 0.05, 0.5, &analytic, &simulation, &quotes);
        assert!(rows[0].analytic_price.is_none());
        assert!(rows[0].simulation_price.is_none());
    }
}
