//! `Instrument` and the pricing-engine seam.
//!
//! An engine is a collaborator: it receives the instrument's arguments and
//! returns results. Engines are shared (`Arc`) between trades, so they must
//! be `Send + Sync`.

use rd_core::{errors::Result, Real};
use rd_time::Date;
use std::collections::BTreeMap;

/// What an engine returns.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PricingResults {
    /// Net present value.
    pub npv: Real,
    /// Error estimate, for engines that have one.
    pub error_estimate: Option<Real>,
    /// Further named results (sensitivities, diagnostics).
    pub additional_results: BTreeMap<String, Real>,
}

impl PricingResults {
    /// Results holding only an NPV.
    pub fn from_npv(npv: Real) -> Self {
        Self {
            npv,
            ..Self::default()
        }
    }

    /// Add a named result.
    pub fn with_result(mut self, key: impl Into<String>, value: Real) -> Self {
        self.additional_results.insert(key.into(), value);
        self
    }
}

/// Prices instruments described by `Args`.
pub trait PricingEngine<Args>: std::fmt::Debug + Send + Sync {
    /// Price the instrument described by `args`.
    fn calculate(&self, args: &Args) -> Result<PricingResults>;
}

/// A priceable product.
pub trait Instrument: std::fmt::Debug + Send + Sync {
    /// Whether the instrument has no remaining cash flows as of `today`.
    fn is_expired(&self, today: Date) -> bool {
        self.maturity_date().is_some_and(|m| m < today)
    }

    /// The last relevant date.
    fn maturity_date(&self) -> Option<Date> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn pricing_results_builder() {
        let r = PricingResults::from_npv(42.0)
            .with_result("delta", 0.55)
            .with_result("gamma", 0.02);
        assert_abs_diff_eq!(r.npv, 42.0);
        assert_abs_diff_eq!(r.additional_results["delta"], 0.55);
        assert_eq!(r.error_estimate, None);
    }
}
