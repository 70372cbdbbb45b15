//! Engine lookup for trade builds.
//!
//! Trades describe what they need as an [`EngineKey`]; an [`EngineFactory`]
//! answers with a shared engine, or nothing. Engines themselves are
//! collaborators and are never constructed here.

use crate::asset_class::AssetClass;
use crate::reference_data::ReferenceDataManager;
use rd_currencies::CurrencyRegistry;
use rd_instruments::{ExerciseType, PricingEngine, VanillaOptionArguments};
use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;
use tracing::debug;

/// Shared engine for vanilla option instruments.
pub type VanillaOptionEngine = Arc<dyn PricingEngine<VanillaOptionArguments>>;

/// What a trade asks the factory for.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EngineKey {
    /// Trade type, e.g. `EquityOption`.
    pub trade_type: String,
    /// Asset class of the underlying.
    pub asset_class: AssetClass,
    /// Exercise style.
    pub exercise: ExerciseType,
    /// Whether the payoff is in a currency other than the underlying's.
    pub quanto: bool,
}

impl EngineKey {
    /// A key for a non-quanto trade.
    pub fn new(trade_type: impl Into<String>, asset_class: AssetClass, exercise: ExerciseType) -> Self {
        Self {
            trade_type: trade_type.into(),
            asset_class,
            exercise,
            quanto: false,
        }
    }

    /// Same key, quanto flag set to `quanto`.
    pub fn with_quanto(mut self, quanto: bool) -> Self {
        self.quanto = quanto;
        self
    }
}

impl fmt::Display for EngineKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}/{}/{}{}",
            self.trade_type,
            self.asset_class,
            self.exercise,
            if self.quanto { "/Quanto" } else { "" }
        )
    }
}

/// Supplies engines, currencies and reference data to trade builds.
pub trait EngineFactory: fmt::Debug + Send + Sync {
    /// The engine for `key`, if one is configured.
    fn engine(&self, key: &EngineKey) -> Option<VanillaOptionEngine>;

    /// Currencies trades may be denominated in.
    fn currencies(&self) -> &CurrencyRegistry;

    /// Reference data, when available.
    fn reference_data(&self) -> Option<&dyn ReferenceDataManager> {
        None
    }
}

/// In-memory [`EngineFactory`]: engines registered per key.
#[derive(Debug, Clone)]
pub struct EngineRegistry {
    engines: BTreeMap<EngineKey, VanillaOptionEngine>,
    currencies: CurrencyRegistry,
    reference_data: Option<Arc<dyn ReferenceDataManager>>,
}

impl Default for EngineRegistry {
    fn default() -> Self {
        Self::new(CurrencyRegistry::with_baseline())
    }
}

impl EngineRegistry {
    /// No engines; trades resolve currencies through `currencies`.
    pub fn new(currencies: CurrencyRegistry) -> Self {
        Self {
            engines: BTreeMap::new(),
            currencies,
            reference_data: None,
        }
    }

    /// Attach reference data.
    pub fn with_reference_data(mut self, reference_data: Arc<dyn ReferenceDataManager>) -> Self {
        self.reference_data = Some(reference_data);
        self
    }

    /// Register `engine` under `key`, replacing any previous one.
    pub fn register(&mut self, key: EngineKey, engine: VanillaOptionEngine) {
        debug!(key = %key, "registered pricing engine");
        self.engines.insert(key, engine);
    }

    /// Number of registered engines.
    pub fn len(&self) -> usize {
        self.engines.len()
    }

    /// Whether no engines are registered.
    pub fn is_empty(&self) -> bool {
        self.engines.is_empty()
    }
}

impl EngineFactory for EngineRegistry {
    fn engine(&self, key: &EngineKey) -> Option<VanillaOptionEngine> {
        self.engines.get(key).cloned()
    }

    fn currencies(&self) -> &CurrencyRegistry {
        &self.currencies
    }

    fn reference_data(&self) -> Option<&dyn ReferenceDataManager> {
        self.reference_data.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rd_core::errors::Result;
    use rd_instruments::PricingResults;

    #[derive(Debug)]
    struct Flat;

    impl PricingEngine<VanillaOptionArguments> for Flat {
        fn calculate(&self, _: &VanillaOptionArguments) -> Result<PricingResults> {
            Ok(PricingResults::from_npv(1.0))
        }
    }

    #[test]
    fn lookup_distinguishes_quanto() {
        let mut reg = EngineRegistry::default();
        let key = EngineKey::new("EquityOption", AssetClass::EQ, ExerciseType::European);
        reg.register(key.clone(), Arc::new(Flat));
        assert_eq!(reg.len(), 1);
        assert!(reg.engine(&key).is_some());
        assert!(reg.engine(&key.clone().with_quanto(true)).is_none());
        assert!(reg.reference_data().is_none());
    }

    #[test]
    fn key_display() {
        let key = EngineKey::new("EquityOption", AssetClass::EQ, ExerciseType::American).with_quanto(true);
        assert_eq!(key.to_string(), "EquityOption/EQ/American/Quanto");
    }
}
