//! Default (credit) curve configuration.
//!
//! A default curve is built either from CDS spreads, from hazard rates, or
//! from a risky yield curve measured against a benchmark curve. The
//! configuration names the quotes and conventions; it does not build
//! anything.

use crate::curve_config::CurveConfig;
use rd_core::errors::{Error, Result, ResultExt};
use rd_time::{parse_day_counter, DayCounter};
use rd_xml::{XmlNode, XmlSerializable};
use std::fmt;
use std::str::FromStr;
use tracing::debug;

/// How the curve is implied from its quotes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DefaultCurveType {
    /// Bootstrapped from CDS par spreads.
    #[default]
    SpreadCDS,
    /// Hazard rates quoted directly.
    HazardRate,
    /// Implied from a risky yield curve over a benchmark.
    Yield,
}

impl DefaultCurveType {
    const TOKENS: [&'static str; 3] = ["SpreadCDS", "HazardRate", "Yield"];

    /// Whether this type needs a discount curve.
    pub fn requires_discount_curve(self) -> bool {
        matches!(self, DefaultCurveType::SpreadCDS | DefaultCurveType::Yield)
    }
}

impl FromStr for DefaultCurveType {
    type Err = Error;

    /// Exact, case-sensitive match on the schema tokens.
    fn from_str(s: &str) -> Result<Self> {
        match s {
            "SpreadCDS" => Ok(DefaultCurveType::SpreadCDS),
            "HazardRate" => Ok(DefaultCurveType::HazardRate),
            "Yield" => Ok(DefaultCurveType::Yield),
            other => Err(Error::invalid_enum("Type", other, &Self::TOKENS)),
        }
    }
}

impl fmt::Display for DefaultCurveType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            DefaultCurveType::SpreadCDS => "SpreadCDS",
            DefaultCurveType::HazardRate => "HazardRate",
            DefaultCurveType::Yield => "Yield",
        };
        f.write_str(s)
    }
}

/// Configuration of one default curve.
///
/// Build it either with [`DefaultCurveConfig::new`], which validates, or
/// from `Default` plus setters followed by [`DefaultCurveConfig::validate`].
/// Optional references are `None` when absent or empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DefaultCurveConfig {
    curve_id: String,
    curve_description: String,
    currency: String,
    curve_type: DefaultCurveType,
    discount_curve_id: Option<String>,
    benchmark_curve_id: Option<String>,
    recovery_rate_quote: Option<String>,
    day_counter: DayCounter,
    conventions_id: String,
    cds_quotes: Vec<String>,
    extrapolation: bool,
}

impl Default for DefaultCurveConfig {
    fn default() -> Self {
        Self {
            curve_id: String::new(),
            curve_description: String::new(),
            currency: String::new(),
            curve_type: DefaultCurveType::default(),
            discount_curve_id: None,
            benchmark_curve_id: None,
            recovery_rate_quote: None,
            day_counter: DayCounter::Actual365Fixed,
            conventions_id: String::new(),
            cds_quotes: Vec::new(),
            extrapolation: true,
        }
    }
}

// Documents are read trimmed, so values are held trimmed.
fn trimmed(s: impl Into<String>) -> String {
    let s = s.into();
    if s.trim().len() == s.len() {
        s
    } else {
        s.trim().to_string()
    }
}

fn non_empty(s: impl Into<String>) -> Option<String> {
    Some(trimmed(s)).filter(|s| !s.is_empty())
}

fn trimmed_all(quotes: Vec<String>) -> Vec<String> {
    quotes.into_iter().map(trimmed).collect()
}

impl DefaultCurveConfig {
    /// A validated configuration.
    ///
    /// # Errors
    /// [`Error::MissingField`] when the id or quotes are empty, or when a
    /// SpreadCDS / Yield curve has no discount curve.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        curve_id: impl Into<String>,
        curve_description: impl Into<String>,
        currency: impl Into<String>,
        curve_type: DefaultCurveType,
        discount_curve_id: impl Into<String>,
        recovery_rate_quote: impl Into<String>,
        day_counter: DayCounter,
        conventions_id: impl Into<String>,
        cds_quotes: Vec<String>,
        extrapolation: bool,
    ) -> Result<Self> {
        let config = Self {
            curve_id: trimmed(curve_id),
            curve_description: trimmed(curve_description),
            currency: trimmed(currency),
            curve_type,
            discount_curve_id: non_empty(discount_curve_id),
            benchmark_curve_id: None,
            recovery_rate_quote: non_empty(recovery_rate_quote),
            day_counter,
            conventions_id: trimmed(conventions_id),
            cds_quotes: trimmed_all(cds_quotes),
            extrapolation,
        };
        config.validate()?;
        Ok(config)
    }

    /// Check the cross-field invariants.
    pub fn validate(&self) -> Result<()> {
        if self.curve_id.trim().is_empty() {
            return Err(Error::missing_field("CurveId"));
        }
        if self.currency.trim().is_empty() {
            return Err(Error::missing_field("Currency"));
        }
        if self.cds_quotes.is_empty() {
            return Err(Error::missing_field("Quotes"));
        }
        if self.curve_type.requires_discount_curve() && self.discount_curve_id.is_none() {
            return Err(Error::missing_field("DiscountCurve"));
        }
        Ok(())
    }

    // ── Inspectors ───────────────────────────────────────────────────────────

    /// Currency code.
    pub fn currency(&self) -> &str {
        &self.currency
    }

    /// Curve type.
    pub fn type_(&self) -> DefaultCurveType {
        self.curve_type
    }

    /// Discount curve id.
    pub fn discount_curve_id(&self) -> Option<&str> {
        self.discount_curve_id.as_deref()
    }

    /// Benchmark curve id.
    pub fn benchmark_curve_id(&self) -> Option<&str> {
        self.benchmark_curve_id.as_deref()
    }

    /// Recovery rate quote name.
    pub fn recovery_rate_quote(&self) -> Option<&str> {
        self.recovery_rate_quote.as_deref()
    }

    /// Day counter.
    pub fn day_counter(&self) -> DayCounter {
        self.day_counter
    }

    /// Conventions id.
    pub fn conventions_id(&self) -> &str {
        &self.conventions_id
    }

    /// Pillar quotes, in document order.
    pub fn cds_quotes(&self) -> &[String] {
        &self.cds_quotes
    }

    /// Whether the built curve extrapolates.
    pub fn extrapolation(&self) -> bool {
        self.extrapolation
    }

    // ── Setters ──────────────────────────────────────────────────────────────

    /// Set the curve id.
    pub fn set_curve_id(&mut self, id: impl Into<String>) {
        self.curve_id = trimmed(id);
    }

    /// Set the description.
    pub fn set_curve_description(&mut self, description: impl Into<String>) {
        self.curve_description = trimmed(description);
    }

    /// Set the currency code.
    pub fn set_currency(&mut self, currency: impl Into<String>) {
        self.currency = trimmed(currency);
    }

    /// Set the curve type.
    pub fn set_type(&mut self, curve_type: DefaultCurveType) {
        self.curve_type = curve_type;
    }

    /// Set the discount curve id; empty clears it.
    pub fn set_discount_curve_id(&mut self, id: impl Into<String>) {
        self.discount_curve_id = non_empty(id);
    }

    /// Set the benchmark curve id; empty clears it.
    pub fn set_benchmark_curve_id(&mut self, id: impl Into<String>) {
        self.benchmark_curve_id = non_empty(id);
    }

    /// Set the recovery rate quote; empty clears it.
    pub fn set_recovery_rate_quote(&mut self, quote: impl Into<String>) {
        self.recovery_rate_quote = non_empty(quote);
    }

    /// Set the day counter.
    pub fn set_day_counter(&mut self, day_counter: DayCounter) {
        self.day_counter = day_counter;
    }

    /// Set the conventions id.
    pub fn set_conventions_id(&mut self, id: impl Into<String>) {
        self.conventions_id = trimmed(id);
    }

    /// Replace the pillar quotes.
    pub fn set_cds_quotes(&mut self, quotes: Vec<String>) {
        self.cds_quotes = trimmed_all(quotes);
    }

    /// Set the extrapolation flag.
    pub fn set_extrapolation(&mut self, extrapolation: bool) {
        self.extrapolation = extrapolation;
    }

    fn read_fields(node: &XmlNode, curve_id: String) -> Result<Self> {
        let config = Self {
            curve_id,
            curve_description: node.child_value("CurveDescription", false)?,
            currency: node.child_value("Currency", true)?,
            curve_type: node.child_value("Type", true)?.parse()?,
            discount_curve_id: node.optional_child_value("DiscountCurve"),
            benchmark_curve_id: node.optional_child_value("BenchmarkCurve"),
            recovery_rate_quote: node.optional_child_value("RecoveryRate"),
            day_counter: parse_day_counter(&node.child_value("DayCounter", true)?)?,
            conventions_id: node.child_value("Conventions", true)?,
            cds_quotes: node.children_values("Quotes", "Quote", true)?,
            extrapolation: node.child_value_as_bool("Extrapolation", false, true)?,
        };
        config.validate()?;
        Ok(config)
    }
}

impl CurveConfig for DefaultCurveConfig {
    fn curve_id(&self) -> &str {
        &self.curve_id
    }

    fn curve_description(&self) -> &str {
        &self.curve_description
    }

    /// Recovery rate quote first, then the pillars.
    fn quotes(&self) -> Vec<String> {
        self.recovery_rate_quote
            .iter()
            .chain(self.cds_quotes.iter())
            .cloned()
            .collect()
    }

    fn required_curve_ids(&self) -> Vec<String> {
        self.discount_curve_id
            .iter()
            .chain(self.benchmark_curve_id.iter())
            .cloned()
            .collect()
    }
}

impl XmlSerializable for DefaultCurveConfig {
    fn from_xml(node: &XmlNode) -> Result<Self> {
        node.check_name("DefaultCurve")?;
        let curve_id = node.child_value("CurveId", false)?;
        let context = format!("DefaultCurve '{curve_id}'");
        let config = Self::read_fields(node, curve_id).context(context)?;
        debug!(
            curve_id = %config.curve_id,
            curve_type = %config.curve_type,
            quotes = config.cds_quotes.len(),
            "loaded default curve configuration"
        );
        Ok(config)
    }

    fn to_xml(&self) -> XmlNode {
        let mut node = XmlNode::new("DefaultCurve");
        node.add_child_value("CurveId", self.curve_id.as_str());
        node.add_child_value("CurveDescription", self.curve_description.as_str());
        node.add_child_value("Currency", self.currency.as_str());
        node.add_child_value("Type", self.curve_type.to_string());
        node.add_optional_child_value("DiscountCurve", self.discount_curve_id.as_deref());
        node.add_optional_child_value("BenchmarkCurve", self.benchmark_curve_id.as_deref());
        node.add_optional_child_value("RecoveryRate", self.recovery_rate_quote.as_deref());
        node.add_child_value("DayCounter", self.day_counter.name());
        node.add_child_value("Conventions", self.conventions_id.as_str());
        node.add_children_values("Quotes", "Quote", &self.cds_quotes);
        node.add_child_bool("Extrapolation", self.extrapolation);
        node
    }
}
