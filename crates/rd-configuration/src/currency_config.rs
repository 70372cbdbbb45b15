//! `CurrencyConfig` — custom currency descriptors read from configuration.

use rd_core::errors::{Result, ResultExt};
use rd_core::utilities::parse_integer;
use rd_core::Integer;
use rd_currencies::{ConfigurableCurrency, CurrencyRegistry, Rounding, RoundingType};
use rd_xml::{XmlNode, XmlSerializable};
use tracing::debug;

/// Currencies to add to the registry before anything else is loaded.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CurrencyConfig {
    currencies: Vec<ConfigurableCurrency>,
}

impl CurrencyConfig {
    /// A config holding `currencies`.
    pub fn new(currencies: Vec<ConfigurableCurrency>) -> Self {
        Self { currencies }
    }

    /// The configured currencies, in document order.
    pub fn currencies(&self) -> &[ConfigurableCurrency] {
        &self.currencies
    }

    /// Append a currency.
    pub fn add(&mut self, currency: ConfigurableCurrency) {
        self.currencies.push(currency);
    }

    /// Add every configured currency to `registry`.
    ///
    /// Stops at the first code or numeric-code clash.
    pub fn register(&self, registry: &mut CurrencyRegistry) -> Result<()> {
        for c in &self.currencies {
            registry
                .add(c.clone())
                .with_context(|| format!("Currency '{}'", c.code()))?;
        }
        Ok(())
    }
}

fn integer_child(node: &XmlNode, name: &str, default: Option<Integer>) -> Result<Integer> {
    match (node.optional_child_value(name), default) {
        (Some(text), _) => parse_integer(&text).context(name),
        (None, Some(d)) => Ok(d),
        (None, None) => Err(rd_core::Error::missing_field(name)),
    }
}

fn read_currency(node: &XmlNode) -> Result<ConfigurableCurrency> {
    let rounding_type: RoundingType = match node.optional_child_value("RoundingType") {
        Some(t) => t.parse()?,
        None => RoundingType::Closest,
    };
    let precision = integer_child(node, "RoundingPrecision", Some(2))?;
    let digit = integer_child(node, "RoundingDigit", Some(5))?;
    Ok(ConfigurableCurrency::new(
        node.child_value("Name", true)?,
        node.child_value("ISOCode", true)?,
        integer_child(node, "NumericCode", None)?,
        node.child_value("Symbol", false)?,
        node.child_value("FractionSymbol", false)?,
        integer_child(node, "FractionsPerUnit", None)?,
        Rounding::new(rounding_type, precision, digit),
        node.child_value("Format", false)?,
    ))
}

impl XmlSerializable for CurrencyConfig {
    fn from_xml(node: &XmlNode) -> Result<Self> {
        node.check_name("CurrencyConfig")?;
        let mut config = Self::default();
        for child in node.children_named("Currency") {
            let code = child.child_value("ISOCode", false)?;
            let currency = read_currency(child).with_context(|| format!("Currency '{code}'"))?;
            debug!(code = %currency.code(), "loaded currency configuration");
            config.add(currency);
        }
        Ok(config)
    }

    fn to_xml(&self) -> XmlNode {
        let mut node = XmlNode::new("CurrencyConfig");
        for c in &self.currencies {
            let n = node.add_child(XmlNode::new("Currency"));
            n.add_child_value("Name", c.name());
            n.add_child_value("ISOCode", c.code());
            n.add_child_value("NumericCode", c.numeric_code().to_string());
            n.add_child_value("Symbol", c.symbol());
            n.add_child_value("FractionSymbol", c.fraction_symbol());
            n.add_child_value("FractionsPerUnit", c.fractions_per_unit().to_string());
            n.add_child_value("RoundingType", c.rounding().rounding_type().to_string());
            n.add_child_value("RoundingPrecision", c.rounding().precision().to_string());
            n.add_child_value("RoundingDigit", c.rounding().digit().to_string());
            n.add_child_value("Format", c.format_string());
        }
        node
    }
}
