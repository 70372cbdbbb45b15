//! Option terms shared by every option trade.

use rd_core::errors::{Result, ResultExt};
use rd_core::utilities::format_real;
use rd_core::{Position, Real};
use rd_instruments::{Exercise, ExerciseType, OptionType, SettlementType};
use rd_time::{format_date, parse_date, Date};
use rd_xml::{XmlNode, XmlSerializable};

/// An upfront premium.
#[derive(Debug, Clone, PartialEq)]
pub struct Premium {
    /// Amount paid.
    pub amount: Real,
    /// Currency of the amount.
    pub currency: String,
    /// Payment date.
    pub pay_date: Date,
}

impl Premium {
    fn from_xml(node: &XmlNode) -> Result<Self> {
        Ok(Self {
            amount: node.child_value_as_real("Amount", true)?.unwrap_or_default(),
            currency: node.child_value("Currency", true)?,
            pay_date: parse_date(&node.child_value("PayDate", true)?).context("PayDate")?,
        })
    }

    fn to_xml(&self) -> XmlNode {
        let mut node = XmlNode::new("Premium");
        node.add_child_value("Amount", format_real(self.amount));
        node.add_child_value("Currency", self.currency.as_str());
        node.add_child_value("PayDate", format_date(self.pay_date));
        node
    }
}

/// Side, call/put, style, settlement and exercise schedule of an option.
#[derive(Debug, Clone, PartialEq)]
pub struct OptionData {
    long_short: Position,
    call_put: OptionType,
    style: ExerciseType,
    settlement: Option<SettlementType>,
    payoff_at_expiry: bool,
    exercise_dates: Vec<Date>,
    premiums: Vec<Premium>,
}

impl OptionData {
    /// Option terms with payoff at expiry and no premiums.
    pub fn new(
        long_short: Position,
        call_put: OptionType,
        style: ExerciseType,
        exercise_dates: Vec<Date>,
    ) -> Self {
        Self {
            long_short,
            call_put,
            style,
            settlement: None,
            payoff_at_expiry: true,
            exercise_dates,
            premiums: Vec::new(),
        }
    }

    /// Set the settlement.
    pub fn with_settlement(mut self, settlement: SettlementType) -> Self {
        self.settlement = Some(settlement);
        self
    }

    /// Set whether an exercised American option pays at expiry.
    pub fn with_payoff_at_expiry(mut self, payoff_at_expiry: bool) -> Self {
        self.payoff_at_expiry = payoff_at_expiry;
        self
    }

    /// Add a premium.
    pub fn with_premium(mut self, premium: Premium) -> Self {
        self.premiums.push(premium);
        self
    }

    /// Long or short.
    pub fn long_short(&self) -> Position {
        self.long_short
    }

    /// Call or put.
    pub fn call_put(&self) -> OptionType {
        self.call_put
    }

    /// Exercise style.
    pub fn style(&self) -> ExerciseType {
        self.style
    }

    /// Settlement, when stated.
    pub fn settlement(&self) -> Option<SettlementType> {
        self.settlement
    }

    /// Whether payoff is deferred to expiry.
    pub fn payoff_at_expiry(&self) -> bool {
        self.payoff_at_expiry
    }

    /// Exercise dates, in document order.
    pub fn exercise_dates(&self) -> &[Date] {
        &self.exercise_dates
    }

    /// Premiums, in document order.
    pub fn premiums(&self) -> &[Premium] {
        &self.premiums
    }

    /// The exercise right these terms describe.
    pub fn exercise(&self) -> Result<Exercise> {
        Exercise::from_dates(self.style, &self.exercise_dates, None)
    }
}

impl XmlSerializable for OptionData {
    fn from_xml(node: &XmlNode) -> Result<Self> {
        node.check_name("OptionData")?;
        let style = match node.optional_child_value("Style") {
            Some(s) => s.parse()?,
            None => ExerciseType::European,
        };
        let exercise_dates = node
            .children_values("ExerciseDates", "ExerciseDate", true)?
            .iter()
            .map(|d| parse_date(d))
            .collect::<Result<Vec<_>>>()
            .context("ExerciseDates")?;
        let premiums = match node.child("Premiums") {
            Some(g) => g
                .children_named("Premium")
                .map(Premium::from_xml)
                .collect::<Result<Vec<_>>>()
                .context("Premiums")?,
            None => Vec::new(),
        };
        Ok(Self {
            long_short: node.child_value("LongShort", true)?.parse()?,
            call_put: node.child_value("OptionType", true)?.parse()?,
            style,
            settlement: node
                .optional_child_value("Settlement")
                .map(|s| s.parse::<SettlementType>())
                .transpose()?,
            payoff_at_expiry: node.child_value_as_bool("PayOffAtExpiry", false, true)?,
            exercise_dates,
            premiums,
        })
    }

    fn to_xml(&self) -> XmlNode {
        let mut node = XmlNode::new("OptionData");
        node.add_child_value("LongShort", self.long_short.to_string());
        node.add_child_value("OptionType", self.call_put.to_string());
        node.add_child_value("Style", self.style.to_string());
        if let Some(s) = self.settlement {
            node.add_child_value("Settlement", s.to_string());
        }
        node.add_child_bool("PayOffAtExpiry", self.payoff_at_expiry);
        let dates: Vec<String> = self.exercise_dates.iter().map(|d| format_date(*d)).collect();
        node.add_children_values("ExerciseDates", "ExerciseDate", &dates);
        if !self.premiums.is_empty() {
            let group = node.add_child(XmlNode::new("Premiums"));
            for p in &self.premiums {
                group.add_child(p.to_xml());
            }
        }
        node
    }
}
