//! Equity option trades: documents, defaults, quanto detection and build.

use approx::assert_relative_eq;
use rd_core::errors::{Error, Result};
use rd_core::Position;
use rd_instruments::{
    ExerciseType, OptionType, PricingEngine, PricingResults, SettlementType, VanillaOptionArguments,
};
use rd_portfolio::{
    AssetClass, BasicReferenceDataManager, EngineFactory, EngineKey, EngineRegistry, Envelope,
    EquityOption, EquityReferenceDatum, EquityUnderlying, OptionData, Trade,
};
use rd_time::Date;
use rd_xml::XmlSerializable;
use std::sync::Arc;

/// Intrinsic value at a fixed spot; records whether it saw a quanto.
#[derive(Debug)]
struct IntrinsicEngine {
    spot: f64,
}

impl PricingEngine<VanillaOptionArguments> for IntrinsicEngine {
    fn calculate(&self, args: &VanillaOptionArguments) -> Result<PricingResults> {
        Ok(PricingResults::from_npv(args.payoff.value(self.spot))
            .with_result("quanto", if args.quanto { 1.0 } else { 0.0 }))
    }
}

const TRADE: &str = r#"
<Trade id="EQ_OPT_1">
  <TradeType>EquityOption</TradeType>
  <Envelope>
    <CounterParty>CPTY_A</CounterParty>
    <NettingSetId>CPTY_A_NS</NettingSetId>
    <PortfolioIds><PortfolioId>EQ_DESK</PortfolioId></PortfolioIds>
    <AdditionalFields/>
  </Envelope>
  <EquityOptionData>
    <OptionData>
      <LongShort>Long</LongShort>
      <OptionType>Call</OptionType>
      <Style>European</Style>
      <Settlement>Cash</Settlement>
      <PayOffAtExpiry>false</PayOffAtExpiry>
      <ExerciseDates>
        <ExerciseDate>2027-03-01</ExerciseDate>
      </ExerciseDates>
    </OptionData>
    <Name>RIC:.SPX</Name>
    <Currency>USD</Currency>
    <Strike>2147.56</Strike>
    <Quantity>775</Quantity>
  </EquityOptionData>
</Trade>"#;

fn expiry() -> Date {
    Date::from_ymd_opt(2027, 3, 1).unwrap()
}

fn european_call() -> OptionData {
    OptionData::new(Position::Long, OptionType::Call, ExerciseType::European, vec![expiry()])
}

fn registry_with(quanto: bool) -> EngineRegistry {
    let mut reg = EngineRegistry::default();
    reg.register(
        EngineKey::new("EquityOption", AssetClass::EQ, ExerciseType::European).with_quanto(quanto),
        Arc::new(IntrinsicEngine { spot: 2200.0 }),
    );
    reg
}

#[test]
fn test_reads_trade_document() {
    let eo = EquityOption::from_xml_string(TRADE).unwrap();
    assert_eq!(eo.id(), "EQ_OPT_1");
    assert_eq!(eo.trade_type(), "EquityOption");
    assert_eq!(eo.base().envelope().counterparty(), "CPTY_A");
    assert_eq!(eo.equity_name(), "RIC:.SPX");
    assert_eq!(eo.local_currency(), "USD");
    assert_eq!(eo.local_strike().value(), Some(2147.56));
    assert_eq!(eo.strike_currency(), None);
    assert_relative_eq!(eo.quantity(), 775.0);
    assert_eq!(eo.option().settlement(), Some(SettlementType::Cash));
    assert!(!eo.option().payoff_at_expiry());
    assert!(!eo.is_quanto());
}

#[test]
fn test_round_trip() {
    let eo = EquityOption::from_xml_string(TRADE).unwrap();
    let text = eo.to_xml_string().unwrap();
    assert!(!text.contains("StrikeCurrency"));
    assert_eq!(EquityOption::from_xml_string(&text).unwrap(), eo);
}

#[test]
fn test_empty_and_absent_strike_currency_are_equivalent() {
    let with_empty = TRADE.replace(
        "<Quantity>",
        "<StrikeCurrency></StrikeCurrency>\n    <Quantity>",
    );
    let a = EquityOption::from_xml_string(TRADE).unwrap();
    let b = EquityOption::from_xml_string(&with_empty).unwrap();
    assert_eq!(a, b);
    assert!(!b.is_quanto());
    assert!(!b.to_xml_string().unwrap().contains("StrikeCurrency"));
}

#[test]
fn test_quanto_round_trip_and_detection() {
    let quanto = TRADE.replace(
        "<Quantity>",
        "<StrikeCurrency>EUR</StrikeCurrency>\n    <Quantity>",
    );
    let eo = EquityOption::from_xml_string(&quanto).unwrap();
    assert_eq!(eo.strike_currency(), Some("EUR"));
    assert!(eo.is_quanto());
    let back = EquityOption::from_xml_string(&eo.to_xml_string().unwrap()).unwrap();
    assert_eq!(back, eo);
}

#[test]
fn test_unknown_option_type_names_trade() {
    let bad = TRADE.replace("<OptionType>Call</OptionType>", "<OptionType>Chooser</OptionType>");
    let err = EquityOption::from_xml_string(&bad).unwrap_err();
    assert!(err.to_string().starts_with("Trade 'EQ_OPT_1': "), "{err}");
    assert!(matches!(err.root(), Error::InvalidEnum { .. }));
}

#[test]
fn test_build_attaches_instrument() {
    let mut eo = EquityOption::from_xml_string(TRADE).unwrap();
    eo.build(&registry_with(false)).unwrap();

    assert_eq!(eo.base().npv_currency(), Some("USD"));
    assert_eq!(eo.base().maturity(), Some(expiry()));
    assert_relative_eq!(eo.base().notional().unwrap(), 2147.56 * 775.0);
    let npv = eo.npv().unwrap();
    assert_relative_eq!(npv, (2200.0 - 2147.56) * 775.0, max_relative = 1e-12);
}

#[test]
fn test_build_without_engine_is_engine_not_found() {
    let mut eo = EquityOption::new(
        "Q1",
        Envelope::default(),
        european_call(),
        EquityUnderlying::new("SX5E"),
        "USD",
        4000.0,
        1.0,
        Some("EUR".into()),
    );
    let err = eo.build(&registry_with(false)).unwrap_err();
    assert_eq!(
        err,
        Error::EngineNotFound {
            trade_type: "EquityOption".into(),
            asset_class: "EQ".into(),
            currency: "USD".into(),
            strike_currency: "EUR".into(),
            quanto: true,
        }
    );
    assert!(eo.base().instrument().is_none());
    assert!(eo.npv().is_err());

    eo.build(&registry_with(true)).unwrap();
    let w = eo.base().instrument().unwrap();
    assert!(w.instrument().is_quanto());
    assert_eq!(w.instrument().underlying_currency().code(), "EUR");
}

#[test]
fn test_minor_currency_strike_is_converted() {
    let mut eo = EquityOption::new(
        "GBX_1",
        Envelope::default(),
        OptionData::new(Position::Short, OptionType::Put, ExerciseType::European, vec![expiry()]),
        EquityUnderlying::new("VOD.L"),
        "GBp",
        2500.0,
        100.0,
        None,
    );
    let mut reg = EngineRegistry::default();
    reg.register(
        EngineKey::new("EquityOption", AssetClass::EQ, ExerciseType::European),
        Arc::new(IntrinsicEngine { spot: 20.0 }),
    );
    eo.build(&reg).unwrap();
    assert_eq!(eo.base().npv_currency(), Some("GBP"));
    let w = eo.base().instrument().unwrap();
    assert_relative_eq!(w.instrument().strike(), 25.0);
    // short 100 puts, 5 in the money each
    assert_relative_eq!(eo.npv().unwrap(), -500.0);
    // the document keeps the local values
    let text = eo.to_xml_string().unwrap();
    assert!(text.contains("<Currency>GBp</Currency>"));
    assert!(text.contains("<Strike>2500</Strike>"));
}

#[test]
fn test_deferred_strike_round_trips_but_does_not_build() {
    let deferred = TRADE.replace("<Strike>2147.56</Strike>", "<Strike>ATMF</Strike>");
    let mut eo = EquityOption::from_xml_string(&deferred).unwrap();
    assert!(eo.local_strike().is_deferred());
    assert!(eo.to_xml_string().unwrap().contains("<Strike>ATMF</Strike>"));
    let err = eo.build(&registry_with(false)).unwrap_err();
    assert!(matches!(err, Error::InvalidArgument(_)));
}

#[test]
fn test_underlying_indices_use_reference_data() {
    let eo = EquityOption::from_xml_string(TRADE).unwrap();
    let plain = eo.underlying_indices(None);
    assert_eq!(plain[&AssetClass::EQ].iter().collect::<Vec<_>>(), ["RIC:.SPX"]);

    let mut rd = BasicReferenceDataManager::new();
    rd.add_equity(EquityReferenceDatum {
        id: "RIC:.SPX".into(),
        equity_name: "SP5".into(),
        currency: "USD".into(),
        exchange: None,
    });
    let resolved = eo.underlying_indices(Some(&rd));
    assert_eq!(resolved[&AssetClass::EQ].iter().collect::<Vec<_>>(), ["SP5"]);

    let reg = registry_with(false).with_reference_data(Arc::new(rd));
    let mut built = eo.clone();
    built.build(&reg).unwrap();
    assert_eq!(built.base().instrument().unwrap().instrument().underlying(), "SP5");
    assert!(reg.reference_data().is_some());
}
