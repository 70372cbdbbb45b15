//! Loading, building and writing a portfolio.

use rd_core::errors::{Error, Result};
use rd_instruments::{ExerciseType, PricingEngine, PricingResults, VanillaOptionArguments};
use rd_portfolio::{AssetClass, EngineKey, EngineRegistry, Portfolio, Trade, TradeFactory};
use rd_xml::{XmlDocument, XmlSerializable};
use std::sync::Arc;

#[derive(Debug)]
struct UnitEngine;

impl PricingEngine<VanillaOptionArguments> for UnitEngine {
    fn calculate(&self, _: &VanillaOptionArguments) -> Result<PricingResults> {
        Ok(PricingResults::from_npv(1.0))
    }
}

fn trade(id: &str, style: &str, name: &str) -> String {
    format!(
        r#"<Trade id="{id}">
  <TradeType>EquityOption</TradeType>
  <EquityOptionData>
    <OptionData>
      <LongShort>Long</LongShort>
      <OptionType>Put</OptionType>
      <Style>{style}</Style>
      <ExerciseDates><ExerciseDate>2027-03-01</ExerciseDate></ExerciseDates>
    </OptionData>
    <Name>{name}</Name>
    <Currency>EUR</Currency>
    <Strike>100</Strike>
    <Quantity>2</Quantity>
  </EquityOptionData>
</Trade>"#
    )
}

fn portfolio_doc(trades: &[String]) -> String {
    format!("<Portfolio>{}</Portfolio>", trades.concat())
}

fn european_engines() -> EngineRegistry {
    let mut reg = EngineRegistry::default();
    reg.register(
        EngineKey::new("EquityOption", AssetClass::EQ, ExerciseType::European),
        Arc::new(UnitEngine),
    );
    reg
}

#[test]
fn test_build_continues_past_failures() {
    let doc = portfolio_doc(&[
        trade("T1", "European", "SX5E"),
        trade("T2", "American", "DAX"),
        trade("T3", "European", "CAC"),
    ]);
    let mut portfolio = Portfolio::from_xml_string(&doc).unwrap();
    assert_eq!(portfolio.len(), 3);

    let failures = portfolio.build(&european_engines());
    assert_eq!(failures.len(), 1);
    assert_eq!(failures[0].trade_id, "T2");
    assert!(matches!(failures[0].error, Error::EngineNotFound { .. }));

    assert_eq!(portfolio.ids().collect::<Vec<_>>(), ["T1", "T3"]);
    for t in portfolio.trades() {
        assert_eq!(t.npv().unwrap(), 2.0);
    }
}

#[test]
fn test_duplicate_trade_id_is_parse_error() {
    let doc = portfolio_doc(&[trade("T1", "European", "SX5E"), trade("T1", "European", "DAX")]);
    let err = Portfolio::from_xml_string(&doc).unwrap_err();
    assert_eq!(err, Error::parse("duplicate trade id 'T1'"));
}

#[test]
fn test_unknown_trade_type_is_rejected() {
    let swap = trade("S1", "European", "X").replace("EquityOption<", "Swap<");
    let doc = portfolio_doc(&[swap]);
    let err = Portfolio::from_xml_string(&doc).unwrap_err();
    assert!(matches!(err.root(), Error::InvalidEnum { .. }));
    assert!(err.to_string().starts_with("Trade 'S1'"), "{err}");
}

#[test]
fn test_underlying_indices_union() {
    let doc = portfolio_doc(&[
        trade("T1", "European", "SX5E"),
        trade("T2", "European", "DAX"),
        trade("T3", "European", "SX5E"),
    ]);
    let portfolio = Portfolio::from_xml_string(&doc).unwrap();
    let indices = portfolio.underlying_indices(None);
    assert_eq!(indices.len(), 1);
    assert_eq!(indices[&AssetClass::EQ].iter().collect::<Vec<_>>(), ["DAX", "SX5E"]);
}

#[test]
fn test_round_trip_in_id_order() {
    let doc = portfolio_doc(&[trade("B", "European", "DAX"), trade("A", "European", "SX5E")]);
    let portfolio = Portfolio::from_xml_string(&doc).unwrap();
    let node = portfolio.to_xml();
    let ids: Vec<_> = node.children().iter().filter_map(|t| t.attribute("id")).collect();
    assert_eq!(ids, ["A", "B"]);

    let text = portfolio.to_xml_string().unwrap();
    let again: XmlDocument = text.parse().unwrap();
    let reread = Portfolio::from_xml_with(again.root(), &TradeFactory::default()).unwrap();
    assert_eq!(reread.to_xml(), node);
}

#[test]
fn test_removed_trade_is_gone() {
    let doc = portfolio_doc(&[trade("T1", "European", "SX5E")]);
    let mut portfolio = Portfolio::from_xml_string(&doc).unwrap();
    assert!(portfolio.has("T1"));
    assert!(portfolio.remove("T1").is_some());
    assert!(portfolio.is_empty());
    assert!(portfolio.get("T1").is_none());
}
