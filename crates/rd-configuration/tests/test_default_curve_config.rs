//! Default curve configurations read from and written to documents.

use proptest::prelude::*;
use rd_configuration::{CurveConfig, CurveConfigurations, DefaultCurveConfig, DefaultCurveType};
use rd_core::Error;
use rd_time::DayCounter;
use rd_xml::{XmlDocument, XmlSerializable};
use std::collections::BTreeSet;

fn curve_xml(curve_type: &str, discount: Option<&str>) -> String {
    let discount = discount
        .map(|d| format!("<DiscountCurve>{d}</DiscountCurve>"))
        .unwrap_or_default();
    format!(
        r#"<DefaultCurve>
  <CurveId>CDS_A</CurveId>
  <CurveDescription>Issuer A senior</CurveDescription>
  <Currency>USD</Currency>
  <Type>{curve_type}</Type>
  {discount}
  <RecoveryRate>RECOVERY_RATE/RATE/A/SNRFOR/USD</RecoveryRate>
  <DayCounter>A365</DayCounter>
  <Conventions>CDS-STANDARD-CONVENTIONS</Conventions>
  <Quotes>
    <Quote>CDS/CREDIT_SPREAD/A/SNRFOR/USD/5Y</Quote>
    <Quote>CDS/CREDIT_SPREAD/A/SNRFOR/USD/1Y</Quote>
    <Quote>CDS/CREDIT_SPREAD/A/SNRFOR/USD/3Y</Quote>
  </Quotes>
</DefaultCurve>"#
    )
}

#[test]
fn test_reads_every_field() {
    let c = DefaultCurveConfig::from_xml_string(&curve_xml("SpreadCDS", Some("USD-SOFR"))).unwrap();
    assert_eq!(c.curve_id(), "CDS_A");
    assert_eq!(c.curve_description(), "Issuer A senior");
    assert_eq!(c.currency(), "USD");
    assert_eq!(c.type_(), DefaultCurveType::SpreadCDS);
    assert_eq!(c.discount_curve_id(), Some("USD-SOFR"));
    assert_eq!(c.benchmark_curve_id(), None);
    assert_eq!(c.recovery_rate_quote(), Some("RECOVERY_RATE/RATE/A/SNRFOR/USD"));
    assert_eq!(c.day_counter(), DayCounter::Actual365Fixed);
    assert_eq!(c.conventions_id(), "CDS-STANDARD-CONVENTIONS");
    assert!(c.extrapolation());
    // document order, not sorted
    assert_eq!(
        c.cds_quotes(),
        [
            "CDS/CREDIT_SPREAD/A/SNRFOR/USD/5Y",
            "CDS/CREDIT_SPREAD/A/SNRFOR/USD/1Y",
            "CDS/CREDIT_SPREAD/A/SNRFOR/USD/3Y"
        ]
    );
}

#[test]
fn test_round_trip_through_text() {
    let c = DefaultCurveConfig::from_xml_string(&curve_xml("SpreadCDS", Some("USD-SOFR"))).unwrap();
    let text = c.to_xml_string().unwrap();
    assert!(!text.contains("BenchmarkCurve"));
    assert_eq!(DefaultCurveConfig::from_xml_string(&text).unwrap(), c);
}

#[test]
fn test_output_tag_order_is_fixed() {
    let c = DefaultCurveConfig::from_xml_string(&curve_xml("SpreadCDS", Some("USD-SOFR"))).unwrap();
    let node = c.to_xml();
    let tags: Vec<&str> = node.children().iter().map(|n| n.name()).collect();
    assert_eq!(
        tags,
        [
            "CurveId",
            "CurveDescription",
            "Currency",
            "Type",
            "DiscountCurve",
            "RecoveryRate",
            "DayCounter",
            "Conventions",
            "Quotes",
            "Extrapolation"
        ]
    );
}

#[test]
fn test_unknown_type_is_invalid_enum() {
    let err = DefaultCurveConfig::from_xml_string(&curve_xml("Bogus", Some("USD-SOFR"))).unwrap_err();
    assert_eq!(
        err.root(),
        &Error::invalid_enum("Type", "Bogus", &["SpreadCDS", "HazardRate", "Yield"])
    );
    assert!(err.to_string().starts_with("DefaultCurve 'CDS_A': "), "{err}");
}

#[test]
fn test_discount_curve_required_by_type() {
    let err = DefaultCurveConfig::from_xml_string(&curve_xml("SpreadCDS", None)).unwrap_err();
    assert_eq!(err.root(), &Error::missing_field("DiscountCurve"));

    let err = DefaultCurveConfig::from_xml_string(&curve_xml("Yield", Some(""))).unwrap_err();
    assert_eq!(err.root(), &Error::missing_field("DiscountCurve"));

    let hr = DefaultCurveConfig::from_xml_string(&curve_xml("HazardRate", Some(""))).unwrap();
    assert_eq!(hr.discount_curve_id(), None);
}

#[test]
fn test_empty_quotes_rejected() {
    let xml = curve_xml("HazardRate", None).replace(
        "<Quote>CDS/CREDIT_SPREAD/A/SNRFOR/USD/5Y</Quote>\n    <Quote>CDS/CREDIT_SPREAD/A/SNRFOR/USD/1Y</Quote>\n    <Quote>CDS/CREDIT_SPREAD/A/SNRFOR/USD/3Y</Quote>",
        "",
    );
    let err = DefaultCurveConfig::from_xml_string(&xml).unwrap_err();
    assert_eq!(err.root(), &Error::missing_field("Quotes"));
}

#[test]
fn test_unknown_day_counter() {
    let xml = curve_xml("HazardRate", None).replace("A365", "Act/999");
    let err = DefaultCurveConfig::from_xml_string(&xml).unwrap_err();
    assert!(matches!(err.root(), Error::UnknownConvention { .. }));
}

#[test]
fn test_wrong_root_tag() {
    let xml = curve_xml("HazardRate", None).replace("DefaultCurve>", "YieldCurve>");
    let err = DefaultCurveConfig::from_xml_string(&xml).unwrap_err();
    assert!(matches!(err, Error::Parse(_)));
}

#[test]
fn test_two_curves_keep_reference_as_id() {
    let parent = curve_xml("HazardRate", None);
    let child = curve_xml("SpreadCDS", Some("CDS_A"))
        .replace("<CurveId>CDS_A</CurveId>", "<CurveId>CDS_B</CurveId>");
    let text = format!(
        "<CurveConfiguration><DefaultCurves>{parent}{child}</DefaultCurves></CurveConfiguration>"
    );
    let doc: XmlDocument = text.parse().unwrap();
    let set = CurveConfigurations::from_xml(doc.root()).unwrap();

    assert_eq!(set.default_curve_ids().collect::<Vec<_>>(), ["CDS_A", "CDS_B"]);
    let b = set.default_curve_config("CDS_B").unwrap();
    assert_eq!(b.discount_curve_id(), Some("CDS_A"));
    assert!(set.missing_references(&BTreeSet::new()).is_empty());

    let again = CurveConfigurations::from_xml_string(&set.to_xml_string().unwrap()).unwrap();
    assert_eq!(again, set);
}

fn quote_strategy() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec("[A-Z]{3}/[A-Z_]{4,12}/[0-9]{1,2}[YM]", 1..12)
}

proptest! {
    #[test]
    fn prop_round_trip_preserves_quote_order(
        quotes in quote_strategy(),
        extrapolation in any::<bool>(),
        recovery in prop::option::of("[A-Z/_]{5,20}"),
    ) {
        let c = DefaultCurveConfig::new(
            "CDS_P",
            "",
            "EUR",
            DefaultCurveType::HazardRate,
            "",
            recovery.unwrap_or_default(),
            DayCounter::Actual360,
            "CDS-CONV",
            quotes.clone(),
            extrapolation,
        )
        .unwrap();
        let back = DefaultCurveConfig::from_xml_string(&c.to_xml_string().unwrap()).unwrap();
        prop_assert_eq!(back.cds_quotes(), quotes.as_slice());
        prop_assert_eq!(back, c);
    }

    #[test]
    fn prop_padded_values_survive_round_trip(
        quotes in prop::collection::vec("[ \t]{0,2}[A-Z]{3}/[0-9]{1,2}Y[ \t]{0,2}", 1..6),
        description in "[ \t]{0,2}[A-Za-z ]{0,16}[ \t]{0,2}",
    ) {
        let c = DefaultCurveConfig::new(
            " CDS_P ",
            description,
            "EUR",
            DefaultCurveType::HazardRate,
            "",
            "",
            DayCounter::Actual360,
            "CDS-CONV",
            quotes,
            true,
        )
        .unwrap();
        let back = DefaultCurveConfig::from_xml_string(&c.to_xml_string().unwrap()).unwrap();
        prop_assert_eq!(back, c);
    }
}
