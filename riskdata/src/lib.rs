//! # riskdata
//!
//! Typed curve configurations and trade definitions that read from and
//! write back to XML documents without loss.
//!
//! This crate is a **façade** that re-exports the workspace crates.
//! Application code should depend on this crate rather than the
//! individual `rd-*` crates.
//!
//! ## Quick start
//!
//! ```toml
//! [dependencies]
//! riskdata = "0.1"
//! ```
//!
//! ```rust
//! use riskdata::configuration::{CurveConfig, DefaultCurveConfig, DefaultCurveType};
//! use riskdata::xml::XmlSerializable;
//!
//! let doc = r#"<DefaultCurve>
//!   <CurveId>CDS_A</CurveId>
//!   <CurveDescription>Issuer A</CurveDescription>
//!   <Currency>USD</Currency>
//!   <Type>HazardRate</Type>
//!   <DayCounter>A365</DayCounter>
//!   <Conventions>CDS-CONV</Conventions>
//!   <Quotes><Quote>HAZARD_RATE/RATE/A/SNRFOR/USD/5Y</Quote></Quotes>
//! </DefaultCurve>"#;
//!
//! let curve = DefaultCurveConfig::from_xml_string(doc).unwrap();
//! assert_eq!(curve.curve_id(), "CDS_A");
//! assert_eq!(curve.type_(), DefaultCurveType::HazardRate);
//! let again = DefaultCurveConfig::from_xml_string(&curve.to_xml_string().unwrap()).unwrap();
//! assert_eq!(again, curve);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Error definitions, positions and scalar parsers.
pub use rd_core as core;

/// Dates and day counters.
pub use rd_time as time;

/// Currencies, rounding and configurable currencies.
pub use rd_currencies as currencies;

/// XML node model, reader and writer.
pub use rd_xml as xml;

/// Payoffs, exercises and the instrument/engine seam.
pub use rd_instruments as instruments;

/// Curve and currency configuration.
pub use rd_configuration as configuration;

/// Trades, engine wiring and portfolios.
pub use rd_portfolio as portfolio;
