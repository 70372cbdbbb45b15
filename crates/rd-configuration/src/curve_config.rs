//! The contract shared by every curve configuration.

use rd_xml::XmlSerializable;
use std::fmt;

/// A named recipe for building one market curve.
///
/// Implementors read and write their own schema element; the registry only
/// relies on the accessors below.
pub trait CurveConfig: XmlSerializable + fmt::Debug + Send + Sync {
    /// Unique curve id.
    fn curve_id(&self) -> &str;

    /// Free-text description; may be empty.
    fn curve_description(&self) -> &str;

    /// Every market quote the curve needs, in the order it consumes them.
    fn quotes(&self) -> Vec<String>;

    /// Ids of other curves this one is built from.
    fn required_curve_ids(&self) -> Vec<String> {
        Vec::new()
    }
}
