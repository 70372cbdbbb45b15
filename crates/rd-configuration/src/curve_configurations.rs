//! `CurveConfigurations` — the set of curve configurations for one run.

use crate::curve_config::CurveConfig;
use crate::default_curve_config::DefaultCurveConfig;
use rd_core::errors::{Error, Result};
use rd_xml::{XmlNode, XmlSerializable};
use std::collections::{BTreeMap, BTreeSet};
use tracing::{debug, warn};

/// Curve configurations keyed by curve id.
///
/// References between curves stay as ids; [`missing_references`] reports
/// the ones that resolve nowhere.
///
/// [`missing_references`]: CurveConfigurations::missing_references
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CurveConfigurations {
    default_curves: BTreeMap<String, DefaultCurveConfig>,
}

impl CurveConfigurations {
    /// An empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `config`, replacing (and returning) any entry with the same id.
    pub fn add_default_curve_config(&mut self, config: DefaultCurveConfig) -> Option<DefaultCurveConfig> {
        let id = config.curve_id().to_string();
        let replaced = self.default_curves.insert(id.clone(), config);
        if replaced.is_some() {
            warn!(curve_id = %id, "duplicate default curve configuration replaced");
        }
        replaced
    }

    /// Whether a default curve `id` is configured.
    pub fn has_default_curve_config(&self, id: &str) -> bool {
        self.default_curves.contains_key(id)
    }

    /// The default curve `id`.
    pub fn default_curve_config(&self, id: &str) -> Result<&DefaultCurveConfig> {
        self.default_curves.get(id).ok_or_else(|| {
            Error::InvalidArgument(format!("no default curve configuration with id '{id}'"))
        })
    }

    /// Configured default curve ids, ascending.
    pub fn default_curve_ids(&self) -> impl Iterator<Item = &str> {
        self.default_curves.keys().map(String::as_str)
    }

    /// Number of configured curves.
    pub fn len(&self) -> usize {
        self.default_curves.len()
    }

    /// Whether no curves are configured.
    pub fn is_empty(&self) -> bool {
        self.default_curves.is_empty()
    }

    /// Every quote any configured curve needs.
    pub fn quotes(&self) -> BTreeSet<String> {
        self.default_curves
            .values()
            .flat_map(|c| c.quotes())
            .collect()
    }

    /// Referenced curve ids found neither here nor in `known`.
    pub fn missing_references(&self, known: &BTreeSet<String>) -> BTreeSet<String> {
        self.default_curves
            .values()
            .flat_map(|c| c.required_curve_ids())
            .filter(|id| !self.has_default_curve_config(id) && !known.contains(id))
            .collect()
    }
}

impl XmlSerializable for CurveConfigurations {
    fn from_xml(node: &XmlNode) -> Result<Self> {
        node.check_name("CurveConfiguration")?;
        let mut configs = Self::new();
        if let Some(group) = node.child("DefaultCurves") {
            for child in group.children_named("DefaultCurve") {
                configs.add_default_curve_config(DefaultCurveConfig::from_xml(child)?);
            }
        }
        debug!(default_curves = configs.len(), "loaded curve configurations");
        Ok(configs)
    }

    fn to_xml(&self) -> XmlNode {
        let mut node = XmlNode::new("CurveConfiguration");
        let group = node.add_child(XmlNode::new("DefaultCurves"));
        for config in self.default_curves.values() {
            group.add_child(config.to_xml());
        }
        node
    }
}
