//! # rd-xml
//!
//! The serialization node model every configuration and trade object reads
//! from and writes to.
//!
//! An [`XmlNode`] is a detached tree of tag name, attributes, child nodes and
//! text. [`XmlDocument`] parses text into such a tree and writes it back;
//! objects implement [`XmlSerializable`] purely in terms of the node
//! accessors, so the node model is the only place that knows about XML
//! syntax.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Document parsing and writing.
pub mod document;

/// The node tree and its accessors.
pub mod node;

/// The round-trip serialization contract.
pub mod serializable;

pub use document::XmlDocument;
pub use node::XmlNode;
pub use serializable::XmlSerializable;
