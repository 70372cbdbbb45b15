//! Error types for riskdata.
//!
//! Every failure raised while reading, validating, or building configuration
//! and trade objects is a variant of the single [`Error`] enum.  Loaders wrap
//! low-level errors in [`Error::Context`] so the final message names the
//! enclosing curve or trade; [`Error::root`] recovers the classifying error.

use thiserror::Error;

/// The top-level error type used throughout riskdata.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    /// Malformed document or structural element.
    #[error("parse error: {0}")]
    Parse(String),

    /// A field required by the object's other field values is absent.
    #[error("missing field '{field}'")]
    MissingField {
        /// Schema tag of the missing field.
        field: String,
    },

    /// A token outside a closed enumeration.
    #[error("invalid {field} '{token}', expected one of {expected}")]
    InvalidEnum {
        /// Schema tag holding the token.
        field: String,
        /// The offending token.
        token: String,
        /// Comma-separated list of the accepted tokens.
        expected: String,
    },

    /// Unrecognised day-count, calendar, or currency name.
    #[error("unknown {kind} '{name}'")]
    UnknownConvention {
        /// Kind of convention (e.g. `"day counter"`).
        kind: String,
        /// The name that failed to parse.
        name: String,
    },

    /// No pricing engine matches the trade characteristics.
    #[error(
        "no pricing engine for trade type {trade_type} (asset class {asset_class}, \
         currency {currency}, strike currency {strike_currency}, quanto {quanto})"
    )]
    EngineNotFound {
        /// Trade type discriminator.
        trade_type: String,
        /// Asset class of the underlying.
        asset_class: String,
        /// Trade (payoff) currency.
        currency: String,
        /// Strike currency, empty when not set.
        strike_currency: String,
        /// Whether a quanto engine was requested.
        quanto: bool,
    },

    /// Another error, annotated with the identity of the enclosing object.
    #[error("{context}: {source}")]
    Context {
        /// Human-readable identity, e.g. `DefaultCurve 'CDS_A'`.
        context: String,
        /// The wrapped error.
        source: Box<Error>,
    },

    /// General runtime error (raised by `fail!`).
    #[error("{0}")]
    Runtime(String),

    /// Precondition violated (raised by `ensure!`).
    #[error("precondition not satisfied: {0}")]
    Precondition(String),

    /// Invalid argument.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

impl Error {
    /// Build a [`Error::Parse`].
    pub fn parse(message: impl Into<String>) -> Self {
        Error::Parse(message.into())
    }

    /// Build a [`Error::MissingField`].
    pub fn missing_field(field: impl Into<String>) -> Self {
        Error::MissingField {
            field: field.into(),
        }
    }

    /// Build a [`Error::InvalidEnum`] from the accepted token list.
    pub fn invalid_enum(field: impl Into<String>, token: impl Into<String>, expected: &[&str]) -> Self {
        Error::InvalidEnum {
            field: field.into(),
            token: token.into(),
            expected: expected.join(", "),
        }
    }

    /// Build a [`Error::UnknownConvention`].
    pub fn unknown_convention(kind: impl Into<String>, name: impl Into<String>) -> Self {
        Error::UnknownConvention {
            kind: kind.into(),
            name: name.into(),
        }
    }

    /// Wrap `self` with the identity of the enclosing object.
    pub fn in_context(self, context: impl Into<String>) -> Self {
        Error::Context {
            context: context.into(),
            source: Box::new(self),
        }
    }

    /// The innermost error, with every [`Error::Context`] layer removed.
    pub fn root(&self) -> &Error {
        let mut err = self;
        while let Error::Context { source, .. } = err {
            err = source;
        }
        err
    }
}

/// Shorthand `Result` type used throughout riskdata.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Attach enclosing-object context to a [`Result`].
pub trait ResultExt<T> {
    /// Wrap any error with `context`.
    fn context(self, context: impl Into<String>) -> Result<T>;

    /// Wrap any error with a lazily built context.
    fn with_context<C, F>(self, f: F) -> Result<T>
    where
        C: Into<String>,
        F: FnOnce() -> C;
}

impl<T> ResultExt<T> for Result<T> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| e.in_context(context))
    }

    fn with_context<C, F>(self, f: F) -> Result<T>
    where
        C: Into<String>,
        F: FnOnce() -> C,
    {
        self.map_err(|e| e.in_context(f()))
    }
}

/// Returns `Err(Error::Precondition(...))` if `$cond` is false.
///
/// # Example
/// ```
/// use rd_core::{ensure, errors::Error};
/// fn positive(x: f64) -> rd_core::errors::Result<f64> {
///     ensure!(x > 0.0, "x must be positive, got {x}");
///     Ok(x)
/// }
/// assert!(positive(1.0).is_ok());
/// assert!(positive(-1.0).is_err());
/// ```
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $($msg:tt)*) => {
        if !$cond {
            return Err($crate::errors::Error::Precondition(
                format!($($msg)*)
            ));
        }
    };
}

/// Returns `Err(Error::Runtime(...))` immediately.
///
/// # Example
/// ```
/// use rd_core::{fail, errors::Error};
/// fn always_err() -> rd_core::errors::Result<()> {
///     fail!("something went wrong");
/// }
/// assert!(always_err().is_err());
/// ```
#[macro_export]
macro_rules! fail {
    ($($msg:tt)*) => {
        return Err($crate::errors::Error::Runtime(format!($($msg)*)))
    };
}
