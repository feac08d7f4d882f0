//! Errors raised by attribute construction and mutation.
//!
//! Every error is local to the call that produced it: invalid values are
//! rejected when they are constructed or set, never deferred to layout time.

use alloc::string::String;

/// Errors produced by `trellis-core` value types.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// A length was constructed from a negative, NaN or infinite value.
    #[error("invalid value {value} for `{name}`: must be finite and non-negative")]
    InvalidArgument {
        /// Name of the rejected argument.
        name: &'static str,
        /// The rejected value.
        value: f64,
    },
    /// An integer attribute was set below its minimum.
    #[error("`{name}` must be at least {min}, got {value}")]
    OutOfRange {
        /// Name of the attribute.
        name: &'static str,
        /// The rejected value.
        value: i64,
        /// Smallest accepted value.
        min: i64,
    },
    /// A raw enum value does not name any variant.
    #[error("{name} value `{value}` is not supported")]
    Unsupported {
        /// Name of the enum.
        name: &'static str,
        /// The rejected raw value.
        value: String,
    },
    /// Textual form could not be parsed.
    #[error("cannot parse `{input}` as {kind}")]
    Parse {
        /// The type being parsed.
        kind: &'static str,
        /// The rejected input.
        input: String,
    },
}

impl Error {
    pub(crate) fn parse(kind: &'static str, input: &str) -> Self {
        Self::Parse {
            kind,
            input: input.into(),
        }
    }

    pub(crate) fn unsupported(name: &'static str, value: impl core::fmt::Display) -> Self {
        use alloc::string::ToString;
        Self::Unsupported {
            name,
            value: value.to_string(),
        }
    }
}
