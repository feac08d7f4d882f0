//! Row and column sizing for grid containers.

use core::{fmt, str::FromStr};

use crate::Error;

/// Describes how a [`GridLength`] value is interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GridUnitType {
    /// Sized by the largest single-cell child in the line.
    Auto,
    /// A fixed length in device-independent units.
    Absolute,
    /// A weighted share of the space left after Absolute and Auto lines.
    #[default]
    Star,
}

/// The length of a grid row or column.
///
/// Values are validated on construction: negative, NaN and infinite values
/// are rejected, and an `Auto` length always carries a value of zero.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(into = "alloc::string::String", try_from = "alloc::string::String")
)]
pub struct GridLength {
    value: f64,
    unit: GridUnitType,
}

impl GridLength {
    /// Content-sized length.
    pub const AUTO: Self = Self {
        value: 0.0,
        unit: GridUnitType::Auto,
    };

    /// A single star share.
    pub const STAR: Self = Self {
        value: 1.0,
        unit: GridUnitType::Star,
    };

    /// Creates a validated length.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] if `value` is negative, NaN or infinite.
    pub fn new(value: f64, unit: GridUnitType) -> Result<Self, Error> {
        if !value.is_finite() || value < 0.0 {
            return Err(Error::InvalidArgument {
                name: "value",
                value,
            });
        }
        let value = if unit == GridUnitType::Auto { 0.0 } else { value };
        Ok(Self { value, unit })
    }

    /// Creates a fixed length.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] for invalid values.
    pub fn absolute(value: f64) -> Result<Self, Error> {
        Self::new(value, GridUnitType::Absolute)
    }

    /// Creates a weighted star length.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] for invalid weights.
    pub fn star(weight: f64) -> Result<Self, Error> {
        Self::new(weight, GridUnitType::Star)
    }

    /// Returns the magnitude: units for Absolute, weight for Star, zero for Auto.
    #[must_use]
    pub const fn value(&self) -> f64 {
        self.value
    }

    /// Returns how the value is interpreted.
    #[must_use]
    pub const fn unit(&self) -> GridUnitType {
        self.unit
    }

    /// Returns `true` for content-sized lengths.
    #[must_use]
    pub const fn is_auto(&self) -> bool {
        matches!(self.unit, GridUnitType::Auto)
    }

    /// Returns `true` for fixed lengths.
    #[must_use]
    pub const fn is_absolute(&self) -> bool {
        matches!(self.unit, GridUnitType::Absolute)
    }

    /// Returns `true` for weighted lengths.
    #[must_use]
    pub const fn is_star(&self) -> bool {
        matches!(self.unit, GridUnitType::Star)
    }
}

impl Default for GridLength {
    fn default() -> Self {
        Self::STAR
    }
}

#[allow(clippy::float_cmp)]
impl fmt::Display for GridLength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.unit {
            GridUnitType::Auto => f.write_str("Auto"),
            GridUnitType::Star if self.value == 1.0 => f.write_str("*"),
            GridUnitType::Star => write!(f, "{}*", self.value),
            GridUnitType::Absolute => write!(f, "{}", self.value),
        }
    }
}

impl FromStr for GridLength {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.eq_ignore_ascii_case("auto") {
            return Ok(Self::AUTO);
        }
        let number = |text: &str| {
            text.trim()
                .parse::<f64>()
                .map_err(|_| Error::parse("GridLength", s))
        };
        match trimmed.strip_suffix('*') {
            Some("") => Ok(Self::STAR),
            Some(weight) => Self::star(number(weight)?),
            None => Self::absolute(number(trimmed)?),
        }
    }
}

impl From<GridLength> for alloc::string::String {
    fn from(value: GridLength) -> Self {
        alloc::string::ToString::to_string(&value)
    }
}

impl TryFrom<alloc::string::String> for GridLength {
    type Error = Error;

    fn try_from(value: alloc::string::String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Height of one grid row. Defaults to a single star share.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RowDefinition {
    /// The row height.
    pub height: GridLength,
}

impl RowDefinition {
    /// Creates a row with the given height.
    #[must_use]
    pub const fn new(height: GridLength) -> Self {
        Self { height }
    }
}

impl From<GridLength> for RowDefinition {
    fn from(height: GridLength) -> Self {
        Self::new(height)
    }
}

/// Width of one grid column. Defaults to a single star share.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ColumnDefinition {
    /// The column width.
    pub width: GridLength,
}

impl ColumnDefinition {
    /// Creates a column with the given width.
    #[must_use]
    pub const fn new(width: GridLength) -> Self {
        Self { width }
    }
}

impl From<GridLength> for ColumnDefinition {
    fn from(width: GridLength) -> Self {
        Self::new(width)
    }
}
