//! Four-sided insets used for margins, padding and border strokes.

use core::{fmt, ops::Add, str::FromStr};

use crate::{Error, Point, Rect, Size};

/// The thickness of a frame around a rectangle: left, top, right and bottom.
///
/// A scalar converts into a uniform thickness, a pair into
/// `(horizontal, vertical)` and a quadruple into per-side values, so call
/// sites can write `Thickness::from(8.0)` or `(8.0, 4.0).into()`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(into = "alloc::string::String", try_from = "alloc::string::String")
)]
pub struct Thickness {
    /// Inset on the left edge.
    pub left: f64,
    /// Inset on the top edge.
    pub top: f64,
    /// Inset on the right edge.
    pub right: f64,
    /// Inset on the bottom edge.
    pub bottom: f64,
}

impl Thickness {
    /// No inset on any side.
    pub const ZERO: Self = Self::uniform(0.0);

    /// Creates a thickness with explicit per-side values.
    #[must_use]
    pub const fn new(left: f64, top: f64, right: f64, bottom: f64) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Returns the same inset on every side.
    #[must_use]
    pub const fn uniform(value: f64) -> Self {
        Self::new(value, value, value, value)
    }

    /// Returns `horizontal` on left/right and `vertical` on top/bottom.
    #[must_use]
    pub const fn symmetric(horizontal: f64, vertical: f64) -> Self {
        Self::new(horizontal, vertical, horizontal, vertical)
    }

    /// `left + right`.
    #[must_use]
    pub const fn horizontal(&self) -> f64 {
        self.left + self.right
    }

    /// `top + bottom`.
    #[must_use]
    pub const fn vertical(&self) -> f64 {
        self.top + self.bottom
    }

    /// Returns `true` when all four sides are zero.
    #[must_use]
    #[allow(clippy::float_cmp)]
    pub const fn is_empty(&self) -> bool {
        self.left == 0.0 && self.top == 0.0 && self.right == 0.0 && self.bottom == 0.0
    }

    /// Total inset as a size (`horizontal`, `vertical`).
    #[must_use]
    pub const fn size(&self) -> Size {
        Size::new(self.horizontal(), self.vertical())
    }

    /// Shrinks `rect` by this thickness. The resulting width and height are
    /// clamped at zero.
    #[must_use]
    pub fn deflate(&self, rect: Rect) -> Rect {
        Rect::new(
            Point::new(rect.x() + self.left, rect.y() + self.top),
            Size::new(
                (rect.width() - self.horizontal()).max(0.0),
                (rect.height() - self.vertical()).max(0.0),
            ),
        )
    }

    /// Grows `size` by this thickness.
    #[must_use]
    pub fn inflate(&self, size: Size) -> Size {
        Size::new(size.width + self.horizontal(), size.height + self.vertical())
    }
}

impl Add for Thickness {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(
            self.left + rhs.left,
            self.top + rhs.top,
            self.right + rhs.right,
            self.bottom + rhs.bottom,
        )
    }
}

impl From<f64> for Thickness {
    fn from(value: f64) -> Self {
        Self::uniform(value)
    }
}

impl From<(f64, f64)> for Thickness {
    fn from((horizontal, vertical): (f64, f64)) -> Self {
        Self::symmetric(horizontal, vertical)
    }
}

impl From<(f64, f64, f64, f64)> for Thickness {
    fn from((left, top, right, bottom): (f64, f64, f64, f64)) -> Self {
        Self::new(left, top, right, bottom)
    }
}

#[allow(clippy::float_cmp)]
impl fmt::Display for Thickness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Self {
            left,
            top,
            right,
            bottom,
        } = *self;
        if left == top && left == right && left == bottom {
            write!(f, "{left}")
        } else if left == right && top == bottom {
            write!(f, "{left},{top}")
        } else {
            write!(f, "{left},{top},{right},{bottom}")
        }
    }
}

impl FromStr for Thickness {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = [0.0; 4];
        let mut count = 0;
        for part in s.split(',') {
            let slot = parts
                .get_mut(count)
                .ok_or_else(|| Error::parse("Thickness", s))?;
            *slot = part
                .trim()
                .parse::<f64>()
                .map_err(|_| Error::parse("Thickness", s))?;
            count += 1;
        }
        match count {
            1 => Ok(Self::uniform(parts[0])),
            2 => Ok(Self::symmetric(parts[0], parts[1])),
            4 => Ok(Self::new(parts[0], parts[1], parts[2], parts[3])),
            _ => Err(Error::parse("Thickness", s)),
        }
    }
}

impl From<Thickness> for alloc::string::String {
    fn from(value: Thickness) -> Self {
        alloc::string::ToString::to_string(&value)
    }
}

impl TryFrom<alloc::string::String> for Thickness {
    type Error = Error;

    fn try_from(value: alloc::string::String) -> Result<Self, Self::Error> {
        value.parse()
    }
}
