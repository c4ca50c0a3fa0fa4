use crate::FormulaError;
use std::{
    fmt::{self, Display, Formatter},
    str::FromStr,
};

/// One of the two halves of an equality.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub fn as_str(self) -> &'static str {
        match self {
            Side::Left => "left",
            Side::Right => "right",
        }
    }
}

impl Display for Side {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Side {
    type Err = FormulaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "left" => Ok(Side::Left),
            "right" => Ok(Side::Right),
            other => Err(FormulaError::InvalidSide {
                given: other.into(),
            }),
        }
    }
}

/// Anything which can be used to pick a [`Side`] of a
/// [`Formula`](crate::Formula).
///
/// Strings are accepted so callers can select a side with `"left"` or
/// `"right"`, anything else is rejected before the formula is touched.
pub trait IntoSide {
    fn into_side(self) -> Result<Side, FormulaError>;
}

impl IntoSide for Side {
    fn into_side(self) -> Result<Side, FormulaError> { Ok(self) }
}

impl IntoSide for &str {
    fn into_side(self) -> Result<Side, FormulaError> { self.parse() }
}

impl IntoSide for &String {
    fn into_side(self) -> Result<Side, FormulaError> { self.parse() }
}
