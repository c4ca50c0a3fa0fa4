use crate::Side;
use smol_str::SmolStr;
use std::{
    error::Error,
    fmt::{self, Display, Formatter},
};

/// Errors raised when mutating a [`Formula`](crate::Formula).
#[derive(Debug, Clone, PartialEq)]
pub enum FormulaError {
    /// The side selector wasn't `"left"` or `"right"`.
    InvalidSide { given: SmolStr },
    /// A keyed term was added to a side which already has a term with that
    /// key.
    DuplicateKey { side: Side, key: usize },
}

impl Display for FormulaError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            FormulaError::InvalidSide { given } => write!(
                f,
                "The side must be either \"left\" or \"right\", found \"{}\"",
                given
            ),
            FormulaError::DuplicateKey { side, key } => write!(
                f,
                "The {} side already contains a term with key {}",
                side, key
            ),
        }
    }
}

impl Error for FormulaError {}

/// Errors raised while rendering a [`Formula`](crate::Formula) as text.
#[derive(Debug, Clone, PartialEq)]
pub enum RenderError {
    /// A term's symbol was something other than `1` or `-1`.
    InvalidSymbol {
        side: Side,
        position: usize,
        symbol: i32,
    },
    /// One side of the equation has no terms.
    Incomplete { missing: Side },
}

impl Display for RenderError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            RenderError::InvalidSymbol {
                side,
                position,
                symbol,
            } => write!(
                f,
                "The symbol must be 1 or -1, found {} at {}[{}]",
                symbol, side, position
            ),
            RenderError::Incomplete { missing } => {
                write!(f, "Not Equation(lack {} terms)", missing)
            },
        }
    }
}

impl Error for RenderError {}
