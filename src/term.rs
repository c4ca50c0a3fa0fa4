use smol_str::SmolStr;
use std::{
    convert::TryFrom,
    fmt::{self, Display, Formatter},
};

/// A single signed term on one side of an equation.
///
/// The `symbol` is kept as a raw integer so terms can be built and edited
/// freely. It is only checked (see [`Term::sign()`]) when the equation is
/// rendered.
#[derive(Debug, Clone, PartialEq)]
pub struct Term {
    position: usize,
    label: Option<SmolStr>,
    symbol: i32,
    content: SmolStr,
    key: Option<usize>,
}

impl Term {
    pub fn new<S: Into<SmolStr>>(symbol: i32, content: S) -> Self {
        Term {
            position: 0,
            label: None,
            symbol,
            content: content.into(),
            key: None,
        }
    }

    /// Create the lightweight keyed form of a term from a signed string like
    /// `"+3a"` or `"-b"`.
    ///
    /// The leading sign character becomes the term's symbol, a string without
    /// one is treated as positive.
    pub fn keyed(key: usize, signed: &str) -> Self {
        let (symbol, content) = if let Some(rest) = signed.strip_prefix('-') {
            (-1, rest)
        } else if let Some(rest) = signed.strip_prefix('+') {
            (1, rest)
        } else {
            (1, signed)
        };

        Term {
            key: Some(key),
            ..Term::new(symbol, content)
        }
    }

    pub fn with_label<S: Into<SmolStr>>(mut self, label: S) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn position(&self) -> usize { self.position }

    pub fn label(&self) -> Option<&str> { self.label.as_deref() }

    pub fn symbol(&self) -> i32 { self.symbol }

    pub fn content(&self) -> &str { &self.content }

    pub fn key(&self) -> Option<usize> { self.key }

    pub fn change_label<S: Into<SmolStr>>(&mut self, new_label: S) {
        self.label = Some(new_label.into());
    }

    /// Flip the term's sign.
    pub fn change_symbol(&mut self) { self.symbol = self.symbol.wrapping_neg(); }

    /// Only the owning [`Formula`](crate::Formula) may move a term, otherwise
    /// `position` would stop matching the term's index.
    pub(crate) fn change_position(&mut self, new_position: usize) {
        self.position = new_position;
    }

    pub fn change_content<S: Into<SmolStr>>(&mut self, new_content: S) {
        self.content = new_content.into();
    }

    /// Interpret the raw symbol, failing if it's neither `1` nor `-1`.
    pub fn sign(&self) -> Result<Sign, InvalidSymbol> {
        Sign::try_from(self.symbol)
    }
}

/// Diagnostic output, this is *not* how a term appears in a rendered
/// equation.
impl Display for Term {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Term: position={}  label=$", self.position)?;

        match &self.label {
            Some(label) => write!(f, "{}", label)?,
            None => write!(f, "None")?,
        }

        write!(f, "  symbol={}  content={}", self.symbol, self.content)
    }
}

/// The validated sign of a [`Term`].
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Sign {
    Plus,
    Minus,
}

impl Sign {
    pub fn as_char(self) -> char {
        match self {
            Sign::Plus => '+',
            Sign::Minus => '-',
        }
    }
}

/// A symbol which couldn't be interpreted as a [`Sign`].
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct InvalidSymbol(pub i32);

impl TryFrom<i32> for Sign {
    type Error = InvalidSymbol;

    fn try_from(symbol: i32) -> Result<Self, Self::Error> {
        match symbol {
            1 => Ok(Sign::Plus),
            -1 => Ok(Sign::Minus),
            other => Err(InvalidSymbol(other)),
        }
    }
}
