//! Equations built from two ordered sides of signed terms.
//!
//! A [`Formula`] owns the terms on either side of the `=`, keeps each term's
//! position in sync with where it sits, and can be rendered back to text.
//!
//! ```rust
//! use formula::{Formula, Side, Term};
//!
//! let mut formula = Formula::new(
//!     vec![Term::new(1, "x"), Term::new(1, "y")],
//!     vec![Term::new(1, "15")],
//! );
//! assert_eq!(formula.to_string(), "Formula: x+y=15");
//!
//! formula.add_terms(vec![Term::new(-1, "z")], Side::Left)?;
//! formula.drop_terms(vec![0], "left")?;
//! assert_eq!(formula.render()?, "y-z=15");
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#[cfg(test)]
#[macro_use]
extern crate pretty_assertions;

mod error;
mod formula;
#[cfg(test)]
mod proptests;
mod render;
mod side;
mod term;

pub use error::{FormulaError, RenderError};
pub use formula::{Formula, Terms};
pub use side::{IntoSide, Side};
pub use term::{InvalidSymbol, Sign, Term};
