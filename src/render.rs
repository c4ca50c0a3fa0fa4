//! Turning a [`Formula`] back into text.
//!
//! The grammar for a rendered equation is:
//!
//! ```text
//! equation := side "=" side
//! side     := head tail*
//! head     := "-"? CONTENT
//! tail     := ("+" | "-") CONTENT
//! ```
//!
//! The head's sign is only written when it is negative, and no whitespace is
//! ever inserted.

use crate::{Formula, RenderError, Side, Sign, Term};
use std::fmt::{self, Display, Formatter, Write};

impl Formula {
    /// Render the equation as text, e.g. `"x+y-z=15"`.
    pub fn render(&self) -> Result<String, RenderError> {
        if let Some(missing) = self.missing_side() {
            return Err(RenderError::Incomplete { missing });
        }

        let mut buffer = String::new();
        write_side(&mut buffer, &self.left, Side::Left)?;
        buffer.push('=');
        write_side(&mut buffer, &self.right, Side::Right)?;

        tracing::trace!(target: "formula", rendered = %buffer, "Rendered");

        Ok(buffer)
    }
}

fn write_side(
    buffer: &mut String,
    terms: &[Term],
    side: Side,
) -> Result<(), RenderError> {
    for (i, term) in terms.iter().enumerate() {
        let sign = term.sign().map_err(|e| RenderError::InvalidSymbol {
            side,
            position: i,
            symbol: e.0,
        })?;

        match (i, sign) {
            (0, Sign::Plus) => {},
            (_, sign) => buffer.push(sign.as_char()),
        }
        buffer.push_str(term.content());
    }

    Ok(())
}

impl Display for Formula {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str("Formula: ")?;

        match self.render() {
            Ok(rendered) => f.write_str(&rendered),
            Err(e @ RenderError::Incomplete { .. }) => write!(f, "{}", e),
            Err(e) => {
                f.write_str("Invalid(")?;
                write!(f, "{}", e)?;
                f.write_char(')')
            },
        }
    }
}
