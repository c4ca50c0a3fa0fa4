use crate::{FormulaError, IntoSide, Side, Term};
use std::collections::HashSet;

/// An equation made of two ordered sequences of [`Term`]s.
///
/// Each term's [`Term::position()`] always matches its index within the side
/// that owns it.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Formula {
    pub(crate) left: Vec<Term>,
    pub(crate) right: Vec<Term>,
}

/// A read-only view of both sides of a [`Formula`].
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Terms<'a> {
    pub left: &'a [Term],
    pub right: &'a [Term],
}

impl Formula {
    pub fn new<L, R>(left: L, right: R) -> Self
    where
        L: IntoIterator<Item = Term>,
        R: IntoIterator<Item = Term>,
    {
        let mut formula = Formula {
            left: left.into_iter().collect(),
            right: right.into_iter().collect(),
        };
        renumber(&mut formula.left);
        renumber(&mut formula.right);

        formula
    }

    pub fn empty() -> Self { Formula::default() }

    /// Builder-style version of [`Formula::add_terms()`].
    pub fn with_terms<I, S>(
        mut self,
        terms: I,
        side: S,
    ) -> Result<Self, FormulaError>
    where
        I: IntoIterator<Item = Term>,
        S: IntoSide,
    {
        self.add_terms(terms, side)?;
        Ok(self)
    }

    /// Append `terms` to one side of the equation.
    ///
    /// Keyed terms (see [`Term::keyed()`]) must not reuse a key already present
    /// on that side. If any of them do, nothing is added.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use formula::{Formula, Term};
    ///
    /// let mut formula = Formula::new(
    ///     vec![Term::new(1, "x"), Term::new(1, "y")],
    ///     vec![Term::new(1, "15")],
    /// );
    /// formula.add_terms(vec![Term::new(-1, "z")], "left")?;
    ///
    /// assert_eq!(formula.render()?, "x+y-z=15");
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn add_terms<I, S>(
        &mut self,
        terms: I,
        side: S,
    ) -> Result<(), FormulaError>
    where
        I: IntoIterator<Item = Term>,
        S: IntoSide,
    {
        let side = side.into_side()?;
        let incoming: Vec<Term> = terms.into_iter().collect();
        let existing = self.side_mut(side);

        check_keys(existing, &incoming, side)?;

        let added = incoming.len();
        existing.extend(incoming);

        if existing.iter().any(|term| term.key().is_some()) {
            // unkeyed terms go after the keyed ones, keeping their order
            existing.sort_by_key(|term| term.key().unwrap_or(usize::MAX));
        }
        renumber(existing);

        tracing::debug!(
            target: "formula",
            side = %side,
            added = added,
            len = existing.len(),
            "Added terms"
        );

        Ok(())
    }

    /// Remove the terms at `indexes` from one side, returning them in their
    /// original order.
    ///
    /// Negative indexes count back from the end of the side, so `-1` is the
    /// last term. Indexes which don't refer to a term are ignored.
    pub fn drop_terms<I, S>(
        &mut self,
        indexes: I,
        side: S,
    ) -> Result<Vec<Term>, FormulaError>
    where
        I: IntoIterator<Item = isize>,
        S: IntoSide,
    {
        let side = side.into_side()?;
        let existing = self.side_mut(side);
        let len = existing.len();

        let mut to_drop = HashSet::new();
        for index in indexes {
            match normalize_index(index, len) {
                Some(index) => {
                    to_drop.insert(index);
                },
                None => tracing::trace!(
                    target: "formula",
                    side = %side,
                    index = index,
                    len = len,
                    "Ignoring an index with no matching term"
                ),
            }
        }

        let (dropped, kept): (Vec<_>, Vec<_>) = std::mem::take(existing)
            .into_iter()
            .enumerate()
            .partition(|(i, _)| to_drop.contains(i));

        *existing = kept.into_iter().map(|(_, term)| term).collect();
        renumber(existing);

        tracing::debug!(
            target: "formula",
            side = %side,
            dropped = dropped.len(),
            len = existing.len(),
            "Dropped terms"
        );

        Ok(dropped.into_iter().map(|(_, term)| term).collect())
    }

    pub fn terms(&self) -> Terms<'_> {
        Terms {
            left: &self.left,
            right: &self.right,
        }
    }

    pub fn side(&self, side: Side) -> &[Term] {
        match side {
            Side::Left => &self.left,
            Side::Right => &self.right,
        }
    }

    /// Get a handle to the term at `position` so it can be edited in place.
    pub fn term_mut(
        &mut self,
        side: Side,
        position: usize,
    ) -> Option<&mut Term> {
        self.side_mut(side).get_mut(position)
    }

    /// Does each side have at least one term?
    pub fn is_complete(&self) -> bool { self.missing_side().is_none() }

    /// The first side (checking left before right) which has no terms.
    pub fn missing_side(&self) -> Option<Side> {
        if self.left.is_empty() {
            Some(Side::Left)
        } else if self.right.is_empty() {
            Some(Side::Right)
        } else {
            None
        }
    }

    fn side_mut(&mut self, side: Side) -> &mut Vec<Term> {
        match side {
            Side::Left => &mut self.left,
            Side::Right => &mut self.right,
        }
    }
}

fn renumber(terms: &mut [Term]) {
    for (i, term) in terms.iter_mut().enumerate() {
        term.change_position(i);
    }
}

fn normalize_index(index: isize, len: usize) -> Option<usize> {
    let index = if index < 0 {
        len.checked_sub(index.unsigned_abs())?
    } else {
        index as usize
    };

    if index < len {
        Some(index)
    } else {
        None
    }
}

/// Make sure none of the `incoming` keys clash with each other or with a term
/// which is already on this side.
fn check_keys(
    existing: &[Term],
    incoming: &[Term],
    side: Side,
) -> Result<(), FormulaError> {
    let mut seen: HashSet<usize> =
        existing.iter().filter_map(Term::key).collect();

    for key in incoming.iter().filter_map(Term::key) {
        if !seen.insert(key) {
            return Err(FormulaError::DuplicateKey { side, key });
        }
    }

    Ok(())
}
