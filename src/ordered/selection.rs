//! Extended slice selection with negative bounds and strides.
//!
//! [`SliceSelection`] describes a `start:stop:step` slice over an
//! [`OrderedSet`](super::OrderedSet). Bounds may be negative (counted from the
//! end) and are clamped to the set's length, so a selection never fails for
//! being too wide. Only a zero step is rejected.

use super::OrderedSetError;

/// A `start:stop:step` selection over positions of an ordered set.
///
/// Missing bounds default to the start or end of the set depending on the
/// direction of the step. A missing step means `1`.
///
/// # Examples
///
/// ```rust
/// use ordered_index_set::ordered::{OrderedSet, SliceSelection};
///
/// let set: OrderedSet<char> = "abcdef".chars().collect();
///
/// let every_other = set.get_selection(SliceSelection::new().step(2)).unwrap();
/// assert_eq!(every_other.to_vec(), vec!['a', 'c', 'e']);
///
/// let reversed_tail = set
///     .get_selection(SliceSelection::new().start(-1).stop(-4).step(-1))
///     .unwrap();
/// assert_eq!(reversed_tail.to_vec(), vec!['f', 'e', 'd']);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SliceSelection {
    start: Option<isize>,
    stop: Option<isize>,
    step: Option<isize>,
}

impl SliceSelection {
    /// Creates a selection covering the whole set in forward order.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            start: None,
            stop: None,
            step: None,
        }
    }

    /// Sets the first position of the selection (inclusive).
    #[must_use]
    pub const fn start(mut self, start: isize) -> Self {
        self.start = Some(start);
        self
    }

    /// Sets the position where the selection ends (exclusive).
    #[must_use]
    pub const fn stop(mut self, stop: isize) -> Self {
        self.stop = Some(stop);
        self
    }

    /// Sets the stride between selected positions. May be negative.
    #[must_use]
    pub const fn step(mut self, step: isize) -> Self {
        self.step = Some(step);
        self
    }

    /// Returns `true` if this selection covers every position in forward order.
    #[must_use]
    pub const fn is_full(&self) -> bool {
        self.start.is_none() && self.stop.is_none() && matches!(self.step, None | Some(1))
    }

    /// Resolves the selection against a set of length `len`, yielding the
    /// selected positions in visiting order.
    pub(crate) fn positions(&self, len: usize) -> Result<Vec<usize>, OrderedSetError> {
        let step = self.step.unwrap_or(1);
        if step == 0 {
            return Err(OrderedSetError::InvalidArgument("slice step cannot be zero"));
        }

        let length = isize::try_from(len)
            .map_err(|_| OrderedSetError::InvalidArgument("set is too large to slice"))?;
        let (lower, upper) = if step < 0 {
            (-1, length - 1)
        } else {
            (0, length)
        };

        let clamp = |bound: isize| {
            if bound < 0 {
                (bound + length).max(lower)
            } else {
                bound.min(upper)
            }
        };

        let start = self
            .start
            .map_or(if step < 0 { upper } else { lower }, clamp);
        let stop = self.stop.map_or(if step < 0 { lower } else { upper }, clamp);

        let mut positions = Vec::new();
        let mut current = start;
        while (step > 0 && current < stop) || (step < 0 && current > stop) {
            // `current` is within `[0, length)` here by construction of the bounds.
            positions.push(current.unsigned_abs());
            match current.checked_add(step) {
                Some(next) => current = next,
                None => break,
            }
        }
        Ok(positions)
    }
}
