//! Reorder engine.

use tracing::debug;

use super::{Ranked, MAX_STEP, MIN_GAP, PRECEDENCE_STEP};

/// Outcome of a reorder or insertion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    /// The item already sat at the destination; nothing was written.
    Unchanged,

    /// The item received a new precedence.
    Placed {
        /// The precedence assigned to the moved item.
        precedence: i64,
        /// Whether the rest of the view was renumbered to make room.
        renumbered: bool,
    },
}

impl Placement {
    /// Returns the assigned precedence, if any was written.
    pub fn precedence(self) -> Option<i64> {
        match self {
            Placement::Unchanged => None,
            Placement::Placed { precedence, .. } => Some(precedence),
        }
    }

    pub fn renumbered(self) -> bool {
        matches!(self, Placement::Placed { renumbered: true, .. })
    }
}

/// Spacing parameters of the precedence scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReorderConfig {
    step: i64,
    min_gap: i64,
}

impl Default for ReorderConfig {
    fn default() -> Self {
        Self {
            step: PRECEDENCE_STEP,
            min_gap: MIN_GAP,
        }
    }
}

impl ReorderConfig {
    /// Creates a config. Both values are clamped to
    /// `MIN_GAP..=MAX_STEP`, and `step` is raised to at least `min_gap`, so
    /// a midpoint always exists after a renumber pass.
    pub fn new(step: i64, min_gap: i64) -> Self {
        let min_gap = min_gap.clamp(MIN_GAP, MAX_STEP);
        Self {
            step: step.clamp(min_gap, MAX_STEP),
            min_gap,
        }
    }

    pub fn step(&self) -> i64 {
        self.step
    }

    pub fn min_gap(&self) -> i64 {
        self.min_gap
    }

    /// Moves the item with `id` to `to_index` in a view sorted by
    /// [`compare`](super::compare).
    ///
    /// `to_index` is clamped to the last index. Returns `None`, touching
    /// nothing, if no item in the view has `id`. The view is not re-sorted.
    pub fn reorder<T: Ranked>(&self, view: &mut [T], id: &str, to_index: usize) -> Option<Placement> {
        let from = view.iter().position(|item| item.id() == id)?;
        let to = to_index.min(view.len() - 1);
        if from == to {
            return Some(Placement::Unchanged);
        }

        let (precedence, renumbered) = self.place(view, Some(from), to);
        view[from].set_precedence(precedence);
        Some(Placement::Placed {
            precedence,
            renumbered,
        })
    }

    /// Gives `item`, which is not part of `view`, the precedence that puts it
    /// at `to_index`. `to_index` is clamped to `view.len()`.
    pub fn insert_at<T, U>(&self, view: &mut [T], item: &mut U, to_index: usize) -> Placement
    where
        T: Ranked,
        U: Ranked + ?Sized,
    {
        let to = to_index.min(view.len());
        let (precedence, renumbered) = self.place(view, None, to);
        item.set_precedence(precedence);
        Placement::Placed {
            precedence,
            renumbered,
        }
    }

    /// Computes the precedence for the gap at `to`, renumbering `view` if
    /// the gap is exhausted. `from` is the moved item's slot, if it has one.
    fn place<T: Ranked>(&self, view: &mut [T], from: Option<usize>, to: usize) -> (i64, bool) {
        let (prev, next) = match from {
            Some(from) if from < to => (Some(to), Some(to + 1).filter(|&i| i < view.len())),
            _ => (to.checked_sub(1), Some(to).filter(|&i| i < view.len())),
        };

        let mut prev_prec = prev.map_or(0, |i| view[i].precedence());
        let mut next_prec = next.map_or_else(
            || (to as i64).saturating_add(2).saturating_mul(self.step),
            |i| view[i].precedence(),
        );

        let renumbered = next_prec.saturating_sub(prev_prec) < self.min_gap;
        if renumbered {
            self.renumber(view, from, prev);
            if let Some(i) = prev {
                prev_prec = view[i].precedence();
            }
            if let Some(i) = next {
                next_prec = view[i].precedence();
            }
        }

        (midpoint(prev_prec, next_prec), renumbered)
    }

    /// Rewrites every precedence in display order, skipping the moved item's
    /// slot and leaving an extra step after `prev`.
    fn renumber<T: Ranked>(&self, view: &mut [T], skip: Option<usize>, prev: Option<usize>) {
        let mut value = self.step;
        for (index, item) in view.iter_mut().enumerate() {
            if Some(index) != skip {
                item.set_precedence(value);
                if Some(index) == prev {
                    value = value.saturating_add(self.step);
                }
            }
            value = value.saturating_add(self.step);
        }
        debug!(len = view.len(), step = self.step, "renumbered view");
    }
}

/// Floor of the mean of `low` and `high`, for any pair of `i64`s.
fn midpoint(low: i64, high: i64) -> i64 {
    let mid = (i128::from(low) + i128::from(high)).div_euclid(2);
    // The mean of two i64s is always an i64
    i64::try_from(mid).unwrap_or(low)
}

/// [`ReorderConfig::reorder`] with the default spacing.
pub fn reorder<T: Ranked>(view: &mut [T], id: &str, to_index: usize) -> Option<Placement> {
    ReorderConfig::default().reorder(view, id, to_index)
}

/// [`ReorderConfig::insert_at`] with the default spacing.
pub fn insert_at<T, U>(view: &mut [T], item: &mut U, to_index: usize) -> Placement
where
    T: Ranked,
    U: Ranked + ?Sized,
{
    ReorderConfig::default().insert_at(view, item, to_index)
}
