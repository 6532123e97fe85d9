use alloc::collections::BTreeMap;
use rand::Rng;

use crate::*;

/// Kind of symbol pair dealt onto one slot pair.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PairKind {
    /// Two copies of the same element.
    Element(Element),
    /// Salt plus either another salt or an element.
    Salt,
    /// Vitae plus Mors.
    LifeDeath,
    /// Quicksilver plus the next unassigned metal.
    Metal,
}

/// Remaining draws per pair kind, used as weights for the next draw.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Budget {
    remaining: BTreeMap<PairKind, u32>,
}

impl Budget {
    /// The standard deal: four pairs of each element, two salt pairs, four
    /// life/death pairs, and a metal weight of two.
    ///
    /// The metal weight is not a count. It stays constant while metals remain
    /// so metals tend to land on the later, more central slot pairs.
    pub fn standard() -> Self {
        let mut budget = Self::default();
        for element in Element::ALL {
            budget.set(PairKind::Element(element), 4);
        }
        budget.set(PairKind::Salt, SALT_PAIRS as u32);
        budget.set(PairKind::LifeDeath, 4);
        budget.set(PairKind::Metal, 2);
        budget
    }

    pub fn get(&self, kind: PairKind) -> u32 {
        self.remaining.get(&kind).copied().unwrap_or(0)
    }

    pub fn set(&mut self, kind: PairKind, count: u32) {
        self.remaining.insert(kind, count);
    }

    pub fn add(&mut self, kind: PairKind, count: u32) {
        *self.remaining.entry(kind).or_insert(0) += count;
    }

    /// Uses up one draw of `kind`, saturating at zero.
    pub fn take(&mut self, kind: PairKind) {
        if let Some(count) = self.remaining.get_mut(&kind) {
            *count = count.saturating_sub(1);
        }
    }

    pub fn total(&self) -> u32 {
        self.remaining.values().sum()
    }

    pub fn draw<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<PairKind> {
        pick_weighted(self, rng)
    }
}

/// Draws a pair kind with probability proportional to its remaining count.
pub fn pick_weighted<R: Rng + ?Sized>(budget: &Budget, rng: &mut R) -> Result<PairKind> {
    let total = budget.total();
    if total == 0 {
        return Err(GameError::EmptyBudget);
    }

    let mut x = rng.random_range(0..total);
    for (&kind, &count) in &budget.remaining {
        if x < count {
            return Ok(kind);
        }
        x -= count;
    }

    Err(GameError::EmptyBudget)
}
