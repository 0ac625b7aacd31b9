//! Card identifiers and the duplicate-free card order.
//!
//! `CardOrder` is the single source of truth for both logical and visual
//! order: the renderer lays cards out left-to-right, top-to-bottom in exactly
//! this sequence. It is never mutated in place; `moved` and `without` return
//! new values so every board transition produces a fresh state.

#[cfg(test)]
#[path = "order_test.rs"]
mod order_test;

use std::fmt;

use serde::{Deserialize, Serialize};

/// Opaque identifier of a dashboard card (e.g. `"tasks"`). Equality is by value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CardId(String);

impl CardId {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CardId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for CardId {
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}

impl From<String> for CardId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// Ordered sequence of card ids with no duplicates.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(transparent)]
pub struct CardOrder(Vec<CardId>);

impl CardOrder {
    /// Build an order from `ids`, keeping the first occurrence of any duplicate.
    #[must_use]
    pub fn new<I, T>(ids: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<CardId>,
    {
        let mut out: Vec<CardId> = Vec::new();
        for id in ids {
            let id = id.into();
            if !out.contains(&id) {
                out.push(id);
            }
        }
        Self(out)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn contains(&self, id: &CardId) -> bool {
        self.0.contains(id)
    }

    /// Position of `id`, if present.
    #[must_use]
    pub fn index_of(&self, id: &CardId) -> Option<usize> {
        self.0.iter().position(|c| c == id)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, CardId> {
        self.0.iter()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[CardId] {
        &self.0
    }

    /// Move `active` into the slot currently held by `over`.
    ///
    /// The element is removed from its old index and reinserted at the
    /// target's index; cards in between shift one slot toward the vacated
    /// position. Returns an unchanged copy when either id is absent or both
    /// are the same card.
    #[must_use]
    pub fn moved(&self, active: &CardId, over: &CardId) -> Self {
        let (Some(from), Some(to)) = (self.index_of(active), self.index_of(over)) else {
            return self.clone();
        };
        if from == to {
            return self.clone();
        }
        let mut next = self.0.clone();
        let card = next.remove(from);
        next.insert(to, card);
        Self(next)
    }

    /// A copy of the order with `id` excluded. Absent ids are a no-op.
    #[must_use]
    pub fn without(&self, id: &CardId) -> Self {
        Self(self.0.iter().filter(|c| *c != id).cloned().collect())
    }
}

impl<'de> Deserialize<'de> for CardOrder {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let ids = Vec::<CardId>::deserialize(deserializer)?;
        Ok(Self::new(ids))
    }
}

impl<'a> IntoIterator for &'a CardOrder {
    type Item = &'a CardId;
    type IntoIter = std::slice::Iter<'a, CardId>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl<T: Into<CardId>> FromIterator<T> for CardOrder {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::new(iter)
    }
}
