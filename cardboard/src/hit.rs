//! Card layout, region hit-testing, and drop-target selection.
//!
//! The host measures each rendered card and its delete button and hands the
//! rectangles over as a [`Layout`]. Collision uses the nearest-center
//! heuristic: the drop target is the card whose bounding-box center is
//! closest to the pointer. Equidistant cards resolve to the one that comes
//! first in render order.

#[cfg(test)]
#[path = "hit_test.rs"]
mod hit_test;

use std::collections::HashMap;

use crate::consts::DIRECTION_EPSILON_PX;
use crate::geom::{Point, Rect};
use crate::input::{Direction, Region};
use crate::order::{CardId, CardOrder};

/// Measured rectangles for one card.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CardRects {
    /// Outer bounding box of the card.
    pub body: Rect,
    /// Bounding box of the delete button, when rendered.
    pub delete: Option<Rect>,
}

/// Rectangles of every measured card, keyed by id.
#[derive(Debug, Clone, Default)]
pub struct Layout {
    cards: HashMap<CardId, CardRects>,
}

impl Layout {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record or replace the rectangles of `id`.
    pub fn set(&mut self, id: CardId, rects: CardRects) {
        self.cards.insert(id, rects);
    }

    /// Forget the rectangles of `id`.
    pub fn remove(&mut self, id: &CardId) {
        self.cards.remove(id);
    }

    #[must_use]
    pub fn get(&self, id: &CardId) -> Option<&CardRects> {
        self.cards.get(id)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

/// Result of a hit test.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hit {
    pub id: CardId,
    pub region: Region,
}

/// Find the card region under `pt`.
///
/// The delete button is checked before the body of the same card. When
/// cards overlap (a dragged card drawn on top of its neighbours), the card
/// later in render order wins.
#[must_use]
pub fn hit_test(pt: Point, order: &CardOrder, layout: &Layout) -> Option<Hit> {
    order.iter().rev().find_map(|id| {
        let rects = layout.get(id)?;
        if rects.delete.is_some_and(|r| r.contains(pt)) {
            return Some(Hit { id: id.clone(), region: Region::Delete });
        }
        rects.body.contains(pt).then(|| Hit { id: id.clone(), region: Region::Handle })
    })
}

/// Nearest-center collision: the measured card whose center is closest to `pt`.
#[must_use]
pub fn nearest_center(pt: Point, order: &CardOrder, layout: &Layout) -> Option<CardId> {
    let mut best: Option<(&CardId, f64)> = None;
    for id in order {
        let Some(rects) = layout.get(id) else {
            continue;
        };
        let dist = rects.body.center().distance_sq(pt);
        // Strict comparison keeps the earlier card on ties.
        if best.is_none_or(|(_, d)| dist < d) {
            best = Some((id, dist));
        }
    }
    best.map(|(id, _)| id.clone())
}

/// The card a keyboard arrow press moves the drop target to.
///
/// Picks the nearest measured card whose center lies strictly in `direction`
/// from the center of `from`. Without a measurement for `from` this falls
/// back to render order: up/left is the previous card, down/right the next,
/// clamped at both ends.
#[must_use]
pub fn neighbor(from: &CardId, direction: Direction, order: &CardOrder, layout: &Layout) -> Option<CardId> {
    let Some(origin) = layout.get(from).map(|r| r.body.center()) else {
        return linear_neighbor(from, direction, order);
    };

    let mut best: Option<(&CardId, f64)> = None;
    for id in order {
        if id == from {
            continue;
        }
        let Some(rects) = layout.get(id) else {
            continue;
        };
        let center = rects.body.center();
        if !lies_toward(origin, center, direction) {
            continue;
        }
        let dist = center.distance_sq(origin);
        if best.is_none_or(|(_, d)| dist < d) {
            best = Some((id, dist));
        }
    }
    best.map(|(id, _)| id.clone())
}

fn lies_toward(origin: Point, candidate: Point, direction: Direction) -> bool {
    let delta = candidate.sub(origin);
    match direction {
        Direction::Up => delta.y < -DIRECTION_EPSILON_PX,
        Direction::Down => delta.y > DIRECTION_EPSILON_PX,
        Direction::Left => delta.x < -DIRECTION_EPSILON_PX,
        Direction::Right => delta.x > DIRECTION_EPSILON_PX,
    }
}

fn linear_neighbor(from: &CardId, direction: Direction, order: &CardOrder) -> Option<CardId> {
    let index = order.index_of(from)?;
    let target = if direction.is_backward() {
        index.saturating_sub(1)
    } else {
        (index + 1).min(order.len().saturating_sub(1))
    };
    order.as_slice().get(target).cloned()
}
