//! Input model: card regions, keyboard directions, the normalized gesture
//! stream, and the drag session.
//!
//! The host translates raw pointer and keyboard events into `GestureEvent`s.
//! Each card exposes two disjoint input regions: the delete affordance and the
//! drag surface. Which region received the pointer is part of the event, so
//! a delete click can never also start a drag regardless of how the host's
//! event propagation works.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

use crate::order::CardId;

/// Which part of a card received a pointer-down.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Region {
    /// The card body; pressing here starts a drag.
    #[default]
    Handle,
    /// The delete button; pressing here removes the card.
    Delete,
}

/// Arrow-key direction for keyboard dragging.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Parse a DOM `KeyboardEvent.key` arrow name.
    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "ArrowUp" => Some(Self::Up),
            "ArrowDown" => Some(Self::Down),
            "ArrowLeft" => Some(Self::Left),
            "ArrowRight" => Some(Self::Right),
            _ => None,
        }
    }

    /// Whether moving this way walks backwards through render order.
    #[must_use]
    pub fn is_backward(self) -> bool {
        matches!(self, Self::Up | Self::Left)
    }
}

/// One normalized input event, processed to completion before the next.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GestureEvent {
    /// Pointer pressed on a card region.
    PointerDown { id: CardId, region: Region },
    /// Pointer now hovers `over` (already resolved by collision detection).
    PointerMove { over: CardId },
    /// Pointer released; commits the drag.
    PointerUp,
    /// Pointer lost (capture released, window blurred); aborts the drag.
    PointerCancel,
    /// Keyboard activation on a focused card; picks it up.
    KeyPickUp { id: CardId },
    /// Arrow key while a keyboard drag is active.
    KeyMove(Direction),
    /// Enter/Space while dragging; commits the drag.
    KeyCommit,
    /// Escape while dragging; aborts the drag.
    KeyCancel,
    /// Keyboard-reachable delete affordance.
    Delete { id: CardId },
}

/// Ephemeral state between a drag start and its end or cancellation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DragSession {
    /// The card being dragged.
    pub active_id: CardId,
    /// The card currently under the pointer or keyboard focus.
    pub over_id: Option<CardId>,
}

impl DragSession {
    /// Start a session with the active card hovering over itself.
    #[must_use]
    pub fn new(active_id: CardId) -> Self {
        Self { over_id: Some(active_id.clone()), active_id }
    }

    /// The drop target, if it differs from the active card.
    #[must_use]
    pub fn pending_target(&self) -> Option<&CardId> {
        self.over_id.as_ref().filter(|over| **over != self.active_id)
    }
}
