//! Board state machine: the card order plus the optional drag session.
//!
//! DESIGN
//! ======
//! Every operation takes `&self` and returns a new `BoardState`. Nothing is
//! shared or mutated in place, so a transition can be unit tested by
//! comparing values and the host can diff old against new to decide whether
//! to re-render.
//!
//! All preconditions degrade to no-ops. A gesture racing a deletion is an
//! expected event ordering, not a fault, so there is no error type here.

#[cfg(test)]
#[path = "board_test.rs"]
mod board_test;

use crate::input::DragSession;
use crate::order::{CardId, CardOrder};

/// Immutable snapshot of the board.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BoardState {
    order: CardOrder,
    drag: Option<DragSession>,
}

impl BoardState {
    /// Mount a board with the host-supplied initial order.
    #[must_use]
    pub fn new(order: CardOrder) -> Self {
        Self { order, drag: None }
    }

    #[must_use]
    pub fn order(&self) -> &CardOrder {
        &self.order
    }

    #[must_use]
    pub fn drag(&self) -> Option<&DragSession> {
        self.drag.as_ref()
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    /// The card being dragged, if any.
    #[must_use]
    pub fn active_id(&self) -> Option<&CardId> {
        self.drag.as_ref().map(|d| &d.active_id)
    }

    /// The card currently hovered by the drag, if any.
    #[must_use]
    pub fn over_id(&self) -> Option<&CardId> {
        self.drag.as_ref().and_then(|d| d.over_id.as_ref())
    }

    /// Start dragging `id`.
    ///
    /// Ignored when `id` is not on the board or another drag is active.
    #[must_use]
    pub fn begin_drag(&self, id: &CardId) -> Self {
        if self.drag.is_some() || !self.order.contains(id) {
            return self.clone();
        }
        Self { order: self.order.clone(), drag: Some(DragSession::new(id.clone())) }
    }

    /// Track the card currently under the pointer or keyboard focus.
    ///
    /// Only the hover target changes; the order is untouched until
    /// [`end_drag`](Self::end_drag). Ignored without an active drag or when
    /// `over` is not on the board.
    #[must_use]
    pub fn update_drag_target(&self, over: &CardId) -> Self {
        let Some(drag) = &self.drag else {
            return self.clone();
        };
        if !self.order.contains(over) || drag.over_id.as_ref() == Some(over) {
            return self.clone();
        }
        let drag = DragSession { active_id: drag.active_id.clone(), over_id: Some(over.clone()) };
        Self { order: self.order.clone(), drag: Some(drag) }
    }

    /// Commit the drag and clear the session.
    ///
    /// Indices are looked up in the current order, so cards removed during
    /// the drag never leave a stale position behind.
    #[must_use]
    pub fn end_drag(&self) -> Self {
        let Some(drag) = &self.drag else {
            return self.clone();
        };
        let order = match drag.pending_target() {
            Some(over) => self.order.moved(&drag.active_id, over),
            None => self.order.clone(),
        };
        Self { order, drag: None }
    }

    /// Abort the drag without moving anything. Idempotent.
    #[must_use]
    pub fn cancel_drag(&self) -> Self {
        Self { order: self.order.clone(), drag: None }
    }

    /// Remove `id` from the board.
    ///
    /// Removing the active card also clears the drag session. Removing the
    /// hovered card leaves the session active with no target.
    #[must_use]
    pub fn remove(&self, id: &CardId) -> Self {
        let order = self.order.without(id);
        let drag = match &self.drag {
            Some(d) if d.active_id == *id => None,
            Some(d) if d.over_id.as_ref() == Some(id) => {
                Some(DragSession { active_id: d.active_id.clone(), over_id: None })
            }
            other => other.clone(),
        };
        Self { order, drag }
    }
}
