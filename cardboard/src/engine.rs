//! Event-driven card-board engine.
//!
//! `EngineCore` owns the board state, the most recent card layout, and the
//! pointer track of an in-flight drag. The host feeds it one event at a time
//! (either a normalized [`GestureEvent`] or raw pointer coordinates) and gets
//! back the [`Action`]s it should perform. Each call fully processes its event
//! before returning, so events are applied strictly in arrival order.

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

use crate::board::BoardState;
use crate::geom::{Point, Rect, Viewport};
use crate::hit::{CardRects, Layout, hit_test, nearest_center, neighbor};
use crate::input::{Direction, GestureEvent, Region};
use crate::order::{CardId, CardOrder};

/// Pointer cursor the host should show over the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cursor {
    /// Idle over a draggable card.
    Grab,
    /// A drag is in progress.
    Grabbing,
}

impl Cursor {
    /// CSS `cursor` value.
    #[must_use]
    pub fn css(self) -> &'static str {
        match self {
            Self::Grab => "grab",
            Self::Grabbing => "grabbing",
        }
    }
}

/// Actions returned from event handlers for the host to process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Board state changed; re-render from [`EngineCore::board`].
    RenderNeeded,
    SetCursor(Cursor),
}

/// Pointer positions of a drag started with the pointer.
#[derive(Debug, Clone, Copy, PartialEq)]
struct PointerTrack {
    /// Where the pointer went down.
    origin: Point,
    /// Latest pointer position.
    last: Point,
    /// Body rect of the dragged card at pointer-down, if measured.
    rect: Option<Rect>,
}

/// Core engine state.
#[derive(Debug, Clone, Default)]
pub struct EngineCore {
    board: BoardState,
    layout: Layout,
    viewport: Viewport,
    pointer: Option<PointerTrack>,
}

impl EngineCore {
    /// Mount a board with the host-supplied initial order.
    #[must_use]
    pub fn new(order: CardOrder) -> Self {
        Self { board: BoardState::new(order), ..Self::default() }
    }

    // --- Queries ---

    #[must_use]
    pub fn board(&self) -> &BoardState {
        &self.board
    }

    #[must_use]
    pub fn order(&self) -> &CardOrder {
        self.board.order()
    }

    #[must_use]
    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    /// Visual offset of the dragged card, clamped to the window edges.
    ///
    /// Only pointer drags have an offset; keyboard drags leave the card in
    /// place and show the target through hover styling instead.
    #[must_use]
    pub fn drag_offset(&self) -> Option<Point> {
        if !self.board.is_dragging() {
            return None;
        }
        let track = self.pointer?;
        let raw = track.last.sub(track.origin);
        Some(match track.rect {
            Some(rect) => self.viewport.clamp_offset(&rect, raw),
            None => raw,
        })
    }

    // --- Measurements ---

    /// Replace the whole layout with a fresh measurement.
    pub fn set_layout(&mut self, layout: Layout) {
        self.layout = layout;
    }

    /// Update the measurement of one card.
    pub fn set_card_rects(&mut self, id: CardId, rects: CardRects) {
        self.layout.set(id, rects);
    }

    /// Update the window size used to confine the dragged card.
    pub fn set_viewport(&mut self, width: f64, height: f64) {
        self.viewport = Viewport::new(width, height);
    }

    // --- Normalized events ---

    /// Apply one normalized gesture event.
    pub fn handle(&mut self, event: GestureEvent) -> Vec<Action> {
        match event {
            GestureEvent::PointerDown { id, region: Region::Delete } | GestureEvent::Delete { id } => self.remove(&id),
            GestureEvent::PointerDown { id, region: Region::Handle } | GestureEvent::KeyPickUp { id } => {
                self.begin_drag(&id)
            }
            GestureEvent::PointerMove { over } => {
                let next = self.board.update_drag_target(&over);
                self.commit(next)
            }
            GestureEvent::KeyMove(direction) => self.key_move(direction),
            GestureEvent::PointerUp | GestureEvent::KeyCommit => self.end_drag(),
            GestureEvent::PointerCancel | GestureEvent::KeyCancel => self.cancel_drag(),
        }
    }

    // --- Raw pointer adapters ---

    /// Pointer pressed at `pt`; hit-tests the layout to find the card region.
    ///
    /// Ignored while any drag is active, including one started from the
    /// keyboard.
    pub fn on_pointer_down(&mut self, pt: Point) -> Vec<Action> {
        if self.board.is_dragging() {
            return Vec::new();
        }
        let Some(hit) = hit_test(pt, self.board.order(), &self.layout) else {
            return Vec::new();
        };
        let region = hit.region;
        let rect = self.layout.get(&hit.id).map(|r| r.body);
        let actions = self.handle(GestureEvent::PointerDown { id: hit.id, region });
        if region == Region::Handle && self.board.is_dragging() {
            self.pointer = Some(PointerTrack { origin: pt, last: pt, rect });
        }
        actions
    }

    /// Pointer moved to `pt`; re-selects the nearest-center drop target.
    ///
    /// Only drags started by the pointer follow it; hover movement during a
    /// keyboard drag is ignored.
    pub fn on_pointer_move(&mut self, pt: Point) -> Vec<Action> {
        let Some(track) = self.pointer.as_mut() else {
            return Vec::new();
        };
        let moved = track.last != pt;
        track.last = pt;
        let mut actions = match nearest_center(pt, self.board.order(), &self.layout) {
            Some(over) => self.handle(GestureEvent::PointerMove { over }),
            None => Vec::new(),
        };
        if moved && !actions.contains(&Action::RenderNeeded) {
            actions.push(Action::RenderNeeded);
        }
        actions
    }

    /// Pointer released; commits a drag the pointer started.
    pub fn on_pointer_up(&mut self) -> Vec<Action> {
        if self.pointer.is_none() {
            return Vec::new();
        }
        self.handle(GestureEvent::PointerUp)
    }

    /// Pointer lost; aborts a drag the pointer started.
    pub fn on_pointer_cancel(&mut self) -> Vec<Action> {
        if self.pointer.is_none() {
            return Vec::new();
        }
        self.handle(GestureEvent::PointerCancel)
    }

    // --- Transitions ---

    fn begin_drag(&mut self, id: &CardId) -> Vec<Action> {
        let next = self.board.begin_drag(id);
        let mut actions = self.commit(next);
        if !actions.is_empty() {
            log::debug!("drag started: {id}");
            actions.push(Action::SetCursor(Cursor::Grabbing));
        }
        actions
    }

    fn key_move(&mut self, direction: Direction) -> Vec<Action> {
        let Some(from) = self.board.over_id().or(self.board.active_id()) else {
            return Vec::new();
        };
        match neighbor(from, direction, self.board.order(), &self.layout) {
            Some(over) => {
                let next = self.board.update_drag_target(&over);
                self.commit(next)
            }
            None => Vec::new(),
        }
    }

    fn end_drag(&mut self) -> Vec<Action> {
        if !self.board.is_dragging() {
            return Vec::new();
        }
        let next = self.board.end_drag();
        if next.order() != self.board.order() {
            if let (Some(active), Some(over)) = (self.board.active_id(), self.board.over_id()) {
                log::debug!("card {active} moved into slot of {over}");
            }
        }
        self.finish(next)
    }

    fn cancel_drag(&mut self) -> Vec<Action> {
        if !self.board.is_dragging() {
            return Vec::new();
        }
        log::debug!("drag cancelled");
        let next = self.board.cancel_drag();
        self.finish(next)
    }

    fn remove(&mut self, id: &CardId) -> Vec<Action> {
        let was_dragging = self.board.is_dragging();
        let next = self.board.remove(id);
        if next == self.board {
            return Vec::new();
        }
        log::debug!("card removed: {id}");
        self.layout.remove(id);
        if was_dragging && !next.is_dragging() {
            return self.finish(next);
        }
        self.commit(next)
    }

    /// Install a post-drag state and reset the pointer track.
    fn finish(&mut self, next: BoardState) -> Vec<Action> {
        self.pointer = None;
        self.board = next;
        vec![Action::RenderNeeded, Action::SetCursor(Cursor::Grab)]
    }

    /// Install `next`, reporting a render only when something changed.
    fn commit(&mut self, next: BoardState) -> Vec<Action> {
        if next == self.board {
            return Vec::new();
        }
        self.board = next;
        vec![Action::RenderNeeded]
    }
}
