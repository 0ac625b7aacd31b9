//! Rendering contract between the engine and the host UI.
//!
//! Visual order is the card order; there is no second sequence. For each id
//! the host gets a [`CardView`] describing drag treatment, and content comes
//! from a [`CardContentResolver`] queried once per id regardless of drag
//! state.

#[cfg(test)]
#[path = "view_test.rs"]
mod view_test;

use crate::board::BoardState;
use crate::consts::{ACTIVE_CARD_OPACITY, RESTING_CARD_OPACITY};
use crate::engine::EngineCore;
use crate::geom::Point;
use crate::order::CardId;

/// Per-card visual treatment.
#[derive(Debug, Clone, PartialEq)]
pub struct CardView {
    pub id: CardId,
    /// Position in the order (and therefore in the grid).
    pub index: usize,
    /// This card is being dragged.
    pub active: bool,
    /// This card is the current drop target.
    pub over: bool,
    pub opacity: f64,
    /// Translation applied to the dragged card, if any.
    pub offset: Option<Point>,
}

impl CardView {
    /// CSS `transform` for this card, or `None` when it sits in its slot.
    #[must_use]
    pub fn transform_css(&self) -> Option<String> {
        self.offset.map(|o| format!("translate3d({}px, {}px, 0)", o.x, o.y))
    }
}

/// Maps a card id to renderable content.
///
/// Must be a pure function of the id: the board calls it once per id in the
/// order and never feeds board state into it.
pub trait CardContentResolver<C> {
    fn resolve(&self, id: &CardId) -> Option<C>;
}

impl<F, C> CardContentResolver<C> for F
where
    F: Fn(&CardId) -> Option<C>,
{
    fn resolve(&self, id: &CardId) -> Option<C> {
        self(id)
    }
}

/// A card ready to draw: treatment plus resolved content.
///
/// Unresolvable ids keep their slot with `content: None`.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedCard<C> {
    pub view: CardView,
    pub content: Option<C>,
}

/// Describe every card of `board` in render order.
#[must_use]
pub fn card_views(board: &BoardState, offset: Option<Point>) -> Vec<CardView> {
    let active = board.active_id();
    let over = board.over_id().filter(|o| Some(*o) != active);
    board
        .order()
        .iter()
        .enumerate()
        .map(|(index, id)| {
            let is_active = active == Some(id);
            CardView {
                id: id.clone(),
                index,
                active: is_active,
                over: over == Some(id),
                opacity: if is_active { ACTIVE_CARD_OPACITY } else { RESTING_CARD_OPACITY },
                offset: if is_active { offset } else { None },
            }
        })
        .collect()
}

/// Pair each card view with content from `resolver`.
pub fn render_cards<C, R>(board: &BoardState, offset: Option<Point>, resolver: &R) -> Vec<RenderedCard<C>>
where
    R: CardContentResolver<C> + ?Sized,
{
    card_views(board, offset)
        .into_iter()
        .map(|view| {
            let content = resolver.resolve(&view.id);
            RenderedCard { view, content }
        })
        .collect()
}

/// Render every card of the engine, including the dragged card's offset.
pub fn engine_cards<C, R>(engine: &EngineCore, resolver: &R) -> Vec<RenderedCard<C>>
where
    R: CardContentResolver<C> + ?Sized,
{
    render_cards(engine.board(), engine.drag_offset(), resolver)
}
