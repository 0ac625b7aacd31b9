//! Shared numeric constants for the card-board crate.

// ── Rendering ───────────────────────────────────────────────────

/// Opacity applied to the card being dragged.
pub const ACTIVE_CARD_OPACITY: f64 = 0.5;

/// Opacity of every card that is not being dragged.
pub const RESTING_CARD_OPACITY: f64 = 1.0;

// ── Hit-testing ─────────────────────────────────────────────────

/// Minimum center offset, in CSS pixels, for a card to count as lying in a
/// keyboard direction from another card.
pub const DIRECTION_EPSILON_PX: f64 = 0.5;
