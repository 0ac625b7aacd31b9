//! Reorderable card-board engine for the student portal dashboard.
//!
//! This crate owns the ordered list of visible dashboard cards and the drag
//! session that reorders them. It has no browser dependencies: the host UI
//! layer measures card rectangles, translates DOM
//! events into [`input::GestureEvent`]s, and re-renders whenever the engine
//! returns [`engine::Action::RenderNeeded`].
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | Event-driven [`engine::EngineCore`] wrapping the board state machine |
//! | [`board`] | Immutable-per-transition board state: order plus drag session |
//! | [`order`] | Card identifiers and the duplicate-free card order |
//! | [`input`] | Normalized gesture events, input regions, and the drag session |
//! | [`hit`] | Card layout, region hit-testing, nearest-center collision |
//! | [`geom`] | Points, rectangles, and the window viewport |
//! | [`view`] | Per-card render descriptors and the content resolver seam |
//! | [`consts`] | Shared numeric constants |

pub mod board;
pub mod consts;
pub mod engine;
pub mod geom;
pub mod hit;
pub mod input;
pub mod order;
pub mod view;
