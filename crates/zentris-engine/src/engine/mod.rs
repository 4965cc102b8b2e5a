//! Game engine logic and state management.
//!
//! - [`GameField`] - board, falling piece, and next-piece preview
//! - [`GameSession`] - full game state: field, stats, pause/game-over, gravity
//! - [`GameStats`] - score, cleared-line count, and the derived level
//! - [`PieceSource`] - seedable uniform piece generation
//! - [`GameSeed`] - seed for deterministic sessions
//!
//! A session advances in two ways: input operations (move, rotate, drops) and
//! [`GameSession::advance`], which a host calls with elapsed wall time. The
//! engine never renders and never blocks, so it runs headless in tests.

pub use self::{game_field::*, game_session::*, game_stats::*, piece_source::*};

mod game_field;
mod game_session;
mod game_stats;
mod piece_source;
pub mod zen;
