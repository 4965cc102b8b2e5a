use std::time::Duration;

use rand::Rng as _;
use rand_pcg::Pcg32;

use crate::core::{
    board::Board,
    piece::{Piece, PieceKind},
};

use super::{
    game_field::GameField,
    game_stats::GameStats,
    piece_source::GameSeed,
    zen,
};

/// Time between gravity steps. Constant on purpose: levels bring visual
/// variety, never speed pressure.
pub const GRAVITY_INTERVAL: Duration = Duration::from_secs(1);

#[derive(Debug, Clone, PartialEq, Eq, derive_more::IsVariant)]
pub enum SessionState {
    Playing,
    Paused,
    GameOver,
}

/// A complete game: field, stats, pause/game-over state, and gravity timing.
///
/// The session is the single engine object presentation code holds a
/// reference to. It is driven from outside in two ways:
///
/// - input operations (`move_left`, `rotate`, `hard_drop`, ...), which are
///   no-ops unless the session is playing
/// - [`advance`](Self::advance), called with elapsed wall time; when the
///   accumulated time exceeds [`GRAVITY_INTERVAL`] the falling piece takes
///   one gravity step
///
/// Locking happens in exactly one place: a downward step (gravity or soft
/// drop) that the board rejects. Locking clears rows, updates stats, picks a
/// fresh zen message, and respawns; a respawn that collides ends the game.
#[derive(Debug, Clone)]
pub struct GameSession {
    field: GameField,
    stats: GameStats,
    state: SessionState,
    gravity_timer: Duration,
    message_rng: Pcg32,
    zen_message: &'static str,
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}

impl GameSession {
    /// Creates a session with a random seed.
    #[must_use]
    pub fn new() -> Self {
        Self::with_seed(rand::rng().random())
    }

    /// Like [`Self::new`], but deterministic: the same seed produces the
    /// same piece sequence and the same message choices.
    #[must_use]
    pub fn with_seed(seed: GameSeed) -> Self {
        let mut message_rng = seed.into_rng();
        let field = GameField::with_seed(message_rng.random());
        let zen_message = zen::pick_message(&mut message_rng);
        Self {
            field,
            stats: GameStats::new(),
            state: SessionState::Playing,
            gravity_timer: Duration::ZERO,
            message_rng,
            zen_message,
        }
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        self.field.board()
    }

    #[must_use]
    pub fn falling_piece(&self) -> &Piece {
        self.field.falling_piece()
    }

    #[must_use]
    pub fn next_piece(&self) -> PieceKind {
        self.field.next_piece()
    }

    /// Where the falling piece would land if hard-dropped now.
    #[must_use]
    pub fn ghost_piece(&self) -> Piece {
        self.field.drop_position()
    }

    #[must_use]
    pub fn stats(&self) -> &GameStats {
        &self.stats
    }

    #[must_use]
    pub fn state(&self) -> &SessionState {
        &self.state
    }

    #[must_use]
    pub fn zen_message(&self) -> &'static str {
        self.zen_message
    }

    /// Advances the simulation by `dt` of wall time.
    ///
    /// Gravity fires at most once per call; hosts are expected to tick much
    /// faster than [`GRAVITY_INTERVAL`]. No-op unless playing.
    pub fn advance(&mut self, dt: Duration) {
        if !self.state.is_playing() {
            return;
        }
        self.gravity_timer += dt;
        if self.gravity_timer >= GRAVITY_INTERVAL {
            self.gravity_timer = Duration::ZERO;
            self.step_down();
        }
    }

    pub fn move_left(&mut self) {
        if self.state.is_playing() {
            _ = self.field.try_move_left();
        }
    }

    pub fn move_right(&mut self) {
        if self.state.is_playing() {
            _ = self.field.try_move_right();
        }
    }

    /// One downward step. A blocked step locks the piece in place; this is
    /// the sole lock trigger for both gravity and manual down-presses.
    pub fn soft_drop(&mut self) {
        if self.state.is_playing() {
            self.step_down();
        }
    }

    pub fn rotate(&mut self) {
        if self.state.is_playing() {
            _ = self.field.try_rotate();
        }
    }

    /// Drops the falling piece to its landing row and locks it there.
    pub fn hard_drop(&mut self) {
        if !self.state.is_playing() {
            return;
        }
        while self.field.try_move_down().is_ok() {}
        self.lock_and_respawn();
    }

    /// Playing <-> Paused. Pausing suppresses gravity and input; it does not
    /// touch any game state. No effect once the game is over.
    pub fn toggle_pause(&mut self) {
        self.state = match self.state {
            SessionState::Playing => SessionState::Paused,
            SessionState::Paused => SessionState::Playing,
            SessionState::GameOver => SessionState::GameOver,
        };
    }

    /// Resets board, stats, and timers to a fresh playing session. This is
    /// the only way out of [`SessionState::GameOver`].
    pub fn restart(&mut self) {
        self.field.reset();
        self.stats = GameStats::new();
        self.state = SessionState::Playing;
        self.gravity_timer = Duration::ZERO;
        self.refresh_message();
    }

    /// Picks a fresh zen message; also used by hosts on track change.
    pub fn refresh_message(&mut self) {
        self.zen_message = zen::pick_message(&mut self.message_rng);
    }

    fn step_down(&mut self) {
        if self.field.try_move_down().is_ok() {
            return;
        }
        self.lock_and_respawn();
    }

    fn lock_and_respawn(&mut self) {
        let (cleared_lines, spawned) = self.field.lock_piece();
        if cleared_lines > 0 {
            _ = self.stats.record_clear(cleared_lines);
        }
        self.refresh_message();
        if spawned.is_err() {
            self.state = SessionState::GameOver;
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::core::board::BOARD_HEIGHT;

    use super::*;

    fn session() -> GameSession {
        GameSession::with_seed("0123456789abcdeffedcba9876543210".parse().unwrap())
    }

    fn occupied_count(board: &Board) -> usize {
        board
            .rows()
            .flat_map(|row| row.iter())
            .filter(|cell| !cell.is_empty())
            .count()
    }

    #[test]
    fn test_gravity_fires_at_the_fixed_interval() {
        let mut session = session();
        let y0 = session.falling_piece().y();

        session.advance(Duration::from_millis(500));
        assert_eq!(session.falling_piece().y(), y0);

        session.advance(Duration::from_millis(500));
        assert_eq!(session.falling_piece().y(), y0 + 1);

        // The accumulator was reset; another half interval is not enough
        session.advance(Duration::from_millis(999));
        assert_eq!(session.falling_piece().y(), y0 + 1);
        session.advance(Duration::from_millis(1));
        assert_eq!(session.falling_piece().y(), y0 + 2);
    }

    #[test]
    fn test_pause_suppresses_gravity_and_input() {
        let mut session = session();
        let before = session.falling_piece().clone();

        session.toggle_pause();
        assert!(session.state().is_paused());
        session.advance(Duration::from_secs(5));
        session.move_left();
        session.rotate();
        session.hard_drop();
        assert_eq!(*session.falling_piece(), before);

        session.toggle_pause();
        assert!(session.state().is_playing());
    }

    #[test]
    fn test_blocked_soft_drop_locks_the_piece() {
        let mut session = session();
        // Enough downward steps to reach the floor and one more to lock
        for _ in 0..=BOARD_HEIGHT {
            session.soft_drop();
        }
        assert!(occupied_count(session.board()) > 0);
    }

    #[test]
    fn test_hard_drop_locks_at_the_ghost_position() {
        let mut session = session();
        let ghost = session.ghost_piece();
        session.hard_drop();

        for (x, y) in ghost.occupied_cells() {
            let (x, y) = (usize::try_from(x).unwrap(), usize::try_from(y).unwrap());
            assert_eq!(
                session.board().cell(x, y),
                crate::core::board::Cell::Piece(ghost.kind()),
            );
        }
    }

    #[test]
    fn test_lock_refreshes_the_zen_message_pool() {
        let session = session();
        assert!(zen::ZEN_MESSAGES.contains(&session.zen_message()));

        let mut session = session;
        session.hard_drop();
        assert!(zen::ZEN_MESSAGES.contains(&session.zen_message()));
    }

    #[test]
    fn test_same_seed_same_game() {
        let mut a = session();
        let mut b = session();
        for _ in 0..10 {
            assert_eq!(a.falling_piece().kind(), b.falling_piece().kind());
            assert_eq!(a.zen_message(), b.zen_message());
            a.hard_drop();
            b.hard_drop();
        }
        assert_eq!(a.stats(), b.stats());
    }

    #[test]
    fn test_stacking_without_clears_ends_the_game() {
        let mut session = session();
        // Untouched hard drops pile up in the center columns; side columns
        // stay empty, so no row ever clears and the stack must top out
        for _ in 0..200 {
            session.hard_drop();
            if session.state().is_game_over() {
                break;
            }
        }
        assert!(session.state().is_game_over());

        // Terminal: neither input nor time moves the game
        let board = session.board().clone();
        session.hard_drop();
        session.advance(Duration::from_secs(10));
        assert_eq!(*session.board(), board);
    }

    #[test]
    fn test_restart_resets_to_a_fresh_playing_session() {
        let mut session = session();
        for _ in 0..200 {
            session.hard_drop();
            if session.state().is_game_over() {
                break;
            }
        }
        session.restart();

        assert!(session.state().is_playing());
        assert_eq!(*session.stats(), GameStats::new());
        assert_eq!(occupied_count(session.board()), 0);
        assert_eq!(session.falling_piece().y(), 0);
    }
}
