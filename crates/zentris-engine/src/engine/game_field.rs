use crate::{
    PieceCollisionError, SpawnCollisionError,
    core::{
        board::Board,
        piece::{Piece, PieceKind},
    },
};

use super::piece_source::{GameSeed, PieceSource};

/// Board, falling piece, and the next-piece preview.
///
/// Movement operations build a candidate piece, ask the board whether it
/// collides, and apply it only if it does not. A rejected downward move is
/// never applied here; deciding that it means "lock now" is the caller's
/// job.
#[derive(Debug, Clone)]
pub struct GameField {
    board: Board,
    falling_piece: Piece,
    next_piece: PieceKind,
    piece_source: PieceSource,
}

impl Default for GameField {
    fn default() -> Self {
        Self::new()
    }
}

impl GameField {
    #[must_use]
    pub fn new() -> Self {
        Self::with_source(PieceSource::new())
    }

    #[must_use]
    pub fn with_seed(seed: GameSeed) -> Self {
        Self::with_source(PieceSource::with_seed(seed))
    }

    fn with_source(mut piece_source: PieceSource) -> Self {
        let falling_piece = Piece::new(piece_source.pop_next());
        let next_piece = piece_source.pop_next();
        Self {
            board: Board::EMPTY,
            falling_piece,
            next_piece,
            piece_source,
        }
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn falling_piece(&self) -> &Piece {
        &self.falling_piece
    }

    #[must_use]
    pub fn next_piece(&self) -> PieceKind {
        self.next_piece
    }

    pub fn try_move_left(&mut self) -> Result<(), PieceCollisionError> {
        self.try_set(self.falling_piece.translated(-1, 0))
    }

    pub fn try_move_right(&mut self) -> Result<(), PieceCollisionError> {
        self.try_set(self.falling_piece.translated(1, 0))
    }

    pub fn try_move_down(&mut self) -> Result<(), PieceCollisionError> {
        self.try_set(self.falling_piece.translated(0, 1))
    }

    /// One clockwise rotation, rejected wholesale on collision. No wall
    /// kicks are attempted.
    pub fn try_rotate(&mut self) -> Result<(), PieceCollisionError> {
        self.try_set(self.falling_piece.rotated())
    }

    fn try_set(&mut self, piece: Piece) -> Result<(), PieceCollisionError> {
        if self.board.is_colliding(&piece) {
            return Err(PieceCollisionError);
        }
        self.falling_piece = piece;
        Ok(())
    }

    /// Where the falling piece would land if dropped now.
    #[must_use]
    pub fn drop_position(&self) -> Piece {
        let mut dropped = self.falling_piece.clone();
        loop {
            let next = dropped.translated(0, 1);
            if self.board.is_colliding(&next) {
                break;
            }
            dropped = next;
        }
        dropped
    }

    /// Locks the falling piece into the board, clears completed rows, and
    /// spawns the previewed piece.
    ///
    /// Returns the number of cleared rows, and an error when the fresh piece
    /// already collides with the stack (the game-over signal).
    pub fn lock_piece(&mut self) -> (usize, Result<(), SpawnCollisionError>) {
        self.board.fill_piece(&self.falling_piece);
        let cleared_lines = self.board.clear_lines();
        (cleared_lines, self.spawn_next())
    }

    fn spawn_next(&mut self) -> Result<(), SpawnCollisionError> {
        self.falling_piece = Piece::new(self.next_piece);
        self.next_piece = self.piece_source.pop_next();
        if self.board.is_colliding(&self.falling_piece) {
            return Err(SpawnCollisionError);
        }
        Ok(())
    }

    /// Empties the board and spawns a fresh pair of pieces. The piece source
    /// keeps its stream; a reset game is a new game, not a replay.
    pub fn reset(&mut self) {
        self.board = Board::EMPTY;
        self.falling_piece = Piece::new(self.piece_source.pop_next());
        self.next_piece = self.piece_source.pop_next();
    }
}
