//! Game state module - the board, the falling piece and the score in one place
//!
//! All gameplay state lives in a single [`GameState`] value owned by the caller,
//! so several games can run side by side and tests stay deterministic.
//! Every position change of the active piece goes through the placement
//! validator first; rejected moves are dropped, never queued.

use crate::board::Board;
use crate::placement::fits;
use crate::rng::{PieceSource, SimpleRng};
use crate::rotation::is_filled;
use crate::types::*;

/// Active falling piece
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActivePiece {
    pub kind: PieceKind,
    pub rotation: Rotation,
    /// Column of the bounding box's left edge
    pub x: i8,
    /// Row of the bounding box's top edge
    pub y: i8,
}

impl ActivePiece {
    /// Spawn column: the box is centred horizontally
    pub const SPAWN_X: i8 = (BOARD_WIDTH / 2) as i8 - (PIECE_BOX / 2) as i8;

    /// Create a new piece at the spawn position, unrotated
    pub fn spawn(kind: PieceKind) -> Self {
        Self {
            kind,
            rotation: Rotation::North,
            x: Self::SPAWN_X,
            y: 0,
        }
    }

    /// Check if the piece fits on the board where it is
    pub fn is_valid(&self, board: &Board) -> bool {
        fits(board, self.kind, self.rotation, self.x, self.y)
    }

    /// Whether board cell (x, y) is covered by one of this piece's occupied cells
    pub fn covers(&self, x: i8, y: i8) -> bool {
        let lx = x - self.x;
        let ly = y - self.y;
        let side = PIECE_BOX as i8;
        (0..side).contains(&lx)
            && (0..side).contains(&ly)
            && is_filled(self.kind, self.rotation, lx as u8, ly as u8)
    }

    fn shifted(&self, dx: i8, dy: i8) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            ..*self
        }
    }
}

/// Where the game loop currently is
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// No piece in play yet
    Spawning,
    Falling,
    /// Terminal: a fresh piece could not be placed
    GameOver,
}

/// Result of one gravity step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GravityOutcome {
    /// The piece moved down one row
    Moved,
    /// The piece could not move down and was written into the board
    Locked { lines_cleared: u32 },
    /// Nothing to do (not started or already game over)
    Idle,
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState<S = SimpleRng> {
    board: Board,
    active: Option<ActivePiece>,
    source: S,
    score: u32,
    lines: u32,
    pieces: u32,
    line_clear_score: u32,
    started: bool,
    game_over: bool,
}

impl GameState<SimpleRng> {
    /// Create a new game with random pieces drawn from the given seed
    pub fn new(seed: u32) -> Self {
        Self::with_source(SimpleRng::new(seed))
    }
}

impl<S: PieceSource> GameState<S> {
    /// Create a new game drawing pieces from `source`
    pub fn with_source(source: S) -> Self {
        Self {
            board: Board::new(),
            active: None,
            source,
            score: 0,
            lines: 0,
            pieces: 0,
            line_clear_score: LINE_CLEAR_SCORE,
            started: false,
            game_over: false,
        }
    }

    /// Start from a pre-filled board
    pub fn with_board(mut self, board: Board) -> Self {
        self.board = board;
        self
    }

    /// Points per cleared row (defaults to [`LINE_CLEAR_SCORE`])
    pub fn with_line_clear_score(mut self, points: u32) -> Self {
        self.line_clear_score = points;
        self
    }

    /// Start the game and spawn the first piece
    pub fn start(&mut self) {
        if self.started {
            return;
        }
        self.started = true;
        self.spawn_piece();
    }

    pub fn started(&self) -> bool {
        self.started
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    pub fn phase(&self) -> Phase {
        if self.game_over {
            Phase::GameOver
        } else if self.active.is_some() {
            Phase::Falling
        } else {
            Phase::Spawning
        }
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    /// Total rows cleared this game
    pub fn lines(&self) -> u32 {
        self.lines
    }

    /// Number of pieces spawned this game, including a rejected final one
    pub fn pieces(&self) -> u32 {
        self.pieces
    }

    pub fn active(&self) -> Option<ActivePiece> {
        self.active
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Spawn a new piece at the top centre.
    ///
    /// If the spawn placement is rejected the game is over; the board is left
    /// untouched and the rejected piece stays visible for the final frame.
    pub fn spawn_piece(&mut self) -> bool {
        let piece = ActivePiece::spawn(self.source.next_kind());
        self.active = Some(piece);
        self.pieces = self.pieces.wrapping_add(1);

        if !piece.is_valid(&self.board) {
            self.game_over = true;
            return false;
        }

        true
    }

    /// Try to move the active piece by (dx, dy)
    pub fn try_move(&mut self, dx: i8, dy: i8) -> bool {
        if self.game_over {
            return false;
        }
        let Some(active) = self.active else {
            return false;
        };

        let moved = active.shifted(dx, dy);
        if !moved.is_valid(&self.board) {
            return false;
        }

        self.active = Some(moved);
        true
    }

    /// Try to rotate the active piece a quarter turn clockwise, in place.
    ///
    /// No wall kicks: if the rotated piece collides at the same (x, y) the
    /// rotation is rejected.
    pub fn try_rotate(&mut self) -> bool {
        if self.game_over {
            return false;
        }
        let Some(active) = self.active else {
            return false;
        };

        let rotated = ActivePiece {
            rotation: active.rotation.rotate_cw(),
            ..active
        };
        if !rotated.is_valid(&self.board) {
            return false;
        }

        self.active = Some(rotated);
        true
    }

    /// Apply a player action; returns whether the piece changed
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::MoveLeft => self.try_move(-1, 0),
            GameAction::MoveRight => self.try_move(1, 0),
            GameAction::SoftDrop => self.try_move(0, 1),
            GameAction::Rotate => self.try_rotate(),
        }
    }

    /// Perform one gravity step: move down, or lock and spawn the next piece
    pub fn gravity_step(&mut self) -> GravityOutcome {
        if self.game_over || self.active.is_none() {
            return GravityOutcome::Idle;
        }

        if self.try_move(0, 1) {
            return GravityOutcome::Moved;
        }

        let lines_cleared = self.lock_piece();
        GravityOutcome::Locked { lines_cleared }
    }

    /// Write the active piece into the board, clear full rows, score them and
    /// spawn the next piece. Returns the number of rows cleared.
    pub fn lock_piece(&mut self) -> u32 {
        let Some(active) = self.active.take() else {
            return 0;
        };

        self.board
            .lock_piece(active.kind, active.rotation, active.x, active.y);

        let cleared = self.board.clear_full_rows();
        if cleared > 0 {
            self.lines = self.lines.saturating_add(cleared);
            self.score = self
                .score
                .saturating_add(self.line_clear_score.saturating_mul(cleared));
        }

        self.spawn_piece();
        cleared
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::FixedPiece;

    fn fixed(kind: PieceKind) -> GameState<FixedPiece> {
        let mut state = GameState::with_source(FixedPiece(kind));
        state.start();
        state
    }

    #[test]
    fn test_new_game_state() {
        let state = GameState::new(12345);
        assert!(!state.started());
        assert!(!state.game_over());
        assert_eq!(state.phase(), Phase::Spawning);
        assert_eq!(state.score(), 0);
        assert!(state.active().is_none());
    }

    #[test]
    fn test_spawn_position() {
        let state = fixed(PieceKind::T);
        let active = state.active().unwrap();
        assert_eq!(active.x, 3);
        assert_eq!(active.y, 0);
        assert_eq!(active.rotation, Rotation::North);
        assert_eq!(state.phase(), Phase::Falling);
        assert_eq!(state.pieces(), 1);
    }

    #[test]
    fn test_rotation_rejected_in_place() {
        let mut state = fixed(PieceKind::I);
        // Flat I resting on the floor; the vertical I would reach below row 19.
        state.active = Some(ActivePiece {
            kind: PieceKind::I,
            rotation: Rotation::North,
            x: 0,
            y: 18,
        });

        assert!(!state.try_rotate());
        assert_eq!(state.active().unwrap().rotation, Rotation::North);
        assert_eq!(state.active().unwrap().x, 0);
        assert_eq!(state.active().unwrap().y, 18);
    }

    #[test]
    fn test_rotation_cycles_back() {
        let mut state = fixed(PieceKind::T);
        for _ in 0..4 {
            assert!(state.try_rotate());
        }
        assert_eq!(state.active().unwrap().rotation, Rotation::North);
    }

    #[test]
    fn test_blocked_spawn_ends_game_without_touching_board() {
        let mut board = Board::new();
        board.set(4, 1, Some(PieceKind::Z));
        let before = board.clone();

        let mut state = GameState::with_source(FixedPiece(PieceKind::O)).with_board(board);
        state.start();

        assert!(state.game_over());
        assert_eq!(state.phase(), Phase::GameOver);
        assert_eq!(state.board(), &before);
        assert_eq!(state.gravity_step(), GravityOutcome::Idle);
        assert!(!state.apply_action(GameAction::MoveLeft));
    }

    #[test]
    fn test_gravity_moves_then_locks() {
        let mut state = fixed(PieceKind::O);
        // O occupies box rows 1-2, so it rests with its box at y = 17.
        for _ in 0..17 {
            assert_eq!(state.gravity_step(), GravityOutcome::Moved);
        }
        assert_eq!(
            state.gravity_step(),
            GravityOutcome::Locked { lines_cleared: 0 }
        );
        assert!(state.board().is_occupied(4, 19));
        assert!(state.board().is_occupied(5, 18));
        assert_eq!(state.active().unwrap().y, 0);
        assert_eq!(state.score(), 0);
    }

    #[test]
    fn test_double_clear_scores_200() {
        let mut board = Board::new();
        board.fill_row_except(18, &[4, 5], PieceKind::L);
        board.fill_row_except(19, &[4, 5], PieceKind::L);

        let mut state = GameState::with_source(FixedPiece(PieceKind::O)).with_board(board);
        state.start();
        while state.gravity_step() == GravityOutcome::Moved {}

        assert_eq!(state.score(), 200);
        assert_eq!(state.lines(), 2);
        assert!(state.board().cells().iter().all(|c| c.is_none()));
    }

    #[test]
    fn test_custom_line_score() {
        let mut board = Board::new();
        board.fill_row_except(19, &[4, 5], PieceKind::J);

        let mut state = GameState::with_source(FixedPiece(PieceKind::O))
            .with_board(board)
            .with_line_clear_score(40);
        state.start();
        while state.gravity_step() == GravityOutcome::Moved {}

        assert_eq!(state.score(), 40);
    }

    #[test]
    fn test_covers_matches_occupied_cells() {
        let piece = ActivePiece {
            kind: PieceKind::T,
            rotation: Rotation::South,
            x: 2,
            y: 5,
        };
        assert!(piece.covers(3, 6));
        assert!(piece.covers(4, 6));
        assert!(piece.covers(5, 6));
        assert!(piece.covers(4, 7));
        assert!(!piece.covers(3, 7));
        assert!(!piece.covers(1, 6));
        assert!(!piece.covers(6, 6));
    }
}
