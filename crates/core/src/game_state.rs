//! Game state module - manages the complete game state
//!
//! This module ties together all core components: board, pieces, bag and scoring.
//! It handles piece movement, rotation with wall kicks, locking, line clears,
//! leveling and the game lifecycle.
//!
//! Every transition is available in two forms:
//!
//! - a pure method (`move_left`, `rotate`, `hard_drop`, ...) that takes `&self`
//!   and returns the successor state, leaving the input untouched;
//!   gameplay methods return an unchanged copy while paused or after game over;
//! - [`GameState::apply_action`], the in-place dispatch used by drivers, which
//!   gates gameplay while paused or after game over.
//!
//! Rejected moves are not errors: the state simply stays as it was.

use log::{debug, info};

use crate::board::Board;
use crate::geometry::{ghost_y, is_valid_position};
use crate::pieces::{create_piece, Tetromino};
use crate::rng::PieceBag;
use crate::scoring::{calculate_drop_score, calculate_level, calculate_score};
use crate::types::{GameAction, RotateDirection, MIN_START_LEVEL};

/// Offsets tried, in order, when a rotated piece does not fit in place.
///
/// Smaller kicks come first; horizontal before vertical before the wider horizontal ones.
pub const WALL_KICKS: [(i8, i8); 5] = [(-1, 0), (1, 0), (0, -1), (-2, 0), (2, 0)];

/// Result of the most recent lock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LockOutcome {
    pub lines_cleared: u32,
    /// Points from the line clear alone (drop points excluded).
    pub line_score: u32,
    /// Level in effect when the piece locked.
    pub level_before: u32,
}

/// Complete game state
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    board: Board,
    current: Option<Tetromino>,
    next: Option<Tetromino>,
    bag: PieceBag,
    score: u32,
    level: u32,
    start_level: u32,
    lines: u32,
    game_over: bool,
    paused: bool,
    /// Monotonic id of the current piece (increments each time a piece becomes current).
    piece_id: u32,
    last_lock: Option<LockOutcome>,
}

impl GameState {
    /// Create a new game: empty board, current and next drawn from `bag`.
    pub fn new(start_level: u32, mut bag: PieceBag) -> Self {
        let start_level = start_level.max(MIN_START_LEVEL);
        let current = create_piece(None, &mut bag);
        let next = create_piece(None, &mut bag);

        Self {
            board: Board::new(),
            current: Some(current),
            next: Some(next),
            bag,
            score: 0,
            level: start_level,
            start_level,
            lines: 0,
            game_over: false,
            paused: false,
            piece_id: 1,
            last_lock: None,
        }
    }

    /// Create a new game with a freshly seeded bag.
    pub fn with_seed(start_level: u32, seed: u32) -> Self {
        Self::new(start_level, PieceBag::new(seed))
    }

    /// Replace the board (fixtures, puzzles, tests).
    #[must_use]
    pub fn with_board(mut self, board: Board) -> Self {
        self.board = board;
        self
    }

    /// Replace the current piece (fixtures, puzzles, tests).
    #[must_use]
    pub fn with_current(mut self, piece: Tetromino) -> Self {
        self.current = Some(piece);
        self
    }

    /// Drop the current piece (fixtures, tests).
    #[must_use]
    pub fn without_current(mut self) -> Self {
        self.current = None;
        self
    }

    /// Replace the next piece (fixtures, puzzles, tests).
    #[must_use]
    pub fn with_next(mut self, piece: Tetromino) -> Self {
        self.next = Some(piece);
        self
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn current(&self) -> Option<Tetromino> {
        self.current
    }

    pub fn next(&self) -> Option<Tetromino> {
        self.next
    }

    pub fn bag(&self) -> &PieceBag {
        &self.bag
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn start_level(&self) -> u32 {
        self.start_level
    }

    pub fn lines(&self) -> u32 {
        self.lines
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    pub fn paused(&self) -> bool {
        self.paused
    }

    /// Whether gameplay transitions currently have any effect.
    pub fn playable(&self) -> bool {
        !self.game_over && !self.paused
    }

    pub fn piece_id(&self) -> u32 {
        self.piece_id
    }

    pub fn last_lock(&self) -> Option<LockOutcome> {
        self.last_lock
    }

    /// Landing row of the current piece.
    pub fn ghost_y(&self) -> Option<i8> {
        self.current.map(|piece| ghost_y(&piece, &self.board))
    }

    // ============== Pure transitions ==============

    #[must_use]
    pub fn move_left(&self) -> Self {
        self.gameplay(|s| s.try_move(-1, 0))
    }

    #[must_use]
    pub fn move_right(&self) -> Self {
        self.gameplay(|s| s.try_move(1, 0))
    }

    #[must_use]
    pub fn rotate(&self, direction: RotateDirection) -> Self {
        self.gameplay(|s| s.try_rotate(direction))
    }

    #[must_use]
    pub fn soft_drop(&self) -> Self {
        self.gameplay(|s| s.drop_one())
    }

    /// Gravity step; shares the soft drop transition, scoring included.
    #[must_use]
    pub fn tick(&self) -> Self {
        self.soft_drop()
    }

    #[must_use]
    pub fn hard_drop(&self) -> Self {
        self.gameplay(|s| {
            s.hard_drop_in_place();
        })
    }

    /// Lock the current piece where it is.
    #[must_use]
    pub fn lock(&self) -> Self {
        self.gameplay(|s| {
            s.lock_piece();
        })
    }

    #[must_use]
    pub fn pause(&self) -> Self {
        self.successor(|s| s.paused = true)
    }

    #[must_use]
    pub fn resume(&self) -> Self {
        self.successor(|s| s.paused = false)
    }

    /// Fresh game at `start_level`, reseeding the bag from this game's RNG state.
    #[must_use]
    pub fn restart(&self, start_level: u32) -> Self {
        info!("restarting game at level {}", start_level);
        Self::new(start_level, PieceBag::new(self.bag.seed()))
    }

    /// Successor state for `action`, honoring the pause/game-over gate.
    #[must_use]
    pub fn apply(&self, action: GameAction) -> Self {
        let mut next = self.clone();
        next.apply_action(action);
        next
    }

    fn successor<R>(&self, step: impl FnOnce(&mut Self) -> R) -> Self {
        let mut next = self.clone();
        step(&mut next);
        next
    }

    /// Like `successor`, but a paused or finished game is returned unchanged.
    fn gameplay<R>(&self, step: impl FnOnce(&mut Self) -> R) -> Self {
        if !self.playable() {
            return self.clone();
        }
        self.successor(step)
    }

    // ============== In-place dispatch ==============

    /// Apply a game action in place.
    ///
    /// Gameplay actions are ignored while paused or after game over.
    /// Returns true if the state changed.
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        if action.is_gameplay() && !self.playable() {
            return false;
        }

        match action {
            GameAction::MoveLeft => self.try_move(-1, 0),
            GameAction::MoveRight => self.try_move(1, 0),
            GameAction::Rotate => self.try_rotate(RotateDirection::Clockwise),
            GameAction::SoftDrop | GameAction::Tick => {
                if self.current.is_none() {
                    return false;
                }
                self.drop_one();
                true
            }
            GameAction::HardDrop => self.hard_drop_in_place().is_some(),
            GameAction::Pause => !std::mem::replace(&mut self.paused, true),
            GameAction::Resume => std::mem::replace(&mut self.paused, false),
        }
    }

    /// Try to move the active piece
    pub(crate) fn try_move(&mut self, dx: i8, dy: i8) -> bool {
        let Some(active) = self.current else {
            return false;
        };

        let moved = active.shifted(dx, dy);
        if is_valid_position(&moved, &self.board) {
            self.current = Some(moved);
            return true;
        }

        false
    }

    /// Try to rotate the active piece, falling back to the wall kick list
    pub(crate) fn try_rotate(&mut self, direction: RotateDirection) -> bool {
        let Some(active) = self.current else {
            return false;
        };

        let rotated = active.rotated(direction);
        let accepted = std::iter::once((0, 0))
            .chain(WALL_KICKS)
            .map(|(dx, dy)| rotated.shifted(dx, dy))
            .find(|candidate| is_valid_position(candidate, &self.board));

        match accepted {
            Some(piece) => {
                self.current = Some(piece);
                true
            }
            None => false,
        }
    }

    /// Move down one row (scoring a soft drop point), or lock if the piece has landed.
    fn drop_one(&mut self) {
        if self.try_move(0, 1) {
            self.score = self.score.saturating_add(calculate_drop_score(1, false));
        } else {
            self.lock_piece();
        }
    }

    /// Hard drop the active piece to its landing row and lock it.
    /// Returns the drop distance.
    fn hard_drop_in_place(&mut self) -> Option<u32> {
        let active = self.current?;

        let landing_y = ghost_y(&active, &self.board);
        let distance = (landing_y - active.y).max(0) as u32;

        self.current = Some(active.at(active.x, landing_y));
        self.score = self
            .score
            .saturating_add(calculate_drop_score(distance, true));
        self.lock_piece();

        Some(distance)
    }

    /// Lock the active piece onto the board and handle line clears
    pub fn lock_piece(&mut self) -> Option<LockOutcome> {
        let piece = self.current.take()?;

        self.board.merge_cells(piece.cells(), piece.kind);

        let cleared_rows = self.board.clear_full_rows();
        let lines_cleared = cleared_rows.len() as u32;

        let level_before = self.level;
        let line_score = calculate_score(cleared_rows.len(), level_before);
        self.score = self.score.saturating_add(line_score);
        self.lines += lines_cleared;
        self.level = calculate_level(self.lines, self.start_level);

        // Promote next, draw a new next.
        self.current = self.next.take();
        self.next = Some(create_piece(None, &mut self.bag));
        if self.current.is_some() {
            self.piece_id = self.piece_id.wrapping_add(1);
        }

        // Checked after the clear, so clearing the top row in time saves the game.
        self.game_over = self.board.is_top_row_occupied();

        if lines_cleared > 0 {
            debug!(
                "{:?} locked: {} line(s) for {} points, level {} -> {}",
                piece.kind, lines_cleared, line_score, level_before, self.level
            );
        }
        if self.game_over {
            info!(
                "game over: score {}, level {}, lines {}",
                self.score, self.level, self.lines
            );
        }

        let outcome = LockOutcome {
            lines_cleared,
            line_score,
            level_before,
        };
        self.last_lock = Some(outcome);
        Some(outcome)
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::with_seed(MIN_START_LEVEL, 1)
    }
}
