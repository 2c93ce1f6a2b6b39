//! Game state machine.
//!
//! `GameState` is an immutable snapshot of a whole game: board, falling
//! piece, lookahead queue, hold slot, score counters, status, and the piece
//! generator. Every transition takes `&self` and returns the next snapshot;
//! rejected transitions return the state unchanged. Nothing here performs
//! I/O, so a game driven by a recorded action sequence replays exactly.

use arrayvec::ArrayVec;

use crate::core::board::Board;
use crate::core::collision::{drop_distance, ghost_piece, has_collision};
use crate::core::pieces::Piece;
use crate::core::rng::PieceGen;
use crate::core::scoring::{
    add_hard_drop_score, add_placing_score, calculate_level, calculate_score,
};
use crate::types::{GameAction, PieceKind, Status, NEXT_QUEUE_LEN};

#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    board: Board,
    current: Option<Piece>,
    next_queue: ArrayVec<PieceKind, NEXT_QUEUE_LEN>,
    held: Option<PieceKind>,
    can_hold: bool,
    score: u32,
    level: u32,
    lines_cleared: u32,
    status: Status,
    pieces: PieceGen,
}

impl GameState {
    /// Create a fresh game in `Menu` status.
    ///
    /// The first piece and the full lookahead queue are drawn immediately so
    /// the menu screen can already show the preview.
    pub fn new(board_width: u8, board_height: u8, seed: u32) -> Self {
        let mut pieces = PieceGen::new(seed);
        let current = Piece::spawn(pieces.draw(), board_width);
        let mut next_queue = ArrayVec::new();
        for _ in 0..NEXT_QUEUE_LEN {
            next_queue.push(pieces.draw());
        }

        Self {
            board: Board::new(board_width, board_height),
            current: Some(current),
            next_queue,
            held: None,
            can_hold: true,
            score: 0,
            level: 0,
            lines_cleared: 0,
            status: Status::Menu,
            pieces,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn current(&self) -> Option<Piece> {
        self.current
    }

    pub fn next_queue(&self) -> &[PieceKind] {
        &self.next_queue
    }

    pub fn held(&self) -> Option<PieceKind> {
        self.held
    }

    pub fn can_hold(&self) -> bool {
        self.can_hold
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn lines_cleared(&self) -> u32 {
        self.lines_cleared
    }

    pub fn status(&self) -> Status {
        self.status
    }

    /// Hard-drop landing position of the current piece, for preview.
    pub fn ghost(&self) -> Option<Piece> {
        self.current.map(|piece| ghost_piece(&self.board, &piece))
    }

    /// Replace the board (puzzle setups and tests). Dimensions stay fixed
    /// for the lifetime of a board value, not of the game.
    pub fn with_board(mut self, board: Board) -> Self {
        self.board = board;
        self
    }

    /// Replace the current piece (puzzle setups and tests).
    pub fn with_current(mut self, current: Option<Piece>) -> Self {
        self.current = current;
        self
    }

    /// Dispatch one discrete action against this snapshot.
    pub fn apply(&self, action: GameAction) -> GameState {
        match action {
            GameAction::Start => self.start(),
            GameAction::MoveLeft => self.move_piece(-1),
            GameAction::MoveRight => self.move_piece(1),
            GameAction::SoftDrop => self.step_down(),
            GameAction::HardDrop => self.hard_drop(),
            GameAction::Rotate => self.rotate(),
            GameAction::Hold => self.hold(),
            GameAction::Pause => self.toggle_pause(),
        }
    }

    /// Menu -> Playing; state otherwise unchanged.
    pub fn start(&self) -> GameState {
        if self.status != Status::Menu {
            return self.clone();
        }
        GameState {
            status: Status::Playing,
            ..self.clone()
        }
    }

    /// Playing <-> Paused. No piece or board change.
    pub fn toggle_pause(&self) -> GameState {
        let status = match self.status {
            Status::Playing => Status::Paused,
            Status::Paused => Status::Playing,
            other => other,
        };
        GameState {
            status,
            ..self.clone()
        }
    }

    /// Move the current piece down one row; on contact, run the lock
    /// sequence. Drives both the automatic tick and manual soft drop.
    pub fn step_down(&self) -> GameState {
        let Some(piece) = self.playing_piece() else {
            return self.clone();
        };

        let moved = piece.translated(0, 1);
        if !has_collision(&self.board, &moved) {
            return GameState {
                current: Some(moved),
                ..self.clone()
            };
        }
        self.lock_current()
    }

    /// Translate the current piece horizontally; reject on collision.
    pub fn move_piece(&self, dx: i16) -> GameState {
        let Some(piece) = self.playing_piece() else {
            return self.clone();
        };

        let moved = piece.translated(dx, 0);
        if has_collision(&self.board, &moved) {
            return self.clone();
        }
        GameState {
            current: Some(moved),
            ..self.clone()
        }
    }

    /// Advance the rotation index by one (mod 4); reject on collision.
    /// No alternate direction and no kick fallback.
    pub fn rotate(&self) -> GameState {
        let Some(piece) = self.playing_piece() else {
            return self.clone();
        };

        let rotated = piece.rotated_cw();
        if has_collision(&self.board, &rotated) {
            return self.clone();
        }
        GameState {
            current: Some(rotated),
            ..self.clone()
        }
    }

    /// Drop the piece to its landing position, award the per-row bonus,
    /// then lock exactly as a natural drop collision would.
    pub fn hard_drop(&self) -> GameState {
        let Some(piece) = self.playing_piece() else {
            return self.clone();
        };

        let rows = drop_distance(&self.board, &piece);
        let resting = GameState {
            current: Some(piece.translated(0, rows as i16)),
            score: add_hard_drop_score(self.score, rows),
            ..self.clone()
        };
        resting.lock_current()
    }

    /// Swap the current piece with the hold slot.
    ///
    /// The first hold stashes the current kind and promotes the next queued
    /// piece; later holds swap with the stashed kind. One hold per lock:
    /// `can_hold` latches false until the next lock. Rejected when the
    /// swapped-in piece would collide at spawn.
    pub fn hold(&self) -> GameState {
        let Some(piece) = self.playing_piece() else {
            return self.clone();
        };
        if !self.can_hold {
            return self.clone();
        }

        let mut next = self.clone();
        let incoming_kind = match self.held {
            Some(kind) => kind,
            None => {
                let kind = next.next_queue.remove(0);
                next.next_queue.push(next.pieces.draw());
                kind
            }
        };

        let incoming = Piece::spawn(incoming_kind, self.board.width());
        if has_collision(&self.board, &incoming) {
            return self.clone();
        }

        next.current = Some(incoming);
        next.held = Some(piece.kind);
        next.can_hold = false;
        next
    }

    /// The current piece, but only while actually playing. All piece
    /// transitions reject in menu, pause, and game-over states.
    fn playing_piece(&self) -> Option<Piece> {
        if self.status != Status::Playing {
            return None;
        }
        self.current
    }

    /// The lock sequence: freeze the piece, clear lines, score, level up,
    /// promote the next piece, refill the queue, and check for top-out.
    ///
    /// The line-clear award uses the pre-clear level; the level is then
    /// recomputed from the new line total.
    fn lock_current(&self) -> GameState {
        let Some(piece) = self.current else {
            return self.clone();
        };

        let placed = self.board.place_piece(&piece);
        let (board, cleared) = placed.clear_lines();

        let score = add_placing_score(calculate_score(self.score, cleared, self.level));
        let lines_cleared = self.lines_cleared + cleared;
        let level = calculate_level(lines_cleared);

        let mut pieces = self.pieces.clone();
        let mut next_queue = self.next_queue.clone();
        let next_kind = next_queue.remove(0);
        next_queue.push(pieces.draw());

        let topped_out = board.is_topped_out();
        GameState {
            current: if topped_out {
                None
            } else {
                Some(Piece::spawn(next_kind, board.width()))
            },
            status: if topped_out {
                Status::GameOver
            } else {
                self.status
            },
            board,
            next_queue,
            held: self.held,
            can_hold: true,
            score,
            level,
            lines_cleared,
            pieces,
        }
    }
}
