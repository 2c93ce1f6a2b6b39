//! Core types shared across the application.
//!
//! Pure data types with no external dependencies, usable from the core
//! engine, the input layer, and the terminal view alike.

/// Default board dimensions (standard playfield).
pub const DEFAULT_BOARD_WIDTH: u8 = 10;
pub const DEFAULT_BOARD_HEIGHT: u8 = 20;

/// Gravity at level 0, in milliseconds per row.
pub const BASE_DROP_MS: u32 = 1000;
/// The drop interval shrinks by this much per level.
pub const DROP_SPEED_STEP_MS: u32 = 50;
/// The drop interval never goes below this floor.
pub const DROP_SPEED_FLOOR_MS: u32 = 50;

/// Line clear base points, indexed by lines cleared in one lock (0-4).
pub const LINE_SCORES: [u32; 5] = [0, 40, 100, 300, 1200];
/// Flat bonus awarded on every piece lock.
pub const PLACING_BONUS: u32 = 10;
/// Bonus per row traversed during a hard drop.
pub const HARD_DROP_BONUS_PER_ROW: u32 = 2;
/// Lines required to advance one level.
pub const LINES_PER_LEVEL: u32 = 10;

/// Length of the next-piece lookahead queue.
pub const NEXT_QUEUE_LEN: usize = 5;

/// Tetromino piece kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    I,
    O,
    T,
    S,
    Z,
    J,
    L,
}

impl PieceKind {
    /// All seven kinds, in catalog order.
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::O,
        PieceKind::T,
        PieceKind::S,
        PieceKind::Z,
        PieceKind::J,
        PieceKind::L,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PieceKind::I => "I",
            PieceKind::O => "O",
            PieceKind::T => "T",
            PieceKind::S => "S",
            PieceKind::Z => "Z",
            PieceKind::J => "J",
            PieceKind::L => "L",
        }
    }
}

/// Rotation states; `R0` is the spawn orientation.
///
/// Rotating clockwise advances the index by one, modulo four.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rotation {
    R0,
    R1,
    R2,
    R3,
}

impl Rotation {
    pub fn rotate_cw(&self) -> Self {
        match self {
            Rotation::R0 => Rotation::R1,
            Rotation::R1 => Rotation::R2,
            Rotation::R2 => Rotation::R3,
            Rotation::R3 => Rotation::R0,
        }
    }

    /// Numeric index (0-3) of this state.
    pub fn index(&self) -> usize {
        match self {
            Rotation::R0 => 0,
            Rotation::R1 => 1,
            Rotation::R2 => 2,
            Rotation::R3 => 3,
        }
    }
}

/// Game status lifecycle: `Menu` is initial, `GameOver` terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Menu,
    Playing,
    Paused,
    GameOver,
}

/// Discrete transitions accepted by the state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    Start,
    MoveLeft,
    MoveRight,
    SoftDrop,
    HardDrop,
    Rotate,
    Hold,
    Pause,
}

/// Cell on the board (`None` = empty, `Some` = filled with a piece kind).
pub type Cell = Option<PieceKind>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rotation_cycle_returns_to_start() {
        let mut r = Rotation::R0;
        for _ in 0..4 {
            r = r.rotate_cw();
        }
        assert_eq!(r, Rotation::R0);
    }

    #[test]
    fn test_rotation_indices() {
        assert_eq!(Rotation::R0.index(), 0);
        assert_eq!(Rotation::R0.rotate_cw().index(), 1);
        assert_eq!(Rotation::R3.index(), 3);
    }
}
