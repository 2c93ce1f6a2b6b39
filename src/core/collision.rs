//! Collision detector.
//!
//! A placement collides when any tile is outside the side or bottom bounds,
//! or overlaps a placed cell. Tiles above the visible board (`y < 0`) never
//! collide with placed cells, which is what permits spawning partially
//! off-board.

use crate::core::board::Board;
use crate::core::pieces::Piece;

/// Whether the piece at its current placement overlaps walls, floor, or
/// placed cells. No side effects.
pub fn has_collision(board: &Board, piece: &Piece) -> bool {
    piece.tiles().iter().any(|&(x, y)| {
        if x < 0 || x >= i16::from(board.width()) || y >= i16::from(board.height()) {
            return true;
        }
        y >= 0 && board.is_occupied(x, y)
    })
}

/// Rows the piece can fall before the next step would collide.
///
/// Terminates because the board has finite height: at most `height`
/// iterations from any legal placement.
pub fn drop_distance(board: &Board, piece: &Piece) -> u32 {
    let mut distance = 0;
    while !has_collision(board, &piece.translated(0, distance as i16 + 1)) {
        distance += 1;
    }
    distance
}

/// The piece translated to its hard-drop landing position (ghost piece).
pub fn ghost_piece(board: &Board, piece: &Piece) -> Piece {
    piece.translated(0, drop_distance(board, piece) as i16)
}
