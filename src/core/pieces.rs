//! Shape catalog and the falling-piece value type.
//!
//! Each shape has four precomputed rotation tables; nothing is rotated
//! algorithmically, so rotation behavior is exactly what the tables encode
//! (no wall kicks).

use crate::types::{PieceKind, Rotation};

/// Offset of a single tile relative to the piece origin.
pub type TileOffset = (i8, i8);

/// Shape of a piece: four tile offsets from the piece origin.
pub type PieceShape = [TileOffset; 4];

/// Look up the tile offsets for a piece kind and rotation. Pure, total.
pub fn shape_offsets(kind: PieceKind, rotation: Rotation) -> PieceShape {
    match kind {
        PieceKind::I => I_SHAPES[rotation.index()],
        PieceKind::O => O_SHAPES[rotation.index()],
        PieceKind::T => T_SHAPES[rotation.index()],
        PieceKind::S => S_SHAPES[rotation.index()],
        PieceKind::Z => Z_SHAPES[rotation.index()],
        PieceKind::J => J_SHAPES[rotation.index()],
        PieceKind::L => L_SHAPES[rotation.index()],
    }
}

const I_SHAPES: [PieceShape; 4] = [
    [(0, 1), (1, 1), (2, 1), (3, 1)],
    [(2, 0), (2, 1), (2, 2), (2, 3)],
    [(0, 2), (1, 2), (2, 2), (3, 2)],
    [(1, 0), (1, 1), (1, 2), (1, 3)],
];

// O occupies the same cells in every state.
const O_SHAPES: [PieceShape; 4] = [[(1, 0), (2, 0), (1, 1), (2, 1)]; 4];

const T_SHAPES: [PieceShape; 4] = [
    [(1, 0), (0, 1), (1, 1), (2, 1)],
    [(1, 0), (1, 1), (2, 1), (1, 2)],
    [(0, 1), (1, 1), (2, 1), (1, 2)],
    [(1, 0), (0, 1), (1, 1), (1, 2)],
];

const S_SHAPES: [PieceShape; 4] = [
    [(1, 0), (2, 0), (0, 1), (1, 1)],
    [(1, 0), (1, 1), (2, 1), (2, 2)],
    [(1, 1), (2, 1), (0, 2), (1, 2)],
    [(0, 0), (0, 1), (1, 1), (1, 2)],
];

const Z_SHAPES: [PieceShape; 4] = [
    [(0, 0), (1, 0), (1, 1), (2, 1)],
    [(2, 0), (1, 1), (2, 1), (1, 2)],
    [(0, 1), (1, 1), (1, 2), (2, 2)],
    [(1, 0), (0, 1), (1, 1), (0, 2)],
];

const J_SHAPES: [PieceShape; 4] = [
    [(0, 0), (0, 1), (1, 1), (2, 1)],
    [(1, 0), (2, 0), (1, 1), (1, 2)],
    [(0, 1), (1, 1), (2, 1), (2, 2)],
    [(1, 0), (1, 1), (0, 2), (1, 2)],
];

const L_SHAPES: [PieceShape; 4] = [
    [(2, 0), (0, 1), (1, 1), (2, 1)],
    [(1, 0), (1, 1), (1, 2), (2, 2)],
    [(0, 1), (1, 1), (2, 1), (0, 2)],
    [(0, 0), (1, 0), (1, 1), (1, 2)],
];

/// The falling piece.
///
/// A value type: every transition replaces it wholesale rather than mutating
/// in place. `y` may be negative while the piece is still entering the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: PieceKind,
    pub rotation: Rotation,
    pub x: i16,
    pub y: i16,
}

impl Piece {
    /// Spawn x for a board of the given width (3 on the standard board).
    pub fn spawn_x(board_width: u8) -> i16 {
        i16::from(board_width / 2) - 2
    }

    /// Create a piece at the spawn origin, spawn orientation.
    pub fn spawn(kind: PieceKind, board_width: u8) -> Self {
        Self {
            kind,
            rotation: Rotation::R0,
            x: Self::spawn_x(board_width),
            y: 0,
        }
    }

    /// Tile offsets for the current rotation.
    pub fn shape(&self) -> PieceShape {
        shape_offsets(self.kind, self.rotation)
    }

    /// Absolute board coordinates of the four tiles.
    ///
    /// Coordinates are `i16`: wide enough for any `u8`-sized board plus the
    /// negative rows a piece occupies while spawning.
    pub fn tiles(&self) -> [(i16, i16); 4] {
        let shape = self.shape();
        shape.map(|(dx, dy)| (self.x + i16::from(dx), self.y + i16::from(dy)))
    }

    /// A copy translated by (dx, dy).
    pub fn translated(&self, dx: i16, dy: i16) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            ..*self
        }
    }

    /// A copy rotated clockwise by one state.
    pub fn rotated_cw(&self) -> Self {
        Self {
            rotation: self.rotation.rotate_cw(),
            ..*self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spawn_position() {
        let piece = Piece::spawn(PieceKind::T, 10);
        assert_eq!(piece.x, 3);
        assert_eq!(piece.y, 0);
        assert_eq!(piece.rotation, Rotation::R0);
    }

    #[test]
    fn test_i_piece_spawn_shape() {
        let piece = Piece::spawn(PieceKind::I, 10);
        assert_eq!(piece.shape(), [(0, 1), (1, 1), (2, 1), (3, 1)]);
        assert_eq!(piece.tiles(), [(3, 1), (4, 1), (5, 1), (6, 1)]);
    }

    #[test]
    fn test_four_rotations_restore_shape() {
        for kind in PieceKind::ALL {
            let piece = Piece::spawn(kind, 10);
            let rotated = piece
                .rotated_cw()
                .rotated_cw()
                .rotated_cw()
                .rotated_cw();
            assert_eq!(rotated, piece);
            assert_eq!(rotated.shape(), piece.shape());
        }
    }

    #[test]
    fn test_o_piece_rotation_invariant() {
        let piece = Piece::spawn(PieceKind::O, 10);
        assert_eq!(piece.rotated_cw().shape(), piece.shape());
    }

    #[test]
    fn test_translated_moves_origin_only() {
        let piece = Piece::spawn(PieceKind::L, 10);
        let moved = piece.translated(-1, 2);
        assert_eq!(moved.x, piece.x - 1);
        assert_eq!(moved.y, piece.y + 2);
        assert_eq!(moved.shape(), piece.shape());
    }

    #[test]
    fn test_every_shape_has_four_tiles_in_bounds_box() {
        for kind in PieceKind::ALL {
            for rotation in [Rotation::R0, Rotation::R1, Rotation::R2, Rotation::R3] {
                for (dx, dy) in shape_offsets(kind, rotation) {
                    assert!((0..4).contains(&dx), "{kind:?} {rotation:?} dx={dx}");
                    assert!((0..4).contains(&dy), "{kind:?} {rotation:?} dy={dy}");
                }
            }
        }
    }

    #[test]
    fn test_spawn_shapes_rest_on_rows_zero_and_one() {
        // Every spawn orientation has its lowest tile on row 1, which fixes
        // the hard-drop distance from spawn on an empty board at height - 2.
        for kind in PieceKind::ALL {
            let lowest = shape_offsets(kind, Rotation::R0)
                .iter()
                .map(|&(_, dy)| dy)
                .max()
                .unwrap();
            assert_eq!(lowest, 1, "{kind:?}");
        }
    }
}
