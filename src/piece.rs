//! Active falling piece

use crate::position::Position;
use crate::tetromino::{PieceKind, Rotation};

/// An active falling piece: a kind plus its current rotation state and
/// translation offset.
///
/// A piece performs no validation of its own. The engine moves or rotates it,
/// tests the result against the board, and reverts the mutation if the new
/// placement is illegal.
#[derive(Debug, Clone)]
pub struct Piece {
    /// The tetromino kind
    pub kind: PieceKind,
    /// Current rotation state
    pub rotation: Rotation,
    /// Translation applied to the kind's local cell frame
    offset: Position,
}

impl Piece {
    /// Create a new piece at its kind-specific spawn offset.
    pub fn new(kind: PieceKind) -> Self {
        Self {
            kind,
            rotation: Rotation::North,
            offset: kind.spawn_offset(),
        }
    }

    /// Shift the piece by the given number of rows and columns.
    pub fn translate(&mut self, rows: i32, cols: i32) {
        self.offset = self.offset.translated(rows, cols);
    }

    pub fn rotate_cw(&mut self) {
        self.rotation = self.rotation.cw();
    }

    pub fn rotate_ccw(&mut self) {
        self.rotation = self.rotation.ccw();
    }

    /// The four board cells the piece currently occupies: the kind's local
    /// cells for the current rotation, shifted by the offset.
    pub fn cells(&self) -> [Position; 4] {
        self.kind
            .cells(self.rotation)
            .map(|cell| cell.translated(self.offset.row, self.offset.col))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spawn_cells_are_centered_on_top_rows() {
        // I pre-shifts one row up, so its home row lands on row 0
        let i = Piece::new(PieceKind::I);
        let expected = [(0, 3), (0, 4), (0, 5), (0, 6)].map(|(r, c)| Position::new(r, c));
        assert_eq!(i.cells(), expected);

        let o = Piece::new(PieceKind::O);
        let expected = [(0, 4), (0, 5), (1, 4), (1, 5)].map(|(r, c)| Position::new(r, c));
        assert_eq!(o.cells(), expected);
    }

    #[test]
    fn test_translate_shifts_every_cell() {
        let mut piece = Piece::new(PieceKind::T);
        let before = piece.cells();
        piece.translate(3, -2);
        let after = piece.cells();
        for (b, a) in before.iter().zip(after.iter()) {
            assert_eq!(a.row, b.row + 3);
            assert_eq!(a.col, b.col - 2);
        }
    }

    #[test]
    fn test_rotation_round_trip() {
        for kind in PieceKind::all() {
            for n in 0..8 {
                let mut piece = Piece::new(kind);
                let initial = piece.rotation;
                for _ in 0..n {
                    piece.rotate_cw();
                }
                for _ in 0..n {
                    piece.rotate_ccw();
                }
                assert_eq!(piece.rotation, initial, "{:?} after {} turns", kind, n);
            }
        }
    }

    #[test]
    fn test_rotation_preserves_offset() {
        let mut piece = Piece::new(PieceKind::L);
        piece.translate(5, 2);
        let before = piece.cells();
        piece.rotate_cw();
        piece.rotate_ccw();
        assert_eq!(piece.cells(), before);
    }
}
