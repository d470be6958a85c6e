//! Tetromino definitions and shapes
//!
//! All 7 standard tetrominoes with their per-rotation cell tables.

use crate::position::Position;

const fn p(row: i32, col: i32) -> Position {
    Position::new(row, col)
}

/// The 7 tetromino kinds.
///
/// Each kind carries a distinct non-zero id used both as the board occupancy
/// marker and as the palette index. Marker 0 is reserved for empty cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum PieceKind {
    L = 1,
    J = 2,
    I = 3,
    O = 4,
    S = 5,
    T = 6,
    Z = 7,
}

impl PieceKind {
    /// The occupancy marker written into the board when this kind locks.
    pub fn marker(self) -> u8 {
        self as u8
    }

    /// All kinds, for bag refills.
    pub fn all() -> [PieceKind; 7] {
        [
            PieceKind::I,
            PieceKind::J,
            PieceKind::L,
            PieceKind::O,
            PieceKind::S,
            PieceKind::T,
            PieceKind::Z,
        ]
    }

    /// The four cells this kind occupies at a given rotation, in the local
    /// frame (a 4x4 box at most, rows growing downward, untranslated).
    pub fn cells(self, rotation: Rotation) -> [Position; 4] {
        match self {
            PieceKind::L => match rotation {
                Rotation::North => [p(0, 2), p(1, 0), p(1, 1), p(1, 2)],
                Rotation::East => [p(0, 1), p(1, 1), p(2, 1), p(2, 2)],
                Rotation::South => [p(1, 0), p(1, 1), p(1, 2), p(2, 0)],
                Rotation::West => [p(0, 0), p(0, 1), p(1, 1), p(2, 1)],
            },
            PieceKind::J => match rotation {
                Rotation::North => [p(0, 0), p(1, 0), p(1, 1), p(1, 2)],
                Rotation::East => [p(0, 1), p(0, 2), p(1, 1), p(2, 1)],
                Rotation::South => [p(1, 0), p(1, 1), p(1, 2), p(2, 2)],
                Rotation::West => [p(0, 1), p(1, 1), p(2, 0), p(2, 1)],
            },
            // I lives on row 1 of its frame at spawn, hence its raised spawn offset
            PieceKind::I => match rotation {
                Rotation::North => [p(1, 0), p(1, 1), p(1, 2), p(1, 3)],
                Rotation::East => [p(0, 2), p(1, 2), p(2, 2), p(3, 2)],
                Rotation::South => [p(2, 0), p(2, 1), p(2, 2), p(2, 3)],
                Rotation::West => [p(0, 1), p(1, 1), p(2, 1), p(3, 1)],
            },
            PieceKind::O => {
                // O looks the same in every rotation
                [p(0, 0), p(0, 1), p(1, 0), p(1, 1)]
            }
            // S: .SS    Z: ZZ.
            //    SS.       .ZZ
            PieceKind::S => match rotation {
                Rotation::North => [p(0, 1), p(0, 2), p(1, 0), p(1, 1)],
                Rotation::East => [p(0, 1), p(1, 1), p(1, 2), p(2, 2)],
                Rotation::South => [p(1, 1), p(1, 2), p(2, 0), p(2, 1)],
                Rotation::West => [p(0, 0), p(1, 0), p(1, 1), p(2, 1)],
            },
            PieceKind::T => match rotation {
                Rotation::North => [p(0, 1), p(1, 0), p(1, 1), p(1, 2)],
                Rotation::East => [p(0, 1), p(1, 1), p(1, 2), p(2, 1)],
                Rotation::South => [p(1, 0), p(1, 1), p(1, 2), p(2, 1)],
                Rotation::West => [p(0, 1), p(1, 0), p(1, 1), p(2, 1)],
            },
            PieceKind::Z => match rotation {
                Rotation::North => [p(0, 0), p(0, 1), p(1, 1), p(1, 2)],
                Rotation::East => [p(0, 2), p(1, 1), p(1, 2), p(2, 1)],
                Rotation::South => [p(1, 0), p(1, 1), p(2, 1), p(2, 2)],
                Rotation::West => [p(0, 1), p(1, 0), p(1, 1), p(2, 0)],
            },
        }
    }

    /// Initial offset applied once at construction, centering the piece's
    /// local frame over the 10-wide field. I starts one row higher since its
    /// home row is row 1 of the frame.
    pub fn spawn_offset(self) -> Position {
        match self {
            PieceKind::I => p(-1, 3),
            PieceKind::O => p(0, 4),
            _ => p(0, 3),
        }
    }
}

/// Rotation states
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Rotation {
    #[default]
    North, // Spawn state
    East,  // Clockwise from North
    South, // 180 from North
    West,  // Counter-clockwise from North
}

impl Rotation {
    /// Rotate clockwise: North → East → South → West → North
    pub fn cw(&self) -> Rotation {
        match self {
            Rotation::North => Rotation::East,
            Rotation::East => Rotation::South,
            Rotation::South => Rotation::West,
            Rotation::West => Rotation::North,
        }
    }

    /// Rotate counter-clockwise: North → West → South → East → North
    pub fn ccw(&self) -> Rotation {
        match self {
            Rotation::North => Rotation::West,
            Rotation::West => Rotation::South,
            Rotation::South => Rotation::East,
            Rotation::East => Rotation::North,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    const ROTATIONS: [Rotation; 4] = [
        Rotation::North,
        Rotation::East,
        Rotation::South,
        Rotation::West,
    ];

    #[test]
    fn test_markers_distinct_and_nonzero() {
        let markers: HashSet<u8> = PieceKind::all().iter().map(|k| k.marker()).collect();
        assert_eq!(markers.len(), 7);
        assert!(!markers.contains(&0));
    }

    #[test]
    fn test_every_rotation_has_four_distinct_cells() {
        for kind in PieceKind::all() {
            for rotation in ROTATIONS {
                let cells: HashSet<Position> = kind.cells(rotation).into_iter().collect();
                assert_eq!(cells.len(), 4, "{:?} at {:?}", kind, rotation);
            }
        }
    }

    #[test]
    fn test_cells_stay_within_local_frame() {
        for kind in PieceKind::all() {
            for rotation in ROTATIONS {
                for cell in kind.cells(rotation) {
                    assert!((0..4).contains(&cell.row), "{:?} at {:?}", kind, rotation);
                    assert!((0..4).contains(&cell.col), "{:?} at {:?}", kind, rotation);
                }
            }
        }
    }

    #[test]
    fn test_spawn_offsets() {
        assert_eq!(PieceKind::I.spawn_offset(), Position::new(-1, 3));
        assert_eq!(PieceKind::O.spawn_offset(), Position::new(0, 4));
        for kind in [
            PieceKind::J,
            PieceKind::L,
            PieceKind::S,
            PieceKind::T,
            PieceKind::Z,
        ] {
            assert_eq!(kind.spawn_offset(), Position::new(0, 3));
        }
    }

    #[test]
    fn test_rotation_cycle_lengths() {
        for start in ROTATIONS {
            assert_eq!(start.cw().cw().cw().cw(), start);
            assert_eq!(start.ccw().ccw().ccw().ccw(), start);
            assert_eq!(start.cw().ccw(), start);
        }
    }
}
