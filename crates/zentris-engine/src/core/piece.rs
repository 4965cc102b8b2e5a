use arrayvec::ArrayVec;
use rand::{Rng, distr::StandardUniform, prelude::Distribution};

use super::board::BOARD_WIDTH;

/// Enum representing the type of piece.
///
/// The discriminant order matches the color-index order of the palette:
/// `color_index` is the discriminant plus one, so every locked cell carries
/// a valid color index by construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum PieceKind {
    /// I-piece.
    I = 0,
    /// O-piece.
    O = 1,
    /// T-piece.
    T = 2,
    /// S-piece.
    S = 3,
    /// Z-piece.
    Z = 4,
    /// J-piece.
    J = 5,
    /// L-piece.
    L = 6,
}

impl Distribution<PieceKind> for StandardUniform {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> PieceKind {
        match rng.random_range(0..=6) {
            0 => PieceKind::I,
            1 => PieceKind::O,
            2 => PieceKind::T,
            3 => PieceKind::S,
            4 => PieceKind::Z,
            5 => PieceKind::J,
            _ => PieceKind::L,
        }
    }
}

impl PieceKind {
    /// Number of piece types (7).
    pub const LEN: usize = 7;

    /// Color index of this piece type (1-7; 0 is reserved for empty cells).
    #[must_use]
    pub const fn color_index(self) -> u8 {
        self as u8 + 1
    }

    /// Returns a fresh copy of this piece type's shape matrix.
    #[must_use]
    pub fn shape(self) -> PieceShape {
        PieceShape::from_template(self.template())
    }

    const fn template(self) -> &'static [&'static [u8]] {
        match self {
            PieceKind::I => &[&[1, 1, 1, 1]],
            PieceKind::O => &[&[1, 1], &[1, 1]],
            PieceKind::T => &[&[0, 1, 0], &[1, 1, 1]],
            PieceKind::S => &[&[0, 1, 1], &[1, 1, 0]],
            PieceKind::Z => &[&[1, 1, 0], &[0, 1, 1]],
            PieceKind::J => &[&[1, 0, 0], &[1, 1, 1]],
            PieceKind::L => &[&[0, 0, 1], &[1, 1, 1]],
        }
    }
}

/// Binary shape matrix of a piece, at most 4x4.
///
/// Templates are immutable; every [`Piece`] owns its own copy so rotating an
/// active piece never touches the template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PieceShape {
    rows: ArrayVec<ArrayVec<bool, 4>, 4>,
}

impl PieceShape {
    fn from_template(template: &[&[u8]]) -> Self {
        let rows = template
            .iter()
            .map(|row| row.iter().map(|&cell| cell != 0).collect())
            .collect();
        Self { rows }
    }

    #[must_use]
    pub fn height(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub fn width(&self) -> usize {
        self.rows.first().map_or(0, ArrayVec::len)
    }

    #[must_use]
    pub fn is_occupied(&self, x: usize, y: usize) -> bool {
        self.rows
            .get(y)
            .and_then(|row| row.get(x))
            .copied()
            .unwrap_or(false)
    }

    /// One 90 degree clockwise rotation: transpose, then reverse each row.
    #[must_use]
    pub fn rotated(&self) -> Self {
        let mut rows = ArrayVec::new();
        for x in 0..self.width() {
            let mut row = ArrayVec::new();
            for y in (0..self.height()).rev() {
                row.push(self.rows[y][x]);
            }
            rows.push(row);
        }
        Self { rows }
    }

    /// Offsets of occupied cells relative to the matrix top-left.
    #[expect(clippy::cast_possible_truncation)]
    pub(crate) fn occupied_offsets(&self) -> impl Iterator<Item = (i16, i16)> + '_ {
        self.rows.iter().enumerate().flat_map(|(y, row)| {
            row.iter()
                .enumerate()
                .filter_map(move |(x, &cell)| cell.then_some((x as i16, y as i16)))
        })
    }
}

/// An active piece: kind, an owned copy of the shape matrix, and the grid
/// position of the matrix top-left.
///
/// Movement and rotation are pure; `translated`/`rotated` return candidate
/// pieces for the board's collision query to accept or reject.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Piece {
    kind: PieceKind,
    shape: PieceShape,
    x: i16,
    y: i16,
}

impl Piece {
    /// Spawn column: horizontally centered, `floor(width / 2) - 1`.
    #[expect(clippy::cast_possible_truncation)]
    pub const SPAWN_X: i16 = BOARD_WIDTH as i16 / 2 - 1;

    #[must_use]
    pub fn new(kind: PieceKind) -> Self {
        Self {
            kind,
            shape: kind.shape(),
            x: Self::SPAWN_X,
            y: 0,
        }
    }

    #[must_use]
    pub fn kind(&self) -> PieceKind {
        self.kind
    }

    #[must_use]
    pub fn shape(&self) -> &PieceShape {
        &self.shape
    }

    #[must_use]
    pub fn x(&self) -> i16 {
        self.x
    }

    #[must_use]
    pub fn y(&self) -> i16 {
        self.y
    }

    #[must_use]
    pub fn translated(&self, dx: i16, dy: i16) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            ..self.clone()
        }
    }

    #[must_use]
    pub fn rotated(&self) -> Self {
        Self {
            shape: self.shape.rotated(),
            ..self.clone()
        }
    }

    /// Absolute board coordinates of every occupied cell.
    pub fn occupied_cells(&self) -> impl Iterator<Item = (i16, i16)> + '_ {
        self.shape
            .occupied_offsets()
            .map(move |(dx, dy)| (self.x + dx, self.y + dy))
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng as _;
    use rand_pcg::Pcg32;

    use super::*;

    fn shape_rows(shape: &PieceShape) -> Vec<Vec<bool>> {
        (0..shape.height())
            .map(|y| (0..shape.width()).map(|x| shape.is_occupied(x, y)).collect())
            .collect()
    }

    #[test]
    fn test_rotation_is_transpose_then_reverse() {
        let rotated = PieceKind::T.shape().rotated();
        assert_eq!(
            shape_rows(&rotated),
            vec![
                vec![true, false],
                vec![true, true],
                vec![true, false],
            ],
        );
    }

    #[test]
    fn test_four_rotations_restore_shape() {
        for kind in [
            PieceKind::I,
            PieceKind::O,
            PieceKind::T,
            PieceKind::S,
            PieceKind::Z,
            PieceKind::J,
            PieceKind::L,
        ] {
            let shape = kind.shape();
            let full_turn = shape.rotated().rotated().rotated().rotated();
            assert_eq!(shape, full_turn, "{kind:?} should be restored after 4 rotations");
        }
    }

    #[test]
    fn test_i_piece_half_turn_symmetry() {
        let shape = PieceKind::I.shape();
        assert_eq!(shape, shape.rotated().rotated());
    }

    #[test]
    fn test_rotation_swaps_dimensions() {
        let shape = PieceKind::J.shape();
        let rotated = shape.rotated();
        assert_eq!((rotated.width(), rotated.height()), (shape.height(), shape.width()));
    }

    #[test]
    fn test_rotating_a_piece_leaves_the_template_untouched() {
        let piece = Piece::new(PieceKind::S);
        let _rotated = piece.rotated();
        assert_eq!(*piece.shape(), PieceKind::S.shape());
    }

    #[test]
    fn test_spawn_position_is_centered() {
        let piece = Piece::new(PieceKind::O);
        assert_eq!((piece.x(), piece.y()), (4, 0));
    }

    #[test]
    fn test_translated_moves_occupied_cells() {
        let piece = Piece::new(PieceKind::O).translated(-2, 3);
        let cells: Vec<_> = piece.occupied_cells().collect();
        assert_eq!(cells, vec![(2, 3), (3, 3), (2, 4), (3, 4)]);
    }

    #[test]
    fn test_color_indexes_are_one_through_seven() {
        let indexes: Vec<_> = [
            PieceKind::I,
            PieceKind::O,
            PieceKind::T,
            PieceKind::S,
            PieceKind::Z,
            PieceKind::J,
            PieceKind::L,
        ]
        .iter()
        .map(|kind| kind.color_index())
        .collect();
        assert_eq!(indexes, vec![1, 2, 3, 4, 5, 6, 7]);
    }

    #[test]
    fn test_uniform_sampling_reaches_every_kind() {
        let mut rng = Pcg32::seed_from_u64(7);
        let mut seen = [false; PieceKind::LEN];
        for _ in 0..200 {
            let kind: PieceKind = rng.random();
            seen[kind as usize] = true;
        }
        assert!(seen.iter().all(|&s| s), "every kind should be drawn: {seen:?}");
    }
}
