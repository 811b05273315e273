//! Shape catalog - the seven piece templates and matrix rotation
//!
//! Shapes are small row-major matrices. A nonzero entry is a filled cell and
//! carries the catalog color tag of its template. Templates never change;
//! rotation always builds a new `Shape`.

use rand::Rng;

use crate::types::{ColorIndex, PieceKind, PALETTE_SIZE};

/// Largest side of any shape bounding box
pub const MAX_SHAPE_SIDE: usize = 4;

/// A piece shape inside a bounding box of at most 4x4 cells
///
/// Entries outside `width x height` are always zero, so two shapes compare
/// equal exactly when their bounding boxes and filled cells match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Shape {
    width: u8,
    height: u8,
    rows: [[u8; MAX_SHAPE_SIDE]; MAX_SHAPE_SIDE],
}

impl Shape {
    /// Build a shape from a rectangular matrix of rows.
    ///
    /// Panics if the matrix is empty, ragged, or larger than 4x4.
    pub fn from_rows(rows: &[&[u8]]) -> Self {
        assert!(
            !rows.is_empty() && rows.len() <= MAX_SHAPE_SIDE,
            "shape height must be 1..=4, got {}",
            rows.len()
        );
        let width = rows[0].len();
        assert!(
            width > 0 && width <= MAX_SHAPE_SIDE,
            "shape width must be 1..=4, got {}",
            width
        );

        let mut out = [[0u8; MAX_SHAPE_SIDE]; MAX_SHAPE_SIDE];
        for (r, row) in rows.iter().enumerate() {
            assert_eq!(row.len(), width, "shape rows must all be the same width");
            out[r][..width].copy_from_slice(row);
        }

        Self {
            width: width as u8,
            height: rows.len() as u8,
            rows: out,
        }
    }

    /// Bounding-box width in cells
    pub fn width(&self) -> u8 {
        self.width
    }

    /// Bounding-box height in cells
    pub fn height(&self) -> u8 {
        self.height
    }

    /// Tag at (row, col); zero when empty or outside the bounding box
    pub fn get(&self, row: usize, col: usize) -> u8 {
        if row >= self.height as usize || col >= self.width as usize {
            return 0;
        }
        self.rows[row][col]
    }

    /// Iterate filled cells as `(row, col)` offsets from the shape origin
    pub fn cells(&self) -> impl Iterator<Item = (i32, i32)> + '_ {
        (0..self.height as usize).flat_map(move |r| {
            (0..self.width as usize)
                .filter(move |&c| self.rows[r][c] != 0)
                .map(move |c| (r as i32, c as i32))
        })
    }

    /// Number of filled cells
    pub fn filled_count(&self) -> usize {
        self.cells().count()
    }

    /// Rotate 90° clockwise, returning a new shape
    ///
    /// Row `r`, column `c` of the source lands at row `c`, column
    /// `height - 1 - r` of the result; width and height swap.
    pub fn rotated(&self) -> Self {
        let (w, h) = (self.width as usize, self.height as usize);
        let mut out = [[0u8; MAX_SHAPE_SIDE]; MAX_SHAPE_SIDE];
        for (r, row) in self.rows.iter().enumerate().take(h) {
            for (c, &tag) in row.iter().enumerate().take(w) {
                out[c][h - 1 - r] = tag;
            }
        }
        Self {
            width: self.height,
            height: self.width,
            rows: out,
        }
    }
}

/// Rotate a shape 90° clockwise
pub fn rotate(shape: &Shape) -> Shape {
    shape.rotated()
}

/// Catalog template for a piece kind
pub fn shape_of(kind: PieceKind) -> Shape {
    match kind {
        PieceKind::T => Shape::from_rows(&[&[1, 1, 1], &[0, 1, 0]]),
        PieceKind::S => Shape::from_rows(&[&[0, 2, 2], &[2, 2, 0]]),
        PieceKind::Z => Shape::from_rows(&[&[3, 3, 0], &[0, 3, 3]]),
        PieceKind::J => Shape::from_rows(&[&[4, 0, 0], &[4, 4, 4]]),
        PieceKind::L => Shape::from_rows(&[&[0, 0, 5], &[5, 5, 5]]),
        PieceKind::O => Shape::from_rows(&[&[6, 6], &[6, 6]]),
        PieceKind::I => Shape::from_rows(&[&[7, 7, 7, 7]]),
    }
}

/// All seven templates in catalog order
pub fn all_shapes() -> [Shape; 7] {
    PieceKind::ALL.map(shape_of)
}

/// Draw a catalog shape uniformly at random. Repeats are allowed.
pub fn random_shape<R: Rng + ?Sized>(rng: &mut R) -> (PieceKind, Shape) {
    let kind = PieceKind::ALL[rng.random_range(0..PieceKind::ALL.len())];
    (kind, shape_of(kind))
}

/// Draw a palette color uniformly at random, independent of any shape draw.
pub fn random_color<R: Rng + ?Sized>(rng: &mut R) -> ColorIndex {
    rng.random_range(0..PALETTE_SIZE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_has_seven_tetrominoes() {
        let shapes = all_shapes();
        assert_eq!(shapes.len(), 7);
        for shape in shapes {
            assert_eq!(shape.filled_count(), 4);
        }
    }

    #[test]
    fn catalog_tags_match_catalog_position() {
        for kind in PieceKind::ALL {
            let shape = shape_of(kind);
            for (r, c) in shape.cells() {
                assert_eq!(shape.get(r as usize, c as usize) as usize, kind.index() + 1);
            }
        }
    }

    #[test]
    fn rotate_t_clockwise() {
        // 1 1 1      . 1
        // . 1 .  ->  1 1
        //            . 1
        let t = shape_of(PieceKind::T);
        let r = t.rotated();
        assert_eq!((r.width(), r.height()), (2, 3));
        assert_eq!(r, Shape::from_rows(&[&[0, 1], &[1, 1], &[0, 1]]));
    }

    #[test]
    fn rotate_j_clockwise() {
        // 4 . .      4 4
        // 4 4 4  ->  4 .
        //            4 .
        let j = shape_of(PieceKind::J);
        assert_eq!(j.rotated(), Shape::from_rows(&[&[4, 4], &[4, 0], &[4, 0]]));
    }

    #[test]
    fn rotate_i_swaps_dimensions() {
        let i = shape_of(PieceKind::I);
        let v = rotate(&i);
        assert_eq!((v.width(), v.height()), (1, 4));
        assert_eq!(rotate(&v), i);
    }

    #[test]
    fn o_is_rotation_invariant() {
        let o = shape_of(PieceKind::O);
        assert_eq!(o.rotated(), o);
    }

    #[test]
    fn get_outside_bounding_box_is_empty() {
        let i = shape_of(PieceKind::I);
        assert_eq!(i.get(1, 0), 0);
        assert_eq!(i.get(0, 4), 0);
    }

    #[test]
    #[should_panic]
    fn ragged_rows_are_rejected() {
        let _ = Shape::from_rows(&[&[1, 1], &[1]]);
    }
}
