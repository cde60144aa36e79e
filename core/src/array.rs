use std::ops;

use crate::dims::Dims;

/// Row-major 2D array backed by a single `Vec`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Array2D<T> {
    buf: Vec<T>,
    rows: usize,
    cols: usize,
}

impl<T> Array2D<T> {
    /// Wraps a row-major buffer, `None` if its length doesn't match the size.
    pub fn from_vec(buf: Vec<T>, rows: usize, cols: usize) -> Option<Self> {
        (buf.len() == rows * cols).then_some(Self { buf, rows, cols })
    }

    pub fn size(&self) -> Dims {
        Dims(self.rows as i32, self.cols as i32)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn is_in_bounds(&self, pos: Dims) -> bool {
        self.dim_to_idx(pos).is_some()
    }

    pub fn dim_to_idx(&self, pos: Dims) -> Option<usize> {
        let Dims(row, col) = pos;
        if row < 0 || col < 0 {
            return None;
        }

        let (row, col) = (row as usize, col as usize);
        if row >= self.rows || col >= self.cols {
            return None;
        }

        Some(row * self.cols + col)
    }

    pub fn idx_to_dim(&self, idx: usize) -> Option<Dims> {
        if idx >= self.buf.len() {
            return None;
        }

        Some(Dims((idx / self.cols) as i32, (idx % self.cols) as i32))
    }

    pub fn get(&self, pos: Dims) -> Option<&T> {
        self.dim_to_idx(pos).and_then(|i| self.buf.get(i))
    }

    pub fn get_mut(&mut self, pos: Dims) -> Option<&mut T> {
        self.dim_to_idx(pos).and_then(|i| self.buf.get_mut(i))
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.buf.iter()
    }

    pub fn iter_pos(&self) -> impl Iterator<Item = Dims> + '_ {
        (0..self.buf.len()).filter_map(move |i| self.idx_to_dim(i))
    }

    /// Iterates over the rows as slices.
    pub fn rows_iter(&self) -> impl Iterator<Item = &[T]> {
        self.buf.chunks(self.cols.max(1))
    }
}

impl<T: Clone> Array2D<T> {
    pub fn new(item: T, rows: usize, cols: usize) -> Self {
        Self {
            buf: vec![item; rows * cols],
            rows,
            cols,
        }
    }

    /// Same as [`Array2D::new`], but returns `None` for negative sizes.
    pub fn new_dims(item: T, size: Dims) -> Option<Self> {
        let Dims(rows, cols) = size;
        if rows < 0 || cols < 0 {
            return None;
        }

        Some(Self::new(item, rows as usize, cols as usize))
    }
}

impl<T> ops::Index<Dims> for Array2D<T> {
    type Output = T;

    fn index(&self, index: Dims) -> &Self::Output {
        self.get(index)
            .unwrap_or_else(|| panic!("Index out of bounds: {}", index))
    }
}

impl<T> ops::IndexMut<Dims> for Array2D<T> {
    fn index_mut(&mut self, index: Dims) -> &mut Self::Output {
        self.get_mut(index)
            .unwrap_or_else(|| panic!("Index out of bounds: {}", index))
    }
}

#[cfg(test)]
mod tests {
    use super::{Array2D, Dims};

    #[test]
    fn row_major_indexing() {
        let arr = Array2D::new(0u8, 3, 4);
        assert_eq!(arr.dim_to_idx(Dims(0, 0)), Some(0));
        assert_eq!(arr.dim_to_idx(Dims(0, 3)), Some(3));
        assert_eq!(arr.dim_to_idx(Dims(1, 0)), Some(4));
        assert_eq!(arr.dim_to_idx(Dims(2, 3)), Some(11));
        assert_eq!(arr.idx_to_dim(6), Some(Dims(1, 2)));
        assert_eq!(arr.idx_to_dim(12), None);
    }

    #[test]
    fn from_vec_checks_length() {
        assert!(Array2D::from_vec(vec![1, 2, 3], 2, 2).is_none());
        let arr = Array2D::from_vec(vec![1, 2, 3, 4], 2, 2).unwrap();
        assert_eq!(arr[Dims(1, 0)], 3);
    }

    #[test]
    fn out_of_bounds_is_none() {
        let mut arr = Array2D::new(false, 2, 2);
        assert_eq!(arr.get(Dims(-1, 0)), None);
        assert_eq!(arr.get(Dims(0, 2)), None);
        assert_eq!(arr.get_mut(Dims(2, 0)), None);
        assert!(Array2D::new_dims(0, Dims(-1, 3)).is_none());
    }

    #[test]
    fn iter_pos_covers_every_cell_in_order() {
        let arr = Array2D::new((), 2, 3);
        let positions: Vec<_> = arr.iter_pos().collect();
        assert_eq!(
            positions,
            vec![
                Dims(0, 0),
                Dims(0, 1),
                Dims(0, 2),
                Dims(1, 0),
                Dims(1, 1),
                Dims(1, 2)
            ]
        );
    }

    #[test]
    fn index_mut_writes_through() {
        let mut arr = Array2D::new(0, 2, 2);
        arr[Dims(1, 0)] = 7;
        assert_eq!(arr.rows_iter().collect::<Vec<_>>(), vec![&[0, 0][..], &[7, 0][..]]);
    }

    #[test]
    #[should_panic(expected = "Index out of bounds")]
    fn index_panics_out_of_bounds() {
        let arr = Array2D::new(0, 1, 1);
        let _ = arr[Dims(0, 1)];
    }
}
