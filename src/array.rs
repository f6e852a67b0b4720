use std::ops;

use crate::core::Dims;

/// Flat row-major 2D storage, `index = x + y * width`.
#[derive(Debug, Clone)]
pub struct Array2D<T> {
    buf: Vec<T>,
    width: usize,
    height: usize,
}

impl<T> Array2D<T> {
    pub fn from_fn(width: usize, height: usize, mut f: impl FnMut(Dims) -> T) -> Self {
        let buf = Dims::iter_fill(Dims::ZERO, Dims(width as i32, height as i32))
            .map(&mut f)
            .collect();

        Self { buf, width, height }
    }

    pub fn size(&self) -> Dims {
        Dims(self.width as i32, self.height as i32)
    }

    pub fn len(&self) -> usize {
        self.buf.len()
    }

    pub fn dim_to_idx(&self, pos: Dims) -> Option<usize> {
        let Dims(x, y) = pos;
        if x < 0 || y < 0 {
            return None;
        }

        let (x, y) = (x as usize, y as usize);
        if x >= self.width || y >= self.height {
            return None;
        }

        Some(x + y * self.width)
    }

    pub fn idx_to_dim(&self, idx: usize) -> Option<Dims> {
        if idx >= self.buf.len() {
            return None;
        }

        let x = idx % self.width;
        let y = idx / self.width;

        Some(Dims(x as i32, y as i32))
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

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut T> {
        self.buf.iter_mut()
    }

    pub fn iter_pos(&self) -> impl Iterator<Item = Dims> + '_ {
        (0..self.buf.len()).filter_map(move |i| self.idx_to_dim(i))
    }
}

impl<T> ops::Index<Dims> for Array2D<T> {
    type Output = T;

    fn index(&self, index: Dims) -> &Self::Output {
        self.get(index)
            .unwrap_or_else(|| panic!("Index out of bounds: {:?}", index))
    }
}

impl<T> ops::IndexMut<Dims> for Array2D<T> {
    fn index_mut(&mut self, index: Dims) -> &mut Self::Output {
        self.get_mut(index)
            .unwrap_or_else(|| panic!("Index out of bounds: {:?}", index))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_is_x_plus_y_times_width() {
        let arr = Array2D::from_fn(4, 3, |pos| pos);
        assert_eq!(arr.dim_to_idx(Dims(0, 0)), Some(0));
        assert_eq!(arr.dim_to_idx(Dims(3, 0)), Some(3));
        assert_eq!(arr.dim_to_idx(Dims(1, 2)), Some(9));
        assert_eq!(arr.idx_to_dim(9), Some(Dims(1, 2)));
        assert_eq!(arr[Dims(2, 1)], Dims(2, 1));
    }

    #[test]
    fn out_of_bounds() {
        let arr = Array2D::from_fn(2, 2, |_| 0u8);
        assert_eq!(arr.get(Dims(-1, 0)), None);
        assert_eq!(arr.get(Dims(0, 2)), None);
        assert_eq!(arr.get(Dims(2, 0)), None);
        assert_eq!(arr.idx_to_dim(4), None);
    }

    #[test]
    fn iter_pos_matches_storage_order() {
        let arr = Array2D::from_fn(3, 2, |pos| pos);
        let positions: Vec<_> = arr.iter_pos().collect();
        let values: Vec<_> = arr.iter().copied().collect();
        assert_eq!(positions, values);
    }
}
