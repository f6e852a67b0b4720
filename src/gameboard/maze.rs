use smallvec::SmallVec;

use super::cell::{Cell, CellWall};
use crate::{array::Array2D, core::*};

pub(crate) fn in_bounds(size: Dims, pos: Dims) -> bool {
    0 <= pos.0 && pos.0 < size.0 && 0 <= pos.1 && pos.1 < size.1
}

/// Position of the neighbor of `pos` behind `wall` on a grid of `size`, if there is one.
pub fn neighbor_pos(size: Dims, pos: Dims, wall: CellWall) -> Option<Dims> {
    if !in_bounds(size, pos) {
        return None;
    }

    let next = pos + wall.to_coord();
    in_bounds(size, next).then_some(next)
}

/// Rectangular grid of cells with a start and an end opening to the outside.
///
/// Internal walls only come down through [`Maze::open_passage`], which keeps both sides of a
/// shared edge in sync.
#[derive(Debug, Clone)]
pub struct Maze {
    pub(crate) cells: Array2D<Cell>,
    start: Dims,
    end: Dims,
}

impl Maze {
    pub fn new(cols: i32, rows: i32, start: Dims, end: Dims) -> Result<Maze, MazeError> {
        if cols <= 0 || rows <= 0 {
            return Err(MazeError::InvalidDimensions(cols, rows));
        }

        let size = Dims(cols, rows);
        if let Some(pos) = [start, end].into_iter().find(|pos| !in_bounds(size, *pos)) {
            return Err(MazeError::InvalidCoordinate(pos));
        }

        let mut cells = Array2D::from_fn(cols as usize, rows as usize, Cell::new);
        cells[start].remove_wall(CellWall::Left);
        cells[end].remove_wall(CellWall::Right);

        Ok(Maze { cells, start, end })
    }

    pub fn size(&self) -> Dims {
        self.cells.size()
    }

    pub fn start(&self) -> Dims {
        self.start
    }

    pub fn end(&self) -> Dims {
        self.end
    }

    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    pub fn is_in_bounds(&self, pos: Dims) -> bool {
        in_bounds(self.size(), pos)
    }

    pub fn cell(&self, pos: Dims) -> Option<&Cell> {
        self.cells.get(pos)
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter()
    }

    pub fn neighbor(&self, pos: Dims, wall: CellWall) -> Option<&Cell> {
        neighbor_pos(self.size(), pos, wall).and_then(|next| self.cell(next))
    }

    /// Existing neighbors of `pos`, clockwise from the top.
    pub fn get_neighbors_pos(&self, pos: Dims) -> SmallVec<[Dims; 4]> {
        CellWall::get_in_order()
            .into_iter()
            .filter_map(|wall| neighbor_pos(self.size(), pos, wall))
            .collect()
    }

    /// Neighbors of `pos` reachable through an open passage.
    pub fn open_neighbors(&self, pos: Dims) -> SmallVec<[Dims; 4]> {
        self.get_neighbors_pos(pos)
            .into_iter()
            .filter(|next| self.is_open(pos, *next))
            .collect()
    }

    /// Returns the wall of `cell` facing `cell2`, or `None` if they are not 4-neighbors
    pub fn which_wall_between(cell: Dims, cell2: Dims) -> Option<CellWall> {
        let dx = cell.0.checked_sub(cell2.0)?;
        let dy = cell.1.checked_sub(cell2.1)?;
        match (dx, dy) {
            (-1, 0) => Some(CellWall::Right),
            (1, 0) => Some(CellWall::Left),
            (0, -1) => Some(CellWall::Bottom),
            (0, 1) => Some(CellWall::Top),
            _ => None,
        }
    }

    pub fn open_passage(&mut self, from: Dims, to: Dims) -> Result<(), MazeError> {
        if let Some(pos) = [from, to].into_iter().find(|pos| !self.is_in_bounds(*pos)) {
            return Err(MazeError::InvalidCoordinate(pos));
        }

        let wall = Self::which_wall_between(from, to).ok_or(MazeError::NotAdjacent(from, to))?;
        self.cells[from].remove_wall(wall);
        self.cells[to].remove_wall(wall.reverse_wall());

        Ok(())
    }

    pub fn is_open(&self, from: Dims, to: Dims) -> bool {
        let Some(wall) = Self::which_wall_between(from, to) else {
            return false;
        };

        match (self.cell(from), self.cell(to)) {
            (Some(a), Some(b)) => a.is_open(wall) && b.is_open(wall.reverse_wall()),
            _ => false,
        }
    }

    /// Number of open passages between cells. Boundary openings are not counted.
    pub fn passage_count(&self) -> usize {
        self.cells
            .iter_pos()
            .map(|pos| {
                [CellWall::Right, CellWall::Bottom]
                    .into_iter()
                    .filter_map(|wall| neighbor_pos(self.size(), pos, wall))
                    .filter(|next| self.is_open(pos, *next))
                    .count()
            })
            .sum()
    }

    pub(crate) fn reset_visited(&mut self) {
        for cell in self.cells.iter_mut() {
            cell.visited = false;
        }
    }

    pub(crate) fn set_visited(&mut self, pos: Dims) {
        self.cells[pos].visited = true;
    }

    pub(crate) fn is_visited(&self, pos: Dims) -> bool {
        self.cell(pos).is_some_and(|cell| cell.visited)
    }
}
