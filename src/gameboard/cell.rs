use crate::core::*;

use self::CellWall::*;

#[derive(Debug, Clone)]
pub struct Cell {
    top: bool,
    right: bool,
    bottom: bool,
    left: bool,
    pub(crate) visited: bool,
    pub(crate) coord: Dims,
}

impl Cell {
    /// New cell with all four walls standing.
    pub fn new(pos: Dims) -> Cell {
        Cell {
            top: true,
            right: true,
            bottom: true,
            left: true,
            visited: false,
            coord: pos,
        }
    }

    pub(crate) fn remove_wall(&mut self, wall: CellWall) {
        match wall {
            Top => self.top = false,
            Right => self.right = false,
            Bottom => self.bottom = false,
            Left => self.left = false,
        }
    }

    /// Returns `true` if the wall on the given side is standing.
    pub fn get_wall(&self, wall: CellWall) -> bool {
        match wall {
            Top => self.top,
            Right => self.right,
            Bottom => self.bottom,
            Left => self.left,
        }
    }

    /// Wall flags in `[top, right, bottom, left]` order.
    pub fn walls(&self) -> [bool; 4] {
        [self.top, self.right, self.bottom, self.left]
    }

    pub fn is_open(&self, wall: CellWall) -> bool {
        !self.get_wall(wall)
    }

    pub fn is_closed(&self, wall: CellWall) -> bool {
        self.get_wall(wall)
    }

    /// Generation-time flag, not meaningful once carving is done.
    pub fn is_visited(&self) -> bool {
        self.visited
    }

    pub fn get_coord(&self) -> Dims {
        self.coord
    }
}

impl PartialEq for Cell {
    fn eq(&self, other: &Self) -> bool {
        self.coord == other.coord
    }
}

impl Eq for Cell {}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CellWall {
    Top,
    Right,
    Bottom,
    Left,
}

impl CellWall {
    pub fn to_coord(&self) -> Dims {
        match self {
            Top => Dims(0, -1),
            Right => Dims(1, 0),
            Bottom => Dims(0, 1),
            Left => Dims(-1, 0),
        }
    }

    pub fn reverse_wall(&self) -> CellWall {
        match self {
            Top => Bottom,
            Right => Left,
            Bottom => Top,
            Left => Right,
        }
    }

    /// Clockwise from the top.
    pub fn get_in_order() -> [CellWall; 4] {
        [Top, Right, Bottom, Left]
    }
}
