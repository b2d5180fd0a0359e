/// side of the square playfield, in cells
pub const GRID_SIZE: i32 = 20;

/// One grid position. `y` grows upwards, like the original projection.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub struct Cell {
    pub x: i32,
    pub y: i32,
}

impl Cell {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// middle of the grid, where every new snake starts
    pub fn center() -> Self {
        Self::new(GRID_SIZE / 2, GRID_SIZE / 2)
    }

    pub fn offset(self, (dx, dy): (i32, i32)) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }
}

#[cfg(test)]
impl Cell {
    pub fn manhattan(self, other: Cell) -> i32 {
        (self.x - other.x).abs() + (self.y - other.y).abs()
    }
}
