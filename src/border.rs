use crate::utils::{Cell, GRID_SIZE};

/// The square playfield the snake lives on.
#[derive(Debug, Clone, Copy)]
pub struct Border {
    pub size: i32,
}

impl Border {
    pub fn new(size: i32) -> Self {
        Self { size }
    }

    pub fn is_inside(&self, cell: Cell) -> bool {
        cell.x >= 0 && cell.y >= 0 && cell.x < self.size && cell.y < self.size
    }

    /// every cell of the field, column by column
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        (0..self.size).flat_map(move |x| (0..self.size).map(move |y| Cell::new(x, y)))
    }
}

impl Default for Border {
    fn default() -> Self {
        Self::new(GRID_SIZE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn edges() {
        let border = Border::default();
        assert!(border.is_inside(Cell::new(0, 0)));
        assert!(border.is_inside(Cell::new(19, 19)));
        assert!(!border.is_inside(Cell::new(-1, 10)));
        assert!(!border.is_inside(Cell::new(10, 20)));
    }

    #[test]
    fn enumerates_whole_field() {
        let border = Border::default();
        assert_eq!(border.cells().count(), 400);
        assert!(border.cells().all(|c| border.is_inside(c)));
    }
}
