use std::collections::VecDeque;

use crate::utils::Cell;

#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// the 180° turn
    pub fn opposite(&self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    /// (dx, dy) of one step; up is +y
    pub fn delta(&self) -> (i32, i32) {
        match self {
            Direction::Up => (0, 1),
            Direction::Down => (0, -1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Snake {
    body: VecDeque<Cell>, // body[0] - head
}

impl Snake {
    /// single segment snake
    pub fn new(head: Cell) -> Snake {
        Snake { body: VecDeque::from([head]) }
    }

    pub fn head(&self) -> Cell {
        self.body[0]
    }

    pub fn body(&self) -> impl Iterator<Item = &Cell> {
        self.body.iter()
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn contains(&self, cell: Cell) -> bool {
        self.body.contains(&cell)
    }

    /// Cell the head would move to next.
    pub fn next_head(&self, direction: Direction) -> Cell {
        self.head().offset(direction.delta())
    }

    // Pushes a new head. Unless growing, the tail is dropped so the length stays the same.
    pub fn advance(&mut self, new_head: Cell, grow: bool) {
        self.body.push_front(new_head);
        if !grow {
            self.body.pop_back();
        }
    }
}

#[cfg(test)]
impl Snake {
    pub fn from_cells(cells: &[Cell]) -> Snake {
        Snake { body: cells.iter().copied().collect() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opposites() {
        for d in [Direction::Up, Direction::Down, Direction::Left, Direction::Right] {
            assert_ne!(d, d.opposite());
            assert_eq!(d, d.opposite().opposite());
            let (dx, dy) = d.delta();
            let (ox, oy) = d.opposite().delta();
            assert_eq!((dx + ox, dy + oy), (0, 0));
        }
    }

    #[test]
    fn advance_keeps_length_unless_growing() {
        let mut snake = Snake::new(Cell::new(10, 10));
        snake.advance(snake.next_head(Direction::Right), false);
        assert_eq!(snake.len(), 1);
        assert_eq!(snake.head(), Cell::new(11, 10));

        snake.advance(snake.next_head(Direction::Up), true);
        assert_eq!(snake.len(), 2);
        let cells: Vec<Cell> = snake.body().copied().collect();
        assert_eq!(cells, vec![Cell::new(11, 11), Cell::new(11, 10)]);
    }
}
