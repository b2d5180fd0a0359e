use rand::Rng;
use rand::seq::SliceRandom;

use crate::border::Border;
use crate::snake::Snake;
use crate::utils::Cell;

#[derive(Debug, Clone, Copy)]
pub struct Food {
    pub position: Cell,
}

impl Food {
    pub fn new() -> Self {
        Self { position: Cell::new(0, 0) }
    }

    /// Moves the food to a uniformly random cell the snake does not occupy.
    /// Returns false and keeps the old position when the snake fills the field.
    pub fn respawn<R: Rng + ?Sized>(&mut self, snake: &Snake, border: &Border, rng: &mut R) -> bool {
        let empty: Vec<Cell> = border.cells().filter(|cell| !snake.contains(*cell)).collect();

        match empty.choose(rng) {
            Some(cell) => {
                self.position = *cell;
                true
            }
            None => false,
        }
    }
}

impl Default for Food {
    fn default() -> Self {
        Self::new()
    }
}
