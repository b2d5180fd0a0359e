use std::time::Duration;

use log::{debug, info};
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::Deserialize;

use crate::border::Border;
use crate::food::Food;
use crate::snake::{Direction, Snake};
use crate::utils::Cell;

const POINTS_PER_FOOD: u32 = 10;

/// Game speed. Each level maps to a fixed tick interval.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

impl Difficulty {
    pub fn interval(&self) -> Duration {
        match self {
            Difficulty::Easy => Duration::from_millis(150),
            Difficulty::Medium => Duration::from_millis(100),
            Difficulty::Hard => Duration::from_millis(50),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }
}

/// What a single tick did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    Moved,
    Ate,
    Crashed,
    /// game already over, nothing moved
    Idle,
}

pub struct GameState {
    border: Border,
    snake: Snake,
    food: Food,
    direction: Direction,
    pending: Direction,
    game_over: bool,
    score: u32,
    difficulty: Difficulty,
    rng: StdRng,
}

impl GameState {
    pub fn new(difficulty: Difficulty) -> Self {
        Self::with_rng(difficulty, StdRng::from_entropy())
    }

    /// reproducible food placement
    pub fn with_seed(difficulty: Difficulty, seed: u64) -> Self {
        Self::with_rng(difficulty, StdRng::seed_from_u64(seed))
    }

    fn with_rng(difficulty: Difficulty, rng: StdRng) -> Self {
        let mut game = GameState {
            border: Border::default(),
            snake: Snake::new(Cell::center()),
            food: Food::new(),
            direction: Direction::Right,
            pending: Direction::Right,
            game_over: false,
            score: 0,
            difficulty,
            rng,
        };
        game.new_game();
        game
    }

    /// Fresh snake in the middle heading right, score 0, new food.
    /// Difficulty is left as selected.
    pub fn new_game(&mut self) {
        self.snake = Snake::new(Cell::center());
        self.direction = Direction::Right;
        self.pending = Direction::Right;
        self.game_over = false;
        self.score = 0;
        self.food.respawn(&self.snake, &self.border, &mut self.rng);
        info!("new game on {} ({} ms per tick)", self.difficulty.name(), self.interval().as_millis());
    }

    /// Changes the tick interval. Picking a difficulty while dead starts a new game.
    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        if difficulty != self.difficulty {
            info!("difficulty {} -> {}", self.difficulty.name(), difficulty.name());
        }
        self.difficulty = difficulty;
        if self.game_over {
            self.new_game();
        }
    }

    /// Buffers the next direction; a straight reversal of the current one is ignored.
    pub fn request_direction(&mut self, direction: Direction) {
        if direction != self.direction.opposite() {
            self.pending = direction;
        }
    }

    /// no-op while the game is running
    pub fn restart(&mut self) {
        if self.game_over {
            self.new_game();
        }
    }

    /// Advances the game by one step.
    pub fn tick(&mut self) -> TickOutcome {
        if self.game_over {
            return TickOutcome::Idle;
        }

        self.direction = self.pending;
        let new_head = self.snake.next_head(self.direction);

        if !self.border.is_inside(new_head) || self.snake.contains(new_head) {
            self.game_over = true;
            info!("game over: score {} length {}", self.score, self.snake.len());
            return TickOutcome::Crashed;
        }

        if new_head == self.food.position {
            self.snake.advance(new_head, true);
            self.score += POINTS_PER_FOOD;
            if !self.food.respawn(&self.snake, &self.border, &mut self.rng) {
                info!("no empty cell left for food");
            }
            debug!("ate at {:?}, score {}, food now at {:?}", new_head, self.score, self.food.position);
            TickOutcome::Ate
        } else {
            self.snake.advance(new_head, false);
            TickOutcome::Moved
        }
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn food(&self) -> Cell {
        self.food.position
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// time between two ticks at the current difficulty
    pub fn interval(&self) -> Duration {
        self.difficulty.interval()
    }
}

#[cfg(test)]
impl GameState {
    pub fn place(&mut self, snake: &[Cell], direction: Direction, food: Cell) {
        self.snake = Snake::from_cells(snake);
        self.direction = direction;
        self.pending = direction;
        self.food.position = food;
    }
}
