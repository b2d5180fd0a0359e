//! Turns a [`GameState`] into drawing calls on any [`Canvas`].

use crate::game::GameState;
use crate::utils::Cell;

#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct Rgba(pub [u8; 4]);

pub const BACKGROUND: Rgba = Rgba([0x00, 0x00, 0x00, 0xFF]);
pub const GRID_LINE: Rgba = Rgba([0x33, 0x33, 0x33, 0xFF]);
pub const SNAKE: Rgba = Rgba([0x00, 0xFF, 0x00, 0xFF]);
pub const FOOD: Rgba = Rgba([0xFF, 0x00, 0x00, 0xFF]);
pub const TEXT: Rgba = Rgba([0xFF, 0xFF, 0xFF, 0xFF]);
pub const HINT: Rgba = Rgba([0xAA, 0xAA, 0xAA, 0xFF]);

/// Where a line of text goes on the frame.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Placement {
    TopLeft,
    TopRight,
    /// horizontally centered, `n` lines below (or above, if negative) the middle
    Centered(i32),
}

/// Minimal drawing surface the renderer needs.
pub trait Canvas {
    fn clear(&mut self, color: Rgba);
    fn draw_grid(&mut self, color: Rgba);
    fn fill_cell(&mut self, cell: Cell, color: Rgba);
    fn draw_text(&mut self, text: &str, placement: Placement, color: Rgba);
}

/// Paints one full frame. Only reads the state, so painting twice gives the same frame.
pub fn render<C: Canvas + ?Sized>(game: &GameState, canvas: &mut C) {
    canvas.clear(BACKGROUND);
    canvas.draw_grid(GRID_LINE);

    for segment in game.snake().body() {
        canvas.fill_cell(*segment, SNAKE);
    }
    canvas.fill_cell(game.food(), FOOD);

    canvas.draw_text(&format!("Score: {}", game.score()), Placement::TopLeft, TEXT);
    canvas.draw_text(game.difficulty().name(), Placement::TopRight, HINT);

    if game.is_game_over() {
        canvas.draw_text(&format!("Game Over! Score: {}", game.score()), Placement::Centered(0), TEXT);
        canvas.draw_text("(R to restart)", Placement::Centered(1), HINT);
    }
}
