use winit::event::VirtualKeyCode;

use crate::game::{Difficulty, GameState};
use crate::snake::Direction;

/// What a key press asks the game to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Turn(Direction),
    SetDifficulty(Difficulty),
    Restart,
}

impl Command {
    /// Maps a key to a command. Letter keys are reported the same with or without shift.
    pub fn from_key(key: VirtualKeyCode) -> Option<Command> {
        use VirtualKeyCode::*;

        let command = match key {
            W | Up => Command::Turn(Direction::Up),
            S | Down => Command::Turn(Direction::Down),
            A | Left => Command::Turn(Direction::Left),
            D | Right => Command::Turn(Direction::Right),
            Key1 | Numpad1 => Command::SetDifficulty(Difficulty::Easy),
            Key2 | Numpad2 => Command::SetDifficulty(Difficulty::Medium),
            Key3 | Numpad3 => Command::SetDifficulty(Difficulty::Hard),
            R => Command::Restart,
            _ => return None,
        };
        Some(command)
    }

    pub fn apply(self, game: &mut GameState) {
        match self {
            Command::Turn(direction) => game.request_direction(direction),
            Command::SetDifficulty(difficulty) => game.set_difficulty(difficulty),
            Command::Restart => game.restart(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::TickOutcome;
    use crate::utils::Cell;

    #[test]
    fn wasd_and_arrows_agree() {
        let pairs = [
            (VirtualKeyCode::W, VirtualKeyCode::Up),
            (VirtualKeyCode::A, VirtualKeyCode::Left),
            (VirtualKeyCode::S, VirtualKeyCode::Down),
            (VirtualKeyCode::D, VirtualKeyCode::Right),
        ];
        for (letter, arrow) in pairs {
            assert!(Command::from_key(letter).is_some());
            assert_eq!(Command::from_key(letter), Command::from_key(arrow));
        }
    }

    #[test]
    fn digits_select_difficulty() {
        assert_eq!(Command::from_key(VirtualKeyCode::Key1), Some(Command::SetDifficulty(Difficulty::Easy)));
        assert_eq!(Command::from_key(VirtualKeyCode::Key2), Some(Command::SetDifficulty(Difficulty::Medium)));
        assert_eq!(Command::from_key(VirtualKeyCode::Numpad3), Some(Command::SetDifficulty(Difficulty::Hard)));
        assert_eq!(Command::from_key(VirtualKeyCode::Key4), None);
    }

    #[test]
    fn other_keys_are_ignored() {
        assert_eq!(Command::from_key(VirtualKeyCode::Space), None);
        assert_eq!(Command::from_key(VirtualKeyCode::Q), None);
        assert_eq!(Command::from_key(VirtualKeyCode::R), Some(Command::Restart));
    }

    #[test]
    fn commands_reach_the_game() {
        let mut game = GameState::with_seed(Difficulty::Medium, 1);
        game.place(&[Cell::new(10, 10)], Direction::Right, Cell::new(0, 0));

        Command::Turn(Direction::Up).apply(&mut game);
        assert_eq!(game.tick(), TickOutcome::Moved);
        assert_eq!(game.snake().head(), Cell::new(10, 11));

        Command::SetDifficulty(Difficulty::Hard).apply(&mut game);
        assert_eq!(game.difficulty(), Difficulty::Hard);

        // restart does nothing while alive
        Command::Restart.apply(&mut game);
        assert_eq!(game.snake().head(), Cell::new(10, 11));
    }
}
