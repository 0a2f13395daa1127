use crate::basic::Dir;
use ggez::input::keyboard::KeyCode::{self, *};

/// What a key press asks the game to do
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Command {
    Turn(Dir),
    Restart,
    TogglePause,
    ToggleBorder,
    /// Leave the game loop
    Quit,
}

/// Keys that steer the snake
#[derive(Copy, Clone, Debug)]
pub struct Controls {
    pub u: KeyCode,
    pub d: KeyCode,
    pub l: KeyCode,
    pub r: KeyCode,
}

impl Default for Controls {
    fn default() -> Self {
        Self::ARROWS
    }
}

impl Controls {
    pub const ARROWS: Self = Self { u: Up, d: Down, l: Left, r: Right };

    pub fn command(&self, key: KeyCode) -> Option<Command> {
        let command = match key {
            k if k == self.u => Command::Turn(Dir::U),
            k if k == self.d => Command::Turn(Dir::D),
            k if k == self.l => Command::Turn(Dir::L),
            k if k == self.r => Command::Turn(Dir::R),
            R => Command::Restart,
            Space => Command::TogglePause,
            B => Command::ToggleBorder,
            Escape => Command::Quit,
            _ => return None,
        };
        Some(command)
    }
}

#[test]
fn test_arrow_controls() {
    let controls = Controls::default();
    assert_eq!(controls.command(Up), Some(Command::Turn(Dir::U)));
    assert_eq!(controls.command(Left), Some(Command::Turn(Dir::L)));
    assert_eq!(controls.command(Escape), Some(Command::Quit));
    assert_eq!(controls.command(R), Some(Command::Restart));
    assert_eq!(controls.command(W), None);
}

#[test]
fn test_custom_controls() {
    let controls = Controls { u: W, d: S, l: A, r: D };
    assert_eq!(controls.command(W), Some(Command::Turn(Dir::U)));
    assert_eq!(controls.command(D), Some(Command::Turn(Dir::R)));
    assert_eq!(controls.command(Up), None);
    assert_eq!(controls.command(Space), Some(Command::TogglePause));
}
