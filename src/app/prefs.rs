use crate::app::keyboard_control::Controls;
use crate::basic::{BoardDim, BoardError};
use crate::snake::SnakeBody;
use std::time::Duration;

pub struct Prefs {
    pub screen_width: u32,
    pub screen_height: u32,
    /// Side length of a cell in pixels
    pub cell_size: u32,

    /// Game ticks per second
    pub tick_rate: u32,
    /// See `SnakeBody::collision_skip`
    pub collision_skip: usize,

    pub controls: Controls,

    pub draw_border: bool,
    pub message_duration: Duration,
}

impl Default for Prefs {
    fn default() -> Self {
        Self {
            screen_width: 640,
            screen_height: 480,
            cell_size: 20,

            tick_rate: 20,
            collision_skip: SnakeBody::DEFAULT_COLLISION_SKIP,

            controls: Controls::default(),

            draw_border: true,
            message_duration: Duration::from_secs(2),
        }
    }
}

// builder
impl Prefs {
    pub fn cell_size(mut self, cell_size: u32) -> Self {
        self.cell_size = cell_size;
        self
    }

    pub fn collision_skip(mut self, collision_skip: usize) -> Self {
        self.collision_skip = collision_skip;
        self
    }

    pub fn board_dim(&self) -> Result<BoardDim, BoardError> {
        BoardDim::from_screen(self.screen_width, self.screen_height, self.cell_size)
    }
}

#[test]
fn test_default_board() {
    let prefs = Prefs::default();
    assert_eq!(prefs.board_dim(), BoardDim::new(32, 24));
    assert!(Prefs::default().cell_size(1000).board_dim().is_err());
}
