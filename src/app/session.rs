use std::cmp::max;

use log::{debug, info, warn};
use rand::Rng;

use crate::app::app_error::{AppError, AppErrorConversion, AppResult};
use crate::app::prefs::Prefs;
use crate::apple::{ApplePlacer, Relocation};
use crate::basic::{BoardDim, Dir};
use crate::snake::SnakeBody;

/// What happened during a single tick
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum TickOutcome {
    Moved,
    /// The apple was eaten and moved elsewhere
    Ate,
    /// The snake ran into itself and was reset
    Crashed,
    /// The snake covers the whole board, nothing moves anymore
    Won,
}

/// Everything one game needs, owned in one place so that the game
/// loop and tests drive the exact same logic
pub struct Session<R: Rng> {
    board_dim: BoardDim,
    snake: SnakeBody,
    apple: ApplePlacer,

    /// Longest length reached since the program started
    record: usize,
    won: bool,

    rng: R,
}

impl<R: Rng> Session<R> {
    pub fn new(prefs: &Prefs, mut rng: R) -> AppResult<Self> {
        let board_dim = prefs.board_dim().map_err(AppError::from).with_trace_step("Session::new")?;

        let snake = SnakeBody::builder()
            .board_dim(board_dim)
            .pos(board_dim.center())
            .dir(Dir::random(&mut rng))
            .collision_skip(prefs.collision_skip)
            .build()
            .map_err(AppError::from)
            .with_trace_step("Session::new")?;

        let apple = ApplePlacer::new(board_dim, snake.segments(), &mut rng)
            .map_err(AppError::from)
            .with_trace_step("Session::new")?;

        info!("new {} game", board_dim);

        Ok(Self {
            board_dim,
            snake,
            apple,
            record: 1,
            won: false,
            rng,
        })
    }

    pub fn board_dim(&self) -> BoardDim {
        self.board_dim
    }

    pub fn snake(&self) -> &SnakeBody {
        &self.snake
    }

    pub fn apple(&self) -> &ApplePlacer {
        &self.apple
    }

    pub fn record(&self) -> usize {
        self.record
    }

    pub fn is_won(&self) -> bool {
        self.won
    }

    /// Window caption with the current and best length
    pub fn caption(&self) -> String {
        format!(
            "Exit -> esc. Record = {}. Current = {}",
            self.record,
            self.snake.length()
        )
    }

    pub fn request_turn(&mut self, dir: Dir) {
        self.snake.set_pending_direction(dir);
    }

    pub fn tick(&mut self) -> TickOutcome {
        if self.won {
            return TickOutcome::Won;
        }

        let head = self.snake.advance();

        if head == self.apple.pos() {
            self.snake.grow();
            self.record = max(self.record, self.snake.length());
            debug!("ate apple at {:?}, length {}", head, self.snake.length());
            match self.apple.relocate(self.snake.segments(), &mut self.rng) {
                Relocation::Placed(_) => TickOutcome::Ate,
                Relocation::BoardFull => {
                    info!("board filled at length {}", self.snake.length());
                    self.won = true;
                    TickOutcome::Won
                }
            }
        } else if self.snake.detect_self_collision() {
            info!("crashed at {:?} with length {}", head, self.snake.length());
            self.restart();
            TickOutcome::Crashed
        } else {
            TickOutcome::Moved
        }
    }

    /// Back to a single segment in the center, the record is kept
    pub fn restart(&mut self) {
        self.snake.reset(&mut self.rng);
        self.won = false;
        match self.apple.relocate(self.snake.segments(), &mut self.rng) {
            Relocation::Placed(_) => {}
            Relocation::BoardFull => warn!("no room for an apple after reset"),
        }
        debug_assert!(!self.snake.contains(self.apple.pos()));
    }
}
