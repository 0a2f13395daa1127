use std::collections::VecDeque;

use log::trace;
use rand::Rng;
use static_assertions::assert_impl_all;

pub use builder::{Builder, BuilderError};

use crate::basic::{BoardDim, Cell, Dir};

pub mod builder;

/// The snake's chain of occupied cells together with its heading.
/// This is pure game state, it knows nothing about drawing or input.
#[derive(Clone, Debug)]
pub struct SnakeBody {
    /// Head first, each segment is adjacent (modulo wrapping) to the next
    segments: VecDeque<Cell>,
    /// How many segments the snake should have, `segments` catches up
    /// one cell per `advance` when this grows
    length: usize,

    /// Direction the snake is currently going
    dir: Dir,
    /// Requested direction, committed on the next `advance`
    pending_dir: Option<Dir>,

    /// Cell vacated by the tail on the most recent `advance`
    last_removed: Option<Cell>,

    board_dim: BoardDim,
    /// Index of the first segment that the head can crash into,
    /// always at least 1 (the head can't crash into itself)
    collision_skip: usize,
}

assert_impl_all!(SnakeBody: Send, Sync, Clone);

impl SnakeBody {
    pub const DEFAULT_COLLISION_SKIP: usize = 1;

    /// A single-segment snake in the middle of the board
    pub fn new(board_dim: BoardDim, rng: &mut impl Rng) -> Self {
        let center = board_dim.center();
        Self {
            segments: VecDeque::from(vec![center]),
            length: 1,
            dir: Dir::random(rng),
            pending_dir: None,
            last_removed: None,
            board_dim,
            collision_skip: Self::DEFAULT_COLLISION_SKIP,
        }
    }

    pub fn builder() -> Builder {
        Builder::default()
    }

    pub fn head(&self) -> Cell {
        self.segments[0]
    }

    pub fn segments(&self) -> &VecDeque<Cell> {
        &self.segments
    }

    pub fn length(&self) -> usize {
        self.length
    }

    pub fn dir(&self) -> Dir {
        self.dir
    }

    pub fn pending_dir(&self) -> Option<Dir> {
        self.pending_dir
    }

    pub fn last_removed(&self) -> Option<Cell> {
        self.last_removed
    }

    pub fn board_dim(&self) -> BoardDim {
        self.board_dim
    }

    pub fn collision_skip(&self) -> usize {
        self.collision_skip
    }

    pub fn contains(&self, cell: Cell) -> bool {
        self.segments.contains(&cell)
    }

    /// Turning back onto the neck is silently ignored
    pub fn set_pending_direction(&mut self, new_dir: Dir) {
        if new_dir == -self.dir {
            trace!("rejected turn from {:?} to {:?}", self.dir, new_dir);
            return;
        }
        self.pending_dir = Some(new_dir);
    }

    /// Move one cell forward, returns the new head
    pub fn advance(&mut self) -> Cell {
        if let Some(new_dir) = self.pending_dir.take() {
            self.dir = new_dir;
        }

        let new_head = self.head().wrapping_translate(self.dir, 1, self.board_dim);
        self.segments.push_front(new_head);

        self.last_removed = if self.segments.len() > self.length {
            self.segments.pop_back()
        } else {
            None
        };

        new_head
    }

    /// Takes effect on the next `advance`, the tail stays put for one tick
    pub fn grow(&mut self) {
        self.length += 1;
    }

    pub fn detect_self_collision(&self) -> bool {
        let head = self.head();
        self.segments
            .iter()
            .skip(self.collision_skip)
            .any(|&segment| segment == head)
    }

    pub fn reset(&mut self, rng: &mut impl Rng) {
        self.length = 1;
        self.segments.clear();
        self.segments.push_back(self.board_dim.center());
        self.dir = Dir::random(rng);
        self.pending_dir = None;
        self.last_removed = None;
    }
}
