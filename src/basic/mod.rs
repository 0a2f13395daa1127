pub use cell::{BoardDim, BoardError, Cell};
pub use dir::Dir;

pub mod board;
mod cell;
mod dir;
