use log::debug;
use rand::Rng;
use static_assertions::assert_impl_all;

use crate::basic::board::{get_occupied_cells, random_free_spot};
use crate::basic::{BoardDim, Cell};

/// Result of trying to move the apple
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
#[must_use]
pub enum Relocation {
    Placed(Cell),
    /// Every cell is excluded, nowhere left to put the apple
    BoardFull,
}

#[derive(Debug, Display, Error, Eq, PartialEq)]
#[display(fmt = "no free cell left on the board")]
pub struct NoFreeCell;

#[derive(Clone, Debug)]
pub struct ApplePlacer {
    pos: Cell,
    board_dim: BoardDim,
}

assert_impl_all!(ApplePlacer: Send, Sync, Clone);

impl ApplePlacer {
    /// Place the first apple, fails if `excluded` covers the board
    pub fn new<'a>(
        board_dim: BoardDim,
        excluded: impl IntoIterator<Item = &'a Cell>,
        rng: &mut impl Rng,
    ) -> Result<Self, NoFreeCell> {
        let mut placer = Self {
            pos: board_dim.center(),
            board_dim,
        };
        match placer.relocate(excluded, rng) {
            Relocation::Placed(_) => Ok(placer),
            Relocation::BoardFull => Err(NoFreeCell),
        }
    }

    pub fn pos(&self) -> Cell {
        self.pos
    }

    pub fn board_dim(&self) -> BoardDim {
        self.board_dim
    }

    /// Move the apple to a uniformly random cell outside of `excluded`.
    /// The free cell is sampled directly so this never spins, even on
    /// an almost full board. The apple stays where it is on `BoardFull`.
    pub fn relocate<'a>(
        &mut self,
        excluded: impl IntoIterator<Item = &'a Cell>,
        rng: &mut impl Rng,
    ) -> Relocation {
        let occupied_cells = get_occupied_cells(excluded, self.board_dim);
        match random_free_spot(&occupied_cells, self.board_dim, rng) {
            Some(pos) => {
                debug!("apple moved from {:?} to {:?}", self.pos, pos);
                self.pos = pos;
                Relocation::Placed(pos)
            }
            None => Relocation::BoardFull,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use itertools::Itertools;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn test_relocate_avoids_excluded() {
        let board = BoardDim::new(6, 5).unwrap();
        let mut rng = StdRng::seed_from_u64(11);
        let mut apple = ApplePlacer::new(board, std::iter::empty(), &mut rng).unwrap();

        for round in 0..board.cell_count() - 1 {
            // a growing proper subset of the board
            let excluded = board.cells().take(round + 1).collect_vec();
            for _ in 0..20 {
                match apple.relocate(&excluded, &mut rng) {
                    Relocation::Placed(pos) => {
                        assert!(!excluded.contains(&pos), "{:?} is excluded", pos);
                        assert_eq!(apple.pos(), pos);
                    }
                    Relocation::BoardFull => panic!("board is not full after {} cells", round + 1),
                }
            }
        }
    }

    #[test]
    fn test_relocate_unordered_with_duplicates() {
        let board = BoardDim::new(2, 2).unwrap();
        let mut rng = StdRng::seed_from_u64(2);
        let mut apple = ApplePlacer::new(board, std::iter::empty(), &mut rng).unwrap();
        let excluded = [
            Cell { x: 1, y: 1 },
            Cell { x: 0, y: 0 },
            Cell { x: 1, y: 1 },
            Cell { x: 1, y: 0 },
            Cell { x: 9, y: 9 },
        ];
        assert_eq!(apple.relocate(&excluded, &mut rng), Relocation::Placed(Cell { x: 0, y: 1 }));
    }

    #[test]
    fn test_board_full() {
        let board = BoardDim::new(3, 3).unwrap();
        let mut rng = StdRng::seed_from_u64(9);
        let mut apple = ApplePlacer::new(board, &[Cell { x: 0, y: 0 }], &mut rng).unwrap();
        let before = apple.pos();

        let everything = board.cells().collect_vec();
        assert_eq!(apple.relocate(&everything, &mut rng), Relocation::BoardFull);
        assert_eq!(apple.pos(), before);

        assert_eq!(ApplePlacer::new(board, &everything, &mut rng).unwrap_err(), NoFreeCell);
    }
}
