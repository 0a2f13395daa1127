use super::dir::Dir;
use num_integer::Integer;
use std::{
    cmp::Ordering,
    fmt::{Debug, Display, Formatter},
};

// INVARIANT: a cell produced by the game is always inside its board,
// 0 <= x < width and 0 <= y < height
#[derive(Eq, PartialEq, Copy, Clone, Hash, Add, Sub)]
pub struct Cell {
    pub x: isize,
    pub y: isize,
}

impl Debug for Cell {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "<{}, {}>", self.x, self.y)
    }
}

// row-major, consistent with `BoardDim::index_of`
impl PartialOrd for Cell {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Cell {
    fn cmp(&self, other: &Self) -> Ordering {
        match self.y.cmp(&other.y) {
            Ordering::Equal => self.x.cmp(&other.x),
            ord => ord,
        }
    }
}

impl Cell {
    #[must_use]
    pub fn translate(self, dir: Dir, dist: isize) -> Self {
        let (dx, dy) = dir.delta();
        Self {
            x: self.x + dx * dist,
            y: self.y + dy * dist,
        }
    }

    /// Move one step and wrap around the board edges, the wrap is applied
    /// on both axes every time, not only when crossing an edge
    #[must_use]
    pub fn wrapping_translate(self, dir: Dir, dist: isize, board_dim: BoardDim) -> Self {
        let Self { x, y } = self.translate(dir, dist);
        Self {
            x: x.mod_floor(&board_dim.width),
            y: y.mod_floor(&board_dim.height),
        }
    }
}

#[derive(Debug, Display, Error, Eq, PartialEq)]
#[display(fmt = "invalid board dimensions {}x{}", width, height)]
pub struct BoardError {
    pub width: isize,
    pub height: isize,
}

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct BoardDim {
    pub width: isize,
    pub height: isize,
}

impl Display for BoardDim {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

impl BoardDim {
    pub fn new(width: isize, height: isize) -> Result<Self, BoardError> {
        if width <= 0 || height <= 0 {
            return Err(BoardError { width, height });
        }
        Ok(Self { width, height })
    }

    /// Number of whole cells of side `cell_size` that fit in a window,
    /// partial cells at the right and bottom edges are dropped
    pub fn from_screen(screen_width: u32, screen_height: u32, cell_size: u32) -> Result<Self, BoardError> {
        if cell_size == 0 {
            return Err(BoardError { width: 0, height: 0 });
        }
        Self::new(
            (screen_width / cell_size) as isize,
            (screen_height / cell_size) as isize,
        )
    }

    pub fn cell_count(self) -> usize {
        (self.width * self.height) as usize
    }

    pub fn center(self) -> Cell {
        Cell {
            x: self.width / 2,
            y: self.height / 2,
        }
    }

    pub fn contains(self, cell: Cell) -> bool {
        (0..self.width).contains(&cell.x) && (0..self.height).contains(&cell.y)
    }

    pub fn index_of(self, cell: Cell) -> usize {
        (cell.y * self.width + cell.x) as usize
    }

    pub fn cell_at(self, idx: usize) -> Cell {
        let idx = idx as isize;
        Cell {
            x: idx % self.width,
            y: idx / self.width,
        }
    }

    /// Every cell of the board in row-major order
    pub fn cells(self) -> impl Iterator<Item = Cell> {
        (0..self.cell_count()).map(move |idx| self.cell_at(idx))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use Dir::*;

    fn dim(width: isize, height: isize) -> BoardDim {
        BoardDim::new(width, height).unwrap()
    }

    #[test]
    fn test_wrapping_translate_edges() {
        let board = dim(4, 3);
        for (start, dir, expect) in [
            ((3, 1), R, (0, 1)),
            ((0, 1), L, (3, 1)),
            ((2, 0), U, (2, 2)),
            ((2, 2), D, (2, 0)),
            ((1, 1), R, (2, 1)),
        ] {
            let start = Cell { x: start.0, y: start.1 };
            let expect = Cell { x: expect.0, y: expect.1 };
            assert_eq!(
                start.wrapping_translate(dir, 1, board),
                expect,
                "{:?} going {:?}",
                start,
                dir
            );
        }
    }

    #[test]
    fn test_invalid_board() {
        assert_eq!(BoardDim::new(0, 5), Err(BoardError { width: 0, height: 5 }));
        assert!(BoardDim::new(3, -1).is_err());
        assert!(BoardDim::from_screen(640, 480, 0).is_err());
        assert!(BoardDim::from_screen(10, 10, 20).is_err());
    }

    #[test]
    fn test_from_screen_uses_full_grid() {
        let board = BoardDim::from_screen(640, 480, 20).unwrap();
        assert_eq!(board, dim(32, 24));
        assert_eq!(board.center(), Cell { x: 16, y: 12 });
        assert_eq!(board.cells().count(), 32 * 24);
        assert!(board.contains(Cell { x: 31, y: 23 }));
        assert!(!board.contains(Cell { x: 32, y: 0 }));
    }

    #[test]
    fn test_index_matches_order() {
        let board = dim(5, 4);
        let cells: Vec<_> = board.cells().collect();
        let mut sorted = cells.clone();
        sorted.sort_unstable();
        assert_eq!(cells, sorted);
        for (idx, cell) in cells.into_iter().enumerate() {
            assert_eq!(board.index_of(cell), idx);
        }
    }
}
