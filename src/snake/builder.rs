use super::*;
use std::fmt::{Display, Formatter};

#[derive(Debug, Error)]
#[must_use]
pub struct BuilderError(pub Box<Builder>, pub &'static str);

impl Display for BuilderError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "snake builder error: {}", self.1)?;
        writeln!(f, "builder: {:?}", self.0)
    }
}

/// Builds a `SnakeBody` in an arbitrary state, either a single
/// segment (`pos`) or a whole chain (`segments`, head first)
#[derive(Default, Clone, Debug)]
pub struct Builder {
    pub board_dim: Option<BoardDim>,

    pub pos: Option<Cell>,
    pub segments: Option<Vec<Cell>>,
    pub dir: Option<Dir>,
    pub len: Option<usize>,

    pub collision_skip: Option<usize>,
}

impl Builder {
    #[inline(always)]
    #[must_use]
    pub fn board_dim(mut self, value: BoardDim) -> Self {
        self.board_dim = Some(value);
        self
    }

    #[inline(always)]
    #[must_use]
    pub fn pos(mut self, value: Cell) -> Self {
        self.pos = Some(value);
        self
    }

    #[inline(always)]
    #[must_use]
    pub fn segments(mut self, value: Vec<Cell>) -> Self {
        self.segments = Some(value);
        self
    }

    #[inline(always)]
    #[must_use]
    pub fn dir(mut self, value: Dir) -> Self {
        self.dir = Some(value);
        self
    }

    /// Target length, defaults to the number of segments
    #[inline(always)]
    #[must_use]
    pub fn len(mut self, value: usize) -> Self {
        self.len = Some(value);
        self
    }

    #[inline(always)]
    #[must_use]
    pub fn collision_skip(mut self, value: usize) -> Self {
        self.collision_skip = Some(value);
        self
    }

    fn error(&self, message: &'static str) -> BuilderError {
        BuilderError(Box::new(self.clone()), message)
    }

    pub fn build(&self) -> Result<SnakeBody, BuilderError> {
        let board_dim = self
            .board_dim
            .ok_or_else(|| self.error("missing field `board_dim`"))?;
        let dir = self.dir.ok_or_else(|| self.error("missing field `dir`"))?;

        let segments: VecDeque<Cell> = match (&self.segments, self.pos) {
            (Some(_), Some(_)) => return Err(self.error("both `pos` and `segments` set")),
            (Some(segments), None) => segments.iter().copied().collect(),
            (None, Some(pos)) => VecDeque::from(vec![pos]),
            (None, None) => return Err(self.error("missing field `pos` or `segments`")),
        };
        if segments.is_empty() {
            return Err(self.error("snake must have at least one segment"));
        }
        if !segments.iter().all(|&cell| board_dim.contains(cell)) {
            return Err(self.error("segment outside of the board"));
        }

        let length = self.len.unwrap_or(segments.len());
        if length == 0 {
            return Err(self.error("length must be at least 1"));
        }

        let collision_skip = self
            .collision_skip
            .unwrap_or(SnakeBody::DEFAULT_COLLISION_SKIP);
        if collision_skip == 0 {
            return Err(self.error("`collision_skip` must be at least 1"));
        }

        Ok(SnakeBody {
            segments,
            length,
            dir,
            pending_dir: None,
            last_removed: None,
            board_dim,
            collision_skip,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board() -> BoardDim {
        BoardDim::new(6, 6).unwrap()
    }

    #[test]
    fn test_build_single_segment() {
        let snake = Builder::default()
            .board_dim(board())
            .pos(Cell { x: 1, y: 4 })
            .dir(Dir::L)
            .len(3)
            .build()
            .unwrap();
        assert_eq!(snake.head(), Cell { x: 1, y: 4 });
        assert_eq!(snake.length(), 3);
        assert_eq!(snake.dir(), Dir::L);
    }

    #[test]
    fn test_build_errors() {
        let valid = Builder::default().board_dim(board()).pos(Cell { x: 0, y: 0 }).dir(Dir::U);
        assert!(valid.build().is_ok());

        for (builder, message) in [
            (Builder::default().pos(Cell { x: 0, y: 0 }).dir(Dir::U), "missing field `board_dim`"),
            (valid.clone().segments(vec![]), "both `pos` and `segments` set"),
            (
                Builder::default().board_dim(board()).segments(vec![]).dir(Dir::U),
                "snake must have at least one segment",
            ),
            (valid.clone().pos(Cell { x: 6, y: 0 }), "segment outside of the board"),
            (valid.clone().len(0), "length must be at least 1"),
            (valid.clone().collision_skip(0), "`collision_skip` must be at least 1"),
        ] {
            let BuilderError(_, got) = builder.build().unwrap_err();
            assert_eq!(got, message);
        }
    }
}
