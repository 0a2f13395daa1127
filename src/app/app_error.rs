use crate::apple::NoFreeCell;
use crate::basic::BoardError;
use crate::snake;
use ggez::GameError;
use std::{
    error::Error,
    fmt,
    fmt::{Debug, Display, Formatter},
};

#[derive(Debug)]
pub enum AppErrorType {
    GameError(GameError),
    BoardError(BoardError),
    SnakeBuilderError(snake::BuilderError),
    NoFreeCell(NoFreeCell),
}

/// The second member contains a trace in reverse order
#[must_use]
pub struct AppError(AppErrorType, Vec<String>);

impl From<GameError> for AppError {
    fn from(e: GameError) -> Self {
        Self(AppErrorType::GameError(e), vec![])
    }
}

impl From<BoardError> for AppError {
    fn from(e: BoardError) -> Self {
        Self(AppErrorType::BoardError(e), vec![])
    }
}

impl From<snake::BuilderError> for AppError {
    fn from(e: snake::BuilderError) -> Self {
        Self(AppErrorType::SnakeBuilderError(e), vec![])
    }
}

impl From<NoFreeCell> for AppError {
    fn from(e: NoFreeCell) -> Self {
        Self(AppErrorType::NoFreeCell(e), vec![])
    }
}

impl AppError {
    pub fn with_trace_step<S: ToString>(mut self, s: S) -> Self {
        self.1.push(s.to_string());
        self
    }

    pub fn error_type(&self) -> &AppErrorType {
        &self.0
    }
}

impl Debug for AppError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "Error:\n{:?}\nTrace:", self.0)?;
        for t in (self.1).iter().rev() {
            writeln!(f, " in {}", t)?;
        }
        Ok(())
    }
}

impl Display for AppError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        Debug::fmt(self, f)
    }
}

impl Error for AppError {}

pub type AppResult<T = ()> = Result<T, AppError>;

pub trait AppErrorConversion {
    fn with_trace_step<S: ToString>(self, s: S) -> Self;
}

impl<T> AppErrorConversion for AppResult<T> {
    fn with_trace_step<S: ToString>(self, s: S) -> Self {
        self.map_err(|e| e.with_trace_step(s.to_string()))
    }
}

#[test]
fn test_trace_order() {
    let result: AppResult = Err(AppError::from(BoardError { width: 0, height: 0 }));
    let e = result
        .with_trace_step("Prefs::board_dim")
        .with_trace_step("Session::new")
        .unwrap_err();
    assert!(matches!(e.error_type(), AppErrorType::BoardError(_)));

    let text = e.to_string();
    let inner = text.find("Prefs::board_dim").unwrap();
    let outer = text.find("Session::new").unwrap();
    assert!(outer < inner, "{}", text);
}
