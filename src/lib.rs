#[macro_use]
extern crate derive_more;

pub mod app;
pub mod apple;
pub mod basic;
pub mod snake;
