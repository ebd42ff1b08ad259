//! Rules engine for single-player Minesweeper on a square board.
//!
//! A [`Game`] starts with no mines. The first [`Game::reveal`] places them through a
//! [`MineSelector`] while keeping the revealed cell safe, then flood-fills through zero-count
//! cells. Everything else is queries for a presentation layer to draw from.
//!
//! The engine has no locking; hosts that share a game between tasks must serialize commands.
#![no_std]

extern crate alloc;

pub use cell::*;
pub use config::*;
pub use engine::*;
pub use error::*;
pub use grid::*;
pub use placement::*;
pub use types::*;

mod cell;
mod config;
mod engine;
mod error;
mod grid;
mod placement;
mod types;
