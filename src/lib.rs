//! Battleship domain model: positions, headings, ships, fleets and shot
//! resolution, plus text rendering and input parsing for a console driver.

mod common;
mod config;
mod fleet;
mod game;
mod heading;
pub mod input;
mod logging;
mod position;
mod ship;
pub mod ui;

pub use common::*;
pub use config::*;
pub use fleet::*;
pub use game::*;
pub use heading::*;
pub use logging::{init_logging, init_with_level, LOG_ENV};
pub use position::*;
pub use ship::*;
