//! **wallcarver** is a perfect maze generation library: randomized depth-first
//! carving over a rectangular grid, exported as per-cell wall bitmasks.

pub mod cells;
pub mod generators;
pub mod grid;
pub mod masks;
pub mod pathing;
pub mod units;
mod utils;
