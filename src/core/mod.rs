//! Core utilities shared by every system: logging macros, the bounds-check
//! macro used in hot column loops, and the frame RNG.

#[macro_use]
pub mod utils;

pub use utils::random::SimRng;
