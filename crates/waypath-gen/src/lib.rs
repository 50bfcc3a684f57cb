//! Random models for the waypath searches: mazes with scattered walls and
//! cities with a central depot.

pub mod citygen;
pub mod config;
pub mod mazegen;

pub use citygen::CityGen;
pub use config::{CityConfig, GenError, MazeConfig};
pub use mazegen::MazeGen;
