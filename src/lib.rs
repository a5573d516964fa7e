pub mod algorithms;
pub mod config;
pub mod direction;
pub mod error;
pub mod grid;
pub mod mazes;
pub mod runner;
pub mod state;
pub mod statistics;
