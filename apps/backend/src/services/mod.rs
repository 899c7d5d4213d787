//! Application services: command-level operations over the domain core.

pub mod games;

pub use games::GameService;
