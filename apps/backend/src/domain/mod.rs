//! Domain layer: pure game logic types and helpers.

pub mod board;
pub mod coin;
pub mod coordinate;
pub mod game;
pub mod player_view;

#[cfg(test)]
mod tests_game;
#[cfg(test)]
mod tests_props;
#[cfg(test)]
mod tests_view;

// Re-exports for ergonomics
pub use board::{Board, Mark};
pub use coin::{ChaChaCoin, FairCoin, FixedCoin};
pub use coordinate::Coordinate;
pub use game::{Game, GameStatus, Player};
pub use player_view::{project_all_views, project_view, PlayerView, ViewAction};
