//! Turn order and elimination.
//!
//! The `TurnManager` decides whose move it is, who is still in the game,
//! and when the game is over. It runs once per completed placement, after
//! the resolver has finished with the board.
//!
//! A player can only be knocked out after making their first placement;
//! until then an empty-handed player is simply waiting for their turn.

mod turns;

pub use turns::{GameStatus, PlayerStatus, TurnManager, TurnOutcome};
