//! Game session: the command surface the presentation layer talks to.
//!
//! A `GameSession` owns one board, one turn manager, and one undo stack.
//! Commands:
//!
//! - `new_game`: start over with a new configuration
//! - `place`: the current player drops a marker; returns the wave list
//! - `undo`: roll back the most recent placement
//! - `query_state`: read-only snapshot of everything a renderer needs
//!
//! Every rejected command leaves the session exactly as it was. Sessions
//! are plain values with no global state, so tests can run many at once.
//! A session is not reentrant: callers serialize commands themselves.

mod game;
mod snapshot;

pub use game::GameSession;
pub use snapshot::{PlayerView, StateSnapshot};
