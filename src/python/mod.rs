//! Python bindings for the chain-reaction engine.
//!
//! This is the integration layer for front ends living outside Rust. Read
//! models cross the boundary as JSON strings, the same shape `serde`
//! produces for `StateSnapshot` and `WaveList`.
//!
//! # Quick Start
//!
//! ```python
//! import json
//! import chain_reaction as cr
//!
//! game = cr.ChainReaction(size="compact", players=2)
//!
//! waves = json.loads(game.place(0, 0))
//! for wave in waves:
//!     animate(wave["explosions"], wave["board"])
//!
//! state = json.loads(game.state())
//! ```

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::core::GameError;

mod py_core;
mod py_session;

pub use py_core::*;
pub use py_session::*;

/// Surface engine rejections as `ValueError`.
fn to_py_err(err: GameError) -> PyErr {
    PyValueError::new_err(err.to_string())
}

fn to_json<T: serde::Serialize>(value: &T) -> PyResult<String> {
    serde_json::to_string(value).map_err(|e| PyValueError::new_err(format!("{}", e)))
}

/// chain_reaction: grid chain reaction game engine.
#[pymodule]
fn chain_reaction(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyPlayerId>()?;
    m.add_class::<PyChainReaction>()?;
    Ok(())
}
