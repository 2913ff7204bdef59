//! This is a plugin for Bevy game engine to calculate a FlowField over a single grid using a bushfire wave propagation, extract a path from it and move an agent along that path
//!

pub mod error;
pub mod flowfields;
pub mod plugin;

pub mod prelude;
