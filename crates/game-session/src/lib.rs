//! Collaborator layer around the 2048 board engine: a move-at-a-time game
//! session, a persistent high-score store, and TOML configuration for the
//! self-play runner binary.

pub mod config;
pub mod scores;
pub mod session;
