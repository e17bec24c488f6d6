//! wumpus-core: rules engine for a Hunt the Wumpus clone.
//!
//! This crate contains all game logic with no I/O dependencies. The
//! presentation layer reads state through [`GameState`]'s public
//! fields and accessors, submits [`Action`]s through [`Hunt::tick`],
//! and drains the narration sink between turns; nothing here blocks,
//! suspends, or draws.

pub mod action;
pub mod cave;
pub mod messages;

mod consts;
mod gameloop;
mod monster;
mod rng;

pub use action::{Action, ActionResult};
pub use cave::{Cave, Hazards, Room, RoomId};
pub use consts::*;
pub use gameloop::{GameState, Hunt, HuntStatus};
pub use rng::GameRng;
