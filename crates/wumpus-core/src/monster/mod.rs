//! Wumpus behaviour.
//!
//! The wumpus has exactly one reaction: when an arrow misses, it
//! wakes and shambles into a neighboring room.

use crate::cave::Hazards;
use crate::consts::CONNECTIONS_PER_ROOM;
use crate::gameloop::{GameState, HuntStatus};
use crate::messages;

/// Move the wumpus to a uniformly random neighbor of its room.
///
/// It always moves, never stays, and nothing stops it from walking
/// into the player's room; if it does, the hunt ends on the spot.
pub(crate) fn relocate_wumpus(state: &mut GameState) {
    state.message(messages::WUMPUS_MOVES);

    let slot = state.rng.rn2(CONNECTIONS_PER_ROOM as u32) as usize;
    let next = state.cave.room(state.wumpus).neighbors[slot];
    state.cave.room_mut(state.wumpus).hazards.remove(Hazards::WUMPUS);
    state.cave.room_mut(next).hazards.insert(Hazards::WUMPUS);
    state.wumpus = next;

    if state.wumpus == state.player {
        state.status = HuntStatus::PlayerEaten;
    }
}
