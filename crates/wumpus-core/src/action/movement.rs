//! Player movement and the hazard resolution loop.

use crate::cave::{Hazards, RoomId};
use crate::consts::NUM_ROOMS;
use crate::gameloop::{GameState, HuntStatus};
use crate::messages;

/// Walk the player into the adjacent room labeled `target`, then
/// resolve whatever is waiting there.
///
/// The caller must have checked [`GameState::can_move`] first; this
/// performs no validation of its own.
pub(crate) fn do_move(state: &mut GameState, target: u8) {
    if let Some(next) = state.cave.neighbor_with_label(state.player, target) {
        state.player = next;
    }
    resolve_room_hazards(state);
}

/// Re-check the player's room until it is hazard free or the hunt
/// ended.
///
/// The wumpus outranks a pit in the same room. A bat room throws the
/// player into a uniformly random room anywhere in the cave (possibly
/// the same one, another bat room, a pit room, or the wumpus's room),
/// and the chain repeats from the landing room.
pub(crate) fn resolve_room_hazards(state: &mut GameState) {
    loop {
        let hazards = state.cave.room(state.player).hazards;
        if hazards.contains(Hazards::WUMPUS) {
            state.status = HuntStatus::PlayerEaten;
            return;
        }
        if hazards.contains(Hazards::PIT) {
            state.status = HuntStatus::PlayerFell;
            return;
        }
        if hazards.contains(Hazards::BAT) {
            state.message(messages::CARRIED_AWAY);
            state.player = RoomId(state.rng.rn2(NUM_ROOMS as u32) as usize);
            continue;
        }
        break;
    }
}
