//! Arrow flight resolution.

use crate::cave::{Cave, RoomId};
use crate::consts::{ARROW_RANGE, CONNECTIONS_PER_ROOM};
use crate::gameloop::{GameState, HuntStatus};
use crate::monster;
use crate::rng::GameRng;

/// Fire an arrow along the desired `path` of room labels.
///
/// The caller must have checked [`GameState::can_shoot`] first. The
/// arrow is spent as soon as the shot is accepted, whatever happens
/// to it in flight. Flight stops the instant it finds the wumpus or
/// curls back into the shooter's room; a full-range miss wakes the
/// wumpus instead.
pub(crate) fn do_shoot(state: &mut GameState, path: &[u8]) {
    state.arrows -= 1;

    let mut previous: Option<RoomId> = None;
    let mut current = state.player;
    for hop in 0..ARROW_RANGE {
        let target = path.get(hop).copied().unwrap_or(0);
        let next = next_room_for_flight(&state.cave, previous, current, target, &mut state.rng);
        previous = Some(current);
        current = next;
        if state.cave.room(current).has_wumpus() {
            state.status = HuntStatus::WumpusSlain;
            return;
        }
        if current == state.player {
            state.status = HuntStatus::PlayerShot;
            return;
        }
    }
    monster::relocate_wumpus(state);
}

/// Pick the next room for one hop of arrow flight.
///
/// The desired target is followed when it names a neighbor of the
/// current room other than the room the arrow came from; any other
/// target deflects the arrow to a uniformly random neighbor, never
/// straight back. The first hop has no previous room, so nothing is
/// excluded there.
fn next_room_for_flight(
    cave: &Cave,
    previous: Option<RoomId>,
    current: RoomId,
    target: u8,
    rng: &mut GameRng,
) -> RoomId {
    let reverses = previous.is_some_and(|p| cave.room(p).label == target);
    if !reverses {
        if let Some(next) = cave.neighbor_with_label(current, target) {
            return next;
        }
    }
    let neighbors = cave.room(current).neighbors;
    let slot = rng.rn2_where(CONNECTIONS_PER_ROOM as u32, |s| {
        previous != Some(neighbors[s as usize])
    });
    neighbors[slot as usize]
}
