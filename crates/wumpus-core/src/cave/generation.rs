//! Per-hunt hazard placement.

use crate::consts::{NUM_BATS, NUM_PITS, NUM_ROOMS};
use crate::rng::GameRng;

use super::{Cave, Hazards, RoomId};

/// Player start and wumpus rooms chosen by [`place_hazards`].
#[derive(Debug, Clone, Copy)]
pub struct Placement {
    pub player: RoomId,
    pub wumpus: RoomId,
}

/// Draw disjoint random rooms for the player start, the wumpus, the
/// bats and the pits, and set the hazard flags.
///
/// Rooms are drawn without replacement by rejection sampling, so the
/// draws are pairwise distinct and the player never starts in a
/// hazard room. Hazards may still reach the player later through
/// movement, bat drops, or wumpus relocation.
pub(crate) fn place_hazards(cave: &mut Cave, rng: &mut GameRng) -> Placement {
    let mut drawn: Vec<usize> = Vec::with_capacity(2 + NUM_BATS + NUM_PITS);
    for _ in 0..2 + NUM_BATS + NUM_PITS {
        let pick = rng.rn2_where(NUM_ROOMS as u32, |c| !drawn.contains(&(c as usize)));
        drawn.push(pick as usize);
    }

    let placement = Placement {
        player: RoomId(drawn[0]),
        wumpus: RoomId(drawn[1]),
    };
    cave.room_mut(placement.wumpus).hazards.insert(Hazards::WUMPUS);
    for &i in &drawn[2..2 + NUM_BATS] {
        cave.room_mut(RoomId(i)).hazards.insert(Hazards::BAT);
    }
    for &i in &drawn[2 + NUM_BATS..] {
        cave.room_mut(RoomId(i)).hazards.insert(Hazards::PIT);
    }
    placement
}
