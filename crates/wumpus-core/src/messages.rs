//! Fixed narration lines.
//!
//! Each distinct game event maps to exactly one of these strings.
//! They are a stable contract with the presentation layer: front ends
//! may match on them, so changing one is a breaking change.

use crate::consts::{CONNECTIONS_PER_ROOM, NUM_BATS, NUM_PITS, NUM_ROOMS};

/// The wumpus is in an adjacent room.
pub const WUMPUS_ADJACENT: &str = "You smell the wumpus!";

/// A giant bat is in an adjacent room.
pub const BAT_ADJACENT: &str = "You hear flapping!";

/// An adjacent room holds a bottomless pit.
pub const PIT_ADJACENT: &str = "You feel a breeze!";

/// Terminal: an arrow found the wumpus.
pub const WUMPUS_SLAIN: &str = "Congratulations, you have slain the wumpus!";

/// Terminal: the player shared a room with the wumpus.
pub const PLAYER_EATEN: &str = "You have been eaten by the wumpus!";

/// A bat is throwing the player into a random room.
pub const CARRIED_AWAY: &str = "You are carried away by a bat!";

/// Terminal: the player entered a pit room.
pub const PLAYER_FELL: &str = "You have fallen into a bottomless pit!";

/// Terminal: the arrow curled back into the shooter's room.
pub const PLAYER_SHOT: &str = "You have been hit with your own arrow!";

/// Terminal: the player abandoned the hunt.
pub const PLAYER_QUIT: &str = "You flee the cave!";

/// The wumpus relocated after a missed shot.
pub const WUMPUS_MOVES: &str = "You hear the sound of the wumpus moving!";

/// Rules text shown by front ends before a hunt.
///
/// Built from the game constants and the nearby-hazard lines so that
/// every front end describes the same cave.
pub fn game_info() -> String {
    format!(
        "Welcome to Hunt the Wumpus.\n\
         Your job is to slay the wumpus living in the cave using bow and arrow.\n\
         Each of the {NUM_ROOMS} rooms is connected to {CONNECTIONS_PER_ROOM} other rooms by dark tunnels.\n\
         In addition to the wumpus, the cave has two hazards: bottomless pits and\n\
         giant bats. If you enter a room with a bottomless pit, it's the end of the\n\
         game for you. If you enter a room with a bat, the bat picks you up and\n\
         drops you into another room. If you enter the room with the wumpus or he\n\
         enters yours, he eats you. There are {NUM_PITS} pits and {NUM_BATS} bats in the cave.\n\
         When you enter a room you will be told if a hazard is nearby:\n\
         \x20   \"{WUMPUS_ADJACENT}\": It's in an adjacent room.\n\
         \x20   \"{PIT_ADJACENT}\": One of the adjacent rooms is a bottomless pit.\n\
         \x20   \"{BAT_ADJACENT}\": A giant bat is in an adjacent room.\n"
    )
}
