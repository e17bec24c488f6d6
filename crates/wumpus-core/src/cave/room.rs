//! Room arena entries.

use bitflags::bitflags;
use serde::{Deserialize, Serialize};

use crate::consts::CONNECTIONS_PER_ROOM;

/// Handle into the fixed room arena.
///
/// The wrapped value is the room's structural index, fixed for the
/// lifetime of the cave; only the display label moves between hunts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RoomId(pub usize);

bitflags! {
    /// Hazards occupying a room.
    #[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
    pub struct Hazards: u8 {
        const WUMPUS = 0x01;
        const BAT = 0x02;
        const PIT = 0x04;
    }
}

// Manual serde impl for Hazards
impl Serialize for Hazards {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.bits().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Hazards {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let bits = u8::deserialize(deserializer)?;
        Ok(Hazards::from_bits_truncate(bits))
    }
}

/// A single cave room.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Room {
    /// Number shown to the player; re-dealt every hunt.
    pub label: u8,

    /// Hazards currently in the room.
    pub hazards: Hazards,

    /// The three connected rooms, kept sorted by their current labels.
    pub neighbors: [RoomId; CONNECTIONS_PER_ROOM],
}

impl Room {
    pub fn has_wumpus(&self) -> bool {
        self.hazards.contains(Hazards::WUMPUS)
    }

    pub fn has_bat(&self) -> bool {
        self.hazards.contains(Hazards::BAT)
    }

    pub fn has_pit(&self) -> bool {
        self.hazards.contains(Hazards::PIT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hazard_flags_are_independent() {
        let mut hazards = Hazards::empty();
        hazards.insert(Hazards::BAT);
        hazards.insert(Hazards::PIT);
        assert!(hazards.contains(Hazards::BAT));
        assert!(hazards.contains(Hazards::PIT));
        assert!(!hazards.contains(Hazards::WUMPUS));
        hazards.remove(Hazards::BAT);
        assert!(!hazards.contains(Hazards::BAT));
        assert!(hazards.contains(Hazards::PIT));
    }

    #[test]
    fn test_hazards_serde_roundtrip() {
        let hazards = Hazards::WUMPUS | Hazards::PIT;
        let json = serde_json::to_string(&hazards).unwrap();
        let back: Hazards = serde_json::from_str(&json).unwrap();
        assert_eq!(back, hazards);
    }
}
