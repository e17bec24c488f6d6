//! The cave: a fixed room graph with per-hunt labels and hazards.
//!
//! Structural adjacency is hard-coded and never changes; everything a
//! hunt mutates (labels, hazard flags) lives on the rooms themselves
//! and is re-dealt by the state machine at the start of each hunt.

pub(crate) mod generation;
mod room;

pub use room::{Hazards, Room, RoomId};

use serde::{Deserialize, Serialize};

use crate::consts::{CONNECTIONS_PER_ROOM, NUM_ROOMS, ROOM_CONNECTIONS};
use crate::rng::GameRng;

/// The fixed arena of [`NUM_ROOMS`] rooms.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Cave {
    /// Rooms indexed by structural index ([`RoomId`]).
    pub rooms: [Room; NUM_ROOMS],
}

impl Cave {
    /// Build the arena from the hard-coded adjacency table, labels
    /// 1..=20 in structural order. Labels are re-dealt (and neighbor
    /// order fixed up) when a hunt starts.
    pub fn new() -> Self {
        let rooms = std::array::from_fn(|i| Room {
            label: (i + 1) as u8,
            hazards: Hazards::empty(),
            neighbors: ROOM_CONNECTIONS[i].map(RoomId),
        });
        Self { rooms }
    }

    pub fn room(&self, id: RoomId) -> &Room {
        &self.rooms[id.0]
    }

    pub fn room_mut(&mut self, id: RoomId) -> &mut Room {
        &mut self.rooms[id.0]
    }

    /// The room currently labeled `label`, if the label is in range.
    pub fn room_with_label(&self, label: u8) -> Option<RoomId> {
        self.rooms.iter().position(|r| r.label == label).map(RoomId)
    }

    /// The neighbor of `id` currently labeled `label`.
    pub fn neighbor_with_label(&self, id: RoomId, label: u8) -> Option<RoomId> {
        self.room(id)
            .neighbors
            .iter()
            .copied()
            .find(|&n| self.room(n).label == label)
    }

    /// Whether `label` names a room adjacent to `id`.
    pub fn is_adjacent(&self, id: RoomId, label: u8) -> bool {
        self.neighbor_with_label(id, label).is_some()
    }

    /// The labels on the three rooms adjacent to `id`, in display
    /// order.
    pub fn neighbor_labels(&self, id: RoomId) -> [u8; CONNECTIONS_PER_ROOM] {
        self.room(id).neighbors.map(|n| self.room(n).label)
    }

    /// Clear every hazard flag in the cave.
    pub(crate) fn reset_hazards(&mut self) {
        for room in &mut self.rooms {
            room.hazards = Hazards::empty();
        }
    }

    /// Deal a fresh uniform random permutation of labels over the
    /// structural indices, then re-sort neighbor lists by the new
    /// labels. Without the re-sort, the enumeration order of adjacent
    /// rooms would expose the fixed topology across hunts.
    pub(crate) fn shuffle_labels(&mut self, rng: &mut GameRng) {
        for i in 0..NUM_ROOMS {
            let j = i + rng.rn2((NUM_ROOMS - i) as u32) as usize;
            let label = self.rooms[i].label;
            self.rooms[i].label = self.rooms[j].label;
            self.rooms[j].label = label;
        }
        self.sort_neighbors();
    }

    fn sort_neighbors(&mut self) {
        let labels: [u8; NUM_ROOMS] = std::array::from_fn(|i| self.rooms[i].label);
        for room in &mut self.rooms {
            room.neighbors.sort_by_key(|n| labels[n.0]);
        }
    }
}

impl Default for Cave {
    fn default() -> Self {
        Self::new()
    }
}
