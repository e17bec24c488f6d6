//! Fixed cave and hunt constants.

/// Rooms in the cave.
pub const NUM_ROOMS: usize = 20;

/// Tunnels leaving each room.
pub const CONNECTIONS_PER_ROOM: usize = 3;

/// Structural adjacency: `ROOM_CONNECTIONS[i]` lists the structural
/// indices reachable from room `i`. The relation is symmetric,
/// degree 3 (a dodecahedral cave), and never changes at runtime.
pub const ROOM_CONNECTIONS: [[usize; CONNECTIONS_PER_ROOM]; NUM_ROOMS] = [
    [1, 4, 5],
    [2, 0, 7],
    [3, 1, 9],
    [4, 2, 11],
    [0, 3, 13],
    [6, 14, 0],
    [7, 5, 15],
    [8, 6, 1],
    [9, 7, 16],
    [10, 8, 2],
    [11, 9, 17],
    [12, 10, 3],
    [13, 11, 18],
    [14, 12, 4],
    [5, 13, 19],
    [16, 19, 6],
    [17, 15, 8],
    [18, 16, 10],
    [19, 17, 12],
    [15, 18, 14],
];

/// Giant bats placed per hunt.
pub const NUM_BATS: usize = 2;

/// Bottomless pits placed per hunt.
pub const NUM_PITS: usize = 2;

/// Rooms an arrow can traverse in a single shot.
pub const ARROW_RANGE: usize = 3;

/// Arrows in the quiver at the start of a hunt.
pub const NUM_ARROWS: u32 = 5;
