//! The hunt state machine.
//!
//! [`GameState`] owns everything a single hunt mutates; [`Hunt`] is
//! the turn controller the presentation layer drives. Narration is
//! appended to the state-owned message sink and never read back by
//! the engine.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

use crate::action::{Action, ActionResult, movement, shoot};
use crate::cave::generation;
use crate::cave::{Cave, Hazards, Room, RoomId};
use crate::consts::NUM_ARROWS;
use crate::messages;
use crate::rng::GameRng;

/// Hunt outcome tag. `InProgress` is the only non-terminal value;
/// every other value is final until the next [`GameState::init_hunt`].
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, Display, EnumIter,
)]
pub enum HuntStatus {
    /// The hunt is still running.
    #[default]
    InProgress,
    /// The player shared a room with the wumpus.
    PlayerEaten,
    /// The player fell into a bottomless pit.
    PlayerFell,
    /// The player's own arrow curled back into his room.
    PlayerShot,
    /// An arrow found the wumpus.
    WumpusSlain,
    /// The player fled the cave.
    PlayerQuit,
}

impl HuntStatus {
    /// True for every status except `InProgress`.
    pub fn is_terminal(self) -> bool {
        self != HuntStatus::InProgress
    }
}

/// Mutable state of one hunt.
///
/// Fields are public for the read-only surface the presentation layer
/// polls between actions (hazard flags included, for debugging and
/// drawing); mutation goes through [`Hunt::tick`] or the `do_*`
/// action functions.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Room arena: fixed topology, per-hunt labels and hazards.
    pub cave: Cave,

    /// Room the player is in.
    pub player: RoomId,

    /// Room the wumpus is in; mirrors the room's hazard flag.
    pub wumpus: RoomId,

    /// Arrows left in the quiver.
    pub arrows: u32,

    /// Current outcome tag.
    pub status: HuntStatus,

    /// Accepted move/shoot actions this hunt.
    pub turns: u64,

    /// Random number generator; the seed survives serialization.
    pub rng: GameRng,

    /// Narration for the current turn; drained by the caller.
    #[serde(skip)]
    pub messages: Vec<String>,

    /// Full narration transcript of the hunt.
    #[serde(skip)]
    pub message_history: Vec<String>,
}

impl GameState {
    /// Create a fully initialized hunt driven by the given RNG.
    pub fn new(rng: GameRng) -> Self {
        let mut state = Self {
            cave: Cave::new(),
            player: RoomId(0),
            wumpus: RoomId(0),
            arrows: NUM_ARROWS,
            status: HuntStatus::InProgress,
            turns: 0,
            rng,
            messages: Vec::new(),
            message_history: Vec::new(),
        };
        state.init_hunt();
        state
    }

    /// Reset everything for a fresh hunt: clean rooms, a new label
    /// permutation, freshly placed hazards, a full quiver. Callable
    /// from any state, terminal or not.
    pub fn init_hunt(&mut self) {
        self.status = HuntStatus::InProgress;
        self.arrows = NUM_ARROWS;
        self.turns = 0;
        self.cave.reset_hazards();
        self.cave.shuffle_labels(&mut self.rng);
        let placement = generation::place_hazards(&mut self.cave, &mut self.rng);
        self.player = placement.player;
        self.wumpus = placement.wumpus;
    }

    /// True iff the hunt has reached a terminal status.
    pub fn is_over(&self) -> bool {
        self.status.is_terminal()
    }

    /// Room the player currently occupies.
    pub fn player_room(&self) -> &Room {
        self.cave.room(self.player)
    }

    /// Whether `target` labels a room adjacent to the player.
    pub fn can_move(&self, target: u8) -> bool {
        self.cave.is_adjacent(self.player, target)
    }

    /// Whether a shot along `path` would be accepted: an arrow in the
    /// quiver and a first target adjacent to the player.
    pub fn can_shoot(&self, path: &[u8]) -> bool {
        self.arrows > 0
            && path
                .first()
                .is_some_and(|&t| self.cave.is_adjacent(self.player, t))
    }

    /// Append the nearby-hazard narration for the player's current
    /// neighbors: at most one line per hazard kind, however many
    /// neighbors share it.
    pub fn describe_hazards_nearby(&mut self) {
        let mut nearby = Hazards::empty();
        for &n in &self.cave.room(self.player).neighbors {
            nearby |= self.cave.room(n).hazards;
        }
        if nearby.contains(Hazards::WUMPUS) {
            self.message(messages::WUMPUS_ADJACENT);
        }
        if nearby.contains(Hazards::BAT) {
            self.message(messages::BAT_ADJACENT);
        }
        if nearby.contains(Hazards::PIT) {
            self.message(messages::PIT_ADJACENT);
        }
    }

    /// Append the terminal narration line for the current status.
    ///
    /// # Panics
    ///
    /// Panics if the hunt is still in progress. Callers must check
    /// [`GameState::is_over`] first; reaching this while `InProgress`
    /// is a caller bug, not a game outcome.
    pub fn end_hunt(&mut self) {
        let line = match self.status {
            HuntStatus::PlayerEaten => messages::PLAYER_EATEN,
            HuntStatus::PlayerFell => messages::PLAYER_FELL,
            HuntStatus::PlayerShot => messages::PLAYER_SHOT,
            HuntStatus::WumpusSlain => messages::WUMPUS_SLAIN,
            HuntStatus::PlayerQuit => messages::PLAYER_QUIT,
            HuntStatus::InProgress => {
                panic!("end_hunt called while the hunt is still in progress")
            }
        };
        self.message(line);
    }

    /// Add a narration line to display
    pub fn message(&mut self, msg: impl Into<String>) {
        let msg = msg.into();
        self.messages.push(msg.clone());
        self.message_history.push(msg);
    }

    /// Clear the per-turn narration (the transcript is kept)
    pub fn clear_messages(&mut self) {
        self.messages.clear();
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(GameRng::from_entropy())
    }
}

/// Turn controller driven by the presentation layer.
///
/// Accepts exactly one [`Action`] at a time and resolves it fully,
/// cascades included, before returning. Rejected actions leave the
/// state untouched.
pub struct Hunt {
    state: GameState,
}

impl Hunt {
    /// Wrap an existing state.
    pub fn new(state: GameState) -> Self {
        Self { state }
    }

    /// Start a hunt from a seed; handy for tests and replays.
    pub fn from_seed(seed: u64) -> Self {
        Self::new(GameState::new(GameRng::new(seed)))
    }

    /// Get reference to game state
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Get mutable reference to game state
    pub fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }

    /// Consume the controller and return the owned state
    pub fn into_state(self) -> GameState {
        self.state
    }

    /// Restart the hunt in place.
    pub fn init_hunt(&mut self) {
        self.state.init_hunt();
    }

    /// Resolve one player action.
    pub fn tick(&mut self, action: Action) -> ActionResult {
        match action {
            Action::Move(target) => {
                if self.state.is_over() {
                    return ActionResult::Rejected("the hunt is already over".to_string());
                }
                if !self.state.can_move(target) {
                    return ActionResult::Rejected("that room is not adjacent".to_string());
                }
                movement::do_move(&mut self.state, target);
                self.state.turns += 1;
                ActionResult::Success
            }
            Action::Shoot(path) => {
                if self.state.is_over() {
                    return ActionResult::Rejected("the hunt is already over".to_string());
                }
                if self.state.arrows == 0 {
                    return ActionResult::Rejected("your quiver is empty".to_string());
                }
                if !self.state.can_shoot(&path) {
                    return ActionResult::Rejected(
                        "the arrow cannot reach that room".to_string(),
                    );
                }
                shoot::do_shoot(&mut self.state, &path);
                self.state.turns += 1;
                ActionResult::Success
            }
            Action::Quit => {
                // Quitting a finished hunt is a no-op; terminal
                // statuses stay put until the next init_hunt.
                if !self.state.is_over() {
                    self.state.status = HuntStatus::PlayerQuit;
                }
                ActionResult::Success
            }
        }
    }
}
