//! End-to-end hunt scenarios through the public action surface.

use wumpus_core::{
    Action, ActionResult, GameState, Hazards, Hunt, HuntStatus, NUM_ARROWS, NUM_ROOMS, RoomId,
    messages,
};

/// Strip the dealt hazards so a scenario can lay out its own cave.
fn clear_cave(state: &mut GameState) {
    for room in state.cave.rooms.iter_mut() {
        room.hazards = Hazards::empty();
    }
}

fn place_wumpus(state: &mut GameState, id: RoomId) {
    state.wumpus = id;
    state.cave.room_mut(id).hazards.insert(Hazards::WUMPUS);
}

fn label_of(state: &GameState, id: RoomId) -> u8 {
    state.cave.room(id).label
}

#[test]
fn moving_into_a_pit_ends_the_hunt() {
    let mut hunt = Hunt::from_seed(0x5EED);
    let (pit_label, arrows_before) = {
        let state = hunt.state_mut();
        clear_cave(state);
        let pit = state.player_room().neighbors[0];
        state.cave.room_mut(pit).hazards.insert(Hazards::PIT);
        let far = (0..NUM_ROOMS)
            .map(RoomId)
            .find(|&id| id != state.player && id != pit)
            .unwrap();
        place_wumpus(state, far);
        (label_of(state, pit), state.arrows)
    };

    assert!(hunt.state().can_move(pit_label));
    assert_eq!(hunt.tick(Action::Move(pit_label)), ActionResult::Success);
    assert_eq!(hunt.state().status, HuntStatus::PlayerFell);
    assert!(hunt.state().is_over());
    assert_eq!(hunt.state().arrows, arrows_before);

    hunt.state_mut().end_hunt();
    assert_eq!(
        hunt.state().messages.last().map(String::as_str),
        Some(messages::PLAYER_FELL)
    );
}

#[test]
fn moving_into_the_wumpus_room_gets_the_player_eaten() {
    let mut hunt = Hunt::from_seed(0xBEEF);
    let wumpus_label = {
        let state = hunt.state_mut();
        clear_cave(state);
        let lair = state.player_room().neighbors[1];
        place_wumpus(state, lair);
        label_of(state, lair)
    };

    assert_eq!(hunt.tick(Action::Move(wumpus_label)), ActionResult::Success);
    assert_eq!(hunt.state().status, HuntStatus::PlayerEaten);

    hunt.state_mut().end_hunt();
    assert_eq!(
        hunt.state().messages.last().map(String::as_str),
        Some(messages::PLAYER_EATEN)
    );
}

#[test]
fn last_arrow_slays_the_adjacent_wumpus() {
    let mut hunt = Hunt::from_seed(0xA110);
    let wumpus_label = {
        let state = hunt.state_mut();
        clear_cave(state);
        let lair = state.player_room().neighbors[0];
        place_wumpus(state, lair);
        state.arrows = 1;
        label_of(state, lair)
    };

    assert!(hunt.state().can_shoot(&[wumpus_label]));
    assert_eq!(
        hunt.tick(Action::Shoot(vec![wumpus_label])),
        ActionResult::Success
    );
    assert_eq!(hunt.state().status, HuntStatus::WumpusSlain);
    assert_eq!(hunt.state().arrows, 0);

    hunt.state_mut().end_hunt();
    assert_eq!(
        hunt.state().messages.last().map(String::as_str),
        Some(messages::WUMPUS_SLAIN)
    );
}

#[test]
fn a_missed_shot_costs_an_arrow_and_wakes_the_wumpus() {
    let mut hunt = Hunt::from_seed(0x0FF);
    let first_label = {
        let state = hunt.state_mut();
        clear_cave(state);
        // Room 17 is five tunnels from room 0: out of range for a
        // three-hop arrow, and the cave has no cycle short enough for
        // the arrow to curl back onto the shooter.
        state.player = RoomId(0);
        place_wumpus(state, RoomId(17));
        label_of(state, state.player_room().neighbors[0])
    };

    let old_wumpus = hunt.state().wumpus;
    assert_eq!(
        hunt.tick(Action::Shoot(vec![first_label])),
        ActionResult::Success
    );
    let state = hunt.state();
    assert_eq!(state.status, HuntStatus::InProgress);
    assert_eq!(state.arrows, NUM_ARROWS - 1);
    assert_ne!(state.wumpus, old_wumpus);
    assert!(state.cave.room(old_wumpus).neighbors.contains(&state.wumpus));
    assert_eq!(
        state
            .message_history
            .iter()
            .filter(|m| m.as_str() == messages::WUMPUS_MOVES)
            .count(),
        1
    );
}

#[test]
fn a_bat_chain_ends_in_a_pit_or_back_on_clear_ground() {
    let mut hunt = Hunt::from_seed(0xBA7);
    let bat_label = {
        let state = hunt.state_mut();
        clear_cave(state);
        state.player = RoomId(0);
        let bat = state.player_room().neighbors[0];
        state.cave.room_mut(bat).hazards.insert(Hazards::BAT);
        // Every room the bat can drop the player into is lethal,
        // except his own starting room and the bat room itself.
        for i in 0..NUM_ROOMS {
            let id = RoomId(i);
            if id != bat && id != state.player {
                state.cave.room_mut(id).hazards.insert(Hazards::PIT);
            }
        }
        label_of(state, bat)
    };

    assert_eq!(hunt.tick(Action::Move(bat_label)), ActionResult::Success);
    let state = hunt.state();
    assert!(
        state
            .message_history
            .iter()
            .any(|m| m.as_str() == messages::CARRIED_AWAY)
    );
    match state.status {
        HuntStatus::PlayerFell => {}
        HuntStatus::InProgress => assert_eq!(state.player, RoomId(0)),
        other => panic!("unexpected status {other}"),
    }
}

#[test]
fn quitting_flees_the_cave() {
    let mut hunt = Hunt::from_seed(0x9017);
    assert_eq!(hunt.tick(Action::Quit), ActionResult::Success);
    assert_eq!(hunt.state().status, HuntStatus::PlayerQuit);
    assert!(hunt.state().is_over());

    hunt.state_mut().end_hunt();
    assert_eq!(
        hunt.state().messages.last().map(String::as_str),
        Some(messages::PLAYER_QUIT)
    );

    // Quitting again changes nothing.
    assert_eq!(hunt.tick(Action::Quit), ActionResult::Success);
    assert_eq!(hunt.state().status, HuntStatus::PlayerQuit);
}

#[test]
fn init_hunt_starts_over_after_a_terminal_state() {
    let mut hunt = Hunt::from_seed(0x1717);
    hunt.tick(Action::Quit);
    assert!(hunt.state().is_over());

    hunt.init_hunt();
    let state = hunt.state();
    assert_eq!(state.status, HuntStatus::InProgress);
    assert_eq!(state.arrows, NUM_ARROWS);
    assert_eq!(state.turns, 0);
    assert!(state.player_room().hazards.is_empty());
}

#[test]
fn turns_count_accepted_actions_only() {
    let mut hunt = Hunt::from_seed(0x7075);
    {
        let state = hunt.state_mut();
        clear_cave(state);
        state.player = RoomId(0);
        place_wumpus(state, RoomId(17));
    }
    let own_label = hunt.state().player_room().label;
    hunt.tick(Action::Move(own_label));
    assert_eq!(hunt.state().turns, 0);

    let step = label_of(hunt.state(), hunt.state().player_room().neighbors[0]);
    hunt.tick(Action::Move(step));
    assert_eq!(hunt.state().turns, 1);
}
