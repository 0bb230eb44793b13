//! Gameplay walks across the built-in courtyard scenario.

use tilevale_content::starting_state;
use tilevale_core::{
    Action, ActionResult, AdvanceAction, CardinalDirection, CloseAction, GameEngine,
    GiveItemAction, IgnoredReason, MoveAction, Position, TakeItemAction,
};

fn step(
    engine: &mut GameEngine<'_>,
    direction: CardinalDirection,
) -> ActionResult {
    engine
        .execute(&Action::Move(MoveAction::new(direction)))
        .expect("courtyard walk never desyncs")
}

#[test]
fn three_right_steps_then_down_hits_the_wall_block() {
    let mut state = starting_state().unwrap();
    let mut engine = GameEngine::new(&mut state);

    for expected_x in [3, 4, 5] {
        let result = step(&mut engine, CardinalDirection::Right);
        assert_eq!(
            result,
            ActionResult::Moved {
                destination: Position::new(expected_x, 2)
            }
        );
    }

    // (5, 3) is part of the first interior wall block.
    let result = step(&mut engine, CardinalDirection::Down);
    assert_eq!(result, ActionResult::Ignored(IgnoredReason::BlockedByWall));
    assert_eq!(state.player.position, Position::new(5, 2));
}

#[test]
fn walking_into_the_merchant_opens_its_dialogue() {
    let mut state = starting_state().unwrap();
    state.player.position = Position::new(7, 3);
    let mut engine = GameEngine::new(&mut state);

    let result = step(&mut engine, CardinalDirection::Right);

    assert_eq!(
        result,
        ActionResult::DialogueOpened {
            npc: "merchant".into()
        }
    );
    let dialogue = state.active_dialogue.as_ref().unwrap();
    assert_eq!(dialogue.line, 0);
    let merchant = state.npc(&dialogue.npc).unwrap();
    assert_eq!(merchant.script.line(0), Some("Welcome, traveler!"));
}

#[test]
fn giving_and_taking_the_key_back_restores_the_session() {
    let mut state = starting_state().unwrap();
    state.player.position = Position::new(7, 3);
    let mut engine = GameEngine::new(&mut state);
    step(&mut engine, CardinalDirection::Right);

    let before = state.clone();
    let mut engine = GameEngine::new(&mut state);
    engine
        .execute(&Action::Give(GiveItemAction::new("rusty-key")))
        .unwrap();

    let merchant = state.npc(&"merchant".into()).unwrap();
    assert!(merchant.inventory.contains(&"rusty-key".into()));
    assert!(!state.player.inventory.contains(&"rusty-key".into()));

    let mut engine = GameEngine::new(&mut state);
    engine
        .execute(&Action::Take(TakeItemAction::new("rusty-key")))
        .unwrap();

    assert_eq!(state, before);
}

#[test]
fn repeat_visits_always_restart_the_script() {
    let mut state = starting_state().unwrap();
    state.player.position = Position::new(4, 6);
    let mut engine = GameEngine::new(&mut state);

    // First visit to the guard: read ahead, then leave.
    let result = step(&mut engine, CardinalDirection::Down);
    assert_eq!(
        result,
        ActionResult::DialogueOpened { npc: "guard".into() }
    );
    engine.execute(&Action::Advance(AdvanceAction)).unwrap();
    engine.execute(&Action::Advance(AdvanceAction)).unwrap();
    engine.execute(&Action::Close(CloseAction)).unwrap();

    // Second visit starts over at line 0.
    let result = step(&mut engine, CardinalDirection::Down);
    assert_eq!(
        result,
        ActionResult::DialogueOpened { npc: "guard".into() }
    );
    assert_eq!(state.active_dialogue.as_ref().unwrap().line, 0);
}

#[test]
fn full_tour_preserves_the_item_population() {
    let mut state = starting_state().unwrap();
    let total = |state: &tilevale_core::GameState| {
        state.player.inventory.len()
            + state.npcs.iter().map(|n| n.inventory.len()).sum::<usize>()
    };
    assert_eq!(total(&state), 5);

    // Trade with the wizard: hand over the potion, take the scroll.
    state.player.position = Position::new(12, 9);
    let mut engine = GameEngine::new(&mut state);
    step(&mut engine, CardinalDirection::Up);
    engine
        .execute(&Action::Give(GiveItemAction::new("healing-potion")))
        .unwrap();
    engine
        .execute(&Action::Take(TakeItemAction::new("magic-scroll")))
        .unwrap();
    engine.execute(&Action::Close(CloseAction)).unwrap();

    assert_eq!(total(&state), 5);
    assert!(state.player.inventory.contains(&"magic-scroll".into()));
    assert_eq!(state.active_dialogue, None);
}
