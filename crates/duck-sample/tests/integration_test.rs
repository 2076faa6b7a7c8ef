use duck_framework::mock::CaseRecorder;
use duck_framework::{create_duck, Action};
use duck_sample::error::PondError;
use duck_sample::lifecycle::{Pond, PondState};
use duck_sample::model::{AlfredState, Comment, PondCases, WinnieState};

/// Full pond: every action reaches both ducks, in dispatch order.
#[test]
fn test_full_pond_day() {
    let pond = Pond::new().unwrap();

    // 1. Initial state comes from each reducer's default
    let state = pond.initial_state();
    assert_eq!(
        state,
        PondState {
            alfred: AlfredState {
                belly: vec![],
                happy: true,
            },
            winnie: WinnieState { home: true },
        }
    );

    // 2. Alfred eats; Winnie is unaffected
    let state = pond.reduce(state, &pond.alfred.eat("bread", Some("breakfast")));
    assert_eq!(state.alfred.belly, ["bread"]);
    assert!(state.winnie.home);

    // 3. Winnie leaves; both slices change
    let state = pond.reduce(state, &pond.winnie.go_to_work.empty());
    assert!(!state.winnie.home);
    assert!(!state.alfred.happy);

    // 4. Unknown action: nothing changes
    let before = state.clone();
    let state = pond.reduce(state, &Action::new("pond/heron/FLY_BY"));
    assert_eq!(state, before);

    // 5. Winnie returns, Alfred sleeps
    let state = pond.reduce(state, &pond.winnie.return_home.empty());
    let state = pond.reduce(state, &pond.alfred.sleep.empty());
    assert_eq!(state.alfred, AlfredState::default());
    assert!(state.winnie.home);
}

#[test]
fn test_replay_json_matches_manual_dispatch() {
    let pond = Pond::new().unwrap();
    let script = r#"[
        { "type": "pond/alfred/EAT", "payload": "bread", "meta": { "comment": "breakfast" } },
        { "type": "pond/winnie/GO_TO_WORK" },
        { "type": "pond/alfred/EAT", "payload": "worm" }
    ]"#;

    let replayed = pond.replay_json(script).unwrap();
    let dispatched = pond.replay(&[
        pond.alfred.eat("bread", Some("breakfast")),
        pond.winnie.go_to_work.empty(),
        pond.alfred.eat("worm", None),
    ]);

    assert_eq!(replayed, dispatched);
    assert_eq!(replayed.alfred.belly, ["bread", "worm"]);
    assert!(!replayed.alfred.happy);
}

#[test]
fn test_replay_json_rejects_malformed_script() {
    let pond = Pond::new().unwrap();

    let result = pond.replay_json(r#"[{ "payload": "bread" }]"#);

    assert!(matches!(result, Err(PondError::InvalidScript(_))));
}

#[test]
fn test_eat_action_wire_shape() {
    let pond = Pond::new().unwrap();

    let json = serde_json::to_value(pond.alfred.eat("bread", Some("breakfast"))).unwrap();

    assert_eq!(
        json,
        serde_json::json!({
            "type": "pond/alfred/EAT",
            "payload": "bread",
            "error": false,
            "meta": { "comment": "breakfast" }
        })
    );
}

/// A third duck joining the pond reuses the shared action shape and sees Winnie's types.
#[test]
fn test_new_duck_reacts_to_existing_types() {
    let pond = Pond::new().unwrap();
    let heron = create_duck("heron", Some("pond"));
    let recorder = CaseRecorder::<String, Comment>::new();

    let reducer = heron
        .create_reducer(
            PondCases::new()
                .on(heron.define_type("FLY_BY"), recorder.passthrough())
                .on(&pond.winnie.types.go_to_work, recorder.record(|seen: u32, _| seen + 1)),
            0,
        )
        .unwrap();

    let seen = reducer.fold(
        reducer.initial_state(),
        &[
            pond.winnie.go_to_work.empty(),
            pond.alfred.sleep.empty(),
            pond.winnie.go_to_work.empty(),
        ],
    );

    assert_eq!(seen, 2);
    recorder.verify(&["pond/winnie/GO_TO_WORK", "pond/winnie/GO_TO_WORK"]);
}

#[test]
fn test_invalid_duck_surfaces_as_pond_error() {
    let duck = create_duck("broken", Some("pond"));

    let result: Result<_, PondError> = duck
        .create_reducer(PondCases::<u32>::new(), 0)
        .map_err(PondError::from);

    let err = result.unwrap_err();
    assert_eq!(
        err.to_string(),
        "Invalid duck definition: You should pass at least one case name when creating a reducer."
    );
}
