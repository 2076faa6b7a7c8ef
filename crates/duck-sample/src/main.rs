//! # Duck Sample
//!
//! Replays one day in the pond and logs how each duck's state evolves.
//!
//! ```bash
//! RUST_LOG=info cargo run -p duck-sample
//! RUST_LOG=trace cargo run -p duck-sample   # every case match and fall-through
//! ```

use duck_framework::tracing::setup_tracing;
use duck_sample::error::PondError;
use duck_sample::lifecycle::Pond;
use duck_sample::model::PondAction;
use tracing::{info, info_span};

/// A day in the pond, as a host application would receive it over the wire.
const DAY: &str = r#"[
    { "type": "pond/alfred/EAT", "payload": "bread", "meta": { "comment": "breakfast" } },
    { "type": "pond/winnie/GO_TO_WORK" },
    { "type": "pond/alfred/EAT", "payload": "worm" },
    { "type": "pond/heron/FLY_BY" },
    { "type": "pond/winnie/RETURN_HOME" },
    { "type": "pond/alfred/SLEEP" }
]"#;

fn main() -> Result<(), PondError> {
    setup_tracing();

    info!("Starting pond");
    let pond = Pond::new()?;

    let mut state = pond.initial_state();
    info!(?state, "Initial state");

    let actions: Vec<PondAction> = serde_json::from_str(DAY)?;
    for action in &actions {
        let span = info_span!("dispatch", action_type = %action.action_type);
        let _guard = span.enter();
        state = pond.reduce(state, action);
        info!(?state, "State updated");
    }

    // Replaying the same script from scratch lands in the same place.
    let replayed = pond.replay_json(DAY)?;
    let consistent = replayed == state;
    info!(consistent, "Replay finished");

    info!("Day in the pond completed");
    Ok(())
}
