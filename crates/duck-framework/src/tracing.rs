//! # Observability & Tracing
//!
//! The framework logs through the `tracing` crate and never installs a subscriber itself.
//! Applications call [`setup_tracing`] once at startup (or install their own subscriber).
//!
//! ## What Gets Traced
//!
//! | Level | Event | Fields |
//! |-------|-------|--------|
//! | `DEBUG` | `Reducer created` | `duck`, `cases` |
//! | `WARN` | `Reducer rejected` | `duck`, `error` |
//! | `TRACE` | `Case matched` / `No matching case` | `action_type` |
//!
//! Action creation is not traced.
//!
//! ## Usage Examples
//!
//! ```bash
//! # Reducer construction only
//! RUST_LOG=debug cargo run -p duck-sample
//!
//! # Every reduce call
//! RUST_LOG=duck_framework=trace cargo run -p duck-sample
//! ```
//!
//! With `RUST_LOG=trace` a dispatched action shows up as:
//!
//! ```text
//! TRACE Case matched action_type=pond/alfred/EAT
//! TRACE No matching case action_type=pond/alfred/EAT
//! ```
//!
//! (once per duck: one reducer handles the type, the other lets it fall through).

/// Initializes a compact `tracing` subscriber filtered by `RUST_LOG`.
///
/// Call it once; a second call panics because a global subscriber is already set.
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .init();
}
