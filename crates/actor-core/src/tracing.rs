//! Observability setup shared by binaries built on this crate.
//!
//! Structured logging via the `tracing` crate: actors log lifecycle events
//! (startup, shutdown) and every command with structured fields, and client
//! wrappers add `#[instrument]` spans around each request.
//!
//! Verbosity is controlled with `RUST_LOG`:
//!
//! ```bash
//! RUST_LOG=info cargo run      # compact workflow logs
//! RUST_LOG=debug cargo run     # full command/reply payloads
//! ```

/// Initializes the tracing subscriber for the whole process.
///
/// Uses a compact format with module paths hidden; the actors already tag
/// every line with their `service_type` field, which reads better than a
/// crate path.
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .init();
}
