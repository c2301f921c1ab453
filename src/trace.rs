//! # Observability & Tracing
//!
//! Structured logging setup for the demo binary. The library itself only emits
//! `tracing` events; installing a subscriber is the caller's choice.
//!
//! ## Configuration
//!
//! Log levels come from the `RUST_LOG` environment variable:
//!
//! ```bash
//! # Compact logs (default)
//! RUST_LOG=info cargo run
//!
//! # Show every relationship change
//! RUST_LOG=debug cargo run
//! ```
//!
//! The compact format hides the crate/module prefix (`with_target(false)`) to
//! keep log lines short while preserving the structured fields.

/// Initializes the global tracing subscriber. Call once, at startup.
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false) // Don't show module paths - the fields carry the context
        .compact()
        .init();
}
