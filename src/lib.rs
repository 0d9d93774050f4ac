// Library surface for headless/integration tests and reuse.
// Keep this lean to avoid coupling to bin-only types in main.rs.
pub mod builder;
pub mod config;
pub mod generator;
pub mod runtime;
pub mod session;
pub mod ui;

/// Cadence of the UI tick, shared by the event loop and the countdown.
pub const TICK_RATE_MS: u64 = 100;
