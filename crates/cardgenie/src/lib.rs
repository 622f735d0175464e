//! Domain library behind the CardGenie rewards service.
//!
//! The crate is split into the `rewards` module, which owns the static card
//! catalog, the portfolio store seam, the recommendation engine, and the
//! alert/insight generators, plus the application-level `config`, `error`,
//! and `telemetry` modules shared with the HTTP service.

pub mod config;
pub mod error;
pub mod rewards;
pub mod telemetry;
