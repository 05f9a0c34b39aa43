//! Core errors, configuration, events and tracing for mapgate.

pub mod config;
pub mod constants;
pub mod errors;
pub mod events;
pub mod tracing;
