//! Pure, deterministic data for the initializer (no I/O).

pub mod components;
pub mod config;
