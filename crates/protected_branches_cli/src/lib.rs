//! protected-branches CLI library exports for integration testing.
//!
//! This module exposes the configuration loader and the list command so they
//! can be driven without spawning the binary.

pub mod commands;
pub mod config;
pub mod errors;
