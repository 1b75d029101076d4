//! Test fixtures providing reusable in-memory test data.
//!
//! Fixtures never touch the network or the real process environment.

pub mod config;
