//! Reminderboard Test Utils
//!
//! Shared testing utilities for the reminderboard bot.
//!
//! # Overview
//!
//! - **fixture**: In-memory configuration values and event catalogs
//! - **serenity**: Factories for Serenity API objects built from JSON
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::{fixture, serenity::create_test_role};
//!
//! #[test]
//! fn resolves_role() {
//!     let env = fixture::config::env();
//!     let role = create_test_role(fixture::config::ROLE_ID, "Events", 0x00ddff, 1);
//!     // Build a Config from `env` and resolve against `role`...
//! }
//! ```

pub mod fixture;
pub mod serenity;
