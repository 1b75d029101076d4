//! Business logic between the Discord handlers and the in-memory state.
//!
//! - `registration` - Per-event rosters
//! - `interaction` - Button and slash command routing
//! - `reminder` - Scheduled reminder dispatch and rendering

pub mod interaction;
pub mod registration;
pub mod reminder;

#[cfg(test)]
mod test;
