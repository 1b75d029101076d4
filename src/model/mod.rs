//! Domain models shared by the scheduler, services and bot handlers.
//!
//! - `event` - Event catalog, event definitions and times of day
//! - `interaction` - Decoded interaction requests and the replies they produce
//! - `reminder` - Reminder message payload shared by dispatch and preview

pub mod event;
pub mod interaction;
pub mod reminder;
