//! Service layer for the broadcast flows.
//!
//! Services sit between the command handlers and the repository layer. They validate
//! requests, resolve targets from the database, and fan out deliveries through the
//! `BroadcastClient` abstraction so every flow can run against an in-memory client
//! in tests.

pub mod broadcast;
pub mod client;
pub mod dm;
pub mod fan_out;
pub mod listing;
pub mod message;
pub mod resolver;

#[cfg(test)]
mod test;
