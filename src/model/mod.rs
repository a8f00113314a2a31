//! Domain models and parameter types.
//!
//! Entity models are converted to these types at the repository boundary, and the
//! command layer converts Discord/framework types into them before calling a
//! service. Nothing here is persisted; every value lives for one command invocation.

pub mod broadcast;
pub mod catch;
pub mod discord;
pub mod listing;
pub mod report;
