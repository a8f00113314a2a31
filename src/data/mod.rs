//! Database repository layer.
//!
//! Repositories wrap SeaORM queries over the host bot's tables and return domain
//! models or plain identifiers, keeping entity types out of the service layer. The
//! broadcast flows only ever read from these tables.

pub mod ball_instance;
pub mod guild_config;

#[cfg(test)]
mod test;
