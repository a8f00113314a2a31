//! Broadcast Test Utils
//!
//! Shared testing utilities for the broadcast bot. This crate offers a builder for
//! test contexts backed by in-memory SQLite databases, factories for the host bot's
//! tables, and fixtures for Serenity API objects.
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::builder::TestBuilder;
//! use entity::prelude::GuildConfig;
//!
//! #[tokio::test]
//! async fn resolves_channels() -> Result<(), TestError> {
//!     let test = TestBuilder::new()
//!         .with_table(GuildConfig)
//!         .build()
//!         .await?;
//!
//!     let db = test.db.unwrap();
//!     // Perform database operations...
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
pub mod serenity;
