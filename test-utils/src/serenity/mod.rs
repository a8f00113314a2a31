//! Test factories for creating Serenity API objects.
//!
//! These factories build valid Serenity structs by deserializing JSON, simulating what
//! Discord's API would return.
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::serenity::create_test_attachment;
//!
//! let attachment = create_test_attachment(123456789, "announcement.png");
//! let guild = create_test_guild(987654321, "Ball Lovers", 1200, &[(111, "spawns")]);
//! ```
//!
//! # Available Factories
//!
//! - `attachment::create_test_attachment` - Create Serenity Attachment objects
//! - `guild::create_test_guild` - Create Serenity Guild objects with text channels

pub mod attachment;
pub mod guild;

pub use attachment::create_test_attachment;
pub use guild::create_test_guild;
