//! Shared helper utilities for factory methods.

use chrono::{Duration, Utc};
use sea_orm::{DatabaseConnection, DbErr};

use crate::factory::ball_instance::BallInstanceFactory;

/// Counter for generating unique IDs in tests.
///
/// Starts well above zero so generated values are valid Discord snowflakes.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(100_000);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates `count` catch records in a guild for a single player.
///
/// Catches are spaced one minute apart, the newest `count` minutes before now,
/// so ordering by catch date is deterministic.
///
/// # Arguments
/// - `db` - Database connection
/// - `server_id` - Guild the catches happened in
/// - `player_id` - Primary key of the owning player
/// - `count` - Number of catches to create
///
/// # Returns
/// - `Ok(Vec<Model>)` - Created catch records, oldest first
/// - `Err(DbErr)` - Database error during insert
pub async fn create_catches(
    db: &DatabaseConnection,
    server_id: u64,
    player_id: i32,
    count: usize,
) -> Result<Vec<entity::ball_instance::Model>, DbErr> {
    let now = Utc::now();
    let mut catches = Vec::with_capacity(count);

    for offset in (1..=count as i64).rev() {
        let catch = BallInstanceFactory::new(db, player_id)
            .server_id(Some(server_id))
            .catch_date(now - Duration::minutes(offset))
            .build()
            .await?;
        catches.push(catch);
    }

    Ok(catches)
}
