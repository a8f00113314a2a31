//! Catch record factory.

use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test catch records.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::ball_instance::BallInstanceFactory;
///
/// let catch = BallInstanceFactory::new(&db, player.id)
///     .server_id(Some(123456789))
///     .build()
///     .await?;
/// ```
pub struct BallInstanceFactory<'a> {
    db: &'a DatabaseConnection,
    player_id: i32,
    server_id: Option<u64>,
    catch_date: DateTime<Utc>,
}

impl<'a> BallInstanceFactory<'a> {
    /// Creates a new BallInstanceFactory for the given player.
    ///
    /// Defaults:
    /// - server_id: `None`
    /// - catch_date: now
    pub fn new(db: &'a DatabaseConnection, player_id: i32) -> Self {
        Self {
            db,
            player_id,
            server_id: None,
            catch_date: Utc::now(),
        }
    }

    pub fn server_id(mut self, server_id: Option<u64>) -> Self {
        self.server_id = server_id;
        self
    }

    pub fn catch_date(mut self, catch_date: DateTime<Utc>) -> Self {
        self.catch_date = catch_date;
        self
    }

    /// Builds and inserts the catch record.
    ///
    /// # Returns
    /// - `Ok(entity::ball_instance::Model)` - Created catch record
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::ball_instance::Model, DbErr> {
        entity::ball_instance::ActiveModel {
            player_id: ActiveValue::Set(self.player_id),
            server_id: ActiveValue::Set(self.server_id.map(|id| id as i64)),
            catch_date: ActiveValue::Set(self.catch_date),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a catch record for a player in a guild, caught now.
pub async fn create_ball_instance(
    db: &DatabaseConnection,
    player_id: i32,
    server_id: u64,
) -> Result<entity::ball_instance::Model, DbErr> {
    BallInstanceFactory::new(db, player_id)
        .server_id(Some(server_id))
        .build()
        .await
}
