//! Player factory.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test players.
pub struct PlayerFactory<'a> {
    db: &'a DatabaseConnection,
    discord_id: u64,
}

impl<'a> PlayerFactory<'a> {
    /// Creates a new PlayerFactory with an auto-incremented Discord ID.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            discord_id: next_id(),
        }
    }

    pub fn discord_id(mut self, discord_id: u64) -> Self {
        self.discord_id = discord_id;
        self
    }

    /// Builds and inserts the player.
    ///
    /// # Returns
    /// - `Ok(entity::player::Model)` - Created player
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::player::Model, DbErr> {
        entity::player::ActiveModel {
            discord_id: ActiveValue::Set(self.discord_id as i64),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a player with default values.
pub async fn create_player(db: &DatabaseConnection) -> Result<entity::player::Model, DbErr> {
    PlayerFactory::new(db).build().await
}
