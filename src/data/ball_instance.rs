use sea_orm::{
    ColumnTrait, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
    QuerySelect,
};

use crate::model::catch::RecentCatch;

pub struct BallInstanceRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> BallInstanceRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Counts the catches made in a guild.
    pub async fn count_by_server(&self, guild_id: u64) -> Result<u64, DbErr> {
        entity::prelude::BallInstance::find()
            .filter(entity::ball_instance::Column::ServerId.eq(guild_id as i64))
            .count(self.db)
            .await
    }

    /// Gets the most recent catches in a guild together with their catcher.
    ///
    /// # Arguments
    /// - `guild_id` - Guild the catches happened in
    /// - `limit` - Maximum number of catches to return
    ///
    /// # Returns
    /// - `Ok(Vec<RecentCatch>)` - Catches ordered newest first
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_recent_by_server(
        &self,
        guild_id: u64,
        limit: u64,
    ) -> Result<Vec<RecentCatch>, DbErr> {
        let rows = entity::prelude::BallInstance::find()
            .filter(entity::ball_instance::Column::ServerId.eq(guild_id as i64))
            .order_by_desc(entity::ball_instance::Column::CatchDate)
            .limit(limit)
            .find_also_related(entity::prelude::Player)
            .all(self.db)
            .await?;

        Ok(rows
            .into_iter()
            .filter_map(|(ball, player)| player.map(|player| RecentCatch::from_entity(ball, player)))
            .collect())
    }
}
