use chrono::{DateTime, Utc};

/// A catch record joined with the Discord ID of the player who made it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecentCatch {
    pub ball_instance_id: i32,
    pub catch_date: DateTime<Utc>,
    pub player_discord_id: u64,
}

impl RecentCatch {
    pub fn from_entity(
        ball: entity::ball_instance::Model,
        player: entity::player::Model,
    ) -> Self {
        Self {
            ball_instance_id: ball.id,
            catch_date: ball.catch_date,
            player_discord_id: player.discord_id as u64,
        }
    }
}

/// Returns the only player among `catches`, or `None` for zero or several players.
pub fn sole_catcher(catches: &[RecentCatch]) -> Option<u64> {
    let first = catches.first()?.player_discord_id;

    catches
        .iter()
        .all(|catch| catch.player_discord_id == first)
        .then_some(first)
}
