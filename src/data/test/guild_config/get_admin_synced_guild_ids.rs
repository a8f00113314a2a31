use super::*;

/// Tests that only guilds flagged for admin commands are returned.
///
/// Expected: Ok with the flagged guild IDs
#[tokio::test]
async fn returns_synced_guilds_only() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::GuildConfig)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::guild_config::GuildConfigFactory::new(db)
        .guild_id(1001)
        .admin_command_synced(true)
        .build()
        .await?;
    factory::guild_config::GuildConfigFactory::new(db)
        .guild_id(1002)
        .admin_command_synced(true)
        .enabled(false)
        .build()
        .await?;
    factory::create_guild_config(db).await?;

    let repo = GuildConfigRepository::new(db);
    let mut guild_ids = repo.get_admin_synced_guild_ids().await?;
    guild_ids.sort_unstable();

    assert_eq!(guild_ids, vec![1001, 1002]);

    Ok(())
}
