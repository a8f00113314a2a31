use super::*;
use test_utils::factory::guild_config::GuildConfigFactory;

/// Tests that only enabled guilds with a spawn channel are returned.
///
/// Expected: Ok with the single eligible channel
#[tokio::test]
async fn excludes_disabled_and_unconfigured_guilds() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::GuildConfig)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    GuildConfigFactory::new(db)
        .spawn_channel(Some(111))
        .build()
        .await?;
    GuildConfigFactory::new(db)
        .spawn_channel(Some(222))
        .enabled(false)
        .build()
        .await?;
    GuildConfigFactory::new(db).spawn_channel(None).build().await?;

    let repo = GuildConfigRepository::new(db);
    let channels = repo.get_broadcast_channels().await?;

    assert_eq!(channels.into_iter().collect::<Vec<_>>(), vec![111]);

    Ok(())
}

/// Tests that guilds sharing a spawn channel produce one entry.
///
/// Expected: Ok with no duplicate channel IDs
#[tokio::test]
async fn deduplicates_shared_channels() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::GuildConfig)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    GuildConfigFactory::new(db)
        .spawn_channel(Some(333))
        .build()
        .await?;
    GuildConfigFactory::new(db)
        .spawn_channel(Some(333))
        .build()
        .await?;
    GuildConfigFactory::new(db)
        .spawn_channel(Some(444))
        .build()
        .await?;

    let repo = GuildConfigRepository::new(db);
    let channels = repo.get_broadcast_channels().await?;

    assert_eq!(channels.len(), 2);
    assert!(channels.contains(&333));
    assert!(channels.contains(&444));

    Ok(())
}

/// Tests the result when no guild is configured.
///
/// Expected: Ok with empty set
#[tokio::test]
async fn returns_empty_when_no_configs() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::GuildConfig)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::guild_config::GuildConfigFactory::new(db)
        .enabled(false)
        .build()
        .await?;

    let repo = GuildConfigRepository::new(db);
    let channels = repo.get_broadcast_channels().await?;

    assert!(channels.is_empty());

    Ok(())
}

/// Tests that a missing table surfaces as a database error.
///
/// Expected: Err
#[tokio::test]
async fn fails_without_table() -> Result<(), DbErr> {
    let test = TestBuilder::new().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = GuildConfigRepository::new(db);
    let result = repo.get_broadcast_channels().await;

    assert!(result.is_err());

    Ok(())
}
