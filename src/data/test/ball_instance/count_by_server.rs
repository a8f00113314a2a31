use super::*;
use test_utils::factory::ball_instance::BallInstanceFactory;

/// Tests counting catches scoped to one guild.
///
/// Catches in other guilds or without a guild are not counted.
///
/// Expected: Ok with the guild's catch count
#[tokio::test]
async fn counts_only_matching_server() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catch_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let player = factory::create_player(db).await?;
    factory::create_catches(db, 500, player.id, 4).await?;
    factory::create_catches(db, 600, player.id, 2).await?;
    BallInstanceFactory::new(db, player.id).build().await?;

    let repo = BallInstanceRepository::new(db);

    assert_eq!(repo.count_by_server(500).await?, 4);
    assert_eq!(repo.count_by_server(600).await?, 2);
    assert_eq!(repo.count_by_server(700).await?, 0);

    Ok(())
}
