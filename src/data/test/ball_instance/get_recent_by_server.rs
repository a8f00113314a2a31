use super::*;

/// Tests that recent catches come back newest first and respect the limit.
///
/// Expected: Ok with the newest `limit` catches
#[tokio::test]
async fn returns_newest_first_with_limit() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catch_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let player = factory::create_player(db).await?;
    let catches = factory::create_catches(db, 800, player.id, 15).await?;

    let repo = BallInstanceRepository::new(db);
    let recent = repo.get_recent_by_server(800, 10).await?;

    assert_eq!(recent.len(), 10);
    assert_eq!(recent[0].ball_instance_id, catches[14].id);
    assert_eq!(recent[9].ball_instance_id, catches[5].id);
    assert!(recent
        .windows(2)
        .all(|pair| pair[0].catch_date >= pair[1].catch_date));

    Ok(())
}

/// Tests that each catch carries its catcher's Discord ID.
///
/// Expected: Ok with player Discord IDs resolved
#[tokio::test]
async fn includes_player_discord_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catch_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::player::PlayerFactory::new(db)
        .discord_id(9001)
        .build()
        .await?;
    let second = factory::player::PlayerFactory::new(db)
        .discord_id(9002)
        .build()
        .await?;
    factory::create_catches(db, 900, first.id, 2).await?;
    factory::create_ball_instance(db, second.id, 900).await?;

    let repo = BallInstanceRepository::new(db);
    let recent = repo.get_recent_by_server(900, 10).await?;

    assert_eq!(recent.len(), 3);
    assert_eq!(recent[0].player_discord_id, 9002);
    assert!(recent[1..].iter().all(|c| c.player_discord_id == 9001));

    Ok(())
}

/// Tests a guild without catches.
///
/// Expected: Ok with empty vector
#[tokio::test]
async fn returns_empty_for_quiet_server() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catch_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = BallInstanceRepository::new(db);
    let recent = repo.get_recent_by_server(1234, 10).await?;

    assert!(recent.is_empty());

    Ok(())
}
