use sea_orm::{DatabaseConnection, DbErr};
use test_utils::{builder::TestBuilder, factory::guild_config::GuildConfigFactory};

use super::{attachment, MockClient};
use crate::{
    error::{validation::ValidationError, AppError},
    model::broadcast::{BroadcastMode, BroadcastRequest},
    service::broadcast::ChannelBroadcastService,
};

async fn configure_channels(db: &DatabaseConnection, channels: &[u64]) -> Result<(), DbErr> {
    for (index, channel) in channels.iter().enumerate() {
        GuildConfigFactory::new(db)
            .guild_id(9000 + index as u64)
            .spawn_channel(Some(*channel))
            .build()
            .await?;
    }
    Ok(())
}

fn request(
    mode: BroadcastMode,
    message: Option<&str>,
    filename: Option<&str>,
) -> BroadcastRequest {
    BroadcastRequest::new(
        mode,
        message.map(str::to_string),
        filename.map(attachment),
        false,
        "alice",
    )
}

/// Tests that each mode's missing content aborts before any send.
///
/// Expected: Err(ValidationErr) and no channel, DM or download activity
#[tokio::test]
async fn rejects_incomplete_requests_without_sending() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_broadcast_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    configure_channels(db, &[1, 2]).await?;

    let client = MockClient::new().with_channel(1, 101).with_channel(2, 102);
    let service = ChannelBroadcastService::new(db, &client);

    let cases = [
        (request(BroadcastMode::Text, None, Some("a.png")), ValidationError::MissingMessage),
        (request(BroadcastMode::Image, Some("hi"), None), ValidationError::MissingImage),
        (request(BroadcastMode::Both, None, None), ValidationError::MissingContent),
    ];

    for (request, expected) in cases {
        let result = service.broadcast_to_channels(&request).await;
        assert!(matches!(result, Err(AppError::ValidationErr(ref e)) if *e == expected));
    }

    assert_eq!(client.send_count(), 0);
    assert_eq!(client.downloads.load(std::sync::atomic::Ordering::SeqCst), 0);

    Ok(())
}

/// Tests that a broadcast without configured channels is rejected.
///
/// Expected: Err(ValidationErr(NoChannelsConfigured))
#[tokio::test]
async fn rejects_when_no_channels_configured() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_broadcast_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let client = MockClient::new();
    let service = ChannelBroadcastService::new(db, &client);
    let result = service
        .broadcast_to_channels(&request(BroadcastMode::Text, Some("hi"), None))
        .await;

    assert!(matches!(
        result,
        Err(AppError::ValidationErr(ValidationError::NoChannelsConfigured))
    ));

    Ok(())
}

/// Tests that every channel is accounted for when some fail.
///
/// Expected: success + fail equals channel count, failures labelled in order
#[tokio::test]
async fn tallies_every_channel() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_broadcast_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    configure_channels(db, &[1, 2, 3, 4]).await?;

    let client = MockClient::new()
        .with_channel(1, 101)
        .with_failing_channel(2, 102)
        .with_channel(4, 104);
    let service = ChannelBroadcastService::new(db, &client);

    let outcome = service
        .broadcast_to_channels(&request(BroadcastMode::Text, Some("hello"), None))
        .await
        .unwrap();
    let report = outcome.report;

    assert_eq!(report.success_count + report.fail_count, 4);
    assert_eq!(report.success_count, 2);
    assert_eq!(
        report.failures,
        vec!["Guild 102 - #spawn-2", "Unknown Channel (ID: 3)"]
    );
    assert_eq!(client.sent_channel_ids(), vec![1, 4]);
    assert!(outcome.advisory.is_none());

    Ok(())
}

/// Tests the announcement frame and signature sent in text mode.
///
/// Expected: Text only, composed once and identical for every channel
#[tokio::test]
async fn text_mode_sends_composed_announcement() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_broadcast_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    configure_channels(db, &[1, 2]).await?;

    let client = MockClient::new().with_channel(1, 101).with_channel(2, 102);
    let service = ChannelBroadcastService::new(db, &client);

    service
        .broadcast_to_channels(&request(BroadcastMode::Text, Some("hello"), Some("a.png")))
        .await
        .unwrap();

    let sends = client.channel_sends.lock().unwrap();
    assert_eq!(sends.len(), 2);
    for (_, message) in sends.iter() {
        let content = message.content.as_deref().unwrap();
        assert!(content.contains("hello"));
        assert!(content.ends_with("*Sent by alice*"));
        assert!(message.file.is_none());
    }
    assert_eq!(client.downloads.load(std::sync::atomic::Ordering::SeqCst), 0);

    Ok(())
}

/// Tests that the attachment is downloaded once and shared by every send.
///
/// Expected: One download, same bytes in every message, spoiler flag kept
#[tokio::test]
async fn both_mode_shares_single_download() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_broadcast_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    configure_channels(db, &[1, 2, 3]).await?;

    let client = MockClient::new()
        .with_channel(1, 101)
        .with_channel(2, 102)
        .with_channel(3, 103);
    let service = ChannelBroadcastService::new(db, &client);

    let outcome = service
        .broadcast_to_channels(&request(
            BroadcastMode::Both,
            Some("look"),
            Some("SPOILER_map.png"),
        ))
        .await
        .unwrap();

    assert_eq!(outcome.report.success_count, 3);
    assert_eq!(client.downloads.load(std::sync::atomic::Ordering::SeqCst), 1);

    let sends = client.channel_sends.lock().unwrap();
    let first = sends[0].1.file.as_ref().unwrap();
    assert!(first.spoiler);
    assert_eq!(first.upload_filename(), "SPOILER_map.png");
    for (_, message) in sends.iter() {
        assert!(message.content.is_some());
        let file = message.file.as_ref().unwrap();
        assert!(std::sync::Arc::ptr_eq(&file.data, &first.data));
    }

    Ok(())
}

/// Tests that a failed download in both mode still sends the text everywhere.
///
/// Expected: Advisory returned, every resolvable channel succeeds with text only
#[tokio::test]
async fn failed_download_falls_back_to_text() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_broadcast_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    configure_channels(db, &[1, 2]).await?;

    let client = MockClient::new()
        .with_channel(1, 101)
        .with_channel(2, 102)
        .with_failing_download();
    let service = ChannelBroadcastService::new(db, &client);

    let outcome = service
        .broadcast_to_channels(&request(BroadcastMode::Both, Some("hello"), Some("a.png")))
        .await
        .unwrap();

    assert_eq!(
        outcome.advisory.as_deref(),
        Some("An error occurred while downloading the attachment. Only the text message will be sent.")
    );
    assert_eq!(outcome.report.success_count, 2);
    assert_eq!(outcome.report.fail_count, 0);
    assert!(client
        .channel_sends
        .lock()
        .unwrap()
        .iter()
        .all(|(_, message)| message.content.is_some() && message.file.is_none()));

    Ok(())
}

/// Tests image mode when the only content could not be downloaded.
///
/// Expected: No sends, every resolvable channel fails as attachment unavailable
#[tokio::test]
async fn failed_download_in_image_mode_fails_channels() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_broadcast_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    configure_channels(db, &[1, 2]).await?;

    let client = MockClient::new().with_channel(1, 101).with_failing_download();
    let service = ChannelBroadcastService::new(db, &client);

    let outcome = service
        .broadcast_to_channels(&request(BroadcastMode::Image, Some("ignored"), Some("a.png")))
        .await
        .unwrap();

    assert_eq!(
        outcome.advisory.as_deref(),
        Some("An error occurred while downloading the attachment.")
    );
    assert_eq!(outcome.report.attempted(), 2);
    assert_eq!(
        outcome.report.failures,
        vec![
            "Guild 101 - #spawn-1 (attachment unavailable)",
            "Unknown Channel (ID: 2)"
        ]
    );
    assert_eq!(client.send_count(), 0);

    Ok(())
}

/// Tests that image mode never sends the announcement text.
///
/// Expected: File only in every message
#[tokio::test]
async fn image_mode_sends_file_only() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_broadcast_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    configure_channels(db, &[1]).await?;

    let client = MockClient::new().with_channel(1, 101);
    let service = ChannelBroadcastService::new(db, &client);

    service
        .broadcast_to_channels(&request(BroadcastMode::Image, Some("ignored"), Some("a.png")))
        .await
        .unwrap();

    let sends = client.channel_sends.lock().unwrap();
    assert_eq!(sends.len(), 1);
    assert!(sends[0].1.content.is_none());
    assert_eq!(sends[0].1.file.as_ref().unwrap().filename, "a.png");

    Ok(())
}

/// Tests that an anonymous broadcast carries no signature.
///
/// Expected: No "Sent by" line
#[tokio::test]
async fn anonymous_broadcast_is_unsigned() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_broadcast_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    configure_channels(db, &[1]).await?;

    let client = MockClient::new().with_channel(1, 101);
    let service = ChannelBroadcastService::new(db, &client);
    let request = BroadcastRequest::new(
        BroadcastMode::Text,
        Some("quiet".to_string()),
        None,
        true,
        "alice",
    );

    service.broadcast_to_channels(&request).await.unwrap();

    let sends = client.channel_sends.lock().unwrap();
    assert!(!sends[0].1.content.as_deref().unwrap().contains("Sent by"));

    Ok(())
}
