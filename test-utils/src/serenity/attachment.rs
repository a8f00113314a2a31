//! Test factory for creating Serenity Attachment objects.

use serenity::all::Attachment;

/// Creates a test Serenity Attachment.
///
/// The attachment points at a CDN-style URL derived from the ID and filename. All
/// other fields are set to reasonable defaults for a small PNG image.
///
/// # Arguments
/// - `attachment_id` - Discord attachment ID (snowflake)
/// - `filename` - Uploaded filename, including any `SPOILER_` prefix
///
/// # Returns
/// - `Attachment` - A valid Serenity Attachment struct for testing
///
/// # Panics
/// - If the JSON cannot be deserialized into an Attachment (indicates invalid test data)
pub fn create_test_attachment(attachment_id: u64, filename: &str) -> Attachment {
    let url = format!(
        "https://cdn.discordapp.com/attachments/100000000000000000/{}/{}",
        attachment_id, filename
    );

    serde_json::from_value(serde_json::json!({
        "id": attachment_id.to_string(),
        "filename": filename,
        "size": 2048,
        "url": url,
        "proxy_url": url,
        "height": 64,
        "width": 64,
        "content_type": "image/png",
    }))
    .expect("Failed to create test attachment - invalid JSON structure")
}
