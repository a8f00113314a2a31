const ANNOUNCEMENT_TITLE: &str = "🔔 **System Announcement** 🔔";
const DIRECT_MESSAGE_TITLE: &str = "🔔 **System DM** 🔔";
const DIVIDER: &str = "------------------------";

/// Wraps a message in the channel announcement frame.
pub fn compose_announcement(message: &str, author: Option<&str>) -> String {
    compose(ANNOUNCEMENT_TITLE, message, author)
}

/// Wraps a message in the direct message frame.
pub fn compose_direct_message(message: &str, author: Option<&str>) -> String {
    compose(DIRECT_MESSAGE_TITLE, message, author)
}

fn compose(title: &str, message: &str, author: Option<&str>) -> String {
    let mut text = format!("{}\n{}\n{}\n{}\n", title, DIVIDER, message, DIVIDER);

    if let Some(author) = author {
        text.push_str(&format!("*Sent by {}*", author));
    }

    text
}
