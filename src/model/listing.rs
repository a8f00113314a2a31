/// Result of listing the configured broadcast channels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChannelListing {
    /// No guild has broadcasting enabled with a spawn channel.
    NoChannelsConfigured,
    /// Channels are configured but none could be described.
    NoChannelInformation,
    /// One rendered block per channel, ready to paginate.
    Entries(Vec<String>),
}

impl ChannelListing {
    /// Message shown instead of a menu, `None` when there are entries to page through.
    pub fn empty_message(&self) -> Option<&'static str> {
        match self {
            ChannelListing::NoChannelsConfigured => {
                Some("No ball spawn channels are currently configured.")
            }
            ChannelListing::NoChannelInformation => {
                Some("Could not retrieve any channel information.")
            }
            ChannelListing::Entries(_) => None,
        }
    }
}
