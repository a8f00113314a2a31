use crate::{
    bot::Context,
    error::AppError,
    model::listing::ChannelListing,
    service::listing::ChannelListingService,
    util::pagination::{chunk_entries, MAX_PAGE_LENGTH},
};

/// List all ball spawn channels
#[poise::command(slash_command, prefix_command)]
pub async fn channels(ctx: Context<'_>) -> Result<(), AppError> {
    ctx.defer().await?;

    let data = ctx.data();
    let listing = ChannelListingService::new(&data.db, &data.client)
        .list_channels()
        .await?;

    let entries = match listing {
        ChannelListing::Entries(entries) => entries,
        empty => {
            if let Some(message) = empty.empty_message() {
                ctx.say(message).await?;
            }
            return Ok(());
        }
    };

    let pages = chunk_entries(&entries, MAX_PAGE_LENGTH);
    let pages: Vec<&str> = pages.iter().map(String::as_str).collect();

    poise::builtins::paginate(ctx, &pages).await?;

    Ok(())
}
