use crate::{
    error::delivery::DeliveryError,
    model::{
        broadcast::DirectMessageRequest,
        report::{BroadcastReport, DeliveryOutcome, TargetKind},
    },
    service::{client::BroadcastClient, fan_out::fan_out, message::compose_direct_message},
    util::parse::parse_user_id,
};

pub struct DirectMessageService<'a> {
    client: &'a dyn BroadcastClient,
}

impl<'a> DirectMessageService<'a> {
    pub fn new(client: &'a dyn BroadcastClient) -> Self {
        Self { client }
    }

    /// Sends the composed DM to every listed user.
    ///
    /// Each identifier is parsed, fetched and messaged in turn. Failures are labelled
    /// with the identifier as the invoker typed it.
    ///
    /// # Returns
    /// - `BroadcastReport` - One outcome per identifier
    pub async fn broadcast_to_users(&self, request: &DirectMessageRequest) -> BroadcastReport {
        let content = compose_direct_message(&request.message, request.signature());

        let report = fan_out(TargetKind::Users, request.user_ids.iter(), |raw| {
            self.deliver_to_user(raw, &content)
        })
        .await;

        tracing::info!(
            "DM broadcast finished: {} sent, {} failed",
            report.success_count,
            report.fail_count
        );

        report
    }

    async fn deliver_to_user(&self, raw: &str, content: &str) -> DeliveryOutcome {
        let user_id = match parse_user_id(raw) {
            Ok(user_id) => user_id,
            Err(e) => {
                tracing::error!("Error sending DM to user {}: {}", raw, e);
                return DeliveryOutcome::Failed(format!("User ID: {}", raw));
            }
        };

        match self.client.fetch_user(user_id).await {
            Ok(Some(user)) => tracing::debug!("Sending DM to {} ({})", user.name, user.user_id),
            Ok(None) | Err(DeliveryError::NotFound) => {
                return DeliveryOutcome::Failed(format!("Unknown User (ID: {})", raw));
            }
            Err(e) => {
                tracing::error!("Error fetching user {}: {:?}", user_id, e);
                return DeliveryOutcome::Failed(format!("User ID: {}", raw));
            }
        }

        match self.client.send_direct_message(user_id, content).await {
            Ok(()) => DeliveryOutcome::Delivered,
            Err(DeliveryError::Forbidden) => {
                DeliveryOutcome::Failed(format!("User ID: {} (DMs Closed)", raw))
            }
            Err(e) => {
                tracing::error!("Error sending DM to user {}: {:?}", user_id, e);
                DeliveryOutcome::Failed(format!("User ID: {}", raw))
            }
        }
    }
}
