/// Longest failure list, in characters, included in a rendered report.
pub const MAX_FAILURE_TEXT_LENGTH: usize = 1000;

const TRUNCATION_MARKER: &str = "... (truncated)";

/// Kind of target a broadcast fans out to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetKind {
    Channels,
    Users,
}

impl TargetKind {
    fn title(self) -> &'static str {
        match self {
            TargetKind::Channels => "Broadcast complete!",
            TargetKind::Users => "DM broadcast complete!",
        }
    }

    fn noun(self) -> &'static str {
        match self {
            TargetKind::Channels => "channels",
            TargetKind::Users => "users",
        }
    }
}

/// Result of delivering to one target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeliveryOutcome {
    Delivered,
    /// Delivery failed; the label identifies the target for the invoker.
    Failed(String),
}

/// Aggregated outcome of a broadcast.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BroadcastReport {
    pub kind: TargetKind,
    pub success_count: usize,
    pub fail_count: usize,
    /// Failure labels in the order targets were attempted.
    pub failures: Vec<String>,
}

impl BroadcastReport {
    pub fn new(kind: TargetKind) -> Self {
        Self {
            kind,
            success_count: 0,
            fail_count: 0,
            failures: Vec::new(),
        }
    }

    pub fn record(&mut self, outcome: DeliveryOutcome) {
        match outcome {
            DeliveryOutcome::Delivered => self.success_count += 1,
            DeliveryOutcome::Failed(label) => {
                self.fail_count += 1;
                self.failures.push(label);
            }
        }
    }

    /// Number of targets attempted.
    pub fn attempted(&self) -> usize {
        self.success_count + self.fail_count
    }

    /// Renders the summary shown to the invoker.
    ///
    /// ```text
    /// Broadcast complete!
    /// Successfully sent: 3 channels
    /// Failed: 1 channels
    ///
    /// Failed channels:
    /// Unknown Channel (ID: 42)
    /// ```
    pub fn render(&self) -> String {
        let noun = self.kind.noun();
        let mut text = format!(
            "{}\nSuccessfully sent: {} {}\nFailed: {} {}",
            self.kind.title(),
            self.success_count,
            noun,
            self.fail_count,
            noun
        );

        if !self.failures.is_empty() {
            text.push_str(&format!(
                "\n\nFailed {}:\n{}",
                noun,
                truncate_failures(&self.failures.join("\n"))
            ));
        }

        text
    }
}

/// Cuts a failure list to `MAX_FAILURE_TEXT_LENGTH` characters plus a marker.
pub fn truncate_failures(text: &str) -> String {
    if text.chars().count() <= MAX_FAILURE_TEXT_LENGTH {
        return text.to_string();
    }

    let mut truncated: String = text.chars().take(MAX_FAILURE_TEXT_LENGTH).collect();
    truncated.push_str(TRUNCATION_MARKER);
    truncated
}
