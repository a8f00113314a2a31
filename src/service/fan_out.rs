use std::future::Future;

use crate::model::report::{BroadcastReport, DeliveryOutcome, TargetKind};

/// Delivers to each target in turn and tallies the outcomes.
///
/// Targets are attempted sequentially in iteration order. A failing target never
/// stops the remaining ones, so the report always accounts for every target.
///
/// # Arguments
/// - `kind` - Whether targets are channels or users, used when rendering
/// - `targets` - Targets to deliver to
/// - `deliver` - Per-target delivery returning a tagged outcome
///
/// # Returns
/// - `BroadcastReport` - One recorded outcome per target
pub async fn fan_out<T, I, F, Fut>(kind: TargetKind, targets: I, mut deliver: F) -> BroadcastReport
where
    I: IntoIterator<Item = T>,
    F: FnMut(T) -> Fut,
    Fut: Future<Output = DeliveryOutcome>,
{
    let mut report = BroadcastReport::new(kind);

    for target in targets {
        report.record(deliver(target).await);
    }

    report
}
