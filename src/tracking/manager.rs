use super::error::TrackingError;
use super::notifier::TrackingNotifier;
use super::store::OrderStore;
use crate::model::OrderId;
use std::fmt::Display;
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};

/// Metadata key holding the tracking code. Existing stores depend on it.
pub const META_KEY: &str = "_jadlog_tracking_code";

/// How a write changed the stored code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// No code before, one now. The only transition that emails the customer.
    Added,
    /// A code was replaced, even by the same value.
    Updated,
    /// The code was cleared by an empty submission.
    Removed,
}

impl Display for Transition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Transition::Added => "added",
            Transition::Updated => "updated",
            Transition::Removed => "removed",
        };
        f.write_str(name)
    }
}

/// Reads and writes tracking codes, appending one audit note per write.
///
/// The read-modify-write in [`write`](Self::write) spans several store
/// requests and is not atomic. Two concurrent writes for one order race and
/// the last one wins; its note and notification are decided from whatever
/// previous code it observed.
#[derive(Clone)]
pub struct TrackingManager {
    store: Arc<dyn OrderStore>,
    notifier: Arc<dyn TrackingNotifier>,
}

impl TrackingManager {
    pub fn new(store: Arc<dyn OrderStore>, notifier: Arc<dyn TrackingNotifier>) -> Self {
        Self { store, notifier }
    }

    /// Current tracking code of an order, `None` if it was never set.
    #[instrument(skip(self))]
    pub async fn read(&self, order_id: OrderId) -> Result<Option<String>, TrackingError> {
        let code = self.store.meta(order_id, META_KEY).await?;
        Ok(code.filter(|c| !c.is_empty()))
    }

    /// Stores `code` as the order's tracking code, or clears it when empty.
    ///
    /// The code is stored exactly as given. Callers trim user input.
    ///
    /// A notification error is reported only after the code and the note were
    /// saved; neither is rolled back.
    #[instrument(skip(self, code))]
    pub async fn write(&self, order_id: OrderId, code: &str) -> Result<Transition, TrackingError> {
        debug!(%code, "Writing tracking code");
        let previous = self.read(order_id).await?;

        if code.is_empty() {
            self.store.delete_meta(order_id, META_KEY).await?;
            let removed = previous.unwrap_or_default();
            self.store
                .add_note(order_id, format!("Removed tracking code: {removed}"))
                .await?;
            info!(%order_id, transition = %Transition::Removed, "Tracking code changed");
            return Ok(Transition::Removed);
        }

        self.store.update_meta(order_id, META_KEY, code).await?;

        if previous.is_some() {
            self.store
                .add_note(order_id, format!("Updated tracking code to: {code}"))
                .await?;
            info!(%order_id, transition = %Transition::Updated, "Tracking code changed");
            return Ok(Transition::Updated);
        }

        self.store
            .add_note(order_id, format!("Added tracking code: {code}"))
            .await?;
        info!(%order_id, transition = %Transition::Added, "Tracking code changed");

        let order = self.store.order(order_id).await?;
        match self.notifier.notify(&order, code).await {
            Ok(outcome) => debug!(?outcome, "Notification handled"),
            Err(e) => {
                warn!(%order_id, error = %e, "Tracking email failed");
                return Err(e.into());
            }
        }
        Ok(Transition::Added)
    }
}
