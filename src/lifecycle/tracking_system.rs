use crate::admin::NonceIssuer;
use crate::clients::OrderClient;
use crate::config::AppConfig;
use crate::email::{EmailDispatcher, Mailer};
use crate::hooks::Hooks;
use crate::server::{self, AppState};
use crate::templates::Templates;
use crate::tracking::TrackingManager;
use axum::Router;
use std::sync::Arc;
use thiserror::Error;
use tracing::{error, info};

#[derive(Debug, Error)]
pub enum SystemError {
    #[error("Failed to load templates: {0}")]
    Templates(#[from] minijinja::Error),

    #[error("Actor task failed: {0}")]
    ActorFailed(String),
}

/// Runtime orchestrator: owns the order-store actor and wires the tracking
/// manager, the email dispatcher and the admin nonces around it.
///
/// # Example
///
/// ```rust
/// use jadlog_tracking::config::AppConfig;
/// use jadlog_tracking::email::OutboxMailer;
/// use jadlog_tracking::hooks::Hooks;
/// use jadlog_tracking::lifecycle::TrackingSystem;
/// use jadlog_tracking::model::OrderCreate;
/// use std::sync::Arc;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let outbox = OutboxMailer::new();
///     let system = TrackingSystem::new(&AppConfig::default(), Arc::new(outbox.clone()), Hooks::new())?;
///
///     let id = system
///         .order_client
///         .place_order(OrderCreate { number: None, billing_email: Some("ana@example.com".into()) })
///         .await?;
///     system.tracking.write(id, "JD123").await?;
///     assert_eq!(outbox.sent().len(), 1);
///
///     system.shutdown().await?;
///     Ok(())
/// }
/// ```
pub struct TrackingSystem {
    /// Host-side access to orders (placing them, reading notes).
    pub order_client: OrderClient,

    pub tracking: TrackingManager,

    pub nonces: NonceIssuer,

    pub templates: Arc<Templates>,

    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl TrackingSystem {
    /// Starts the order-store actor and builds everything that depends on it.
    ///
    /// `hooks` is frozen here; filters cannot be added once the system runs.
    pub fn new(
        config: &AppConfig,
        mailer: Arc<dyn Mailer>,
        hooks: Hooks,
    ) -> Result<Self, SystemError> {
        let templates = Arc::new(Templates::new()?);

        let (order_actor, order_client) = crate::order_actor::new();
        let order_handle = tokio::spawn(order_actor.run(()));
        let order_client = OrderClient::new(order_client);

        let dispatcher = EmailDispatcher::new(
            config.notification.clone(),
            config.store.clone(),
            Arc::new(hooks),
            templates.clone(),
            mailer,
        );
        let tracking = TrackingManager::new(Arc::new(order_client.clone()), Arc::new(dispatcher));
        let nonces = NonceIssuer::new(
            config.security.nonce_secret.clone(),
            config.security.nonce_lifetime_secs,
        );

        info!(
            notification_enabled = config.notification.enabled,
            email_type = ?config.notification.email_type,
            "Tracking system started"
        );

        Ok(Self {
            order_client,
            tracking,
            nonces,
            templates,
            handles: vec![order_handle],
        })
    }

    pub fn app_state(&self) -> AppState {
        AppState {
            tracking: self.tracking.clone(),
            nonces: self.nonces.clone(),
            templates: self.templates.clone(),
        }
    }

    pub fn router(&self) -> Router {
        server::router(self.app_state())
    }

    /// Drops this system's clients and waits for the actor to stop.
    ///
    /// The actor only stops once every clone of its client is gone, so any
    /// router or [`AppState`] handed out must be dropped first.
    pub async fn shutdown(self) -> Result<(), SystemError> {
        info!("Shutting down system...");

        drop(self.order_client);
        drop(self.tracking);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!("Actor task failed: {:?}", e);
                return Err(SystemError::ActorFailed(format!("{e:?}")));
            }
        }

        info!("System shutdown complete.");
        Ok(())
    }
}
