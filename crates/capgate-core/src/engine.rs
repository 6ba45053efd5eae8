//! High-level facade tying the engine together.
//!
//! `Capgate` owns the permission store, the dataset, the gateway, the latest
//! result slot, and the notification center. Every permission mutation
//! routes through it so the clearing side effect cannot be skipped: a stale
//! capability context must never leave a reply or a notification behind
//! that claims an access grant which no longer holds.

use std::io;
use std::time::Duration;

use crate::actions::{self, ActionVerifier, KeywordVerifier};
use crate::api::{CompletionGateway, GatewayError, HttpGateway};
use crate::config::Config;
use crate::dataset::Dataset;
use crate::notify::NotificationCenter;
use crate::permissions::Permissions;
use crate::prompt::compose;
use crate::sink::{EngineEvent, EngineSink};
use crate::tool::ToolId;

/// The tool-access simulation engine.
///
/// Generic over the completion gateway so tests and alternative backends can
/// stand in for the HTTP endpoint.
///
/// Submissions are not serialized internally: the caller must not issue a
/// new `submit` while one is outstanding (the interactive shell is
/// sequential by construction). Overlapping submissions apply results in
/// completion order, not issuance order.
pub struct Capgate<G> {
    permissions: Permissions,
    dataset: Dataset,
    gateway: G,
    verifier: Box<dyn ActionVerifier + Send + Sync>,
    notifications: NotificationCenter,
    latest: Option<Result<String, GatewayError>>,
}

impl Capgate<HttpGateway> {
    /// Build an engine talking to the configured completion endpoint, with
    /// the built-in dataset and the default keyword verifier.
    pub fn from_config(config: &Config) -> io::Result<Self> {
        let gateway = HttpGateway::new(
            config.endpoint.clone(),
            Duration::from_secs(config.timeout_secs),
        )?;
        Ok(Self::with_gateway(gateway, Dataset::builtin()))
    }
}

impl<G: CompletionGateway> Capgate<G> {
    /// Build an engine around an arbitrary gateway.
    pub fn with_gateway(gateway: G, dataset: Dataset) -> Self {
        Self {
            permissions: Permissions::new(),
            dataset,
            gateway,
            verifier: Box::new(KeywordVerifier),
            notifications: NotificationCenter::new(),
            latest: None,
        }
    }

    /// Replace the action verifier strategy.
    pub fn with_verifier(mut self, verifier: Box<dyn ActionVerifier + Send + Sync>) -> Self {
        self.verifier = verifier;
        self
    }

    /// Current permission state.
    pub fn permissions(&self) -> &Permissions {
        &self.permissions
    }

    /// Latest completion result, if any submission happened since the last
    /// permission change.
    pub fn latest(&self) -> Option<&Result<String, GatewayError>> {
        self.latest.as_ref()
    }

    /// Live action notifications.
    pub fn notifications(&self) -> &NotificationCenter {
        &self.notifications
    }

    /// The instruction context the next submission would send.
    pub fn composed_context(&self) -> String {
        compose(&self.permissions, &self.dataset)
    }

    /// Grant read access to a tool.
    pub fn connect<S: EngineSink>(&mut self, tool: ToolId, sink: &mut S) -> io::Result<()> {
        self.permissions.connect(tool);
        self.after_mutation(tool, sink)
    }

    /// Revoke read access (and with it, write access).
    pub fn disconnect<S: EngineSink>(&mut self, tool: ToolId, sink: &mut S) -> io::Result<()> {
        self.permissions.disconnect(tool);
        self.after_mutation(tool, sink)
    }

    /// Grant write access. Ignored while the tool is disconnected.
    pub fn enable_write<S: EngineSink>(&mut self, tool: ToolId, sink: &mut S) -> io::Result<()> {
        if self.permissions.enable_write(tool) {
            self.after_mutation(tool, sink)?;
        }
        Ok(())
    }

    /// Revoke write access. Ignored while the tool is disconnected.
    pub fn disable_write<S: EngineSink>(&mut self, tool: ToolId, sink: &mut S) -> io::Result<()> {
        if self.permissions.disable_write(tool) {
            self.after_mutation(tool, sink)?;
        }
        Ok(())
    }

    /// Submit a query: compose the capability context, call the gateway, and
    /// on success infer write actions and post their notifications.
    ///
    /// Blank queries are rejected before composing anything and leave all
    /// state untouched. Errors land in the same latest-result slot as a
    /// success; nothing retries.
    pub async fn submit<S: EngineSink>(&mut self, query: &str, sink: &mut S) -> io::Result<()> {
        if query.trim().is_empty() {
            return Ok(());
        }

        // The previous submission's notifications are stale the moment a new
        // one starts; latest-response-wins covers the result slot below.
        self.notifications.clear();

        let context = compose(&self.permissions, &self.dataset);
        let outcome = self.gateway.submit(&context, query).await;

        match &outcome {
            Ok(reply) => {
                sink.handle(EngineEvent::Reply(reply))?;
                let events =
                    actions::infer(&self.permissions, query, reply, self.verifier.as_ref());
                for event in events {
                    sink.handle(EngineEvent::ActionPosted(&event))?;
                    self.notifications.post(event);
                }
            }
            Err(err) => sink.handle(EngineEvent::Failure(err))?,
        }

        self.latest = Some(outcome);
        Ok(())
    }

    fn after_mutation<S: EngineSink>(&mut self, tool: ToolId, sink: &mut S) -> io::Result<()> {
        self.latest = None;
        self.notifications.clear();
        sink.handle(EngineEvent::PermissionsChanged {
            tool,
            access: self.permissions.access(tool),
        })
    }
}
