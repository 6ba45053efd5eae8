//! Engine event sink for decoupling the engine from presentation.
//!
//! The rendering layer never owns transition logic: it implements
//! [`EngineSink`] and is told what happened. [`CollectingSink`] captures
//! events for embedding and tests.

use std::io;

use crate::actions::ActionEvent;
use crate::api::GatewayError;
use crate::permissions::ToolAccess;
use crate::tool::ToolId;

/// Events emitted by the engine as its state changes.
#[derive(Debug, Clone)]
pub enum EngineEvent<'a> {
    /// A permission mutation was applied. The previous reply and any live
    /// notifications were dropped with it.
    PermissionsChanged { tool: ToolId, access: ToolAccess },

    /// The latest submission produced an assistant reply.
    Reply(&'a str),

    /// The latest submission failed; the message stands in for the reply.
    Failure(&'a GatewayError),

    /// A write-action notification went live.
    ActionPosted(&'a ActionEvent),
}

/// Handler for engine events.
///
/// # Example
///
/// ```
/// use capgate_core::{EngineEvent, EngineSink};
/// use std::io;
///
/// struct ReplySink {
///     reply: String,
/// }
///
/// impl EngineSink for ReplySink {
///     fn handle(&mut self, event: EngineEvent<'_>) -> io::Result<()> {
///         if let EngineEvent::Reply(text) = event {
///             self.reply = text.to_string();
///         }
///         Ok(())
///     }
/// }
///
/// let mut sink = ReplySink { reply: String::new() };
/// sink.handle(EngineEvent::Reply("Hello")).unwrap();
/// assert_eq!(sink.reply, "Hello");
/// ```
pub trait EngineSink {
    fn handle(&mut self, event: EngineEvent<'_>) -> io::Result<()>;
}

/// A sink that collects events for programmatic use.
#[derive(Debug, Default)]
pub struct CollectingSink {
    /// Assistant replies, in submission order.
    pub replies: Vec<String>,
    /// Failure messages, in submission order.
    pub failures: Vec<String>,
    /// Action events posted.
    pub actions: Vec<ActionEvent>,
    /// Permission changes observed.
    pub permission_changes: Vec<(ToolId, ToolAccess)>,
}

impl CollectingSink {
    pub fn new() -> Self {
        Self::default()
    }
}

impl EngineSink for CollectingSink {
    fn handle(&mut self, event: EngineEvent<'_>) -> io::Result<()> {
        match event {
            EngineEvent::PermissionsChanged { tool, access } => {
                self.permission_changes.push((tool, access));
            }
            EngineEvent::Reply(text) => self.replies.push(text.to_string()),
            EngineEvent::Failure(err) => self.failures.push(err.to_string()),
            EngineEvent::ActionPosted(action) => self.actions.push(action.clone()),
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collecting_sink_gathers_replies_and_failures() {
        let mut sink = CollectingSink::new();
        sink.handle(EngineEvent::Reply("hi")).unwrap();
        sink.handle(EngineEvent::Failure(&GatewayError::Service(
            "Missing API Key".to_string(),
        )))
        .unwrap();
        assert_eq!(sink.replies, vec!["hi"]);
        assert_eq!(sink.failures, vec!["Missing API Key"]);
    }

    #[test]
    fn test_collecting_sink_tracks_permission_changes() {
        let mut sink = CollectingSink::new();
        sink.handle(EngineEvent::PermissionsChanged {
            tool: ToolId::Email,
            access: ToolAccess {
                connected: true,
                write_enabled: false,
            },
        })
        .unwrap();
        assert_eq!(sink.permission_changes.len(), 1);
        assert_eq!(sink.permission_changes[0].0, ToolId::Email);
    }
}
