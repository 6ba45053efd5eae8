//! Per-tool connection and write-permission state.
//!
//! The invariant `write_enabled ⇒ connected` is enforced structurally:
//! disconnecting a tool force-drops its write permission in the same call,
//! and write toggles are rejected while the tool is disconnected. No
//! reachable state violates it.
//!
//! The store is pure state. Side effects that accompany permission changes
//! (dropping the latest reply and live notifications) belong to the engine
//! facade, which wraps every mutation.

use crate::tool::ToolId;

/// Access flags for a single tool.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ToolAccess {
    /// Read access: the tool's content appears in the composed context.
    pub connected: bool,
    /// Write access: implies `connected`.
    pub write_enabled: bool,
}

/// Connection and write flags for all three tools.
///
/// Starts fully disconnected. All transitions are total over the tool set;
/// there are no error conditions.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Permissions {
    calendar: ToolAccess,
    email: ToolAccess,
    files: ToolAccess,
}

impl Permissions {
    /// All tools disconnected, no write access.
    pub fn new() -> Self {
        Self::default()
    }

    /// The access flags for a tool.
    pub fn access(&self, tool: ToolId) -> ToolAccess {
        *self.slot(tool)
    }

    /// Whether a tool is connected (read access granted).
    pub fn connected(&self, tool: ToolId) -> bool {
        self.slot(tool).connected
    }

    /// Whether a tool is write-enabled. Never true while disconnected.
    pub fn write_enabled(&self, tool: ToolId) -> bool {
        self.slot(tool).write_enabled
    }

    /// Whether any tool at all is connected.
    pub fn any_connected(&self) -> bool {
        ToolId::ORDERED.iter().any(|t| self.connected(*t))
    }

    /// Grant read access to a tool.
    pub fn connect(&mut self, tool: ToolId) {
        self.slot_mut(tool).connected = true;
    }

    /// Revoke read access, atomically dropping write access with it.
    pub fn disconnect(&mut self, tool: ToolId) {
        let slot = self.slot_mut(tool);
        slot.connected = false;
        slot.write_enabled = false;
    }

    /// Grant write access. No-op while disconnected; returns whether the
    /// toggle applied.
    pub fn enable_write(&mut self, tool: ToolId) -> bool {
        let slot = self.slot_mut(tool);
        if !slot.connected {
            return false;
        }
        slot.write_enabled = true;
        true
    }

    /// Revoke write access. No-op while disconnected; returns whether the
    /// toggle applied.
    pub fn disable_write(&mut self, tool: ToolId) -> bool {
        let slot = self.slot_mut(tool);
        if !slot.connected {
            return false;
        }
        slot.write_enabled = false;
        true
    }

    fn slot(&self, tool: ToolId) -> &ToolAccess {
        match tool {
            ToolId::Calendar => &self.calendar,
            ToolId::Email => &self.email,
            ToolId::Files => &self.files,
        }
    }

    fn slot_mut(&mut self, tool: ToolId) -> &mut ToolAccess {
        match tool {
            ToolId::Calendar => &mut self.calendar,
            ToolId::Email => &mut self.email,
            ToolId::Files => &mut self.files,
        }
    }
}
