//! Tool identity for the three simulated external systems.
//!
//! The tool set is closed: calendar, email, and files are the only members,
//! and nothing can be added at runtime. Everything downstream (permissions,
//! prompt composition, action inference) is total over this enum.

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString};

/// One of the simulated external systems the assistant can be granted
/// access to.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumString, AsRefStr, Display,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum ToolId {
    Calendar,
    Email,
    Files,
}

impl ToolId {
    /// The fixed order tools appear in the composed context.
    pub const ORDERED: [ToolId; 3] = [ToolId::Calendar, ToolId::Email, ToolId::Files];
}
