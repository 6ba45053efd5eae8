//! Inference of simulated write actions.
//!
//! After a successful completion, each write-enabled tool is checked for a
//! write action and gets at most one [`ActionEvent`]. The default
//! [`KeywordVerifier`] matches fixed keyword sets against the lower-cased
//! query and deliberately ignores the assistant's reply: the notification
//! can claim an action the assistant never confirmed, or even declined.
//! That mismatch is part of the simulated behavior. A reply-grounded
//! verifier can be swapped in through [`ActionVerifier`] without touching
//! the engine.

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::permissions::Permissions;
use crate::tool::ToolId;

const CALENDAR_KEYWORDS: &[&str] = &["schedule", "meeting", "add to calendar", "create event"];
const EMAIL_KEYWORDS: &[&str] = &["send", "email", "reply", "respond"];
const FILES_KEYWORDS: &[&str] = &["create", "file", "document", "save"];

/// A simulated confirmation that a write action occurred.
#[derive(Debug, Clone, Serialize)]
pub struct ActionEvent {
    pub id: Uuid,
    pub category: ToolId,
    pub description: String,
    pub created_at: DateTime<Utc>,
}

impl ActionEvent {
    fn new(category: ToolId) -> Self {
        Self {
            id: Uuid::new_v4(),
            category,
            description: describe(category).to_string(),
            created_at: Utc::now(),
        }
    }
}

fn describe(tool: ToolId) -> &'static str {
    match tool {
        ToolId::Calendar => "Calendar event created successfully",
        ToolId::Email => "Email sent successfully",
        ToolId::Files => "File created successfully",
    }
}

fn keywords(tool: ToolId) -> &'static [&'static str] {
    match tool {
        ToolId::Calendar => CALENDAR_KEYWORDS,
        ToolId::Email => EMAIL_KEYWORDS,
        ToolId::Files => FILES_KEYWORDS,
    }
}

/// Decides whether a successful completion performed a write action for a
/// tool. Called only for write-enabled tools.
pub trait ActionVerifier {
    fn performed(&self, tool: ToolId, query: &str, reply: &str) -> bool;
}

/// Default verifier: fixed per-tool keyword sets over the lower-cased query.
/// The reply text is ignored entirely.
#[derive(Debug, Clone, Copy, Default)]
pub struct KeywordVerifier;

impl ActionVerifier for KeywordVerifier {
    fn performed(&self, tool: ToolId, query: &str, _reply: &str) -> bool {
        let query = query.to_lowercase();
        keywords(tool).iter().any(|k| query.contains(k))
    }
}

/// Infer write actions for the current grants. At most one event per tool,
/// independent across tools; a single query can trigger all three.
pub fn infer(
    permissions: &Permissions,
    query: &str,
    reply: &str,
    verifier: &dyn ActionVerifier,
) -> Vec<ActionEvent> {
    ToolId::ORDERED
        .iter()
        .copied()
        .filter(|tool| permissions.write_enabled(*tool))
        .filter(|tool| verifier.performed(*tool, query, reply))
        .map(ActionEvent::new)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_enabled(tools: &[ToolId]) -> Permissions {
        let mut perms = Permissions::new();
        for tool in tools {
            perms.connect(*tool);
            perms.enable_write(*tool);
        }
        perms
    }

    #[test]
    fn test_calendar_keyword_fires_one_event() {
        let perms = write_enabled(&[ToolId::Calendar]);
        let events = infer(
            &perms,
            "Schedule a meeting with Sarah tomorrow at 3pm",
            "Done!",
            &KeywordVerifier,
        );
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].category, ToolId::Calendar);
        assert_eq!(events[0].description, "Calendar event created successfully");
    }

    #[test]
    fn test_no_event_without_write_access() {
        // Read-only connection: keywords alone never produce an event.
        let mut perms = Permissions::new();
        perms.connect(ToolId::Calendar);
        let events = infer(
            &perms,
            "Schedule a meeting with Sarah tomorrow at 3pm",
            "Done!",
            &KeywordVerifier,
        );
        assert!(events.is_empty());
    }

    #[test]
    fn test_matching_is_case_insensitive() {
        let perms = write_enabled(&[ToolId::Email]);
        let events = infer(&perms, "SEND A REPLY TO MY BOSS", "ok", &KeywordVerifier);
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].category, ToolId::Email);
    }

    #[test]
    fn test_multiple_tools_fire_independently() {
        let perms = write_enabled(&[ToolId::Email, ToolId::Files]);
        let events = infer(
            &perms,
            "Send a reply and save the document",
            "ok",
            &KeywordVerifier,
        );
        let mut categories: Vec<ToolId> = events.iter().map(|e| e.category).collect();
        categories.sort_by_key(|c| c.to_string());
        assert_eq!(categories, vec![ToolId::Email, ToolId::Files]);
    }

    #[test]
    fn test_at_most_one_event_per_tool() {
        let perms = write_enabled(&[ToolId::Calendar]);
        let events = infer(
            &perms,
            "schedule a meeting and create event for sprint planning",
            "ok",
            &KeywordVerifier,
        );
        assert_eq!(events.len(), 1);
    }

    #[test]
    fn test_default_verifier_ignores_reply_text() {
        let perms = write_enabled(&[ToolId::Calendar]);
        let events = infer(
            &perms,
            "schedule a meeting",
            "I'm sorry, I can't do that.",
            &KeywordVerifier,
        );
        assert_eq!(events.len(), 1, "fires even when the assistant declined");
    }

    #[test]
    fn test_custom_verifier_can_ground_on_reply() {
        struct ConfirmationVerifier;
        impl ActionVerifier for ConfirmationVerifier {
            fn performed(&self, _tool: ToolId, _query: &str, reply: &str) -> bool {
                reply.to_lowercase().contains("i've")
            }
        }

        let perms = write_enabled(&[ToolId::Calendar]);
        let declined = infer(&perms, "schedule a meeting", "No.", &ConfirmationVerifier);
        assert!(declined.is_empty());
        let confirmed = infer(
            &perms,
            "schedule a meeting",
            "I've added it to your calendar.",
            &ConfirmationVerifier,
        );
        assert_eq!(confirmed.len(), 1);
    }
}
