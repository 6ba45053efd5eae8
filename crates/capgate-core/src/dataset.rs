//! Simulated read content for each tool.
//!
//! The dataset is created once and never mutated: the prompt composer embeds
//! these strings verbatim in the read-access clauses, so the assistant's
//! "knowledge" of the user's calendar, inbox, and files is entirely canned.

use crate::tool::ToolId;

const CALENDAR_CONTENT: &str = "Today: 10am Team Standup, 2pm Client Call with Acme Corp, \
     4pm Code Review. Tomorrow: 9am Dentist, 1pm Lunch with Sarah, 3pm Sprint Planning.";

const EMAIL_CONTENT: &str = "Recent emails: (1) From: boss@company.com - Subject: Q4 Planning - \
     needs response by EOD. (2) From: sarah@gmail.com - Subject: Dinner Friday? \
     (3) From: notifications@github.com - PR #234 approved.";

const FILES_CONTENT: &str = "Recent files: quarterly-report-draft.docx (modified yesterday), \
     project-roadmap.pdf, meeting-notes-nov.md, budget-2025.xlsx.";

/// Read-only per-tool content, fixed for the lifetime of the process.
#[derive(Debug, Clone)]
pub struct Dataset {
    calendar: String,
    email: String,
    files: String,
}

impl Dataset {
    /// The built-in mock dataset.
    pub fn builtin() -> Self {
        Self {
            calendar: CALENDAR_CONTENT.to_string(),
            email: EMAIL_CONTENT.to_string(),
            files: FILES_CONTENT.to_string(),
        }
    }

    /// A dataset with caller-supplied content, for embedding with different
    /// scenario text.
    pub fn custom(calendar: impl Into<String>, email: impl Into<String>, files: impl Into<String>) -> Self {
        Self {
            calendar: calendar.into(),
            email: email.into(),
            files: files.into(),
        }
    }

    /// The simulated read content for a tool.
    pub fn content(&self, tool: ToolId) -> &str {
        match tool {
            ToolId::Calendar => &self.calendar,
            ToolId::Email => &self.email,
            ToolId::Files => &self.files,
        }
    }
}

impl Default for Dataset {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_content_is_nonempty_for_every_tool() {
        let dataset = Dataset::builtin();
        for tool in ToolId::ORDERED {
            assert!(!dataset.content(tool).is_empty());
        }
    }

    #[test]
    fn test_custom_content_round_trips() {
        let dataset = Dataset::custom("a", "b", "c");
        assert_eq!(dataset.content(ToolId::Calendar), "a");
        assert_eq!(dataset.content(ToolId::Email), "b");
        assert_eq!(dataset.content(ToolId::Files), "c");
    }
}
