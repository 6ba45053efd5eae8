//! Capability-scoped instruction composition.
//!
//! `compose` turns the current permission state and the mock dataset into the
//! system-level instruction text for one completion call. It is a pure
//! function: same inputs, same string, no hidden state. Tools are visited in
//! the fixed order calendar, email, files; a disconnected tool contributes
//! nothing at all.

use crate::dataset::Dataset;
use crate::permissions::Permissions;
use crate::tool::ToolId;

const LEAD: &str = "You are a helpful AI assistant demonstrating MCP capabilities. ";

const NO_ACCESS_CLAUSE: &str = "You do NOT have access to any external tools, calendars, emails, \
     or files. If the user asks about their schedule, emails, or documents, politely explain you \
     don't have access to that information and suggest they connect those tools.";

const CLOSING_DIRECTIVE: &str = " Keep responses concise (2-3 sentences max). Be specific about \
     what actions you took if write access was used.";

fn read_clause(tool: ToolId, content: &str) -> String {
    match tool {
        ToolId::Calendar => format!(
            "You have READ access to the user's calendar. Here is their schedule: {} ",
            content
        ),
        ToolId::Email => format!(
            "You have READ access to the user's email. Here are recent messages: {} ",
            content
        ),
        ToolId::Files => format!(
            "You have READ access to the user's files. Here are recent documents: {} ",
            content
        ),
    }
}

fn write_clause(tool: ToolId) -> &'static str {
    match tool {
        ToolId::Calendar => {
            "You also have WRITE access to create, modify, or delete calendar events. If the user \
             asks you to schedule something, confirm you've done it and describe what you created. "
        }
        ToolId::Email => {
            "You also have WRITE access to send emails on behalf of the user. If the user asks \
             you to send something, confirm you've done it and describe what you sent. "
        }
        ToolId::Files => {
            "You also have WRITE access to create or modify files. If the user asks you to \
             create a document, confirm you've done it. "
        }
    }
}

/// Compose the instruction context for the current capability grants.
///
/// Connected tools contribute a read clause embedding their dataset content
/// verbatim, plus a write clause when write-enabled. With nothing connected,
/// a single no-access clause instructs the assistant to decline and suggest
/// connecting tools. The closing directive is always appended.
pub fn compose(permissions: &Permissions, dataset: &Dataset) -> String {
    let mut context = String::from(LEAD);

    for tool in ToolId::ORDERED {
        if !permissions.connected(tool) {
            continue;
        }
        context.push_str(&read_clause(tool, dataset.content(tool)));
        if permissions.write_enabled(tool) {
            context.push_str(write_clause(tool));
        }
    }

    if !permissions.any_connected() {
        context.push_str(NO_ACCESS_CLAUSE);
    }

    context.push_str(CLOSING_DIRECTIVE);
    context
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compose_is_deterministic() {
        let mut perms = Permissions::new();
        perms.connect(ToolId::Calendar);
        perms.enable_write(ToolId::Calendar);
        perms.connect(ToolId::Files);
        let dataset = Dataset::builtin();
        assert_eq!(compose(&perms, &dataset), compose(&perms, &dataset));
    }

    #[test]
    fn test_no_tools_connected_emits_only_no_access_clause() {
        let perms = Permissions::new();
        let context = compose(&perms, &Dataset::builtin());
        assert!(context.contains("You do NOT have access"));
        assert!(!context.contains("READ access"));
        assert!(!context.contains("WRITE access"));
    }

    #[test]
    fn test_connected_tool_embeds_dataset_verbatim() {
        let mut perms = Permissions::new();
        perms.connect(ToolId::Email);
        let dataset = Dataset::custom("cal", "inbox snapshot here", "docs");
        let context = compose(&perms, &dataset);
        assert!(context.contains("inbox snapshot here"));
        assert!(!context.contains("You do NOT have access"));
    }

    #[test]
    fn test_read_only_tool_has_no_write_clause() {
        let mut perms = Permissions::new();
        perms.connect(ToolId::Calendar);
        let context = compose(&perms, &Dataset::builtin());
        assert!(context.contains("READ access to the user's calendar"));
        assert!(!context.contains("WRITE access"));
    }

    #[test]
    fn test_write_enabled_tool_has_both_clauses() {
        let mut perms = Permissions::new();
        perms.connect(ToolId::Calendar);
        perms.enable_write(ToolId::Calendar);
        let context = compose(&perms, &Dataset::builtin());
        assert!(context.contains("READ access to the user's calendar"));
        assert!(context.contains("WRITE access to create, modify, or delete calendar events"));
    }

    #[test]
    fn test_tools_appear_in_fixed_order() {
        let mut perms = Permissions::new();
        for tool in ToolId::ORDERED {
            perms.connect(tool);
        }
        let context = compose(&perms, &Dataset::builtin());
        let calendar = context.find("user's calendar").unwrap();
        let email = context.find("user's email").unwrap();
        let files = context.find("user's files").unwrap();
        assert!(calendar < email && email < files);
    }

    #[test]
    fn test_closing_directive_always_present() {
        let connected = {
            let mut perms = Permissions::new();
            perms.connect(ToolId::Files);
            compose(&perms, &Dataset::builtin())
        };
        let disconnected = compose(&Permissions::new(), &Dataset::builtin());
        for context in [connected, disconnected] {
            assert!(context.ends_with("Be specific about what actions you took if write access was used."));
        }
    }
}
