//! Terminal sink for engine events.

use std::io;

use capgate_core::{EngineEvent, EngineSink};

/// Prints engine events as plain lines on stdout.
pub struct CliSink;

impl EngineSink for CliSink {
    fn handle(&mut self, event: EngineEvent<'_>) -> io::Result<()> {
        match event {
            EngineEvent::PermissionsChanged { tool, access } => {
                let name: &str = tool.as_ref();
                println!(
                    "[{}] {}{}",
                    name,
                    if access.connected {
                        "connected"
                    } else {
                        "disconnected"
                    },
                    if access.write_enabled {
                        ", write enabled"
                    } else {
                        ""
                    },
                );
            }
            EngineEvent::Reply(text) => println!("\nassistant: {}\n", text),
            EngineEvent::Failure(err) => println!("\nassistant (error): {}\n", err),
            EngineEvent::ActionPosted(action) => println!("[action] {}", action.description),
        }
        Ok(())
    }
}
