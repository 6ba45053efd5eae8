//! capgate-core: tool-access simulation engine.
//!
//! Simulates how an AI assistant's usable capabilities change as the user
//! grants it read/write access to three mock tools (calendar, email, files).
//! Nothing real is connected: read content is a canned dataset, write
//! actions are inferred heuristically, and the "protocol" is imitated by
//! prompt text sent to a completion endpoint.
//!
//! # Quick Start
//!
//! ```no_run
//! use capgate_core::{Capgate, CollectingSink, Config, ToolId};
//!
//! #[tokio::main]
//! async fn main() -> std::io::Result<()> {
//!     let config = Config::default();
//!     let mut engine = Capgate::from_config(&config)?;
//!     let mut sink = CollectingSink::new();
//!
//!     engine.connect(ToolId::Calendar, &mut sink)?;
//!     engine.enable_write(ToolId::Calendar, &mut sink)?;
//!     engine.submit("Schedule a meeting with Sarah at 3pm", &mut sink).await?;
//!
//!     println!("reply: {:?}", engine.latest());
//!     println!("live notifications: {}", engine.notifications().live().len());
//!     Ok(())
//! }
//! ```

pub mod actions;
pub mod api;
pub mod config;
pub mod dataset;
mod engine;
pub mod notify;
pub mod permissions;
pub mod prompt;
pub mod sink;
pub mod tool;

// Re-export the facade and the types embedders touch most.
pub use actions::{ActionEvent, ActionVerifier, KeywordVerifier};
pub use api::{CompletionGateway, GatewayError, HttpGateway};
pub use config::Config;
pub use dataset::Dataset;
pub use engine::Capgate;
pub use notify::NotificationCenter;
pub use permissions::{Permissions, ToolAccess};
pub use sink::{CollectingSink, EngineEvent, EngineSink};
pub use tool::ToolId;
