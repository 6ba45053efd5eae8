// capgate-cli: interactive shell and local completion relay

mod cli;
mod repl;
mod server;
mod sink;

use std::io;
use std::path::PathBuf;

use capgate_core::Config;

#[tokio::main]
async fn main() -> io::Result<()> {
    env_logger::init();
    let args = cli::parse();

    let path = args
        .config
        .clone()
        .unwrap_or_else(|| PathBuf::from("capgate.toml"));
    let mut config = Config::load(&path)?;
    if let Some(endpoint) = args.endpoint {
        config.endpoint = endpoint;
    }

    match args.command {
        Some(cli::Command::Serve { port }) => server::run(port, config).await,
        None => repl::run(config).await,
    }
}
