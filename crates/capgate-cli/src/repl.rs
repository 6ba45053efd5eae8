//! Interactive shell driving the simulation engine.
//!
//! Sequential by design: each `ask` awaits its completion before the next
//! prompt line is read, which satisfies the engine's single-outstanding-
//! submission obligation without an explicit busy flag.

use std::io::{self, Write};
use std::str::FromStr;

use capgate_core::{Capgate, Config, HttpGateway, ToolId};

use crate::sink::CliSink;

const HELP: &str = "\
commands:
  connect <tool>        grant read access (calendar, email, files)
  disconnect <tool>     revoke read (and write) access
  write <tool> on|off   toggle write access for a connected tool
  ask <query>           submit a query with the current grants
  prompt                show the instruction context the next ask would send
  status                show grants, latest reply, live notifications
  dismiss <n>           dismiss the n-th live notification
  help                  show this help
  quit                  exit";

pub async fn run(config: Config) -> io::Result<()> {
    let mut engine = Capgate::from_config(&config)?;
    let mut sink = CliSink;

    println!(
        "capgate: tool-access playground (endpoint: {})",
        config.endpoint
    );
    println!("type 'help' for commands");

    let stdin = io::stdin();
    loop {
        print!("> ");
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.read_line(&mut line)? == 0 {
            break; // EOF
        }
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let (command, rest) = match line.split_once(char::is_whitespace) {
            Some((command, rest)) => (command, rest.trim()),
            None => (line, ""),
        };

        match command {
            "help" => println!("{}", HELP),
            "quit" | "exit" => break,
            "status" => print_status(&engine),
            "prompt" => println!("{}", engine.composed_context()),
            "connect" => match parse_tool(rest) {
                Ok(tool) => engine.connect(tool, &mut sink)?,
                Err(message) => println!("{}", message),
            },
            "disconnect" => match parse_tool(rest) {
                Ok(tool) => engine.disconnect(tool, &mut sink)?,
                Err(message) => println!("{}", message),
            },
            "write" => handle_write(&mut engine, &mut sink, rest)?,
            "ask" => {
                if rest.is_empty() {
                    println!("usage: ask <query>");
                    continue;
                }
                engine.submit(rest, &mut sink).await?;
            }
            "dismiss" => handle_dismiss(&engine, rest),
            _ => println!("unknown command '{}' (try 'help')", command),
        }
    }
    Ok(())
}

fn parse_tool(name: &str) -> Result<ToolId, String> {
    ToolId::from_str(name)
        .map_err(|_| format!("unknown tool '{}' (calendar, email, files)", name))
}

fn handle_write(
    engine: &mut Capgate<HttpGateway>,
    sink: &mut CliSink,
    rest: &str,
) -> io::Result<()> {
    let mut parts = rest.split_whitespace();
    match (parts.next().map(parse_tool), parts.next()) {
        (Some(Ok(tool)), Some("on")) => {
            engine.enable_write(tool, sink)?;
            if !engine.permissions().write_enabled(tool) {
                let name: &str = tool.as_ref();
                println!("{} is not connected; run 'connect {}' first", name, name);
            }
        }
        (Some(Ok(tool)), Some("off")) => engine.disable_write(tool, sink)?,
        (Some(Err(message)), _) => println!("{}", message),
        _ => println!("usage: write <tool> on|off"),
    }
    Ok(())
}

fn handle_dismiss(engine: &Capgate<HttpGateway>, rest: &str) {
    let live = engine.notifications().live();
    if live.is_empty() {
        println!("no live notifications");
        return;
    }
    match rest.parse::<usize>() {
        Ok(n) if n >= 1 && n <= live.len() => engine.notifications().dismiss(live[n - 1].id),
        _ => println!("usage: dismiss <1..{}>", live.len()),
    }
}

fn print_status(engine: &Capgate<HttpGateway>) {
    println!("tools:");
    for tool in ToolId::ORDERED {
        let access = engine.permissions().access(tool);
        let name: &str = tool.as_ref();
        println!(
            "  {:<9} {:<12} {}",
            name,
            if access.connected { "connected" } else { "-" },
            if access.write_enabled { "write" } else { "" },
        );
    }
    match engine.latest() {
        Some(Ok(reply)) => println!("latest reply: {}", reply),
        Some(Err(err)) => println!("latest reply (error): {}", err),
        None => println!("latest reply: (none)"),
    }
    let live = engine.notifications().live();
    if live.is_empty() {
        println!("notifications: (none)");
    } else {
        println!("notifications:");
        for (i, event) in live.iter().enumerate() {
            let category: &str = event.category.as_ref();
            println!("  {}. {} [{}]", i + 1, event.description, category);
        }
    }
}
