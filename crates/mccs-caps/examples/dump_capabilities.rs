//! Prints what a monitor declares in its capability string.
//!
//! ```text
//! cargo run --example dump_capabilities -- "(prot(monitor)type(LCD)model(X)vcp(10 60(0F 11)))"
//! echo "(prot(monitor)type(LCD)model(X)vcp(10))" \
//!     | RUST_LOG=trace cargo run --example dump_capabilities -- --allow-bare-strings
//! ```

use std::{
    io::{self, Read},
    process::ExitCode,
};

use clap::Parser;
use mccs_caps::{CapabilitiesParser, ParserOptions};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(
    name = "dump_capabilities",
    about = "Print what a monitor declares in its capability string."
)]
struct Args {
    /// Skip stray words between tags instead of rejecting them
    #[arg(long)]
    allow_bare_strings: bool,

    /// Capability string, joined with spaces (read from stdin when omitted)
    input: Vec<String>,
}

fn main() -> ExitCode {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let options = ParserOptions {
        allow_bare_strings: args.allow_bare_strings,
        ..ParserOptions::default()
    };

    let input = if args.input.is_empty() {
        let mut buf = Vec::new();
        if let Err(err) = io::stdin().read_to_end(&mut buf) {
            eprintln!("dump_capabilities: {err}");
            return ExitCode::from(2);
        }
        buf.trim_ascii().to_vec()
    } else {
        args.input.join(" ").into_bytes()
    };

    let caps = match CapabilitiesParser::new(options).parse(&input) {
        Ok(caps) => caps,
        Err(err) => {
            eprintln!("dump_capabilities: {err}");
            return ExitCode::FAILURE;
        }
    };

    println!("protocol: {}", caps.protocol());
    println!("type:     {}", caps.monitor_type());
    println!("model:    {}", caps.model());
    if let Some(version) = caps.mccs_version() {
        println!("mccs:     {version}");
    }

    println!("commands:");
    for command in caps.supported_commands() {
        println!("  {:02X} {}", command.code(), command.name().unwrap_or("?"));
    }

    println!("vcp:");
    for def in caps.supported_vcp() {
        println!("  {:02X} {} ({})", def.code(), def.name(), def.category());
        for value in def.values() {
            match value.name() {
                Some(name) => println!("       {:02X} {name}", value.value()),
                None => println!("       {:02X}", value.value()),
            }
        }
    }
    ExitCode::SUCCESS
}
