//! # Capability Walkthrough
//!
//! Runs the full role-scoped capability demonstration: the split kiosk
//! contracts, the aviary base capability with opt-in flight, and the
//! assembler-bound providers. Provider bindings come from a TOML config
//! file, overridden by flags; the transcript prints as lines or JSON.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use clap::{Parser, ValueEnum};
use facet_assembly::{
    run_walkthrough, Assembly, AssemblyConfig, ChargePort, NotifyChannel,
};
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum PortArg {
    Wired,
    Wireless,
}

impl From<PortArg> for ChargePort {
    fn from(arg: PortArg) -> Self {
        match arg {
            PortArg::Wired => ChargePort::Wired,
            PortArg::Wireless => ChargePort::Wireless,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum ChannelArg {
    Email,
    Sms,
}

impl From<ChannelArg> for NotifyChannel {
    fn from(arg: ChannelArg) -> Self {
        match arg {
            ChannelArg::Email => NotifyChannel::Email,
            ChannelArg::Sms => NotifyChannel::Sms,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "walkthrough")]
struct Cli {
    /// Path to a TOML assembly configuration
    #[arg(long)]
    config: Option<PathBuf>,

    /// Override the charging provider
    #[arg(long, value_enum)]
    charge_port: Option<PortArg>,

    /// Override the notification channel
    #[arg(long, value_enum)]
    notify_channel: Option<ChannelArg>,

    /// Emit the transcript as JSON instead of lines
    #[arg(long)]
    json: bool,
}

impl Cli {
    fn resolve_config(&self) -> facet_assembly::Result<AssemblyConfig> {
        let mut config = match &self.config {
            Some(path) => AssemblyConfig::from_path(path)?,
            None => AssemblyConfig::default(),
        };
        if let Some(port) = self.charge_port {
            config.charge_port = port.into();
        }
        if let Some(channel) = self.notify_channel {
            config.notify_channel = channel.into();
        }
        Ok(config)
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let config = cli.resolve_config()?;

    let assembly = Assembly::from_config(&config);
    let transcript = run_walkthrough(&assembly);

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&transcript)?);
        return Ok(());
    }

    println!("=== Role-Scoped Capability Walkthrough ===\n");
    println!(
        "Bound providers: {} charging, {} notification\n",
        config.charge_port.label(),
        config.notify_channel.label()
    );
    for receipt in &transcript {
        println!("{receipt}");
    }
    println!("\n{} operations completed, none refused.", transcript.len());

    Ok(())
}
