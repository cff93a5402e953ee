//! Command-line arguments
//!
//! Flags override the values loaded from the config file.

use std::path::PathBuf;

use anyhow::{bail, Context, Result};

use crate::config::Config;

pub const USAGE: &str = "\
servo-web - slider panels for a servo rig

USAGE:
    servo-web [OPTIONS]

OPTIONS:
    -c, --config PATH    Config file (default: ~/.config/servo-web/config.toml)
    -p, --port PORT      HTTP port
    -b, --bind ADDR      Address to listen on
    -d, --device URL     Send panel requests to this device instead of the host
    -h, --help           Print help information
    -v, --version        Print version

ENVIRONMENT:
    RUST_LOG             Log filter (default: info)
";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Serve(Overrides),
    Help,
    Version,
}

/// Values given on the command line
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Overrides {
    pub config: Option<PathBuf>,
    pub port: Option<u16>,
    pub bind: Option<String>,
    pub device: Option<String>,
}

impl Overrides {
    pub fn apply(&self, config: &mut Config) {
        if let Some(port) = self.port {
            config.server.http_port = port;
        }
        if let Some(bind) = &self.bind {
            config.server.bind.clone_from(bind);
        }
        if let Some(device) = &self.device {
            config.server.device_base.clone_from(device);
        }
    }
}

/// Parse arguments, excluding the program name
pub fn parse_args(args: &[String]) -> Result<Command> {
    let mut overrides = Overrides::default();
    let mut iter = args.iter();

    while let Some(arg) = iter.next() {
        let flag = arg.as_str();
        let mut value = |name: &str| {
            iter.next()
                .cloned()
                .with_context(|| format!("{name} needs a value"))
        };
        match flag {
            "--help" | "-h" => return Ok(Command::Help),
            "--version" | "-v" => return Ok(Command::Version),
            "--config" | "-c" => overrides.config = Some(PathBuf::from(value(flag)?)),
            "--port" | "-p" => {
                let raw = value(flag)?;
                let port = raw
                    .parse::<u16>()
                    .with_context(|| format!("invalid port `{raw}`"))?;
                overrides.port = Some(port);
            }
            "--bind" | "-b" => overrides.bind = Some(value(flag)?),
            "--device" | "-d" => overrides.device = Some(value(flag)?),
            "serve" => {}
            other => bail!("unknown argument `{other}`"),
        }
    }

    Ok(Command::Serve(overrides))
}
