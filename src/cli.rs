use std::path::PathBuf;

use clap::{ArgAction, Parser};
use tracing_subscriber::EnvFilter;

use crate::checks::CheckMode;

/// Nagios/Icinga plugin for White Rabbit switches
#[derive(Debug, Parser)]
#[command(name = "check_white_rabbit", version, about)]
pub struct Args {
    /// Hostname or IP of the switch
    #[arg(short = 'H', long)]
    pub host: String,

    /// SNMP community string [default: public]
    #[arg(short = 'C', long)]
    pub community: Option<String>,

    /// Metric to monitor
    #[arg(short, long, value_enum)]
    pub mode: CheckMode,

    /// SNMP agent port [default: 161]
    #[arg(short, long)]
    pub port: Option<u16>,

    /// Per-request timeout in seconds [default: 10]
    #[arg(short, long)]
    pub timeout: Option<u64>,

    /// YAML file with connection settings
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Log to stderr (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Args {
    /// Логи только в stderr: stdout принадлежит строке результата
    pub fn init_tracing(&self) {
        let level = match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .try_init();
    }
}
