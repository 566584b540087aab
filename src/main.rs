use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use clap::error::ErrorKind;
use tracing::debug;

mod checks;
mod cli;
mod collector;
mod config;
mod formatter;
mod snmp;
mod status;

use cli::Args;
use formatter::CheckOutcome;
use status::ServiceState;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            e.exit()
        }
        Err(e) => {
            let _ = e.print();
            return ExitCode::from(ServiceState::Unknown.exit_code());
        }
    };

    args.init_tracing();

    // Единственная точка выхода: любая ошибка запроса становится UNKNOWN
    let outcome = match run(&args).await {
        Ok(outcome) => outcome,
        Err(e) => CheckOutcome::from_error(&e),
    };

    println!("{}", outcome);
    ExitCode::from(outcome.state.exit_code())
}

async fn run(args: &Args) -> Result<CheckOutcome> {
    let mut config = config::AppConfig::load(args.config.as_deref())?;

    if let Some(community) = &args.community {
        config.settings.auth.community = community.clone();
    }
    if let Some(port) = args.port {
        config.settings.connection.port = port;
    }
    if let Some(timeout) = args.timeout {
        config.settings.connection.timeout = timeout;
    }

    let target = config.target(&args.host);
    debug!(addr = %target, mode = args.mode.name(), "starting");

    let mut client = snmp::SnmpClientV2c::new(
        &target,
        config.settings.auth.community.as_bytes(),
        config.settings.connection.timeout,
    )
    .await?;

    checks::run_check(args.mode, &mut client).await
}
