//! Режимы проверки. Каждый режим это прямая последовательность:
//! запросить значения, разрешить код статуса, собрать сообщение и perfdata.

use anyhow::Result;
use clap::ValueEnum;
use tracing::info;

use crate::formatter::CheckOutcome;
use crate::snmp::SnmpQuery;
use crate::status::maps;

pub mod oids;
pub mod sfp;
pub mod status;
pub mod system;
pub mod timing;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum CheckMode {
    Cpu,
    Os,
    Main,
    Timing,
    Net,
    Temp,
    Mem,
    Disk,
    Ptp,
    Pll,
    Slave,
    #[value(name = "ptpframes")]
    PtpFrames,
    #[value(name = "systemclock")]
    SystemClock,
    Sfp,
    Endpoint,
    #[value(name = "swcore")]
    SwCore,
    Rtu,
}

impl CheckMode {
    pub fn name(self) -> &'static str {
        match self {
            CheckMode::Cpu => "cpu",
            CheckMode::Os => "os",
            CheckMode::Main => "main",
            CheckMode::Timing => "timing",
            CheckMode::Net => "net",
            CheckMode::Temp => "temp",
            CheckMode::Mem => "mem",
            CheckMode::Disk => "disk",
            CheckMode::Ptp => "ptp",
            CheckMode::Pll => "pll",
            CheckMode::Slave => "slave",
            CheckMode::PtpFrames => "ptpframes",
            CheckMode::SystemClock => "systemclock",
            CheckMode::Sfp => "sfp",
            CheckMode::Endpoint => "endpoint",
            CheckMode::SwCore => "swcore",
            CheckMode::Rtu => "rtu",
        }
    }
}

/// Выполняет выбранную проверку до конца
pub async fn run_check<C: SnmpQuery>(mode: CheckMode, client: &mut C) -> Result<CheckOutcome> {
    info!(mode = mode.name(), "running check");

    match mode {
        CheckMode::Os => status::generic_check(client, oids::OS_STATUS, mode).await,
        CheckMode::Main => status::generic_check(client, oids::MAIN_STATUS, mode).await,
        CheckMode::Timing => status::generic_check(client, oids::TIMING_STATUS, mode).await,
        CheckMode::Net => status::generic_check(client, oids::NET_STATUS, mode).await,
        CheckMode::Cpu => system::check_cpu(client).await,
        CheckMode::Temp => system::check_temp(client).await,
        CheckMode::Mem => system::check_mem(client).await,
        CheckMode::Disk => system::check_disk(client).await,
        CheckMode::Ptp => timing::check_ptp(client).await,
        CheckMode::Pll => timing::check_pll(client).await,
        CheckMode::Slave => {
            status::status_check(client, oids::SLAVE_STATUS, &maps::SLAVE, "Slave link status")
                .await
        }
        CheckMode::PtpFrames => {
            status::status_check(
                client,
                oids::PTP_FRAMES_STATUS,
                &maps::PTP_FRAMES,
                "PTP Frames status",
            )
            .await
        }
        CheckMode::SystemClock => {
            status::status_check(
                client,
                oids::SYSTEM_CLOCK_STATUS,
                &maps::SYSTEM_CLOCK,
                "System clock status",
            )
            .await
        }
        CheckMode::Sfp => sfp::check_sfp(client).await,
        CheckMode::Endpoint => {
            status::status_check(client, oids::ENDPOINT_STATUS, &maps::ENDPOINT, "Endpoint status")
                .await
        }
        CheckMode::SwCore => {
            status::status_check(client, oids::SWCORE_STATUS, &maps::SWCORE, "Soft Core status")
                .await
        }
        CheckMode::Rtu => {
            status::status_check(client, oids::RTU_STATUS, &maps::RTU, "RTU status").await
        }
    }
}
