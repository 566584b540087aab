use anyhow::Result;

use super::oids;
use crate::collector::ScalarCollector;
use crate::formatter::{CheckOutcome, PerfData, format_identifier_value};
use crate::snmp::SnmpQuery;
use crate::status::maps;

/// Состояние PTP: порт, grandmaster, состояние servo и коэффициент задержки
pub async fn check_ptp<C: SnmpQuery>(client: &mut C) -> Result<CheckOutcome> {
    let code = ScalarCollector::fetch_int(client, oids::PTP_STATUS).await?;
    let resolved = maps::PTP.resolve(code);

    let port = ScalarCollector::fetch(client, oids::PTP_PORT).await?;
    let grandmaster = ScalarCollector::fetch(client, oids::PTP_GRANDMASTER).await?;
    let servo = ScalarCollector::fetch(client, oids::PTP_SERVO_STATE).await?;
    let delay = ScalarCollector::fetch(client, oids::PTP_DELAY_COEFFICIENT).await?;

    let message = format!(
        "{}: Port={}, GM={}, Servo={}",
        resolved.label,
        port,
        format_identifier_value(&grandmaster),
        servo
    );

    Ok(CheckOutcome::new(resolved.state, message)
        .with_perfdata(vec![PerfData::new("delayCoefficient", delay)]))
}

pub async fn check_pll<C: SnmpQuery>(client: &mut C) -> Result<CheckOutcome> {
    let code = ScalarCollector::fetch_int(client, oids::PLL_STATUS).await?;
    let resolved = maps::PLL.resolve(code);

    let mode = ScalarCollector::fetch(client, oids::PLL_MODE).await?;
    let seq_state = ScalarCollector::fetch(client, oids::PLL_SEQ_STATE).await?;
    let align_state = ScalarCollector::fetch(client, oids::PLL_ALIGN_STATE).await?;

    Ok(CheckOutcome::new(
        resolved.state,
        format!(
            "{}: PLL status (mode={}, seq={}, align={})",
            resolved.label, mode, seq_state, align_state
        ),
    ))
}
