use anyhow::Result;
use tracing::{debug, warn};

use super::oids;
use crate::collector::{ScalarCollector, TableCollector};
use crate::formatter::{CheckOutcome, PerfData};
use crate::snmp::SnmpQuery;
use crate::status::{ServiceState, maps};

pub async fn check_cpu<C: SnmpQuery>(client: &mut C) -> Result<CheckOutcome> {
    let code = ScalarCollector::fetch_int(client, oids::CPU_STATUS).await?;
    let resolved = maps::CPU.resolve(code);

    let mut loads = Vec::with_capacity(oids::CPU_LOAD.len());
    for (name, oid) in oids::CPU_LOAD {
        loads.push((name, ScalarCollector::fetch_f64(client, oid).await?));
    }

    let message = format!(
        "{}: CPU Load {}/{}/{}",
        resolved.label, loads[0].1, loads[1].1, loads[2].1
    );
    let perfdata = loads
        .iter()
        .map(|(name, load)| PerfData::new(*name, load))
        .collect();

    Ok(CheckOutcome::new(resolved.state, message).with_perfdata(perfdata))
}

/// Базовый статус может сказать OK, но превышение любого порога
/// всё равно переводит результат в CRITICAL. Пороги только повышают.
pub async fn check_temp<C: SnmpQuery>(client: &mut C) -> Result<CheckOutcome> {
    let code = ScalarCollector::fetch_int(client, oids::TEMP_STATUS).await?;
    let resolved = maps::TEMP.resolve(code);
    let mut state = resolved.state;
    let mut message = resolved.label;

    let temps = ScalarCollector::fetch_named_ints(client, &oids::TEMP_VALUES).await?;
    let thresholds = ScalarCollector::fetch_named_ints(client, &oids::TEMP_THRESHOLDS).await?;

    let overheated: Vec<&str> = temps
        .iter()
        .zip(&thresholds)
        .filter(|((_, temp), (_, limit))| temp > limit)
        .map(|((name, _), _)| *name)
        .collect();

    if !overheated.is_empty() {
        warn!(sensors = ?overheated, "temperature above threshold");
        state = ServiceState::Critical;
        message = format!("CRITICAL: Overheating in {}", overheated.join(","));
    }

    let perfdata = temps
        .iter()
        .zip(&thresholds)
        .map(|((name, temp), (_, limit))| {
            PerfData::new(*name, temp)
                .with_thresholds(limit, limit)
                .with_min(0)
        })
        .collect();

    Ok(CheckOutcome::new(state, message).with_perfdata(perfdata))
}

pub async fn check_mem<C: SnmpQuery>(client: &mut C) -> Result<CheckOutcome> {
    let code = ScalarCollector::fetch_int(client, oids::MEM_STATUS).await?;
    let resolved = maps::MEM.resolve(code);

    // total, used, usedPerc, free
    let values = ScalarCollector::fetch_named_ints(client, &oids::MEM_VALUES).await?;
    let (total, used, used_perc) = (values[0].1, values[1].1, values[2].1);

    let message = format!(
        "{}: Used {} / {} ({}%)",
        resolved.label, used, total, used_perc
    );
    let perfdata = values
        .iter()
        .map(|(name, value)| match *name {
            "usedPerc" => PerfData::new(*name, value).with_min(0).with_max(100),
            _ => PerfData::new(*name, value),
        })
        .collect();

    Ok(CheckOutcome::new(resolved.state, message).with_perfdata(perfdata))
}

/// Проценты не пересчитываются: выводится то, что посчитал сам коммутатор
pub async fn check_disk<C: SnmpQuery>(client: &mut C) -> Result<CheckOutcome> {
    let code = ScalarCollector::fetch_int(client, oids::DISK_STATUS).await?;
    let resolved = maps::DISK.resolve(code);

    let mounts = TableCollector::collect_text_column(client, oids::DISK_MOUNT).await?;
    let used = TableCollector::collect_int_column(client, oids::DISK_USED).await?;
    if mounts.values.len() != used.values.len() {
        debug!(
            mounts = mounts.values.len(),
            used = used.values.len(),
            column = used.oid,
            "disk columns differ in length"
        );
    }

    let perfdata = mounts
        .values
        .iter()
        .zip(&used.values)
        .map(|(mount, used)| PerfData::new(format!("{}_used", mount), used))
        .collect();
    let message = format!("{}: Mounts {}", resolved.label, mounts.values.join(", "));

    Ok(CheckOutcome::new(resolved.state, message).with_perfdata(perfdata))
}
