//! Проверка оптических модулей (SFP) по таблице портов.
//!
//! Колонки таблицы обходятся независимо и сопоставляются по позиции.
//! Итерация идёт по колонке имён портов; более короткие колонки
//! дополняются пустой строкой или нулём, а не считаются ошибкой.

use anyhow::Result;
use tracing::debug;

use super::oids;
use crate::collector::{Column, ScalarCollector, TableCollector};
use crate::formatter::{CheckOutcome, PerfData};
use crate::snmp::SnmpQuery;
use crate::status::{ServiceState, maps};

const ROLLUP_OK: i64 = 1;
const ROLLUP_ERROR: i64 = 2;
const SFP_OK: i64 = 1;
const LINK_UP: i64 = 2;

/// Одна строка таблицы портов после сопоставления колонок
#[derive(Debug, Clone, PartialEq)]
pub struct PortRow {
    pub name: String,
    pub link: i64,
    pub sfp_error: i64,
    pub temp: i64,
    pub tx_power: i64,
    pub rx_power: i64,
}

impl PortRow {
    /// Порт в порядке, только если и модуль, и линк в точности в ожидаемом состоянии
    pub fn is_healthy(&self) -> bool {
        self.sfp_error == SFP_OK && self.link == LINK_UP
    }

    fn problem(&self) -> String {
        format!(
            "{}: {}, link={}",
            self.name,
            maps::SFP_ERROR.label(self.sfp_error),
            maps::LINK.label(self.link)
        )
    }

    fn perfdata(&self) -> [PerfData; 3] {
        [
            PerfData::new(format!("{}_temp", self.name), self.temp),
            PerfData::new(format!("{}_txPower", self.name), self.tx_power),
            PerfData::new(format!("{}_rxPower", self.name), self.rx_power),
        ]
    }
}

/// Колонки таблицы портов в том виде, как их отдал агент
#[derive(Debug, Clone)]
pub struct PortTable {
    pub names: Column<String>,
    pub links: Column<i64>,
    pub vendors: Column<String>,
    pub sfp_errors: Column<i64>,
    pub temps: Column<i64>,
    pub tx_powers: Column<i64>,
    pub rx_powers: Column<i64>,
}

impl PortTable {
    pub async fn collect<C: SnmpQuery>(client: &mut C) -> Result<Self> {
        let names = TableCollector::collect_text_column(client, oids::PORT_NAME).await?;
        let sfp_errors = TableCollector::collect_int_column(client, oids::PORT_SFP_ERROR).await?;
        let vendors = TableCollector::collect_text_column(client, oids::PORT_VENDOR).await?;
        let links = TableCollector::collect_int_column(client, oids::PORT_LINK).await?;
        let temps = TableCollector::collect_int_column(client, oids::PORT_TEMP).await?;
        let tx_powers = TableCollector::collect_int_column(client, oids::PORT_TX_POWER).await?;
        let rx_powers = TableCollector::collect_int_column(client, oids::PORT_RX_POWER).await?;

        for (oid, len) in [
            (sfp_errors.oid, sfp_errors.values.len()),
            (vendors.oid, vendors.values.len()),
            (links.oid, links.values.len()),
            (temps.oid, temps.values.len()),
            (tx_powers.oid, tx_powers.values.len()),
            (rx_powers.oid, rx_powers.values.len()),
        ] {
            if len < names.values.len() {
                debug!(oid, len, ports = names.values.len(), "short column padded");
            }
        }

        Ok(Self {
            names,
            links,
            vendors,
            sfp_errors,
            temps,
            tx_powers,
            rx_powers,
        })
    }

    /// Заполненные слоты; порт без имени производителя пропускается целиком
    pub fn populated_rows(&self) -> Vec<PortRow> {
        self.names
            .values
            .iter()
            .enumerate()
            .filter(|(i, _)| !is_blank(&self.vendors.at(*i)))
            .map(|(i, name)| PortRow {
                name: name.clone(),
                link: self.links.at(i),
                sfp_error: self.sfp_errors.at(i),
                temp: self.temps.at(i),
                tx_power: self.tx_powers.at(i),
                rx_power: self.rx_powers.at(i),
            })
            .collect()
    }
}

fn is_blank(vendor: &str) -> bool {
    vendor.trim_matches(|c: char| c.is_whitespace() || c == '"').is_empty()
}

/// Итог по сводному статусу и строкам.
///
/// Серьёзность определяет только сводный код: ERROR даёт CRITICAL даже при
/// чистых строках, любой другой не-OK код даёт WARNING даже при проблемных строках.
pub fn assess(rollup: i64, rows: &[PortRow]) -> CheckOutcome {
    let perfdata: Vec<PerfData> = rows.iter().flat_map(PortRow::perfdata).collect();
    let problems: Vec<String> = rows
        .iter()
        .filter(|row| !row.is_healthy())
        .map(PortRow::problem)
        .collect();

    if rollup == ROLLUP_OK && problems.is_empty() {
        return CheckOutcome::new(ServiceState::Ok, "OK: All SFPs OK").with_perfdata(perfdata);
    }

    let rollup_label = maps::SFP_STATUS.label(rollup);
    let message = if problems.is_empty() {
        format!("{}: No detailed problems found", rollup_label)
    } else {
        format!("{}: {}", rollup_label, problems.join("; "))
    };

    let state = if rollup == ROLLUP_ERROR {
        ServiceState::Critical
    } else {
        ServiceState::Warning
    };

    CheckOutcome::new(state, message).with_perfdata(perfdata)
}

pub async fn check_sfp<C: SnmpQuery>(client: &mut C) -> Result<CheckOutcome> {
    let rollup = ScalarCollector::fetch_int(client, oids::SFP_STATUS).await?;
    let table = PortTable::collect(client).await?;
    let rows = table.populated_rows();
    debug!(
        rollup,
        ports = table.names.values.len(),
        populated = rows.len(),
        "port table collected"
    );

    Ok(assess(rollup, &rows))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::snmp::mock::MockClient;

    fn row(name: &str, sfp_error: i64, link: i64) -> PortRow {
        PortRow {
            name: name.to_string(),
            link,
            sfp_error,
            temp: 40,
            tx_power: 500,
            rx_power: 300,
        }
    }

    fn port_table(client: MockClient) -> MockClient {
        client
            .with_text_column(oids::PORT_NAME, &["wri1", "wri2", "wri3"])
            .with_text_column(oids::PORT_VENDOR, &["BlueOptics", "", "AXCEN"])
            .with_int_column(oids::PORT_SFP_ERROR, &[1, 2, 3])
            .with_int_column(oids::PORT_LINK, &[2, 1, 1])
            .with_int_column(oids::PORT_TEMP, &[41, 99, 38])
            .with_int_column(oids::PORT_TX_POWER, &[520, 0, 610])
            .with_int_column(oids::PORT_RX_POWER, &[310, 0, 0])
    }

    #[test]
    fn healthy_needs_both_exact_codes() {
        assert!(row("wri1", 1, 2).is_healthy());
        assert!(!row("wri1", 1, 1).is_healthy());
        assert!(!row("wri1", 2, 2).is_healthy());
        assert!(!row("wri1", 0, 0).is_healthy());
    }

    #[test]
    fn all_ok() {
        let outcome = assess(1, &[row("wri1", 1, 2)]);
        assert_eq!(outcome.state, ServiceState::Ok);
        assert_eq!(
            outcome.to_string(),
            "OK: All SFPs OK | wri1_temp=40 wri1_txPower=500 wri1_rxPower=300"
        );
    }

    #[test]
    fn error_rollup_with_clean_row_is_critical() {
        let outcome = assess(2, &[row("wri1", 1, 2)]);
        assert_eq!(outcome.state.exit_code(), 2);
        assert_eq!(outcome.message, "Error: No detailed problems found");
        assert_eq!(outcome.perfdata.len(), 3);
    }

    #[test]
    fn warning_rollup_caps_row_problems_at_warning() {
        let outcome = assess(3, &[row("wri1", 2, 1), row("wri2", 1, 2)]);
        assert_eq!(outcome.state, ServiceState::Warning);
        assert_eq!(outcome.message, "Warning: wri1: sfpError, link=down");
        assert_eq!(outcome.perfdata.len(), 6);
    }

    #[test]
    fn ok_rollup_with_row_problem_is_warning() {
        let outcome = assess(1, &[row("wri5", 3, 1), row("wri6", 7, 4)]);
        assert_eq!(outcome.state, ServiceState::Warning);
        assert_eq!(
            outcome.message,
            "OK: wri5: portDown, link=down; wri6: Unknown(7), link=Unknown(4)"
        );
    }

    #[test]
    fn unknown_rollup_code_is_echoed() {
        let outcome = assess(11, &[]);
        assert_eq!(outcome.state, ServiceState::Warning);
        assert_eq!(outcome.to_string(), "Unknown(11): No detailed problems found");
    }

    #[test]
    fn blank_vendor_detection() {
        assert!(is_blank(""));
        assert!(is_blank("   "));
        assert!(is_blank("\"\""));
        assert!(is_blank(" \" \" "));
        assert!(!is_blank("\"BlueOptics\""));
    }

    #[tokio::test]
    async fn blank_vendor_row_is_skipped_entirely() {
        let mut client = port_table(MockClient::new().with_int(oids::SFP_STATUS, 3));
        let outcome = check_sfp(&mut client).await.unwrap();

        assert_eq!(outcome.state, ServiceState::Warning);
        assert_eq!(outcome.message, "Warning: wri3: portDown, link=down");
        assert!(!outcome.to_string().contains("wri2"));
        assert_eq!(
            outcome.perfdata.iter().map(|p| p.to_string()).collect::<Vec<_>>(),
            vec![
                "wri1_temp=41",
                "wri1_txPower=520",
                "wri1_rxPower=310",
                "wri3_temp=38",
                "wri3_txPower=610",
                "wri3_rxPower=0",
            ]
        );
    }

    #[tokio::test]
    async fn error_rollup_without_port_details() {
        // только имена и производители: остальные колонки пустые
        let mut client = MockClient::new()
            .with_int(oids::SFP_STATUS, 2)
            .with_text_column(oids::PORT_NAME, &["wri1"])
            .with_text_column(oids::PORT_VENDOR, &["BlueOptics"])
            .with_int_column(oids::PORT_SFP_ERROR, &[1])
            .with_int_column(oids::PORT_LINK, &[2]);

        let outcome = check_sfp(&mut client).await.unwrap();
        assert_eq!(outcome.state, ServiceState::Critical);
        assert_eq!(
            outcome.to_string(),
            "Error: No detailed problems found | wri1_temp=0 wri1_txPower=0 wri1_rxPower=0"
        );
    }

    #[tokio::test]
    async fn missing_columns_pad_to_problem() {
        let mut client = MockClient::new()
            .with_int(oids::SFP_STATUS, 1)
            .with_text_column(oids::PORT_NAME, &["wri1"])
            .with_text_column(oids::PORT_VENDOR, &["FS"]);

        let outcome = check_sfp(&mut client).await.unwrap();
        assert_eq!(outcome.state, ServiceState::Warning);
        assert_eq!(outcome.message, "OK: wri1: N/A, link=N/A");
    }

    #[tokio::test]
    async fn walk_failure_aborts() {
        let mut client = port_table(MockClient::new().with_int(oids::SFP_STATUS, 1))
            .failing(oids::PORT_TEMP);
        let err = check_sfp(&mut client).await.unwrap_err();
        assert!(format!("{:#}", err).contains("SNMP WALK failed for 1.3.6.1.4.1.96.100.7.6.1.17"));
    }
}
