use anyhow::Result;
use tracing::debug;

use super::CheckMode;
use crate::collector::ScalarCollector;
use crate::formatter::CheckOutcome;
use crate::snmp::SnmpQuery;
use crate::status::{StatusMap, maps};

/// Проверка из одного скаляра: `<подпись>: <subject>`, без perfdata
pub async fn status_check<C: SnmpQuery>(
    client: &mut C,
    oid: &str,
    map: &StatusMap,
    subject: &str,
) -> Result<CheckOutcome> {
    let code = ScalarCollector::fetch_int(client, oid).await?;
    let resolved = map.resolve(code);
    debug!(oid, code, state = %resolved.state, "status resolved");

    Ok(CheckOutcome::new(
        resolved.state,
        format!("{}: {}", resolved.label, subject),
    ))
}

/// os / main / timing / net
pub async fn generic_check<C: SnmpQuery>(
    client: &mut C,
    oid: &str,
    mode: CheckMode,
) -> Result<CheckOutcome> {
    let subject = format!("{} status", mode.name().to_uppercase());
    status_check(client, oid, &maps::GENERIC, &subject).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checks::{oids, run_check};
    use crate::snmp::mock::MockClient;
    use crate::status::ServiceState;

    #[tokio::test]
    async fn generic_modes() {
        let cases = [
            (CheckMode::Os, oids::OS_STATUS, 1, 0, "OK: OS status"),
            (CheckMode::Main, oids::MAIN_STATUS, 2, 2, "CRITICAL: MAIN status"),
            (CheckMode::Timing, oids::TIMING_STATUS, 3, 1, "WARNING: TIMING status"),
            (CheckMode::Timing, oids::TIMING_STATUS, 4, 1, "WARNING: TIMING status"),
            (CheckMode::Net, oids::NET_STATUS, 99, 3, "UNKNOWN: 99: NET status"),
            (CheckMode::Net, oids::NET_STATUS, -2, 3, "UNKNOWN: -2: NET status"),
        ];

        for (mode, oid, code, exit, message) in cases {
            let mut client = MockClient::new().with_int(oid, code);
            let outcome = run_check(mode, &mut client).await.unwrap();
            assert_eq!(outcome.state.exit_code(), exit, "{:?} {}", mode, code);
            assert_eq!(outcome.to_string(), message);
            assert!(outcome.perfdata.is_empty());
        }
    }

    #[tokio::test]
    async fn single_request_only() {
        let mut client = MockClient::new().with_int(oids::OS_STATUS, 5);
        let outcome = generic_check(&mut client, oids::OS_STATUS, CheckMode::Os)
            .await
            .unwrap();
        assert_eq!(outcome.state, ServiceState::Critical);
        assert_eq!(client.requests, vec![oids::OS_STATUS]);
    }
}
