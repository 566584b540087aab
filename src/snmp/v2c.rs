use anyhow::{Context, Result};
use snmp2::{AsyncSession, Oid, Value};
use tokio::time::{Duration, timeout};
use tracing::{debug, trace};

use super::{SnmpQuery, SnmpValue, parse_oid};

const MAX_REPETITIONS: u32 = 10;

pub struct SnmpClientV2c {
    pub(crate) session: AsyncSession,
    timeout: Duration,
}

impl SnmpClientV2c {
    pub async fn new(target: &str, community: &[u8], timeout_secs: u64) -> Result<Self> {
        let session = AsyncSession::new_v2c(target, community, 2)
            .await
            .context(format!("cannot open SNMP session to {}", target))?;

        debug!(addr = target, timeout_secs, "SNMPv2c session ready");

        Ok(Self {
            session,
            timeout: Duration::from_secs(timeout_secs),
        })
    }

    async fn get_oid(&mut self, oid: &Oid<'_>) -> Result<SnmpValue> {
        let limit = self.timeout;
        let resp = timeout(limit, self.session.get(oid))
            .await
            .map_err(|_| anyhow::anyhow!("timeout after {}s", limit.as_secs()))?
            .context("SNMP GET request failed")?;

        let (_, value) = resp
            .varbinds
            .into_iter()
            .next()
            .ok_or_else(|| anyhow::anyhow!("empty SNMP response"))?;

        match value {
            Value::NoSuchObject => anyhow::bail!("noSuchObject"),
            Value::NoSuchInstance => anyhow::bail!("noSuchInstance"),
            Value::EndOfMibView => anyhow::bail!("endOfMibView"),
            other => Ok(owned_value(other)),
        }
    }

    async fn walk_bulk(&mut self, start_oid: &Oid<'_>) -> Result<Vec<SnmpValue>> {
        let limit = self.timeout;
        let mut results = Vec::new();
        let mut current_oid = start_oid.to_owned();

        loop {
            // Выполняем SNMP GETBULK запрос
            let resp = timeout(
                limit,
                self.session.getbulk(&[&current_oid], 0, MAX_REPETITIONS),
            )
            .await
            .map_err(|_| anyhow::anyhow!("timeout after {}s", limit.as_secs()))?
            .context("SNMP GETBULK request failed")?;

            let mut found_any = false;

            for (oid, value) in resp.varbinds {
                if !oid.starts_with(start_oid) || matches!(value, Value::EndOfMibView) {
                    return Ok(results);
                }

                // агент, не двигающийся вперёд, иначе зациклит обход
                let (prev, next) = (current_oid.to_string(), oid.to_string());
                if !advances(&prev, &next) {
                    anyhow::bail!("OID not increasing: {} after {}", next, prev);
                }

                trace!(oid = %oid, "walk row");
                results.push(owned_value(value));
                current_oid = oid.to_owned();
                found_any = true;
            }

            if !found_any {
                break;
            }
        }

        Ok(results)
    }
}

impl SnmpQuery for SnmpClientV2c {
    async fn get(&mut self, oid: &str) -> Result<SnmpValue> {
        let parsed = parse_oid(oid)?;
        let value = self.get_oid(&parsed).await?;
        debug!(oid, ?value, "GET");
        Ok(value)
    }

    async fn walk(&mut self, oid: &str) -> Result<Vec<SnmpValue>> {
        let parsed = parse_oid(oid)?;
        let rows = self.walk_bulk(&parsed).await?;
        debug!(oid, rows = rows.len(), "WALK");
        Ok(rows)
    }
}

/// Строго ли `next` идёт после `prev` в порядке OID
fn advances(prev: &str, next: &str) -> bool {
    fn arcs(oid: &str) -> Vec<u64> {
        oid.split('.').filter_map(|p| p.parse().ok()).collect()
    }
    arcs(next) > arcs(prev)
}

/// Копирует значение из буфера ответа
fn owned_value(value: Value<'_>) -> SnmpValue {
    match value {
        Value::Integer(v) => SnmpValue::Integer(v),
        Value::Counter32(v) | Value::Unsigned32(v) | Value::Timeticks(v) => {
            SnmpValue::Unsigned(u64::from(v))
        }
        Value::Counter64(v) => SnmpValue::Unsigned(v),
        Value::OctetString(bytes) | Value::Opaque(bytes) => SnmpValue::OctetString(bytes.to_vec()),
        Value::ObjectIdentifier(oid) => SnmpValue::ObjectIdentifier(oid.to_string()),
        Value::IpAddress(addr) => SnmpValue::IpAddress(addr),
        Value::Null => SnmpValue::Null,
        other => SnmpValue::Other(format!("{:?}", other)),
    }
}
