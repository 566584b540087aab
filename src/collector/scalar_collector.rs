use anyhow::{Context, Result};

use crate::snmp::{SnmpQuery, SnmpValue};

/// Модуль для сбора скалярных SNMP значений
pub struct ScalarCollector;

impl ScalarCollector {
    /// Собирает одно скалярное значение
    pub async fn fetch<C: SnmpQuery>(client: &mut C, oid: &str) -> Result<SnmpValue> {
        client
            .get(oid)
            .await
            .with_context(|| format!("SNMP GET failed for {}", oid))
    }

    pub async fn fetch_int<C: SnmpQuery>(client: &mut C, oid: &str) -> Result<i64> {
        let value = Self::fetch(client, oid).await?;
        value
            .as_i64()
            .ok_or_else(|| anyhow::anyhow!("unexpected value for {}: {:?}", oid, value))
    }

    pub async fn fetch_f64<C: SnmpQuery>(client: &mut C, oid: &str) -> Result<f64> {
        let value = Self::fetch(client, oid).await?;
        value
            .as_f64()
            .ok_or_else(|| anyhow::anyhow!("unexpected value for {}: {:?}", oid, value))
    }

    /// Собирает набор именованных целых значений в порядке объявления
    pub async fn fetch_named_ints<C: SnmpQuery>(
        client: &mut C,
        oids: &[(&'static str, &'static str)],
    ) -> Result<Vec<(&'static str, i64)>> {
        let mut results = Vec::with_capacity(oids.len());

        for (name, oid) in oids {
            results.push((*name, Self::fetch_int(client, oid).await?));
        }

        Ok(results)
    }
}
