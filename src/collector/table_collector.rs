use anyhow::{Context, Result};

use super::types::Column;
use crate::snmp::SnmpQuery;

/// Модуль для сбора табличных SNMP данных
pub struct TableCollector;

impl TableCollector {
    /// Обходит одну колонку и возвращает её значения как текст
    pub async fn collect_text_column<C: SnmpQuery>(
        client: &mut C,
        oid: &'static str,
    ) -> Result<Column<String>> {
        let rows = client
            .walk(oid)
            .await
            .with_context(|| format!("SNMP WALK failed for {}", oid))?;

        Ok(Column::new(oid, rows.iter().map(|v| v.to_string()).collect()))
    }

    /// Обходит числовую колонку; нечисловая ячейка считается ошибкой
    pub async fn collect_int_column<C: SnmpQuery>(
        client: &mut C,
        oid: &'static str,
    ) -> Result<Column<i64>> {
        let rows = client
            .walk(oid)
            .await
            .with_context(|| format!("SNMP WALK failed for {}", oid))?;

        let values = rows
            .iter()
            .map(|v| {
                v.as_i64()
                    .ok_or_else(|| anyhow::anyhow!("unexpected value for {}: {:?}", oid, v))
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Column::new(oid, values))
    }
}
