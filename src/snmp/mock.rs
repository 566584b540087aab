use std::collections::{HashMap, HashSet};

use anyhow::Result;

use super::{SnmpQuery, SnmpValue};

/// Агент в памяти для тестов проверок.
/// Неизвестный скаляр читается как 0, неизвестная таблица как пустая.
#[derive(Debug, Default)]
pub struct MockClient {
    scalars: HashMap<String, SnmpValue>,
    tables: HashMap<String, Vec<SnmpValue>>,
    failing: HashSet<String>,
    pub requests: Vec<String>,
}

impl MockClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_int(mut self, oid: &str, value: i64) -> Self {
        self.scalars.insert(oid.to_string(), SnmpValue::Integer(value));
        self
    }

    pub fn with_value(mut self, oid: &str, value: SnmpValue) -> Self {
        self.scalars.insert(oid.to_string(), value);
        self
    }

    pub fn with_text_column(mut self, oid: &str, values: &[&str]) -> Self {
        let column = values
            .iter()
            .map(|v| SnmpValue::OctetString(v.as_bytes().to_vec()))
            .collect();
        self.tables.insert(oid.to_string(), column);
        self
    }

    pub fn with_int_column(mut self, oid: &str, values: &[i64]) -> Self {
        let column = values.iter().map(|v| SnmpValue::Integer(*v)).collect();
        self.tables.insert(oid.to_string(), column);
        self
    }

    pub fn failing(mut self, oid: &str) -> Self {
        self.failing.insert(oid.to_string());
        self
    }
}

impl SnmpQuery for MockClient {
    async fn get(&mut self, oid: &str) -> Result<SnmpValue> {
        self.requests.push(oid.to_string());
        if self.failing.contains(oid) {
            anyhow::bail!("timeout after 10s");
        }
        Ok(self
            .scalars
            .get(oid)
            .cloned()
            .unwrap_or(SnmpValue::Integer(0)))
    }

    async fn walk(&mut self, oid: &str) -> Result<Vec<SnmpValue>> {
        self.requests.push(oid.to_string());
        if self.failing.contains(oid) {
            anyhow::bail!("timeout after 10s");
        }
        Ok(self.tables.get(oid).cloned().unwrap_or_default())
    }
}
