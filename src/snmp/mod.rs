use std::fmt;

use anyhow::Result;

pub mod oid;
pub mod v2c;

#[cfg(test)]
pub mod mock;

pub use oid::parse_oid;
pub use v2c::SnmpClientV2c;

/// Значение, полученное от агента, уже отвязанное от буфера сессии
#[derive(Debug, Clone, PartialEq)]
pub enum SnmpValue {
    Integer(i64),
    Unsigned(u64),
    OctetString(Vec<u8>),
    ObjectIdentifier(String),
    IpAddress([u8; 4]),
    Null,
    Other(String),
}

impl SnmpValue {
    /// Целочисленное представление (числовые типы или число в строке)
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            SnmpValue::Integer(v) => Some(*v),
            SnmpValue::Unsigned(v) => i64::try_from(*v).ok(),
            SnmpValue::OctetString(bytes) => {
                String::from_utf8_lossy(bytes).trim().trim_matches('"').parse().ok()
            }
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            SnmpValue::Integer(v) => Some(*v as f64),
            SnmpValue::Unsigned(v) => Some(*v as f64),
            SnmpValue::OctetString(bytes) => {
                String::from_utf8_lossy(bytes).trim().trim_matches('"').parse().ok()
            }
            _ => None,
        }
    }
}

impl fmt::Display for SnmpValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SnmpValue::Integer(v) => write!(f, "{}", v),
            SnmpValue::Unsigned(v) => write!(f, "{}", v),
            SnmpValue::OctetString(bytes) => write!(f, "{}", String::from_utf8_lossy(bytes)),
            SnmpValue::ObjectIdentifier(oid) => write!(f, "{}", oid),
            SnmpValue::IpAddress([a, b, c, d]) => write!(f, "{}.{}.{}.{}", a, b, c, d),
            SnmpValue::Null => Ok(()),
            SnmpValue::Other(raw) => write!(f, "{}", raw),
        }
    }
}

/// Операции чтения, которые нужны проверкам: одиночный GET и обход колонки
#[allow(async_fn_in_trait)]
pub trait SnmpQuery {
    async fn get(&mut self, oid: &str) -> Result<SnmpValue>;

    /// Значения колонки в порядке OID
    async fn walk(&mut self, oid: &str) -> Result<Vec<SnmpValue>>;
}
