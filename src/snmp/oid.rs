use anyhow::{Context, Result};
use snmp2::Oid;

/// Парсит строку OID в объект Oid
pub fn parse_oid(s: &str) -> Result<Oid<'static>> {
    let parts: Result<Vec<u64>, _> = s
        .trim()
        .split('.')
        .filter(|p| !p.is_empty())
        .map(|p| p.parse::<u64>())
        .collect();

    let parts = parts.context(format!("invalid OID: {}", s))?;
    if parts.len() < 2 {
        anyhow::bail!("invalid OID: {} (need at least two arcs)", s);
    }

    Oid::from(&parts).map_err(|e| anyhow::anyhow!("cannot build Oid from '{}': {:?}", s, e))
}
