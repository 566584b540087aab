use crate::snmp::SnmpValue;

/// Позиция и значение заполнителя, которым MAC-48 расширяется до EUI-64
const EUI64_FILLER: [u8; 2] = [0xFF, 0xFE];

/// Форматирует бинарный идентификатор как `AA:BB:CC:...`.
///
/// 8-байтовый идентификатор с `FF:FE` ровно в байтах 3 и 4 сворачивается
/// обратно в 6-байтовый MAC. Любые другие байты не трогаются.
pub fn format_identifier(raw: &[u8]) -> String {
    let collapsed: Vec<u8> = if raw.len() == 8 && raw[3..5] == EUI64_FILLER {
        raw[..3].iter().chain(&raw[5..]).copied().collect()
    } else {
        raw.to_vec()
    };

    collapsed
        .iter()
        .map(|b| format!("{:02X}", b))
        .collect::<Vec<_>>()
        .join(":")
}

/// Идентификатор из значения агента; не-бинарные значения выводятся как есть
pub fn format_identifier_value(value: &SnmpValue) -> String {
    match value {
        SnmpValue::OctetString(bytes) => format_identifier(bytes),
        other => other.to_string(),
    }
}
