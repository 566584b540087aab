use serde::{Deserialize, Serialize};

/// Базовые настройки приложения
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Настройки подключения
    pub connection: ConnectionSettings,
    /// Настройки аутентификации
    pub auth: AuthSettings,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConnectionSettings {
    /// UDP порт агента
    pub port: u16,
    /// Таймаут для одного SNMP запроса (секунды)
    pub timeout: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AuthSettings {
    /// Community string SNMPv2c
    pub community: String,
}

impl Default for ConnectionSettings {
    fn default() -> Self {
        Self {
            port: 161,
            timeout: 10,
        }
    }
}

impl Default for AuthSettings {
    fn default() -> Self {
        Self {
            community: "public".to_string(),
        }
    }
}
