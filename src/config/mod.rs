use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

pub mod settings;

pub use settings::Settings;

/// Главная конфигурация приложения.
///
/// Порядок: значения по умолчанию, YAML файл, переменные окружения,
/// затем флаги командной строки (их применяет `main`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Базовые настройки
    pub settings: Settings,
}

impl AppConfig {
    /// Загружает конфигурацию: YAML файл, если задан, поверх значений по умолчанию
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let settings = match path {
            Some(path) => {
                let content = std::fs::read_to_string(path)
                    .context(format!("cannot read config file {}", path.display()))?;
                Self::parse(&content)
                    .context(format!("cannot parse config file {}", path.display()))?
            }
            None => Settings::default(),
        };

        let mut config = Self { settings };
        config.apply_env(|key| std::env::var(key).ok())?;
        Ok(config)
    }

    fn parse(content: &str) -> Result<Settings> {
        if content.trim().is_empty() {
            return Ok(Settings::default());
        }
        Ok(serde_yml::from_str(content)?)
    }

    /// Переопределения из окружения: SNMP_COMMUNITY, SNMP_TIMEOUT, SNMP_PORT
    fn apply_env(&mut self, lookup: impl Fn(&str) -> Option<String>) -> Result<()> {
        if let Some(community) = lookup("SNMP_COMMUNITY") {
            self.settings.auth.community = community;
        }
        if let Some(timeout) = lookup("SNMP_TIMEOUT") {
            self.settings.connection.timeout = timeout
                .trim()
                .parse()
                .context(format!("invalid SNMP_TIMEOUT: {}", timeout))?;
        }
        if let Some(port) = lookup("SNMP_PORT") {
            self.settings.connection.port = port
                .trim()
                .parse()
                .context(format!("invalid SNMP_PORT: {}", port))?;
        }
        Ok(())
    }

    /// Адрес агента: `host:port`, если порт не указан в самом host
    pub fn target(&self, host: &str) -> String {
        let has_port = match host.strip_prefix('[') {
            // [v6]:port
            Some(rest) => rest.contains("]:"),
            None => host.matches(':').count() == 1,
        };

        if has_port {
            host.to_string()
        } else if host.contains(':') && !host.starts_with('[') {
            format!("[{}]:{}", host, self.settings.connection.port)
        } else {
            format!("{}:{}", host, self.settings.connection.port)
        }
    }
}
