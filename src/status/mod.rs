//! Состояния сервиса и таблицы кодов статуса.
//!
//! Каждая подсистема коммутатора отдаёт свои коды, и один и тот же код у
//! разных подсистем значит разное (4 у памяти это "N/A", у PLL "WARNING/N.A.").
//! Поэтому у каждой проверки своя таблица, общих таблиц нет.

use std::fmt;

pub mod maps;

/// Состояние сервиса в терминах Nagios/Icinga
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServiceState {
    Ok,
    Warning,
    Critical,
    Unknown,
}

impl ServiceState {
    pub fn exit_code(self) -> u8 {
        match self {
            ServiceState::Ok => 0,
            ServiceState::Warning => 1,
            ServiceState::Critical => 2,
            ServiceState::Unknown => 3,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ServiceState::Ok => "OK",
            ServiceState::Warning => "WARNING",
            ServiceState::Critical => "CRITICAL",
            ServiceState::Unknown => "UNKNOWN",
        }
    }
}

impl fmt::Display for ServiceState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Результат разрешения кода
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    pub state: ServiceState,
    pub label: String,
}

/// Неизменяемая таблица "код -> (состояние, подпись)" одной проверки
#[derive(Debug)]
pub struct StatusMap {
    pub entries: &'static [(i64, ServiceState, &'static str)],
    /// Префикс подписи для неизвестного кода, код дописывается через пробел
    pub fallback: &'static str,
}

impl StatusMap {
    /// Тотальна на всех целых: неизвестный код даёт UNKNOWN с этим кодом в подписи
    pub fn resolve(&self, code: i64) -> Resolution {
        match self.entries.iter().find(|(key, _, _)| *key == code) {
            Some((_, state, label)) => Resolution {
                state: *state,
                label: (*label).to_string(),
            },
            None => Resolution {
                state: ServiceState::Unknown,
                label: format!("{} {}", self.fallback, code),
            },
        }
    }
}

/// Таблица только подписей, без состояния (коды портов SFP)
#[derive(Debug)]
pub struct LabelMap {
    pub entries: &'static [(i64, &'static str)],
}

impl LabelMap {
    pub fn label(&self, code: i64) -> String {
        self.entries
            .iter()
            .find(|(key, _)| *key == code)
            .map(|(_, label)| (*label).to_string())
            .unwrap_or_else(|| format!("Unknown({})", code))
    }
}
