//! Вывод плагина: одна строка `сообщение | perfdata` и код выхода.

use std::fmt;

pub mod identifier;
pub mod perfdata;

pub use identifier::format_identifier_value;
pub use perfdata::PerfData;

use crate::status::ServiceState;

/// Итог одной проверки
#[derive(Debug, Clone, PartialEq)]
pub struct CheckOutcome {
    pub state: ServiceState,
    pub message: String,
    pub perfdata: Vec<PerfData>,
}

impl CheckOutcome {
    pub fn new(state: ServiceState, message: impl Into<String>) -> Self {
        Self {
            state,
            message: message.into(),
            perfdata: Vec::new(),
        }
    }

    pub fn with_perfdata(mut self, perfdata: Vec<PerfData>) -> Self {
        self.perfdata = perfdata;
        self
    }

    /// Итог для ошибки запроса: всегда UNKNOWN
    pub fn from_error(err: &anyhow::Error) -> Self {
        Self::new(ServiceState::Unknown, format!("UNKNOWN - {:#}", err))
    }
}

impl fmt::Display for CheckOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // переводы строк ломают разбор вывода монитором
        let message = self.message.replace(['\r', '\n'], " ");
        f.write_str(&message)?;

        if !self.perfdata.is_empty() {
            let entries: Vec<String> = self.perfdata.iter().map(|p| p.to_string()).collect();
            write!(f, " | {}", entries.join(" "))?;
        }

        Ok(())
    }
}
