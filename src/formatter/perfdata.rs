use std::fmt;

/// Одна запись performance data: `label=value[;warn;crit;min;max]`
#[derive(Debug, Clone, PartialEq)]
pub struct PerfData {
    pub label: String,
    pub value: String,
    pub warn: Option<String>,
    pub crit: Option<String>,
    pub min: Option<String>,
    pub max: Option<String>,
}

impl PerfData {
    pub fn new(label: impl Into<String>, value: impl fmt::Display) -> Self {
        Self {
            label: label.into(),
            value: value.to_string(),
            warn: None,
            crit: None,
            min: None,
            max: None,
        }
    }

    pub fn with_thresholds(mut self, warn: impl fmt::Display, crit: impl fmt::Display) -> Self {
        self.warn = Some(warn.to_string());
        self.crit = Some(crit.to_string());
        self
    }

    pub fn with_min(mut self, min: impl fmt::Display) -> Self {
        self.min = Some(min.to_string());
        self
    }

    pub fn with_max(mut self, max: impl fmt::Display) -> Self {
        self.max = Some(max.to_string());
        self
    }

    fn has_extra(&self) -> bool {
        self.warn.is_some() || self.crit.is_some() || self.min.is_some() || self.max.is_some()
    }
}

impl fmt::Display for PerfData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // метки с пробелами берутся в одинарные кавычки
        if self.label.contains(' ') {
            write!(f, "'{}'={}", self.label.replace('\'', ""), self.value)?;
        } else {
            write!(f, "{}={}", self.label, self.value)?;
        }

        if self.has_extra() {
            for slot in [&self.warn, &self.crit, &self.min, &self.max] {
                write!(f, ";{}", slot.as_deref().unwrap_or(""))?;
            }
        }

        Ok(())
    }
}
