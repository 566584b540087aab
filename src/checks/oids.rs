//! OID подсистем коммутатора White Rabbit (WR-SWITCH-MIB, ветка 1.3.6.1.4.1.96.100).
//!
//! Ветка `.6` содержит сводные статусы, ветка `.7` сами значения.

// Общие статусы
pub const OS_STATUS: &str = "1.3.6.1.4.1.96.100.6.1.2.0";
pub const MAIN_STATUS: &str = "1.3.6.1.4.1.96.100.6.1.1.0";
pub const TIMING_STATUS: &str = "1.3.6.1.4.1.96.100.6.1.3.0";
pub const NET_STATUS: &str = "1.3.6.1.4.1.96.100.6.1.4.0";

// CPU
pub const CPU_STATUS: &str = "1.3.6.1.4.1.96.100.6.2.1.4.0";
pub const CPU_LOAD: [(&str, &str); 3] = [
    ("cpu1", "1.3.6.1.4.1.96.100.7.1.5.1.0"),
    ("cpu5", "1.3.6.1.4.1.96.100.7.1.5.2.0"),
    ("cpu15", "1.3.6.1.4.1.96.100.7.1.5.3.0"),
];

// Температура
pub const TEMP_STATUS: &str = "1.3.6.1.4.1.96.100.6.2.1.2.0";
pub const TEMP_VALUES: [(&str, &str); 4] = [
    ("fpga", "1.3.6.1.4.1.96.100.7.1.3.1.0"),
    ("pll", "1.3.6.1.4.1.96.100.7.1.3.2.0"),
    ("psl", "1.3.6.1.4.1.96.100.7.1.3.3.0"),
    ("psr", "1.3.6.1.4.1.96.100.7.1.3.4.0"),
];
pub const TEMP_THRESHOLDS: [(&str, &str); 4] = [
    ("fpga", "1.3.6.1.4.1.96.100.7.1.3.5.0"),
    ("pll", "1.3.6.1.4.1.96.100.7.1.3.6.0"),
    ("psl", "1.3.6.1.4.1.96.100.7.1.3.7.0"),
    ("psr", "1.3.6.1.4.1.96.100.7.1.3.8.0"),
];

// Память
pub const MEM_STATUS: &str = "1.3.6.1.4.1.96.100.6.2.1.3.0";
pub const MEM_VALUES: [(&str, &str); 4] = [
    ("total", "1.3.6.1.4.1.96.100.7.1.4.1.0"),
    ("used", "1.3.6.1.4.1.96.100.7.1.4.2.0"),
    ("usedPerc", "1.3.6.1.4.1.96.100.7.1.4.3.0"),
    ("free", "1.3.6.1.4.1.96.100.7.1.4.4.0"),
];

// Диск
pub const DISK_STATUS: &str = "1.3.6.1.4.1.96.100.6.2.1.5.0";
pub const DISK_MOUNT: &str = "1.3.6.1.4.1.96.100.7.1.6.1.2";
pub const DISK_USED: &str = "1.3.6.1.4.1.96.100.7.1.6.1.4";

// PTP
pub const PTP_STATUS: &str = "1.3.6.1.4.1.96.100.6.2.2.1.0";
pub const PTP_PORT: &str = "1.3.6.1.4.1.96.100.7.5.1.2.1";
pub const PTP_GRANDMASTER: &str = "1.3.6.1.4.1.96.100.7.5.1.3.1";
pub const PTP_SERVO_STATE: &str = "1.3.6.1.4.1.96.100.7.5.1.6.1";
pub const PTP_DELAY_COEFFICIENT: &str = "1.3.6.1.4.1.96.100.7.5.1.31.1";

// PLL
pub const PLL_STATUS: &str = "1.3.6.1.4.1.96.100.6.2.2.2.0";
pub const PLL_MODE: &str = "1.3.6.1.4.1.96.100.7.3.2.1.0";
pub const PLL_SEQ_STATE: &str = "1.3.6.1.4.1.96.100.7.3.2.3.0";
pub const PLL_ALIGN_STATE: &str = "1.3.6.1.4.1.96.100.7.3.2.4.0";

pub const SLAVE_STATUS: &str = "1.3.6.1.4.1.96.100.6.2.2.3.0";
pub const PTP_FRAMES_STATUS: &str = "1.3.6.1.4.1.96.100.6.2.2.4.0";
pub const SYSTEM_CLOCK_STATUS: &str = "1.3.6.1.4.1.96.100.6.2.2.5.0";

// SFP и таблица портов
pub const SFP_STATUS: &str = "1.3.6.1.4.1.96.100.6.2.3.1.0";
pub const PORT_NAME: &str = "1.3.6.1.4.1.96.100.7.6.1.2";
pub const PORT_LINK: &str = "1.3.6.1.4.1.96.100.7.6.1.3";
pub const PORT_VENDOR: &str = "1.3.6.1.4.1.96.100.7.6.1.7";
pub const PORT_SFP_ERROR: &str = "1.3.6.1.4.1.96.100.7.6.1.12";
pub const PORT_TEMP: &str = "1.3.6.1.4.1.96.100.7.6.1.17";
pub const PORT_TX_POWER: &str = "1.3.6.1.4.1.96.100.7.6.1.20";
pub const PORT_RX_POWER: &str = "1.3.6.1.4.1.96.100.7.6.1.21";

pub const ENDPOINT_STATUS: &str = "1.3.6.1.4.1.96.100.6.2.3.2.0";
pub const SWCORE_STATUS: &str = "1.3.6.1.4.1.96.100.6.2.3.3.0";
pub const RTU_STATUS: &str = "1.3.6.1.4.1.96.100.6.2.3.4.0";
