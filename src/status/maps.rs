use super::{LabelMap, ServiceState as S, StatusMap};

/// os / main / timing / net
pub static GENERIC: StatusMap = StatusMap {
    entries: &[
        (1, S::Ok, "OK"),
        (2, S::Critical, "CRITICAL"),
        (3, S::Warning, "WARNING"),
        (4, S::Warning, "WARNING"),
        (5, S::Critical, "CRITICAL"),
    ],
    fallback: "UNKNOWN:",
};

pub static CPU: StatusMap = StatusMap {
    entries: &[
        (1, S::Ok, "OK"),
        (2, S::Critical, "CRITICAL"),
        (3, S::Warning, "WARNING"),
    ],
    fallback: "UNKNOWN",
};

pub static TEMP: StatusMap = StatusMap {
    entries: &[
        (1, S::Unknown, "UNKNOWN - threshold not set"),
        (2, S::Ok, "OK: Temperature normal"),
        (3, S::Critical, "CRITICAL: Temperature too high"),
    ],
    fallback: "UNKNOWN Temp status",
};

pub static MEM: StatusMap = StatusMap {
    entries: &[
        (1, S::Ok, "OK: Memory OK"),
        (2, S::Critical, "CRITICAL: Memory error"),
        (3, S::Warning, "WARNING: Memory warning"),
        (4, S::Warning, "WARNING: Memory N/A"),
    ],
    fallback: "UNKNOWN Memory status",
};

pub static DISK: StatusMap = StatusMap {
    entries: &[
        (1, S::Ok, "OK: Disk space OK"),
        (2, S::Critical, "CRITICAL: Disk space error"),
        (3, S::Warning, "WARNING: Disk space warning"),
        (4, S::Warning, "WARNING: Disk space N/A"),
    ],
    fallback: "UNKNOWN Disk status",
};

const PTP_CODES: &[(i64, S, &str)] = &[
    (0, S::Unknown, "N/A"),
    (1, S::Ok, "OK"),
    (2, S::Critical, "CRITICAL"),
    (6, S::Warning, "WARNING: First read"),
];

pub static PTP: StatusMap = StatusMap {
    entries: PTP_CODES,
    fallback: "UNKNOWN PTP status",
};

pub static PLL: StatusMap = StatusMap {
    entries: &[
        (0, S::Unknown, "N/A"),
        (1, S::Ok, "OK"),
        (2, S::Critical, "CRITICAL"),
        (3, S::Warning, "WARNING"),
        (4, S::Warning, "WARNING/N.A."),
        (5, S::Critical, "BUG"),
    ],
    fallback: "UNKNOWN PLL status",
};

pub static SLAVE: StatusMap = StatusMap {
    entries: &[
        (0, S::Unknown, "N/A"),
        (1, S::Ok, "OK"),
        (2, S::Critical, "CRITICAL"),
        (4, S::Warning, "WARNING (N/A)"),
    ],
    fallback: "UNKNOWN slave status",
};

/// Кадры PTP разрешаются по кодам PTP: 4 здесь не WARNING, а неизвестный код
pub static PTP_FRAMES: StatusMap = StatusMap {
    entries: PTP_CODES,
    fallback: "UNKNOWN PTP Frames status",
};

pub static SYSTEM_CLOCK: StatusMap = StatusMap {
    entries: &[
        (0, S::Unknown, "N/A"),
        (1, S::Ok, "OK"),
        (2, S::Critical, "CRITICAL"),
        (3, S::Warning, "WARNING"),
        (4, S::Warning, "WARNING (N/A)"),
    ],
    fallback: "UNKNOWN system clock status",
};

pub static ENDPOINT: StatusMap = StatusMap {
    entries: &[
        (0, S::Unknown, "N/A"),
        (1, S::Ok, "OK"),
        (2, S::Critical, "CRITICAL"),
        (6, S::Warning, "WARNING: First read"),
    ],
    fallback: "UNKNOWN endpoint status",
};

pub static SWCORE: StatusMap = StatusMap {
    entries: &[
        (0, S::Unknown, "N/A"),
        (1, S::Ok, "OK"),
        (2, S::Critical, "CRITICAL"),
        (6, S::Warning, "WARNING: First read"),
    ],
    fallback: "UNKNOWN Soft Core status",
};

pub static RTU: StatusMap = StatusMap {
    entries: &[
        (0, S::Unknown, "N/A"),
        (1, S::Ok, "OK"),
        (2, S::Critical, "CRITICAL"),
        (6, S::Warning, "WARNING: First read"),
    ],
    fallback: "UNKNOWN RTU status",
};

/// Сводный статус SFP: только подписи, серьёзность считает сама проверка
pub static SFP_STATUS: LabelMap = LabelMap {
    entries: &[
        (0, "N/A"),
        (1, "OK"),
        (2, "Error"),
        (3, "Warning"),
        (4, "Warning/N.A."),
        (5, "Bug"),
    ],
};

pub static SFP_ERROR: LabelMap = LabelMap {
    entries: &[(0, "N/A"), (1, "sfpOk"), (2, "sfpError"), (3, "portDown")],
};

pub static LINK: LabelMap = LabelMap {
    entries: &[(0, "N/A"), (1, "down"), (2, "up")],
};

#[cfg(test)]
mod tests {
    use super::*;

    const ODD_CODES: [i64; 6] = [-1, -300, 7, 99, 1_000_000, i64::MIN];

    fn assert_table(map: &StatusMap, expected: &[(i64, S, &str)]) {
        for (code, state, label) in expected {
            let resolved = map.resolve(*code);
            assert_eq!(resolved.state, *state, "code {}", code);
            assert_eq!(resolved.label, *label, "code {}", code);
        }
    }

    fn assert_unknown_echoes_code(map: &StatusMap) {
        for code in ODD_CODES {
            let resolved = map.resolve(code);
            assert_eq!(resolved.state, S::Unknown);
            assert!(resolved.label.contains(&code.to_string()), "{}", resolved.label);
        }
    }

    #[test]
    fn generic_status() {
        assert_table(
            &GENERIC,
            &[
                (1, S::Ok, "OK"),
                (2, S::Critical, "CRITICAL"),
                (3, S::Warning, "WARNING"),
                (4, S::Warning, "WARNING"),
                (5, S::Critical, "CRITICAL"),
            ],
        );
        assert_eq!(GENERIC.resolve(99).label, "UNKNOWN: 99");
        assert_eq!(GENERIC.resolve(0).state, S::Unknown);
        assert_unknown_echoes_code(&GENERIC);
    }

    #[test]
    fn temperature_status() {
        assert_table(
            &TEMP,
            &[
                (1, S::Unknown, "UNKNOWN - threshold not set"),
                (2, S::Ok, "OK: Temperature normal"),
                (3, S::Critical, "CRITICAL: Temperature too high"),
            ],
        );
        assert_eq!(TEMP.resolve(4).label, "UNKNOWN Temp status 4");
        assert_unknown_echoes_code(&TEMP);
    }

    #[test]
    fn memory_status() {
        assert_table(
            &MEM,
            &[
                (1, S::Ok, "OK: Memory OK"),
                (2, S::Critical, "CRITICAL: Memory error"),
                (3, S::Warning, "WARNING: Memory warning"),
                (4, S::Warning, "WARNING: Memory N/A"),
            ],
        );
        assert_eq!(MEM.resolve(5).label, "UNKNOWN Memory status 5");
        assert_unknown_echoes_code(&MEM);
    }

    #[test]
    fn disk_status() {
        assert_table(
            &DISK,
            &[
                (1, S::Ok, "OK: Disk space OK"),
                (2, S::Critical, "CRITICAL: Disk space error"),
                (3, S::Warning, "WARNING: Disk space warning"),
                (4, S::Warning, "WARNING: Disk space N/A"),
            ],
        );
        assert_unknown_echoes_code(&DISK);
    }

    #[test]
    fn same_code_differs_between_subsystems() {
        assert_eq!(PTP.resolve(4).state, S::Unknown);
        assert_eq!(SLAVE.resolve(4).label, "WARNING (N/A)");
        assert_eq!(PLL.resolve(4).label, "WARNING/N.A.");
        assert_eq!(PLL.resolve(5).state, S::Critical);
        assert_eq!(GENERIC.resolve(5).state, S::Critical);
        assert_eq!(CPU.resolve(4).state, S::Unknown);
    }

    #[test]
    fn timing_subsystem_tables() {
        for map in [&PTP, &ENDPOINT, &SWCORE, &RTU] {
            assert_table(
                map,
                &[
                    (0, S::Unknown, "N/A"),
                    (1, S::Ok, "OK"),
                    (2, S::Critical, "CRITICAL"),
                    (6, S::Warning, "WARNING: First read"),
                ],
            );
            assert_eq!(map.resolve(3).state, S::Unknown);
            assert_unknown_echoes_code(map);
        }

        assert_table(
            &PTP_FRAMES,
            &[(1, S::Ok, "OK"), (6, S::Warning, "WARNING: First read")],
        );
        assert_eq!(PTP_FRAMES.resolve(4).state, S::Unknown);
        assert_eq!(PTP_FRAMES.resolve(4).label, "UNKNOWN PTP Frames status 4");
        assert_table(
            &SYSTEM_CLOCK,
            &[(3, S::Warning, "WARNING"), (4, S::Warning, "WARNING (N/A)")],
        );
        for map in [&PLL, &SLAVE, &PTP_FRAMES, &SYSTEM_CLOCK, &CPU] {
            assert_unknown_echoes_code(map);
        }
    }

    #[test]
    fn sfp_label_tables() {
        assert_eq!(SFP_STATUS.label(2), "Error");
        assert_eq!(SFP_STATUS.label(4), "Warning/N.A.");
        assert_eq!(SFP_STATUS.label(9), "Unknown(9)");
        assert_eq!(SFP_ERROR.label(3), "portDown");
        assert_eq!(LINK.label(1), "down");
        assert_eq!(LINK.label(-1), "Unknown(-1)");
    }
}
