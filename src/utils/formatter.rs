// src/utils/formatter.rs
use chrono::NaiveDate;

const SIZE_UNITS: [&str; 4] = ["Bytes", "KB", "MB", "GB"];
const STEP: u64 = 1024;

/// Human readable size, e.g. `1536` -> `"1.5 KB"`.
///
/// The unit is the largest one the value reaches, capped at GB, so anything
/// past a terabyte is still expressed in GB. The number keeps at most two
/// decimals and drops trailing zeros.
pub fn format_size(bytes: u64) -> String {
    if bytes == 0 {
        return "0 Bytes".to_string();
    }

    let mut unit = 0;
    let mut divisor = 1u64;
    while unit + 1 < SIZE_UNITS.len() && bytes / divisor >= STEP {
        divisor *= STEP;
        unit += 1;
    }

    let value = bytes as f64 / divisor as f64;
    let rounded = (value * 100.0).round() / 100.0;
    format!("{} {}", rounded, SIZE_UNITS[unit])
}

pub fn format_date(date: NaiveDate) -> String {
    date.format("%d.%m.%Y").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_bytes() {
        assert_eq!(format_size(0), "0 Bytes");
    }

    #[test]
    fn test_units() {
        assert_eq!(format_size(1), "1 Bytes");
        assert_eq!(format_size(500), "500 Bytes");
        assert_eq!(format_size(1023), "1023 Bytes");
        assert_eq!(format_size(1024), "1 KB");
        assert_eq!(format_size(1536), "1.5 KB");
        assert_eq!(format_size(2000), "1.95 KB");
        assert_eq!(format_size(1024 * 1024), "1 MB");
        assert_eq!(format_size(3 * 1024 * 1024 * 1024), "3 GB");
    }

    #[test]
    fn test_clamped_at_gb() {
        let five_tb = 5 * 1024u64.pow(4);
        assert_eq!(format_size(five_tb), "5120 GB");
    }

    #[test]
    fn test_value_stays_below_next_unit() {
        for bytes in [1u64, 999, 1024, 4096, 1_048_575, 1_048_576, 123_456_789] {
            let formatted = format_size(bytes);
            let (number, unit) = formatted.split_once(' ').unwrap();
            let number: f64 = number.parse().unwrap();
            assert!(SIZE_UNITS.contains(&unit));
            assert!(number >= 1.0 && number <= 1024.0, "{formatted}");
        }
    }

    #[test]
    fn test_format_date() {
        let date = NaiveDate::from_ymd_opt(2024, 7, 28).unwrap();
        assert_eq!(format_date(date), "28.07.2024");
    }
}
