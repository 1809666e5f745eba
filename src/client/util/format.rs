//! Number and time formatting for the dashboard cards.

/// Short count with a `K`/`M` suffix and at most one decimal, e.g. `1.2K`,
/// `3M`. Used for listener and play counts.
pub fn format_number(n: u64) -> String {
    if n >= 1_000_000 {
        format!("{}M", one_decimal(n as f64 / 1_000_000.0))
    } else if n >= 1_000 {
        format!("{}K", one_decimal(n as f64 / 1_000.0))
    } else {
        n.to_string()
    }
}

/// Compact notation up to trillions, e.g. `950`, `12.3K`, `4.5M`, `1B`.
pub fn compact_number(n: u64) -> String {
    const SCALES: [(f64, &str); 4] = [(1e12, "T"), (1e9, "B"), (1e6, "M"), (1e3, "K")];

    let value = n as f64;
    for (i, (scale, suffix)) in SCALES.iter().enumerate() {
        if value < *scale {
            continue;
        }
        let scaled = round_tenths(value / scale);
        // 999_950 rounds to 1000K; promote to the next unit.
        if scaled >= 1_000.0 && i > 0 {
            let (larger, larger_suffix) = SCALES[i - 1];
            return format!("{}{}", one_decimal(round_tenths(value / larger)), larger_suffix);
        }
        return format!("{}{}", one_decimal(scaled), suffix);
    }
    n.to_string()
}

/// Full count with thousands separators, e.g. `1,234,567`.
pub fn thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Track position as `m:ss`.
pub fn format_track_time(ms: u64) -> String {
    let total_seconds = ms / 1000;
    format!("{}:{:02}", total_seconds / 60, total_seconds % 60)
}

/// Uptime as `1d 2h 3m 4s`, omitting zero units.
pub fn format_uptime(seconds: f64) -> String {
    let total = if seconds.is_finite() && seconds > 0.0 {
        seconds.floor() as u64
    } else {
        0
    };

    let units = [
        (total / 86_400, "d"),
        ((total % 86_400) / 3_600, "h"),
        ((total % 3_600) / 60, "m"),
        (total % 60, "s"),
    ];

    let parts: Vec<String> = units
        .iter()
        .filter(|(value, _)| *value > 0)
        .map(|(value, unit)| format!("{value}{unit}"))
        .collect();

    if parts.is_empty() {
        "0s".to_string()
    } else {
        parts.join(" ")
    }
}

fn round_tenths(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

fn one_decimal(value: f64) -> String {
    let rounded = format!("{:.1}", value);
    rounded
        .strip_suffix(".0")
        .map(str::to_string)
        .unwrap_or(rounded)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_short_counts() {
        assert_eq!(format_number(0), "0");
        assert_eq!(format_number(999), "999");
        assert_eq!(format_number(1_000), "1K");
        assert_eq!(format_number(1_260), "1.3K");
        assert_eq!(format_number(2_000_000), "2M");
        assert_eq!(format_number(15_460_000), "15.5M");
    }

    #[test]
    fn formats_compact_counts() {
        assert_eq!(compact_number(950), "950");
        assert_eq!(compact_number(12_340), "12.3K");
        assert_eq!(compact_number(999_950), "1M");
        assert_eq!(compact_number(4_500_000), "4.5M");
        assert_eq!(compact_number(1_000_000_000), "1B");
    }

    #[test]
    fn separates_thousands() {
        assert_eq!(thousands(0), "0");
        assert_eq!(thousands(999), "999");
        assert_eq!(thousands(1_000), "1,000");
        assert_eq!(thousands(1_234_567), "1,234,567");
    }

    #[test]
    fn formats_track_time() {
        assert_eq!(format_track_time(0), "0:00");
        assert_eq!(format_track_time(65_400), "1:05");
        assert_eq!(format_track_time(3_600_000), "60:00");
    }

    #[test]
    fn formats_uptime() {
        assert_eq!(format_uptime(0.0), "0s");
        assert_eq!(format_uptime(0.7), "0s");
        assert_eq!(format_uptime(59.9), "59s");
        assert_eq!(format_uptime(3_600.0), "1h");
        assert_eq!(format_uptime(93_784.0), "1d 2h 3m 4s");
        assert_eq!(format_uptime(f64::NAN), "0s");
    }
}
