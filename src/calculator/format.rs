//! Display formatting for the calculator page
//!
//! Currency is shown as en-US dollars with no fraction digits. Rounding to
//! whole dollars happens here, never in the estimator.

/// Format a dollar amount as `$1,234` (half away from zero, `-$` for negatives)
pub fn format_usd(value: f64) -> String {
    if value.is_nan() {
        return "$NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "$∞".to_string() } else { "-$∞".to_string() };
    }

    let rounded = value.round();
    let digits = format!("{:.0}", rounded.abs());
    let grouped = group_thousands(&digits);

    if rounded < 0.0 {
        format!("-${}", grouped)
    } else {
        format!("${}", grouped)
    }
}

/// Format a whole-percent ROI as `1192%`
pub fn format_percent(value: f64) -> String {
    format!("{:.0}%", value)
}

/// Format a plain whole count such as FTEs
pub fn format_count(value: f64) -> String {
    format!("{:.0}", value)
}

fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_usd() {
        assert_eq!(format_usd(0.0), "$0");
        assert_eq!(format_usd(780.0), "$780");
        assert_eq!(format_usd(1375.0), "$1,375");
        assert_eq!(format_usd(71_500.0), "$71,500");
        assert_eq!(format_usd(214_500.0), "$214,500");
        assert_eq!(format_usd(41_600_000.0), "$41,600,000");
        assert_eq!(format_usd(124_800_000.0), "$124,800,000");
    }

    #[test]
    fn test_format_usd_rounding() {
        assert_eq!(format_usd(218.4), "$218");
        assert_eq!(format_usd(46.8), "$47");
        assert_eq!(format_usd(999.5), "$1,000");
        assert_eq!(format_usd(-1234.5), "-$1,235");
        assert_eq!(format_usd(-0.2), "$0");
    }

    #[test]
    fn test_format_usd_non_finite() {
        assert_eq!(format_usd(f64::NAN), "$NaN");
        assert_eq!(format_usd(f64::INFINITY), "$∞");
        assert_eq!(format_usd(f64::NEG_INFINITY), "-$∞");
    }

    #[test]
    fn test_format_percent_and_count() {
        assert_eq!(format_percent(1192.0), "1192%");
        assert_eq!(format_percent(693_333.0), "693333%");
        assert_eq!(format_count(100.0), "100");
    }
}
