use crate::services::rounding::round_half_up;

/// Compact dollar amount: `$1.23M`, `$45.6K` or `$950`.
///
/// Ties round up, so `1250` prints `$1.3K`.
pub fn format_currency(value: i64) -> String {
    let amount = value as f64;
    if value >= 1_000_000 {
        format!("${:.2}M", round_half_up(amount / 10_000.0) / 100.0)
    } else if value >= 1_000 {
        format!("${:.1}K", round_half_up(amount / 100.0) / 10.0)
    } else {
        format!("${value}")
    }
}

/// Dollars and cents, e.g. `$3.40`.
pub fn format_price(value: f64) -> String {
    format!("${value:.2}")
}

pub fn format_percent(value: Option<i64>) -> String {
    match value {
        Some(value) => format!("{value}%"),
        None => "n/a".to_string(),
    }
}

pub fn format_growth(value: Option<i64>) -> String {
    match value {
        Some(value) if value >= 0 => format!("+{value}%"),
        Some(value) => format!("{value}%"),
        None => "n/a".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_currency_picks_a_unit() {
        assert_eq!(format_currency(689_213), "$689.2K");
        assert_eq!(format_currency(2_183_619), "$2.18M");
        assert_eq!(format_currency(20_064), "$20.1K");
        assert_eq!(format_currency(1_000), "$1.0K");
        assert_eq!(format_currency(950), "$950");
        assert_eq!(format_currency(0), "$0");
        assert_eq!(format_currency(-1_130), "$-1130");
    }

    #[test]
    fn format_currency_rounds_ties_up() {
        assert_eq!(format_currency(1_250), "$1.3K");
        assert_eq!(format_currency(20_250), "$20.3K");
        assert_eq!(format_currency(1_125_000), "$1.13M");
        assert_eq!(format_currency(1_249), "$1.2K");
        assert_eq!(format_currency(999_950), "$1000.0K");
    }

    #[test]
    fn format_price_keeps_cents() {
        assert_eq!(format_price(3.4), "$3.40");
        assert_eq!(format_price(14.0), "$14.00");
    }

    #[test]
    fn percentages_show_missing_values() {
        assert_eq!(format_percent(Some(27)), "27%");
        assert_eq!(format_percent(None), "n/a");
        assert_eq!(format_growth(Some(117)), "+117%");
        assert_eq!(format_growth(Some(-4)), "-4%");
        assert_eq!(format_growth(None), "n/a");
    }
}
