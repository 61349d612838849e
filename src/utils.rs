use chrono::NaiveDate;

/// Parses a strict `YYYY-MM-DD` date. The shape is checked before chrono sees
/// it because `%Y`/`%m` also accept signed or unpadded numbers.
pub fn parse_iso_date(value: &str) -> Option<NaiveDate> {
    let bytes = value.as_bytes();
    if bytes.len() != 10 {
        return None;
    }

    let shape_ok = bytes.iter().enumerate().all(|(idx, b)| match idx {
        4 | 7 => *b == b'-',
        _ => b.is_ascii_digit(),
    });
    if !shape_ok {
        return None;
    }

    NaiveDate::parse_from_str(value, "%Y-%m-%d").ok()
}

/// Parses a finite real number. "NaN" and "inf" are rejected. Values are
/// trimmed here as well since records built by hand skip CSV trimming.
pub fn parse_amount(value: &str) -> Option<f64> {
    value.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Parses a whole number, trimming like `parse_amount`.
pub fn parse_quantity(value: &str) -> Option<i64> {
    value.trim().parse::<i64>().ok()
}

pub fn format_currency(value: f64, symbol: &str) -> String {
    format!("{}{:.2}", symbol, value)
}

pub fn format_percentage(value: f64) -> String {
    let sign = if value >= 0.0 { "+" } else { "" };
    format!("{}{:.2}%", sign, value)
}

pub fn sort_months<'a, I>(months: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a String>,
{
    let mut months: Vec<String> = months.into_iter().cloned().collect();
    months.sort();
    months.dedup();
    months
}
