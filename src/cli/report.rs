//! Plain-text tables for the CLI output

use std::fmt::Write;

use fareseries::types::{Destination, MonthlyAverage, PricePoint, SelectionSummary, Series};

/// Width of the proportional bar column
const BAR_WIDTH: usize = 24;

/// Format a price rounded to whole units with thousands separators
/// Example: 390000.4 → "390,000", -1234.6 → "-1,235"
pub fn format_price(price: f64) -> String {
    let rounded = price.round();
    let digits = format!("{:.0}", rounded.abs());
    let len = digits.len();
    let mut result = String::with_capacity(len + len / 3 + 1);

    if rounded < 0.0 {
        result.push('-');
    }
    // Digits are ASCII, so byte indexing is safe
    for (i, ch) in digits.bytes().enumerate() {
        if i > 0 && (len - i).is_multiple_of(3) {
            result.push(',');
        }
        result.push(ch as char);
    }

    result
}

/// Format a bar proportional to `value / max`
/// Example: value=500, max=1000, width=8 → "▓▓▓▓░░░░"
pub fn format_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 || width == 0 {
        return "░".repeat(width);
    }
    let ratio = (value / max).clamp(0.0, 1.0);
    let filled = (ratio * width as f64).round() as usize;
    let empty = width.saturating_sub(filled);
    format!("{}{}", "▓".repeat(filled), "░".repeat(empty))
}

pub fn render_destinations(destinations: &[Destination]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{:<16} {:<16} {:>10} {:>10}", "Destination", "Aliases", "Mean", "Std dev");
    for d in destinations {
        let _ = writeln!(
            out,
            "{:<16} {:<16} {:>10.2} {:>10.2}",
            d.name,
            d.aliases.join(", "),
            d.mean,
            d.std_dev
        );
    }
    out
}

pub fn render_series(series: &Series, currency: &str) -> String {
    let max = series
        .points
        .iter()
        .map(|p| p.price)
        .fold(0.0_f64, f64::max);

    let mut out = String::new();
    let _ = writeln!(out, "{} ticket prices ({})", series.destination, currency);
    let _ = writeln!(out, "{:<12} {:>12}", "Date", "Price");
    for point in &series.points {
        let _ = writeln!(
            out,
            "{:<12} {:>12}  {}",
            point.date.format("%Y-%m-%d"),
            format_price(point.price),
            format_bar(point.price, max, BAR_WIDTH)
        );
    }
    out
}

pub fn render_cheapest(destination: &str, cheapest: &PricePoint, currency: &str) -> String {
    format!(
        "Cheapest date for {}: {} at {} {}\n",
        destination,
        cheapest.date.format("%Y-%m-%d"),
        format_price(cheapest.price),
        currency
    )
}

pub fn render_monthly(destination: &str, monthly: &MonthlyAverage, currency: &str) -> String {
    let max = monthly.iter().map(|(_, avg)| avg).fold(0.0_f64, f64::max);

    let mut out = String::new();
    let _ = writeln!(out, "Monthly average price to {} ({})", destination, currency);
    let _ = writeln!(out, "{:>5} {:>12}", "Month", "Average");
    for (month, avg) in monthly.iter() {
        let _ = writeln!(
            out,
            "{:>5} {:>12}  {}",
            month,
            format_price(avg),
            format_bar(avg, max, BAR_WIDTH)
        );
    }
    out
}

/// Series, cheapest entry and monthly averages in one block
pub fn render_report(summary: &SelectionSummary<'_>, currency: &str) -> String {
    let mut out = render_series(summary.series, currency);
    out.push('\n');
    out.push_str(&render_cheapest(summary.destination, &summary.cheapest, currency));
    out.push('\n');
    out.push_str(&render_monthly(
        summary.destination,
        &summary.monthly_average,
        currency,
    ));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use std::collections::BTreeMap;

    #[test]
    fn test_format_price_zero() {
        assert_eq!(format_price(0.0), "0");
    }

    #[test]
    fn test_format_price_thousands() {
        assert_eq!(format_price(390000.0), "390,000");
        assert_eq!(format_price(1234567.0), "1,234,567");
        assert_eq!(format_price(999.0), "999");
    }

    #[test]
    fn test_format_price_rounds() {
        assert_eq!(format_price(390000.4), "390,000");
        assert_eq!(format_price(999.6), "1,000");
    }

    #[test]
    fn test_format_price_negative() {
        assert_eq!(format_price(-1234.6), "-1,235");
        assert_eq!(format_price(-0.2), "0");
    }

    #[test]
    fn test_format_bar_half() {
        assert_eq!(format_bar(500.0, 1000.0, 8), "▓▓▓▓░░░░");
    }

    #[test]
    fn test_format_bar_max() {
        assert_eq!(format_bar(1000.0, 1000.0, 4), "▓▓▓▓");
    }

    #[test]
    fn test_format_bar_negative_value_is_empty() {
        assert_eq!(format_bar(-50.0, 1000.0, 4), "░░░░");
    }

    #[test]
    fn test_format_bar_zero_max() {
        assert_eq!(format_bar(10.0, 0.0, 3), "░░░");
    }

    #[test]
    fn test_render_cheapest() {
        let point = PricePoint::new(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(), 390000.0);
        assert_eq!(
            render_cheapest("X", &point, "KRW"),
            "Cheapest date for X: 2024-01-01 at 390,000 KRW\n"
        );
    }

    #[test]
    fn test_render_monthly_rows_in_month_order() {
        let mut map = BTreeMap::new();
        map.insert(2, 50.0);
        map.insert(1, 150.0);
        let monthly = MonthlyAverage::from(map);

        let out = render_monthly("X", &monthly, "KRW");
        let lines: Vec<&str> = out.lines().collect();

        assert_eq!(lines.len(), 4);
        assert!(lines[2].trim_start().starts_with("1 "));
        assert!(lines[3].trim_start().starts_with("2 "));
    }

    #[test]
    fn test_render_series_one_row_per_point() {
        let series = Series {
            destination: "X".into(),
            points: vec![
                PricePoint::new(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(), 1.0),
                PricePoint::new(NaiveDate::from_ymd_opt(2024, 1, 8).unwrap(), 2.0),
            ],
        };

        let out = render_series(&series, "KRW");

        assert_eq!(out.lines().count(), 4);
        assert!(out.contains("2024-01-08"));
    }
}
