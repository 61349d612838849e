use crate::schema::{AnalyticsConfig, AnalyticsReport, GrowthEntry};
use crate::utils::{format_currency, format_percentage};
use std::fmt::{self, Write};

const WIDTH: usize = 80;

fn section<W: Write>(out: &mut W, title: &str) -> fmt::Result {
    let rule = "=".repeat(WIDTH);
    write!(out, "\n{}\n{}\n{}\n", rule, title.to_uppercase(), rule)
}

fn banner<W: Write>(out: &mut W) -> fmt::Result {
    let title = "SALES ANALYTICS REPORT";
    let inner = WIDTH - 2;
    let left = 20;
    let right = inner - left - title.chars().count();

    writeln!(out, "╔{}╗", "═".repeat(inner))?;
    writeln!(out, "║{}{}{}║", " ".repeat(left), title, " ".repeat(right))?;
    writeln!(out, "╚{}╝", "═".repeat(inner))
}

fn describe_growth(entry: &GrowthEntry) -> String {
    match entry {
        GrowthEntry::NoData => "No data".to_string(),
        GrowthEntry::NewItem => "New item (no previous data)".to_string(),
        GrowthEntry::Percentage(value) => format_percentage(*value),
    }
}

/// Writes the plain-text report. Only formats values already in `report`.
pub fn write_report<W: Write>(
    out: &mut W,
    report: &AnalyticsReport,
    config: &AnalyticsConfig,
) -> fmt::Result {
    let currency = |value: f64| format_currency(value, &config.currency_symbol);
    let months = report.sorted_months();

    banner(out)?;

    section(out, "1. Total Sales of the Store")?;
    writeln!(out, "Total Revenue: {}", currency(report.total_revenue))?;
    writeln!(out, "Valid Transactions: {}", report.valid_record_count)?;

    section(out, "2. Month-wise Sales Totals")?;
    for (month, revenue) in &report.monthly_revenue {
        writeln!(out, "{}: {}", month, currency(*revenue))?;
    }

    section(out, "3. Most Popular Item Per Month (by Quantity)")?;
    for month in &months {
        if let Some(popular) = report.popularity_by_month.get(*month) {
            writeln!(out, "\n{}:", month)?;
            writeln!(out, "  Item: {}", popular.item)?;
            writeln!(out, "  Total Quantity Sold: {} units", popular.total_quantity)?;
            writeln!(out, "  Min Quantity per Order: {}", popular.min_quantity)?;
            writeln!(out, "  Max Quantity per Order: {}", popular.max_quantity)?;
            writeln!(out, "  Avg Quantity per Order: {:.2}", popular.avg_quantity)?;
        }
    }

    section(out, "4. Highest Revenue Generating Item Per Month")?;
    for month in &months {
        if let Some(leader) = report.revenue_leader_by_month.get(*month) {
            writeln!(out, "{}: {} - {}", month, leader.item, currency(leader.revenue))?;
        }
    }

    section(out, "5. Month-to-Month Growth Per Item (%)")?;
    // Items that only ever show "No data" are left out
    let items = report.growth_by_item.iter().filter(|(_, growth)| {
        growth
            .values()
            .any(|entry| !matches!(entry, GrowthEntry::NoData))
    });
    for (item, growth) in items {
        writeln!(out, "\n{}:", item)?;
        for month in months.iter().skip(1) {
            if let Some(entry) = growth.get(*month) {
                writeln!(out, "  {}: {}", month, describe_growth(entry))?;
            }
        }
    }

    section(out, "6. Data Validation Report")?;
    if report.validation_errors.is_empty() {
        writeln!(out, "✓ All rows passed validation!")?;
    } else {
        writeln!(
            out,
            "✗ Found {} invalid rows:\n",
            report.validation_errors.len()
        )?;
        for error in &report.validation_errors {
            let data = serde_json::to_string(&error.record).map_err(|_| fmt::Error)?;
            writeln!(out, "Row {}:", error.row)?;
            writeln!(out, "  Data: {}", data)?;
            writeln!(out, "  Issues:")?;
            for issue in &error.issues {
                writeln!(out, "    - {}", issue)?;
            }
            writeln!(out)?;
        }
    }

    let rule = "=".repeat(WIDTH);
    write!(out, "\n{}\nEND OF REPORT\n{}\n", rule, rule)
}

pub fn render_report(report: &AnalyticsReport, config: &AnalyticsConfig) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail
    let _ = write_report(&mut out, report, config);
    out
}
