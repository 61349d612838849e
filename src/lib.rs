//! # Sales Analytics
//!
//! A library for validating tabular sales transactions and deriving a monthly
//! analytics report from the rows that pass.
//!
//! ## Core Concepts
//!
//! - **Raw Records**: One row per transaction, every field still a string
//! - **Validation**: Each row is checked independently for a real calendar
//!   date, non-negative prices, a quantity of at least one and
//!   `Unit Price * Quantity ≈ Total Price` within a tolerance. Invalid rows are
//!   reported, never repaired, and never abort the run
//! - **Analytics**: Total and monthly revenue, the most popular and the top
//!   revenue item per month, and month-over-month growth per item
//! - **Growth Sentinels**: `NoData` and `NewItem` mark comparisons where a
//!   percentage is undefined
//!
//! ## Example
//!
//! ```rust,ignore
//! use sales_analytics::*;
//!
//! let csv = "Date,SKU,Unit Price,Quantity,Total Price\n\
//!            2019-01-01,A,10,2,20\n\
//!            2019-01-01,B,10,5,50\n\
//!            2019-02-01,A,10,1,10\n";
//!
//! let config = AnalyticsConfig::default();
//! let report = process_csv(csv, &config).unwrap();
//!
//! assert_eq!(report.popularity_by_month["2019-01"].item, "B");
//! println!("{}", render_report(&report, &config));
//! ```

pub mod error;
pub mod growth;
pub mod grouping;
pub mod ingestion;
pub mod leader;
pub mod popularity;
pub mod report;
pub mod revenue;
pub mod schema;
pub mod utils;
pub mod validator;

pub use error::{Result, SalesAnalyticsError};
pub use growth::{classify_growth, growth_by_item};
pub use ingestion::{parse_csv, read_csv};
pub use leader::revenue_leader_by_month;
pub use popularity::popularity_by_month;
pub use report::{render_report, write_report};
pub use revenue::{monthly_revenue, total_revenue};
pub use schema::*;
pub use validator::{validate_records, RecordValidator};

use log::{debug, info};

pub struct SalesAnalyticsProcessor;

impl SalesAnalyticsProcessor {
    pub fn process(records: &[RawRecord], config: &AnalyticsConfig) -> Result<AnalyticsReport> {
        config.validate()?;

        info!("Processing {} sales records", records.len());

        let (valid, validation_errors) = validate_records(records, config.price_tolerance);

        info!(
            "Validation complete: {} valid, {} invalid",
            valid.len(),
            validation_errors.len()
        );

        let report = Self::analyze(&valid, validation_errors);

        debug!(
            "Report covers {} months and {} items",
            report.monthly_revenue.len(),
            report.growth_by_item.len()
        );

        Ok(report)
    }

    /// Runs the four analyzers over already validated records.
    pub fn analyze(
        valid: &[ValidRecord],
        validation_errors: Vec<ValidationError>,
    ) -> AnalyticsReport {
        AnalyticsReport {
            total_revenue: total_revenue(valid),
            valid_record_count: valid.len(),
            monthly_revenue: monthly_revenue(valid),
            popularity_by_month: popularity_by_month(valid),
            revenue_leader_by_month: revenue_leader_by_month(valid),
            growth_by_item: growth_by_item(valid),
            validation_errors,
        }
    }
}

pub fn process_sales_analytics(records: &[RawRecord]) -> Result<AnalyticsReport> {
    SalesAnalyticsProcessor::process(records, &AnalyticsConfig::default())
}

pub fn process_csv(text: &str, config: &AnalyticsConfig) -> Result<AnalyticsReport> {
    let records = parse_csv(text)?;
    SalesAnalyticsProcessor::process(&records, config)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(date: &str, sku: &str, unit: &str, qty: &str, total: &str) -> RawRecord {
        RawRecord {
            date: date.to_string(),
            sku: sku.to_string(),
            unit_price: unit.to_string(),
            quantity: qty.to_string(),
            total_price: total.to_string(),
        }
    }

    #[test]
    fn test_end_to_end_processing() {
        let records = vec![
            raw("2019-01-01", "A", "10", "2", "20"),
            raw("2019-01-01", "B", "10", "5", "50"),
            raw("2019-02-01", "A", "10", "1", "10"),
        ];

        let report = process_sales_analytics(&records).unwrap();

        assert!((report.total_revenue - 80.0).abs() < 1e-9);
        assert_eq!(report.valid_record_count, 3);
        assert!(report.validation_errors.is_empty());

        assert_eq!(report.monthly_revenue.len(), 2);
        assert!((report.monthly_revenue["2019-01"] - 70.0).abs() < 1e-9);
        assert!((report.monthly_revenue["2019-02"] - 10.0).abs() < 1e-9);

        let popular = &report.popularity_by_month["2019-01"];
        assert_eq!(popular.item, "B");
        assert_eq!(popular.total_quantity, 5);

        let leader = &report.revenue_leader_by_month["2019-01"];
        assert_eq!(leader.item, "B");
        assert!((leader.revenue - 50.0).abs() < 1e-9);

        let a_growth = report.growth_by_item["A"]["2019-02"].percentage().unwrap();
        assert!((a_growth + 50.0).abs() < 1e-9);

        // B sold 50 in January and nothing in February: a real -100% drop
        let b_growth = report.growth_by_item["B"]["2019-02"].percentage().unwrap();
        assert!((b_growth + 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_invalid_rows_are_excluded_not_fatal() {
        let records = vec![
            raw("2019-01-01", "A", "10", "2", "20"),
            raw("2019-01-01", "B", "10", "0", "50"),
            raw("2019-13-01", "C", "10", "1", "10"),
        ];

        let report = process_sales_analytics(&records).unwrap();

        assert_eq!(report.valid_record_count, 1);
        assert_eq!(report.validation_errors.len(), 2);
        assert_eq!(
            report.valid_record_count + report.validation_errors.len(),
            records.len()
        );
        assert!((report.total_revenue - 20.0).abs() < 1e-9);
        assert!(!report.growth_by_item.contains_key("B"));
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let config = AnalyticsConfig {
            price_tolerance: f64::NAN,
            ..AnalyticsConfig::default()
        };

        let result = SalesAnalyticsProcessor::process(&[], &config);
        assert!(matches!(result, Err(SalesAnalyticsError::InvalidTolerance(_))));
    }

    #[test]
    fn test_empty_input() {
        let report = process_sales_analytics(&[]).unwrap();

        assert_eq!(report.total_revenue, 0.0);
        assert!(report.monthly_revenue.is_empty());
        assert!(report.popularity_by_month.is_empty());
        assert!(report.growth_by_item.is_empty());
    }
}
