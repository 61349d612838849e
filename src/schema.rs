use crate::error::{Result, SalesAnalyticsError};
use chrono::NaiveDate;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use thiserror::Error;

pub const DATE_COLUMN: &str = "Date";
pub const SKU_COLUMN: &str = "SKU";
pub const UNIT_PRICE_COLUMN: &str = "Unit Price";
pub const QUANTITY_COLUMN: &str = "Quantity";
pub const TOTAL_PRICE_COLUMN: &str = "Total Price";

/// Columns every input row must expose, in their canonical order.
pub const REQUIRED_COLUMNS: [&str; 5] = [
    DATE_COLUMN,
    SKU_COLUMN,
    UNIT_PRICE_COLUMN,
    QUANTITY_COLUMN,
    TOTAL_PRICE_COLUMN,
];

pub const DEFAULT_PRICE_TOLERANCE: f64 = 0.01;

/// One input row exactly as read, every field still a string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct RawRecord {
    #[serde(rename = "Date")]
    pub date: String,
    #[serde(rename = "SKU")]
    pub sku: String,
    #[serde(rename = "Unit Price")]
    pub unit_price: String,
    #[serde(rename = "Quantity")]
    pub quantity: String,
    #[serde(rename = "Total Price")]
    pub total_price: String,
}

impl RawRecord {
    /// Builds a record from an open column-name mapping.
    /// Fails fast when any required column is absent.
    pub fn from_map(fields: &HashMap<String, String>) -> Result<Self> {
        let take = |column: &str| {
            fields
                .get(column)
                .cloned()
                .ok_or_else(|| SalesAnalyticsError::MissingColumn(column.to_string()))
        };

        Ok(Self {
            date: take(DATE_COLUMN)?,
            sku: take(SKU_COLUMN)?,
            unit_price: take(UNIT_PRICE_COLUMN)?,
            quantity: take(QUANTITY_COLUMN)?,
            total_price: take(TOTAL_PRICE_COLUMN)?,
        })
    }
}

/// A row that passed every check, with its numeric fields parsed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ValidRecord {
    pub date: NaiveDate,
    pub sku: String,
    pub unit_price: f64,
    pub quantity: u32,
    pub total_price: f64,
    /// "YYYY-MM", the monthly grouping key
    pub year_month: String,
}

impl ValidRecord {
    pub fn new(
        date: NaiveDate,
        sku: impl Into<String>,
        unit_price: f64,
        quantity: u32,
        total_price: f64,
    ) -> Self {
        Self {
            date,
            sku: sku.into(),
            unit_price,
            quantity,
            total_price,
            year_month: date.format("%Y-%m").to_string(),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(tag = "kind", rename_all = "PascalCase")]
pub enum ValidationIssue {
    #[error("Malformed date '{value}': expected a real calendar date as YYYY-MM-DD")]
    MalformedDate { value: String },

    #[error("Unit Price '{value}' is negative or not a number")]
    InvalidUnitPrice { value: String },

    #[error("Quantity '{value}' is below 1 or not an integer")]
    InvalidQuantity { value: String },

    #[error("Total Price '{value}' is negative or not a number")]
    InvalidTotalPrice { value: String },

    #[error("Price mismatch: {unit_price} * {quantity} = {expected}, but got {actual}")]
    PriceMismatch {
        unit_price: f64,
        quantity: i64,
        expected: f64,
        actual: f64,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ValidationError {
    #[schemars(description = "1-based source row, counting the header as row 1")]
    pub row: usize,
    pub record: RawRecord,
    pub issues: Vec<ValidationIssue>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct PopularityResult {
    pub item: String,
    pub total_quantity: u64,
    #[schemars(description = "Smallest quantity on a single order of the item in the month")]
    pub min_quantity: u32,
    #[schemars(description = "Largest quantity on a single order of the item in the month")]
    pub max_quantity: u32,
    pub avg_quantity: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct RevenueLeaderResult {
    pub item: String,
    pub revenue: f64,
}

/// Month-over-month revenue change for one item.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(tag = "status", content = "value")]
pub enum GrowthEntry {
    #[schemars(description = "No revenue in either the month or the month before it")]
    NoData,

    #[schemars(description = "No revenue in the previous month but positive revenue in this one")]
    NewItem,

    #[schemars(description = "Signed percentage change: (current - previous) / previous * 100")]
    Percentage(f64),
}

impl GrowthEntry {
    pub fn percentage(&self) -> Option<f64> {
        match self {
            GrowthEntry::Percentage(value) => Some(*value),
            _ => None,
        }
    }
}

pub type MonthlyRevenue = BTreeMap<String, f64>;
pub type PopularityByMonth = BTreeMap<String, PopularityResult>;
pub type RevenueLeaderByMonth = BTreeMap<String, RevenueLeaderResult>;
pub type GrowthByItem = BTreeMap<String, BTreeMap<String, GrowthEntry>>;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[serde(default)]
pub struct AnalyticsConfig {
    #[schemars(
        description = "Largest absolute difference allowed between Unit Price * Quantity and Total Price before a row is flagged"
    )]
    pub price_tolerance: f64,

    #[schemars(description = "Symbol prefixed to monetary values in the rendered report")]
    pub currency_symbol: String,
}

impl Default for AnalyticsConfig {
    fn default() -> Self {
        Self {
            price_tolerance: DEFAULT_PRICE_TOLERANCE,
            currency_symbol: "₹".to_string(),
        }
    }
}

impl AnalyticsConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if !self.price_tolerance.is_finite() || self.price_tolerance < 0.0 {
            return Err(SalesAnalyticsError::InvalidTolerance(self.price_tolerance));
        }
        Ok(())
    }
}

/// Everything the pipeline derives from one batch of records.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct AnalyticsReport {
    pub total_revenue: f64,
    pub valid_record_count: usize,
    pub monthly_revenue: MonthlyRevenue,
    pub popularity_by_month: PopularityByMonth,
    pub revenue_leader_by_month: RevenueLeaderByMonth,
    pub growth_by_item: GrowthByItem,
    pub validation_errors: Vec<ValidationError>,
}

impl AnalyticsReport {
    /// Months present in the valid records, oldest first.
    pub fn sorted_months(&self) -> Vec<&str> {
        self.monthly_revenue.keys().map(String::as_str).collect()
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

pub fn report_json_schema() -> Result<String> {
    let schema = schemars::schema_for!(AnalyticsReport);
    Ok(serde_json::to_string_pretty(&schema)?)
}
