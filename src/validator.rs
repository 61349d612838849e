use crate::schema::{
    RawRecord, ValidRecord, ValidationError, ValidationIssue, DEFAULT_PRICE_TOLERANCE,
};
use crate::utils::{parse_amount, parse_iso_date, parse_quantity};
use log::warn;

/// Checks individual rows for structural and arithmetic consistency.
///
/// Every check runs independently, so a row that breaks several rules reports
/// all of them. Source values are never corrected.
pub struct RecordValidator {
    tolerance: f64,
}

impl Default for RecordValidator {
    fn default() -> Self {
        Self::new(DEFAULT_PRICE_TOLERANCE)
    }
}

impl RecordValidator {
    pub fn new(tolerance: f64) -> Self {
        Self { tolerance }
    }

    pub fn validate(
        &self,
        record: &RawRecord,
        row: usize,
    ) -> std::result::Result<ValidRecord, ValidationError> {
        let mut issues = Vec::new();

        let date = parse_iso_date(&record.date);
        if date.is_none() {
            issues.push(ValidationIssue::MalformedDate {
                value: record.date.clone(),
            });
        }

        let unit_price = parse_amount(&record.unit_price);
        if !unit_price.is_some_and(|v| v >= 0.0) {
            issues.push(ValidationIssue::InvalidUnitPrice {
                value: record.unit_price.clone(),
            });
        }

        let quantity = parse_quantity(&record.quantity);
        if !quantity.is_some_and(|q| q >= 1 && q <= i64::from(u32::MAX)) {
            issues.push(ValidationIssue::InvalidQuantity {
                value: record.quantity.clone(),
            });
        }

        let total_price = parse_amount(&record.total_price);
        if !total_price.is_some_and(|v| v >= 0.0) {
            issues.push(ValidationIssue::InvalidTotalPrice {
                value: record.total_price.clone(),
            });
        }

        // Consistency is checked whenever all three numbers parsed, even if
        // one of them is out of range.
        if let (Some(unit_price), Some(quantity), Some(actual)) = (unit_price, quantity, total_price)
        {
            let expected = unit_price * quantity as f64;
            if (expected - actual).abs() > self.tolerance {
                issues.push(ValidationIssue::PriceMismatch {
                    unit_price,
                    quantity,
                    expected,
                    actual,
                });
            }
        }

        match (date, unit_price, quantity, total_price) {
            (Some(date), Some(unit_price), Some(quantity), Some(total_price))
                if issues.is_empty() =>
            {
                Ok(ValidRecord::new(
                    date,
                    record.sku.clone(),
                    unit_price,
                    quantity as u32,
                    total_price,
                ))
            }
            _ => Err(ValidationError {
                row,
                record: record.clone(),
                issues,
            }),
        }
    }

    /// Partitions records into valid rows and validation errors, preserving
    /// input order in both. Row ordinals count the header as row 1.
    pub fn partition(&self, records: &[RawRecord]) -> (Vec<ValidRecord>, Vec<ValidationError>) {
        let mut valid = Vec::with_capacity(records.len());
        let mut errors = Vec::new();

        for (idx, record) in records.iter().enumerate() {
            match self.validate(record, idx + 2) {
                Ok(valid_record) => valid.push(valid_record),
                Err(error) => {
                    warn!(
                        "Row {} rejected with {} issue(s)",
                        error.row,
                        error.issues.len()
                    );
                    errors.push(error);
                }
            }
        }

        (valid, errors)
    }
}

pub fn validate_records(
    records: &[RawRecord],
    tolerance: f64,
) -> (Vec<ValidRecord>, Vec<ValidationError>) {
    RecordValidator::new(tolerance).partition(records)
}
