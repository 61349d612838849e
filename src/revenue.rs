use crate::schema::{MonthlyRevenue, ValidRecord};

pub fn total_revenue(records: &[ValidRecord]) -> f64 {
    records.iter().fold(0.0, |sum, r| sum + r.total_price)
}

pub fn monthly_revenue(records: &[ValidRecord]) -> MonthlyRevenue {
    let mut monthly = MonthlyRevenue::new();

    for record in records {
        *monthly.entry(record.year_month.clone()).or_insert(0.0) += record.total_price;
    }

    monthly
}
