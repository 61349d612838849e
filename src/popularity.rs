use crate::grouping::{first_max_by, MonthItemGroups};
use crate::schema::{PopularityByMonth, PopularityResult, ValidRecord};

#[derive(Debug, Default)]
struct QuantityStats {
    total: u64,
    per_order: Vec<u32>,
}

/// Most popular item per month by total quantity sold, with order-size
/// statistics for the winner. Ties go to the item that appeared first.
pub fn popularity_by_month(records: &[ValidRecord]) -> PopularityByMonth {
    let mut groups: MonthItemGroups<QuantityStats> = MonthItemGroups::new();

    for record in records {
        let stats = groups.entry(&record.year_month, &record.sku, QuantityStats::default);
        stats.total += u64::from(record.quantity);
        stats.per_order.push(record.quantity);
    }

    let mut results = PopularityByMonth::new();

    for (month, items) in groups.months() {
        let Some((item, stats)) = first_max_by(items, |s| s.total) else {
            continue;
        };

        let (Some(&min_quantity), Some(&max_quantity)) =
            (stats.per_order.iter().min(), stats.per_order.iter().max())
        else {
            continue;
        };
        let avg_quantity = stats.total as f64 / stats.per_order.len() as f64;

        results.insert(
            month.clone(),
            PopularityResult {
                item: item.clone(),
                total_quantity: stats.total,
                min_quantity,
                max_quantity,
                avg_quantity,
            },
        );
    }

    results
}
