use crate::grouping::{first_max_by, MonthItemGroups};
use crate::schema::{RevenueLeaderByMonth, RevenueLeaderResult, ValidRecord};

/// Highest-revenue item per month. Uses the same first-encountered tie-break
/// as the popularity ranking.
pub fn revenue_leader_by_month(records: &[ValidRecord]) -> RevenueLeaderByMonth {
    let mut groups: MonthItemGroups<f64> = MonthItemGroups::new();

    for record in records {
        *groups.entry(&record.year_month, &record.sku, || 0.0) += record.total_price;
    }

    groups
        .months()
        .filter_map(|(month, items)| {
            let (item, revenue) = first_max_by(items, |revenue| *revenue)?;
            Some((
                month.clone(),
                RevenueLeaderResult {
                    item: item.clone(),
                    revenue: *revenue,
                },
            ))
        })
        .collect()
}
