use crate::schema::{GrowthByItem, GrowthEntry, ValidRecord};
use crate::utils::sort_months;
use std::collections::{BTreeMap, HashMap, HashSet};

/// Classifies one consecutive-month comparison.
pub fn classify_growth(previous: f64, current: f64) -> GrowthEntry {
    if previous == 0.0 && current == 0.0 {
        GrowthEntry::NoData
    } else if previous == 0.0 {
        GrowthEntry::NewItem
    } else {
        GrowthEntry::Percentage((current - previous) / previous * 100.0)
    }
}

/// Month-over-month revenue growth for every item, for every month after the
/// earliest one present in the data.
///
/// Months are the distinct months seen across all items, so an item absent
/// from a month contributes zero revenue to it. Only consecutive months are
/// compared.
pub fn growth_by_item(records: &[ValidRecord]) -> GrowthByItem {
    let mut item_month_revenue: HashMap<&str, HashMap<&str, f64>> = HashMap::new();
    let mut seen_months: HashSet<&String> = HashSet::new();

    for record in records {
        *item_month_revenue
            .entry(record.sku.as_str())
            .or_default()
            .entry(record.year_month.as_str())
            .or_insert(0.0) += record.total_price;
        seen_months.insert(&record.year_month);
    }

    let months = sort_months(seen_months);

    item_month_revenue
        .iter()
        .map(|(item, revenue_by_month)| {
            let revenue_in = |month: &str| revenue_by_month.get(month).copied().unwrap_or(0.0);

            let entries: BTreeMap<String, GrowthEntry> = months
                .windows(2)
                .map(|pair| {
                    let previous = revenue_in(pair[0].as_str());
                    let current = revenue_in(pair[1].as_str());
                    (pair[1].clone(), classify_growth(previous, current))
                })
                .collect();

            (item.to_string(), entries)
        })
        .collect()
}
