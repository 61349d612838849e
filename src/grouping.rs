use std::collections::{BTreeMap, HashMap};

/// Per-month accumulators keyed by item, remembering the order in which each
/// item first appeared within its month.
///
/// Months iterate in lexicographic (= chronological for "YYYY-MM") order.
/// Items within a month iterate in first-encounter order, which is what the
/// winner selection relies on to resolve ties.
#[derive(Debug)]
pub struct MonthItemGroups<T> {
    months: BTreeMap<String, Vec<(String, T)>>,
    index: HashMap<(String, String), usize>,
}

impl<T> Default for MonthItemGroups<T> {
    fn default() -> Self {
        Self {
            months: BTreeMap::new(),
            index: HashMap::new(),
        }
    }
}

impl<T> MonthItemGroups<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the accumulator for `(month, item)`, creating it with `init`
    /// on first sight.
    pub fn entry(&mut self, month: &str, item: &str, init: impl FnOnce() -> T) -> &mut T {
        let items = self.months.entry(month.to_string()).or_default();
        let key = (month.to_string(), item.to_string());

        let idx = *self.index.entry(key).or_insert_with(|| {
            items.push((item.to_string(), init()));
            items.len() - 1
        });

        &mut items[idx].1
    }

    pub fn months(&self) -> impl Iterator<Item = (&String, &[(String, T)])> {
        self.months.iter().map(|(month, items)| (month, items.as_slice()))
    }
}

/// Picks the item with the strictly greatest score. On a tie the item seen
/// first keeps the lead. Returns `None` only for an empty slice.
pub fn first_max_by<T, K, F>(items: &[(String, T)], mut score: F) -> Option<&(String, T)>
where
    K: PartialOrd,
    F: FnMut(&T) -> K,
{
    let mut iter = items.iter();
    let mut best = iter.next()?;
    let mut best_score = score(&best.1);

    for candidate in iter {
        let candidate_score = score(&candidate.1);
        if candidate_score > best_score {
            best = candidate;
            best_score = candidate_score;
        }
    }

    Some(best)
}
