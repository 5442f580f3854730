use crate::models::{ConversationFilter, ConversationRecord, DateRange, StatBucket};
use chrono::{Duration, NaiveDate};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Precision {
    Whole,
    OneDecimal,
}

pub fn percentage(count: u64, total: u64, precision: Precision) -> f64 {
    if total == 0 {
        return 0.0;
    }
    let raw = count as f64 / total as f64 * 100.0;
    match precision {
        Precision::Whole => raw.round(),
        Precision::OneDecimal => (raw * 10.0).round() / 10.0,
    }
}

/// Recomputes every bucket's share against the sum of all sibling counts.
pub fn apply_percentages(buckets: &mut [StatBucket], precision: Precision) {
    let total: u64 = buckets.iter().map(|bucket| bucket.count).sum();
    for bucket in buckets.iter_mut() {
        bucket.percentage = percentage(bucket.count, total, precision);
    }
}

/// Third bucket of a three-way split, so the parts always add up to `total`.
pub fn split_remainder(total: u64, first: u64, second: u64) -> u64 {
    total.saturating_sub(first).saturating_sub(second)
}

pub fn peak<I>(counts: I) -> u64
where
    I: IntoIterator<Item = u64>,
{
    counts.into_iter().max().unwrap_or(0)
}

/// Whole days in `[start, end)`.
pub fn days_in_range(range: &DateRange) -> u64 {
    (range.end_date - range.start_date).num_days().max(0) as u64
}

pub fn dates_in_range(range: &DateRange) -> impl Iterator<Item = NaiveDate> {
    let start = range.start_date;
    (0..days_in_range(range)).map(move |offset| start + Duration::days(offset as i64))
}

pub fn average_per_day(total: u64, days: u64, branch_count: usize) -> u64 {
    let divisor = days.saturating_mul(branch_count as u64);
    if divisor == 0 {
        return 0;
    }
    (total as f64 / divisor as f64).round() as u64
}

/// The subcategory only narrows the list when a category is also given.
pub fn filter_conversations(
    records: Vec<ConversationRecord>,
    filter: &ConversationFilter,
) -> Vec<ConversationRecord> {
    let Some(category) = filter.category.as_deref() else {
        return records;
    };
    records
        .into_iter()
        .filter(|record| record.category == category)
        .filter(|record| match filter.subcategory.as_deref() {
            Some(sub) => record.subcategory.as_deref() == Some(sub),
            None => true,
        })
        .collect()
}

pub fn sort_by_timestamp(records: &mut [ConversationRecord]) {
    records.sort_by_key(|record| record.timestamp);
}
