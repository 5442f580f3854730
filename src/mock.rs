//! Synthetic report data.
//!
//! Each generator is a pure function of its inputs and the RNG handed in, so
//! tests seed a `StdRng` and check the shape invariants directly.

use crate::models::{
    BranchPoint, BranchReport, CategoryDetails, CategoryMetric, ConversationFilter,
    ConversationRecord, ConversationReport, ConversationStatus, DailyReport, DashboardSnapshot,
    DateRange, DayCount, HourCount, PerformanceMetrics, StatBucket, UserEngagement,
};
use crate::source::{ReportSource, SourceError};
use crate::stats::{self, Precision};
use crate::taxonomy::{self, CATEGORIES};
use async_trait::async_trait;
use chrono::{DateTime, Datelike, Duration, NaiveDate, NaiveTime, TimeZone, Utc, Weekday};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::{Mutex, PoisonError};

const SUBJECTS: &[(&str, u64, u64)] = &[
    ("Technical Support", 200, 300),
    ("Billing Inquiries", 150, 200),
    ("Product Questions", 100, 150),
];

const BRANCHES: &[(&str, u64, u64)] = &[
    ("Main Street Branch", 150, 250),
    ("Downtown Branch", 100, 200),
    ("West Side Branch", 100, 150),
    ("East End Branch", 100, 150),
];

const SUBCATEGORY_SPREAD: &[(&str, u64, u64)] = &[
    ("Type A", 50, 100),
    ("Type B", 40, 80),
    ("Type C", 30, 60),
    ("Type D", 20, 40),
    ("Type E", 10, 20),
];

const WEEKEND_FACTOR: f64 = 0.7;

/// `base + [0, spread)`
fn count_from<R: Rng + ?Sized>(rng: &mut R, base: u64, spread: u64) -> u64 {
    base + rng.gen_range(0..spread)
}

/// `floor(r * upper)` for `r` in `[0, 1)`.
fn fraction_of<R: Rng + ?Sized>(rng: &mut R, upper: f64) -> u64 {
    (rng.r#gen::<f64>() * upper).floor() as u64
}

pub fn generate_dashboard<R: Rng + ?Sized>(
    rng: &mut R,
    range: DateRange,
    now: DateTime<Utc>,
) -> DashboardSnapshot {
    let total_conversations = count_from(rng, 500, 1000);

    let mut top_subjects: Vec<StatBucket> = SUBJECTS
        .iter()
        .map(|(name, base, spread)| StatBucket::new(*name, count_from(rng, *base, *spread)))
        .collect();
    let mut top_branches: Vec<StatBucket> = BRANCHES
        .iter()
        .map(|(name, base, spread)| StatBucket::new(*name, count_from(rng, *base, *spread)))
        .collect();

    stats::apply_percentages(&mut top_subjects, Precision::Whole);
    stats::apply_percentages(&mut top_branches, Precision::Whole);

    DashboardSnapshot {
        total_conversations,
        top_subjects,
        top_branches,
        date_range: range,
        last_updated: now,
    }
}

pub fn generate_category_details<R: Rng + ?Sized>(
    rng: &mut R,
    category: &str,
    today: NaiveDate,
) -> CategoryDetails {
    let mut sub_categories: Vec<StatBucket> = SUBCATEGORY_SPREAD
        .iter()
        .map(|(suffix, base, spread)| {
            StatBucket::new(format!("{category} - {suffix}"), count_from(rng, *base, *spread))
        })
        .collect();
    stats::apply_percentages(&mut sub_categories, Precision::OneDecimal);

    let time_distribution = (0..7)
        .rev()
        .map(|offset| DayCount {
            date: today - Duration::days(offset),
            count: count_from(rng, 10, 50),
        })
        .collect();

    CategoryDetails {
        sub_categories,
        time_distribution,
    }
}

fn branch_base(branch: &str) -> f64 {
    let lower = branch.to_lowercase();
    if lower.contains("main") {
        50.0
    } else if lower.contains("downtown") {
        40.0
    } else {
        30.0
    }
}

pub fn generate_branch_report<R: Rng + ?Sized>(
    rng: &mut R,
    branches: &[String],
    range: DateRange,
) -> BranchReport {
    let days = stats::days_in_range(&range);
    let mut trend = Vec::with_capacity(days as usize * branches.len());
    let mut total_count = 0u64;

    for date in stats::dates_in_range(&range) {
        let factor = match date.weekday() {
            Weekday::Sat | Weekday::Sun => WEEKEND_FACTOR,
            _ => 1.0,
        };
        for branch in branches {
            let noise = rng.r#gen::<f64>() * 20.0 - 10.0;
            let count = ((branch_base(branch) + noise) * factor).round().max(0.0) as u64;
            total_count += count;
            trend.push(BranchPoint {
                date,
                count,
                branch: branch.clone(),
            });
        }
    }

    BranchReport {
        branches: branches.to_vec(),
        total_count,
        average_per_day: stats::average_per_day(total_count, days, branches.len()),
        trend,
        date_range: range,
    }
}

pub fn generate_conversations<R: Rng + ?Sized>(
    rng: &mut R,
    date: NaiveDate,
    filter: &ConversationFilter,
) -> ConversationReport {
    let midnight = Utc.from_utc_datetime(&date.and_time(NaiveTime::MIN));
    let len = rng.gen_range(5..20);

    let records = (0..len)
        .map(|index| {
            let minutes: i64 = rng.gen_range(0..24) * 60 + rng.gen_range(0..60);
            let status = ConversationStatus::ALL[rng.gen_range(0..ConversationStatus::ALL.len())];
            let (category, subs) = CATEGORIES[rng.gen_range(0..CATEGORIES.len())];
            let subcategory = subs[rng.gen_range(0..subs.len())];

            ConversationRecord {
                id: format!("conv-{date}-{index}"),
                timestamp: midnight + Duration::minutes(minutes),
                status,
                category: category.to_string(),
                subcategory: Some(subcategory.to_string()),
                duration: rng.gen_range(300..2100),
                user_messages: rng.gen_range(2..12),
                bot_messages: rng.gen_range(3..18),
            }
        })
        .collect();

    let mut conversations = stats::filter_conversations(records, filter);
    stats::sort_by_timestamp(&mut conversations);

    ConversationReport {
        date,
        conversations,
        categories: taxonomy::options(),
    }
}

pub fn generate_daily_report<R: Rng + ?Sized>(rng: &mut R, date: NaiveDate) -> DailyReport {
    let total = count_from(rng, 200, 500);
    let total_f = total as f64;
    let contained_by_bot = fraction_of(rng, total_f * 0.8);
    let not_contained_by_bot = fraction_of(rng, (total - contained_by_bot) as f64);
    let escalated_to_agent = stats::split_remainder(total, contained_by_bot, not_contained_by_bot);

    let hourly_distribution: Vec<HourCount> = (0..24u8)
        .map(|hour| HourCount {
            hour,
            count: fraction_of(rng, total_f / 8.0),
        })
        .collect();

    let mut buckets: Vec<StatBucket> = taxonomy::category_names()
        .map(|name| StatBucket::new(name, fraction_of(rng, total_f / 3.0)))
        .collect();
    stats::apply_percentages(&mut buckets, Precision::OneDecimal);
    let categories = buckets
        .into_iter()
        .map(|bucket| CategoryMetric {
            name: bucket.name,
            count: bucket.count,
            percentage: bucket.percentage,
            avg_resolution_time: rng.gen_range(300..900),
            satisfaction: rng.gen_range(3.0..5.0),
        })
        .collect();

    let performance = PerformanceMetrics {
        avg_response_time: rng.gen_range(15..45),
        avg_resolution_time: rng.gen_range(300..900),
        avg_messages_per_conversation: rng.gen_range(4..10),
        peak_hour_load: stats::peak(hourly_distribution.iter().map(|h| h.count)),
        satisfaction_score: rng.gen_range(4.0..5.0),
        first_contact_resolution_rate: rng.gen_range(0.6..0.9),
    };

    let returning_share: f64 = rng.gen_range(0.2..0.5);
    let avg_user_engagement_time = rng.gen_range(300..900);
    let multi_query_share: f64 = rng.gen_range(0.1..0.3);
    let user_engagement = UserEngagement {
        returning_users: (total_f * returning_share).floor() as u64,
        avg_user_engagement_time,
        multiple_queries_users: (total_f * multi_query_share).floor() as u64,
    };

    DailyReport {
        date,
        total_conversations: total,
        contained_by_bot,
        not_contained_by_bot,
        escalated_to_agent,
        hourly_distribution,
        categories,
        performance,
        user_engagement,
    }
}

/// [`ReportSource`] backed by the random generators above.
pub struct MockReportSource {
    rng: Mutex<StdRng>,
}

impl MockReportSource {
    pub fn new() -> Self {
        Self {
            rng: Mutex::new(StdRng::from_entropy()),
        }
    }

    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }

    fn with_rng<T>(&self, f: impl FnOnce(&mut StdRng) -> T) -> T {
        let mut rng = self.rng.lock().unwrap_or_else(PoisonError::into_inner);
        f(&mut rng)
    }
}

impl Default for MockReportSource {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ReportSource for MockReportSource {
    async fn dashboard_stats(&self, range: &DateRange) -> Result<DashboardSnapshot, SourceError> {
        Ok(self.with_rng(|rng| generate_dashboard(rng, *range, Utc::now())))
    }

    async fn category_details(&self, category: &str) -> Result<CategoryDetails, SourceError> {
        let today = Utc::now().date_naive();
        Ok(self.with_rng(|rng| generate_category_details(rng, category, today)))
    }

    async fn branch_report(
        &self,
        branches: &[String],
        range: &DateRange,
    ) -> Result<BranchReport, SourceError> {
        Ok(self.with_rng(|rng| generate_branch_report(rng, branches, *range)))
    }

    async fn conversation_report(
        &self,
        date: NaiveDate,
        filter: &ConversationFilter,
    ) -> Result<ConversationReport, SourceError> {
        Ok(self.with_rng(|rng| generate_conversations(rng, date, filter)))
    }

    async fn daily_report(&self, date: NaiveDate) -> Result<DailyReport, SourceError> {
        Ok(self.with_rng(|rng| generate_daily_report(rng, date)))
    }

    fn name(&self) -> &str {
        "mock"
    }
}
