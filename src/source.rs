//! Where report data comes from.
//!
//! Handlers only see [`ReportSource`]; the synthetic generators in
//! [`crate::mock`] are one implementation, and a store-backed one can be
//! swapped in through [`crate::AppState`] without touching the routes.

use crate::models::{
    BranchReport, CategoryDetails, ConversationFilter, ConversationReport, DailyReport,
    DashboardSnapshot, DateRange,
};
use async_trait::async_trait;
use chrono::NaiveDate;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SourceError {
    #[error("report source unavailable: {0}")]
    Unavailable(String),

    #[error("report source failed: {0}")]
    Other(String),
}

#[async_trait]
pub trait ReportSource: Send + Sync {
    /// Headline totals plus top subjects and branches for a date range.
    async fn dashboard_stats(&self, range: &DateRange) -> Result<DashboardSnapshot, SourceError>;

    /// Subcategory breakdown and the last 7 days of volume for one category.
    async fn category_details(&self, category: &str) -> Result<CategoryDetails, SourceError>;

    /// One point per day in `[start, end)` for every requested branch.
    async fn branch_report(
        &self,
        branches: &[String],
        range: &DateRange,
    ) -> Result<BranchReport, SourceError>;

    async fn conversation_report(
        &self,
        date: NaiveDate,
        filter: &ConversationFilter,
    ) -> Result<ConversationReport, SourceError>;

    async fn daily_report(&self, date: NaiveDate) -> Result<DailyReport, SourceError>;

    /// Backend name for logging.
    fn name(&self) -> &str;
}
