use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize, Serializer};

/// Uniform response envelope: `{ success, error?, data? }`.
#[derive(Debug, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            error: None,
            data: Some(data),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            success: false,
            error: Some(message.into()),
            data: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DateRange {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

/// Writes whole-number percentages as JSON integers (`55`, not `55.0`).
fn serialize_percentage<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    if value.fract() == 0.0 && (0.0..=u64::MAX as f64).contains(value) {
        serializer.serialize_u64(*value as u64)
    } else {
        serializer.serialize_f64(*value)
    }
}

/// A named count with its share of the sibling total.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatBucket {
    pub name: String,
    pub count: u64,
    #[serde(serialize_with = "serialize_percentage")]
    pub percentage: f64,
}

impl StatBucket {
    pub fn new(name: impl Into<String>, count: u64) -> Self {
        Self {
            name: name.into(),
            count,
            percentage: 0.0,
        }
    }
}

// ---- requests ----

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStatsRequest {
    pub start_date: String,
    pub end_date: String,
}

#[derive(Debug, Deserialize)]
pub struct CategoryDetailsRequest {
    pub category: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BranchReportRequest {
    pub branches: Vec<String>,
    pub start_date: String,
    pub end_date: String,
}

#[derive(Debug, Deserialize)]
pub struct ConversationReportRequest {
    pub date: String,
    pub category: Option<String>,
    pub subcategory: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct DailyReportRequest {
    pub date: String,
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentQuery {
    pub tenant_id: Option<String>,
    pub document_key: Option<String>,
}

/// Optional category/subcategory narrowing for conversation lists.
/// Empty strings count as "no filter".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConversationFilter {
    pub category: Option<String>,
    pub subcategory: Option<String>,
}

impl ConversationFilter {
    pub fn new(category: Option<String>, subcategory: Option<String>) -> Self {
        let non_empty = |value: Option<String>| value.filter(|v| !v.trim().is_empty());
        Self {
            category: non_empty(category),
            subcategory: non_empty(subcategory),
        }
    }
}

// ---- dashboard ----

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSnapshot {
    pub total_conversations: u64,
    pub top_subjects: Vec<StatBucket>,
    pub top_branches: Vec<StatBucket>,
    pub date_range: DateRange,
    pub last_updated: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DayCount {
    pub date: NaiveDate,
    pub count: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryDetails {
    pub sub_categories: Vec<StatBucket>,
    pub time_distribution: Vec<DayCount>,
}

// ---- branch report ----

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BranchPoint {
    pub date: NaiveDate,
    pub count: u64,
    pub branch: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BranchReport {
    pub branches: Vec<String>,
    pub total_count: u64,
    pub average_per_day: u64,
    pub trend: Vec<BranchPoint>,
    pub date_range: DateRange,
}

// ---- conversation report ----

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConversationStatus {
    Contained,
    NotContained,
    Escalated,
}

impl ConversationStatus {
    pub const ALL: [ConversationStatus; 3] = [
        ConversationStatus::Contained,
        ConversationStatus::NotContained,
        ConversationStatus::Escalated,
    ];
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConversationRecord {
    pub id: String,
    pub timestamp: DateTime<Utc>,
    pub status: ConversationStatus,
    pub category: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subcategory: Option<String>,
    /// Seconds.
    pub duration: u32,
    pub user_messages: u32,
    pub bot_messages: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryOption {
    pub name: String,
    pub subcategories: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConversationReport {
    pub date: NaiveDate,
    pub conversations: Vec<ConversationRecord>,
    pub categories: Vec<CategoryOption>,
}

// ---- daily report ----

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HourCount {
    pub hour: u8,
    pub count: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryMetric {
    pub name: String,
    pub count: u64,
    #[serde(serialize_with = "serialize_percentage")]
    pub percentage: f64,
    pub avg_resolution_time: u32,
    pub satisfaction: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PerformanceMetrics {
    pub avg_response_time: u32,
    pub avg_resolution_time: u32,
    pub avg_messages_per_conversation: u32,
    pub peak_hour_load: u64,
    pub satisfaction_score: f64,
    pub first_contact_resolution_rate: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserEngagement {
    pub returning_users: u64,
    pub avg_user_engagement_time: u32,
    pub multiple_queries_users: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyReport {
    pub date: NaiveDate,
    pub total_conversations: u64,
    pub contained_by_bot: u64,
    pub not_contained_by_bot: u64,
    pub escalated_to_agent: u64,
    pub hourly_distribution: Vec<HourCount>,
    pub categories: Vec<CategoryMetric>,
    pub performance: PerformanceMetrics,
    pub user_engagement: UserEngagement,
}

// ---- misc ----

#[derive(Debug, Serialize, Deserialize)]
pub struct LoginResponse {
    pub message: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub source: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct UiConfigResponse {
    pub title: String,
    pub subtitle: String,
}
