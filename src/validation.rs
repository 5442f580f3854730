use crate::errors::AppError;
use crate::models::DateRange;
use chrono::NaiveDate;
use serde::de::DeserializeOwned;
use serde_json::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    /// Must be a non-empty array.
    List,
}

#[derive(Debug, Clone, Copy)]
pub struct Field {
    pub name: &'static str,
    pub kind: FieldKind,
}

const fn text(name: &'static str) -> Field {
    Field {
        name,
        kind: FieldKind::Text,
    }
}

const fn list(name: &'static str) -> Field {
    Field {
        name,
        kind: FieldKind::List,
    }
}

/// Required fields of one endpoint and the message returned when any is missing.
#[derive(Debug, Clone, Copy)]
pub struct RequestSchema {
    pub required: &'static [Field],
    pub message: &'static str,
}

pub const DASHBOARD_STATS: RequestSchema = RequestSchema {
    required: &[text("startDate"), text("endDate")],
    message: "Start date and end date are required",
};

pub const CATEGORY_DETAILS: RequestSchema = RequestSchema {
    required: &[text("category")],
    message: "Category is required",
};

pub const BRANCH_REPORT: RequestSchema = RequestSchema {
    required: &[list("branches"), text("startDate"), text("endDate")],
    message: "Branches, start date, and end date are required",
};

pub const CONVERSATION_REPORT: RequestSchema = RequestSchema {
    required: &[text("date")],
    message: "Date is required",
};

pub const DAILY_REPORT: RequestSchema = RequestSchema {
    required: &[text("date")],
    message: "Date is required",
};

pub const LOGIN: RequestSchema = RequestSchema {
    required: &[text("username"), text("password")],
    message: "Username and password are required",
};

impl RequestSchema {
    pub fn missing(&self, body: &Value) -> Option<&'static str> {
        self.required
            .iter()
            .find(|field| !is_present(body.get(field.name), field.kind))
            .map(|field| field.name)
    }

    pub fn check(&self, body: &Value) -> Result<(), AppError> {
        match self.missing(body) {
            Some(_) => Err(AppError::validation(self.message)),
            None => Ok(()),
        }
    }
}

fn is_present(value: Option<&Value>, kind: FieldKind) -> bool {
    match (value, kind) {
        (None | Some(Value::Null), _) => false,
        (Some(Value::String(s)), FieldKind::Text) => !s.is_empty(),
        (Some(Value::Array(items)), FieldKind::List) => !items.is_empty(),
        (Some(Value::Bool(b)), FieldKind::Text) => *b,
        (Some(_), FieldKind::Text) => true,
        (Some(_), FieldKind::List) => false,
    }
}

/// Parses a raw JSON body, checks it against `schema`, then deserializes it.
pub fn parse_body<T: DeserializeOwned>(
    bytes: &[u8],
    schema: &RequestSchema,
) -> Result<T, AppError> {
    let body: Value = serde_json::from_slice(bytes)
        .map_err(|_| AppError::validation("Request body must be valid JSON"))?;
    schema.check(&body)?;
    serde_json::from_value(body)
        .map_err(|err| AppError::validation(format!("Invalid request body: {err}")))
}

pub fn parse_date(field: &str, value: &str) -> Result<NaiveDate, AppError> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").map_err(|_| {
        AppError::validation(format!(
            "Invalid {field} \"{value}\" (expected YYYY-MM-DD)"
        ))
    })
}

pub fn parse_range(start: &str, end: &str) -> Result<DateRange, AppError> {
    let start_date = parse_date("startDate", start)?;
    let end_date = parse_date("endDate", end)?;
    if start_date > end_date {
        return Err(AppError::validation(
            "Start date must not be after end date",
        ));
    }
    Ok(DateRange {
        start_date,
        end_date,
    })
}

/// Longest span a branch report will chart, one point per day.
pub const MAX_BRANCH_RANGE_DAYS: i64 = 366;

/// [`parse_range`] plus an upper bound on `endDate - startDate` in days.
pub fn parse_bounded_range(start: &str, end: &str, max_days: i64) -> Result<DateRange, AppError> {
    let range = parse_range(start, end)?;
    if (range.end_date - range.start_date).num_days() > max_days {
        return Err(AppError::validation(format!(
            "Date range must not exceed {max_days} days"
        )));
    }
    Ok(range)
}
