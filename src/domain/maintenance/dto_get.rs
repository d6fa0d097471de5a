use chrono::{DateTime, Utc};

#[derive(Debug, Clone, Default)]
pub struct GetServiceRecordDto {
    /// Case-insensitive substring search over title and notes.
    pub search: Option<String>,
    /// Inclusive bounds.
    pub date_from: Option<DateTime<Utc>>,
    pub date_to: Option<DateTime<Utc>>,
    pub sort_by: Option<String>,
    pub sort_descending: bool,
    pub page: Option<u64>,
    pub page_size: Option<u64>,
}
