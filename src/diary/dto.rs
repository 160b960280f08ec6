use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use uuid::Uuid;

use crate::diary::repo_types::DiaryEntry;

/// Request body for creating an entry.
#[derive(Debug, Deserialize)]
pub struct CreateEntryRequest {
    pub subject: String,
    pub date: String,
    pub time: String,
    pub content: String,
    pub theme: String, // client-side set (pink, white); not validated here
}

/// Entry as returned to the client.
#[derive(Debug, Serialize)]
pub struct EntryResponse {
    pub id: Uuid,
    pub user_id: Uuid,
    pub subject: String,
    pub date: String,
    pub time: String,
    pub content: String,
    pub theme: String,
    pub created_at: OffsetDateTime,
}

impl From<DiaryEntry> for EntryResponse {
    fn from(e: DiaryEntry) -> Self {
        Self {
            id: e.id,
            user_id: e.user_id,
            subject: e.subject,
            date: e.entry_date,
            time: e.entry_time,
            content: e.content,
            theme: e.theme,
            created_at: e.created_at,
        }
    }
}

/// Generic acknowledgement body.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub msg: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entry_response_serialization() {
        let response = EntryResponse {
            id: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
            subject: "Day1".into(),
            date: "2026-02-14".into(),
            time: "20:00".into(),
            content: "wrote a little".into(),
            theme: "pink".into(),
            created_at: OffsetDateTime::now_utc(),
        };
        let json = serde_json::to_string(&response).unwrap();
        assert!(json.contains(r#""subject":"Day1""#));
        assert!(json.contains(r#""date":"2026-02-14""#));
        assert!(json.contains(r#""time":"20:00""#));
    }
}
