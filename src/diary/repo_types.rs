use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use time::OffsetDateTime;
use uuid::Uuid;

/// Diary entry record in the database.
///
/// `user_id` is a plain column with no foreign key behind it; entries are
/// scoped to their owner at query time and may outlive the user row.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DiaryEntry {
    pub id: Uuid,
    pub user_id: Uuid,
    pub subject: String,
    pub entry_date: String, // opaque client string, no calendar validation
    pub entry_time: String,
    pub content: String,
    pub theme: String,
    pub created_at: OffsetDateTime,
}
