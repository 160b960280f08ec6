use crate::diary::repo_types::DiaryEntry;
use sqlx::PgPool;
use uuid::Uuid;

impl DiaryEntry {
    pub async fn create(
        db: &PgPool,
        user_id: Uuid,
        subject: &str,
        entry_date: &str,
        entry_time: &str,
        content: &str,
        theme: &str,
    ) -> anyhow::Result<DiaryEntry> {
        let entry = sqlx::query_as::<_, DiaryEntry>(
            r#"
            INSERT INTO diary_entries (user_id, subject, entry_date, entry_time, content, theme)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id, user_id, subject, entry_date, entry_time, content, theme, created_at
            "#,
        )
        .bind(user_id)
        .bind(subject)
        .bind(entry_date)
        .bind(entry_time)
        .bind(content)
        .bind(theme)
        .fetch_one(db)
        .await?;
        Ok(entry)
    }

    pub async fn list_by_user(db: &PgPool, user_id: Uuid) -> anyhow::Result<Vec<DiaryEntry>> {
        let rows = sqlx::query_as::<_, DiaryEntry>(
            r#"
            SELECT id, user_id, subject, entry_date, entry_time, content, theme, created_at
            FROM diary_entries
            WHERE user_id = $1
            ORDER BY created_at DESC
            "#,
        )
        .bind(user_id)
        .fetch_all(db)
        .await?;
        Ok(rows)
    }

    /// Delete by id alone. Returns the number of rows removed; zero is not
    /// an error.
    pub async fn delete_by_id(db: &PgPool, id: Uuid) -> anyhow::Result<u64> {
        let result = sqlx::query(
            r#"
            DELETE FROM diary_entries
            WHERE id = $1
            "#,
        )
        .bind(id)
        .execute(db)
        .await?;
        Ok(result.rows_affected())
    }
}
