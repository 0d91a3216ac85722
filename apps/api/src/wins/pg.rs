use async_trait::async_trait;
use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::win::WinRow;
use crate::polish::style::Style;
use crate::wins::store::{NewWin, WinEdit, WinFilter, WinStore};

/// Postgres-backed win store.
#[derive(Clone)]
pub struct PgWinStore {
    pool: PgPool,
}

impl PgWinStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl WinStore for PgWinStore {
    async fn create(&self, win: NewWin) -> Result<WinRow, AppError> {
        let row = sqlx::query_as::<_, WinRow>(
            r#"
            INSERT INTO wins (id, text_raw, category, win_date)
            VALUES ($1, $2, $3, $4)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(&win.text_raw)
        .bind(&win.category)
        .bind(win.win_date)
        .fetch_one(&self.pool)
        .await?;

        info!("Created win {} dated {}", row.id, row.win_date);
        Ok(row)
    }

    async fn get(&self, id: Uuid) -> Result<Option<WinRow>, AppError> {
        Ok(
            sqlx::query_as::<_, WinRow>("SELECT * FROM wins WHERE id = $1")
                .bind(id)
                .fetch_optional(&self.pool)
                .await?,
        )
    }

    async fn list(&self, filter: &WinFilter) -> Result<Vec<WinRow>, AppError> {
        Ok(sqlx::query_as::<_, WinRow>(
            r#"
            SELECT *
            FROM wins
            WHERE ($1::date IS NULL OR win_date >= $1)
              AND ($2::date IS NULL OR win_date <= $2)
              AND ($3::text IS NULL OR category = $3)
            ORDER BY win_date DESC, created_at DESC
            "#,
        )
        .bind(filter.from)
        .bind(filter.to)
        .bind(&filter.category)
        .fetch_all(&self.pool)
        .await?)
    }

    async fn update(&self, id: Uuid, edit: WinEdit) -> Result<Option<WinRow>, AppError> {
        let (set_category, category) = match edit.category {
            Some(category) => (true, category),
            None => (false, None),
        };

        Ok(sqlx::query_as::<_, WinRow>(
            r#"
            UPDATE wins
            SET text_raw = COALESCE($2, text_raw),
                category = CASE WHEN $3 THEN $4 ELSE category END,
                win_date = COALESCE($5, win_date)
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(&edit.text_raw)
        .bind(set_category)
        .bind(category)
        .bind(edit.win_date)
        .fetch_optional(&self.pool)
        .await?)
    }

    async fn delete(&self, id: Uuid) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM wins WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn set_polish(
        &self,
        id: Uuid,
        text: &str,
        style: Style,
    ) -> Result<Option<WinRow>, AppError> {
        // Single statement: both columns change together or not at all.
        Ok(sqlx::query_as::<_, WinRow>(
            r#"
            UPDATE wins
            SET text_polished = $2, polish_style = $3
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(text)
        .bind(style.as_str())
        .fetch_optional(&self.pool)
        .await?)
    }
}
