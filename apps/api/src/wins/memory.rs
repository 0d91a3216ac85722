//! In-memory `WinStore` for handler and router tests.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::win::WinRow;
use crate::polish::style::Style;
use crate::wins::store::{NewWin, WinEdit, WinFilter, WinStore};

#[derive(Default)]
pub struct MemoryWinStore {
    wins: Mutex<HashMap<Uuid, WinRow>>,
}

impl MemoryWinStore {
    pub fn snapshot(&self, id: Uuid) -> Option<WinRow> {
        self.wins.lock().unwrap().get(&id).cloned()
    }
}

// Same semantics as the WHERE clause in `PgWinStore::list`.
fn matches(filter: &WinFilter, win: &WinRow) -> bool {
    filter.from.map_or(true, |from| win.win_date >= from)
        && filter.to.map_or(true, |to| win.win_date <= to)
        && filter
            .category
            .as_deref()
            .map_or(true, |c| win.category.as_deref() == Some(c))
}

#[async_trait]
impl WinStore for MemoryWinStore {
    async fn create(&self, win: NewWin) -> Result<WinRow, AppError> {
        let row = WinRow {
            id: Uuid::new_v4(),
            text_raw: win.text_raw,
            text_polished: None,
            polish_style: None,
            category: win.category,
            win_date: win.win_date,
            created_at: Utc::now(),
        };
        self.wins.lock().unwrap().insert(row.id, row.clone());
        Ok(row)
    }

    async fn get(&self, id: Uuid) -> Result<Option<WinRow>, AppError> {
        Ok(self.snapshot(id))
    }

    async fn list(&self, filter: &WinFilter) -> Result<Vec<WinRow>, AppError> {
        let mut rows: Vec<WinRow> = self
            .wins
            .lock()
            .unwrap()
            .values()
            .filter(|w| matches(filter, w))
            .cloned()
            .collect();
        rows.sort_by(|a, b| {
            b.win_date
                .cmp(&a.win_date)
                .then(b.created_at.cmp(&a.created_at))
        });
        Ok(rows)
    }

    async fn update(&self, id: Uuid, edit: WinEdit) -> Result<Option<WinRow>, AppError> {
        let mut wins = self.wins.lock().unwrap();
        let Some(row) = wins.get_mut(&id) else {
            return Ok(None);
        };
        if let Some(text_raw) = edit.text_raw {
            row.text_raw = text_raw;
        }
        if let Some(category) = edit.category {
            row.category = category;
        }
        if let Some(win_date) = edit.win_date {
            row.win_date = win_date;
        }
        Ok(Some(row.clone()))
    }

    async fn delete(&self, id: Uuid) -> Result<bool, AppError> {
        Ok(self.wins.lock().unwrap().remove(&id).is_some())
    }

    async fn set_polish(
        &self,
        id: Uuid,
        text: &str,
        style: Style,
    ) -> Result<Option<WinRow>, AppError> {
        let mut wins = self.wins.lock().unwrap();
        Ok(wins.get_mut(&id).map(|row| {
            row.text_polished = Some(text.to_string());
            row.polish_style = Some(style.as_str().to_string());
            row.clone()
        }))
    }
}

mod tests {
    use chrono::NaiveDate;

    use super::*;

    fn win(on: (i32, u32, u32), category: Option<&str>) -> WinRow {
        WinRow {
            id: Uuid::new_v4(),
            text_raw: "Won".to_string(),
            text_polished: None,
            polish_style: None,
            category: category.map(str::to_string),
            win_date: NaiveDate::from_ymd_opt(on.0, on.1, on.2).unwrap(),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_default_filter_matches_everything() {
        assert!(matches(&WinFilter::default(), &win((2020, 1, 1), None)));
    }

    #[test]
    fn test_filter_range_is_inclusive() {
        let filter = WinFilter {
            from: NaiveDate::from_ymd_opt(2024, 1, 1),
            to: NaiveDate::from_ymd_opt(2024, 1, 31),
            category: None,
        };
        assert!(matches(&filter, &win((2024, 1, 1), None)));
        assert!(matches(&filter, &win((2024, 1, 31), None)));
        assert!(!matches(&filter, &win((2023, 12, 31), None)));
        assert!(!matches(&filter, &win((2024, 2, 1), None)));
    }

    #[test]
    fn test_filter_category_is_exact() {
        let filter = WinFilter {
            category: Some("Leadership".to_string()),
            ..Default::default()
        };
        assert!(matches(&filter, &win((2024, 1, 1), Some("Leadership"))));
        assert!(!matches(&filter, &win((2024, 1, 1), Some("Impact"))));
        assert!(!matches(&filter, &win((2024, 1, 1), None)));
    }

    #[tokio::test]
    async fn test_list_is_newest_first_within_filter() {
        let store = MemoryWinStore::default();
        for (text, on) in [("old", (2024, 1, 2)), ("new", (2024, 3, 1)), ("out", (2025, 1, 1))] {
            store
                .create(NewWin {
                    text_raw: text.to_string(),
                    category: None,
                    win_date: NaiveDate::from_ymd_opt(on.0, on.1, on.2).unwrap(),
                })
                .await
                .unwrap();
        }
        let filter = WinFilter {
            to: NaiveDate::from_ymd_opt(2024, 12, 31),
            ..Default::default()
        };

        let texts: Vec<String> = store
            .list(&filter)
            .await
            .unwrap()
            .into_iter()
            .map(|w| w.text_raw)
            .collect();
        assert_eq!(texts, ["new", "old"]);
    }
}
