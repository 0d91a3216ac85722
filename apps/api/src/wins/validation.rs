//! Input checks for author-supplied win fields.

use chrono::{Days, NaiveDate};

use crate::errors::AppError;

pub const MAX_TEXT_CHARS: usize = 5000;

/// Trims and bounds the raw win text.
pub fn validate_text(raw: &str) -> Result<String, AppError> {
    let text = raw.trim();
    if text.is_empty() {
        return Err(AppError::Validation("text_raw cannot be empty".to_string()));
    }
    let chars = text.chars().count();
    if chars > MAX_TEXT_CHARS {
        return Err(AppError::Validation(format!(
            "text_raw is {chars} characters; the limit is {MAX_TEXT_CHARS}"
        )));
    }
    Ok(text.to_string())
}

/// Blank categories are stored as no category.
pub fn normalize_category(category: Option<String>) -> Option<String> {
    category
        .map(|c| c.trim().to_string())
        .filter(|c| !c.is_empty())
}

/// Wins cannot be dated in the future. One day of slack covers clients whose
/// local date is already ahead of UTC.
pub fn validate_win_date(date: NaiveDate, today: NaiveDate) -> Result<NaiveDate, AppError> {
    let latest = today.checked_add_days(Days::new(1)).unwrap_or(today);
    if date > latest {
        return Err(AppError::Validation(format!(
            "win_date {date} is in the future"
        )));
    }
    Ok(date)
}

pub fn validate_range(from: Option<NaiveDate>, to: Option<NaiveDate>) -> Result<(), AppError> {
    match (from, to) {
        (Some(from), Some(to)) if from > to => Err(AppError::Validation(format!(
            "start date {from} is after end date {to}"
        ))),
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn test_text_is_trimmed() {
        assert_eq!(validate_text("  Shipped v2  \n").unwrap(), "Shipped v2");
    }

    #[test]
    fn test_blank_text_rejected() {
        assert!(matches!(validate_text(" \t\n"), Err(AppError::Validation(_))));
    }

    #[test]
    fn test_overlong_text_rejected() {
        let text = "a".repeat(MAX_TEXT_CHARS + 1);
        assert!(validate_text(&text).is_err());
        assert!(validate_text(&"a".repeat(MAX_TEXT_CHARS)).is_ok());
    }

    #[test]
    fn test_blank_category_becomes_none() {
        assert_eq!(normalize_category(Some("   ".to_string())), None);
        assert_eq!(normalize_category(None), None);
        assert_eq!(
            normalize_category(Some(" Leadership ".to_string())),
            Some("Leadership".to_string())
        );
    }

    #[test]
    fn test_future_date_rejected_beyond_one_day_of_slack() {
        let today = d(2024, 6, 10);
        assert!(validate_win_date(d(2024, 6, 10), today).is_ok());
        assert!(validate_win_date(d(2024, 6, 11), today).is_ok());
        assert!(validate_win_date(d(2024, 6, 12), today).is_err());
        assert!(validate_win_date(d(2019, 1, 1), today).is_ok());
    }

    #[test]
    fn test_inverted_range_rejected() {
        assert!(validate_range(Some(d(2024, 2, 1)), Some(d(2024, 1, 1))).is_err());
        assert!(validate_range(Some(d(2024, 1, 1)), Some(d(2024, 1, 1))).is_ok());
        assert!(validate_range(None, Some(d(2024, 1, 1))).is_ok());
    }
}
