//! Due-date display and ordering helpers
//!
//! Day-relative classification ("Today", overdue) happens in the local
//! timezone. Each helper has an `_on` variant taking the current day
//! explicitly so tests can pin the clock; the plain variants feed in the
//! ambient local day.

use std::cmp::Ordering;

use chrono::{DateTime, Local, NaiveDate, Utc};

use crate::task::Task;

/// The current day in the local timezone
pub(crate) fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// The local calendar day a timestamp falls on
fn local_day(date: DateTime<Utc>) -> NaiveDate {
    date.with_timezone(&Local).date_naive()
}

/// Human display text for a due date: "Today"/"Tomorrow"/"Yesterday" for
/// the adjacent days, an absolute "MMM dd, yyyy" date otherwise, and the
/// empty string when there is no due date.
pub fn format_date(date: Option<DateTime<Utc>>) -> String {
    format_date_on(date, today())
}

/// [`format_date`] against an explicit current day
pub fn format_date_on(date: Option<DateTime<Utc>>, today: NaiveDate) -> String {
    let Some(date) = date else {
        return String::new();
    };
    let day = local_day(date);
    match day.signed_duration_since(today).num_days() {
        0 => "Today".to_string(),
        1 => "Tomorrow".to_string(),
        -1 => "Yesterday".to_string(),
        _ => date.with_timezone(&Local).format("%b %d, %Y").to_string(),
    }
}

/// True when the due date lies on a day strictly before the current one.
///
/// A due date on the current day is never overdue, whatever its
/// time-of-day; a missing due date is never overdue.
pub fn is_overdue(due_date: Option<DateTime<Utc>>) -> bool {
    is_overdue_on(due_date, today())
}

/// [`is_overdue`] against an explicit current day
pub fn is_overdue_on(due_date: Option<DateTime<Utc>>, today: NaiveDate) -> bool {
    due_date.is_some_and(|due| local_day(due) < today)
}

/// Display color token for a due date
pub fn due_date_color(due_date: Option<DateTime<Utc>>) -> &'static str {
    due_date_color_on(due_date, today())
}

/// [`due_date_color`] against an explicit current day
pub fn due_date_color_on(due_date: Option<DateTime<Utc>>, today: NaiveDate) -> &'static str {
    let Some(due) = due_date else {
        return "gray";
    };
    match local_day(due).signed_duration_since(today).num_days() {
        days if days < 0 => "error",
        0 => "warning",
        1 => "info",
        _ => "default",
    }
}

/// Stable ascending sort by due date; tasks without a due date sort after
/// every dated task and keep their relative order among themselves.
pub fn sort_by_due_date(tasks: &[Task]) -> Vec<Task> {
    let mut sorted = tasks.to_vec();
    sorted.sort_by(|a, b| match (a.due_date, b.due_date) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Greater,
        (Some(_), None) => Ordering::Less,
        (Some(a), Some(b)) => a.cmp(&b),
    });
    sorted
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::task::TaskDraft;
    use chrono::Duration;

    #[test]
    fn test_format_date_relative_days() {
        let now = Utc::now();
        let today = local_day(now);

        assert_eq!(format_date_on(Some(now), today), "Today");
        assert_eq!(format_date_on(Some(now + Duration::days(1)), today), "Tomorrow");
        assert_eq!(format_date_on(Some(now - Duration::days(1)), today), "Yesterday");
        assert_eq!(format_date_on(None, today), "");
    }

    #[test]
    fn test_format_date_absolute() {
        let now = Utc::now();
        let today = local_day(now);
        let far = now + Duration::days(30);

        let text = format_date_on(Some(far), today);
        assert_eq!(text, far.with_timezone(&Local).format("%b %d, %Y").to_string());
    }

    #[test]
    fn test_is_overdue_boundaries() {
        let now = Utc::now();
        let today = local_day(now);

        // Any time-of-day on the current day is not overdue.
        assert!(!is_overdue_on(Some(now), today));
        assert!(is_overdue_on(Some(now - Duration::days(1)), today));
        assert!(!is_overdue_on(Some(now + Duration::days(1)), today));
        assert!(!is_overdue_on(None, today));
    }

    #[test]
    fn test_due_date_color_tokens() {
        let now = Utc::now();
        let today = local_day(now);

        assert_eq!(due_date_color_on(None, today), "gray");
        assert_eq!(due_date_color_on(Some(now - Duration::days(2)), today), "error");
        assert_eq!(due_date_color_on(Some(now), today), "warning");
        assert_eq!(due_date_color_on(Some(now + Duration::days(1)), today), "info");
        assert_eq!(due_date_color_on(Some(now + Duration::days(9)), today), "default");
    }

    #[test]
    fn test_sort_by_due_date_undated_last() {
        let now = Utc::now();
        let mut undated_a = Task::from_draft(1, TaskDraft::new("a", "c"), now);
        undated_a.due_date = None;
        let mut undated_b = Task::from_draft(2, TaskDraft::new("b", "c"), now);
        undated_b.due_date = None;
        let soon = Task::from_draft(3, TaskDraft::new("soon", "c").with_due_date(now), now);
        let later =
            Task::from_draft(4, TaskDraft::new("later", "c").with_due_date(now + Duration::days(3)), now);

        let sorted = sort_by_due_date(&[undated_a, later, undated_b, soon]);
        let ids: Vec<_> = sorted.iter().map(|t| t.id).collect();

        // Dated ascending first; undated keep their relative order at the end.
        assert_eq!(ids, vec![3, 4, 1, 2]);
    }
}
