//! Task collection statistics

use chrono::NaiveDate;
use serde::Serialize;

use crate::dates::{is_overdue_on, today};
use crate::task::Task;

/// Aggregate counts over a task collection
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct TaskStats {
    pub total: usize,
    pub completed: usize,
    pub pending: usize,
    /// Open tasks whose due date already passed; shares the overdue
    /// predicate with the date helpers so the two can never disagree
    pub overdue: usize,
}

/// Compute stats against the ambient current day
pub fn task_stats(tasks: &[Task]) -> TaskStats {
    task_stats_on(tasks, today())
}

/// Compute stats against an explicit current day
pub fn task_stats_on(tasks: &[Task], today: NaiveDate) -> TaskStats {
    let total = tasks.len();
    let completed = tasks.iter().filter(|t| t.completed).count();
    let overdue = tasks
        .iter()
        .filter(|t| !t.completed && is_overdue_on(t.due_date, today))
        .count();

    TaskStats {
        total,
        completed,
        pending: total - completed,
        overdue,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::task::TaskDraft;
    use chrono::{Duration, Local, Utc};

    fn build_tasks() -> Vec<Task> {
        let now = Utc::now();
        let mut done = Task::from_draft(1, TaskDraft::new("done", "c"), now);
        done.set_completed(true, now);

        let open = Task::from_draft(2, TaskDraft::new("open", "c"), now);

        let overdue = Task::from_draft(
            3,
            TaskDraft::new("late", "c").with_due_date(now - Duration::days(2)),
            now,
        );

        // Completed tasks never count as overdue, even with a past due date.
        let mut done_late = Task::from_draft(
            4,
            TaskDraft::new("done late", "c").with_due_date(now - Duration::days(2)),
            now,
        );
        done_late.set_completed(true, now);

        vec![done, open, overdue, done_late]
    }

    #[test]
    fn test_counts() {
        let today = Local::now().date_naive();
        let stats = task_stats_on(&build_tasks(), today);

        assert_eq!(stats.total, 4);
        assert_eq!(stats.completed, 2);
        assert_eq!(stats.pending, 2);
        assert_eq!(stats.overdue, 1);
    }

    #[test]
    fn test_pending_is_total_minus_completed() {
        let today = Local::now().date_naive();
        let tasks = build_tasks();
        let stats = task_stats_on(&tasks, today);

        assert_eq!(stats.pending, stats.total - stats.completed);
        assert!(stats.overdue <= stats.pending);
    }

    #[test]
    fn test_empty_collection() {
        let stats = task_stats(&[]);
        assert_eq!(stats, TaskStats::default());
    }
}
