//! Task filtering and ordering
//!
//! Pure transforms over a task collection: predicates compose with AND,
//! filtering preserves input order, and the sorts are stable so they can be
//! layered.

use crate::dates::sort_by_due_date;
use crate::task::{Priority, Task};

/// Category predicate: everything, or one category by name
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(String),
}

impl CategoryFilter {
    fn matches(&self, task: &Task) -> bool {
        match self {
            Self::All => true,
            Self::Only(name) => task.category == *name,
        }
    }
}

/// Priority predicate: everything, or one priority level
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PriorityFilter {
    #[default]
    All,
    Only(Priority),
}

impl PriorityFilter {
    fn matches(&self, task: &Task) -> bool {
        match self {
            Self::All => true,
            Self::Only(priority) => task.priority == *priority,
        }
    }
}

/// Combined filter over search text, category and priority
#[derive(Debug, Clone, Default)]
pub struct TaskFilter {
    /// Case-insensitive substring matched against title or description;
    /// empty matches everything
    pub search: String,
    pub category: CategoryFilter,
    pub priority: PriorityFilter,
}

impl TaskFilter {
    /// Filter matching every task
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the search text
    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = search.into();
        self
    }

    /// Restrict to one category by name
    pub fn with_category(mut self, name: impl Into<String>) -> Self {
        self.category = CategoryFilter::Only(name.into());
        self
    }

    /// Restrict to one priority level
    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = PriorityFilter::Only(priority);
        self
    }

    /// True when the task satisfies all three predicates
    pub fn matches(&self, task: &Task) -> bool {
        let query = self.search.to_lowercase();
        let matches_search = task.title.to_lowercase().contains(&query)
            || task.description.to_lowercase().contains(&query);

        matches_search && self.category.matches(task) && self.priority.matches(task)
    }
}

/// Subsequence of the input, in original order, satisfying the filter
pub fn filter_tasks(tasks: &[Task], filter: &TaskFilter) -> Vec<Task> {
    tasks.iter().filter(|t| filter.matches(t)).cloned().collect()
}

/// Stable sort by priority weight descending, earlier-created first among
/// equal priorities
pub fn sort_by_priority(tasks: &[Task]) -> Vec<Task> {
    let mut sorted = tasks.to_vec();
    sorted.sort_by(|a, b| {
        b.priority
            .weight()
            .cmp(&a.priority.weight())
            .then(a.created_at.cmp(&b.created_at))
    });
    sorted
}

/// The display ordering: a priority pass then a due-date pass, both stable,
/// so the result is primarily by due date with priority as the secondary
/// grouping among equal dates (undated tasks last).
pub fn sort_for_display(tasks: &[Task]) -> Vec<Task> {
    sort_by_due_date(&sort_by_priority(tasks))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::task::TaskDraft;
    use chrono::{Duration, Utc};

    fn task(id: i64, title: &str, description: &str, category: &str, priority: Priority) -> Task {
        let draft = TaskDraft::new(title, category)
            .with_description(description)
            .with_priority(priority);
        Task::from_draft(id, draft, Utc::now())
    }

    fn sample() -> Vec<Task> {
        vec![
            task(1, "Buy milk", "from the corner shop", "Errands", Priority::Low),
            task(2, "Write report", "quarterly numbers", "Work", Priority::High),
            task(3, "Call dentist", "reschedule MILK delivery", "Errands", Priority::Medium),
        ]
    }

    #[test]
    fn test_identity_filter() {
        let tasks = sample();
        let filtered = filter_tasks(&tasks, &TaskFilter::new());

        let ids: Vec<_> = filtered.iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn test_search_matches_title_or_description_case_insensitive() {
        let tasks = sample();
        let filtered = filter_tasks(&tasks, &TaskFilter::new().with_search("milk"));

        let ids: Vec<_> = filtered.iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn test_predicates_compose_with_and() {
        let tasks = sample();
        let filter = TaskFilter::new()
            .with_search("milk")
            .with_category("Errands")
            .with_priority(Priority::Medium);
        let filtered = filter_tasks(&tasks, &filter);

        let ids: Vec<_> = filtered.iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![3]);
    }

    #[test]
    fn test_filter_preserves_order() {
        let tasks = sample();
        let filtered = filter_tasks(&tasks, &TaskFilter::new().with_category("Errands"));

        let ids: Vec<_> = filtered.iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn test_sort_by_priority_descending_with_stable_tie_break() {
        let now = Utc::now();
        let mut high_late = task(1, "a", "", "c", Priority::High);
        high_late.created_at = now + Duration::seconds(10);
        let mut high_early = task(2, "b", "", "c", Priority::High);
        high_early.created_at = now;
        let low = task(3, "c", "", "c", Priority::Low);
        let medium = task(4, "d", "", "c", Priority::Medium);

        let sorted = sort_by_priority(&[low, high_late, medium, high_early]);
        let ids: Vec<_> = sorted.iter().map(|t| t.id).collect();

        assert_eq!(ids, vec![2, 1, 4, 3]);
    }

    #[test]
    fn test_sort_for_display_groups_by_due_date_then_priority() {
        let now = Utc::now();
        let mut low_soon = task(1, "a", "", "c", Priority::Low);
        low_soon.due_date = Some(now);
        let mut high_soon = task(2, "b", "", "c", Priority::High);
        high_soon.due_date = Some(now);
        let mut medium_later = task(3, "c", "", "c", Priority::Medium);
        medium_later.due_date = Some(now + Duration::days(2));
        let high_undated = task(4, "d", "", "c", Priority::High);

        let sorted = sort_for_display(&[low_soon, high_soon, medium_later, high_undated]);
        let ids: Vec<_> = sorted.iter().map(|t| t.id).collect();

        // Same due date: priority pass ordering survives the stable date pass.
        assert_eq!(ids, vec![2, 1, 3, 4]);
    }
}
