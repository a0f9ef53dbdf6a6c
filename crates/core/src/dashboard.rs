//! Dashboard aggregation over the full ticket list.
//!
//! Nothing here is persisted: the summary is rebuilt from the current rows
//! on every request. The per-status partition always sums to `total`.

use std::collections::HashMap;

use serde::Serialize;

use crate::project::fallback_project_name;
use crate::ticket::TicketStatus;
use crate::types::{Date, DbId};

/// The subset of a ticket row the dashboard needs.
#[derive(Debug, Clone, Copy)]
pub struct TicketFacts {
    pub project_id: DbId,
    pub status: TicketStatus,
    pub desired_return_date: Date,
}

/// Headline counters for the dashboard cards.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TicketCounts {
    pub total: i64,
    pub open: i64,
    pub concluded: i64,
    pub pending: i64,
    pub approved: i64,
    pub in_progress: i64,
    pub denied: i64,
    /// In-progress tickets whose desired return date is today or later.
    pub on_time: i64,
    /// In-progress tickets whose desired return date has passed.
    pub overdue: i64,
}

impl TicketCounts {
    /// Sum of the per-status partition.
    pub fn partition_sum(&self) -> i64 {
        self.pending + self.approved + self.in_progress + self.concluded + self.denied
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusCount {
    pub status: TicketStatus,
    pub count: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectCount {
    pub project_id: DbId,
    pub project_name: String,
    pub count: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DashboardSummary {
    pub counts: TicketCounts,
    pub by_status: Vec<StatusCount>,
    pub by_project: Vec<ProjectCount>,
}

/// Build the dashboard summary.
///
/// `project_names` maps project ids to display names; tickets pointing at a
/// project missing from the map are grouped under a fallback name.
pub fn summarize(
    tickets: &[TicketFacts],
    project_names: &HashMap<DbId, String>,
    today: Date,
) -> DashboardSummary {
    let mut counts = TicketCounts::default();
    let mut per_status: HashMap<TicketStatus, i64> = HashMap::new();
    let mut per_project: HashMap<DbId, i64> = HashMap::new();

    for ticket in tickets {
        counts.total += 1;
        if ticket.status.is_open() {
            counts.open += 1;
        }
        match ticket.status {
            TicketStatus::Pending => counts.pending += 1,
            TicketStatus::Approved => counts.approved += 1,
            TicketStatus::Denied => counts.denied += 1,
            TicketStatus::Concluded => counts.concluded += 1,
            TicketStatus::InProgress => {
                counts.in_progress += 1;
                if ticket.desired_return_date < today {
                    counts.overdue += 1;
                } else {
                    counts.on_time += 1;
                }
            }
        }
        *per_status.entry(ticket.status).or_default() += 1;
        *per_project.entry(ticket.project_id).or_default() += 1;
    }

    let by_status = TicketStatus::ALL
        .into_iter()
        .map(|status| StatusCount {
            status,
            count: per_status.get(&status).copied().unwrap_or(0),
        })
        .collect();

    let mut by_project: Vec<ProjectCount> = per_project
        .into_iter()
        .map(|(project_id, count)| ProjectCount {
            project_id,
            project_name: project_names
                .get(&project_id)
                .cloned()
                .unwrap_or_else(|| fallback_project_name(project_id)),
            count,
        })
        .collect();
    by_project.sort_by(|a, b| {
        b.count
            .cmp(&a.count)
            .then_with(|| a.project_name.cmp(&b.project_name))
    });

    DashboardSummary {
        counts,
        by_status,
        by_project,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> Date {
        s.parse().unwrap()
    }

    fn facts(project_id: DbId, status: TicketStatus, due: &str) -> TicketFacts {
        TicketFacts {
            project_id,
            status,
            desired_return_date: date(due),
        }
    }

    #[test]
    fn empty_input_gives_zero_counts() {
        let summary = summarize(&[], &HashMap::new(), date("2026-10-19"));
        assert_eq!(summary.counts, TicketCounts::default());
        assert_eq!(summary.by_status.len(), 5);
        assert!(summary.by_status.iter().all(|s| s.count == 0));
        assert!(summary.by_project.is_empty());
    }

    #[test]
    fn partition_sums_to_total() {
        let tickets = vec![
            facts(1, TicketStatus::Pending, "2026-11-01"),
            facts(1, TicketStatus::Approved, "2026-11-01"),
            facts(2, TicketStatus::Denied, "2026-11-01"),
            facts(2, TicketStatus::InProgress, "2026-11-01"),
            facts(2, TicketStatus::Concluded, "2026-11-01"),
            facts(3, TicketStatus::Concluded, "2026-11-01"),
        ];
        let summary = summarize(&tickets, &HashMap::new(), date("2026-10-19"));
        assert_eq!(summary.counts.total, 6);
        assert_eq!(summary.counts.partition_sum(), 6);
        assert_eq!(summary.counts.open, 4);
        assert_eq!(summary.counts.concluded, 2);
        let by_status_sum: i64 = summary.by_status.iter().map(|s| s.count).sum();
        assert_eq!(by_status_sum, 6);
    }

    #[test]
    fn in_progress_split_by_due_date() {
        let tickets = vec![
            facts(1, TicketStatus::InProgress, "2026-10-18"),
            facts(1, TicketStatus::InProgress, "2026-10-19"),
            facts(1, TicketStatus::InProgress, "2026-12-01"),
            // Past due but not in progress: not counted as overdue.
            facts(1, TicketStatus::Approved, "2026-01-01"),
        ];
        let summary = summarize(&tickets, &HashMap::new(), date("2026-10-19"));
        assert_eq!(summary.counts.in_progress, 3);
        assert_eq!(summary.counts.overdue, 1);
        assert_eq!(summary.counts.on_time, 2);
    }

    #[test]
    fn projects_named_and_ordered_by_count() {
        let names = HashMap::from([(1, "Site A".to_string()), (2, "Site B".to_string())]);
        let tickets = vec![
            facts(1, TicketStatus::Pending, "2026-11-01"),
            facts(2, TicketStatus::Pending, "2026-11-01"),
            facts(2, TicketStatus::Approved, "2026-11-01"),
            facts(9, TicketStatus::Pending, "2026-11-01"),
        ];
        let summary = summarize(&tickets, &names, date("2026-10-19"));
        let names: Vec<&str> = summary
            .by_project
            .iter()
            .map(|p| p.project_name.as_str())
            .collect();
        assert_eq!(names, vec!["Site B", "Obra #9", "Site A"]);
        assert_eq!(summary.by_project[0].count, 2);
    }
}
