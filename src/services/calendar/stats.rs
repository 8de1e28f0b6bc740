use chrono::{DateTime, Utc};

use crate::models::assignments::entities::AssignmentState;
use crate::models::calendar::entities::{CalendarEntry, EntryKind};
use crate::models::calendar::responses::CalendarStatistics;

/// 统计日历条目
///
/// 逾期作业按条目上的作业状态计算，即将开始的事件指开始时间晚于 `now` 的事件。
pub fn compute_statistics(entries: &[CalendarEntry], now: DateTime<Utc>) -> CalendarStatistics {
    entries
        .iter()
        .fold(CalendarStatistics::default(), |mut stats, entry| {
            match entry.kind {
                EntryKind::Task => {
                    stats.total_tasks += 1;
                    if entry.state == Some(AssignmentState::Overdue) {
                        stats.overdue_tasks += 1;
                    }
                }
                EntryKind::Event => {
                    stats.total_events += 1;
                    if entry.at > now {
                        stats.upcoming_events += 1;
                    }
                }
            }
            stats
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::calendar::aggregate::derive_entries;
    use crate::services::calendar::aggregate::tests::event;
    use crate::services::submissions::status::tests::{assignment, at};
    use chrono::FixedOffset;

    #[test]
    fn test_one_overdue_of_three() {
        let now = at("2025-03-15T12:00:00Z");
        let past = assignment(at("2025-03-10T23:59:00Z"));
        let mut future = assignment(at("2025-03-20T23:59:00Z"));
        future.id = 2;
        // 已关闭的作业不算逾期
        let mut closed = assignment(at("2025-03-05T23:59:00Z"));
        closed.id = 3;
        closed.closed_at = Some(at("2025-03-06T00:00:00Z"));

        let events = vec![
            event(1, "2025-03-14T09:00:00Z"),
            event(2, "2025-03-16T09:00:00Z"),
        ];
        let entries = derive_entries(
            &[past, future, closed],
            &events,
            now,
            &FixedOffset::east_opt(0).unwrap(),
        );

        let stats = compute_statistics(&entries, now);
        assert_eq!(
            stats,
            CalendarStatistics {
                total_tasks: 3,
                total_events: 2,
                overdue_tasks: 1,
                upcoming_events: 1,
            }
        );
    }

    #[test]
    fn test_empty() {
        assert_eq!(
            compute_statistics(&[], at("2025-03-15T12:00:00Z")),
            CalendarStatistics::default()
        );
    }
}
