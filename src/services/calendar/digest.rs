use tracing::debug;

use super::CalendarService;
use super::aggregate::{attach_entries, derive_entries, filter_by_kind, group_by_day};
use super::grid::{build_month_grid, mark_today};
use super::stats::compute_statistics;
use crate::errors::Result;
use crate::models::calendar::entities::{CalendarEntry, KindFilter, MonthKey};
use crate::models::calendar::responses::MonthDigest;

pub async fn month_digest(
    service: &CalendarService,
    course_id: i64,
    month: MonthKey,
    filter: KindFilter,
) -> Result<MonthDigest> {
    let ctx = service.context();
    let (assignments, events) = futures_util::try_join!(
        ctx.storage.list_course_assignments(course_id),
        ctx.storage.list_course_events(course_id)
    )?;

    let now = ctx.now();
    let offset = ctx.calendar_offset();
    let today = now.with_timezone(&offset).date_naive();

    let entries = derive_entries(&assignments, &events, now, &offset);

    let mut cells = build_month_grid(&month);
    attach_entries(&mut cells, &group_by_day(&entries));
    mark_today(&mut cells, today);

    // 统计只看本月条目，且不受类型过滤影响
    let in_month: Vec<CalendarEntry> = entries
        .into_iter()
        .filter(|e| month.contains(e.date))
        .collect();
    let statistics = compute_statistics(&in_month, now);

    debug!(
        "Calendar {}-{:02} for course {}: {} entries",
        month.year(),
        month.month(),
        course_id,
        in_month.len()
    );

    Ok(MonthDigest {
        month,
        today,
        filter,
        cells: filter_by_kind(&cells, filter),
        statistics,
    })
}

pub async fn current_month_digest(
    service: &CalendarService,
    course_id: i64,
    filter: KindFilter,
) -> Result<MonthDigest> {
    let ctx = service.context();
    let today = ctx.now().with_timezone(&ctx.calendar_offset()).date_naive();
    let month = MonthKey::containing(today)?;
    month_digest(service, course_id, month, filter).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::assignments::requests::UpdateAssignmentRequest;
    use crate::models::calendar::entities::{CalendarEvent, EntryKind};
    use crate::services::AssignmentService;
    use crate::services::assignments::create::tests::request;
    use crate::services::submissions::status::tests::at;
    use crate::services::testing::{COURSE_ID, Harness, TEACHER_ID};
    use crate::storage::Storage;
    use chrono::NaiveDate;

    async fn setup() -> (Harness, CalendarService) {
        let harness = Harness::new(at("2025-03-15T12:00:00Z"));
        let assignments = AssignmentService::new(harness.context.clone());

        assignments
            .create_assignment(TEACHER_ID, request("Past due", "2025-03-10T23:59:00Z"))
            .await
            .unwrap();
        assignments
            .create_assignment(TEACHER_ID, request("Coming up", "2025-03-20T23:59:00Z"))
            .await
            .unwrap();
        let closed = assignments
            .create_assignment(TEACHER_ID, request("Closed early", "2025-03-05T23:59:00Z"))
            .await
            .unwrap();
        assignments
            .update_assignment(
                closed.id,
                UpdateAssignmentRequest {
                    close: Some(true),
                    ..Default::default()
                },
            )
            .await
            .unwrap();
        let mut draft = request("Not yet", "2025-03-25T23:59:00Z");
        draft.publish = false;
        assignments.create_assignment(TEACHER_ID, draft).await.unwrap();
        // 下个月的作业出现在借用格子里，但不计入本月统计
        assignments
            .create_assignment(TEACHER_ID, request("April", "2025-04-02T23:59:00Z"))
            .await
            .unwrap();

        harness
            .storage
            .create_event(CalendarEvent {
                id: 0,
                course_id: COURSE_ID,
                title: "Field trip".to_string(),
                starts_at: at("2025-03-18T08:00:00Z"),
                location: Some("Museum".to_string()),
                module_id: None,
            })
            .await
            .unwrap();

        let service = CalendarService::new(harness.context.clone());
        (harness, service)
    }

    #[tokio::test]
    async fn test_month_digest() {
        let (_harness, service) = setup().await;

        let digest = service
            .month_digest(COURSE_ID, MonthKey::new(2025, 3).unwrap(), KindFilter::All)
            .await
            .unwrap();

        assert_eq!(digest.cells.len(), 42);
        assert_eq!(digest.today, NaiveDate::from_ymd_opt(2025, 3, 15).unwrap());
        let today: Vec<_> = digest.cells.iter().filter(|c| c.is_today).collect();
        assert_eq!(today.len(), 1);
        assert_eq!(today[0].date, digest.today);

        assert_eq!(digest.statistics.total_tasks, 3);
        assert_eq!(digest.statistics.overdue_tasks, 1);
        assert_eq!(digest.statistics.total_events, 1);
        assert_eq!(digest.statistics.upcoming_events, 1);

        let april = digest
            .cells
            .iter()
            .find(|c| c.date == NaiveDate::from_ymd_opt(2025, 4, 2).unwrap())
            .unwrap();
        assert!(!april.belongs_to_current_month);
        assert_eq!(april.entries.len(), 1);
    }

    #[tokio::test]
    async fn test_kind_filter_keeps_statistics() {
        let (_harness, service) = setup().await;

        let digest = service
            .current_month_digest(COURSE_ID, KindFilter::Event)
            .await
            .unwrap();
        assert_eq!(digest.month, MonthKey::new(2025, 3).unwrap());

        let kinds: Vec<EntryKind> = digest
            .cells
            .iter()
            .flat_map(|c| c.entries.iter().map(|e| e.kind))
            .collect();
        assert_eq!(kinds, vec![EntryKind::Event]);
        assert_eq!(digest.statistics.total_tasks, 3);
    }

    #[tokio::test]
    async fn test_storage_failure_surfaces() {
        let (harness, service) = setup().await;
        harness.storage.set_storage_available(false);

        let err = service
            .month_digest(COURSE_ID, MonthKey::new(2025, 3).unwrap(), KindFilter::All)
            .await
            .unwrap_err();
        assert_eq!(err.code(), "E102");
    }
}
