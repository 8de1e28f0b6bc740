//! 日历条目聚合
//!
//! 作业按截止时间、事件按开始时间落到日历时区的某一天。

use std::collections::BTreeMap;

use chrono::{DateTime, FixedOffset, NaiveDate, Utc};

use crate::models::assignments::entities::{Assignment, AssignmentState};
use crate::models::calendar::entities::{
    CalendarEntry, CalendarEvent, DayCell, EntryKind, KindFilter,
};
use crate::services::submissions::status::resolve_assignment_state;

/// 分组键格式
pub const DAY_KEY_FORMAT: &str = "%Y-%m-%d";

pub fn day_key(date: NaiveDate) -> String {
    date.format(DAY_KEY_FORMAT).to_string()
}

fn local_date(at: DateTime<Utc>, offset: &FixedOffset) -> NaiveDate {
    at.with_timezone(offset).date_naive()
}

pub fn task_entry(
    assignment: &Assignment,
    now: DateTime<Utc>,
    offset: &FixedOffset,
) -> CalendarEntry {
    CalendarEntry {
        date: local_date(assignment.deadline, offset),
        at: assignment.deadline,
        kind: EntryKind::Task,
        source_id: assignment.id,
        title: assignment.title.clone(),
        location: None,
        module_id: Some(assignment.module_id),
        state: Some(resolve_assignment_state(assignment, now)),
    }
}

pub fn event_entry(event: &CalendarEvent, offset: &FixedOffset) -> CalendarEntry {
    CalendarEntry {
        date: local_date(event.starts_at, offset),
        at: event.starts_at,
        kind: EntryKind::Event,
        source_id: event.id,
        title: event.title.clone(),
        location: event.location.clone(),
        module_id: event.module_id,
        state: None,
    }
}

/// 由作业和事件推导日历条目，未发布的作业不上日历
///
/// 作业在前、事件在后，各自保持输入顺序，不按时间重排。
pub fn derive_entries(
    assignments: &[Assignment],
    events: &[CalendarEvent],
    now: DateTime<Utc>,
    offset: &FixedOffset,
) -> Vec<CalendarEntry> {
    assignments
        .iter()
        .map(|a| task_entry(a, now, offset))
        .filter(|e| e.state != Some(AssignmentState::Draft))
        .chain(events.iter().map(|e| event_entry(e, offset)))
        .collect()
}

/// 按日期分组，组内保持输入顺序
pub fn group_by_day(entries: &[CalendarEntry]) -> BTreeMap<String, Vec<CalendarEntry>> {
    let mut groups: BTreeMap<String, Vec<CalendarEntry>> = BTreeMap::new();
    for entry in entries {
        groups
            .entry(day_key(entry.date))
            .or_default()
            .push(entry.clone());
    }
    groups
}

/// 把分组后的条目挂到对应日期的格子上
pub fn attach_entries(cells: &mut [DayCell], groups: &BTreeMap<String, Vec<CalendarEntry>>) {
    for cell in cells.iter_mut() {
        if let Some(entries) = groups.get(&day_key(cell.date)) {
            cell.entries = entries.clone();
        }
    }
}

/// 按类型过滤，返回新的网格
pub fn filter_by_kind(cells: &[DayCell], filter: KindFilter) -> Vec<DayCell> {
    cells
        .iter()
        .map(|cell| DayCell {
            entries: cell
                .entries
                .iter()
                .filter(|e| filter.accepts(e.kind))
                .cloned()
                .collect(),
            ..cell.clone()
        })
        .collect()
}
