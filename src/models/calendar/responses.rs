use chrono::NaiveDate;
use serde::Serialize;
use ts_rs::TS;

use crate::models::calendar::entities::{DayCell, KindFilter, MonthKey};

/// 日历统计
#[derive(Debug, Clone, Copy, Default, Serialize, PartialEq, Eq, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/calendar.ts")]
pub struct CalendarStatistics {
    pub total_tasks: i64,
    pub total_events: i64,
    pub overdue_tasks: i64,
    pub upcoming_events: i64,
}

/// 月视图响应
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/calendar.ts")]
pub struct MonthDigest {
    pub month: MonthKey,
    pub today: NaiveDate,
    pub filter: KindFilter,
    pub cells: Vec<DayCell>,
    pub statistics: CalendarStatistics,
}
