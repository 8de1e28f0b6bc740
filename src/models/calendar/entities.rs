use chrono::{DateTime, Datelike, Days, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::errors::{CourseworkError, Result};
use crate::models::assignments::entities::AssignmentState;
use crate::utils::days_in_month;

/// 日历事件（由外部协作方维护）
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/calendar.ts")]
pub struct CalendarEvent {
    pub id: i64,
    pub course_id: i64,
    pub title: String,
    pub starts_at: DateTime<Utc>,
    pub location: Option<String>,
    pub module_id: Option<i64>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "../frontend/src/types/generated/calendar.ts")]
pub enum EntryKind {
    Task,
    Event,
}

/// 日历视图的类型过滤
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "../frontend/src/types/generated/calendar.ts")]
pub enum KindFilter {
    #[default]
    All,
    Task,
    Event,
}

impl KindFilter {
    pub fn accepts(&self, kind: EntryKind) -> bool {
        match self {
            KindFilter::All => true,
            KindFilter::Task => kind == EntryKind::Task,
            KindFilter::Event => kind == EntryKind::Event,
        }
    }
}

/// 日历条目（由作业或事件推导，不存储）
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/calendar.ts")]
pub struct CalendarEntry {
    // 所在日期（按日历时区）
    pub date: NaiveDate,
    // 截止时间或事件开始时间
    pub at: DateTime<Utc>,
    pub kind: EntryKind,
    // 作业 ID 或事件 ID
    pub source_id: i64,
    pub title: String,
    pub location: Option<String>,
    pub module_id: Option<i64>,
    // 仅作业条目有状态
    pub state: Option<AssignmentState>,
}

/// 月视图中的一格，以真实日期标识
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/calendar.ts")]
pub struct DayCell {
    pub date: NaiveDate,
    pub belongs_to_current_month: bool,
    pub is_today: bool,
    pub entries: Vec<CalendarEntry>,
}

/// 年月标识，构造时保证整张 6 周网格的日期都可表示
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/calendar.ts")]
pub struct MonthKey {
    year: i32,
    // 1-12
    month: u32,
    #[serde(skip)]
    first_day: NaiveDate,
}

impl MonthKey {
    /// 使用 1-12 的月份构造
    pub fn new(year: i32, month: u32) -> Result<Self> {
        let invalid = || CourseworkError::invalid_month(format!("无效的年月: {year}-{month}"));

        let first_day = NaiveDate::from_ymd_opt(year, month, 1).ok_or_else(invalid)?;
        // 网格最多向前借 6 天、向后延伸到第 42 天
        first_day
            .checked_sub_days(Days::new(6))
            .and(first_day.checked_add_days(Days::new(42)))
            .ok_or_else(invalid)?;

        Ok(Self {
            year,
            month,
            first_day,
        })
    }

    /// 使用前端传入的 0-11 月份下标构造
    pub fn from_zero_based(year: i32, month_index: i64) -> Result<Self> {
        match u32::try_from(month_index) {
            Ok(index) if index < 12 => Self::new(year, index + 1),
            _ => Err(CourseworkError::invalid_month(format!(
                "无效的月份下标: {month_index}"
            ))),
        }
    }

    /// 包含指定日期的月份
    pub fn containing(date: NaiveDate) -> Result<Self> {
        Self::new(date.year(), date.month())
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn first_day(&self) -> NaiveDate {
        self.first_day
    }

    pub fn days(&self) -> u32 {
        days_in_month(self.year, self.month)
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date.year() == self.year && date.month() == self.month
    }
}
