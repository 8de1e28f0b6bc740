//! 月视图网格
//!
//! 固定 6 周 42 格，周日为一周第一天。月初之前和月末之后的格子
//! 借用相邻月份的真实日期，格子始终以日期标识。

use chrono::{Datelike, NaiveDate};

use crate::models::calendar::entities::{DayCell, MonthKey};
use crate::utils::days_in_month;

pub const GRID_CELLS: usize = 42;

fn month_before(year: i32, month: u32) -> (i32, u32) {
    if month == 1 {
        (year - 1, 12)
    } else {
        (year, month - 1)
    }
}

fn month_after(year: i32, month: u32) -> (i32, u32) {
    if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    }
}

/// 生成月视图的 42 个格子（不含条目）
///
/// 先补上月末尾的若干天，使 1 号落在对应星期几的位置，再排本月各天，
/// 最后用下月开头的日期补满 42 格。各月天数取自查表。
pub fn build_month_grid(month: &MonthKey) -> Vec<DayCell> {
    let (year, month_num) = (month.year(), month.month());
    let leading = month.first_day().weekday().num_days_from_sunday();
    let days = month.days();

    let (prev_year, prev_month) = month_before(year, month_num);
    let prev_days = days_in_month(prev_year, prev_month);
    let (next_year, next_month) = month_after(year, month_num);
    let trailing = GRID_CELLS as u32 - leading - days;

    let before = (prev_days + 1 - leading..=prev_days).map(|d| (prev_year, prev_month, d));
    let current = (1..=days).map(|d| (year, month_num, d));
    let after = (1..=trailing).map(|d| (next_year, next_month, d));

    // MonthKey 构造时已保证前后借用的日期可表示
    before
        .chain(current)
        .chain(after)
        .filter_map(|(y, m, d)| NaiveDate::from_ymd_opt(y, m, d))
        .map(|date| DayCell {
            date,
            belongs_to_current_month: month.contains(date),
            is_today: false,
            entries: Vec::new(),
        })
        .collect()
}

/// 标记今天所在的格子，包括借用的日期
pub fn mark_today(cells: &mut [DayCell], today: NaiveDate) {
    for cell in cells.iter_mut() {
        cell.is_today = cell.date == today;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn in_month(cells: &[DayCell]) -> Vec<NaiveDate> {
        cells
            .iter()
            .filter(|c| c.belongs_to_current_month)
            .map(|c| c.date)
            .collect()
    }

    #[test]
    fn test_leap_february() {
        let cells = build_month_grid(&MonthKey::from_zero_based(2024, 1).unwrap());
        assert_eq!(cells.len(), GRID_CELLS);

        let days = in_month(&cells);
        assert_eq!(days.len(), 29);
        assert_eq!(days.last(), Some(&date(2024, 2, 29)));

        // 2024-02-01 是周四，前面借用 1 月的 4 天
        assert_eq!(cells[0].date, date(2024, 1, 28));
        assert!(!cells[0].belongs_to_current_month);
        assert_eq!(cells[4].date, date(2024, 2, 1));
    }

    #[test]
    fn test_common_february() {
        let cells = build_month_grid(&MonthKey::from_zero_based(2025, 1).unwrap());
        assert_eq!(cells.len(), GRID_CELLS);
        assert_eq!(in_month(&cells).len(), 28);
        assert!(!cells.iter().any(|c| c.date.month() == 2 && c.date.day() == 29));
        // 2025-03-01 属于下个月
        let march_first = cells.iter().find(|c| c.date == date(2025, 3, 1)).unwrap();
        assert!(!march_first.belongs_to_current_month);
    }

    #[test]
    fn test_december_rolls_into_january() {
        let cells = build_month_grid(&MonthKey::new(2025, 12).unwrap());
        assert_eq!(cells.len(), GRID_CELLS);
        assert_eq!(in_month(&cells).len(), 31);

        let last = cells.last().unwrap();
        assert_eq!(last.date.year(), 2026);
        assert_eq!(last.date.month(), 1);
        assert!(!last.belongs_to_current_month);

        // 日期连续，不重复
        for pair in cells.windows(2) {
            assert_eq!(pair[0].date.succ_opt(), Some(pair[1].date));
        }
    }

    #[test]
    fn test_every_month_fills_grid_from_lookup() {
        for year in [1900, 2000, 2023, 2024, 2025, 2100] {
            for m in 1..=12 {
                let key = MonthKey::new(year, m).unwrap();
                let cells = build_month_grid(&key);
                assert_eq!(cells.len(), GRID_CELLS, "{year}-{m}");
                assert_eq!(in_month(&cells).len() as u32, days_in_month(year, m));
                assert_eq!(cells[0].date.weekday().num_days_from_sunday(), 0);
                for pair in cells.windows(2) {
                    assert_eq!(pair[0].date.succ_opt(), Some(pair[1].date));
                }
            }
        }
    }

    #[test]
    fn test_month_starting_on_sunday() {
        // 2026-02-01 是周日，第一格就是 1 号
        let cells = build_month_grid(&MonthKey::new(2026, 2).unwrap());
        assert_eq!(cells[0].date, date(2026, 2, 1));
        assert!(cells[0].belongs_to_current_month);
    }

    #[test]
    fn test_today_in_borrowed_cell() {
        let mut cells = build_month_grid(&MonthKey::new(2024, 2).unwrap());
        mark_today(&mut cells, date(2024, 1, 30));

        let today: Vec<&DayCell> = cells.iter().filter(|c| c.is_today).collect();
        assert_eq!(today.len(), 1);
        assert_eq!(today[0].date, date(2024, 1, 30));
        assert!(!today[0].belongs_to_current_month);
    }
}
