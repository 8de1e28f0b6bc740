//! 状态推导
//!
//! 提交状态和作业状态都由时间戳和少量显式标记推导，任何输入都有确定结果。

use chrono::{DateTime, Utc};

use crate::models::assignments::entities::{Assignment, AssignmentState};
use crate::models::submissions::entities::{Submission, SubmissionStatus};

/// 推导提交状态
///
/// 1. 已评分 → `Graded`（优先于时间判断）
/// 2. 没有提交时间 → `Draft`
/// 3. 提交时间不晚于截止时间 → `OnTime`
/// 4. 否则 → `Late`
pub fn resolve(submission: &Submission, assignment: &Assignment) -> SubmissionStatus {
    if submission.grade.is_some() {
        return SubmissionStatus::Graded;
    }

    match submission.created_at {
        None => SubmissionStatus::Draft,
        Some(sent_at) if sent_at <= assignment.deadline => SubmissionStatus::OnTime,
        Some(_) => SubmissionStatus::Late,
    }
}

/// 推导作业状态
///
/// 手动关闭的作业始终为 `Closed`，未发布为 `Draft`。
/// 已发布的作业在截止前为 `Open`，截止后为 `Overdue`（仍接受迟交）。
pub fn resolve_assignment_state(assignment: &Assignment, now: DateTime<Utc>) -> AssignmentState {
    if assignment.is_closed() {
        AssignmentState::Closed
    } else if !assignment.is_published() {
        AssignmentState::Draft
    } else if now < assignment.deadline {
        AssignmentState::Open
    } else {
        AssignmentState::Overdue
    }
}
