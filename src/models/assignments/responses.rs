use serde::Serialize;
use ts_rs::TS;

use crate::models::assignments::entities::{Assignment, AssignmentState};

/// 作业详情（附带推导出的状态）
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/assignment.ts")]
pub struct AssignmentDetail {
    pub assignment: Assignment,
    pub state: AssignmentState,
}

/// 作业统计响应
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/assignment.ts")]
pub struct AssignmentStatsResponse {
    pub assignment_id: i64,
    pub state: AssignmentState,
    pub total_obligors: i64,
    pub submitted_count: i64,
    pub on_time_count: i64,
    pub late_count: i64,
    pub graded_count: i64,
    pub passing_count: i64,
    pub submission_rate: f64,
    pub score_stats: Option<ScoreStats>,
    pub score_distribution: Vec<ScoreRange>,
    pub pending_participants: Vec<PendingParticipant>,
}

/// 分数统计
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/assignment.ts")]
pub struct ScoreStats {
    pub average: f64,
    pub max: f64,
    pub min: f64,
}

/// 分数区间
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/assignment.ts")]
pub struct ScoreRange {
    pub range: String,
    pub count: i64,
}

/// 尚未提交的成员
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/assignment.ts")]
pub struct PendingParticipant {
    pub user_id: i64,
    pub display_name: String,
}
