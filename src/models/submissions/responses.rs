use serde::Serialize;
use ts_rs::TS;

use crate::models::grades::entities::GradeBand;
use crate::models::submissions::entities::{Submission, SubmissionStatus};

/// 提交详情（附带推导出的状态）
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/submission.ts")]
pub struct SubmissionView {
    pub submission: Submission,
    pub status: SubmissionStatus,
    // 仅在已评分时给出
    pub band: Option<GradeBand>,
}
