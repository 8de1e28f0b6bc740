use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::models::attachments::entities::AttachmentSet;
use crate::models::grades::entities::Grade;

/// 提交状态（由提交时间、截止时间和评分推导，不存储）
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "../frontend/src/types/generated/submission.ts")]
pub enum SubmissionStatus {
    Draft,  // 草稿，尚未提交
    OnTime, // 按时提交
    Late,   // 迟交
    Graded, // 已评分
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/submission.ts")]
pub struct Submission {
    pub id: i64,
    pub assignment_id: i64,
    pub submitter_id: i64,
    // 提交时间，为空表示草稿
    pub created_at: Option<DateTime<Utc>>,
    pub text_response: Option<String>,
    pub attachments: AttachmentSet,
    pub grade: Option<Grade>,
}

impl Submission {
    pub fn is_sent(&self) -> bool {
        self.created_at.is_some()
    }
}
