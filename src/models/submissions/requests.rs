use serde::Deserialize;
use ts_rs::TS;

use crate::models::attachments::entities::AttachmentSet;

/// 创建提交请求
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/submission.ts")]
pub struct CreateSubmissionRequest {
    pub assignment_id: i64,
    pub text_response: Option<String>,
    #[serde(default)]
    pub attachments: AttachmentSet,
    // 仅保存草稿，不记录提交时间
    #[serde(default)]
    pub draft: bool,
}
