use serde::Deserialize;
use ts_rs::TS;

/// 评分请求
///
/// `score` 保持原始 JSON 值，表单可能传入数字或数字字符串。
#[derive(Debug, Clone, Default, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/grade.ts")]
pub struct GradeSubmissionRequest {
    pub score: Option<serde_json::Value>,
    pub comment: Option<String>,
}
