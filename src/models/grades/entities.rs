use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/grade.ts")]
pub struct Grade {
    // 分数，范围 [0, 100]
    pub score: f64,
    // 评分时间，重新评分时刷新
    pub graded_at: DateTime<Utc>,
    pub grader_id: i64,
    pub comment: Option<String>,
}

/// 展示用的成绩标签，不存储
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "../frontend/src/types/generated/grade.ts")]
pub enum GradeBand {
    Approved,
    NeedsImprovement,
}
