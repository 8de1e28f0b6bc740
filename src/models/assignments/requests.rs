use chrono::{DateTime, Utc};
use serde::Deserialize;
use ts_rs::TS;

use crate::models::assignments::entities::{DeliveryType, TargetingMode};
use crate::models::attachments::entities::AttachmentSet;

/// 创建作业请求
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/assignment.ts")]
pub struct CreateAssignmentRequest {
    pub course_id: i64,
    pub module_id: i64,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub criteria: String,
    pub delivery_type: DeliveryType,
    pub deadline: DateTime<Utc>, // ISO 8601 格式，如 "2026-01-24T12:00:00Z"
    pub targeting_mode: TargetingMode,
    #[serde(default)]
    pub selected_participant_ids: Vec<i64>,
    #[serde(default)]
    pub attachments: AttachmentSet,
    #[serde(default)]
    pub publish: bool,
}

/// 更新作业请求
#[derive(Debug, Clone, Default, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/assignment.ts")]
pub struct UpdateAssignmentRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub criteria: Option<String>,
    pub delivery_type: Option<DeliveryType>,
    pub deadline: Option<DateTime<Utc>>,
    pub targeting_mode: Option<TargetingMode>,
    pub selected_participant_ids: Option<Vec<i64>>,
    // 整体替换附件集合
    pub attachments: Option<AttachmentSet>,
    // 替换附件时保留原有链接
    #[serde(default)]
    pub keep_existing_links: bool,
    pub publish: Option<bool>,
    pub close: Option<bool>,
}
