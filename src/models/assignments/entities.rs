use std::collections::BTreeSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::models::attachments::entities::AttachmentSet;

/// 作业提交方式
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "../frontend/src/types/generated/assignment.ts")]
pub enum DeliveryType {
    File,
    Text,
    Multimedia,
    Link,
    InPerson,
    Group,
}

/// 作业发布状态（唯一需要显式存储的工作流标记）
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "../frontend/src/types/generated/assignment.ts")]
pub enum AssignmentStatus {
    #[default]
    Draft,
    Published,
}

/// 作业当前所处状态（由截止时间、发布状态和关闭标记推导，不存储）
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "../frontend/src/types/generated/assignment.ts")]
pub enum AssignmentState {
    Draft,
    Open,
    Overdue,
    Closed,
}

/// 前端表单提交的指派方式
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "../frontend/src/types/generated/assignment.ts")]
pub enum TargetingMode {
    All,
    Selected,
}

/// 作业指派对象
///
/// `All` 每次都按当前名册解析；`Selected` 保存固定的成员集合，
/// 解析时与当前名册取交集。`Selected` 至少包含一个成员。
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, TS)]
#[serde(tag = "mode", rename_all = "snake_case")]
#[ts(export, export_to = "../frontend/src/types/generated/assignment.ts")]
pub enum Targeting {
    All,
    Selected { participant_ids: BTreeSet<i64> },
}

impl Targeting {
    pub fn mode(&self) -> TargetingMode {
        match self {
            Targeting::All => TargetingMode::All,
            Targeting::Selected { .. } => TargetingMode::Selected,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/assignment.ts")]
pub struct Assignment {
    // 唯一 ID
    pub id: i64,
    // 所属课程 ID
    pub course_id: i64,
    // 所属学习模块 ID
    pub module_id: i64,
    // 作业标题（3-200 字符）
    pub title: String,
    // 作业描述
    pub description: String,
    // 评分标准
    pub criteria: String,
    // 提交方式
    pub delivery_type: DeliveryType,
    // 截止时间
    pub deadline: DateTime<Utc>,
    // 指派对象
    pub targeting: Targeting,
    // 作业附件
    pub attachments: AttachmentSet,
    // 发布状态
    pub status: AssignmentStatus,
    // 教师手动关闭的时间，关闭后不再接受提交
    pub closed_at: Option<DateTime<Utc>>,
    // 创建者 ID
    pub created_by: i64,
    // 作业创建时间
    pub created_at: DateTime<Utc>,
    // 作业更新时间
    pub updated_at: DateTime<Utc>,
}

impl Assignment {
    pub fn is_closed(&self) -> bool {
        self.closed_at.is_some()
    }

    pub fn is_published(&self) -> bool {
        self.status == AssignmentStatus::Published
    }
}
