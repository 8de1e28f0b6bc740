use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::config::{AppConfig, AttachmentLimits};

/// 附件所属场景
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "../frontend/src/types/generated/attachment.ts")]
pub enum AttachmentContext {
    Assignment, // 作业创建/编辑
    Submission, // 学生提交
    Forum,      // 论坛/消息
}

impl std::fmt::Display for AttachmentContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AttachmentContext::Assignment => write!(f, "assignment"),
            AttachmentContext::Submission => write!(f, "submission"),
            AttachmentContext::Forum => write!(f, "forum"),
        }
    }
}

/// 附件校验策略，由配置生成
#[derive(Debug, Clone, PartialEq)]
pub struct AttachmentPolicy {
    pub max_items: Option<usize>,
    pub max_file_size: usize,
    pub allowed_types: Vec<String>,
    pub verify_content: bool,
}

impl AttachmentPolicy {
    /// 获取指定场景的附件策略
    pub fn for_context(config: &AppConfig, context: AttachmentContext) -> Self {
        let limits = match context {
            AttachmentContext::Assignment => &config.attachments.assignment,
            AttachmentContext::Submission => &config.attachments.submission,
            AttachmentContext::Forum => &config.attachments.forum,
        };
        Self::from(limits)
    }
}

impl From<&AttachmentLimits> for AttachmentPolicy {
    fn from(limits: &AttachmentLimits) -> Self {
        Self {
            max_items: limits.max_items,
            max_file_size: limits.max_file_size,
            allowed_types: limits.allowed_types.clone(),
            verify_content: limits.verify_content,
        }
    }
}
