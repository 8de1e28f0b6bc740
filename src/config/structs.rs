use serde::{Deserialize, Serialize};

/// 应用配置结构体
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub app: AppSettings,
    pub attachments: AttachmentsConfig,
    pub grading: GradingConfig,
    pub calendar: CalendarConfig,
}

/// 应用设置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppSettings {
    pub system_name: String,
    pub environment: String,
    pub log_level: String,
}

/// 各场景下的附件限制
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AttachmentsConfig {
    pub assignment: AttachmentLimits,
    pub submission: AttachmentLimits,
    pub forum: AttachmentLimits,
}

/// 单个场景的附件限制
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AttachmentLimits {
    pub max_items: Option<usize>,   // 附件总数上限，None 表示不限制
    pub max_file_size: usize,       // 单文件最大字节数
    pub allowed_types: Vec<String>, // 允许的 MIME 类型，支持 "image/*" 形式
    #[serde(default)]
    pub verify_content: bool, // 是否校验文件头魔术字节
}

/// 评分配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GradingConfig {
    pub passing_score: f64, // 及格线（仅用于展示标签）
}

/// 日历配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalendarConfig {
    pub utc_offset_minutes: i32, // 日历按此时区偏移划分日期
}
