use chrono::FixedOffset;
use config::{Config, ConfigError, Environment, File};
use std::sync::OnceLock;

use super::AppConfig;

static APP_CONFIG: OnceLock<AppConfig> = OnceLock::new();

const MIB: i64 = 1024 * 1024;

const DEFAULT_ALLOWED_TYPES: &[&str] = &[
    "image/*",
    "video/*",
    "application/pdf",
    "application/msword",
    "application/vnd.ms-excel",
    "application/vnd.ms-powerpoint",
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
    "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet",
    "application/vnd.openxmlformats-officedocument.presentationml.presentation",
];

impl AppConfig {
    /// 加载配置
    pub fn load() -> Result<Self, ConfigError> {
        dotenv::dotenv().ok();

        let allowed: Vec<&str> = DEFAULT_ALLOWED_TYPES.to_vec();
        let forum_allowed: Vec<&str> = vec!["image/*", "video/*", "application/pdf"];

        let mut builder = Config::builder()
            // 内置默认值
            .set_default("app.system_name", "Coursework")?
            .set_default("app.environment", "development")?
            .set_default("app.log_level", "info")?
            .set_default("attachments.assignment.max_items", 10i64)?
            .set_default("attachments.assignment.max_file_size", 10 * MIB)?
            .set_default("attachments.assignment.allowed_types", allowed.clone())?
            .set_default("attachments.assignment.verify_content", true)?
            .set_default("attachments.submission.max_items", 5i64)?
            .set_default("attachments.submission.max_file_size", 10 * MIB)?
            .set_default("attachments.submission.allowed_types", allowed)?
            .set_default("attachments.submission.verify_content", true)?
            .set_default("attachments.forum.max_items", 5i64)?
            .set_default("attachments.forum.max_file_size", 5 * MIB)?
            .set_default("attachments.forum.allowed_types", forum_allowed)?
            .set_default("attachments.forum.verify_content", true)?
            .set_default("grading.passing_score", 70.0)?
            .set_default("calendar.utc_offset_minutes", 0i64)?
            // 然后加载默认配置文件
            .add_source(File::with_name("config").required(false))
            // 根据环境加载特定配置文件
            .add_source(
                File::with_name(&format!(
                    "config.{}",
                    std::env::var("APP_ENV").unwrap_or_else(|_| "development".into())
                ))
                .required(false),
            )
            // 最后加载环境变量覆盖
            .add_source(
                Environment::with_prefix("COURSEWORK")
                    .separator("__")
                    .try_parsing(true),
            );

        builder = builder
            .set_override_option("app.environment", std::env::var("APP_ENV").ok())?
            .set_override_option("app.log_level", std::env::var("RUST_LOG").ok())?;

        let config = builder.build()?;
        let app_config: AppConfig = config.try_deserialize()?;

        if app_config.calendar_offset().is_none() {
            return Err(ConfigError::Message(format!(
                "calendar.utc_offset_minutes 超出范围: {}",
                app_config.calendar.utc_offset_minutes
            )));
        }

        Ok(app_config)
    }

    /// 获取全局配置实例
    pub fn get() -> &'static AppConfig {
        APP_CONFIG.get_or_init(|| {
            Self::load().unwrap_or_else(|e| {
                eprintln!("Failed to load configuration: {e}");
                std::process::exit(1);
            })
        })
    }

    /// 初始化配置 (在宿主应用启动时调用)
    pub fn init() -> Result<(), ConfigError> {
        let config = Self::load()?;
        APP_CONFIG
            .set(config)
            .map_err(|_| ConfigError::Message("Configuration already initialized".to_string()))?;
        Ok(())
    }

    /// 检查是否为生产环境
    pub fn is_production(&self) -> bool {
        self.app.environment == "production"
    }

    /// 检查是否为开发环境
    pub fn is_development(&self) -> bool {
        self.app.environment == "development"
    }

    /// 日历使用的时区偏移
    pub fn calendar_offset(&self) -> Option<FixedOffset> {
        self.calendar
            .utc_offset_minutes
            .checked_mul(60)
            .and_then(FixedOffset::east_opt)
    }
}
