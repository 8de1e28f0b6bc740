//! 统一错误处理模块
//!
//! 使用宏自动生成错误类型，支持错误代码、类型名称和错误分类。
//! 调用方通过 `kind()` 区分可修正的校验错误与协作方故障。

use std::fmt;

/// 错误分类
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// 输入校验失败，调用方修正后可重新提交
    Validation,
    /// 外部协作方（名册、持久化、文件传输）失败
    Collaborator,
    /// 配置、序列化等内部错误
    Internal,
}

/// 定义错误类型的宏
///
/// 自动生成：
/// - enum 定义
/// - code() 方法 - 返回错误代码
/// - error_type() 方法 - 返回错误类型名称
/// - kind() 方法 - 返回错误分类
/// - message() 方法 - 返回错误详情
/// - 便捷构造函数
macro_rules! define_coursework_errors {
    ($(
        $variant:ident($code:literal, $type_name:literal, $kind:ident)
    ),* $(,)?) => {
        #[derive(Debug, Clone, PartialEq)]
        pub enum CourseworkError {
            $($variant(String),)*
        }

        impl CourseworkError {
            /// 获取错误代码
            pub fn code(&self) -> &'static str {
                match self {
                    $(CourseworkError::$variant(_) => $code,)*
                }
            }

            /// 获取错误类型名称
            pub fn error_type(&self) -> &'static str {
                match self {
                    $(CourseworkError::$variant(_) => $type_name,)*
                }
            }

            /// 获取错误分类
            pub fn kind(&self) -> ErrorKind {
                match self {
                    $(CourseworkError::$variant(_) => ErrorKind::$kind,)*
                }
            }

            /// 获取错误详情
            pub fn message(&self) -> &str {
                match self {
                    $(CourseworkError::$variant(msg) => msg,)*
                }
            }
        }

        // 生成便捷构造函数
        paste::paste! {
            impl CourseworkError {
                $(
                    pub fn [<$variant:snake>]<T: Into<String>>(msg: T) -> Self {
                        CourseworkError::$variant(msg.into())
                    }
                )*
            }
        }
    };
}

define_coursework_errors! {
    // 校验错误
    EmptySelection("E001", "Empty Selection", Validation),
    ScoreOutOfRange("E002", "Score Out Of Range", Validation),
    ScoreMissing("E003", "Score Missing", Validation),
    EmptyUrl("E004", "Empty URL", Validation),
    FileTooLarge("E005", "File Too Large", Validation),
    UnsupportedType("E006", "Unsupported Type", Validation),
    MaxItemsExceeded("E007", "Max Items Exceeded", Validation),
    InvalidTitle("E008", "Invalid Title", Validation),
    InvalidMonth("E009", "Invalid Month", Validation),
    AssignmentClosed("E010", "Assignment Closed", Validation),
    AssignmentNotPublished("E011", "Assignment Not Published", Validation),
    NotAnObligor("E012", "Not An Obligor", Validation),
    NotSubmitted("E013", "Not Submitted", Validation),
    // 协作方错误
    RosterUnavailable("E101", "Roster Unavailable", Collaborator),
    Persistence("E102", "Persistence Error", Collaborator),
    Transport("E103", "Transport Error", Collaborator),
    NotFound("E104", "Resource Not Found", Collaborator),
    // 内部错误
    Configuration("E201", "Configuration Error", Internal),
    Serialization("E202", "Serialization Error", Internal),
    DateParse("E203", "Date Parse Error", Internal),
}

impl CourseworkError {
    /// 是否为校验错误（可由调用方修正输入后重试）
    pub fn is_validation(&self) -> bool {
        self.kind() == ErrorKind::Validation
    }

    /// 是否为协作方故障（提示用户稍后再试）
    pub fn is_collaborator(&self) -> bool {
        self.kind() == ErrorKind::Collaborator
    }

    /// 格式化为彩色输出（用于开发环境）
    #[cfg(debug_assertions)]
    pub fn format_colored(&self) -> String {
        format!(
            "\x1b[1;31m[ERROR]\x1b[0m \x1b[33m{}\x1b[0m \x1b[31m{}\x1b[0m\n  {}",
            self.code(),
            self.error_type(),
            self.message()
        )
    }

    /// 格式化为简洁输出
    pub fn format_simple(&self) -> String {
        format!("{}: {}", self.error_type(), self.message())
    }
}

impl fmt::Display for CourseworkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for CourseworkError {}

impl From<config::ConfigError> for CourseworkError {
    fn from(err: config::ConfigError) -> Self {
        CourseworkError::Configuration(err.to_string())
    }
}

impl From<serde_json::Error> for CourseworkError {
    fn from(err: serde_json::Error) -> Self {
        CourseworkError::Serialization(err.to_string())
    }
}

impl From<chrono::ParseError> for CourseworkError {
    fn from(err: chrono::ParseError) -> Self {
        CourseworkError::DateParse(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, CourseworkError>;
