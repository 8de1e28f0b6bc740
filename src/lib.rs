//! Coursework Engine - 作业生命周期与提交评估引擎
//!
//! 负责作业指派、多附件校验、提交状态推导、评分校验以及课程月历聚合。
//! 持久化、名册、文件传输和时钟都由宿主应用通过 trait 注入。
//!
//! # 架构
//! - `config`: 配置管理
//! - `errors`: 统一错误处理
//! - `models`: 数据模型定义
//! - `runtime`: 日志初始化与时钟
//! - `services`: 业务逻辑层
//! - `storage`: 协作方接口与内存实现
//! - `utils`: 工具函数

pub mod config;
pub mod errors;
pub mod models;
pub mod runtime;
pub mod services;
pub mod storage;
pub mod utils;

pub use errors::{CourseworkError, ErrorKind, Result};
pub use services::ServiceContext;
