use tracing_appender::non_blocking::WorkerGuard;

use crate::config::AppConfig;
use crate::errors::{CourseworkError, Result};

/// 初始化日志
///
/// 开发环境输出带文件名和行号的彩色日志，其他环境输出 JSON。
/// 返回的 guard 需要由宿主保留到进程结束，否则缓冲中的日志会丢失。
pub fn init_tracing(config: &AppConfig) -> Result<WorkerGuard> {
    let stdout_log = std::io::stdout();
    let (non_blocking_writer, guard) = tracing_appender::non_blocking(stdout_log);
    let filter = tracing_subscriber::EnvFilter::new(&config.app.log_level);
    let tracing_format = tracing_subscriber::fmt::format()
        .with_level(true)
        .with_ansi(true);

    let tracing_builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(non_blocking_writer)
        .event_format(tracing_format);

    let result = if config.is_development() {
        tracing_builder
            .with_file(true)
            .with_line_number(true)
            .try_init()
    } else {
        tracing_builder.json().try_init()
    };

    result.map_err(|e| CourseworkError::configuration(format!("日志初始化失败: {e}")))?;

    tracing::debug!(
        "Tracing initialized for {} v{}",
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION")
    );

    Ok(guard)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_tracing_only_once() {
        let config = AppConfig::load().expect("default configuration should load");
        let first = init_tracing(&config);
        assert!(first.is_ok());
        // 全局 subscriber 只能设置一次
        match init_tracing(&config) {
            Err(e) => assert_eq!(e.code(), "E201"),
            Ok(_) => panic!("second initialization should fail"),
        }
    }
}
