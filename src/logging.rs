// ==========================================
// 日志系统初始化
// ==========================================
// 使用 tracing 和 tracing-subscriber
// 过滤器优先级: RUST_LOG > 配置的 log_filter > info
// 输出格式: 文本（默认）或 JSON 行（便于日志采集）
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt as stdfmt;
use std::str::FromStr;
use tracing_subscriber::{fmt, EnvFilter};

/// 日志输出格式
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

impl stdfmt::Display for LogFormat {
    fn fmt(&self, f: &mut stdfmt::Formatter<'_>) -> stdfmt::Result {
        match self {
            LogFormat::Text => write!(f, "text"),
            LogFormat::Json => write!(f, "json"),
        }
    }
}

impl FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(LogFormat::Text),
            "json" => Ok(LogFormat::Json),
            other => Err(format!("未知日志格式: {}", other)),
        }
    }
}

/// 构造过滤器；`default_filter` 非法时回退到 info
fn build_filter(default_filter: &str) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_filter))
        .unwrap_or_else(|_| EnvFilter::new("info"))
}

/// 初始化日志系统
///
/// # 参数
/// - `default_filter`: 未设置 RUST_LOG 时使用的过滤器，
///   例如 "debug" 或 "production_scheduler=trace"
/// - `format`: 输出格式
///
/// 重复调用时保留首次安装的订阅者
///
/// # 示例
/// ```no_run
/// use production_scheduler::logging::{self, LogFormat};
/// logging::init("info", LogFormat::Text);
/// ```
pub fn init(default_filter: &str, format: LogFormat) {
    let builder = fmt()
        .with_env_filter(build_filter(default_filter))
        .with_target(true)
        .with_line_number(true);

    let _ = match format {
        LogFormat::Text => builder.with_thread_ids(false).try_init(),
        LogFormat::Json => builder.json().flatten_event(true).try_init(),
    };
}

/// 初始化测试环境的日志系统
pub fn init_test() {
    let _ = fmt()
        .with_env_filter(EnvFilter::new("debug"))
        .with_test_writer()
        .try_init();
}
