// ==========================================
// 季节性生产排程引擎 - 配置层
// ==========================================
// 职责: 输入输出路径、日志级别、产能覆写的加载与覆写
// 存储: JSON 配置文件 + 环境变量
// ==========================================

pub mod config_manager;

// 重导出核心配置管理器
pub use config_manager::{config_keys, ConfigManager, SchedulerConfig};
