// ==========================================
// 季节性生产排程引擎 - 配置管理器
// ==========================================
// 职责: 配置加载、环境变量覆写、快照
// 来源优先级: 命令行 > 环境变量 > 配置文件 > 默认值
// ==========================================

use crate::domain::factory::CapacityOverride;
use crate::logging::LogFormat;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// 默认配置目录名（位于系统配置目录下）
pub const CONFIG_DIR_NAME: &str = "production-scheduler";
pub const CONFIG_FILE_NAME: &str = "config.json";

// ==========================================
// SchedulerConfig - 排程配置
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SchedulerConfig {
    pub forecast_path: PathBuf,
    pub factory_path: PathBuf,
    pub output_path: PathBuf,
    pub log_filter: String,
    pub log_format: LogFormat,
    pub capacity_override: Option<CapacityOverride>,
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        Self {
            forecast_path: PathBuf::from("forecast.json"),
            factory_path: PathBuf::from("factory_info.json"),
            output_path: PathBuf::from("daily_production_schedule.csv"),
            log_filter: "info".to_string(),
            log_format: LogFormat::Text,
            capacity_override: None,
        }
    }
}

// ==========================================
// ConfigManager - 配置管理器
// ==========================================
pub struct ConfigManager {
    config: SchedulerConfig,
}

impl ConfigManager {
    /// 使用默认配置
    pub fn new() -> Self {
        Self {
            config: SchedulerConfig::default(),
        }
    }

    /// 从 JSON 配置文件加载（缺失的键取默认值）
    ///
    /// # 参数
    /// - path: 配置文件路径
    pub fn load(path: &Path) -> Result<Self, Box<dyn Error>> {
        let raw = fs::read_to_string(path)
            .map_err(|e| format!("配置文件读取失败 ({}): {}", path.display(), e))?;
        let config: SchedulerConfig = serde_json::from_str(&raw)?;

        info!(path = %path.display(), "配置文件加载完成");
        Ok(Self { config })
    }

    /// 从默认位置加载: <config_dir>/production-scheduler/config.json
    ///
    /// 文件不存在时使用默认配置
    pub fn load_default() -> Result<Self, Box<dyn Error>> {
        match Self::default_config_path() {
            Some(path) if path.exists() => Self::load(&path),
            Some(path) => {
                debug!(path = %path.display(), "未找到配置文件，使用默认配置");
                Ok(Self::new())
            }
            None => Ok(Self::new()),
        }
    }

    /// 默认配置文件路径
    pub fn default_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
    }

    /// 应用环境变量覆写
    pub fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    /// 应用任意来源的覆写（键名见 config_keys）
    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(v) = non_empty(config_keys::FORECAST_PATH) {
            self.config.forecast_path = PathBuf::from(v.trim());
        }
        if let Some(v) = non_empty(config_keys::FACTORY_PATH) {
            self.config.factory_path = PathBuf::from(v.trim());
        }
        if let Some(v) = non_empty(config_keys::OUTPUT_PATH) {
            self.config.output_path = PathBuf::from(v.trim());
        }
        if let Some(v) = non_empty(config_keys::LOG_FILTER) {
            self.config.log_filter = v.trim().to_string();
        }
        if let Some(v) = non_empty(config_keys::LOG_FORMAT) {
            match v.parse::<LogFormat>() {
                Ok(format) => self.config.log_format = format,
                Err(e) => warn!(
                    key = config_keys::LOG_FORMAT,
                    "{}，保持 {}",
                    e,
                    self.config.log_format
                ),
            }
        }
    }

    pub fn config(&self) -> &SchedulerConfig {
        &self.config
    }

    pub fn config_mut(&mut self) -> &mut SchedulerConfig {
        &mut self.config
    }

    pub fn into_config(self) -> SchedulerConfig {
        self.config
    }

    /// 获取配置快照（JSON 格式），随排程日志记录
    pub fn get_config_snapshot(&self) -> Result<String, Box<dyn Error>> {
        Ok(serde_json::to_string(&self.config)?)
    }
}

impl Default for ConfigManager {
    fn default() -> Self {
        Self::new()
    }
}

// ==========================================
// 配置键常量
// ==========================================
pub mod config_keys {
    // 输入
    pub const FORECAST_PATH: &str = "PRODUCTION_SCHEDULER_FORECAST";
    pub const FACTORY_PATH: &str = "PRODUCTION_SCHEDULER_FACTORY";

    // 输出
    pub const OUTPUT_PATH: &str = "PRODUCTION_SCHEDULER_OUTPUT";

    // 日志
    pub const LOG_FILTER: &str = "PRODUCTION_SCHEDULER_LOG";
    pub const LOG_FORMAT: &str = "PRODUCTION_SCHEDULER_LOG_FORMAT";
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = ConfigManager::new().into_config();
        assert_eq!(config.forecast_path, PathBuf::from("forecast.json"));
        assert_eq!(config.output_path, PathBuf::from("daily_production_schedule.csv"));
        assert_eq!(config.log_filter, "info");
        assert!(config.capacity_override.is_none());
    }

    #[test]
    fn test_load_partial_file_uses_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"output_path": "out.csv", "capacity_override": {{"machine_efficiency": 0.8}}}}"#
        )
        .unwrap();

        let config = ConfigManager::load(file.path()).unwrap().into_config();
        assert_eq!(config.output_path, PathBuf::from("out.csv"));
        assert_eq!(config.factory_path, PathBuf::from("factory_info.json"));
        let o = config.capacity_override.unwrap();
        assert_eq!(o.machine_efficiency, Some(0.8));
        assert!(o.downtime_schedule.is_none());
    }

    #[test]
    fn test_load_missing_file_fails() {
        assert!(ConfigManager::load(Path::new("/nonexistent/config.json")).is_err());
    }

    #[test]
    fn test_overrides_skip_blank_values() {
        let vars: HashMap<&str, &str> = [
            (config_keys::FORECAST_PATH, "data/forecast.json"),
            (config_keys::OUTPUT_PATH, "   "),
            (config_keys::LOG_FILTER, "debug"),
            (config_keys::LOG_FORMAT, "Json"),
        ]
        .into_iter()
        .collect();

        let mut manager = ConfigManager::new();
        manager.apply_overrides(|key| vars.get(key).map(|v| v.to_string()));

        let config = manager.config();
        assert_eq!(config.forecast_path, PathBuf::from("data/forecast.json"));
        assert_eq!(config.output_path, PathBuf::from("daily_production_schedule.csv"));
        assert_eq!(config.log_filter, "debug");
        assert_eq!(config.log_format, LogFormat::Json);
    }

    #[test]
    fn test_unknown_log_format_keeps_current() {
        let mut manager = ConfigManager::new();
        manager.apply_overrides(|key| {
            (key == config_keys::LOG_FORMAT).then(|| "yaml".to_string())
        });
        assert_eq!(manager.config().log_format, LogFormat::Text);
    }

    #[test]
    fn test_snapshot_is_json() {
        let snapshot = ConfigManager::new().get_config_snapshot().unwrap();
        let value: serde_json::Value = serde_json::from_str(&snapshot).unwrap();
        assert_eq!(value["log_filter"], "info");
    }
}
